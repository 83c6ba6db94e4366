// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{
        Arc,
        atomic::AtomicBool,
        mpsc::Receiver,
    },
};

use eframe::egui;

use crate::config::{settings, state::AppState};

use super::{actions, components, progress::WorkerMsg};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let settings_path = settings::default_path();
    let state = AppState::from_settings(settings::load(&settings_path));
    eframe::run_native(
        "YouTube View Counter",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, settings_path)))),
    )?;
    Ok(())
}

/// Handle on the background scrape thread.
pub struct Worker {
    pub rx: Receiver<WorkerMsg>,
    pub stop: Arc<AtomicBool>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub settings_path: PathBuf,

    // the result list for the current run; the worker only sends row updates
    pub rows: Vec<crate::data::ResultRow>,

    pub status: String,
    pub running: bool,
    /// Id being paused on / fetched right now
    pub current: Option<String>,
    pub worker: Option<Worker>,
}

impl App {
    pub fn new(state: AppState, settings_path: PathBuf) -> Self {
        logf!(
            "Init: mode={:?}, agents={}, out={}",
            state.options.scrape.input_mode,
            state.options.scrape.user_agents.len(),
            state.options.export.out_path().display()
        );
        Self {
            state,
            settings_path,
            rows: Vec::new(),
            status: s!("Idle"),
            running: false,
            current: None,
            worker: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Persist last input + options. Failure only costs the next session its defaults.
    pub fn save_settings(&self) {
        match settings::save(&self.settings_path, &self.state.to_settings()) {
            Ok(()) => logd!("Settings: saved → {}", self.settings_path.display()),
            Err(e) => loge!("Settings: save failed {}: {}", self.settings_path.display(), e),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::SidePanel::left("input")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                components::input_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::summary::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
