// src/gui/components/summary.rs
use eframe::egui::{self, widgets::Spinner};
use crate::{data::Tally, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let t = Tally::of(&app.rows);

    ui.add(
        egui::ProgressBar::new(t.fraction())
            .text(format!("Processed {}/{}", t.processed, t.total)),
    );

    ui.horizontal(|ui| {
        ui.label(format!("Success {}, Errors {}, Pending {}", t.succeeded, t.failed, t.pending));
        if app.running {
            ui.add(Spinner::new().size(14.0));
        }
        if let Some(id) = &app.current {
            ui.label(format!("Processing: {id}"));
        }
    });
}
