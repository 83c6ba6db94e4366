// src/gui/progress.rs
use std::sync::mpsc::Sender;

use eframe::egui;

use crate::{data::ExtractionResult, progress::Progress};

/// What the scrape worker tells the UI thread.
#[derive(Debug)]
pub enum WorkerMsg {
    Log(String),
    Started { row: usize, video_id: String },
    Done { row: usize, result: ExtractionResult },
    Finished { stopped: bool },
    /// The run could not start at all
    Failed(String),
}

/// Forwards progress events over the channel and wakes the UI.
pub struct GuiProgress {
    tx: Sender<WorkerMsg>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(tx: Sender<WorkerMsg>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }

    pub fn send(&self, msg: WorkerMsg) {
        // UI gone (Clear or window closed): nothing left to tell
        if self.tx.send(msg).is_ok() {
            self.ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.send(WorkerMsg::Log(format!("Fetching {total} video(s)…")));
    }
    fn log(&mut self, msg: &str) {
        self.send(WorkerMsg::Log(s!(msg)));
    }
    fn item_started(&mut self, row: usize, video_id: &str) {
        self.send(WorkerMsg::Started { row, video_id: s!(video_id) });
    }
    fn item_done(&mut self, row: usize, result: &ExtractionResult) {
        self.send(WorkerMsg::Done { row, result: result.clone() });
    }
    fn finish(&mut self, stopped: bool) {
        self.send(WorkerMsg::Finished { stopped });
    }
}
