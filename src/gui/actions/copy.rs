// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = file::export_string(export, &app.rows);
    logf!(
        "Copy: rows={}, format={:?}, headers={}",
        app.rows.len(),
        export.format,
        export.include_headers
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
