// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    // normalize out_path first so the field shows what actually gets written
    if app.state.gui.out_path_dirty {
        app.state.apply_out_path_text();
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
    }
    app.state.gui.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();

    if app.rows.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    logf!(
        "Export: Begin rows={}, format={:?}, headers={}",
        app.rows.len(),
        export.format,
        export.include_headers
    );

    let msg = match file::write_export(export, &app.rows) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported {} row(s) → {}", app.rows.len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(msg);
    app.save_settings();
}
