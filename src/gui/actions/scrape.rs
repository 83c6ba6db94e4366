// src/gui/actions/scrape.rs
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{self, TryRecvError},
    },
    thread,
};

use eframe::egui;

use crate::{
    core::{HttpSource, normalize::normalize},
    data::{self, Tally},
    gui::{
        app::{App, Worker},
        progress::{GuiProgress, WorkerMsg},
    },
    scrape::{self, Extractor},
};

/// Normalize the input box, show every row at once, then fetch on a worker thread.
pub fn start(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    if app.state.gui.input_text.trim().is_empty() {
        app.status("Nothing to process: paste some video ids first");
        return;
    }

    app.state.apply_user_agents_text();
    app.save_settings();

    let opts = app.state.options.scrape.clone();
    let lines = normalize(&app.state.gui.input_text, opts.input_mode);
    app.rows = data::rows_from_lines(lines.clone());

    let todo = app.rows.iter().filter(|r| r.is_pending()).count();
    logf!("Scrape: Start lines={} to_fetch={} mode={:?}", app.rows.len(), todo, opts.input_mode);
    if todo == 0 {
        app.status("No valid video ids in the input");
        return;
    }

    let (tx, rx) = mpsc::channel();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_worker = Arc::clone(&stop);
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(tx, ctx);
        let source = match HttpSource::new(&opts) {
            Ok(s) => s,
            Err(e) => {
                loge!("Scrape: Client setup failed: {}", e);
                prog.send(WorkerMsg::Failed(e.to_string()));
                return;
            }
        };
        let mut extractor = Extractor::new(source, opts);
        scrape::run(lines, &mut extractor, Some(&mut prog), Some(&stop_worker));
    });

    app.worker = Some(Worker { rx, stop });
    app.running = true;
    app.current = None;
    app.status(format!("Starting… {todo} video(s)"));
}

/// Ask the worker to stop after the item it is on.
pub fn stop(app: &mut App) {
    if let Some(w) = &app.worker {
        w.stop.store(true, Ordering::Relaxed);
        logf!("Scrape: Stop requested");
        app.status("Stopping after the current video…");
    }
}

/// Stop any run and empty the table.
pub fn clear(app: &mut App) {
    if let Some(w) = app.worker.take() {
        w.stop.store(true, Ordering::Relaxed);
        logf!("Scrape: Cleared while running; worker detached");
    }
    app.rows.clear();
    app.running = false;
    app.current = None;
    app.status("Cleared");
}

/// Drain worker messages into the result list. Called once per frame.
pub fn poll(app: &mut App) {
    loop {
        let Some(w) = &app.worker else { return };
        let msg = match w.rx.try_recv() {
            Ok(m) => m,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                loge!("Scrape: Worker ended without finishing");
                finish(app, s!("Worker ended unexpectedly"));
                return;
            }
        };

        match msg {
            WorkerMsg::Log(text) => app.status(text),
            WorkerMsg::Started { row, video_id } => {
                logd!("Scrape: row {} → {}", row, video_id);
                app.current = Some(video_id);
            }
            WorkerMsg::Done { row, result } => {
                match app.rows.get_mut(row) {
                    Some(r) => {
                        if !r.attach(result) {
                            loge!("Scrape: Duplicate result for row {}", row);
                        }
                    }
                    None => loge!("Scrape: Result for unknown row {}", row),
                }
            }
            WorkerMsg::Finished { stopped } => {
                let t = Tally::of(&app.rows);
                let msg = if stopped {
                    format!("Stopped: {} ok, {} failed, {} not fetched", t.succeeded, t.failed, t.pending)
                } else {
                    format!("Done: {} ok, {} failed", t.succeeded, t.failed)
                };
                finish(app, msg);
                return;
            }
            WorkerMsg::Failed(e) => {
                finish(app, format!("Error: {e}"));
                return;
            }
        }
    }
}

fn finish(app: &mut App, msg: String) {
    app.worker = None;
    app.running = false;
    app.current = None;
    app.status(msg);
}
