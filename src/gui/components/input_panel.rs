// src/gui/components/input_panel.rs
//
// Left panel: input box, URL toggle, request settings, Start / Stop / Clear.

use eframe::egui;
use crate::{
    config::options::InputMode,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Videos");

    help(ui);

    let locked = app.running;
    let scrape = &mut app.state.options.scrape;

    let mut urls = scrape.input_mode.is_urls();
    if ui
        .add_enabled(!locked, egui::Checkbox::new(&mut urls, "Lines are full URLs"))
        .changed()
    {
        scrape.input_mode = InputMode::from_urls_flag(urls);
        logf!("UI: Input mode → {:?}", scrape.input_mode);
    }

    egui::CollapsingHeader::new("Request settings")
        .default_open(false)
        .show(ui, |ui| {
            ui.add_enabled_ui(!locked, |ui| {
                let delay = &mut scrape.delay;
                ui.horizontal(|ui| {
                    ui.label("Delay:");
                    ui.add(egui::DragValue::new(&mut delay.min_secs).range(0.0..=60.0).speed(0.1).suffix(" s"));
                    ui.label("to");
                    ui.add(egui::DragValue::new(&mut delay.max_secs).range(0.0..=60.0).speed(0.1).suffix(" s"));
                });
                if delay.max_secs < delay.min_secs {
                    delay.max_secs = delay.min_secs;
                }

                ui.horizontal(|ui| {
                    ui.label("Timeout:");
                    ui.add(egui::DragValue::new(&mut scrape.timeout_secs).range(1..=120).suffix(" s"));
                });

                ui.label("User-Agents (one per line):");
                ui.add(
                    egui::TextEdit::multiline(&mut app.state.gui.user_agents_text)
                        .font(egui::TextStyle::Monospace)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
            });
        });

    ui.separator();

    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Start")).clicked() {
            actions::start(app, ui.ctx());
        }
        if ui.add_enabled(app.running, egui::Button::new("Stop")).clicked() {
            actions::stop(app);
        }
        if ui.button("Clear").clicked() {
            actions::clear(app);
        }
    });

    ui.separator();

    let hint = if app.state.options.scrape.input_mode.is_urls() {
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    } else {
        "dQw4w9WgXcQ"
    };
    egui::ScrollArea::vertical()
        .id_salt("input_scroll")
        .show(ui, |ui| {
            ui.add_enabled(
                !app.running,
                egui::TextEdit::multiline(&mut app.state.gui.input_text)
                    .hint_text(hint)
                    .font(egui::TextStyle::Monospace)
                    .desired_rows(20)
                    .desired_width(f32::INFINITY),
            );
        });
}

fn help(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("Help")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(
                "One video per line. The id is the part after `v=`: for \
                 https://www.youtube.com/watch?v=dQw4w9WgXcQ it is dQw4w9WgXcQ.",
            );
            ui.label(
                "Every video waits a few seconds before its request, so 100+ ids \
                 take a while. Progress and finished rows show up as they come in.",
            );

            ui.add_space(4.0);
            ui.strong("If things go wrong");
            ui.label(
                "• Many errors in a row: YouTube may be throttling your IP. \
                 Stop, wait, and run the rest later with a longer delay.",
            );
            ui.label(
                "• Everything \"Invalid video ID format\": check \"Lines are full URLs\" \
                 matches what you pasted. Bare ids are exactly 11 characters.",
            );
            ui.label(
                "• \"Could not extract view count\": the page layout changed or \
                 the video is private or removed.",
            );
        });
}
