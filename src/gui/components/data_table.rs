// src/gui/components/data_table.rs
//
// Results table. Purely a view over App::rows; only visible rows are laid out.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::HEADERS, data::ResultRow, gui::app::App};

const WIDTHS: [f32; 4] = [280.0, 120.0, 110.0, 260.0];
const VIEWS_COL: usize = 2;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let error_color = ui.visuals().error_fg_color;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0);
    for w in WIDTHS {
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.rows.len(), |mut row| {
                let Some(data) = app.rows.get(row.index()) else { return };
                let failed = is_failure(data);

                for (ci, cell) in data.cells().into_iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if failed && ci == HEADERS.len() - 1 {
                            rt = rt.color(error_color);
                        }
                        if ci == VIEWS_COL {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(rt); });
                        } else {
                            ui.label(rt);
                        }
                    });
                }
            });
        });
}

fn is_failure(row: &ResultRow) -> bool {
    match row.result() {
        Some(r) => !r.is_success(),
        None => !row.is_pending(),
    }
}
