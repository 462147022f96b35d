//! Admin panel: bulk CSV import, preview, and export.

use eframe::egui::{self, Align, CornerRadius, Layout, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{FILE_CSV, FILE_XLS};

use super::app::{App, ImportState};
use super::components::{back_button, colors, panel_header};

/// Panel action requested by the user.
pub enum Action {
    None,
    GoBack,
    StartImport,
    ExportCsv,
    ExportExcel,
}

/// Show the admin panel.
pub fn show(app: &mut App, ui: &mut Ui) -> Action {
    let mut action = Action::None;

    if back_button(ui) {
        action = Action::GoBack;
    }

    panel_header(ui, "Admin Panel");

    // Bulk upload section
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Bulk Upload").strong());
            ui.add_space(10.0);

            let uploading = matches!(app.import_state, ImportState::Uploading);

            ui.horizontal(|ui| {
                let label = if uploading { "Processing..." } else { "Select CSV File" };
                if ui.add_enabled(!uploading, egui::Button::new(label)).clicked() {
                    action = Action::StartImport;
                }

                if uploading {
                    ui.spinner();
                }
            });

            ui.add_space(5.0);
            ui.label(
                RichText::new("Upload a CSV file with influencer data. The first row should contain headers.")
                    .weak(),
            );

            match &app.import_state {
                ImportState::Completed { records } => {
                    ui.add_space(5.0);
                    ui.colored_label(colors::SUCCESS, format!("Successfully imported {} records!", records));
                }
                ImportState::Failed(e) => {
                    ui.add_space(5.0);
                    ui.colored_label(colors::ERROR, format!("Import failed: {}", e));
                }
                _ => {}
            }
        });

    ui.add_space(20.0);

    // Preview and export section
    if !app.table.is_empty() {
        egui::Frame::new()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(Margin::same(15))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Uploaded Data Preview").strong());

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(format!("{} Export to Excel", FILE_XLS)).clicked() {
                            action = Action::ExportExcel;
                        }
                        if ui.button(format!("{} Export to CSV", FILE_CSV)).clicked() {
                            action = Action::ExportCsv;
                        }
                    });
                });

                ui.add_space(10.0);

                show_preview_table(app, ui);
            });
    }

    action
}

fn show_preview_table(app: &App, ui: &mut Ui) {
    let table = &app.table;
    let preview_len = table.preview().len();

    ScrollArea::horizontal().id_salt("preview_scroll").show(ui, |ui| {
        egui::Grid::new("preview_grid")
            .num_columns(table.columns().len())
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                for column in table.columns() {
                    ui.strong(column);
                }
                ui.end_row();

                // Data rows
                for row_index in 0..preview_len {
                    for column in table.columns() {
                        ui.label(table.cell(row_index, column));
                    }
                    ui.end_row();
                }
            });
    });

    let remaining = table.remaining_after_preview();
    if remaining > 0 {
        ui.add_space(5.0);
        ui.label(
            RichText::new(format!(
                "Showing first {} of {} records",
                preview_len,
                table.len()
            ))
            .weak(),
        );
    }
}
