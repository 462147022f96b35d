//! Dashboard panel with navigation cards and activity log.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CLIPBOARD_TEXT, TABLE};

use crate::gate::{self, GateDecision};

use super::app::{App, LogLevel, Panel};
use super::components::dashboard_card;

/// Show the dashboard panel.
///
/// Returns `Some(panel)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next_panel = None;

    let identity = app.session.identity().cloned();
    let admin_allowed = matches!(
        gate::check(app.session.identity(), Panel::Admin.allowed_roles()),
        GateDecision::Render
    );

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        // Header
        ui.label(RichText::new("Influencer Desk").size(32.0).strong());
        ui.add_space(5.0);
        if let Some(identity) = &identity {
            ui.label(
                RichText::new(format!("Welcome back, {} ({})", identity.name, identity.role))
                    .size(14.0)
                    .weak(),
            );
        }

        ui.add_space(30.0);

        // Stat cards row
        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 340.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            stat_card(
                ui,
                "Imported Records",
                &app.table.len().to_string(),
                "Rows in the bulk table",
            );
            stat_card(
                ui,
                "Profile Draft",
                app.intake.step().title(),
                "Current intake step",
            );
        });

        ui.add_space(30.0);

        // Navigation cards row
        let num_cards = if admin_allowed { 2.0 } else { 1.0 };
        let available = ui.available_width();
        let spacing = 30.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
        let card_height = card_width * 0.75;
        let card_size = egui::vec2(card_width, card_height);
        let total_width = card_width * num_cards + total_spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);

            if dashboard_card(ui, "New Profile", "Three-step intake form", CLIPBOARD_TEXT, card_size).clicked() {
                next_panel = Some(Panel::Intake);
            }

            if admin_allowed {
                ui.add_space(spacing);

                if dashboard_card(ui, "Admin Panel", "Bulk CSV import & export", TABLE, card_size).clicked() {
                    next_panel = Some(Panel::Admin);
                }
            }
        });

        ui.add_space(30.0);
    });

    // Recent Activity
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(10, 0))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Recent Activity").strong());
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                if app.log_messages.is_empty() {
                    ui.label(RichText::new("No recent activity").weak());
                } else {
                    for entry in app.log_messages.iter().rev().take(10) {
                        let color = match entry.level {
                            LogLevel::Info => Color32::GRAY,
                            LogLevel::Success => Color32::from_rgb(100, 200, 100),
                            LogLevel::Warning => Color32::from_rgb(230, 180, 50),
                            LogLevel::Error => Color32::from_rgb(230, 100, 100),
                        };

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                    .small()
                                    .color(Color32::DARK_GRAY),
                            );
                            ui.label(RichText::new(&entry.message).color(color));
                        });
                    }
                }
            });
        });

    next_panel
}

/// Render a stat card with title, value, and subtitle.
fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(150.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}
