//! Three-step influencer intake form panel.

use eframe::egui::{self, Align, Layout, RichText, Ui};

use crate::intake::{CATEGORIES, ENGAGEMENT_RATES, PLATFORMS, Step};

use super::app::App;
use super::components::{back_button, choice_row, panel_header};

/// Panel action requested by the user.
pub enum Action {
    None,
    GoBack,
    Submit,
}

/// Show the intake form panel.
pub fn show(app: &mut App, ui: &mut Ui) -> Action {
    let mut action = Action::None;

    if back_button(ui) {
        action = Action::GoBack;
    }

    panel_header(ui, "Influencer Profile");

    ui.vertical_centered(|ui| {
        ui.set_max_width(560.0);

        // Step indicator
        let current = app.intake.step();
        ui.horizontal(|ui| {
            for step in Step::ALL {
                let reached = step.number() <= current.number();
                let text = format!("{}  {}", step.number(), step.title());
                if reached {
                    ui.label(RichText::new(text).strong());
                } else {
                    ui.label(RichText::new(text).weak());
                }
                if step.number() < Step::ALL.len() {
                    ui.separator();
                }
            }
        });

        ui.add_space(20.0);

        match current {
            Step::Profile => show_profile_step(app, ui),
            Step::Audience => show_audience_step(app, ui),
            Step::Preferences => show_preferences_step(app, ui),
        }

        ui.add_space(30.0);
        ui.separator();
        ui.add_space(10.0);

        // Navigation buttons
        ui.horizontal(|ui| {
            if current != Step::Profile && ui.button("< Back").clicked() {
                app.intake.back();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if app.intake.is_last_step() {
                    if ui.button("Submit").clicked() {
                        action = Action::Submit;
                    }
                } else if ui.button("Next >").clicked() {
                    app.intake.next();
                }
            });
        });
    });

    action
}

fn show_profile_step(app: &mut App, ui: &mut Ui) {
    ui.heading("Basic Information");
    ui.add_space(15.0);

    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.add(
            egui::TextEdit::singleline(&mut app.intake.record.name)
                .desired_width(300.0)
                .hint_text("Display name"),
        );
    });

    ui.add_space(15.0);

    ui.label("Primary Platform:");
    ui.add_space(5.0);
    if let Some(platform) = choice_row(ui, &app.intake.record.platform, &PLATFORMS) {
        app.intake.record.platform = platform;
    }
}

fn show_audience_step(app: &mut App, ui: &mut Ui) {
    ui.heading("Audience Details");
    ui.add_space(15.0);

    ui.horizontal(|ui| {
        ui.label("Audience Size:");
        ui.add(
            egui::TextEdit::singleline(&mut app.intake.record.audience_size)
                .desired_width(300.0)
                .hint_text("e.g., 50,000"),
        );
    });

    ui.add_space(15.0);

    ui.label("Engagement Rate:");
    ui.add_space(5.0);
    if let Some(rate) = choice_row(ui, &app.intake.record.engagement_rate, &ENGAGEMENT_RATES) {
        app.intake.record.engagement_rate = rate;
    }
}

fn show_preferences_step(app: &mut App, ui: &mut Ui) {
    ui.heading("Content Preferences");
    ui.add_space(15.0);

    ui.label("Categories:");
    ui.add_space(5.0);
    ui.horizontal_wrapped(|ui| {
        for category in CATEGORIES {
            let selected = app.intake.record.categories.iter().any(|c| c == category);
            if ui.selectable_label(selected, category).clicked() {
                app.intake.toggle_category(category);
            }
        }
    });

    ui.add_space(15.0);

    ui.label("Preferred Brands (comma separated):");
    ui.add_space(5.0);

    // The field always redisplays the parsed list, never the raw keystrokes.
    let mut brands_text = app.intake.preferred_brands_display();
    let response = ui.add(
        egui::TextEdit::singleline(&mut brands_text)
            .desired_width(400.0)
            .hint_text("e.g., Nike, Adidas, Apple"),
    );
    if response.changed() {
        app.intake.set_preferred_brands(&brands_text);
    }
}
