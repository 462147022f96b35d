//! Sign-in panel.

use eframe::egui::{self, RichText, Ui};

use super::app::App;

/// Show the login panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        ui.label(RichText::new("Influencer Desk").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Sign in to manage influencer profiles").size(14.0).weak());

        ui.add_space(40.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(320.0);
            ui.add_space(10.0);

            egui::Grid::new("login_grid")
                .num_columns(2)
                .spacing([20.0, 12.0])
                .show(ui, |ui| {
                    ui.label("Email:");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.login_email)
                            .desired_width(200.0)
                            .hint_text("you@example.com"),
                    );
                    ui.end_row();

                    ui.label("Password:");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.login_password)
                            .desired_width(200.0)
                            .password(true),
                    );
                    ui.end_row();
                });

            ui.add_space(15.0);

            if ui.button(RichText::new("Sign In").size(14.0)).clicked() {
                app.sign_in();
            }

            ui.add_space(10.0);
        });
    });
}
