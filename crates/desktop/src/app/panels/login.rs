use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular;

use crate::app::PortalApp;

impl PortalApp {
    pub(crate) fn render_login_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading("Sign in to the portal");
                ui.add_space(16.0);

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.login_email)
                        .hint_text("you@stinte.co")
                        .desired_width(280.0),
                );
                let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(8.0);
                if ui.button(format!("{} Sign in", regular::SIGN_IN)).clicked() || submitted {
                    self.sign_in();
                }

                if let Some(error) = &self.login_error {
                    ui.add_space(8.0);
                    ui.label(RichText::new(error).color(Color32::from_rgb(220, 38, 38)));
                }

                ui.add_space(16.0);
                let domains = self.config.allowed_domains.join(", ");
                ui.label(RichText::new(format!("Company accounts only ({})", domains)).weak());
            });
        });
    }
}
