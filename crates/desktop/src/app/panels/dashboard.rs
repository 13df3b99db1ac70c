use eframe::egui::{self, RichText, Ui};

use crate::app::PortalApp;

impl PortalApp {
    pub(crate) fn render_dashboard(&mut self, ui: &mut Ui) {
        ui.heading("Company News");
        ui.separator();

        if self.news.is_empty() {
            ui.label(RichText::new("No news yet.").weak());
            return;
        }

        for item in &self.news {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&item.title).strong().size(16.0));
                ui.label(RichText::new(format!("{} · {}", item.author, item.date)).small().weak());
                ui.add_space(4.0);
                ui.label(&item.content);
            });
            ui.add_space(6.0);
        }
    }
}
