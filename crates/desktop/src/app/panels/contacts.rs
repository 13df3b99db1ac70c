use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular;
use portal_core::links::{gmail_compose_url, maps_search_url};
use portal_core::ui::{render_table_section, text_cell};
use portal_core::TableKind;

use crate::app::PortalApp;

impl PortalApp {
    pub(crate) fn render_contacts(&mut self, ui: &mut Ui) {
        let mut open_request: Option<String> = None;

        if let Some(info) = &self.company_info {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    if let Some(logo) = info.logo_url.as_deref().filter(|u| !u.is_empty()) {
                        ui.add(egui::Image::new(logo).max_height(48.0));
                    }
                    ui.vertical(|ui| {
                        ui.heading(info.name.as_deref().unwrap_or("Company"));
                        if let Some(address) = &info.address {
                            if ui.link(format!("{} {}", regular::MAP_PIN, address)).clicked() {
                                open_request = Some(maps_search_url(address));
                            }
                        }
                        if let Some(phone) = &info.phone {
                            ui.label(format!("{} {}", regular::PHONE, phone));
                        }
                        if let Some(email) = &info.email {
                            let name = info.name.as_deref().unwrap_or_default();
                            if ui.link(format!("{} {}", regular::ENVELOPE, email)).clicked() {
                                open_request = Some(gmail_compose_url(email, name));
                            }
                        }
                    });
                });
            });
            ui.add_space(12.0);
        }

        let state = self.table_state(TableKind::Contacts);
        render_table_section(ui, TableKind::Contacts, state, |ui, column, record| {
            if column.key != "email" {
                text_cell(ui, column, record);
                return;
            }
            let email = record.display_text("email");
            if email.is_empty() {
                return;
            }
            if ui.link(RichText::new(&email)).clicked() {
                open_request = Some(gmail_compose_url(&email, &record.display_text("name")));
            }
        });

        if let Some(url) = open_request {
            self.open_url(&url);
        }
    }
}
