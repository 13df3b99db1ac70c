//! UI panels for each portal page

mod calendar;
mod contacts;
mod dashboard;
mod login;
mod materials;
mod schedule;

use eframe::egui;
use egui_phosphor::regular;
use portal_core::links::SIDEBAR;
use portal_core::ui::render_sidebar;
use portal_core::Page;

use super::PortalApp;

/// Pages reachable from the top bar once signed in
const NAV_PAGES: [Page; 5] = [Page::Dashboard, Page::Contacts, Page::Materials, Page::Schedule, Page::Calendar];

/// Apply icon font and size to the egui context
pub fn apply_font_settings(ctx: &egui::Context, font_size: f32) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let scale = font_size / 14.0;
    let mut style = (*ctx.style()).clone();
    style.text_styles.iter_mut().for_each(|(text_style, font_id)| match text_style {
        egui::TextStyle::Small => font_id.size = 10.0 * scale,
        egui::TextStyle::Body | egui::TextStyle::Monospace | egui::TextStyle::Button => {
            font_id.size = 14.0 * scale
        }
        egui::TextStyle::Heading => font_id.size = 20.0 * scale,
        egui::TextStyle::Name(_) => {}
    });
    style.interaction.tooltip_delay = 0.0;
    ctx.set_style(style);
}

impl PortalApp {
    pub(crate) fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Intranet Portal");
                ui.separator();

                if self.session.is_some() {
                    let mut target = None;
                    for page in NAV_PAGES {
                        if ui.selectable_label(self.page == page, page.title()).clicked() {
                            target = Some(page);
                        }
                    }
                    if let Some(page) = target {
                        self.open_page(page);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(session) = &self.session {
                        let email = session.email.clone();
                        if ui.button(format!("{} Sign out", regular::SIGN_OUT)).clicked() {
                            self.sign_out();
                        }
                        ui.label(format!("{} {}", regular::USER, email));
                        ui.separator();
                    }
                    if self.state.is_busy() {
                        ui.spinner();
                    }
                    ui.label(&self.status);
                });
            });
        });
    }

    pub(crate) fn render_sidebar_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(8.0);
                    if let Some(link) = render_sidebar(ui, SIDEBAR, &mut self.sidebar) {
                        self.follow_link(link);
                    }
                });
            });
    }

    pub(crate) fn render_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.page {
                Page::Login => {}
                Page::Dashboard => self.render_dashboard(ui),
                Page::Contacts => self.render_contacts(ui),
                Page::Materials => self.render_materials(ui),
                Page::Schedule => self.render_schedule(ui),
                Page::Calendar => self.render_calendar(ui),
            });
        });
    }
}
