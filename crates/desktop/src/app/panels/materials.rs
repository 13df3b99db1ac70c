use eframe::egui::Ui;
use portal_core::ui::{render_table_section, text_cell};
use portal_core::Page;

use crate::app::PortalApp;

impl PortalApp {
    pub(crate) fn render_materials(&mut self, ui: &mut Ui) {
        for (i, kind) in Page::Materials.tables().iter().enumerate() {
            if i > 0 {
                ui.add_space(16.0);
                ui.separator();
            }
            render_table_section(ui, *kind, self.table_state(*kind), text_cell);
        }
    }
}
