use std::path::PathBuf;

use chrono::{Month, NaiveDate};
use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular;
use portal_core::calendar::{next_month, prev_month};
use portal_core::ui::{render_month_view, render_table_section, text_cell};
use portal_core::TableKind;

use crate::app::PortalApp;

fn month_title(year: i32, month: u32) -> String {
    let name = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("?");
    format!("{} {}", name, year)
}

impl PortalApp {
    pub(crate) fn render_calendar(&mut self, ui: &mut Ui) {
        let (year, month) = self.calendar_month;

        ui.horizontal(|ui| {
            if ui.button(regular::CARET_LEFT).on_hover_text("Previous month").clicked() {
                self.calendar_month = prev_month(year, month);
            }
            ui.heading(month_title(year, month));
            if ui.button(regular::CARET_RIGHT).on_hover_text("Next month").clicked() {
                self.calendar_month = next_month(year, month);
            }
        });
        ui.add_space(6.0);

        let today: NaiveDate = chrono::Local::now().date_naive();
        render_month_view(ui, year, month, &self.events, today);

        ui.add_space(12.0);
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Upload schedule (.xlsx)").strong());
            ui.add(
                egui::TextEdit::singleline(&mut self.upload_path)
                    .hint_text("path/to/schedule.xlsx")
                    .desired_width(300.0),
            );
            let can_upload = !self.upload_path.trim().is_empty();
            if ui
                .add_enabled(can_upload, egui::Button::new(format!("{} Upload", regular::UPLOAD_SIMPLE)))
                .clicked()
            {
                let path = PathBuf::from(self.upload_path.trim());
                self.start_events_upload(path);
            }
        });

        ui.add_space(12.0);
        render_table_section(ui, TableKind::Events, self.table_state(TableKind::Events), text_cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(2025, 6), "June 2025");
        assert_eq!(month_title(2024, 12), "December 2024");
        assert_eq!(month_title(2024, 13), "? 2024");
    }
}
