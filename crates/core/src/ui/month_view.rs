//! Month grid rendering for calendar events

use chrono::{Datelike, NaiveDate};
use egui::{self, Color32, RichText, Ui};

use crate::calendar::{events_by_day, month_grid};
use crate::CalendarEvent;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const EVENT_COLOR: Color32 = Color32::from_rgb(59, 130, 246);
const MAX_TITLES_PER_DAY: usize = 3;

/// Render a Sunday-first month grid with event titles in each day cell
pub fn render_month_view(ui: &mut Ui, year: i32, month: u32, events: &[CalendarEvent], today: NaiveDate) {
    let by_day = events_by_day(events, year, month);
    let cell_width = (ui.available_width() / 7.0 - 8.0).max(60.0);

    egui::Grid::new(("month_view", year, month))
        .num_columns(7)
        .min_col_width(cell_width)
        .max_col_width(cell_width)
        .min_row_height(64.0)
        .striped(true)
        .show(ui, |ui| {
            for day in WEEKDAYS {
                ui.label(RichText::new(day).strong());
            }
            ui.end_row();

            for week in month_grid(year, month) {
                for day in week {
                    ui.vertical(|ui| {
                        let Some(date) = day else {
                            return;
                        };
                        let mut number = RichText::new(date.day().to_string());
                        if date == today {
                            number = number.strong().color(EVENT_COLOR);
                        }
                        ui.label(number);

                        let day_events = by_day.get(&date).map(|v| v.as_slice()).unwrap_or(&[]);
                        for event in day_events.iter().take(MAX_TITLES_PER_DAY) {
                            ui.label(RichText::new(&event.title).small().color(EVENT_COLOR));
                        }
                        if day_events.len() > MAX_TITLES_PER_DAY {
                            ui.label(
                                RichText::new(format!("+{} more", day_events.len() - MAX_TITLES_PER_DAY))
                                    .small()
                                    .weak(),
                            );
                        }
                    });
                }
                ui.end_row();
            }
        });
}
