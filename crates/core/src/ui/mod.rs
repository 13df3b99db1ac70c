//! Shared UI components for the portal pages
//!
//! Rendering helpers built on egui. Pages own their state and pass it in.

mod record_table;
mod sidebar;
mod month_view;

pub use record_table::{render_record_table, render_search_bar, render_table_section, sort_icon, text_cell};
pub use sidebar::render_sidebar;
pub use month_view::render_month_view;

use egui::containers::Popup;
use egui::{RectAlign, Response};

/// Show a tooltip immediately (no delay) positioned below the widget
pub(crate) fn instant_tooltip(response: &Response, text: impl Into<String>) {
    if response.hovered() {
        let text = text.into();
        Popup::from_response(response)
            .align(RectAlign::BOTTOM_START)
            .gap(4.0)
            .show(|ui| { ui.label(&text); });
    }
}
