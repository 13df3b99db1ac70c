//! Search bar and sortable table rendering for record tables

use egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular;

use super::instant_tooltip;
use crate::table_view::{sort_indicator, ColumnDef, SortIndicator, TableState};
use crate::{Record, TableKind};

const ACTIVE_HEADER_COLOR: Color32 = Color32::from_rgb(59, 130, 246);

/// Get sort indicator icon for a header
pub fn sort_icon(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Neutral => regular::ARROWS_DOWN_UP,
        SortIndicator::Ascending => regular::CARET_UP,
        SortIndicator::Descending => regular::CARET_DOWN,
    }
}

/// Default cell: the record's display text for the column
pub fn text_cell(ui: &mut Ui, column: &ColumnDef, record: &Record) {
    ui.label(record.display_text(column.key));
}

/// Search input bound to the table's query
pub fn render_search_bar(ui: &mut Ui, state: &mut TableState, hint: &str) {
    ui.horizontal(|ui| {
        ui.label(regular::MAGNIFYING_GLASS);
        let mut query = state.query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text(hint)
                .desired_width(220.0),
        );
        if response.changed() {
            state.set_query(query);
        }
    });
}

/// Render the table with clickable, sortable headers.
///
/// `cell` draws one cell; pass [`text_cell`] for plain text.
pub fn render_record_table<F>(
    ui: &mut Ui,
    id: &str,
    state: &mut TableState,
    empty_text: &str,
    mut cell: F,
) where
    F: FnMut(&mut Ui, &ColumnDef, &Record),
{
    let body_font_size = egui::TextStyle::Body.resolve(ui.style()).size;
    let row_height = body_font_size.max(ui.spacing().interact_size.y) + 6.0;
    let header_height = (24.0 * body_font_size / 14.0).max(24.0);

    let columns = state.columns();
    let indices = state.visible_indices().to_vec();
    let directive = state.directive().clone();
    let mut clicked: Option<&'static str> = None;

    let table = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::remainder().at_least(80.0).clip(true), columns.len())
        .min_scrolled_height(0.0)
        .max_scroll_height(384.0);

    table
        .header(header_height, |mut header| {
            for col in columns {
                header.col(|ui| {
                    let indicator = sort_indicator(col.key, &directive);
                    let active = indicator != SortIndicator::Neutral;
                    let mut text = RichText::new(format!("{} {}", col.label, sort_icon(indicator))).strong();
                    if active {
                        text = text.color(ACTIVE_HEADER_COLOR);
                    }
                    let response = ui.selectable_label(active, text);
                    if response.clicked() {
                        clicked = Some(col.key);
                    }
                    instant_tooltip(&response, format!("Sort by {}", col.label));
                });
            }
        })
        .body(|body| {
            let records = state.records();
            body.rows(row_height, indices.len(), |mut row| {
                let record = &records[indices[row.index()]];
                for col in columns {
                    row.col(|ui| cell(ui, col, record));
                }
            });
        });

    if indices.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new(empty_text).weak());
        });
    }

    if let Some(key) = clicked {
        state.toggle_sort(key);
    }
}

/// Heading, search bar, match count and table for one [`TableKind`]
pub fn render_table_section<F>(ui: &mut Ui, kind: TableKind, state: &mut TableState, cell: F)
where
    F: FnMut(&mut Ui, &ColumnDef, &Record),
{
    ui.horizontal(|ui| {
        ui.heading(kind.title());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_search_bar(ui, state, kind.search_hint());
        });
    });

    let total = state.records().len();
    let shown = state.visible_indices().len();
    if shown != total {
        ui.label(RichText::new(format!("Showing {} of {}", shown, total)).weak());
    }
    ui.add_space(4.0);

    render_record_table(ui, &format!("{:?}_table", kind), state, kind.empty_text(), cell);
}
