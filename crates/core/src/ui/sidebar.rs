//! Dashboard sidebar rendering

use egui::{self, RichText, Ui};
use egui_phosphor::regular;

use crate::links::{Link, SidebarEntry, SidebarSection, SidebarState};

/// Render sidebar entries. Returns the link clicked this frame, if any.
pub fn render_sidebar(ui: &mut Ui, entries: &[SidebarEntry], state: &mut SidebarState) -> Option<Link> {
    let mut clicked = None;
    for entry in entries {
        match entry {
            SidebarEntry::Link(link) => {
                if ui.button(link.label).clicked() {
                    clicked = Some(*link);
                }
            }
            SidebarEntry::Section(section) => {
                if let Some(link) = render_section(ui, *section, state) {
                    clicked = Some(link);
                }
            }
        }
    }
    clicked
}

fn render_section(ui: &mut Ui, section: SidebarSection, state: &mut SidebarState) -> Option<Link> {
    let open = state.is_open(section);
    let caret = if open { regular::CARET_UP } else { regular::CARET_DOWN };
    if ui.button(RichText::new(format!("{} {}", section.label(), caret))).clicked() {
        state.toggle(section);
    }
    if !state.is_open(section) {
        return None;
    }
    ui.indent(egui::Id::new(("sidebar_section", section.label())), |ui| {
        render_sidebar(ui, section.entries(), state)
    })
    .inner
}
