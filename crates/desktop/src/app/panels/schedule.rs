use chrono::NaiveDate;
use eframe::egui::{self, Ui};
use egui_phosphor::regular;
use portal_core::ui::{render_table_section, text_cell};
use portal_core::{NewVisit, PortalError, Record, Result, TableKind};
use serde_json::Value;

use crate::app::PortalApp;

fn id_text(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Technician choices from the employee records: `(id, name)` pairs for the
/// primary picker (which posts the id) and every named employee for the
/// additional list (which posts names).
fn technician_choices(employees: &[Record]) -> (Vec<(String, String)>, Vec<String>) {
    let primary = employees
        .iter()
        .filter_map(|r| Some((r.id()?, r.display_text("name"))))
        .collect();
    let names = employees
        .iter()
        .map(|r| r.display_text("name"))
        .filter(|name| !name.is_empty())
        .collect();
    (primary, names)
}

/// Reject a visit the server could not schedule
fn validate_new_visit(visit: &NewVisit) -> Result<()> {
    if visit.visit_description.trim().is_empty() {
        return Err(PortalError::InvalidInput("Visit description is required".to_string()));
    }
    if !visit.visit_date.is_empty() && NaiveDate::parse_from_str(&visit.visit_date, "%Y-%m-%d").is_err() {
        return Err(PortalError::InvalidInput(format!(
            "Visit date '{}' is not YYYY-MM-DD",
            visit.visit_date
        )));
    }
    Ok(())
}

impl PortalApp {
    pub(crate) fn render_schedule(&mut self, ui: &mut Ui) {
        if ui.button(format!("{} New Visit", regular::PLUS)).clicked() {
            self.show_new_visit = true;
        }
        ui.add_space(8.0);
        render_table_section(ui, TableKind::Visits, self.table_state(TableKind::Visits), text_cell);
    }

    pub(crate) fn render_new_visit_window(&mut self, ctx: &egui::Context) {
        if !self.show_new_visit {
            return;
        }

        let (technicians, technician_names) = technician_choices(self.table_state(TableKind::Contacts).records());

        let mut open = true;
        let mut save = false;
        let departments = &self.departments;
        let visit = &mut self.new_visit;

        egui::Window::new("Create Visit")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([420.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("new_visit_form").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
                    ui.label("Description");
                    ui.text_edit_singleline(&mut visit.visit_description);
                    ui.end_row();

                    ui.label("To Do");
                    ui.text_edit_singleline(&mut visit.todo);
                    ui.end_row();

                    ui.label("Certifications");
                    ui.text_edit_singleline(&mut visit.required_certifications);
                    ui.end_row();

                    ui.label("Department");
                    let selected = departments
                        .iter()
                        .find(|d| id_text(&d.id) == visit.department_name)
                        .map(|d| d.name.clone())
                        .unwrap_or_else(|| "Select Department".to_string());
                    egui::ComboBox::from_id_salt("visit_department")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for dept in departments {
                                ui.selectable_value(&mut visit.department_name, id_text(&dept.id), &dept.name);
                            }
                        });
                    ui.end_row();

                    ui.label("Primary Technician");
                    let selected = technicians
                        .iter()
                        .find(|(id, _)| *id == visit.primary_technician)
                        .map(|(_, name)| name.clone())
                        .unwrap_or_else(|| "Select Primary Technician".to_string());
                    egui::ComboBox::from_id_salt("visit_primary_technician")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for (id, name) in &technicians {
                                ui.selectable_value(&mut visit.primary_technician, id.clone(), name);
                            }
                        });
                    ui.end_row();

                    ui.label("Additional Technicians");
                    egui::ScrollArea::vertical()
                        .id_salt("visit_additional_technicians")
                        .max_height(120.0)
                        .show(ui, |ui| {
                            for name in &technician_names {
                                let mut checked = visit.additional_technicians.contains(name);
                                if ui.checkbox(&mut checked, name).changed() {
                                    visit.toggle_additional_technician(name);
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Date");
                    ui.add(egui::TextEdit::singleline(&mut visit.visit_date).hint_text("YYYY-MM-DD"));
                    ui.end_row();

                    ui.label("Duration");
                    ui.add(egui::TextEdit::singleline(&mut visit.duration).hint_text("e.g. 2 hours"));
                    ui.end_row();
                });

                ui.add_space(8.0);
                if ui.button(format!("{} Save Visit", regular::FLOPPY_DISK)).clicked() {
                    save = true;
                }
            });

        if !open {
            self.show_new_visit = false;
            return;
        }
        if save {
            match validate_new_visit(&self.new_visit) {
                Ok(()) => self.start_create_visit(self.new_visit.clone()),
                Err(e) => self.status = e.to_string(),
            }
        }
    }
}
