//! Background requests and result handling

use crate::api::ApiClient;
use crate::ui::FetchResult;
use portal_core::{CalendarEvent, NewVisit, TableKind};

use std::path::PathBuf;
use std::sync::mpsc::TryRecvError;
use std::thread;
use tracing::{info, warn};

use super::PortalApp;

impl PortalApp {
    /// Run `job` on a worker thread; its result is picked up by [`Self::check_progress`]
    fn spawn_request<F>(&mut self, job: F)
    where
        F: FnOnce(&ApiClient) -> FetchResult + Send + 'static,
    {
        let api = self.api.clone();
        let sender = self.sender.clone();
        self.state.started();
        thread::spawn(move || {
            let _ = sender.send(job(&api));
        });
    }

    pub(crate) fn start_table_fetch(&mut self, kind: TableKind) {
        self.status = format!("Loading {}...", kind.title());
        if kind == TableKind::Events {
            self.start_events_fetch();
            return;
        }
        self.spawn_request(move |api| FetchResult::Records(kind, api.fetch_records(kind)));
    }

    pub(crate) fn start_events_fetch(&mut self) {
        self.spawn_request(|api| FetchResult::Events(api.fetch_events()));
    }

    pub(crate) fn start_company_info_fetch(&mut self) {
        self.spawn_request(|api| FetchResult::CompanyInfo(api.fetch_company_info()));
    }

    pub(crate) fn start_news_fetch(&mut self) {
        self.spawn_request(|api| FetchResult::News(api.fetch_news()));
    }

    pub(crate) fn start_departments_fetch(&mut self) {
        self.spawn_request(|api| FetchResult::Departments(api.fetch_departments()));
    }

    pub(crate) fn start_create_visit(&mut self, visit: NewVisit) {
        self.status = "Saving visit...".to_string();
        self.spawn_request(move |api| FetchResult::VisitCreated(api.create_visit(&visit)));
    }

    pub(crate) fn start_events_upload(&mut self, path: PathBuf) {
        self.status = format!("Uploading {}...", path.display());
        self.spawn_request(move |api| FetchResult::EventsUploaded(api.upload_events_excel(&path)));
    }

    /// Drain finished requests. Called once per frame.
    pub(crate) fn check_progress(&mut self) {
        loop {
            match self.receiver.try_recv() {
                Ok(result) => {
                    self.state.finished();
                    self.apply_result(result);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        if !self.state.is_busy() && self.status.starts_with("Loading") {
            self.status = "Ready".to_string();
        }
    }

    /// Store a finished result. Failures keep whatever was loaded before.
    pub(crate) fn apply_result(&mut self, result: FetchResult) {
        let label = result.label();
        match result {
            FetchResult::Records(kind, Ok(records)) => {
                self.table_state(kind).set_records(records);
            }
            FetchResult::Events(Ok(events)) => {
                let records = events.iter().map(CalendarEvent::to_record).collect();
                self.table_state(TableKind::Events).set_records(records);
                self.events = events;
            }
            FetchResult::CompanyInfo(Ok(info)) => self.company_info = Some(info),
            FetchResult::News(Ok(news)) => self.news = news,
            FetchResult::Departments(Ok(departments)) => self.departments = departments,
            FetchResult::VisitCreated(Ok(())) => {
                info!("Visit saved");
                self.status = "Visit saved".to_string();
                self.show_new_visit = false;
                self.new_visit = NewVisit::default();
                self.start_table_fetch(TableKind::Visits);
            }
            FetchResult::EventsUploaded(Ok(())) => {
                self.status = "Events uploaded".to_string();
                self.upload_path.clear();
                self.start_table_fetch(TableKind::Events);
            }
            FetchResult::Records(_, Err(e))
            | FetchResult::Events(Err(e))
            | FetchResult::CompanyInfo(Err(e))
            | FetchResult::News(Err(e))
            | FetchResult::Departments(Err(e))
            | FetchResult::VisitCreated(Err(e))
            | FetchResult::EventsUploaded(Err(e)) => {
                warn!("Request for {} failed: {}", label, e);
                self.status = format!("Error ({}): {}", label, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use portal_core::{PortalError, Record};
    use serde_json::json;

    fn app() -> PortalApp {
        PortalApp::new(Config::default()).unwrap()
    }

    fn contacts() -> Vec<Record> {
        vec![
            Record::try_from(json!({"name": "Bob", "email": "b@x.com"})).unwrap(),
            Record::try_from(json!({"name": "Amy", "email": "a@x.com"})).unwrap(),
        ]
    }

    #[test]
    fn test_records_land_in_their_table() {
        let mut app = app();
        app.apply_result(FetchResult::Records(TableKind::Contacts, Ok(contacts())));
        assert_eq!(app.table_state(TableKind::Contacts).records().len(), 2);
        assert!(app.table_state(TableKind::Visits).records().is_empty());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_records() {
        let mut app = app();
        app.apply_result(FetchResult::Records(TableKind::Contacts, Ok(contacts())));
        app.apply_result(FetchResult::Records(
            TableKind::Contacts,
            Err(PortalError::Status { status: 500, url: "http://localhost:5000/employees".to_string() }),
        ));
        assert_eq!(app.table_state(TableKind::Contacts).records().len(), 2);
        assert!(app.status.starts_with("Error"));
        assert!(app.status.contains("500"));
    }

    #[test]
    fn test_events_fill_calendar_and_table() {
        let mut app = app();
        let events = vec![CalendarEvent {
            title: "Inspection".to_string(),
            start_time: Some("2025-06-02T09:00:00".to_string()),
            end_time: Some("2025-06-04T17:00:00".to_string()),
        }];
        app.apply_result(FetchResult::Events(Ok(events)));
        assert_eq!(app.events.len(), 1);
        let table = app.table_state(TableKind::Events);
        assert_eq!(table.records()[0].field_text("title"), "Inspection");
    }

    #[test]
    fn test_failed_visit_keeps_form_open() {
        let mut app = app();
        app.show_new_visit = true;
        app.new_visit.visit_description = "Roof unit".to_string();
        app.apply_result(FetchResult::VisitCreated(Err(PortalError::Http("refused".to_string()))));
        assert!(app.show_new_visit);
        assert_eq!(app.new_visit.visit_description, "Roof unit");
    }

    #[test]
    fn test_check_progress_drains_channel() {
        let mut app = app();
        app.state.started();
        app.sender
            .send(FetchResult::Records(TableKind::Contacts, Ok(contacts())))
            .unwrap();
        app.check_progress();
        assert!(!app.state.is_busy());
        assert_eq!(app.table_state(TableKind::Contacts).records().len(), 2);
    }
}
