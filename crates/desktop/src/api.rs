//! Blocking client for the portal REST API

use std::path::Path;
use std::time::Duration;

use portal_core::links::join_url;
use portal_core::pages::{ENDPOINT_COMPANY_INFO, ENDPOINT_DEPARTMENTS, ENDPOINT_EVENTS_UPLOAD, ENDPOINT_NEWS, ENDPOINT_VISITS};
use portal_core::{CalendarEvent, CompanyInfo, Department, NewVisit, NewsItem, PortalError, Record, Result, TableKind};
use reqwest::blocking::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn http_error(e: reqwest::Error) -> PortalError {
    PortalError::Http(e.to_string())
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(http_error)?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(PortalError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = Self::check(self.client.get(&url).send().map_err(http_error)?)?;
        let body = response.text().map_err(http_error)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Records of one table, as returned by its endpoint
    pub fn fetch_records(&self, kind: TableKind) -> Result<Vec<Record>> {
        let records: Vec<Record> = self.get_json(kind.endpoint())?;
        info!("Fetched {} records for {:?}", records.len(), kind);
        Ok(records)
    }

    pub fn fetch_company_info(&self) -> Result<CompanyInfo> {
        self.get_json(ENDPOINT_COMPANY_INFO)
    }

    pub fn fetch_news(&self) -> Result<Vec<NewsItem>> {
        self.get_json(ENDPOINT_NEWS)
    }

    pub fn fetch_departments(&self) -> Result<Vec<Department>> {
        self.get_json(ENDPOINT_DEPARTMENTS)
    }

    pub fn fetch_events(&self) -> Result<Vec<CalendarEvent>> {
        self.get_json(TableKind::Events.endpoint())
    }

    pub fn create_visit(&self, visit: &NewVisit) -> Result<()> {
        let url = self.url(ENDPOINT_VISITS);
        debug!("POST {}", url);
        Self::check(self.client.post(&url).json(visit).send().map_err(http_error)?)?;
        info!("Created visit: {}", visit.visit_description);
        Ok(())
    }

    /// Upload an .xlsx schedule; the server turns its rows into events
    pub fn upload_events_excel(&self, path: &Path) -> Result<()> {
        let is_xlsx = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("xlsx"))
            .unwrap_or(false);
        if !is_xlsx {
            return Err(PortalError::InvalidInput(format!(
                "{} is not an .xlsx file",
                path.display()
            )));
        }
        let form = multipart::Form::new().file("file", path)?;
        let url = self.url(ENDPOINT_EVENTS_UPLOAD);
        debug!("POST {} ({})", url, path.display());
        Self::check(self.client.post(&url).multipart(form).send().map_err(http_error)?)?;
        info!("Uploaded {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let api = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(api.url(TableKind::Contacts.endpoint()), "http://localhost:5000/employees");
        assert_eq!(api.url(ENDPOINT_EVENTS_UPLOAD), "http://localhost:5000/events/upload_excel/");
    }

    #[test]
    fn test_upload_rejects_other_extensions() {
        let api = ApiClient::new("http://localhost:5000").unwrap();
        let result = api.upload_events_excel(Path::new("schedule.csv"));
        assert!(matches!(result, Err(PortalError::InvalidInput(_))));
    }

    #[test]
    #[ignore] // Requires a running portal API
    fn test_fetch_contacts() {
        let api = ApiClient::new("http://localhost:5000").unwrap();
        let records = api.fetch_records(TableKind::Contacts).unwrap();
        assert!(records.iter().all(|r| r.get("name").is_some()));
    }
}
