use portal_core::{CalendarEvent, CompanyInfo, Department, NewsItem, Record, Result, TableKind};

/// Outcome of one background request, delivered to the UI thread
pub enum FetchResult {
    Records(TableKind, Result<Vec<Record>>),
    Events(Result<Vec<CalendarEvent>>),
    CompanyInfo(Result<CompanyInfo>),
    News(Result<Vec<NewsItem>>),
    Departments(Result<Vec<Department>>),
    VisitCreated(Result<()>),
    EventsUploaded(Result<()>),
}

impl FetchResult {
    /// Short name of the request for the status line
    pub fn label(&self) -> &'static str {
        match self {
            FetchResult::Records(kind, _) => kind.title(),
            FetchResult::Events(_) => "events",
            FetchResult::CompanyInfo(_) => "company info",
            FetchResult::News(_) => "news",
            FetchResult::Departments(_) => "departments",
            FetchResult::VisitCreated(_) => "new visit",
            FetchResult::EventsUploaded(_) => "event upload",
        }
    }
}

/// Requests in flight; the UI keeps repainting while any are pending
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AppState {
    pending: usize,
}

impl AppState {
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    pub fn started(&mut self) {
        self.pending += 1;
    }

    pub fn finished(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_until_every_request_finishes() {
        let mut state = AppState::default();
        assert!(!state.is_busy());
        state.started();
        state.started();
        state.finished();
        assert!(state.is_busy());
        state.finished();
        state.finished();
        assert!(!state.is_busy());
    }
}
