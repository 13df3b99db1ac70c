//! Per-table view state with memoized visible rows

use super::helpers::{toggle_sort, visible_indices};
use super::types::{ColumnDef, SortDirective};
use crate::Record;

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    generation: u64,
    query: String,
    directive: SortDirective,
}

/// Records, search query and sort directive of one rendered table.
///
/// Visible indices are recomputed only when the records are replaced or the
/// query or directive change.
#[derive(Debug, Clone)]
pub struct TableState {
    columns: &'static [ColumnDef],
    records: Vec<Record>,
    query: String,
    directive: SortDirective,
    generation: u64,
    cache: Option<(CacheKey, Vec<usize>)>,
}

impl TableState {
    pub fn new(columns: &'static [ColumnDef]) -> Self {
        Self {
            columns,
            records: Vec::new(),
            query: String::new(),
            directive: SortDirective::default(),
            generation: 0,
            cache: None,
        }
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replace the record list wholesale (e.g. after a refetch)
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.generation += 1;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn directive(&self) -> &SortDirective {
        &self.directive
    }

    /// Apply a header click on `key`
    pub fn toggle_sort(&mut self, key: &str) {
        self.directive = toggle_sort(&self.directive, key);
    }

    /// Back to the freshly-opened state: empty query, no sort. Records are kept.
    pub fn reset_view(&mut self) {
        self.query.clear();
        self.directive = SortDirective::default();
    }

    fn cache_key(&self) -> CacheKey {
        CacheKey {
            generation: self.generation,
            query: self.query.clone(),
            directive: self.directive.clone(),
        }
    }

    /// Indices into [`Self::records`] in display order
    pub fn visible_indices(&mut self) -> &[usize] {
        let key = self.cache_key();
        let stale = self.cache.as_ref().map(|(k, _)| *k != key).unwrap_or(true);
        if stale {
            let indices = visible_indices(&self.records, &self.query, &self.directive, self.columns);
            self.cache = Some((key, indices));
        }
        self.cache.as_ref().map(|(_, v)| v.as_slice()).unwrap_or(&[])
    }

    /// Records in display order
    pub fn visible_rows(&mut self) -> Vec<&Record> {
        let indices = self.visible_indices().to_vec();
        indices.into_iter().map(|idx| &self.records[idx]).collect()
    }

    #[cfg(test)]
    fn is_cached(&self) -> bool {
        self.cache.as_ref().map(|(k, _)| *k == self.cache_key()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static COLUMNS: &[ColumnDef] = &[
        ColumnDef::new("name", "Name"),
        ColumnDef::new("email", "Email"),
    ];

    fn state() -> TableState {
        let mut state = TableState::new(COLUMNS);
        state.set_records(
            serde_json::from_value(json!([
                {"name": "Bob", "email": "b@x.com"},
                {"name": "Amy", "email": "a@x.com"},
            ]))
            .unwrap(),
        );
        state
    }

    #[test]
    fn test_fresh_state_shows_insertion_order() {
        let mut s = state();
        assert_eq!(s.visible_indices(), &[0, 1]);
    }

    #[test]
    fn test_header_clicks_toggle_order() {
        let mut s = state();
        s.toggle_sort("name");
        assert_eq!(s.visible_indices(), &[1, 0]);
        s.toggle_sort("name");
        assert_eq!(s.visible_indices(), &[0, 1]);
    }

    #[test]
    fn test_cache_invalidates_on_each_input() {
        let mut s = state();
        s.visible_indices();
        assert!(s.is_cached());

        s.set_query("am");
        assert!(!s.is_cached());
        assert_eq!(s.visible_indices(), &[1]);

        s.toggle_sort("email");
        assert!(!s.is_cached());
        s.visible_indices();

        s.set_records(Vec::new());
        assert!(!s.is_cached());
        assert!(s.visible_indices().is_empty());
    }

    #[test]
    fn test_same_inputs_reuse_cache() {
        let mut s = state();
        s.set_query("x");
        s.visible_indices();
        s.set_query("x");
        assert!(s.is_cached());
    }

    #[test]
    fn test_reset_view_restores_defaults() {
        let mut s = state();
        s.set_query("amy");
        s.toggle_sort("name");
        s.reset_view();
        assert_eq!(s.query(), "");
        assert_eq!(s.directive(), &SortDirective::default());
        let names: Vec<String> = s.visible_rows().iter().map(|r| r.field_text("name")).collect();
        assert_eq!(names, vec!["Bob", "Amy"]);
    }
}
