//! Filter, sort and header helpers shared by every record table

use std::cmp::Ordering;

use super::types::{ColumnDef, SortDirection, SortDirective, SortIndicator};
use crate::Record;

/// Lower-cased, space-joined text of every column of a record
fn search_haystack(record: &Record, columns: &[ColumnDef]) -> String {
    columns
        .iter()
        .map(|col| record.field_text(col.key))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn matches_query(record: &Record, needle: &str, columns: &[ColumnDef]) -> bool {
    needle.is_empty() || search_haystack(record, columns).contains(needle)
}

/// Keep records whose joined column text contains the query (case-insensitive)
pub fn filter_records<'a, I>(records: I, query: &str, columns: &[ColumnDef]) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| matches_query(r, &needle, columns))
        .collect()
}

/// Stable sort by the lower-cased text of the directive's key
pub fn sort_records<'a, I>(records: I, directive: &SortDirective) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    let Some(key) = directive.key.as_deref() else {
        return records;
    };
    let keyed = records
        .into_iter()
        .map(|r| (r.field_text(key).to_lowercase(), r))
        .collect();
    sort_keyed(keyed, directive.direction)
}

/// Stable sort of items by their precomputed lower-cased keys
fn sort_keyed<T>(mut keyed: Vec<(String, T)>, direction: SortDirection) -> Vec<T> {
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, direction));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// The directive's key, if it names one of `columns`
fn column_sort_key<'d>(directive: &'d SortDirective, columns: &[ColumnDef]) -> Option<&'d str> {
    directive
        .key
        .as_deref()
        .filter(|key| columns.iter().any(|c| c.key == *key))
}

fn compare_keys(a: &str, b: &str, direction: SortDirection) -> Ordering {
    let cmp = a.cmp(b);
    if direction == SortDirection::Descending { cmp.reverse() } else { cmp }
}

/// New directive after a header click: same key flips, other key starts ascending
pub fn toggle_sort(current: &SortDirective, clicked_key: &str) -> SortDirective {
    if current.is_active(clicked_key) {
        SortDirective {
            key: current.key.clone(),
            direction: current.direction.toggle(),
        }
    } else {
        SortDirective::by(clicked_key, SortDirection::Ascending)
    }
}

/// Get sort indicator state for a column header
pub fn sort_indicator(column_key: &str, directive: &SortDirective) -> SortIndicator {
    if directive.is_active(column_key) {
        match directive.direction {
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
        }
    } else {
        SortIndicator::Neutral
    }
}

/// Rows to render: [`filter_records`] then [`sort_records`].
///
/// Only column keys sort. A directive key that names no column is ignored,
/// even when records carry that field, so the filtered order is kept.
pub fn visible_rows<'a>(
    records: &'a [Record],
    query: &str,
    directive: &SortDirective,
    columns: &[ColumnDef],
) -> Vec<&'a Record> {
    let indices = visible_indices(records, query, directive, columns);
    indices.into_iter().map(|idx| &records[idx]).collect()
}

/// Same sequence as [`visible_rows`], as indices into `records`
pub fn visible_indices(
    records: &[Record],
    query: &str,
    directive: &SortDirective,
    columns: &[ColumnDef],
) -> Vec<usize> {
    let needle = query.to_lowercase();
    let indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_query(r, &needle, columns))
        .map(|(idx, _)| idx)
        .collect();

    match column_sort_key(directive, columns) {
        Some(key) => {
            let keyed = indices
                .into_iter()
                .map(|idx| (records[idx].field_text(key).to_lowercase(), idx))
                .collect();
            sort_keyed(keyed, directive.direction)
        }
        None => indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const COLUMNS: &[ColumnDef] = &[
        ColumnDef::new("name", "Name"),
        ColumnDef::new("email", "Email"),
    ];

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn names(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.field_text("name")).collect()
    }

    fn bob_and_amy() -> Vec<Record> {
        records(json!([
            {"name": "Bob", "email": "b@x.com"},
            {"name": "Amy", "email": "a@x.com"},
        ]))
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let rs = bob_and_amy();
        let rows = filter_records(&rs, "", COLUMNS);
        assert_eq!(rows, rs.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_query_matches_case_insensitively() {
        let rs = bob_and_amy();
        assert_eq!(names(&filter_records(&rs, "am", COLUMNS)), vec!["Amy"]);
        assert_eq!(names(&filter_records(&rs, "AM", COLUMNS)), vec!["Amy"]);
        assert_eq!(names(&filter_records(&rs, "X.COM", COLUMNS)), vec!["Bob", "Amy"]);
        assert!(filter_records(&rs, "zzz", COLUMNS).is_empty());
    }

    #[test]
    fn test_query_only_searches_listed_columns() {
        let rs = records(json!([{"name": "Bob", "secret": "needle"}]));
        assert!(filter_records(&rs, "needle", COLUMNS).is_empty());
    }

    #[test]
    fn test_query_spans_joined_columns() {
        let rs = bob_and_amy();
        assert_eq!(names(&filter_records(&rs, "bob b@", COLUMNS)), vec!["Bob"]);
    }

    #[test]
    fn test_kept_and_excluded_records_partition_on_query() {
        let rs = records(json!([
            {"name": "Carla", "email": "carla@stinte.co"},
            {"name": "Dan", "email": null},
            {"email": "ops@upandcs.com"},
            {"name": "Ann-Marie", "email": "am@x.com"},
        ]));
        let q = "an";
        let kept = filter_records(&rs, q, COLUMNS);
        for r in &rs {
            let hay = format!("{} {}", r.field_text("name"), r.field_text("email")).to_lowercase();
            assert_eq!(kept.contains(&r), hay.contains(q));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rs = bob_and_amy();
        let once = filter_records(&rs, "a", COLUMNS);
        let twice = filter_records(once.iter().copied(), "a", COLUMNS);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_sort_key_keeps_order() {
        let rs = bob_and_amy();
        let rows = sort_records(&rs, &SortDirective::default());
        assert_eq!(names(&rows), vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_sort_then_toggle_reverses() {
        let rs = bob_and_amy();
        let asc = toggle_sort(&SortDirective::default(), "name");
        assert_eq!(names(&sort_records(&rs, &asc)), vec!["Amy", "Bob"]);
        let desc = toggle_sort(&asc, "name");
        assert_eq!(desc.direction, SortDirection::Descending);
        assert_eq!(names(&sort_records(&rs, &desc)), vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let rs = records(json!([{"name": "bob"}, {"name": "Amy"}, {"name": "carl"}]));
        let rows = sort_records(&rs, &SortDirective::by("name", SortDirection::Ascending));
        assert_eq!(names(&rows), vec!["Amy", "bob", "carl"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let rs = records(json!([
            {"name": "first", "dept": "Ops"},
            {"name": "second", "dept": "IT"},
            {"name": "third", "dept": "ops"},
            {"name": "fourth", "dept": "it"},
        ]));
        let asc = sort_records(&rs, &SortDirective::by("dept", SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["second", "fourth", "first", "third"]);
        let desc = sort_records(&rs, &SortDirective::by("dept", SortDirection::Descending));
        assert_eq!(names(&desc), vec!["first", "third", "second", "fourth"]);
    }

    #[test]
    fn test_missing_field_sorts_first_ascending() {
        let rs = records(json!([
            {"name": "Bob", "email": "b@x.com"},
            {"name": "NoMail"},
            {"name": "Amy", "email": "a@x.com"},
        ]));
        let rows = sort_records(&rs, &SortDirective::by("email", SortDirection::Ascending));
        assert_eq!(names(&rows), vec!["NoMail", "Amy", "Bob"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let rs = bob_and_amy();
        let before = rs.clone();
        let _ = sort_records(&rs, &SortDirective::by("name", SortDirection::Ascending));
        assert_eq!(rs, before);
    }

    #[test]
    fn test_toggle_sort_cases() {
        let current = SortDirective::by("name", SortDirection::Ascending);
        assert_eq!(
            toggle_sort(&current, "name"),
            SortDirective::by("name", SortDirection::Descending)
        );
        assert_eq!(
            toggle_sort(&current, "email"),
            SortDirective::by("email", SortDirection::Ascending)
        );
        let desc = SortDirective::by("name", SortDirection::Descending);
        assert_eq!(toggle_sort(&desc, "email").direction, SortDirection::Ascending);
        assert_eq!(toggle_sort(&desc, "name").direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_indicator_states() {
        let none = SortDirective::default();
        assert_eq!(sort_indicator("name", &none), SortIndicator::Neutral);
        let asc = SortDirective::by("name", SortDirection::Ascending);
        assert_eq!(sort_indicator("name", &asc), SortIndicator::Ascending);
        assert_eq!(sort_indicator("email", &asc), SortIndicator::Neutral);
        let desc = toggle_sort(&asc, "name");
        assert_eq!(sort_indicator("name", &desc), SortIndicator::Descending);
    }

    #[test]
    fn test_visible_rows_filters_before_sorting() {
        let rs = records(json!([
            {"name": "Cara", "email": "c@x.com"},
            {"name": "Bob", "email": "b@y.com"},
            {"name": "Amy", "email": "a@x.com"},
        ]));
        let directive = SortDirective::by("name", SortDirection::Ascending);
        let rows = visible_rows(&rs, "x.com", &directive, COLUMNS);
        assert_eq!(names(&rows), vec!["Amy", "Cara"]);
        assert_eq!(visible_indices(&rs, "x.com", &directive, COLUMNS), vec![2, 0]);
    }

    #[test]
    fn test_unknown_sort_key_is_a_no_op() {
        let rs = bob_and_amy();
        let directive = SortDirective::by("salary", SortDirection::Descending);
        let rows = visible_rows(&rs, "", &directive, COLUMNS);
        assert_eq!(names(&rows), vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_visible_rows_matches_composition() {
        let rs = records(json!([
            {"name": "Dee", "email": "d@x.com"},
            {"name": "amy", "email": null},
            {"name": "Bob"},
            {"name": "Amy", "email": "a@x.com"},
        ]));
        let directive = SortDirective::by("name", SortDirection::Descending);
        let composed = sort_records(filter_records(&rs, "y", COLUMNS), &directive);
        assert_eq!(visible_rows(&rs, "y", &directive, COLUMNS), composed);
    }

    #[test]
    fn test_field_outside_columns_does_not_sort_visible_rows() {
        let rs = records(json!([
            {"name": "Bob", "email": "b@x.com", "team": "a"},
            {"name": "Amy", "email": "a@x.com", "team": "b"},
        ]));
        let directive = SortDirective::by("team", SortDirection::Descending);

        let names = |rows: Vec<&Record>| rows.iter().map(|r| r.field_text("name")).collect::<Vec<_>>();
        // sort_records knows nothing about columns and sorts by any field
        assert_eq!(names(sort_records(filter_records(&rs, "", COLUMNS), &directive)), ["Amy", "Bob"]);
        // visible rows only honour column keys
        assert_eq!(names(visible_rows(&rs, "", &directive, COLUMNS)), ["Bob", "Amy"]);
        assert_eq!(
            visible_rows(&rs, "", &directive, COLUMNS),
            sort_records(filter_records(&rs, "", COLUMNS), &SortDirective::default())
        );
    }
}
