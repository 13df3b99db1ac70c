//! Type definitions for record tables

/// One displayable, sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
}

impl ColumnDef {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction. `key == None` keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortDirective {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn is_active(&self, column_key: &str) -> bool {
        self.key.as_deref() == Some(column_key)
    }
}

/// Header icon state for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Ascending,
    Descending,
}
