//! Data models for records and portal resources fetched from the API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Record
// ============================================================================

/// One displayable row: a field-name to value mapping with no fixed schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Raw value of a field, `None` when absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Text form used for search and sort. Absent and null fields are empty.
    pub fn field_text(&self, key: &str) -> String {
        self.get(key).map(|v| value_text(v, ",")).unwrap_or_default()
    }

    /// Text form used for rendering a cell. Arrays are joined with ", ".
    pub fn display_text(&self, key: &str) -> String {
        self.get(key).map(|v| value_text(v, ", ")).unwrap_or_default()
    }

    /// Natural id of the record if it carries one
    pub fn id(&self) -> Option<String> {
        match self.get("id") {
            None | Some(Value::Null) => None,
            Some(v) => Some(value_text(v, ",")),
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = crate::PortalError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(crate::PortalError::Decode(format!(
                "expected a JSON object for a record, got {}",
                other
            ))),
        }
    }
}

fn value_text(value: &Value, separator: &str) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items
            .iter()
            .map(|v| value_text(v, separator))
            .collect::<Vec<_>>()
            .join(separator),
        Value::Object(_) => value.to_string(),
    }
}

/// Whole floats print without a fractional part (`3.0` -> `3`)
fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                return (f as i64).to_string();
            }
        }
    }
    n.to_string()
}

// ============================================================================
// Portal resources
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Dashboard news feed entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl CalendarEvent {
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("title", self.title.clone());
        record.insert("start_time", self.start_time.clone());
        record.insert("end_time", self.end_time.clone());
        record
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: Value,
    #[serde(default)]
    pub name: String,
}

/// Payload for creating a scheduled visit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewVisit {
    pub visit_description: String,
    pub todo: String,
    pub required_certifications: String,
    pub department_name: String,
    pub primary_technician: String,
    pub additional_technicians: Vec<String>,
    pub visit_date: String,
    pub duration: String,
}

impl NewVisit {
    /// Toggle a technician name in the additional technicians list
    pub fn toggle_additional_technician(&mut self, name: &str) {
        if let Some(pos) = self.additional_technicians.iter().position(|t| t == name) {
            self.additional_technicians.remove(pos);
        } else {
            self.additional_technicians.push(name.to_string());
        }
    }
}
