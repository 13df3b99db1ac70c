//! Portal pages, their tables and the API endpoints behind them

use crate::table_view::ColumnDef;

pub static CONTACT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("name", "Name"),
    ColumnDef::new("position", "Position"),
    ColumnDef::new("phone", "Phone"),
    ColumnDef::new("email", "Email"),
];

pub static DATA_MATERIAL_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("category", "Category"),
    ColumnDef::new("description", "Part Description"),
    ColumnDef::new("manufacture", "Manufacture"),
    ColumnDef::new("vendor", "Vendor"),
];

/// Electrical materials carry no category
pub static ELECTRICAL_MATERIAL_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("description", "Part Description"),
    ColumnDef::new("manufacture", "Manufacture"),
    ColumnDef::new("vendor", "Vendor"),
];

pub static VISIT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("visit_id", "Visit #"),
    ColumnDef::new("visit_date", "Date"),
    ColumnDef::new("department_name", "Department"),
    ColumnDef::new("visit_description", "Description"),
    ColumnDef::new("primary_technician_name", "Primary Technician"),
    ColumnDef::new("additional_technicians", "Additional Technicians"),
];

pub static EVENT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("title", "Title"),
    ColumnDef::new("start_time", "Start"),
    ColumnDef::new("end_time", "End"),
];

pub const ENDPOINT_COMPANY_INFO: &str = "/company-info";
pub const ENDPOINT_NEWS: &str = "/Dashboard";
pub const ENDPOINT_DEPARTMENTS: &str = "/departments";
pub const ENDPOINT_VISITS: &str = "/visits";
pub const ENDPOINT_EVENTS_UPLOAD: &str = "/events/upload_excel/";

/// Every record table shown somewhere in the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Contacts,
    DataMaterials,
    ElectricalMaterials,
    Visits,
    Events,
}

impl TableKind {
    pub const ALL: [TableKind; 5] = [
        TableKind::Contacts,
        TableKind::DataMaterials,
        TableKind::ElectricalMaterials,
        TableKind::Visits,
        TableKind::Events,
    ];

    pub fn columns(&self) -> &'static [ColumnDef] {
        match self {
            TableKind::Contacts => CONTACT_COLUMNS,
            TableKind::DataMaterials => DATA_MATERIAL_COLUMNS,
            TableKind::ElectricalMaterials => ELECTRICAL_MATERIAL_COLUMNS,
            TableKind::Visits => VISIT_COLUMNS,
            TableKind::Events => EVENT_COLUMNS,
        }
    }

    /// Path of the GET endpoint returning this table's JSON array
    pub fn endpoint(&self) -> &'static str {
        match self {
            TableKind::Contacts => "/employees",
            TableKind::DataMaterials => "/materials/data",
            TableKind::ElectricalMaterials => "/materials/electrical",
            TableKind::Visits => ENDPOINT_VISITS,
            TableKind::Events => "/events/",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TableKind::Contacts => "Employee Directory",
            TableKind::DataMaterials => "Data Materials",
            TableKind::ElectricalMaterials => "Electrical Materials",
            TableKind::Visits => "Scheduled Visits",
            TableKind::Events => "Events",
        }
    }

    /// Text shown in place of rows when nothing matches
    pub fn empty_text(&self) -> &'static str {
        match self {
            TableKind::Contacts => "No employees found.",
            TableKind::DataMaterials | TableKind::ElectricalMaterials => "No materials found.",
            TableKind::Visits => "No visits found.",
            TableKind::Events => "No events found.",
        }
    }

    pub fn search_hint(&self) -> &'static str {
        match self {
            TableKind::Contacts => "Search employees...",
            _ => "Search...",
        }
    }
}

/// Navigable portal pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Login,
    Dashboard,
    Contacts,
    Materials,
    Schedule,
    Calendar,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::Dashboard => "Dashboard",
            Page::Contacts => "Company Contact Information",
            Page::Materials => "Warehouse Materials",
            Page::Schedule => "Scheduling",
            Page::Calendar => "Calendar",
        }
    }

    /// Tables rendered on this page, top to bottom
    pub fn tables(&self) -> &'static [TableKind] {
        match self {
            Page::Login | Page::Dashboard => &[],
            Page::Contacts => &[TableKind::Contacts],
            Page::Materials => &[TableKind::DataMaterials, TableKind::ElectricalMaterials],
            Page::Schedule => &[TableKind::Visits],
            Page::Calendar => &[TableKind::Events],
        }
    }

    pub fn requires_session(&self) -> bool {
        *self != Page::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_keys_are_unique_per_table() {
        for kind in TableKind::ALL {
            let cols = kind.columns();
            for (i, a) in cols.iter().enumerate() {
                assert!(
                    cols[i + 1..].iter().all(|b| b.key != a.key),
                    "{:?} repeats column {}",
                    kind,
                    a.key
                );
            }
        }
    }

    #[test]
    fn test_electrical_columns_drop_category() {
        let data: Vec<_> = DATA_MATERIAL_COLUMNS.iter().filter(|c| c.key != "category").collect();
        let electrical: Vec<_> = ELECTRICAL_MATERIAL_COLUMNS.iter().collect();
        assert_eq!(data, electrical);
    }

    #[test]
    fn test_column_definitions_are_stable() {
        assert!(std::ptr::eq(TableKind::Contacts.columns(), TableKind::Contacts.columns()));
    }

    #[test]
    fn test_only_login_is_public() {
        assert!(!Page::Login.requires_session());
        assert!(Page::Calendar.requires_session());
        assert_eq!(Page::Materials.tables().len(), 2);
    }
}
