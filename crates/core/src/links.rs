//! Dashboard sidebar: external links, internal pages and collapsible sections

use crate::pages::Page;

const ISOLVED_LOGIN: &str = "https://identity.myisolved.com/Account/Login?ReturnUrl=%2F";

/// Where a sidebar entry leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Opened in the system browser
    External(&'static str),
    /// Path on the portal web host, opened in the system browser
    Document(&'static str),
    Page(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub target: LinkTarget,
}

const fn external(label: &'static str, url: &'static str) -> SidebarEntry {
    SidebarEntry::Link(Link { label, target: LinkTarget::External(url) })
}

const fn document(label: &'static str, path: &'static str) -> SidebarEntry {
    SidebarEntry::Link(Link { label, target: LinkTarget::Document(path) })
}

const fn page(label: &'static str, page: Page) -> SidebarEntry {
    SidebarEntry::Link(Link { label, target: LinkTarget::Page(page) })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarSection {
    Costco,
    Profile,
    Insurance,
    Stinte,
    Warehouse,
}

impl SidebarSection {
    pub const ALL: [SidebarSection; 5] = [
        SidebarSection::Costco,
        SidebarSection::Profile,
        SidebarSection::Insurance,
        SidebarSection::Stinte,
        SidebarSection::Warehouse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SidebarSection::Costco => "COSTCO",
            SidebarSection::Profile => "PROFILE",
            SidebarSection::Insurance => "Insurance",
            SidebarSection::Stinte => "STINTE",
            SidebarSection::Warehouse => "WAREHOUSE",
        }
    }

    pub fn entries(&self) -> &'static [SidebarEntry] {
        match self {
            SidebarSection::Costco => COSTCO_ENTRIES,
            SidebarSection::Profile => PROFILE_ENTRIES,
            SidebarSection::Insurance => INSURANCE_ENTRIES,
            SidebarSection::Stinte => STINTE_ENTRIES,
            SidebarSection::Warehouse => WAREHOUSE_ENTRIES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    Link(Link),
    Section(SidebarSection),
}

static COSTCO_ENTRIES: &[SidebarEntry] = &[
    external("Costco Sites", ISOLVED_LOGIN),
    external("Costco Tech Notes", ISOLVED_LOGIN),
];

static INSURANCE_ENTRIES: &[SidebarEntry] = &[
    document("Dental Insurance", "/insurance/dental"),
    document("Health Insurance", "/insurance/health"),
    document("Vision Insurance", "/insurance/vision"),
];

static PROFILE_ENTRIES: &[SidebarEntry] = &[
    SidebarEntry::Section(SidebarSection::Insurance),
    external("Pay Roll", ISOLVED_LOGIN),
    document("Performance Reviews / Skill Assessments", "/performance"),
    document("Time Sheet", "/timesheet"),
    document("Training Course", "/training"),
];

static STINTE_ENTRIES: &[SidebarEntry] = &[
    page("Ask IT", Page::Contacts),
    page("Contact Information", Page::Contacts),
    document("Daily Safety Checklist", "/Daily Safety Meeting Checklist.pdf"),
    document("Employee Handbook", "/employee-handbook.pdf"),
    external("HR", ISOLVED_LOGIN),
    page("Material Information", Page::Materials),
    external(
        "Time Off Requests",
        "https://docs.google.com/forms/d/e/1FAIpQLSe8a8mo66k8k-ZhcUShwpB-_25onm1XclrsyqkrAUtFbSebRQ/viewform",
    ),
];

static WAREHOUSE_ENTRIES: &[SidebarEntry] = &[
    page("Material", Page::Materials),
    document("Request", "/warehouse/request"),
];

/// Top level of the dashboard sidebar, in display order
pub static SIDEBAR: &[SidebarEntry] = &[
    SidebarEntry::Section(SidebarSection::Costco),
    external("BUILDOPS", "https://leads.buildops.com/login"),
    external("GOOGLE EMAIL", "https://mail.google.com"),
    external("GOOGLE CHAT", "https://chat.google.com"),
    SidebarEntry::Section(SidebarSection::Profile),
    page("SCHEDULE", Page::Schedule),
    page("CALENDAR", Page::Calendar),
    SidebarEntry::Section(SidebarSection::Stinte),
    SidebarEntry::Section(SidebarSection::Warehouse),
];

/// Open/closed flag per sidebar section. Everything starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: Vec<SidebarSection>,
}

impl SidebarState {
    pub fn is_open(&self, section: SidebarSection) -> bool {
        self.open.contains(&section)
    }

    pub fn toggle(&mut self, section: SidebarSection) {
        if let Some(pos) = self.open.iter().position(|s| *s == section) {
            self.open.remove(pos);
        } else {
            self.open.push(section);
        }
    }
}

/// Gmail compose window addressed to `to`, subject "Hello <name>"
pub fn gmail_compose_url(to: &str, name: &str) -> String {
    format!(
        "https://mail.google.com/mail/?view=cm&fs=1&to={}&su=Hello%20{}",
        urlencoding::encode(to),
        urlencoding::encode(name)
    )
}

pub fn maps_search_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(address)
    )
}

/// Join an API base URL and a path without doubling or dropping the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
