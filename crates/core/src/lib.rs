//! Shared portal logic: record tables, page definitions, access gating
//! and sidebar links. Rendering helpers live behind the `ui` feature.

mod error;
mod models;

pub mod access;
pub mod calendar;
pub mod links;
pub mod pages;
pub mod table_view;

#[cfg(feature = "ui")]
pub mod ui;

pub use error::{PortalError, Result};
pub use models::*;
pub use table_view::*;
pub use pages::{Page, TableKind};
