//! Sign-in gating by email domain
//!
//! The identity provider is external; this module only decides whether an
//! account email it reports may enter the portal.

use serde::{Deserialize, Serialize};

use crate::{PortalError, Result};

pub const DEFAULT_ALLOWED_DOMAINS: [&str; 3] = ["stinte.co", "upandcs.com", "usandcs.com"];

pub fn default_allowed_domains() -> Vec<String> {
    DEFAULT_ALLOWED_DOMAINS.iter().map(|d| d.to_string()).collect()
}

/// Trim and lower-case an account email
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A signed-in portal user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct AccessGate {
    domains: Vec<String>,
}

impl AccessGate {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().trim().trim_start_matches('@').to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn is_allowed(&self, email: &str) -> bool {
        let email = normalize_email(email);
        self.domains
            .iter()
            .any(|domain| email.ends_with(&format!("@{}", domain)))
    }

    pub fn sign_in(&self, email: &str) -> Result<Session> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(PortalError::InvalidInput("email is required".to_string()));
        }
        if self.is_allowed(&email) {
            Ok(Session { email })
        } else {
            Err(PortalError::AccessDenied { email })
        }
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_DOMAINS)
    }
}
