//! Conjunctive job filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::job::draft::parse_date;
use crate::job::{Color, Job, JobStatus, Port, Section};

/// The currently applied filter predicates. `None` means "not applied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Inclusive lower bound on `job.date`.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on `job.date`.
    pub date_to: Option<NaiveDate>,
    pub color: Option<Color>,
    pub status: Option<JobStatus>,
    pub section: Option<Section>,
    pub port: Option<Port>,
    /// Case-insensitive substring of `entry_no`.
    pub search: Option<String>,
}

/// Filter values as typed into the filter bar.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilter {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub color: Option<String>,
    pub status: Option<String>,
    pub section: Option<String>,
    pub port: Option<String>,
    pub search: Option<String>,
}

/// Parses an optional raw value. Blank input yields `None` silently,
/// malformed input yields `None` with a warning.
fn parse_optional<T, E, F>(field: &str, raw: Option<&str>, parse: F) -> Option<T>
where
    F: FnOnce(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    let value = raw.map(str::trim).filter(|v| !v.is_empty())?;
    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("Ignoring {} filter '{}': {}", field, value, e);
            None
        }
    }
}

impl FilterSpec {
    /// Builds filters from untyped input, dropping anything that does not parse.
    pub fn from_raw(raw: &RawFilter) -> Self {
        Self {
            date_from: parse_optional("dateFrom", raw.date_from.as_deref(), parse_date),
            date_to: parse_optional("dateTo", raw.date_to.as_deref(), parse_date),
            color: parse_optional("color", raw.color.as_deref(), str::parse),
            status: parse_optional("status", raw.status.as_deref(), str::parse),
            section: parse_optional("section", raw.section.as_deref(), str::parse),
            port: parse_optional("port", raw.port.as_deref(), str::parse),
            search: raw.search.clone().filter(|s| !s.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date_from.is_none()
            && self.date_to.is_none()
            && self.color.is_none()
            && self.status.is_none()
            && self.section.is_none()
            && self.port.is_none()
            && self.search.as_deref().map_or(true, str::is_empty)
    }

    /// Returns true when the job satisfies every applied predicate.
    pub fn matches(&self, job: &Job) -> bool {
        if self.date_from.is_some_and(|from| job.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| job.date > to) {
            return false;
        }
        if self.color.is_some_and(|c| job.color != c) {
            return false;
        }
        if self.status.is_some_and(|s| job.status != s) {
            return false;
        }
        if self.section.is_some_and(|s| job.section != s) {
            return false;
        }
        if self.port.is_some_and(|p| job.port != p) {
            return false;
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            if !job
                .entry_no
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        true
    }

    /// Human-readable summary for the filter status line.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) => {
                parts.push(format!("Date: {} to {}", short_date(from), short_date(to)))
            }
            (Some(from), None) => parts.push(format!("Date from: {}", short_date(from))),
            (None, Some(to)) => parts.push(format!("Date to: {}", short_date(to))),
            (None, None) => {}
        }
        if let Some(color) = self.color {
            parts.push(format!("Color: {}", color));
        }
        if let Some(status) = self.status {
            parts.push(format!("Status: {}", status));
        }
        if let Some(section) = self.section {
            parts.push(format!("Section: {}", section));
        }
        if let Some(port) = self.port {
            parts.push(format!("Port: {}", port));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("Search: {}", search));
        }

        if parts.is_empty() {
            "No filters applied".to_string()
        } else {
            format!("Active filters: {}", parts.join(", "))
        }
    }
}

/// Formats a date as `Jan 5, 2024`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
