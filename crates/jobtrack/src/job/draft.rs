//! Add/edit form payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{Color, JobStatus, Port, Section};
use crate::error::JobError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, JobError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| JobError::InvalidDate(s.to_string()))
}

/// Every editable job field. Used for both creation and edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub date: NaiveDate,
    pub color: Color,
    pub port: Port,
    pub status: JobStatus,
    pub section: Section,
    pub entry_no: String,
    pub container_no: String,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl JobDraft {
    /// Trims free-text fields and drops blank remarks, then checks the
    /// required text fields.
    pub fn normalize(mut self) -> Result<Self, JobError> {
        self.entry_no = self.entry_no.trim().to_string();
        self.container_no = self.container_no.trim().to_string();
        self.remarks = self
            .remarks
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        if self.entry_no.is_empty() {
            return Err(JobError::EmptyField { field: "entryNo" });
        }
        if self.container_no.is_empty() {
            return Err(JobError::EmptyField {
                field: "containerNo",
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> JobDraft {
        JobDraft {
            date: parse_date("2026-03-14").unwrap(),
            color: Color::Green,
            port: Port::Sbitc,
            status: JobStatus::Marine,
            section: Section::new(4).unwrap(),
            entry_no: "  ENT-77 ".to_string(),
            container_no: "CAIU7000001".to_string(),
            remarks: Some("   ".to_string()),
        }
    }

    #[test]
    fn test_normalize_trims_and_drops_blank_remarks() {
        let draft = draft().normalize().unwrap();
        assert_eq!(draft.entry_no, "ENT-77");
        assert_eq!(draft.container_no, "CAIU7000001");
        assert_eq!(draft.remarks, None);
    }

    #[test]
    fn test_normalize_rejects_blank_required_fields() {
        let mut blank_entry = draft();
        blank_entry.entry_no = "\t".to_string();
        assert_eq!(
            blank_entry.normalize(),
            Err(JobError::EmptyField { field: "entryNo" })
        );

        let mut blank_container = draft();
        blank_container.container_no = " ".to_string();
        assert_eq!(
            blank_container.normalize(),
            Err(JobError::EmptyField {
                field: "containerNo"
            })
        );
    }

    #[test]
    fn test_draft_json_uses_camel_case() {
        let json = serde_json::to_value(draft()).unwrap();
        assert_eq!(json["entryNo"], "  ENT-77 ");
        assert_eq!(json["section"], 4);
        assert_eq!(json["date"], "2026-03-14");
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("14/03/2026").is_err());
        assert!(parse_date("").is_err());
    }
}
