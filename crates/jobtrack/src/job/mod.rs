//! The job entity and its input form.

pub mod draft;
pub mod fields;
mod samples;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use draft::JobDraft;
pub use fields::{Color, JobStatus, Port, Section};
pub use samples::sample_drafts;

/// Job identifier. Assigned from the creation time in milliseconds.
pub type JobId = u64;

/// A tracked shipment job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier.
    pub id: JobId,
    /// Job date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub color: Color,
    pub port: Port,
    pub status: JobStatus,
    pub section: Section,
    /// Entry number, the field the search box matches against.
    pub entry_no: String,
    pub container_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Builds a new job from a validated draft.
    pub fn from_draft(id: JobId, draft: JobDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            date: draft.date,
            color: draft.color,
            port: draft.port,
            status: draft.status,
            section: draft.section,
            entry_no: draft.entry_no,
            container_no: draft.container_no,
            remarks: draft.remarks,
            created_at,
            updated_at: None,
        }
    }

    /// Replaces every editable field, keeping `id` and `created_at`.
    pub fn apply_draft(&mut self, draft: JobDraft, updated_at: DateTime<Utc>) {
        self.date = draft.date;
        self.color = draft.color;
        self.port = draft.port;
        self.status = draft.status;
        self.section = draft.section;
        self.entry_no = draft.entry_no;
        self.container_no = draft.container_no;
        self.remarks = draft.remarks;
        self.updated_at = Some(updated_at);
    }

    /// Returns the editable fields as a draft, e.g. to pre-fill an edit form.
    pub fn to_draft(&self) -> JobDraft {
        JobDraft {
            date: self.date,
            color: self.color,
            port: self.port,
            status: self.status,
            section: self.section,
            entry_no: self.entry_no.clone(),
            container_no: self.container_no.clone(),
            remarks: self.remarks.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whole days since creation, rounded up. A job created a few minutes
    /// ago counts as one day.
    pub fn days_since_created(&self, now: DateTime<Utc>) -> i64 {
        let millis = (now - self.created_at).num_milliseconds();
        const DAY_MS: i64 = 24 * 60 * 60 * 1000;
        millis.div_euclid(DAY_MS) + i64::from(millis.rem_euclid(DAY_MS) != 0)
    }
}
