//! Single-key ascending sort over jobs.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::JobError;
use crate::job::Job;

/// Column the job table is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Date,
    EntryNo,
    ContainerNo,
    Port,
    Section,
    Status,
    Color,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Date,
        SortField::EntryNo,
        SortField::ContainerNo,
        SortField::Port,
        SortField::Section,
        SortField::Status,
        SortField::Color,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::EntryNo => "entryNo",
            SortField::ContainerNo => "containerNo",
            SortField::Port => "port",
            SortField::Section => "section",
            SortField::Status => "status",
            SortField::Color => "color",
        }
    }

    fn key(&self, job: &Job) -> SortKey {
        match self {
            SortField::Date => SortKey::Date(job.date),
            SortField::EntryNo => SortKey::Text(job.entry_no.to_lowercase()),
            SortField::ContainerNo => SortKey::Text(job.container_no.to_lowercase()),
            SortField::Port => SortKey::Text(job.port.label().to_lowercase()),
            SortField::Section => SortKey::Number(job.section.get()),
            SortField::Status => SortKey::Text(job.status.label().to_lowercase()),
            SortField::Color => SortKey::Text(job.color.label().to_lowercase()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = JobError;

    /// Accepts `entryNo`, `entry_no` and `entry-no` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| JobError::UnknownSortField(s.to_string()))
    }
}

/// Comparable projection of a job. All keys of one sort share a variant.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Date(NaiveDate),
    Text(String),
    Number(u8),
}

/// Sorts in place, ascending. Equal keys keep their relative order.
pub fn sort_jobs(jobs: &mut [&Job], field: SortField) {
    jobs.sort_by_cached_key(|job| field.key(job));
}
