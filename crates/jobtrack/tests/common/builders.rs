//! Builders for job test data.

#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use jobtrack::job::draft::parse_date;
use jobtrack::{Color, Job, JobDraft, JobStatus, Port, Section};

/// Fixed reference instant so tests never depend on the wall clock.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap()
}

/// Builder for `Job` and `JobDraft` values.
pub struct JobBuilder {
    id: u64,
    date: NaiveDate,
    color: Color,
    port: Port,
    status: JobStatus,
    section: Section,
    entry_no: String,
    container_no: String,
    remarks: Option<String>,
}

impl JobBuilder {
    /// Create a builder with sensible defaults for testing.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            color: Color::Red,
            port: Port::Mict,
            status: JobStatus::Lodge,
            section: Section::new(1).unwrap(),
            entry_no: format!("ENT-{:04}", id),
            container_no: format!("MSKU{:07}", id),
            remarks: None,
        }
    }

    /// Set the job date from `YYYY-MM-DD`.
    pub fn date(mut self, date: &str) -> Self {
        self.date = parse_date(date).expect("valid test date");
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn port(mut self, port: Port) -> Self {
        self.port = port;
        self
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn section(mut self, section: i64) -> Self {
        self.section = Section::new(section).expect("valid test section");
        self
    }

    pub fn entry_no(mut self, entry_no: &str) -> Self {
        self.entry_no = entry_no.to_string();
        self
    }

    pub fn container_no(mut self, container_no: &str) -> Self {
        self.container_no = container_no.to_string();
        self
    }

    pub fn remarks(mut self, remarks: &str) -> Self {
        self.remarks = Some(remarks.to_string());
        self
    }

    /// Build the editable part only.
    pub fn draft(self) -> JobDraft {
        JobDraft {
            date: self.date,
            color: self.color,
            port: self.port,
            status: self.status,
            section: self.section,
            entry_no: self.entry_no,
            container_no: self.container_no,
            remarks: self.remarks,
        }
    }

    /// Build a stored job created at the reference instant.
    pub fn build(self) -> Job {
        let id = self.id;
        Job::from_draft(id, self.draft(), reference_now())
    }
}

/// `count` jobs with ids `1..=count`, cycling through statuses, colors,
/// ports and sections, dated across one week.
pub fn job_fixture(count: usize) -> Vec<Job> {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let date = base + Duration::days((i % 7) as i64);
            JobBuilder::new(i as u64 + 1)
                .date(&date.format("%Y-%m-%d").to_string())
                .status(JobStatus::ALL[i % JobStatus::ALL.len()])
                .color(Color::ALL[i % Color::ALL.len()])
                .port(Port::ALL[i % Port::ALL.len()])
                .section((i % 15) as i64 + 1)
                .build()
        })
        .collect()
}
