//! Demonstration jobs for a fresh installation.

use super::draft::{parse_date, JobDraft};
use super::fields::{Color, JobStatus, Port, Section};
use crate::error::JobError;

struct Sample {
    date: &'static str,
    color: Color,
    port: Port,
    status: JobStatus,
    section: i64,
    entry_no: &'static str,
    container_no: &'static str,
    remarks: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        date: "2024-08-06",
        color: Color::Blue,
        port: Port::Mct,
        status: JobStatus::Marine,
        section: 1,
        entry_no: "ENT001",
        container_no: "CONT12345",
        remarks: "Priority shipment - handle with care",
    },
    Sample {
        date: "2024-08-06",
        color: Color::Green,
        port: Port::Lgict,
        status: JobStatus::Lodge,
        section: 2,
        entry_no: "ENT002",
        container_no: "CONT67890",
        remarks: "Standard processing",
    },
    Sample {
        date: "2024-01-17",
        color: Color::Green,
        port: Port::Vct,
        status: JobStatus::Examiner,
        section: 3,
        entry_no: "ENT003",
        container_no: "CONT11111",
        remarks: "Requires special inspection",
    },
    Sample {
        date: "2024-01-18",
        color: Color::Yellow,
        port: Port::Mgt,
        status: JobStatus::Done,
        section: 4,
        entry_no: "ENT004",
        container_no: "CONT22222",
        remarks: "Completed successfully",
    },
];

/// Drafts for the sample jobs, in catalog order.
pub fn sample_drafts() -> Result<Vec<JobDraft>, JobError> {
    SAMPLES
        .iter()
        .map(|s| {
            Ok(JobDraft {
                date: parse_date(s.date)?,
                color: s.color,
                port: s.port,
                status: s.status,
                section: Section::new(s.section)?,
                entry_no: s.entry_no.to_string(),
                container_no: s.container_no.to_string(),
                remarks: Some(s.remarks.to_string()),
            })
        })
        .collect()
}
