//! Closed value types for job fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::JobError;

/// Color tag attached to a job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Black,
        Color::White,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Purple => "Purple",
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| JobError::UnknownColor(s.to_string()))
    }
}

/// Processing status of a job. `Done` is the only terminal value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Lodge,
    Marine,
    Examiner,
    Appraiser,
    Final,
    Done,
}

impl JobStatus {
    pub const ALL: [JobStatus; 6] = [
        JobStatus::Lodge,
        JobStatus::Marine,
        JobStatus::Examiner,
        JobStatus::Appraiser,
        JobStatus::Final,
        JobStatus::Done,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Lodge => "Lodge",
            JobStatus::Marine => "Marine",
            JobStatus::Examiner => "Examiner",
            JobStatus::Appraiser => "Appraiser",
            JobStatus::Final => "Final",
            JobStatus::Done => "Done",
        }
    }

    /// Returns true for every status except `Done`.
    pub fn is_active(&self) -> bool {
        match self {
            JobStatus::Lodge
            | JobStatus::Marine
            | JobStatus::Examiner
            | JobStatus::Appraiser
            | JobStatus::Final => true,
            JobStatus::Done => false,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobStatus {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        JobStatus::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| JobError::UnknownStatus(s.to_string()))
    }
}

/// Terminal catalog. Serialized as the full display label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Port {
    #[serde(rename = "MCT - Mindanao Container Terminal")]
    Mct,
    #[serde(rename = "LGICT - Laguna Gateway Terminal")]
    Lgict,
    #[serde(rename = "VCT - Visayas Container Terminal")]
    Vct,
    #[serde(rename = "MGT - Matadi Gateway Terminal")]
    Mgt,
    #[serde(rename = "SPICT - South Pacific International Container")]
    Spict,
    #[serde(rename = "MITL - Motukea International Terminal")]
    Mitl,
    #[serde(rename = "BICT - Batumi International Container Terminal")]
    Bict,
    #[serde(rename = "OMT - Onne Multipurpose Terminal")]
    Omt,
    #[serde(rename = "TecPlata - TecPlata S.A.")]
    TecPlata,
    #[serde(rename = "AGCT - Adriatic Gate Container Terminal")]
    Agct,
    #[serde(rename = "MICT - Manila International Container Terminal")]
    Mict,
    #[serde(rename = "NORTHPORT - Manila North Harbor Port International Terminal")]
    Northport,
    #[serde(rename = "SBITC - Subic Bay International Terminals")]
    Sbitc,
    #[serde(rename = "POM - Port of Manila")]
    Pom,
}

impl Port {
    pub const ALL: [Port; 14] = [
        Port::Mct,
        Port::Lgict,
        Port::Vct,
        Port::Mgt,
        Port::Spict,
        Port::Mitl,
        Port::Bict,
        Port::Omt,
        Port::TecPlata,
        Port::Agct,
        Port::Mict,
        Port::Northport,
        Port::Sbitc,
        Port::Pom,
    ];

    /// Full catalog label, e.g. `MICT - Manila International Container Terminal`.
    pub fn label(&self) -> &'static str {
        match self {
            Port::Mct => "MCT - Mindanao Container Terminal",
            Port::Lgict => "LGICT - Laguna Gateway Terminal",
            Port::Vct => "VCT - Visayas Container Terminal",
            Port::Mgt => "MGT - Matadi Gateway Terminal",
            Port::Spict => "SPICT - South Pacific International Container",
            Port::Mitl => "MITL - Motukea International Terminal",
            Port::Bict => "BICT - Batumi International Container Terminal",
            Port::Omt => "OMT - Onne Multipurpose Terminal",
            Port::TecPlata => "TecPlata - TecPlata S.A.",
            Port::Agct => "AGCT - Adriatic Gate Container Terminal",
            Port::Mict => "MICT - Manila International Container Terminal",
            Port::Northport => "NORTHPORT - Manila North Harbor Port International Terminal",
            Port::Sbitc => "SBITC - Subic Bay International Terminals",
            Port::Pom => "POM - Port of Manila",
        }
    }

    /// Short terminal code, the part of the label before ` - `.
    pub fn code(&self) -> &'static str {
        let label = self.label();
        label.split(" - ").next().unwrap_or(label)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Port {
    type Err = JobError;

    /// Accepts either the full label or the short code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Port::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted) || p.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| JobError::UnknownPort(s.to_string()))
    }
}

/// Section number, always within `1..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Section(u8);

impl Section {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 15;

    pub fn new(value: i64) -> Result<Self, JobError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(JobError::SectionOutOfRange(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Section> {
        (Self::MIN..=Self::MAX).map(Section)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Section {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| JobError::InvalidSection(s.to_string()))?;
        Section::new(value)
    }
}

impl TryFrom<i64> for Section {
    type Error = JobError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Section::new(value)
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Section {
    /// Older collections stored the form value as a string (`"3"`), newer
    /// ones as a number. Both normalize to the integer here.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Section::new(n).map_err(D::Error::custom),
            Raw::Text(s) => s.parse().map_err(D::Error::custom),
        }
    }
}
