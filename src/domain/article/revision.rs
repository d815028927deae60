use crate::domain::article::value_objects::RevNumber;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const DEFAULT_LOG_PAGE_SIZE: u64 = 25;

/// Category of a log entry. Open-ended: unknown kinds round-trip as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RevisionType {
    New,
    Source,
    Title,
    Name,
    Tags,
    Parent,
    Revert,
    Other(String),
}

impl RevisionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Source => "source",
            Self::Title => "title",
            Self::Name => "name",
            Self::Tags => "tags",
            Self::Parent => "parent",
            Self::Revert => "revert",
            Self::Other(other) => other,
        }
    }

    /// In-place content or metadata change, as opposed to creation or revert.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Source | Self::Title | Self::Name | Self::Tags | Self::Parent
        )
    }
}

impl From<String> for RevisionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "new" => Self::New,
            "source" => Self::Source,
            "title" => Self::Title,
            "name" => Self::Name,
            "tags" => Self::Tags,
            "parent" => Self::Parent,
            "revert" => Self::Revert,
            _ => Self::Other(value),
        }
    }
}

impl From<RevisionType> for String {
    fn from(value: RevisionType) -> Self {
        match value {
            RevisionType::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RevisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionLogEntry {
    pub rev_number: RevNumber,
    pub user: UserData,
    #[serde(default)]
    pub comment: String,
    pub created_at: String,
    #[serde(rename = "type")]
    pub kind: RevisionType,
    #[serde(default)]
    pub meta: Map<String, Value>,
}

impl RevisionLogEntry {
    /// `createdAt` is server-authoritative and kept verbatim; this is a
    /// best-effort RFC 3339 reading of it.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

/// One window of an article's history. `count` is the length of the whole
/// history, not of `entries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionLog {
    pub count: u64,
    #[serde(default)]
    pub entries: Vec<RevisionLogEntry>,
}

impl RevisionLog {
    pub fn newest(&self) -> Option<&RevisionLogEntry> {
        self.entries.iter().max_by_key(|entry| entry.rev_number)
    }

    pub fn oldest(&self) -> Option<&RevisionLogEntry> {
        self.entries.iter().min_by_key(|entry| entry.rev_number)
    }

    pub fn find(&self, rev_number: RevNumber) -> Option<&RevisionLogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.rev_number == rev_number)
    }

    /// True once `window` starts at or past the end of the history.
    pub const fn is_exhausted(&self, window: LogWindow) -> bool {
        window.from >= self.count
    }
}

/// Half-open offset window `[from, to)` into the log. Offsets are not stable
/// under concurrent edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogWindow {
    from: u64,
    to: u64,
}

impl LogWindow {
    pub fn new(from: u64, to: u64) -> DomainResult<Self> {
        if to < from {
            return Err(DomainError::Validation(format!(
                "log window end {to} is before its start {from}"
            )));
        }
        Ok(Self { from, to })
    }

    pub const fn starting_at(from: u64) -> Self {
        Self {
            from,
            to: from.saturating_add(DEFAULT_LOG_PAGE_SIZE),
        }
    }

    pub const fn start(self) -> u64 {
        self.from
    }

    pub const fn end(self) -> u64 {
        self.to
    }

    pub const fn len(self) -> u64 {
        self.to - self.from
    }

    pub const fn is_empty(self) -> bool {
        self.to == self.from
    }

    /// Window of the same width starting `received` entries after this one.
    /// Servers may return short pages, so this is what a sequential reader
    /// advances by.
    pub const fn advanced_by(self, received: u64) -> Self {
        let width = self.len();
        let from = self.from.saturating_add(received);
        Self {
            from,
            to: from.saturating_add(width),
        }
    }
}

impl Default for LogWindow {
    fn default() -> Self {
        Self::starting_at(0)
    }
}
