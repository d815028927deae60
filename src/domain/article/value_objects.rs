use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const FORBIDDEN_PAGE_ID_CHARS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// Stable URL-safe identifier of an article. It is interpolated into request
/// paths as-is, so construction rejects anything that would change the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageId(String);

impl PageId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("page id cannot be empty".into()));
        }
        if value == "." || value == ".." {
            return Err(DomainError::Validation(format!(
                "page id `{value}` is a dot segment"
            )));
        }
        if value
            .chars()
            .any(|c| c.is_whitespace() || FORBIDDEN_PAGE_ID_CHARS.contains(&c))
        {
            return Err(DomainError::Validation(format!(
                "page id `{value}` is not url-safe"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PageId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageId> for String {
    fn from(value: PageId) -> Self {
        value.0
    }
}

/// Per-article revision number. Unique and increasing within one article,
/// with possible gaps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RevNumber(pub u64);

impl RevNumber {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RevNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RevNumber> for u64 {
    fn from(value: RevNumber) -> Self {
        value.0
    }
}

impl fmt::Display for RevNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
