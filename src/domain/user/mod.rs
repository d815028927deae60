// src/domain/user/mod.rs
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_AVATAR: &str = "/static/images/default_avatar.png";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserType {
    #[default]
    Anonymous,
    Normal,
    Wikidot,
    System,
    Bot,
    Other(String),
}

impl UserType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Normal => "normal",
            Self::Wikidot => "wikidot",
            Self::System => "system",
            Self::Bot => "bot",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for UserType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "anonymous" => Self::Anonymous,
            "normal" => Self::Normal,
            "wikidot" => Self::Wikidot,
            "system" => Self::System,
            "bot" => Self::Bot,
            _ => Self::Other(value),
        }
    }
}

impl From<UserType> for String {
    fn from(value: UserType) -> Self {
        match value {
            UserType::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account snapshot as the service embeds it in log entries and session data.
/// Held by value: it does not follow later changes to the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(rename = "type", default)]
    pub kind: UserType,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub staff: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl UserData {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.kind == UserType::Anonymous
    }

    pub fn can_administer(&self) -> bool {
        self.admin || self.staff
    }

    pub fn display_avatar(&self) -> &str {
        self.avatar
            .as_deref()
            .filter(|avatar| !avatar.is_empty())
            .unwrap_or(DEFAULT_AVATAR)
    }
}
