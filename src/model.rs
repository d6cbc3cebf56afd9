//! Application records as they travel over the wire and out of storage.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an application. Stored as lowercase text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted membership application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub motivation: String,
    pub contribution: String,
    pub availability: String,
    pub skills: Vec<String>,
    pub other_details: Option<String>,
    pub membership_type: String,
    pub newsletter_opt_in: bool,
    pub status: ApplicationStatus,
    /// Local time at submission, `DD/MM/YYYY HH:MM:SS`.
    pub submitted_at: String,
    /// RFC 3339 UTC, millisecond precision.
    pub created_at: String,
}

/// Submission body. Required fields are optional here so that a missing field
/// is reported by presence validation rather than by the JSON decoder.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub motivation: Option<String>,
    pub contribution: Option<String>,
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_details: Option<String>,
    pub membership_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter_opt_in: Option<bool>,
}

/// Skills as submitted: a list, or a single string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Text(String),
}

impl SkillsInput {
    /// A string holding a JSON list is taken as that list; an empty string is no skills.
    pub fn into_list(self) -> Vec<String> {
        match self {
            SkillsInput::List(list) => list,
            SkillsInput::Text(text) => {
                if text.is_empty() {
                    return Vec::new();
                }
                serde_json::from_str::<Vec<String>>(&text).unwrap_or_else(|_| vec![text])
            }
        }
    }
}

impl From<Vec<String>> for SkillsInput {
    fn from(list: Vec<String>) -> Self {
        SkillsInput::List(list)
    }
}

/// A submission that passed presence validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub motivation: String,
    pub contribution: String,
    pub availability: String,
    pub skills: Vec<String>,
    pub other_details: Option<String>,
    pub membership_type: String,
    pub newsletter_opt_in: bool,
}

/// Counts per status. A key is omitted when its count could not be read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected: Option<i64>,
}
