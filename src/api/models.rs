//! Data models for the quiz API and the Wikipedia summary endpoint

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a stored quiz
pub type QuizId = i64;

/// How hard a question is, as labelled by the generator
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    /// Label shown in the difficulty badge
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unknown => "unknown",
        }
    }
}

/// A single multiple-choice question
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Question text
    pub question: String,
    /// Answer choices, in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    /// The correct option (one of `options`)
    pub answer: String,
    /// Why the answer is correct
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
    /// Difficulty label
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: Difficulty,
    /// Article section this question was drawn from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl Question {
    /// The section this question belongs to.
    ///
    /// An empty section name is treated the same as a missing one: the
    /// question then belongs to every section.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref().filter(|s| !s.is_empty())
    }

    /// Check whether `choice` is the correct answer
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

/// A generated quiz as returned by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizDocument {
    /// Backend identifier, when the quiz has been stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuizId>,
    /// Source article URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Article title
    pub title: String,
    /// Article summary
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Section names, in article order
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<String>,
    /// Questions, in generation order
    #[serde(default, deserialize_with = "null_as_default")]
    pub quiz: Vec<Question>,
    /// Suggested further reading
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_topics: Vec<String>,
    /// Creation timestamp as sent by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// History list entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizSummary {
    pub id: QuizId,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl QuizSummary {
    /// Creation date, if the timestamp is present and parseable
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Date column text for the history table
    pub fn display_date(&self) -> String {
        self.created_date().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "N/A".to_string())
    }
}

/// Parse an ISO-8601 timestamp, with or without offset, into a date
fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Request body for quiz generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuizRequest {
    pub url: String,
}

/// Subset of the Wikipedia page summary response
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    pub title: String,
}

/// Error body returned by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// The detail as user-facing text; non-string details are shown as JSON
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
