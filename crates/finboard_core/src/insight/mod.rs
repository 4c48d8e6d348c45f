//! AI-generated expense insights.
//!
//! # Responsibility
//! - Build the insight prompt from an expense snapshot.
//! - Call the generation service and parse its free-text reply.
//! - Track loading/error/result state for the insights panel.
//!
//! # Invariants
//! - At most three insights are shown.
//! - Any failure leaves the panel with an error message and no insights.

pub mod client;
pub mod panel;
pub mod parse;
pub mod prompt;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightCategory {
    Observation,
    Suggestion,
    Alert,
}

impl InsightCategory {
    pub const ALL: [InsightCategory; 3] = [Self::Observation, Self::Suggestion, Self::Alert];

    pub fn label(self) -> &'static str {
        match self {
            Self::Observation => "Observation",
            Self::Suggestion => "Suggestion",
            Self::Alert => "Alert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub text: String,
}

impl Insight {
    pub fn new(category: InsightCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

/// Failure of one insight request.
#[derive(Debug)]
pub enum InsightError {
    /// No `API_KEY` configured.
    MissingCredential,
    /// JSON encoding of the request or decoding of the reply failed.
    Payload(serde_json::Error),
    /// Connection, TLS or body-read failure.
    Transport(reqwest::Error),
    /// Service answered with a non-success status.
    Status { status: u16, body: String },
    /// Reply carried no candidate at all.
    EmptyResponse,
    /// Request did not complete in time.
    Timeout(Duration),
}

impl Display for InsightError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "insight service credential is not configured"),
            Self::Payload(err) => write!(f, "insight payload is malformed: {err}"),
            Self::Transport(err) => write!(f, "insight request failed: {err}"),
            Self::Status { status, body } => {
                write!(f, "insight service returned status {status}: {body}")
            }
            Self::EmptyResponse => write!(f, "insight service returned no candidate"),
            Self::Timeout(limit) => {
                write!(f, "insight request timed out after {}s", limit.as_secs())
            }
        }
    }
}

impl Error for InsightError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Payload(err) => Some(err),
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InsightError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

impl From<reqwest::Error> for InsightError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}
