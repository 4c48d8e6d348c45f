//! HTTP client for the text-generation service.
//!
//! # Invariants
//! - The credential travels only in the `x-goog-api-key` header.
//! - Reply text is the concatenation of the first candidate's text parts.

use crate::config::InsightConfig;
use crate::insight::InsightError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Source of generated insight text.
pub trait InsightClient {
    /// Sends `prompt` and returns the raw reply text.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, InsightError>> + Send;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Extracts the reply text from a `generateContent` response body.
///
/// Blank text is returned as-is so the parser can fall back to the canned
/// insights.
///
/// # Errors
/// - `Payload` for malformed JSON, `EmptyResponse` when the body has no
///   candidate at all.
pub fn response_text(body: &str) -> Result<String, InsightError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(InsightError::EmptyResponse)?;

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default())
}

/// `generateContent` client over `reqwest`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: InsightConfig,
}

impl GeminiClient {
    /// # Errors
    /// - Returns `Transport` when the HTTP client cannot be built.
    pub fn new(config: InsightConfig) -> Result<Self, InsightError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }
}

impl InsightClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(InsightError::MissingCredential)?;

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(
            "event=insight_http module=insight status={} bytes={}",
            status.as_u16(),
            body.len()
        );
        if !status.is_success() {
            return Err(InsightError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response_text(&body)
    }
}
