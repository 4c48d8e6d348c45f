//! Insights panel state: loading flag, result list and error message.
//!
//! # Invariants
//! - Each request gets a ticket; only the newest ticket may complete.
//! - Loading is cleared whenever the newest request completes.
//! - On failure the insight list is empty and the message is fixed.

use crate::insight::client::InsightClient;
use crate::insight::parse::parse_insights;
use crate::insight::prompt::{build_prompt, ExpenseSnapshot};
use crate::insight::{Insight, InsightError};
use log::{debug, error, info};
use std::time::Duration;

pub const INSIGHT_FAILURE_MESSAGE: &str = "Failed to generate insights. Please try again.";

/// Identifies one insight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct InsightTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightPanel {
    loading: bool,
    insights: Vec<Insight>,
    error: Option<String>,
    latest: u64,
}

impl InsightPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a request: sets loading, clears results and error.
    pub fn begin(&mut self) -> InsightTicket {
        self.latest += 1;
        self.loading = true;
        self.insights.clear();
        self.error = None;
        InsightTicket(self.latest)
    }

    /// Applies a finished request. Returns `false` and changes nothing when
    /// a newer request has started since `ticket` was issued.
    pub fn complete(
        &mut self,
        ticket: InsightTicket,
        result: Result<Vec<Insight>, InsightError>,
    ) -> bool {
        if ticket.0 != self.latest {
            debug!(
                "event=insight_complete module=insight status=noop reason=stale ticket={} latest={}",
                ticket.0, self.latest
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(insights) => {
                info!(
                    "event=insight_complete module=insight status=ok count={}",
                    insights.len()
                );
                self.insights = insights;
                self.error = None;
            }
            Err(err) => {
                error!("event=insight_complete module=insight status=error err={err}");
                self.insights.clear();
                self.error = Some(INSIGHT_FAILURE_MESSAGE.to_string());
            }
        }
        true
    }

    /// Runs one full request against `client` and applies its result.
    pub async fn refresh<C: InsightClient>(
        &mut self,
        client: &C,
        snapshot: &ExpenseSnapshot,
        limit: Duration,
    ) -> bool {
        let ticket = self.begin();
        let result = request_insights(client, snapshot, limit).await;
        self.complete(ticket, result)
    }
}

/// Builds the prompt, calls the service within `limit` and parses the reply.
///
/// # Errors
/// - `Timeout` when `limit` elapses; otherwise whatever the client reports.
pub async fn request_insights<C: InsightClient>(
    client: &C,
    snapshot: &ExpenseSnapshot,
    limit: Duration,
) -> Result<Vec<Insight>, InsightError> {
    let prompt = build_prompt(snapshot)?;
    let text = tokio::time::timeout(limit, client.generate(&prompt))
        .await
        .map_err(|_| InsightError::Timeout(limit))??;
    Ok(parse_insights(&text))
}
