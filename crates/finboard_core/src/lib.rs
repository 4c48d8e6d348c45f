//! Core logic for the finboard back-office screens.
//! Every list, KPI, form rule and insight request is decided here.

pub mod config;
pub mod insight;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;
pub mod view;

pub use config::{ConfigError, InsightConfig};
pub use insight::client::{GeminiClient, InsightClient};
pub use insight::panel::{InsightPanel, INSIGHT_FAILURE_MESSAGE};
pub use insight::{Insight, InsightCategory, InsightError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{Record, StoreKey};
pub use model::validation::{FieldError, FieldErrorKind, ValidationErrors};
pub use service::editor::{EditMode, Editor, EditorState, RecordForm, SubmitOutcome};
pub use store::record_store::{RecordStore, StoreError, StoreResult};
pub use view::calendar::CalendarError;
pub use view::list_view::{derive_view, ListView};
pub use view::paginate::{Page, Paginator};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
