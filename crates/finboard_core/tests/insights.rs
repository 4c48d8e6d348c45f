use finboard_core::insight::client::response_text;
use finboard_core::insight::panel::request_insights;
use finboard_core::insight::parse::fallback_insights;
use finboard_core::insight::prompt::ExpenseSnapshot;
use finboard_core::seed;
use finboard_core::service::expense_service::ExpenseDashboard;
use finboard_core::{
    Insight, InsightCategory, InsightClient, InsightError, InsightPanel, RecordStore,
    INSIGHT_FAILURE_MESSAGE,
};
use std::sync::Mutex;
use std::time::Duration;

const LIMIT: Duration = Duration::from_secs(30);

struct ScriptedClient {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl InsightClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

struct FailingClient;

impl InsightClient for FailingClient {
    async fn generate(&self, _prompt: &str) -> Result<String, InsightError> {
        Err(InsightError::Status {
            status: 503,
            body: "overloaded".to_string(),
        })
    }
}

struct SlowClient;

impl InsightClient for SlowClient {
    async fn generate(&self, _prompt: &str) -> Result<String, InsightError> {
        tokio::time::sleep(Duration::from_secs(120)).await;
        Ok("Alert: too late".to_string())
    }
}

fn dashboard() -> ExpenseDashboard {
    ExpenseDashboard::new(
        seed::expense_ledger(),
        RecordStore::from_records(seed::expense_claims()).unwrap(),
    )
}

fn snapshot() -> ExpenseSnapshot {
    dashboard().snapshot()
}

#[test]
fn dashboard_figures_match_the_ledger() {
    let dashboard = dashboard();
    assert_eq!(dashboard.budget_utilization(), 73);
    assert_eq!(dashboard.pending_claims(), 2);

    let recent: Vec<u32> = dashboard.recent_claims().iter().map(|claim| claim.id).collect();
    assert_eq!(recent, vec![2, 1, 3, 4, 5, 6]);
}

#[test]
fn snapshot_carries_shares_and_recent_claims() {
    let snapshot = snapshot();
    assert_eq!(snapshot.total_spend, 145_000.0);
    assert_eq!(snapshot.budget, 200_000.0);
    assert_eq!(snapshot.pending_expenses, 7);
    assert_eq!(snapshot.policy_violations, 2);

    let shares: Vec<(&str, u32)> = snapshot
        .category_breakdown
        .iter()
        .map(|share| (share.category.as_str(), share.value))
        .collect();
    assert_eq!(
        shares,
        vec![("Travel", 45), ("Software", 28), ("Food", 18), ("Office Supplies", 9)]
    );

    let merchants: Vec<&str> = snapshot
        .recent_claims
        .iter()
        .map(|claim| claim.merchant.as_str())
        .collect();
    assert_eq!(merchants, vec!["Starbucks", "Uber", "Adobe Creative Cloud"]);
}

#[tokio::test]
async fn successful_refresh_parses_labelled_lines() {
    let client = ScriptedClient::new(
        "Here is what stands out:\n\
         1. **Observation:** Travel dominates spend.\n\
         - Suggestion: Audit software seats.\n\
         Alert: Two policy violations are open.\n\
         Alert: This fourth line is dropped.",
    );
    let mut panel = InsightPanel::new();

    assert!(panel.refresh(&client, &snapshot(), LIMIT).await);
    assert!(!panel.is_loading());
    assert_eq!(panel.error(), None);
    assert_eq!(
        panel.insights(),
        &[
            Insight::new(InsightCategory::Observation, "Travel dominates spend."),
            Insight::new(InsightCategory::Suggestion, "Audit software seats."),
            Insight::new(InsightCategory::Alert, "Two policy violations are open."),
        ]
    );

    let prompts = client.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"totalSpend\":145000.0"));
    assert!(prompts[0].contains("\"merchant\":\"Starbucks\""));
}

#[tokio::test]
async fn unlabelled_reply_falls_back_to_canned_insights() {
    let client = ScriptedClient::new("Spending looks fine overall.");
    let insights = request_insights(&client, &snapshot(), LIMIT).await.unwrap();
    assert_eq!(insights, fallback_insights());
}

#[tokio::test]
async fn blank_reply_shows_canned_insights_instead_of_an_error() {
    let body = r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#;
    let client = ScriptedClient::new(&response_text(body).unwrap());
    let mut panel = InsightPanel::new();

    assert!(panel.refresh(&client, &snapshot(), LIMIT).await);
    assert_eq!(panel.error(), None);
    assert_eq!(panel.insights(), fallback_insights().as_slice());
}

#[tokio::test]
async fn failed_refresh_shows_fixed_message() {
    let mut panel = InsightPanel::new();
    assert!(panel.refresh(&FailingClient, &snapshot(), LIMIT).await);
    assert!(!panel.is_loading());
    assert!(panel.insights().is_empty());
    assert_eq!(panel.error(), Some(INSIGHT_FAILURE_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn slow_service_times_out() {
    let result = request_insights(&SlowClient, &snapshot(), LIMIT).await;
    assert!(matches!(result, Err(InsightError::Timeout(limit)) if limit == LIMIT));

    let mut panel = InsightPanel::new();
    assert!(panel.refresh(&SlowClient, &snapshot(), LIMIT).await);
    assert_eq!(panel.error(), Some(INSIGHT_FAILURE_MESSAGE));
}

#[test]
fn stale_completion_is_ignored() {
    let mut panel = InsightPanel::new();
    let first = panel.begin();
    let second = panel.begin();

    let late = vec![Insight::new(InsightCategory::Alert, "stale")];
    assert!(!panel.complete(first, Ok(late)));
    assert!(panel.is_loading());
    assert!(panel.insights().is_empty());

    assert!(panel.complete(second, Err(InsightError::EmptyResponse)));
    assert!(!panel.is_loading());
    assert_eq!(panel.error(), Some(INSIGHT_FAILURE_MESSAGE));

    let third = panel.begin();
    assert_eq!(panel.error(), None);
    assert!(panel.complete(third, Ok(fallback_insights())));
    assert_eq!(panel.insights().len(), 3);
}
