//! Expense snapshot sent to the insight service and the prompt around it.

use crate::insight::InsightError;
use serde::{Deserialize, Serialize};

const PROMPT_PREAMBLE: &str = "Analyze the following expense data and provide three concise insights for a financial executive. Categorize each insight as 'Observation', 'Suggestion', or 'Alert'. Focus on trends, anomalies, and actionable advice. Here's the data: ";

/// Aggregated expense figures, serialized in the service's camelCase shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSnapshot {
    pub total_spend: f64,
    pub budget: f64,
    pub pending_expenses: u32,
    pub policy_violations: u32,
    pub category_breakdown: Vec<CategoryValue>,
    pub recent_claims: Vec<ClaimSummary>,
}

/// Category share as a whole percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSummary {
    pub merchant: String,
    pub category: String,
    pub amount: f64,
}

/// Full prompt text: fixed instructions followed by the snapshot JSON.
///
/// # Errors
/// - Returns `Payload` when the snapshot cannot be encoded.
pub fn build_prompt(snapshot: &ExpenseSnapshot) -> Result<String, InsightError> {
    let data = serde_json::to_string(snapshot)?;
    Ok(format!("{PROMPT_PREAMBLE}{data}"))
}

#[cfg(test)]
mod tests {
    use super::{build_prompt, CategoryValue, ExpenseSnapshot};

    #[test]
    fn prompt_embeds_camel_case_payload() {
        let snapshot = ExpenseSnapshot {
            total_spend: 145_000.0,
            budget: 200_000.0,
            pending_expenses: 7,
            policy_violations: 2,
            category_breakdown: vec![CategoryValue {
                category: "Travel".to_string(),
                value: 45,
            }],
            recent_claims: Vec::new(),
        };
        let prompt = build_prompt(&snapshot).unwrap();
        assert!(prompt.starts_with("Analyze the following expense data"));
        assert!(prompt.contains("\"pendingExpenses\":7"));
        assert!(prompt.contains("\"categoryBreakdown\":[{\"category\":\"Travel\",\"value\":45}]"));
    }
}
