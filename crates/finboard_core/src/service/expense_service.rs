//! Expense dashboard figures and the insight payload built from them.
//!
//! # Invariants
//! - Utilization is a whole percent and 0 when the budget is 0.
//! - Category shares are whole percents of the month's spend.
//! - The insight payload is derived from the same figures the dashboard shows.

use crate::insight::prompt::{CategoryValue, ClaimSummary, ExpenseSnapshot};
use crate::model::expense::{ClaimStatus, ExpenseCategory, ExpenseClaim, ExpenseClaimField};
use crate::store::record_store::RecordStore;
use crate::view::aggregate::{category_breakdown, count_where, top_n, utilization, CategoryShare};
use crate::view::sort::{sort_records, SortRule};

pub const RECENT_CLAIMS_LIMIT: usize = 3;

/// Month-to-date totals reported by the expense system.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLedger {
    pub monthly_spend: f64,
    pub monthly_budget: f64,
    pub pending_expenses: u32,
    pub policy_violations: u32,
    /// Spend per category for the month, in display order.
    pub category_spend: Vec<(ExpenseCategory, f64)>,
}

#[derive(Debug, Clone)]
pub struct ExpenseDashboard {
    ledger: ExpenseLedger,
    claims: RecordStore<ExpenseClaim>,
}

impl ExpenseDashboard {
    pub fn new(ledger: ExpenseLedger, claims: RecordStore<ExpenseClaim>) -> Self {
        Self { ledger, claims }
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn claims(&self) -> &RecordStore<ExpenseClaim> {
        &self.claims
    }

    pub fn budget_utilization(&self) -> u32 {
        utilization(self.ledger.monthly_spend, self.ledger.monthly_budget)
    }

    pub fn category_breakdown(&self) -> Vec<CategoryShare> {
        category_breakdown(
            self.ledger.category_spend.iter(),
            |(category, _)| category.label().to_string(),
            |(_, amount)| *amount,
        )
    }

    /// Claims newest first.
    pub fn recent_claims(&self) -> Vec<&ExpenseClaim> {
        let all: Vec<&ExpenseClaim> = self.claims.records().iter().collect();
        let rule = SortRule::descending(ExpenseClaimField::Date)
            .then_ascending(ExpenseClaimField::Merchant);
        sort_records(all, Some(&rule))
    }

    /// Recent claims still awaiting approval.
    pub fn pending_claims(&self) -> usize {
        count_where(self.claims.records().iter(), |claim| {
            claim.status == ClaimStatus::Pending
        })
    }

    /// Payload for the insight service.
    pub fn snapshot(&self) -> ExpenseSnapshot {
        let category_breakdown = self
            .category_breakdown()
            .into_iter()
            .map(|share| CategoryValue {
                category: share.category,
                value: share.percent,
            })
            .collect();
        let recent_claims = top_n(
            self.recent_claims()
                .into_iter()
                .filter(|claim| claim.status != ClaimStatus::Rejected),
            RECENT_CLAIMS_LIMIT,
        )
        .into_iter()
        .map(|claim| ClaimSummary {
            merchant: claim.merchant.clone(),
            category: claim.category.label().to_string(),
            amount: claim.amount,
        })
        .collect();

        ExpenseSnapshot {
            total_spend: self.ledger.monthly_spend,
            budget: self.ledger.monthly_budget,
            pending_expenses: self.ledger.pending_expenses,
            policy_violations: self.ledger.policy_violations,
            category_breakdown,
            recent_claims,
        }
    }
}
