//! Aggregators reducing record subsets to KPI scalars.
//!
//! # Invariants
//! - Every function is pure over the subset it is given.
//! - Ratios never divide by zero: utilization is 0 and compliance is 100
//!   when the denominator is 0.

use serde::{Deserialize, Serialize};

/// Counts items satisfying `predicate`.
pub fn count_where<T, I, P>(items: I, mut predicate: P) -> usize
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).count()
}

/// Sums `value` over items.
pub fn sum_by<T, I, V>(items: I, mut value: V) -> f64
where
    I: IntoIterator<Item = T>,
    V: FnMut(&T) -> f64,
{
    items.into_iter().map(|item| value(&item)).sum()
}

/// `round(spend / budget * 100)`, or 0 when `budget` is not positive.
///
/// Negative spend is reported as 0.
pub fn utilization(spend: f64, budget: f64) -> u32 {
    if budget <= 0.0 || !budget.is_finite() || !spend.is_finite() {
        return 0;
    }
    let percent = (spend / budget * 100.0).round();
    if percent <= 0.0 {
        0
    } else if percent >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        percent as u32
    }
}

/// `good / (good + bad) * 100`, rounded to one decimal; 100 when both are 0.
pub fn compliance_rate(good: usize, bad: usize) -> f64 {
    let total = good + bad;
    if total == 0 {
        return 100.0;
    }
    let rate = good as f64 / total as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Share of a total attributed to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// Whole percentage of the grand total; 0 when the grand total is 0.
    pub percent: u32,
}

/// Groups items by category and reports each category's share of the sum.
///
/// Categories appear in first-seen order.
pub fn category_breakdown<T, I, C, V>(items: I, mut category: C, mut value: V) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = T>,
    C: FnMut(&T) -> String,
    V: FnMut(&T) -> f64,
{
    let mut shares: Vec<CategoryShare> = Vec::new();
    for item in items {
        let name = category(&item);
        let amount = value(&item);
        match shares.iter_mut().find(|share| share.category == name) {
            Some(share) => share.total += amount,
            None => shares.push(CategoryShare {
                category: name,
                total: amount,
                percent: 0,
            }),
        }
    }

    let grand_total: f64 = shares.iter().map(|share| share.total).sum();
    for share in &mut shares {
        share.percent = utilization(share.total, grand_total);
    }
    shares
}

/// First `limit` items of an already-ordered sequence.
pub fn top_n<T, I>(items: I, limit: usize) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    items.into_iter().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::{category_breakdown, compliance_rate, count_where, sum_by, utilization};

    #[test]
    fn utilization_guards_zero_budget() {
        assert_eq!(utilization(0.0, 0.0), 0);
        assert_eq!(utilization(145_000.0, 0.0), 0);
        assert_eq!(utilization(145_000.0, 200_000.0), 73);
    }

    #[test]
    fn compliance_rate_defaults_to_full_when_nothing_counted() {
        assert_eq!(compliance_rate(0, 0), 100.0);
        assert_eq!(compliance_rate(3, 0), 100.0);
        assert_eq!(compliance_rate(4, 2), 66.7);
    }

    #[test]
    fn count_and_sum_over_subset() {
        let amounts = [10.0, 20.5, 30.0];
        assert_eq!(count_where(amounts.iter(), |value| **value > 15.0), 2);
        assert_eq!(sum_by(amounts.iter(), |value| **value), 60.5);
    }

    #[test]
    fn breakdown_keeps_first_seen_order() {
        let rows = [("Travel", 45.0), ("Food", 18.0), ("Travel", 0.0), ("Software", 37.0)];
        let shares = category_breakdown(rows.iter(), |row| row.0.to_string(), |row| row.1);
        let names: Vec<&str> = shares.iter().map(|share| share.category.as_str()).collect();
        assert_eq!(names, vec!["Travel", "Food", "Software"]);
        assert_eq!(shares[0].percent, 45);
    }
}
