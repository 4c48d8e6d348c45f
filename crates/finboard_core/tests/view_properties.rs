use chrono::NaiveDate;
use finboard_core::model::expense::{ClaimStatus, ExpenseCategory, ExpenseClaim, ExpenseClaimField};
use finboard_core::view::filter::FilterSet;
use finboard_core::view::sort::SortRule;
use finboard_core::{derive_view, ListView, Paginator};
use proptest::prelude::*;

const MERCHANTS: [&str; 5] = ["Uber", "Starbucks", "Delta Airlines", "Office Depot", "Adobe"];

fn claim_strategy() -> impl Strategy<Value = (u32, usize, usize, u32, usize)> {
    (1u32..=28, 0usize..MERCHANTS.len(), 0usize..4, 0u32..100_000, 0usize..3)
}

fn claims_strategy() -> impl Strategy<Value = Vec<ExpenseClaim>> {
    prop::collection::vec(claim_strategy(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .zip(1u32..)
            .map(|((day, merchant, category, cents, status), id)| ExpenseClaim {
                id,
                date: NaiveDate::from_ymd_opt(2024, 12, day).unwrap(),
                merchant: MERCHANTS[merchant].to_string(),
                category: [
                    ExpenseCategory::Travel,
                    ExpenseCategory::Food,
                    ExpenseCategory::Software,
                    ExpenseCategory::OfficeSupplies,
                ][category],
                amount: f64::from(cents) / 100.0,
                status: [
                    ClaimStatus::Pending,
                    ClaimStatus::Approved,
                    ClaimStatus::Rejected,
                ][status],
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("uber".to_string()),
        Just(" DELTA ".to_string()),
        Just("o".to_string()),
        Just("missing".to_string()),
    ]
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("All".to_string()),
        Just("Travel".to_string()),
        Just("Food".to_string()),
        Just("Office Supplies".to_string()),
    ]
}

fn filters(query: &str, category: &str) -> FilterSet<ExpenseClaimField> {
    let mut filters = FilterSet::new([ExpenseClaimField::Merchant])
        .with_category(ExpenseClaimField::Category);
    filters.set_query(query);
    filters.set_category(ExpenseClaimField::Category, category);
    filters
}

fn ids(claims: &[&ExpenseClaim]) -> Vec<u32> {
    claims.iter().map(|claim| claim.id).collect()
}

proptest! {
    #[test]
    fn filtering_keeps_a_stable_subset(
        claims in claims_strategy(),
        query in query_strategy(),
        category in category_strategy(),
    ) {
        let filters = filters(&query, &category);
        let matched = filters.apply(&claims);

        prop_assert!(matched.len() <= claims.len());
        for claim in &matched {
            prop_assert!(claims.iter().any(|stored| stored.id == claim.id));
            prop_assert!(filters.matches(*claim));
        }
        let mut positions = ids(&matched);
        positions.dedup();
        prop_assert_eq!(positions.len(), matched.len());

        let owned: Vec<ExpenseClaim> = matched.iter().map(|claim| (*claim).clone()).collect();
        prop_assert_eq!(ids(&filters.apply(&owned)), ids(&matched));
    }

    #[test]
    fn pages_partition_the_sorted_matches(
        claims in claims_strategy(),
        category in category_strategy(),
        page_size in 1usize..8,
    ) {
        let filters = filters("", &category);
        let sort = SortRule::descending(ExpenseClaimField::Amount)
            .then_ascending(ExpenseClaimField::Merchant);
        let paginator = Paginator::new(page_size);

        let first = derive_view(&claims, &filters, Some(&sort), &paginator, 1);
        let mut seen = Vec::new();
        for number in first.page_numbers() {
            let page = derive_view(&claims, &filters, Some(&sort), &paginator, number);
            prop_assert_eq!(page.number, number);
            prop_assert!(page.items.len() <= page_size);
            prop_assert!(!page.items.is_empty());
            seen.extend(ids(&page.items));
        }

        prop_assert_eq!(seen.len(), first.total_items);
        let mut unique = seen.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), seen.len());

        let amounts: Vec<f64> = seen
            .iter()
            .filter_map(|id| claims.iter().find(|claim| claim.id == *id))
            .map(|claim| claim.amount)
            .collect();
        prop_assert!(amounts.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn out_of_range_pages_are_clamped(
        claims in claims_strategy(),
        page_size in 1usize..8,
        requested in 0usize..20,
    ) {
        let filters = filters("", "All");
        let page = derive_view(&claims, &filters, None, &Paginator::new(page_size), requested);
        prop_assert!(page.number >= 1);
        prop_assert!(page.number <= page.total_pages.max(1));
        prop_assert_eq!(page.total_pages, claims.len().div_ceil(page_size));
    }

    #[test]
    fn any_filter_change_returns_to_the_first_page(
        claims in claims_strategy(),
        query in query_strategy(),
        category in category_strategy(),
        requested in 1usize..10,
    ) {
        let mut view = ListView::new(filters("", "All"), Paginator::new(3));
        view.go_to_page(&claims, requested);
        view.set_query(query);
        prop_assert_eq!(view.current_page(), 1);

        view.go_to_page(&claims, requested);
        view.set_category(ExpenseClaimField::Category, category);
        prop_assert_eq!(view.current_page(), 1);

        view.go_to_page(&claims, requested);
        view.clear_filters();
        prop_assert_eq!(view.current_page(), 1);
        prop_assert_eq!(view.render(&claims).number, 1);
    }

    #[test]
    fn shrinking_the_records_keeps_the_page_in_range(
        claims in claims_strategy(),
        keep in 0usize..40,
        requested in 1usize..20,
    ) {
        let mut view = ListView::new(filters("", "All"), Paginator::new(3));
        view.go_to_page(&claims, requested);

        let remaining: Vec<ExpenseClaim> = claims.iter().take(keep).cloned().collect();
        let page = view.clamp_to(&remaining);
        let total_pages = remaining.len().div_ceil(3);
        prop_assert!(page >= 1);
        prop_assert!(page <= total_pages.max(1));
        prop_assert_eq!(view.current_page(), view.render(&remaining).number);
    }
}
