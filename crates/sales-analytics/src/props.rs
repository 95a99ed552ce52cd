//! Property-based tests for the filter cascade and the aggregates

use chrono::NaiveDate;
use proptest::prelude::*;

use crate::aggregate::aggregate;
use crate::filter::{FilterDimension, FilterState};
use crate::legend::{Palette, assign_legend};
use crate::month::Month;
use crate::record::SalesRecord;

const PRODUCTS: &[&str] = &["Latte", "Espresso", "Americano", "Cortado", "Mocha"];
const PAYMENTS: &[&str] = &["card", "cash"];

/// Amounts in cents to keep float sums comparable
fn record() -> impl Strategy<Value = SalesRecord> {
    (2022i32..=2025, 1u32..=12, 1u32..=28, 0u32..10_000, 0usize..PRODUCTS.len(), 0usize..PAYMENTS.len()).prop_map(
        |(y, m, d, cents, p, t)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            SalesRecord::new(date, f64::from(cents) / 100.0, PRODUCTS[p], PAYMENTS[t])
        },
    )
}

fn records() -> impl Strategy<Value = Vec<SalesRecord>> {
    prop::collection::vec(record(), 0..60)
}

fn month() -> impl Strategy<Value = Month> {
    (0usize..12).prop_map(|i| Month::ALL[i])
}

/// Any filter state, built bottom-up so all five dimensions can be set
fn filter_state() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of(2022i32..=2025),
        prop::option::of(0usize..PRODUCTS.len()),
        prop::option::of(0usize..PAYMENTS.len()),
        0u32..500,
        prop::option::of(month()),
    )
        .prop_map(|(year, product, payment, threshold, month)| {
            let state = FilterState::new()
                .set_year(year)
                .set_product(product.map(|p| PRODUCTS[p]))
                .set_payment_type(payment.map(|t| PAYMENTS[t]))
                .set_threshold(f64::from(threshold))
                .unwrap();
            state.set_month(month)
        })
}

fn dimension() -> impl Strategy<Value = FilterDimension> {
    (0usize..5).prop_map(|i| FilterDimension::ALL[i])
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Set `dimension` to some non-default value
fn set(state: &FilterState, dimension: FilterDimension) -> FilterState {
    match dimension {
        FilterDimension::Year => state.set_year(Some(2024)),
        FilterDimension::Product => state.set_product(Some("Latte")),
        FilterDimension::PaymentType => state.set_payment_type(Some("card")),
        FilterDimension::Threshold => state.set_threshold(10.0).unwrap(),
        FilterDimension::Month => state.set_month(Some(Month::Jun)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Setting a dimension clears every dimension below it and keeps those above
    #[test]
    fn prop_cascade_reset(state in filter_state(), d in dimension()) {
        let next = set(&state, d);
        prop_assert!(next.is_set(d));
        for lower in d.below() {
            prop_assert!(!next.is_set(lower));
        }
        for upper in FilterDimension::ALL.into_iter().filter(|u| *u < d) {
            prop_assert_eq!(next.is_set(upper), state.is_set(upper));
        }
    }

    /// Setting d1 after d2 (d1 < d2) always clears d2
    #[test]
    fn prop_upper_after_lower_clears_lower(d1 in dimension(), d2 in dimension()) {
        prop_assume!(d1 < d2);
        let state = set(&set(&FilterState::new(), d2), d1);
        prop_assert!(!state.is_set(d2));
    }

    #[test]
    fn prop_identity_filter(records in records()) {
        let filtered = FilterState::new().apply(&records);
        prop_assert_eq!(filtered, records.iter().collect::<Vec<_>>());
    }

    /// Filtered output is an order-preserving subsequence of the input
    #[test]
    fn prop_filter_preserves_order(records in records(), state in filter_state()) {
        let filtered = state.apply(&records);
        let mut cursor = records.iter();
        for r in &filtered {
            prop_assert!(cursor.any(|c| std::ptr::eq(c, *r)));
        }
        prop_assert!(filtered.iter().all(|r| state.matches(r)));
    }

    #[test]
    fn prop_monthly_completeness(records in records(), state in filter_state()) {
        let filtered = state.apply(&records);
        let expected: f64 = filtered.iter().map(|r| r.amount).sum();
        let series = aggregate(filtered);
        prop_assert_eq!(series.monthly_totals.len(), 12);
        for (i, m) in series.monthly_totals.iter().enumerate() {
            prop_assert_eq!(m.month, Month::ALL[i]);
            prop_assert!(m.total >= 0.0);
        }
        prop_assert!(approx_eq(series.grand_total(), expected));
    }

    #[test]
    fn prop_aggregation_additivity(records in records()) {
        let expected: f64 = records.iter().map(|r| r.amount).sum();
        let series = aggregate(&records);
        let products: f64 = series.product_totals.values().sum();
        let payments: f64 = series.payment_type_totals.values().sum();
        prop_assert!(approx_eq(products, expected));
        prop_assert!(approx_eq(payments, expected));
    }

    #[test]
    fn prop_legend_determinism(records in records()) {
        let series = aggregate(&records);
        let palette = Palette::product();
        let first = assign_legend(&series.product_totals, &palette);
        let second = assign_legend(&series.product_totals, &palette);
        prop_assert_eq!(first.len(), series.product_totals.len());
        prop_assert_eq!(first, second);
    }
}
