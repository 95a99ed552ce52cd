//! Filter cascade
//!
//! Five dimensions form a strict hierarchy:
//!
//! ```txt
//! Year > Product > PaymentType > Threshold > Month
//! ```
//!
//! Setting a dimension clears every dimension below it, so a drill-down
//! selection never outlives the broader selection it was made under.
//! `FilterState` is a value: every update returns a new state.

use serde::Serialize;

use crate::error::{Result, SalesError};
use crate::month::Month;
use crate::record::SalesRecord;

/// Filter dimensions in hierarchy order (`Year` is the broadest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FilterDimension {
    Year,
    Product,
    PaymentType,
    Threshold,
    Month,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 5] = [
        FilterDimension::Year,
        FilterDimension::Product,
        FilterDimension::PaymentType,
        FilterDimension::Threshold,
        FilterDimension::Month,
    ];

    /// Dimensions strictly below this one
    pub fn below(self) -> impl Iterator<Item = FilterDimension> {
        Self::ALL.into_iter().filter(move |d| *d > self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    year: Option<i32>,
    product: Option<String>,
    payment_type: Option<String>,
    /// 0 means no threshold
    min_amount_threshold: f64,
    month: Option<Month>,
}

impl FilterState {
    /// All dimensions unset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn payment_type(&self) -> Option<&str> {
        self.payment_type.as_deref()
    }

    pub fn min_amount_threshold(&self) -> f64 {
        self.min_amount_threshold
    }

    pub fn month(&self) -> Option<Month> {
        self.month
    }

    pub fn set_year(&self, year: Option<i32>) -> Self {
        let mut next = self.cleared_below(FilterDimension::Year);
        next.year = year;
        next
    }

    /// An empty name means "all products"
    pub fn set_product(&self, product: Option<&str>) -> Self {
        let mut next = self.cleared_below(FilterDimension::Product);
        next.product = non_empty(product);
        next
    }

    /// An empty name means "all payment types"
    pub fn set_payment_type(&self, payment_type: Option<&str>) -> Self {
        let mut next = self.cleared_below(FilterDimension::PaymentType);
        next.payment_type = non_empty(payment_type);
        next
    }

    /// Threshold must be finite and non-negative
    pub fn set_threshold(&self, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(SalesError::InvalidThreshold(threshold));
        }
        let mut next = self.cleared_below(FilterDimension::Threshold);
        next.min_amount_threshold = threshold;
        Ok(next)
    }

    pub fn set_month(&self, month: Option<Month>) -> Self {
        let mut next = self.cleared_below(FilterDimension::Month);
        next.month = month;
        next
    }

    pub fn reset_all(&self) -> Self {
        Self::default()
    }

    /// Clear `dimension` and everything below it
    pub fn clear_from(&self, dimension: FilterDimension) -> Self {
        let mut next = self.cleared_below(dimension);
        next.clear(dimension);
        next
    }

    pub fn is_set(&self, dimension: FilterDimension) -> bool {
        match dimension {
            FilterDimension::Year => self.year.is_some(),
            FilterDimension::Product => self.product.is_some(),
            FilterDimension::PaymentType => self.payment_type.is_some(),
            FilterDimension::Threshold => self.min_amount_threshold > 0.0,
            FilterDimension::Month => self.month.is_some(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        !FilterDimension::ALL.into_iter().any(|d| self.is_set(d))
    }

    /// Whether a record passes every active predicate, checked in hierarchy order
    pub fn matches(&self, record: &SalesRecord) -> bool {
        FilterDimension::ALL.into_iter().all(|d| self.passes(d, record))
    }

    /// Records passing the filter, in input order
    pub fn apply<'a>(&self, records: &'a [SalesRecord]) -> Vec<&'a SalesRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    fn passes(&self, dimension: FilterDimension, record: &SalesRecord) -> bool {
        match dimension {
            FilterDimension::Year => self.year.is_none_or(|y| record.year() == y),
            FilterDimension::Product => self.product.as_deref().is_none_or(|p| record.product_name == p),
            FilterDimension::PaymentType => self.payment_type.as_deref().is_none_or(|t| record.payment_type == t),
            // Reference line for the monthly chart only, never excludes records
            FilterDimension::Threshold => true,
            FilterDimension::Month => self.month.is_none_or(|m| record.month() == m),
        }
    }

    fn cleared_below(&self, dimension: FilterDimension) -> Self {
        let mut next = self.clone();
        for d in dimension.below() {
            next.clear(d);
        }
        next
    }

    fn clear(&mut self, dimension: FilterDimension) {
        match dimension {
            FilterDimension::Year => self.year = None,
            FilterDimension::Product => self.product = None,
            FilterDimension::PaymentType => self.payment_type = None,
            FilterDimension::Threshold => self.min_amount_threshold = 0.0,
            FilterDimension::Month => self.month = None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, amount: f64, product: &str, payment: &str) -> SalesRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        SalesRecord::new(date, amount, product, payment)
    }

    fn sample() -> Vec<SalesRecord> {
        vec![
            record("2024-01-05", 10.0, "Latte", "card"),
            record("2024-02-10", 5.0, "Espresso", "cash"),
            record("2025-01-20", 7.5, "Latte", "cash"),
            record("2025-02-01", 3.0, "Latte", "card"),
        ]
    }

    /// Every dimension set, bottom-up so nothing gets cleared
    fn fully_set() -> FilterState {
        let mut state = FilterState::new();
        state.year = Some(2024);
        state.product = Some("Latte".to_string());
        state.payment_type = Some("card".to_string());
        state.min_amount_threshold = 50.0;
        state.month = Some(Month::Jan);
        state
    }

    #[test]
    fn test_set_year_clears_everything_below() {
        let state = fully_set().set_year(Some(2025));
        assert_eq!(state.year(), Some(2025));
        assert_eq!(state.product(), None);
        assert_eq!(state.payment_type(), None);
        assert_eq!(state.min_amount_threshold(), 0.0);
        assert_eq!(state.month(), None);
    }

    #[test]
    fn test_set_product_keeps_year() {
        let state = fully_set().set_product(Some("Mocha"));
        assert_eq!(state.year(), Some(2024));
        assert_eq!(state.product(), Some("Mocha"));
        assert_eq!(state.payment_type(), None);
        assert_eq!(state.min_amount_threshold(), 0.0);
        assert_eq!(state.month(), None);
    }

    #[test]
    fn test_set_payment_type_keeps_upper_levels() {
        let state = fully_set().set_payment_type(Some("cash"));
        assert_eq!(state.year(), Some(2024));
        assert_eq!(state.product(), Some("Latte"));
        assert_eq!(state.payment_type(), Some("cash"));
        assert_eq!(state.min_amount_threshold(), 0.0);
        assert_eq!(state.month(), None);
    }

    #[test]
    fn test_set_threshold_clears_month_only() {
        let state = fully_set().set_threshold(20.0).unwrap();
        assert_eq!(state.payment_type(), Some("card"));
        assert_eq!(state.min_amount_threshold(), 20.0);
        assert_eq!(state.month(), None);
    }

    #[test]
    fn test_set_month_clears_nothing() {
        let state = fully_set().set_month(Some(Month::Feb));
        assert_eq!(state.min_amount_threshold(), 50.0);
        assert_eq!(state.month(), Some(Month::Feb));
    }

    #[test]
    fn test_set_threshold_rejects_invalid() {
        let state = FilterState::new();
        assert!(matches!(state.set_threshold(-1.0), Err(SalesError::InvalidThreshold(_))));
        assert!(state.set_threshold(f64::NAN).is_err());
        assert!(state.set_threshold(f64::INFINITY).is_err());
        assert!(state.set_threshold(0.0).is_ok());
    }

    #[test]
    fn test_product_then_year_unsets_product() {
        let state = FilterState::new().set_product(Some("Latte")).set_year(Some(2024));
        assert_eq!(state.product(), None);
        assert_eq!(state.year(), Some(2024));
    }

    #[test]
    fn test_empty_selection_means_unset() {
        let state = FilterState::new().set_product(Some(""));
        assert_eq!(state.product(), None);
        assert!(state.is_unfiltered());
    }

    #[test]
    fn test_reset_all() {
        assert_eq!(fully_set().reset_all(), FilterState::new());
        assert!(fully_set().reset_all().is_unfiltered());
    }

    #[test]
    fn test_clear_from() {
        let state = fully_set().clear_from(FilterDimension::PaymentType);
        assert_eq!(state.year(), Some(2024));
        assert_eq!(state.product(), Some("Latte"));
        assert!(!state.is_set(FilterDimension::PaymentType));
        assert!(!state.is_set(FilterDimension::Threshold));
        assert!(!state.is_set(FilterDimension::Month));
    }

    #[test]
    fn test_identity_filter() {
        let records = sample();
        let filtered = FilterState::new().apply(&records);
        assert_eq!(filtered, records.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_records_stay_empty() {
        assert!(fully_set().apply(&[]).is_empty());
    }

    #[test]
    fn test_filters_combine() {
        let records = sample();
        let state = FilterState::new().set_year(Some(2025)).set_product(Some("Latte"));
        let filtered = state.apply(&records);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.year() == 2025));

        let state = state.set_payment_type(Some("card"));
        let filtered = state.apply(&records);
        assert_eq!(filtered, vec![&records[3]]);
    }

    #[test]
    fn test_month_filter_across_years() {
        let records = sample();
        let filtered = FilterState::new().set_month(Some(Month::Jan)).apply(&records);
        assert_eq!(filtered, vec![&records[0], &records[2]]);
    }

    #[test]
    fn test_threshold_does_not_filter_records() {
        let records = sample();
        let state = FilterState::new().set_threshold(1_000.0).unwrap();
        assert_eq!(state.apply(&records).len(), records.len());
        assert!(state.is_set(FilterDimension::Threshold));
    }

    #[test]
    fn test_dimension_hierarchy() {
        let below: Vec<_> = FilterDimension::Product.below().collect();
        assert_eq!(
            below,
            vec![FilterDimension::PaymentType, FilterDimension::Threshold, FilterDimension::Month]
        );
        assert_eq!(FilterDimension::Month.below().count(), 0);
    }
}
