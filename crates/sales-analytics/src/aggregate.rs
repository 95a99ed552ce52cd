//! Aggregation of the filtered set into chart series

use indexmap::IndexMap;
use serde::Serialize;

use crate::month::Month;
use crate::record::SalesRecord;

/// Category name to summed amount, in first-seen order
pub type TotalsMap = IndexMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total: f64,
}

/// The three projections of a filtered record set
///
/// Rebuilt from scratch on every filter change, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedSeries {
    /// Always Jan..Dec, zero when a month has no sales
    pub monthly_totals: [MonthlyTotal; 12],
    pub product_totals: TotalsMap,
    pub payment_type_totals: TotalsMap,
}

impl AggregatedSeries {
    pub fn monthly_total(&self, month: Month) -> f64 {
        self.monthly_totals[month.index()].total
    }

    /// Sum over every record in the set
    pub fn grand_total(&self) -> f64 {
        self.monthly_totals.iter().map(|m| m.total).sum()
    }
}

/// Plain float sums, no rounding
pub fn aggregate<'a, I>(records: I) -> AggregatedSeries
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut monthly_totals = Month::ALL.map(|month| MonthlyTotal { month, total: 0.0 });
    let mut product_totals = TotalsMap::new();
    let mut payment_type_totals = TotalsMap::new();

    for record in records {
        monthly_totals[record.month().index()].total += record.amount;
        *product_totals.entry(record.product_name.clone()).or_insert(0.0) += record.amount;
        *payment_type_totals.entry(record.payment_type.clone()).or_insert(0.0) += record.amount;
    }

    AggregatedSeries {
        monthly_totals,
        product_totals,
        payment_type_totals,
    }
}
