//! Filter domains: the values offered by each selection control
//!
//! Computed from the full clean record set once per load, never from the
//! filtered subset.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::record::SalesRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterDomains {
    /// Ascending
    pub years: Vec<i32>,
    /// Ascending, lexical
    pub products: Vec<String>,
    /// Ascending, lexical
    pub payment_types: Vec<String>,
}

pub fn extract_domains(records: &[SalesRecord]) -> FilterDomains {
    let mut years = BTreeSet::new();
    let mut products = BTreeSet::new();
    let mut payment_types = BTreeSet::new();

    for record in records {
        years.insert(record.year());
        products.insert(record.product_name.as_str());
        payment_types.insert(record.payment_type.as_str());
    }

    FilterDomains {
        years: years.into_iter().collect(),
        products: products.into_iter().map(str::to_string).collect(),
        payment_types: payment_types.into_iter().map(str::to_string).collect(),
    }
}
