//! Record validation and normalization
//!
//! Rows without a usable date are not transactions: they are dropped here and
//! never reach the filter or the aggregates. Nothing else is validated.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use tracing::debug;

use crate::record::{RawRow, SalesRecord};

/// Column aliases, first non-empty wins
pub const DATE_COLUMNS: &[&str] = &["date"];
pub const AMOUNT_COLUMNS: &[&str] = &["money", "amount"];
pub const PRODUCT_COLUMNS: &[&str] = &["coffee_name", "productName", "product_name"];
pub const PAYMENT_COLUMNS: &[&str] = &["cash_type", "paymentType", "payment_type"];

/// Category used when a row has no product or payment type
pub const UNKNOWN_CATEGORY: &str = "Unknown";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Turn raw rows into records, preserving order and dropping undated rows
pub fn normalize<I>(rows: I) -> Vec<SalesRecord>
where
    I: IntoIterator<Item = RawRow>,
{
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in rows {
        match to_record(&row) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = records.len(), "Dropped rows without a usable date");
    }

    records
}

fn to_record(row: &RawRow) -> Option<SalesRecord> {
    let date = parse_date(row.first_of(DATE_COLUMNS)?)?;

    let amount = row
        .first_of(AMOUNT_COLUMNS)
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(f64::NAN);

    let product_name = row.first_of(PRODUCT_COLUMNS).unwrap_or(UNKNOWN_CATEGORY);
    let payment_type = row.first_of(PAYMENT_COLUMNS).unwrap_or(UNKNOWN_CATEGORY);

    let extra: IndexMap<String, String> = row
        .columns()
        .filter(|c| !is_known_column(c))
        .filter_map(|c| row.get(c).map(|v| (c.to_string(), v.to_string())))
        .collect();

    Some(SalesRecord {
        date,
        amount,
        product_name: product_name.to_string(),
        payment_type: payment_type.to_string(),
        extra,
    })
}

fn is_known_column(column: &str) -> bool {
    [DATE_COLUMNS, AMOUNT_COLUMNS, PRODUCT_COLUMNS, PAYMENT_COLUMNS]
        .iter()
        .any(|aliases| aliases.contains(&column))
}

/// Parse a calendar date from the shapes sales exports use
///
/// Plain dates, naive timestamps (the time part is discarded) and RFC 3339.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(value, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}
