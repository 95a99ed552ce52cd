//! Raw rows as supplied by the data source, and the typed records built from them

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::month::Month;

/// One loosely-typed input row: column name to cell value
///
/// Nothing about field presence or type is guaranteed. Blank cells are kept
/// as `None` so that "present but empty" and "missing" look the same to the
/// normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    fields: IndexMap<String, Option<String>>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.insert(column, Some(value.to_string()));
        self
    }

    pub fn insert(&mut self, column: &str, value: Option<String>) {
        self.fields.insert(column.to_string(), value);
    }

    /// Trimmed, non-empty value of `column`
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .and_then(|v| v.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// First non-empty value among several column aliases
    pub fn first_of(&self, columns: &[&str]) -> Option<&str> {
        columns.iter().find_map(|c| self.get(c))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<Option<String>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// One sales transaction with a usable date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    /// Native float; `NaN` when the source amount was missing or malformed
    pub amount: f64,
    pub product_name: String,
    pub payment_type: String,
    /// Columns the pipeline does not interpret (e.g. `datetime`, `card`)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, String>,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, amount: f64, product_name: &str, payment_type: &str) -> Self {
        Self {
            date,
            amount,
            product_name: product_name.to_string(),
            payment_type: payment_type.to_string(),
            extra: IndexMap::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> Month {
        Month::of(self.date)
    }
}
