//! CSV to raw rows
//!
//! The header row names the columns. Rows may be ragged; missing trailing
//! cells read as blank.

use csv::{ReaderBuilder, Trim};
use std::io::Read;

use crate::error::{Result, SalesError};
use crate::record::RawRow;

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new().flexible(true).trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(SalesError::Parse("missing header row".to_string()));
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let value = record.get(i).filter(|v| !v.is_empty()).map(str::to_string);
                (column, value)
            })
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
