//! Data acquisition: read the sales CSV from disk or over HTTP
//!
//! Failures come back as `SalesError::Acquisition` (could not get the bytes)
//! or `SalesError::Parse` (got them, but they are not a usable CSV).

use sales_analytics::source::read_rows;
use sales_analytics::{RawRow, SalesError};
use tracing::info;

pub async fn fetch_rows(location: &str) -> Result<Vec<RawRow>, SalesError> {
    let text = fetch_text(location).await?;
    let rows = read_rows(text.as_bytes()).map_err(|e| match e {
        SalesError::Csv(e) => SalesError::Parse(format!("{}: {}", location, e)),
        other => other,
    })?;
    info!(location, rows = rows.len(), "Fetched sales data");
    Ok(rows)
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

async fn fetch_text(location: &str) -> Result<String, SalesError> {
    if is_remote(location) {
        fetch_remote(location).await
    } else {
        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| SalesError::Acquisition(format!("{}: {}", location, e)))
    }
}

async fn fetch_remote(url: &str) -> Result<String, SalesError> {
    let response = reqwest::Client::new()
        .get(url)
        .header("Accept", "text/csv")
        .send()
        .await
        .map_err(|e| SalesError::Acquisition(format!("{}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(SalesError::Acquisition(format!("{}: HTTP {}", url, response.status())));
    }

    response
        .text()
        .await
        .map_err(|e| SalesError::Acquisition(format!("{}: {}", url, e)))
}
