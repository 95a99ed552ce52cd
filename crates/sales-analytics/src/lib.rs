//! Filter-and-aggregate pipeline for the sales dashboard
//!
//! Raw rows go through [`ingest::normalize`], filter options come from
//! [`domain::extract_domains`], the active [`filter::FilterState`] selects a
//! subset, and [`aggregate::aggregate`] plus [`legend`] turn that subset into
//! display-ready series. [`dashboard::Dashboard`] ties the stages together.

pub mod aggregate;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod legend;
pub mod month;
pub mod record;
pub mod source;

#[cfg(test)]
mod props;

pub use aggregate::{AggregatedSeries, MonthlyTotal, TotalsMap, aggregate};
pub use dashboard::{Dashboard, DashboardView, Dataset, LoadState, Palettes};
pub use domain::{FilterDomains, extract_domains};
pub use error::{Result, SalesError};
pub use filter::{FilterDimension, FilterState};
pub use ingest::normalize;
pub use legend::{LegendEntry, Palette, PieSlice, assign_legend, pie_slices};
pub use month::Month;
pub use record::{RawRow, SalesRecord};
