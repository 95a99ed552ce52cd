//! Dashboard session: loaded dataset plus the current filter selection
//!
//! Every filter update immediately recomputes the filtered set and all
//! derived series, and returns the resulting [`DashboardView`]. There is no
//! intermediate state a consumer could observe.

use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::{AggregatedSeries, aggregate};
use crate::domain::{FilterDomains, extract_domains};
use crate::error::{Result, SalesError};
use crate::filter::FilterState;
use crate::ingest::normalize;
use crate::legend::{LegendEntry, Palette, PieSlice, assign_legend, pie_slices};
use crate::month::Month;
use crate::record::{RawRow, SalesRecord};

/// Clean records of one load, with the filter options derived from them
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<SalesRecord>,
    domains: FilterDomains,
    dropped: usize,
}

impl Dataset {
    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        let total = rows.len();
        let records = normalize(rows);
        let dropped = total - records.len();
        Self::from_records(records, dropped)
    }

    fn from_records(records: Vec<SalesRecord>, dropped: usize) -> Self {
        let domains = extract_domains(&records);
        Self {
            records,
            domains,
            dropped,
        }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn domains(&self) -> &FilterDomains {
        &self.domains
    }

    /// Rows discarded for lacking a usable date
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl From<Vec<SalesRecord>> for Dataset {
    fn from(records: Vec<SalesRecord>) -> Self {
        Self::from_records(records, 0)
    }
}

#[derive(Debug)]
pub enum LoadState {
    Loading,
    /// Terminal: nothing is computed after a failed load
    Failed(SalesError),
    Ready(Dataset),
}

/// Per-chart palettes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palettes {
    pub product: Palette,
    pub payment: Palette,
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            product: Palette::product(),
            payment: Palette::payment(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub domains: FilterDomains,
    pub filters: FilterState,
    /// Size of the filtered set
    pub record_count: usize,
    pub series: AggregatedSeries,
    pub product_legend: Vec<LegendEntry>,
    pub payment_legend: Vec<LegendEntry>,
    pub product_slices: Vec<PieSlice>,
    pub payment_slices: Vec<PieSlice>,
    /// Threshold line for the monthly chart, only when a threshold is set
    pub reference_line: Option<f64>,
}

#[derive(Debug)]
pub struct Dashboard {
    state: LoadState,
    filters: FilterState,
    palettes: Palettes,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Palettes::default())
    }
}

impl Dashboard {
    pub fn new(palettes: Palettes) -> Self {
        Self {
            state: LoadState::Loading,
            filters: FilterState::new(),
            palettes,
        }
    }

    /// Replace the dataset with freshly acquired rows; filters start over
    pub fn load(&mut self, rows: Vec<RawRow>) -> Result<DashboardView> {
        let dataset = Dataset::from_rows(rows);
        info!(
            records = dataset.records.len(),
            dropped = dataset.dropped,
            years = dataset.domains.years.len(),
            products = dataset.domains.products.len(),
            "Sales data loaded"
        );
        self.state = LoadState::Ready(dataset);
        self.filters = FilterState::new();
        self.view()
    }

    /// Record a failed acquisition
    pub fn fail(&mut self, error: SalesError) {
        self.state = LoadState::Failed(error);
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn load_error(&self) -> Option<&SalesError> {
        match &self.state {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn dataset(&self) -> Result<&Dataset> {
        match &self.state {
            LoadState::Ready(dataset) => Ok(dataset),
            _ => Err(SalesError::NotReady),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_year(&mut self, year: Option<i32>) -> Result<DashboardView> {
        self.update(|f| Ok(f.set_year(year)))
    }

    pub fn set_product(&mut self, product: Option<&str>) -> Result<DashboardView> {
        self.update(|f| Ok(f.set_product(product)))
    }

    pub fn set_payment_type(&mut self, payment_type: Option<&str>) -> Result<DashboardView> {
        self.update(|f| Ok(f.set_payment_type(payment_type)))
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<DashboardView> {
        self.update(|f| f.set_threshold(threshold))
    }

    /// Drill into a month, e.g. after a click on its bar
    pub fn set_month(&mut self, month: Option<Month>) -> Result<DashboardView> {
        self.update(|f| Ok(f.set_month(month)))
    }

    pub fn reset_all(&mut self) -> Result<DashboardView> {
        self.update(|f| Ok(f.reset_all()))
    }

    /// Snapshot of the current selection
    pub fn view(&self) -> Result<DashboardView> {
        let dataset = self.dataset()?;
        let filtered = self.filters.apply(dataset.records());
        let series = aggregate(filtered.iter().copied());
        debug!(filtered = filtered.len(), filters = ?self.filters, "Recomputed dashboard");

        let threshold = self.filters.min_amount_threshold();
        Ok(DashboardView {
            domains: dataset.domains().clone(),
            filters: self.filters.clone(),
            record_count: filtered.len(),
            product_legend: assign_legend(&series.product_totals, &self.palettes.product),
            payment_legend: assign_legend(&series.payment_type_totals, &self.palettes.payment),
            product_slices: pie_slices(&series.product_totals, &self.palettes.product),
            payment_slices: pie_slices(&series.payment_type_totals, &self.palettes.payment),
            reference_line: (threshold > 0.0).then_some(threshold),
            series,
        })
    }

    fn update<F>(&mut self, change: F) -> Result<DashboardView>
    where
        F: FnOnce(&FilterState) -> Result<FilterState>,
    {
        self.dataset()?;
        self.filters = change(&self.filters)?;
        self.view()
    }
}
