//! Report rendering (console summary and CSV outputs)

use anyhow::Result;
use csv::Writer;
use sales_analytics::{AggregatedSeries, DashboardView, FilterDomains, FilterState, PieSlice};
use shared::CONFIG;
use std::path::{Path, PathBuf};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::constants;

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Sales ($)")]
    sales: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Sales ($)")]
    sales: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// One-line description of the active filters
pub fn describe_filters(filters: &FilterState) -> String {
    let year = filters.year().map(|y| y.to_string()).unwrap_or_else(|| "All Years".to_string());
    let product = filters.product().unwrap_or("All Products");
    let payment = filters.payment_type().unwrap_or("All Payment Types");
    let month = filters.month().map(|m| m.to_string()).unwrap_or_else(|| "All Months".to_string());
    format!(
        "{} · {} · {} · Min Sales ${:.2} · {}",
        year,
        product,
        payment,
        filters.min_amount_threshold(),
        month
    )
}

/// Horizontal bar scaled against the largest month
fn bar(value: f64, max: f64, threshold: Option<f64>) -> String {
    let len = if max > 0.0 && value > 0.0 {
        ((value / max) * constants::BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let marker = match threshold {
        Some(t) if value >= t => " ▲",
        _ => "",
    };
    format!("{}{}", "█".repeat(len), marker)
}

fn monthly_table(series: &AggregatedSeries, threshold: Option<f64>) -> String {
    let max = series.monthly_totals.iter().map(|m| m.total).fold(0.0, f64::max);
    let rows: Vec<MonthRow> = series
        .monthly_totals
        .iter()
        .map(|m| MonthRow {
            month: m.month.to_string(),
            sales: format!("{:.2}", m.total),
            bar: bar(m.total, max, threshold),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

fn category_table(slices: &[PieSlice]) -> String {
    let rows: Vec<CategoryRow> = slices
        .iter()
        .map(|s| CategoryRow {
            name: s.name.clone(),
            color: s.color.clone(),
            sales: format!("{:.2}", s.value),
            share: format!("{:.0}%", s.percent),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print the dashboard to console
pub fn print_summary(view: &DashboardView, source: &str) {
    println!("\n============================================================");
    println!("                {}", CONFIG.title.to_uppercase());
    println!("============================================================\n");

    println!("Source:  {}", source);
    println!("Filters: {}", describe_filters(&view.filters));
    println!(
        "Showing {} record{}",
        view.record_count,
        if view.record_count == 1 { "" } else { "s" }
    );

    println!("\nMONTHLY SALES:");
    println!("{}", monthly_table(&view.series, view.reference_line));
    if let Some(threshold) = view.reference_line {
        println!("  ▲ at or above threshold ${:.2} ({})", threshold, CONFIG.palettes.threshold);
    }

    println!("\nSALES BY PRODUCT:");
    println!("{}", category_table(&view.product_slices));

    println!("\nSALES BY PAYMENT TYPE:");
    println!("{}", category_table(&view.payment_slices));

    println!("\n  Total: ${:.2}", view.series.grand_total());
    println!("============================================================");
}

/// Print the options each filter accepts
pub fn print_domains(domains: &FilterDomains) {
    let years: Vec<String> = domains.years.iter().map(|y| y.to_string()).collect();
    println!("Years:         {}", years.join(", "));
    println!("Products:      {}", domains.products.join(", "));
    println!("Payment types: {}", domains.payment_types.join(", "));
}

/// Write all CSV reports, returning the paths written
pub fn export_all(output_dir: &Path, view: &DashboardView) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    Ok(vec![
        write_monthly(output_dir, view)?,
        write_categories(
            &output_dir.join(constants::PRODUCT_TOTALS_FILENAME),
            "Product",
            &view.product_slices,
        )?,
        write_categories(
            &output_dir.join(constants::PAYMENT_TOTALS_FILENAME),
            "Payment_Type",
            &view.payment_slices,
        )?,
    ])
}

/// Generate monthly_totals.csv
fn write_monthly(output_dir: &Path, view: &DashboardView) -> Result<PathBuf> {
    let path = output_dir.join(constants::MONTHLY_TOTALS_FILENAME);
    let mut wtr = Writer::from_path(&path)?;

    wtr.write_record(["Month", "Sales_USD", "Color", "Above_Threshold"])?;

    for m in &view.series.monthly_totals {
        let above = match view.reference_line {
            Some(t) if m.total >= t => "yes",
            Some(_) => "no",
            None => "",
        };
        wtr.write_record([
            m.month.short_name(),
            format!("{:.2}", m.total).as_str(),
            CONFIG.palettes.monthly,
            above,
        ])?;
    }

    wtr.flush()?;
    Ok(path)
}

/// Generate a per-category totals file
fn write_categories(path: &Path, label: &str, slices: &[PieSlice]) -> Result<PathBuf> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([label, "Color", "Sales_USD", "Share_Percent"])?;

    for slice in slices {
        wtr.write_record([
            slice.name.as_str(),
            slice.color.as_str(),
            format!("{:.2}", slice.value).as_str(),
            format!("{:.2}", slice.percent).as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(path.to_path_buf())
}
