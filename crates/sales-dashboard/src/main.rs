//! Coffee sales dashboard
//!
//! Loads a sales CSV from a local file or URL, applies the cascading
//! filters and renders monthly, per-product and per-payment-type totals.

mod config;
mod constants;
mod fetch;
mod reports;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sales_analytics::{Dashboard, DashboardView, FilterDomains, Month};
use shared::CONFIG;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use config::FileConfig;

#[derive(Parser, Debug)]
#[command(name = "sales-dashboard")]
#[command(about = "Filter and aggregate coffee sales data")]
struct Args {
    /// Config file (default: dashboard.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Sales CSV: local path or http(s) URL
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// Only include sales from this year
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Only include this product
    #[arg(long, global = true)]
    product: Option<String>,

    /// Only include this payment type
    #[arg(long, global = true)]
    payment_type: Option<String>,

    /// Reference line on the monthly chart, in dollars
    #[arg(long, default_value_t = 0.0, global = true)]
    threshold: f64,

    /// Only include this month (e.g. "Mar" or "march")
    #[arg(long, global = true)]
    month: Option<Month>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the dashboard (default)
    Summary,

    /// List the years, products and payment types in the data
    Domains,

    /// Write CSV reports
    Export {
        /// Output directory (default: [output] dir from config, then ./output)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Print the dashboard view as JSON
    Json,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        constants::VERBOSE_LOG_FILTER
    } else {
        constants::DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// An explicit --config must exist; the default file is optional
fn load_config_file(explicit: Option<&Path>) -> Result<FileConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file '{}' not found.", path.display());
            }
            FileConfig::load(path)
        }
        None => {
            let path = Path::new(constants::CONFIG_FILE);
            if path.exists() {
                FileConfig::load(path)
            } else {
                Ok(FileConfig::default())
            }
        }
    }
}

fn warn_if_unknown<T: PartialEq + std::fmt::Debug>(name: &str, value: &T, options: &[T]) {
    if !options.contains(value) {
        warn!("{} {:?} does not appear in the data; the dashboard will be empty", name, value);
    }
}

/// Set each filter from the command line, top of the hierarchy first
fn apply_filters(dashboard: &mut Dashboard, args: &Args) -> Result<DashboardView> {
    let domains: FilterDomains = dashboard.dataset()?.domains().clone();

    let mut view = dashboard.view()?;
    if let Some(year) = args.year {
        warn_if_unknown("Year", &year, &domains.years);
        view = dashboard.set_year(Some(year))?;
    }
    if let Some(product) = &args.product {
        warn_if_unknown("Product", product, &domains.products);
        view = dashboard.set_product(Some(product))?;
    }
    if let Some(payment_type) = &args.payment_type {
        warn_if_unknown("Payment type", payment_type, &domains.payment_types);
        view = dashboard.set_payment_type(Some(payment_type))?;
    }
    if args.threshold != 0.0 {
        view = dashboard.set_threshold(args.threshold)?;
    }
    if let Some(month) = args.month {
        view = dashboard.set_month(Some(month))?;
    }
    Ok(view)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_config = load_config_file(args.config.as_deref())?;

    let location = args
        .source
        .clone()
        .or_else(|| file_config.source.location.clone())
        .unwrap_or_else(|| CONFIG.default_source.to_string());

    let mut dashboard = Dashboard::new(file_config.palettes());

    match fetch::fetch_rows(&location).await {
        Ok(rows) => {
            dashboard.load(rows)?;
        }
        Err(e) => {
            dashboard.fail(e);
        }
    }
    if let Some(e) = dashboard.load_error() {
        anyhow::bail!("{}", e);
    }

    let dropped = dashboard.dataset()?.dropped();
    if dropped > 0 {
        warn!(dropped, "Skipped rows with a missing or unreadable date");
    }

    let view = apply_filters(&mut dashboard, &args)?;

    match args.command.unwrap_or(Command::Summary) {
        Command::Summary => reports::print_summary(&view, &location),
        Command::Domains => reports::print_domains(&view.domains),
        Command::Export { output_dir } => {
            let dir = output_dir
                .or_else(|| file_config.output.dir.clone())
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_OUTPUT_DIR));
            println!("Generating CSV reports...");
            for path in reports::export_all(&dir, &view)? {
                println!("  Generated: {}", path.display());
            }
        }
        Command::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}
