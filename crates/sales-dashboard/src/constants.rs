//! Centralized constants for the sales dashboard CLI

// =============================================================================
// Configuration
// =============================================================================

/// Config file picked up from the working directory when `--config` is not given
pub const CONFIG_FILE: &str = "dashboard.toml";

/// Default directory for exported CSV reports
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

// =============================================================================
// File Names
// =============================================================================

pub const MONTHLY_TOTALS_FILENAME: &str = "monthly_totals.csv";
pub const PRODUCT_TOTALS_FILENAME: &str = "product_totals.csv";
pub const PAYMENT_TOTALS_FILENAME: &str = "payment_type_totals.csv";

// =============================================================================
// Console Rendering
// =============================================================================

/// Width of the longest bar in the monthly chart
pub const BAR_WIDTH: usize = 30;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter with --verbose
pub const VERBOSE_LOG_FILTER: &str = "debug";
