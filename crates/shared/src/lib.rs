//! Static dashboard configuration
//!
//! Compiled-in defaults. The CLI can override the data source and palettes
//! from `dashboard.toml`.

pub struct Config {
    pub title: &'static str,

    /// Where the sales CSV lives when nothing else is configured
    pub default_source: &'static str,

    pub palettes: Palettes,
}

/// Chart colors, `#RRGGBB`
pub struct Palettes {
    /// Product pie and legend
    pub product: &'static [&'static str],
    /// Payment type pie and legend
    pub payment: &'static [&'static str],
    /// Monthly bar fill
    pub monthly: &'static str,
    /// Threshold reference line
    pub threshold: &'static str,
}

pub static CONFIG: Config = Config {
    title: "Coffee sales dashboard",

    default_source: "sales.csv",

    palettes: Palettes {
        product: &[
            "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#6366F1", "#EC4899", "#F97316",
        ],
        payment: &["#3B82F6", "#EF4444"],
        monthly: "#3B82F6",
        threshold: "#EF4444",
    },
};
