//! Legend and pie colors
//!
//! Colors follow the iteration order of a totals mapping: the i-th category
//! gets `palette[i % palette.len()]`. Each chart uses its own palette, so the
//! same name can get different colors on different charts.

use serde::{Deserialize, Serialize};
use shared::CONFIG;

use crate::aggregate::TotalsMap;
use crate::error::{Result, SalesError};

/// Non-empty list of `#RRGGBB` colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(SalesError::EmptyPalette);
        }
        if let Some(bad) = colors.iter().find(|c| !is_hex_color(c)) {
            return Err(SalesError::InvalidColor(bad.clone()));
        }
        Ok(Self(colors))
    }

    /// Default product palette (8 colors)
    pub fn product() -> Self {
        Self::from_static(CONFIG.palettes.product)
    }

    /// Default payment type palette (2 colors)
    pub fn payment() -> Self {
        Self::from_static(CONFIG.palettes.payment)
    }

    fn from_static(colors: &[&str]) -> Self {
        Self(colors.iter().map(|c| c.to_string()).collect())
    }

    /// Color for position `index`, cycling
    pub fn color(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = SalesError;

    fn try_from(colors: Vec<String>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7 && color.starts_with('#') && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// One legend entry per key, in the mapping's order
pub fn assign_legend(totals: &TotalsMap, palette: &Palette) -> Vec<LegendEntry> {
    totals
        .keys()
        .enumerate()
        .map(|(i, name)| LegendEntry {
            name: name.clone(),
            color: palette.color(i).to_string(),
        })
        .collect()
}

/// Pie slice with its share of the whole
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    /// 0..=100, 0 for every slice when the whole is not positive
    pub percent: f64,
    pub color: String,
}

/// Slices in the mapping's order, colored like the legend
pub fn pie_slices(totals: &TotalsMap, palette: &Palette) -> Vec<PieSlice> {
    let whole: f64 = totals.values().sum();
    totals
        .iter()
        .enumerate()
        .map(|(i, (name, value))| PieSlice {
            name: name.clone(),
            value: *value,
            percent: if whole > 0.0 { value / whole * 100.0 } else { 0.0 },
            color: palette.color(i).to_string(),
        })
        .collect()
}
