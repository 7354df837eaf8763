// File: crates/heatmap-core/src/dataset.rs
// Summary: Temperature dataset model (base temperature + monthly variance records) and extents.

use serde::{Deserialize, Serialize};

/// One (year, month) cell of the heat map.
/// Contract: `month` is expected in 1..=12 but is not validated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub year: i32,
    pub month: u32,
    /// Degrees Celsius relative to `Dataset::base_temperature`.
    pub variance: f64,
}

impl MonthRecord {
    /// Zero-based band index used by the month scale (`month - 1`).
    /// Month 0 wraps to a key the band scale does not know.
    #[inline]
    pub fn month_index(&self) -> u32 {
        self.month.wrapping_sub(1)
    }

    /// Absolute temperature for this record.
    #[inline]
    pub fn temperature(&self, base: f64) -> f64 {
        base + self.variance
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthRecord>,
}

/// Min/max of years and variances across all records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub year_min: i32,
    pub year_max: i32,
    pub variance_min: f64,
    pub variance_max: f64,
}

impl Dataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<MonthRecord>) -> Self {
        Self { base_temperature, monthly_variance }
    }

    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Linear scan for year and variance extrema.
    /// Returns `None` for an empty dataset.
    pub fn extents(&self) -> Option<Extents> {
        let first = self.monthly_variance.first()?;
        let mut e = Extents {
            year_min: first.year,
            year_max: first.year,
            variance_min: first.variance,
            variance_max: first.variance,
        };
        for r in &self.monthly_variance[1..] {
            e.year_min = e.year_min.min(r.year);
            e.year_max = e.year_max.max(r.year);
            e.variance_min = e.variance_min.min(r.variance);
            e.variance_max = e.variance_max.max(r.variance);
        }
        Some(e)
    }
}
