//! Project-level financial assumptions
//!
//! Placeholder figures stand in until project setup supplies real ones, so
//! every field has a default and partial input files deserialize cleanly.

use serde::{Deserialize, Serialize};

/// Capex in-phasing period and its yearly distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InPhasing {
    /// Number of build years before production starts
    pub years: u32,
    /// Share of capex spent in each build year
    pub distribution: Vec<f64>,
}

impl Default for InPhasing {
    fn default() -> Self {
        Self {
            years: 3,
            distribution: vec![0.1, 0.5, 0.4],
        }
    }
}

/// General financial inputs from project setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralInputs {
    /// Nominal weighted average cost of capital
    pub wacc_nominal: f64,
    /// Inflation rate for the region
    pub inflation_rate: f64,
    /// Financial investment decision year
    pub fid_year: i32,
    /// Capex in-phasing schedule
    pub in_phasing: InPhasing,
    /// Expected project lifetime in years
    pub project_lifetime: u32,
    /// Discount rate for opex and production
    pub discount_rate: f64,
}

impl Default for GeneralInputs {
    fn default() -> Self {
        Self {
            wacc_nominal: 0.08,
            inflation_rate: 0.02,
            fid_year: 2026,
            in_phasing: InPhasing::default(),
            project_lifetime: 25,
            discount_rate: 0.02,
        }
    }
}

impl GeneralInputs {
    /// Production start year: one year after the in-phasing period ends.
    #[must_use]
    pub fn start_date(&self) -> i32 {
        self.fid_year + self.in_phasing.years as i32 + 1
    }

    /// Weighted average cost of capital adjusted for inflation.
    #[must_use]
    pub fn wacc_real(&self) -> f64 {
        (1.0 + self.wacc_nominal) / (1.0 + self.inflation_rate) - 1.0
    }
}
