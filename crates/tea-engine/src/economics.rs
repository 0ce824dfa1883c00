//! Economics aggregation over engineering outputs
//!
//! Discounts capex over the in-phasing window and opex and production over
//! the project lifetime, then folds everything into one [`MetricsReport`].
//! Archetypes contribute through their engineering output; anything the
//! engineering stage skipped simply does not appear here.

use indexmap::IndexMap;
use serde::Serialize;
use tea_project::Archetype;

use crate::engineering::EngineeringOutput;
use crate::inputs::GeneralInputs;

/// Reference year all net present values are discounted back to.
const BASE_YEAR: i32 = 2024;

/// Aggregated project metrics across all evaluated archetypes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Net present capital expenditure
    pub capex: f64,
    /// Net present operational expenditure
    pub opex: f64,
    /// Net present production
    pub production: f64,
    /// Levelised cost of energy carrier
    #[serde(rename = "LCOX")]
    pub lcox: f64,
    /// Feedstock availability, not modeled yet
    pub feedstock_availability: Option<f64>,
    /// Build schedule in years
    pub schedule: u32,
    /// Technology readiness level across archetypes
    pub trl: f64,
    /// Total footprint across archetypes
    pub layout: f64,
    /// Carbon footprint, not modeled yet
    pub carbon_footprint: Option<f64>,
    /// Safety score, not modeled yet
    pub safety: Option<f64>,
}

/// Folds engineering outputs and financial inputs into a metrics report.
#[must_use]
pub fn calculate(
    outputs: &IndexMap<Archetype, EngineeringOutput>,
    inputs: &GeneralInputs,
) -> MetricsReport {
    let capex = capex_npv(outputs, inputs);
    let opex = opex_npv(outputs, inputs);
    let production = production_npv(outputs, inputs);

    MetricsReport {
        capex,
        opex,
        production,
        lcox: lcox(capex, opex, production),
        feedstock_availability: None,
        schedule: inputs.in_phasing.years,
        trl: trl_product(outputs),
        layout: layout_total(outputs),
        carbon_footprint: None,
        safety: None,
    }
}

/// Capex discounted at the real WACC over the in-phasing window.
fn capex_npv(outputs: &IndexMap<Archetype, EngineeringOutput>, inputs: &GeneralInputs) -> f64 {
    let lead_time = inputs.fid_year - BASE_YEAR;
    let wacc_real = inputs.wacc_real();
    let years = inputs.in_phasing.years as usize;

    let mut capex = 0.0;
    for output in outputs.values() {
        for (i, share) in inputs.in_phasing.distribution.iter().take(years).enumerate() {
            capex += output.capex * share / (1.0 + wacc_real).powi(lead_time + i as i32);
        }
    }
    capex
}

/// Opex discounted at the discount rate from production start.
fn opex_npv(outputs: &IndexMap<Archetype, EngineeringOutput>, inputs: &GeneralInputs) -> f64 {
    let lead_time = inputs.start_date() - BASE_YEAR;

    let mut opex = 0.0;
    for output in outputs.values() {
        for year in 0..inputs.project_lifetime {
            opex += output.opex / (1.0 + inputs.discount_rate).powi(lead_time + year as i32);
        }
    }
    opex
}

/// Production discounted from production start.
///
/// The rate itself, not the growth factor, carries the period exponent in
/// the denominator here.
fn production_npv(outputs: &IndexMap<Archetype, EngineeringOutput>, inputs: &GeneralInputs) -> f64 {
    let lead_time = inputs.start_date() - BASE_YEAR;

    let mut production = 0.0;
    for output in outputs.values() {
        for year in 0..inputs.project_lifetime {
            production += output.production
                / (1.0 + inputs.discount_rate.powi(lead_time + year as i32));
        }
    }
    production
}

/// Levelised cost of the energy carrier.
fn lcox(capex: f64, opex: f64, production: f64) -> f64 {
    (capex + opex) / production
}

/// Overall readiness level, taken as the product across archetypes.
fn trl_product(outputs: &IndexMap<Archetype, EngineeringOutput>) -> f64 {
    outputs.values().fold(1.0, |trl, output| trl * output.trl)
}

/// Total footprint across archetypes.
fn layout_total(outputs: &IndexMap<Archetype, EngineeringOutput>) -> f64 {
    outputs.values().map(|output| output.layout).sum()
}
