//! Offshore wind engineering model
//!
//! Sizes the wind farm from the selected options: turbine count from the
//! chosen generator, substructure by water depth, substation by capacity
//! ratio, cable runs per rated power. The block roles are supplied by the
//! caller instead of being hard-wired to a particular project layout.

use serde::Deserialize;
use tea_project::{BlockId, Project};

use super::EngineeringOutput;
use crate::choices::SelectedChoices;
use crate::error::EngineError;

/// Water depths beyond this call for a floating substructure.
const FLOATING_DEPTH_THRESHOLD_M: f64 = 60.0;

/// Effective production hours per year.
const HOURS_PER_YEAR: f64 = 365.0 * 22.0;

/// Normalization applied to the raw production figure.
const PRODUCTION_NORMALIZATION: f64 = 100_000.0;

// TODO: replace the placeholder footprint and cost factors once vendor
// cost data lands.
const WTG_FOOTPRINT_M2: f64 = 10.0;
const BOTTOM_FIXED_SIZE: f64 = 10.0;
const CAPEX_PER_LAYOUT: f64 = 10.0;
const OPEX_PER_MW: f64 = 1.0;

/// Property carrying an option's technology readiness level.
const TRL_PROPERTY: &str = "trlmaturity";

/// Which block plays which role in the offshore wind system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OffshoreWindBlocks {
    /// Wind turbine generator block
    pub wtg: BlockId,
    /// Mooring block, sized when the substructure floats
    pub mooring: BlockId,
    /// Substructure block, sized when bottom-fixed
    pub substructure: BlockId,
    /// Offshore substation block
    pub substation: BlockId,
    /// Inter-array cabling block
    pub iac: BlockId,
    /// Export cable block
    pub export_cable: BlockId,
}

/// Site conditions at the desired project location
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConditions {
    /// Water depth in meters
    pub water_depth: f64,
    /// Project area in square kilometers
    pub project_area: f64,
    /// Desired project capacity in MW
    pub capacity: f64,
    /// Distance from shore in kilometers
    pub distance_from_shore: f64,
}

impl Default for SiteConditions {
    fn default() -> Self {
        Self {
            water_depth: 60.0,
            project_area: 100.0,
            capacity: 100.0,
            distance_from_shore: 100.0,
        }
    }
}

/// Wind conditions of one country
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindProfile {
    /// Country the profile was measured for
    pub country: String,
    /// Mean wind speed in m/s
    pub wind_speed: f64,
    /// Air density in kg/m3
    pub air_density: f64,
}

/// Wind profiles for the countries a project may be sited in
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WindData {
    /// Known wind profiles
    pub profiles: Vec<WindProfile>,
}

impl WindData {
    /// Looks up the profile of a country.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownWindCountry`] when no profile matches.
    pub fn for_country(&self, country: &str) -> Result<&WindProfile, EngineError> {
        self.profiles
            .iter()
            .find(|profile| profile.country == country)
            .ok_or_else(|| EngineError::UnknownWindCountry {
                country: country.to_string(),
            })
    }
}

/// Everything the offshore wind model needs besides the project itself
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OffshoreWindContext {
    /// Block role assignment
    pub blocks: OffshoreWindBlocks,
    /// Site conditions, defaulted when absent
    #[serde(default)]
    pub site: SiteConditions,
    /// Wind profiles to match the project country against
    pub wind: WindData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubstructureKind {
    Floating,
    BottomFixed,
}

#[derive(Debug, Clone, PartialEq)]
struct SubstructureLayout {
    kind: SubstructureKind,
    size: f64,
    weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct SubstationLayout {
    capacity: f64,
    count: f64,
    weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct CableRun {
    count: f64,
    weight: f64,
}

/// Sizes the offshore wind system and derives its engineering output.
///
/// # Errors
///
/// Fails when a role block has no selected option, a selected option lacks
/// a property a formula needs, or the project country has no wind profile.
pub fn evaluate(
    project: &Project,
    selected: &SelectedChoices,
    context: &OffshoreWindContext,
) -> Result<EngineeringOutput, EngineError> {
    let OffshoreWindContext { blocks, site, wind } = context;

    let turbines = turbine_count(selected, blocks, site)?;
    let production = annual_production(selected, blocks, wind, &project.country)?;
    let wtg_area = wtg_layout(turbines);
    let substructure = substructure_layout(selected, blocks, site)?;
    let substation = substation_layout(selected, blocks, turbines)?;
    let array_cables = cable_run(selected, blocks.iac, site)?;
    let export_cables = cable_run(selected, blocks.export_cable, site)?;

    tracing::debug!(
        turbines,
        substructure_kind = ?substructure.kind,
        substructure_weight = substructure.weight,
        substations = substation.count,
        substation_weight = substation.weight,
        array_cable_weight = array_cables.weight,
        export_cable_weight = export_cables.weight,
        "sized offshore wind system"
    );

    let layout = wtg_area + substructure.size;
    Ok(EngineeringOutput {
        layout,
        capex: CAPEX_PER_LAYOUT * layout,
        opex: OPEX_PER_MW * (site.capacity + substation.capacity),
        trl: selected.sum_property(TRL_PROPERTY),
        stack_replacement_cost: 0.0,
        stack_replacement_time: 0.0,
        production,
    })
}

/// Turbines needed to reach the desired capacity.
fn turbine_count(
    selected: &SelectedChoices,
    blocks: &OffshoreWindBlocks,
    site: &SiteConditions,
) -> Result<f64, EngineError> {
    let rated_power = selected.number(blocks.wtg, "ratedpower")?;
    Ok(site.capacity / rated_power)
}

/// Energy produced per year by one turbine under the country's wind.
fn annual_production(
    selected: &SelectedChoices,
    blocks: &OffshoreWindBlocks,
    wind: &WindData,
    country: &str,
) -> Result<f64, EngineError> {
    let rated_power = selected.number(blocks.wtg, "ratedpower")?;
    let profile = wind.for_country(country)?;

    Ok(rated_power * profile.wind_speed * profile.air_density * HOURS_PER_YEAR
        / PRODUCTION_NORMALIZATION)
}

/// Footprint of the turbine array.
fn wtg_layout(turbines: f64) -> f64 {
    turbines * WTG_FOOTPRINT_M2
}

/// Substructure concept, sized by water depth.
fn substructure_layout(
    selected: &SelectedChoices,
    blocks: &OffshoreWindBlocks,
    site: &SiteConditions,
) -> Result<SubstructureLayout, EngineError> {
    if site.water_depth > FLOATING_DEPTH_THRESHOLD_M {
        let size = selected.number(blocks.mooring, "weightpercsasize")?;
        let weight = selected.number(blocks.mooring, "weightpermeter")? * size;
        Ok(SubstructureLayout {
            kind: SubstructureKind::Floating,
            size,
            weight,
        })
    } else {
        let weight = selected.number(blocks.substructure, "weightpermw")? * site.capacity;
        Ok(SubstructureLayout {
            kind: SubstructureKind::BottomFixed,
            size: BOTTOM_FIXED_SIZE,
            weight,
        })
    }
}

/// Substation count and weight from its capacity and the turbine count.
fn substation_layout(
    selected: &SelectedChoices,
    blocks: &OffshoreWindBlocks,
    turbines: f64,
) -> Result<SubstationLayout, EngineError> {
    let capacity = selected.number(blocks.substation, "capacity")?;
    let count = capacity / turbines;
    let weight = count
        * (selected.number(blocks.substation, "weighttopsidepermw")?
            + selected.number(blocks.substation, "weighthullpermw")?)
        * capacity;

    Ok(SubstationLayout {
        capacity,
        count,
        weight,
    })
}

/// Cable count and weight for one cabling block.
fn cable_run(
    selected: &SelectedChoices,
    block: BlockId,
    site: &SiteConditions,
) -> Result<CableRun, EngineError> {
    let count = site.capacity / selected.number(block, "ratedpower")?;
    let weight = count * selected.number(block, "weightperkm")?;

    Ok(CableRun { count, weight })
}
