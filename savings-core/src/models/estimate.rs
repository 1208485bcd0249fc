use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::HeatingSystem;

/// One submission's worth of raw input, already parsed to numbers.
///
/// Values come straight from the host's form fields; text that failed to
/// parse arrives here as zero and is caught by the estimator's input guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Selected heating system; `None` when the selector held an unknown
    /// value.
    pub system: Option<HeatingSystem>,

    /// Annual energy consumption in kWh as metered for the current system.
    pub annual_consumption_kwh: Decimal,

    /// Current energy price in €/kWh.
    pub current_price_per_kwh: Decimal,

    /// Requested photovoltaic share in percent, before clamping.
    pub pv_share_percent: Decimal,
}

/// What the metered consumption figure represents for the selected system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsumptionBasis {
    /// Fuel or delivered heat (gas, oil, district heating, or an old heat
    /// pump modeled as fuel-equivalent).
    FuelOrHeat,
    /// Metered electricity (direct electric heating, or an old heat pump
    /// modeled as electrical input).
    Electricity,
}

/// Outcome bucket selected by the exact sign of the annual savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The heat pump setup is cheaper to run (savings > 0).
    CheaperWithHeatPump,
    /// The heat pump setup costs more to run (savings < 0).
    MoreExpensiveWithHeatPump,
    /// Running costs are exactly equal under these assumptions.
    RoughlyEqual,
}

/// Result of one savings estimate.
///
/// Cost figures are unrounded; rounding to whole euros happens only at
/// formatting time. The `effective_*` fields echo the values actually used
/// so the assumptions caption can disclose them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    /// Annual cost of the current system: consumption × price.
    pub current_annual_cost: Decimal,

    /// Estimated annual heat demand of the building in kWh.
    pub heat_demand_kwh: Decimal,

    /// Electricity the new heat pump would draw per year in kWh.
    pub heat_pump_electricity_kwh: Decimal,

    /// Annual heat pump cost with all electricity from the grid.
    pub heat_pump_cost_grid_only: Decimal,

    /// Annual heat pump cost with the PV-covered share priced at zero.
    pub heat_pump_cost_with_pv: Decimal,

    /// Current cost minus heat pump cost with PV; negative when the heat
    /// pump would be more expensive.
    pub annual_savings: Decimal,

    /// Conversion factor actually applied to the consumption.
    pub effective_efficiency: Decimal,

    /// SCOP actually used (the configured value, or 3.0 if that was
    /// degenerate).
    pub effective_scop: Decimal,

    /// Heat pump electricity tariff used, in €/kWh.
    pub effective_electricity_price: Decimal,

    /// PV share in percent after clamping to the configured bound.
    pub pv_share_percent: Decimal,

    /// What the consumption figure was taken to mean.
    pub consumption_basis: ConsumptionBasis,

    /// Sign bucket of `annual_savings`.
    pub verdict: Verdict,
}
