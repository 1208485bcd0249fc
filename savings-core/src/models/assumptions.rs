use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::HeatingSystem;

/// How the metered consumption of an existing (old) heat pump is read.
///
/// Both readings scale the metered figure by the configured COP, but they
/// mean different things and a host should label the derived heat figure
/// accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OldHeatPumpModel {
    /// The bill shows electricity into the old heat pump; delivered heat is
    /// `consumption × COP`.
    ElectricalInput,
    /// The metered figure is treated like any other fuel and scaled by the
    /// table factor.
    FuelEquivalent,
}

/// Configuration parameters for the savings estimate.
///
/// These replace the per-page constants of the original calculator: a
/// conversion efficiency per heating system, the assumed seasonal efficiency
/// and tariff of the new heat pump, and the cap on the photovoltaic share.
/// Each locale variant of the calculator is one instance of this struct.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_core::AssumptionsConfig;
///
/// let config = AssumptionsConfig::german_variant();
///
/// assert_eq!(config.heat_pump_scop, dec!(3.0));
/// assert_eq!(config.max_pv_share_percent, dec!(80));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssumptionsConfig {
    /// Boiler efficiency assumed for gas heating.
    pub gas_efficiency: Decimal,

    /// Boiler efficiency assumed for oil heating.
    pub oil_efficiency: Decimal,

    /// Conversion factor for direct electric heating
    /// (1 kWh electricity ≈ 1 kWh heat).
    pub direct_electric_efficiency: Decimal,

    /// Conversion factor for district heating, which is billed as heat.
    pub district_heating_efficiency: Decimal,

    /// Seasonal COP assumed for an existing old heat pump.
    pub old_heat_pump_cop: Decimal,

    /// Factor applied when the selected system is unknown.
    pub fallback_efficiency: Decimal,

    /// Seasonal efficiency (SCOP) assumed for the new heat pump.
    ///
    /// A non-positive value is substituted by 3.0 at estimate time.
    pub heat_pump_scop: Decimal,

    /// Assumed heat pump electricity tariff in €/kWh.
    pub heat_pump_electricity_price: Decimal,

    /// Upper bound for the photovoltaic share slider, in percent.
    ///
    /// The variants disagree here (80 vs 100), so the bound is explicit
    /// configuration rather than a constant.
    pub max_pv_share_percent: Decimal,

    /// Interpretation of metered old-heat-pump consumption.
    pub old_heat_pump_model: OldHeatPumpModel,
}

impl AssumptionsConfig {
    /// Assumptions of the English calculator variant.
    ///
    /// Old-heat-pump consumption is read as electrical input (COP 2.5), the
    /// PV share may go up to 100 % and an unknown system falls through with
    /// factor 1.
    pub fn english_variant() -> Self {
        Self {
            gas_efficiency: Decimal::new(9, 1),
            oil_efficiency: Decimal::new(87, 2),
            direct_electric_efficiency: Decimal::ONE,
            district_heating_efficiency: Decimal::ONE,
            old_heat_pump_cop: Decimal::new(25, 1),
            fallback_efficiency: Decimal::ONE,
            heat_pump_scop: Decimal::new(30, 1),
            heat_pump_electricity_price: Decimal::new(30, 2),
            max_pv_share_percent: Decimal::ONE_HUNDRED,
            old_heat_pump_model: OldHeatPumpModel::ElectricalInput,
        }
    }

    /// Assumptions of the German calculator variant.
    ///
    /// Slightly more conservative: oil 85 %, district heating 95 %, old
    /// heat pump COP 2.2 treated as fuel-equivalent, PV share capped at
    /// 80 % and a 0.9 fallback efficiency.
    pub fn german_variant() -> Self {
        Self {
            gas_efficiency: Decimal::new(9, 1),
            oil_efficiency: Decimal::new(85, 2),
            direct_electric_efficiency: Decimal::ONE,
            district_heating_efficiency: Decimal::new(95, 2),
            old_heat_pump_cop: Decimal::new(22, 1),
            fallback_efficiency: Decimal::new(9, 1),
            heat_pump_scop: Decimal::new(30, 1),
            heat_pump_electricity_price: Decimal::new(30, 2),
            max_pv_share_percent: Decimal::new(80, 0),
            old_heat_pump_model: OldHeatPumpModel::FuelEquivalent,
        }
    }

    /// Returns the conversion factor for the selected system, falling back
    /// to [`AssumptionsConfig::fallback_efficiency`] when no system matched.
    pub fn efficiency_for(
        &self,
        system: Option<HeatingSystem>,
    ) -> Decimal {
        match system {
            Some(HeatingSystem::Gas) => self.gas_efficiency,
            Some(HeatingSystem::Oil) => self.oil_efficiency,
            Some(HeatingSystem::DirectElectric) => self.direct_electric_efficiency,
            Some(HeatingSystem::DistrictHeating) => self.district_heating_efficiency,
            Some(HeatingSystem::OldHeatPump) => self.old_heat_pump_cop,
            None => self.fallback_efficiency,
        }
    }
}
