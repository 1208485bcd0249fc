//! Heat pump savings estimate.
//!
//! This module implements the cost comparison behind the online savings
//! check: the running cost of the current heating system, taken from the
//! bill, against the projected running cost of a modern heat pump with and
//! without a photovoltaic share.
//!
//! # Calculation steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Guard: consumption and price must both be positive |
//! | 2    | Current annual cost = consumption × price |
//! | 3    | Resolve the conversion factor for the selected system |
//! | 4    | Heat demand = consumption × factor (floored to consumption if degenerate) |
//! | 5    | Heat pump electricity = heat demand ÷ SCOP |
//! | 6    | Grid-only cost = electricity × heat pump tariff |
//! | 7    | Clamp the PV share to `[0, max_pv_share_percent]` |
//! | 8    | Cost with PV = grid-only cost × (1 − PV fraction) |
//! | 9    | Annual savings = current cost − cost with PV |
//! | 10   | Verdict by the exact sign of the savings |
//!
//! The PV-covered share is priced at 0 €/kWh. That is an explicit
//! simplification of the model, not a market-price assumption.
//!
//! Every multiplication and division runs checked: a figure that exceeds
//! the decimal range degrades to the same placeholder state as missing
//! input instead of aborting the submission.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use savings_core::{
//!     AssumptionsConfig, EstimateInput, HeatingSystem, SavingsEstimator, Verdict,
//! };
//!
//! let estimator = SavingsEstimator::new(AssumptionsConfig::english_variant());
//! let input = EstimateInput {
//!     system: Some(HeatingSystem::Gas),
//!     annual_consumption_kwh: dec!(20000),
//!     current_price_per_kwh: dec!(0.10),
//!     pv_share_percent: dec!(0),
//! };
//!
//! let estimate = estimator.estimate(&input).unwrap();
//!
//! assert_eq!(estimate.current_annual_cost, dec!(2000));
//! assert_eq!(estimate.heat_demand_kwh, dec!(18000));
//! assert_eq!(estimate.heat_pump_electricity_kwh, dec!(6000));
//! assert_eq!(estimate.heat_pump_cost_grid_only, dec!(1800));
//! assert_eq!(estimate.annual_savings, dec!(200));
//! assert_eq!(estimate.verdict, Verdict::CheaperWithHeatPump);
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::clamp;
use crate::models::{
    AssumptionsConfig, ConsumptionBasis, EstimateInput, HeatingSystem, OldHeatPumpModel,
    SavingsEstimate, Verdict,
};

/// Reasons an estimate degrades to the placeholder state instead of
/// producing figures. The host renders these as a prompt, never as an
/// error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// Both consumption and price are required before any figure is
    /// computed. Unparseable form input arrives as zero, so this one guard
    /// also covers malformed text.
    #[error("annual consumption and current energy price are both required")]
    MissingInput,

    /// An intermediate figure exceeded the decimal range. Huge but
    /// parseable input degrades to the placeholder state rather than
    /// aborting the submission.
    #[error("input values are too large to estimate")]
    OutOfRange,
}

/// Calculator for the heat pump savings estimate.
///
/// Owns the [`AssumptionsConfig`] for one locale variant; every submission
/// runs through [`SavingsEstimator::estimate`] and produces a fresh
/// [`SavingsEstimate`].
#[derive(Debug, Clone)]
pub struct SavingsEstimator {
    config: AssumptionsConfig,
}

impl SavingsEstimator {
    pub fn new(config: AssumptionsConfig) -> Self {
        Self { config }
    }

    /// Runs the complete savings estimate for one submission.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::MissingInput`] when consumption or price is
    /// zero or negative, and [`EstimateError::OutOfRange`] when an
    /// intermediate figure exceeds the decimal range. No cost figures are
    /// computed in either case.
    pub fn estimate(
        &self,
        input: &EstimateInput,
    ) -> Result<SavingsEstimate, EstimateError> {
        if input.annual_consumption_kwh <= Decimal::ZERO
            || input.current_price_per_kwh <= Decimal::ZERO
        {
            return Err(EstimateError::MissingInput);
        }

        let current_annual_cost = input
            .annual_consumption_kwh
            .checked_mul(input.current_price_per_kwh)
            .ok_or_else(|| Self::out_of_range("current annual cost"))?;

        let efficiency = self.config.efficiency_for(input.system);
        let heat_demand_kwh = self
            .heat_demand(input.annual_consumption_kwh, efficiency)
            .ok_or_else(|| Self::out_of_range("heat demand"))?;

        let effective_scop = self.effective_scop();
        let heat_pump_electricity_kwh = heat_demand_kwh
            .checked_div(effective_scop)
            .ok_or_else(|| Self::out_of_range("heat pump electricity"))?;
        let heat_pump_cost_grid_only = heat_pump_electricity_kwh
            .checked_mul(self.config.heat_pump_electricity_price)
            .ok_or_else(|| Self::out_of_range("grid-only cost"))?;

        let pv_share_percent = self.clamped_pv_share(input.pv_share_percent);
        let pv_fraction = pv_share_percent / Decimal::ONE_HUNDRED;
        let heat_pump_cost_with_pv = heat_pump_cost_grid_only * (Decimal::ONE - pv_fraction);

        let annual_savings = current_annual_cost - heat_pump_cost_with_pv;

        Ok(SavingsEstimate {
            current_annual_cost,
            heat_demand_kwh,
            heat_pump_electricity_kwh,
            heat_pump_cost_grid_only,
            heat_pump_cost_with_pv,
            annual_savings,
            effective_efficiency: efficiency,
            effective_scop,
            effective_electricity_price: self.config.heat_pump_electricity_price,
            pv_share_percent,
            consumption_basis: self.consumption_basis(input.system),
            verdict: Self::verdict(annual_savings),
        })
    }

    /// Estimates the building's annual heat demand from the metered
    /// consumption.
    ///
    /// A degenerate conversion factor (zero or negative) falls back to the
    /// raw consumption so the downstream division never works on a
    /// non-positive demand. `None` when the product exceeds the decimal
    /// range.
    fn heat_demand(
        &self,
        consumption_kwh: Decimal,
        efficiency: Decimal,
    ) -> Option<Decimal> {
        if efficiency <= Decimal::ZERO {
            warn!(%efficiency, "degenerate conversion factor, using raw consumption as heat demand");
            return Some(consumption_kwh);
        }
        consumption_kwh.checked_mul(efficiency)
    }

    /// Returns the configured SCOP, substituting 3.0 when the configured
    /// value is zero or negative.
    fn effective_scop(&self) -> Decimal {
        if self.config.heat_pump_scop > Decimal::ZERO {
            self.config.heat_pump_scop
        } else {
            warn!(
                scop = %self.config.heat_pump_scop,
                "degenerate SCOP configured, substituting 3.0"
            );
            Decimal::new(3, 0)
        }
    }

    /// Clamps the requested PV share into `[0, max_pv_share_percent]`.
    fn clamped_pv_share(
        &self,
        requested_percent: Decimal,
    ) -> Decimal {
        clamp(
            requested_percent,
            Decimal::ZERO,
            self.config.max_pv_share_percent,
        )
    }

    /// Reports what the metered consumption was taken to mean.
    fn consumption_basis(
        &self,
        system: Option<HeatingSystem>,
    ) -> ConsumptionBasis {
        match system {
            Some(HeatingSystem::DirectElectric) => ConsumptionBasis::Electricity,
            Some(HeatingSystem::OldHeatPump)
                if self.config.old_heat_pump_model == OldHeatPumpModel::ElectricalInput =>
            {
                ConsumptionBasis::Electricity
            }
            _ => ConsumptionBasis::FuelOrHeat,
        }
    }

    fn out_of_range(step: &'static str) -> EstimateError {
        warn!(step, "figure exceeds the decimal range, degrading to placeholder state");
        EstimateError::OutOfRange
    }

    fn verdict(annual_savings: Decimal) -> Verdict {
        match annual_savings.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Verdict::CheaperWithHeatPump,
            std::cmp::Ordering::Less => Verdict::MoreExpensiveWithHeatPump,
            std::cmp::Ordering::Equal => Verdict::RoughlyEqual,
        }
    }
}
