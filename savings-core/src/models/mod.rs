mod assumptions;
mod estimate;
mod heating_system;

pub use assumptions::{AssumptionsConfig, OldHeatPumpModel};
pub use estimate::{ConsumptionBasis, EstimateInput, SavingsEstimate, Verdict};
pub use heating_system::HeatingSystem;
