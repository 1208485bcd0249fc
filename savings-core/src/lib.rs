pub mod calculations;
pub mod format;
pub mod input;
pub mod messages;
pub mod models;

pub use calculations::{EstimateError, SavingsEstimator};
pub use messages::{MessageCatalog, MessageError, SavingsReport};
pub use models::*;
