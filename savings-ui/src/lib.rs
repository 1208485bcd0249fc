pub mod config;
pub mod form;

pub use config::{HostConfig, Locale};
pub use form::SavingsForm;
