//! Raw form state of the savings check.
//!
//! Holds the field values the way a browser form would: as text, parsed
//! only when a submission is collected into an [`EstimateInput`]. The PV
//! slider's paired label is synced once at construction and again on every
//! change, so it never shows a stale default.

use savings_core::input::parse_decimal;
use savings_core::{EstimateInput, HeatingSystem};

#[derive(Debug, Clone)]
pub struct SavingsForm {
    /// Raw value of the system selector (e.g. `"gas"`).
    pub system: String,

    /// Annual consumption field text, locale-formatted.
    pub annual_consumption: String,

    /// Current energy price field text, locale-formatted.
    pub current_price: String,

    pv_share: String,
    pv_share_label: String,
}

impl SavingsForm {
    pub fn new() -> Self {
        let mut form = Self {
            system: "gas".to_string(),
            annual_consumption: String::new(),
            current_price: String::new(),
            pv_share: "0".to_string(),
            pv_share_label: String::new(),
        };
        form.sync_pv_label();
        form
    }

    /// Current slider value as raw text.
    pub fn pv_share(&self) -> &str {
        &self.pv_share
    }

    /// The label paired with the slider; always mirrors the slider value.
    pub fn pv_share_label(&self) -> &str {
        &self.pv_share_label
    }

    /// Updates the slider value and mirrors it into the label.
    pub fn set_pv_share(
        &mut self,
        raw: impl Into<String>,
    ) {
        self.pv_share = raw.into();
        self.sync_pv_label();
    }

    fn sync_pv_label(&mut self) {
        self.pv_share_label = self.pv_share.clone();
    }

    /// Collects the current field values into an [`EstimateInput`].
    ///
    /// Unknown system values become `None` and numeric fields that fail to
    /// parse become zero; neither aborts the submission.
    pub fn to_input(&self) -> EstimateInput {
        EstimateInput {
            system: HeatingSystem::parse(self.system.trim()),
            annual_consumption_kwh: parse_decimal(&self.annual_consumption),
            current_price_per_kwh: parse_decimal(&self.current_price),
            pv_share_percent: parse_decimal(&self.pv_share),
        }
    }
}

impl Default for SavingsForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use savings_core::HeatingSystem;

    use super::*;

    #[test]
    fn label_is_synced_at_construction() {
        let form = SavingsForm::new();

        assert_eq!(form.pv_share_label(), "0");
    }

    #[test]
    fn label_follows_slider_changes() {
        let mut form = SavingsForm::new();

        form.set_pv_share("45");
        assert_eq!(form.pv_share_label(), "45");

        form.set_pv_share("80");
        assert_eq!(form.pv_share_label(), "80");
    }

    #[test]
    fn to_input_parses_locale_formatted_fields() {
        let mut form = SavingsForm::new();
        form.system = "oil".to_string();
        form.annual_consumption = "20000".to_string();
        form.current_price = "0,10".to_string();
        form.set_pv_share("25");

        let input = form.to_input();

        assert_eq!(input.system, Some(HeatingSystem::Oil));
        assert_eq!(input.annual_consumption_kwh, dec!(20000));
        assert_eq!(input.current_price_per_kwh, dec!(0.10));
        assert_eq!(input.pv_share_percent, dec!(25));
    }

    #[test]
    fn to_input_degrades_malformed_fields_to_zero() {
        let mut form = SavingsForm::new();
        form.system = "fusion-reactor".to_string();
        form.annual_consumption = "lots".to_string();

        let input = form.to_input();

        assert_eq!(input.system, None);
        assert_eq!(input.annual_consumption_kwh, dec!(0));
    }
}
