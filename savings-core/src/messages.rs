//! Localized message templates and report rendering.
//!
//! Each locale of the calculator is a [`MessageCatalog`]: a set of template
//! strings rendered at runtime with named placeholders. The savings
//! statements take `{amount}`; every assumptions caption takes
//! `{efficiency}`, `{scop}`, `{price}` and `{pv_share}` so the user can
//! audit the simplifications behind the figure. Catalogs are plain data and
//! can be overridden from host configuration.

use formatx::formatx;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::EstimateError;
use crate::format::{PLACEHOLDER, format_eur};
use crate::models::{SavingsEstimate, Verdict};

/// Error raised when a message template cannot be rendered, for example a
/// host-supplied override referencing an unknown placeholder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("message template could not be rendered: {0}")]
    Template(String),
}

/// Per-locale message templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    /// Shown instead of a savings statement when required input is missing.
    pub prompt_missing_input: String,

    /// Generic caption for the missing-input state.
    pub disclaimer: String,

    /// Savings statement when the heat pump setup is cheaper. `{amount}`.
    pub statement_positive: String,

    /// Savings statement when the heat pump setup is more expensive.
    /// `{amount}` carries the absolute extra cost.
    pub statement_negative: String,

    /// Savings statement when running costs are exactly equal.
    pub statement_parity: String,

    /// Assumptions caption per verdict. All three take `{efficiency}`,
    /// `{scop}`, `{price}` and `{pv_share}`.
    pub caption_positive: String,
    pub caption_negative: String,
    pub caption_parity: String,
}

impl MessageCatalog {
    /// Messages of the English calculator variant.
    pub fn english() -> Self {
        Self {
            prompt_missing_input: "Please fill in all fields to see an estimate.".into(),
            disclaimer: "This tool is a simplified orientation and does not replace a \
                         detailed on-site calculation."
                .into(),
            statement_positive: "Estimated yearly saving with heat pump and PV share: {amount}"
                .into(),
            statement_negative: "With these assumptions, the heat pump + PV setup would be \
                                 about {amount} per year more expensive in operation."
                .into(),
            statement_parity: "With these assumptions, yearly running costs are roughly the \
                               same."
                .into(),
            caption_positive: "We assume a boiler efficiency of around {efficiency}% for your \
                               current system and a seasonal efficiency (SCOP) of {scop} for \
                               the new heat pump. For the heat pump we use an electricity \
                               price of {price} €/kWh and treat the PV share of {pv_share}% \
                               as 0 €/kWh in this simplified model."
                .into(),
            caption_negative: "This does not automatically mean a heat pump is a bad fit. \
                               Lower flow temperatures, larger radiators or a different \
                               tariff/PV setup can change the result significantly. For this \
                               estimate we assumed an efficiency of around {efficiency}%, a \
                               SCOP of {scop}, an electricity price of {price} €/kWh and a \
                               PV share of {pv_share}%."
                .into(),
            caption_parity: "Small changes in prices, temperatures or PV share can move the \
                             result in either direction. We provide a detailed calculation \
                             for your specific property on request. For this estimate we \
                             assumed an efficiency of around {efficiency}%, a SCOP of \
                             {scop}, an electricity price of {price} €/kWh and a PV share \
                             of {pv_share}%."
                .into(),
        }
    }

    /// Messages of the German calculator variant.
    pub fn german() -> Self {
        Self {
            prompt_missing_input: "Bitte Jahresverbrauch und aktuellen Energiepreis eingeben, \
                                   um eine grobe Einschätzung zu erhalten."
                .into(),
            disclaimer: "Die Berechnung ist eine vereinfachte Orientierung und ersetzt keine \
                         detaillierte Heizlast- und Wirtschaftlichkeitsberechnung."
                .into(),
            statement_positive: "Geschätzte jährliche Ersparnis: {amount} gegenüber Ihrem \
                                 aktuellen System."
                .into(),
            statement_negative: "Mit diesen Annahmen wäre die Wärmepumpe inkl. PV-Anteil \
                                 etwa {amount} pro Jahr teurer im Betrieb."
                .into(),
            statement_parity: "Mit diesen Annahmen liegen die jährlichen Kosten ungefähr \
                               gleich."
                .into(),
            caption_positive: "Wir gehen vereinfacht von einem typischen Wirkungsgrad Ihres \
                               aktuellen Systems von ca. {efficiency} % und einer \
                               Jahresarbeitszahl der neuen Wärmepumpe von etwa {scop} aus. \
                               Für den Wärmepumpenstrom rechnen wir mit {price} €/kWh und \
                               setzen den PV-Anteil von {pv_share} % in diesem Modell mit \
                               0 €/kWh an. Vor Ort prüfen wir Heizlast, Vorlauftemperaturen, \
                               Heizflächen, PV-Potenzial und Tarife im Detail."
                .into(),
            caption_negative: "Das bedeutet nicht automatisch, dass eine Wärmepumpe \
                               unpassend ist. Über Systemanpassungen (niedrigere \
                               Vorlauftemperaturen, größere Heizflächen, höherer PV-Anteil, \
                               andere Tarife) kann sich das Bild deutlich verbessern, das \
                               klären wir gemeinsam im Vor-Ort-Termin. Gerechnet haben wir \
                               mit einem Wirkungsgrad von ca. {efficiency} %, einer \
                               Jahresarbeitszahl von {scop}, einem Strompreis von {price} \
                               €/kWh und einem PV-Anteil von {pv_share} %."
                .into(),
            caption_parity: "Schon kleine Änderungen bei Energiepreisen, Systemtemperaturen \
                             oder der Auslegung können das Ergebnis in die eine oder andere \
                             Richtung verschieben. Eine genaue Berechnung erstellen wir auf \
                             Basis Ihrer Gebäudedaten. Gerechnet haben wir mit einem \
                             Wirkungsgrad von ca. {efficiency} %, einer Jahresarbeitszahl \
                             von {scop}, einem Strompreis von {price} €/kWh und einem \
                             PV-Anteil von {pv_share} %."
                .into(),
        }
    }

    /// Renders the savings statement for the estimate's verdict.
    pub fn savings_statement(
        &self,
        estimate: &SavingsEstimate,
    ) -> Result<String, MessageError> {
        let template = match estimate.verdict {
            Verdict::CheaperWithHeatPump => &self.statement_positive,
            Verdict::MoreExpensiveWithHeatPump => &self.statement_negative,
            Verdict::RoughlyEqual => return Ok(self.statement_parity.clone()),
        };
        formatx!(template, amount = format_eur(estimate.annual_savings.abs()))
            .map_err(|e| MessageError::Template(e.to_string()))
    }

    /// Renders the assumptions caption for the estimate's verdict,
    /// disclosing the effective efficiency percentage, SCOP, electricity
    /// price and PV share that produced the figure.
    pub fn assumptions_caption(
        &self,
        estimate: &SavingsEstimate,
    ) -> Result<String, MessageError> {
        let template = match estimate.verdict {
            Verdict::CheaperWithHeatPump => &self.caption_positive,
            Verdict::MoreExpensiveWithHeatPump => &self.caption_negative,
            Verdict::RoughlyEqual => &self.caption_parity,
        };
        formatx!(
            template,
            efficiency = percent_display(estimate.effective_efficiency),
            scop = plain_display(estimate.effective_scop),
            price = format!("{:.2}", estimate.effective_electricity_price),
            pv_share = plain_display(estimate.pv_share_percent)
        )
        .map_err(|e| MessageError::Template(e.to_string()))
    }
}

/// The five strings the host renders after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsReport {
    pub current_annual_cost: String,
    pub heat_pump_cost_grid_only: String,
    pub heat_pump_cost_with_pv: String,
    pub savings_statement: String,
    pub assumptions_caption: String,
}

impl SavingsReport {
    /// Turns an estimate outcome into the host-facing strings.
    ///
    /// Any [`EstimateError`] outcome renders the three cost fields as the
    /// em-dash placeholder with the prompt and the generic disclaimer.
    pub fn render(
        outcome: &Result<SavingsEstimate, EstimateError>,
        catalog: &MessageCatalog,
    ) -> Result<Self, MessageError> {
        match outcome {
            Ok(estimate) => Ok(Self {
                current_annual_cost: format_eur(estimate.current_annual_cost),
                heat_pump_cost_grid_only: format_eur(estimate.heat_pump_cost_grid_only),
                heat_pump_cost_with_pv: format_eur(estimate.heat_pump_cost_with_pv),
                savings_statement: catalog.savings_statement(estimate)?,
                assumptions_caption: catalog.assumptions_caption(estimate)?,
            }),
            Err(_) => Ok(Self {
                current_annual_cost: PLACEHOLDER.to_string(),
                heat_pump_cost_grid_only: PLACEHOLDER.to_string(),
                heat_pump_cost_with_pv: PLACEHOLDER.to_string(),
                savings_statement: catalog.prompt_missing_input.clone(),
                assumptions_caption: catalog.disclaimer.clone(),
            }),
        }
    }
}

/// "90" for a factor of 0.9, "250" for a COP of 2.5.
fn percent_display(factor: Decimal) -> String {
    (factor * Decimal::ONE_HUNDRED).normalize().to_string()
}

/// Decimal without trailing zeros: "3" for 3.0, "2.5" for 2.5.
fn plain_display(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::SavingsEstimator;
    use crate::models::{AssumptionsConfig, EstimateInput, HeatingSystem};

    fn gas_estimate(pv_share_percent: Decimal) -> SavingsEstimate {
        let estimator = SavingsEstimator::new(AssumptionsConfig::english_variant());
        estimator
            .estimate(&EstimateInput {
                system: Some(HeatingSystem::Gas),
                annual_consumption_kwh: dec!(20000),
                current_price_per_kwh: dec!(0.10),
                pv_share_percent,
            })
            .unwrap()
    }

    #[test]
    fn positive_statement_carries_formatted_amount() {
        let catalog = MessageCatalog::english();
        let estimate = gas_estimate(dec!(0));

        let statement = catalog.savings_statement(&estimate).unwrap();

        assert_eq!(
            statement,
            "Estimated yearly saving with heat pump and PV share: 200\u{a0}€"
        );
    }

    #[test]
    fn negative_statement_uses_absolute_amount() {
        let catalog = MessageCatalog::english();
        let estimator = SavingsEstimator::new(AssumptionsConfig::english_variant());
        let estimate = estimator
            .estimate(&EstimateInput {
                system: Some(HeatingSystem::OldHeatPump),
                annual_consumption_kwh: dec!(10000),
                current_price_per_kwh: dec!(0.10),
                pv_share_percent: dec!(0),
            })
            .unwrap();

        let statement = catalog.savings_statement(&estimate).unwrap();

        assert!(statement.contains("1.500\u{a0}€"), "got: {statement}");
        assert!(statement.contains("more expensive"));
    }

    #[test]
    fn parity_statement_is_static() {
        let catalog = MessageCatalog::english();
        let estimator = SavingsEstimator::new(AssumptionsConfig::english_variant());
        let estimate = estimator
            .estimate(&EstimateInput {
                system: Some(HeatingSystem::Gas),
                annual_consumption_kwh: dec!(20000),
                current_price_per_kwh: dec!(0.09),
                pv_share_percent: dec!(0),
            })
            .unwrap();

        let statement = catalog.savings_statement(&estimate).unwrap();

        assert_eq!(
            statement,
            "With these assumptions, yearly running costs are roughly the same."
        );
    }

    #[test]
    fn caption_discloses_all_assumptions() {
        let catalog = MessageCatalog::english();
        let estimate = gas_estimate(dec!(50));

        let caption = catalog.assumptions_caption(&estimate).unwrap();

        assert!(caption.contains("90%"), "efficiency missing: {caption}");
        assert!(caption.contains("SCOP) of 3"), "scop missing: {caption}");
        assert!(caption.contains("0.30 €/kWh"), "price missing: {caption}");
        assert!(caption.contains("50%"), "pv share missing: {caption}");
    }

    #[test]
    fn negative_caption_also_discloses_assumptions() {
        let catalog = MessageCatalog::english();
        let estimator = SavingsEstimator::new(AssumptionsConfig::english_variant());
        let estimate = estimator
            .estimate(&EstimateInput {
                system: Some(HeatingSystem::OldHeatPump),
                annual_consumption_kwh: dec!(10000),
                current_price_per_kwh: dec!(0.10),
                pv_share_percent: dec!(0),
            })
            .unwrap();

        let caption = catalog.assumptions_caption(&estimate).unwrap();

        // COP 2.5 disclosed as 250 %.
        assert!(caption.contains("250%"), "got: {caption}");
        assert!(caption.contains("0.30 €/kWh"));
    }

    #[test]
    fn german_catalog_renders_localized_texts() {
        let catalog = MessageCatalog::german();
        let estimator = SavingsEstimator::new(AssumptionsConfig::german_variant());
        let estimate = estimator
            .estimate(&EstimateInput {
                system: Some(HeatingSystem::Gas),
                annual_consumption_kwh: dec!(20000),
                current_price_per_kwh: dec!(0.10),
                pv_share_percent: dec!(30),
            })
            .unwrap();

        let statement = catalog.savings_statement(&estimate).unwrap();
        let caption = catalog.assumptions_caption(&estimate).unwrap();

        assert!(statement.starts_with("Geschätzte jährliche Ersparnis:"));
        assert!(caption.contains("90 %"));
        assert!(caption.contains("30 %"));
    }

    #[test]
    fn report_renders_estimate() {
        let catalog = MessageCatalog::english();
        let outcome = Ok(gas_estimate(dec!(50)));

        let report = SavingsReport::render(&outcome, &catalog).unwrap();

        assert_eq!(report.current_annual_cost, "2.000\u{a0}€");
        assert_eq!(report.heat_pump_cost_grid_only, "1.800\u{a0}€");
        assert_eq!(report.heat_pump_cost_with_pv, "900\u{a0}€");
        assert!(report.savings_statement.contains("1.100\u{a0}€"));
    }

    #[test]
    fn report_renders_missing_input_as_placeholders() {
        let catalog = MessageCatalog::english();
        let outcome = Err(EstimateError::MissingInput);

        let report = SavingsReport::render(&outcome, &catalog).unwrap();

        assert_eq!(report.current_annual_cost, "—");
        assert_eq!(report.heat_pump_cost_grid_only, "—");
        assert_eq!(report.heat_pump_cost_with_pv, "—");
        assert_eq!(
            report.savings_statement,
            "Please fill in all fields to see an estimate."
        );
        assert_eq!(
            report.assumptions_caption,
            "This tool is a simplified orientation and does not replace a detailed \
             on-site calculation."
        );
    }

    #[test]
    fn report_renders_out_of_range_as_placeholders() {
        let catalog = MessageCatalog::german();
        let outcome = Err(EstimateError::OutOfRange);

        let report = SavingsReport::render(&outcome, &catalog).unwrap();

        assert_eq!(report.current_annual_cost, "—");
        assert_eq!(report.heat_pump_cost_with_pv, "—");
        assert!(report.savings_statement.starts_with("Bitte Jahresverbrauch"));
    }

    #[test]
    fn broken_override_template_reports_error() {
        let mut catalog = MessageCatalog::english();
        catalog.statement_positive = "saving: {amout}".into();
        let estimate = gas_estimate(dec!(0));

        let result = catalog.savings_statement(&estimate);

        assert!(result.is_err());
    }
}
