use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use savings_core::{SavingsEstimator, SavingsReport};
use savings_ui::{HostConfig, Locale, SavingsForm};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Heat pump savings check.
///
/// Compares the running cost of the current heating system against a modern
/// heat pump, with and without a photovoltaic share, and prints the same
/// figures the web calculator shows. The result is a rough orientation, not
/// a heat load calculation.
#[derive(Debug, Parser)]
struct Cli {
    /// Current heating system: gas, oil, direct-electric, district or
    /// old-heat-pump. Anything else falls back to a default efficiency.
    #[arg(long, default_value = "gas")]
    system: String,

    /// Annual energy consumption in kWh, as billed. Comma or dot decimals.
    #[arg(long, default_value = "")]
    consumption: String,

    /// Current energy price in €/kWh. Comma or dot decimals.
    #[arg(long, default_value = "")]
    price: String,

    /// Share of heat pump electricity covered by PV, in percent.
    #[arg(long, default_value = "0")]
    pv_share: String,

    /// Locale profile: assumptions and wording. Wins over the config
    /// file's locale when both are given; default is "de".
    #[arg(long, value_enum)]
    locale: Option<Locale>,

    /// Optional TOML file overriding the locale, assumptions or messages.
    #[arg(long)]
    config: Option<PathBuf>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let host = HostConfig::resolve(cli.locale, cli.config.as_deref())?;

    let estimator = SavingsEstimator::new(host.assumptions());
    let catalog = host.messages();

    let mut form = SavingsForm::new();
    form.system = cli.system;
    form.annual_consumption = cli.consumption;
    form.current_price = cli.price;
    form.set_pv_share(cli.pv_share);
    debug!(pv_share = form.pv_share_label(), "slider label synced");

    let outcome = estimator.estimate(&form.to_input());
    let report = SavingsReport::render(&outcome, &catalog)?;

    println!("PV share:               {} %", form.pv_share_label());
    println!("Current annual cost:    {}", report.current_annual_cost);
    println!("Heat pump (grid only):  {}", report.heat_pump_cost_grid_only);
    println!("Heat pump (with PV):    {}", report.heat_pump_cost_with_pv);
    println!();
    println!("{}", report.savings_statement);
    println!("{}", report.assumptions_caption);

    Ok(())
}
