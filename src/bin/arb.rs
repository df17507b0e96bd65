use std::env;
use std::error::Error;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use oddskit::arb;
use oddskit::odds::{Odds, OddsFormat};
use oddskit::print::tabulate_arb;

/// Two-leg arbitrage calculator: sizes the opposing stake and reports the
/// guaranteed return, profit and ROI.
#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// odds for the first leg
    odds_a: String,

    /// odds for the second leg
    odds_b: String,

    /// notation of the supplied odds
    #[clap(short = 'f', long, value_enum, default_value_t = OddsFormat::Decimal)]
    format: OddsFormat,

    /// stake on the first leg
    #[clap(short = 's', long, default_value_t = 1000.0)]
    stake: f64,

    /// currency symbol used in the table
    #[clap(long, default_value = "$")]
    symbol: String,

    /// emit the outcome as JSON instead of a table
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.stake.is_finite() || self.stake <= 0.0 {
            bail!("the stake must be a positive amount");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let odds_a = Odds::parse(&args.odds_a, args.format)?;
    let odds_b = Odds::parse(&args.odds_b, args.format)?;
    let outcome = arb::calculate(odds_a, odds_b, args.stake)?;
    debug!(
        "booksum: {:.6}, arbitrage: {}",
        odds_a.implied_prob() + odds_b.implied_prob(),
        outcome.is_arb
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        let table = tabulate_arb(&outcome, &args.symbol);
        info!("\n{}", Console::default().render(&table));
    }
    Ok(())
}
