use std::env;
use std::error::Error;
use std::str::FromStr;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use oddskit::freebet;
use oddskit::odds::Odds;
use oddskit::print::tabulate_freebet;

/// Free-bet conversion calculator: lays the back bet on an exchange and reports the
/// guaranteed extraction.
#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// decimal odds of the back bet placed with the free bet
    #[clap(short = 'b', long)]
    back: String,

    /// decimal odds available to lay on the exchange
    #[clap(short = 'l', long)]
    lay: String,

    /// face value of the free bet
    #[clap(short = 'a', long)]
    amount: f64,

    /// exchange commission percentage
    #[clap(short = 'c', long, default_value_t = 0.0)]
    commission: f64,

    /// currency symbol used in the table
    #[clap(long, default_value = "$")]
    symbol: String,

    /// emit the outcome as JSON instead of a table
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            bail!("the free bet amount must be a positive amount");
        }
        if !(0.0..=100.0).contains(&self.commission) {
            bail!("the commission must lie between 0 and 100");
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

    let back = Odds::from_str(&args.back)?;
    let lay = Odds::from_str(&args.lay)?;
    let outcome = freebet::convert(back, lay, args.amount, args.commission)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        let table = tabulate_freebet(&outcome, &args.symbol);
        info!("\n{}", Console::default().render(&table));
    }
    Ok(())
}
