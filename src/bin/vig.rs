use std::env;
use std::error::Error;
use std::str::FromStr;

use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use oddskit::display::DisplaySlice;
use oddskit::market::Market;
use oddskit::odds::Odds;
use oddskit::print::tabulate_vig;

/// Vig calculator: fits a 2-way or 3-way market from its quoted prices and strips
/// the bookmaker's margin to recover the true probabilities.
#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// decimal odds of the market's outcomes
    #[clap(num_args = 2..=3, required = true)]
    odds: Vec<String>,

    /// emit the outcome as JSON instead of a table
    #[clap(long)]
    json: bool,
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
    debug!("args: {args:?}");

    let prices = args
        .odds
        .iter()
        .map(|raw| Odds::from_str(raw).map(|odds| odds.price()))
        .collect::<Result<Vec<_>, _>>()?;
    let market = Market::fit(prices)?;
    debug!(
        "prices: {}, overround: {:.6}",
        DisplaySlice::from(&*market.prices),
        market.overround
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&market.breakdown())?);
    } else {
        let table = tabulate_vig(&market);
        info!("\n{}", Console::default().render(&table));
    }
    Ok(())
}
