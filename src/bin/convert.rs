use std::env;
use std::error::Error;

use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use oddskit::odds::{Odds, OddsFormat};
use oddskit::print::tabulate_conversion;

/// Converts a single odds value between decimal, American and fractional notation.
#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// odds value to convert, e.g. '2.5', '+150' or '6/4'
    value: String,

    /// notation of the supplied value
    #[clap(short = 'f', long, value_enum, default_value_t = OddsFormat::Decimal)]
    format: OddsFormat,

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

    let odds = Odds::parse(&args.value, args.format)?;
    let conversion = odds.convert();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        let table = tabulate_conversion(&conversion);
        info!("\n{}", Console::default().render(&table));
    }
    Ok(())
}
