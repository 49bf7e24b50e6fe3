//! BS Options CLI
//!
//! Command-line front end for the Black-Scholes calculator.
//!
//! - `bs-cli price` - Call and put prices
//! - `bs-cli greeks` - Delta, Gamma, Theta, Vega
//! - `bs-cli pnl` - P&L at expiry across a price sweep
//! - `bs-cli dashboard` - Everything above in one view

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bs_options::dashboard::{render_greeks, render_heatmap};
use bs_options::prelude::*;

/// Black-Scholes option pricing calculator
#[derive(Parser)]
#[command(name = "bs-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Dashboard configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the call and the put
    Price {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// Compute the Greeks
    Greeks {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// P&L at expiry across underlying prices
    Pnl {
        #[command(flatten)]
        market: MarketArgs,

        /// Premium paid (defaults to the call price)
        #[arg(long)]
        premium: Option<f64>,

        /// Explicit prices, comma separated (defaults to the configured sweep)
        #[arg(long, value_delimiter = ',')]
        prices: Vec<f64>,
    },

    /// Prices, Greek bars and the P&L heatmap
    Dashboard {
        #[command(flatten)]
        market: MarketArgs,

        /// Premium paid (defaults to the call price)
        #[arg(long)]
        premium: Option<f64>,
    },
}

/// Market inputs; anything omitted comes from the configured defaults
#[derive(Args)]
struct MarketArgs {
    /// Spot price
    #[arg(short = 'S', long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(short = 'K', long)]
    strike: Option<f64>,

    /// Time to expiry in years
    #[arg(short = 'T', long, conflicts_with = "expiry")]
    time: Option<f64>,

    /// Expiry date (YYYY-MM-DD), instead of --time
    #[arg(long)]
    expiry: Option<NaiveDate>,

    /// Valuation date for --expiry (defaults to today)
    #[arg(long, requires = "expiry")]
    as_of: Option<NaiveDate>,

    /// Risk-free rate
    #[arg(short, long)]
    rate: Option<f64>,

    /// Volatility
    #[arg(short = 's', long)]
    vol: Option<f64>,
}

impl MarketArgs {
    fn resolve(&self, defaults: MarketInputs) -> MarketInputs {
        let time = match self.expiry {
            Some(expiry) => {
                let as_of = self
                    .as_of
                    .unwrap_or_else(|| chrono::Local::now().date_naive());
                time_to_expiry(expiry, as_of)
            }
            None => self.time.unwrap_or(defaults.time),
        };

        MarketInputs {
            spot: self.spot.unwrap_or(defaults.spot),
            strike: self.strike.unwrap_or(defaults.strike),
            time,
            rate: self.rate.unwrap_or(defaults.rate),
            vol: self.vol.unwrap_or(defaults.vol),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialise output")?;
    println!("{}", json);
    Ok(())
}

fn print_inputs(inputs: &MarketInputs) {
    println!("  Spot:   ${:.2}", inputs.spot);
    println!("  Strike: ${:.2}", inputs.strike);
    println!("  Time:   {:.4} years ({:.0} days)", inputs.time, inputs.time * 365.0);
    println!("  Rate:   {:.2}%", inputs.rate * 100.0);
    println!("  Vol:    {:.2}%\n", inputs.vol * 100.0);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dashboard = match &cli.config {
        Some(path) => {
            let config = DashboardConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            Dashboard::with_config(config)?
        }
        None => Dashboard::new(),
    };
    let defaults = dashboard.default_inputs();

    match cli.command {
        Commands::Price { market } => {
            let inputs = market.resolve(defaults);
            debug!(?inputs, "Pricing");
            let (call, put) = price_both(&inputs).context("Cannot price these inputs")?;

            if cli.json {
                return print_json(&[call, put]);
            }

            println!("Black-Scholes Pricing:");
            print_inputs(&inputs);
            println!("Option Prices:");
            println!("  Call: ${:.4}  (d1 {:.4}, d2 {:.4})", call.price, call.d1, call.d2);
            println!("  Put:  ${:.4}", put.price);

            println!("\nTime Value:");
            println!("  Call: ${:.4}", call.time_value(inputs.spot, inputs.strike));
            println!("  Put:  ${:.4}", put.time_value(inputs.spot, inputs.strike));

            let parity = call.price - put.price;
            let forward_value = inputs.spot - inputs.strike * inputs.discount_factor();
            println!("\nPut-Call Parity:");
            println!("  C - P = {:.4}", parity);
            println!("  S - K*e^(-rT) = {:.4}", forward_value);
        }

        Commands::Greeks { market } => {
            let inputs = market.resolve(defaults);
            debug!(?inputs, "Computing greeks");
            let greeks = bs_greeks(&inputs).context("Cannot compute Greeks for these inputs")?;

            if cli.json {
                return print_json(&greeks);
            }

            println!("Greeks:");
            print_inputs(&inputs);
            print!("{}", render_greeks(&greeks));
            println!("\nVega per vol point: {:.4}", greeks.vega_per_vol_point());
        }

        Commands::Pnl {
            market,
            premium,
            prices,
        } => {
            let inputs = market.resolve(defaults);
            let explicit = (!prices.is_empty()).then_some(prices.as_slice());
            info!(?premium, explicit_prices = prices.len(), "Evaluating P&L");

            let (premium, series) = dashboard
                .pnl_scenario(&inputs, premium, explicit)
                .context("Cannot evaluate P&L for these inputs")?;

            if cli.json {
                return print_json(&series);
            }

            println!("Profit and Loss ($), strike {:.2}, premium {:.2}", inputs.strike, premium);
            print!("{}", render_heatmap(&series, inputs.spot));
        }

        Commands::Dashboard { market, premium } => {
            let inputs = market.resolve(defaults);
            let snapshot = dashboard
                .evaluate(&inputs, premium)
                .context("Cannot build the dashboard for these inputs")?;

            if cli.json {
                return print_json(&snapshot);
            }

            print!("{}", render_dashboard(&snapshot));
        }
    }

    Ok(())
}
