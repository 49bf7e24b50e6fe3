//! Core data types for Black-Scholes pricing
//!
//! Defines fundamental types:
//! - MarketInputs: Spot, strike, time, rate, volatility
//! - OptionQuote: Price with its d1/d2 terms
//! - Greeks: Call/put sensitivities
//! - PnLSeries: Payoff net of premium across a price sweep

pub mod option;
pub mod quote;
pub mod greeks;
pub mod pnl;
pub mod error;

pub use option::*;
pub use quote::*;
pub use greeks::*;
pub use pnl::*;
pub use error::*;
