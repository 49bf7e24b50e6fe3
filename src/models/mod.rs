//! Pricing Models
//!
//! Implements:
//! - Black-Scholes (prices, d1/d2, Greeks)
//! - Payoff (P&L at expiry across a price sweep)

pub mod black_scholes;
pub mod payoff;

pub use black_scholes::*;
pub use payoff::*;
