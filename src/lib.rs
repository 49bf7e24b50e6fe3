//! # BS Options - Black-Scholes Pricing Calculator
//!
//! European option prices, Greeks and profit-and-loss sweeps under the
//! Black-Scholes model.
//!
//! ## Key Components
//!
//! - **Pricing**: Call/put prices and the d1/d2 terms
//! - **Greeks**: Delta, Gamma, Theta and Vega for both legs
//! - **Payoff**: P&L net of premium across a sweep of underlying prices
//! - **Dashboard**: One snapshot with everything a calculator front end draws
//!
//! ## Usage
//!
//! ```rust
//! use bs_options::prelude::*;
//!
//! let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
//!
//! let call = bs_price(&inputs, OptionType::Call).unwrap();
//! let greeks = bs_greeks(&inputs).unwrap();
//! let series = pnl(&[50.0, 100.0, 150.0], inputs.strike, call.price);
//!
//! assert!((call.price - 10.4506).abs() < 1e-3);
//! assert!((greeks.delta_call - greeks.delta_put - 1.0).abs() < 1e-12);
//! assert_eq!(series.len(), 3);
//! ```
//!
//! Every function is pure. Inputs outside the model's domain (non-positive
//! spot, strike, time or volatility, negative rate, non-finite values) fail
//! with [`PricingError::InvalidInput`] instead of producing NaN.
//!
//! ## What This Library Does NOT Do
//!
//! - Price American options
//! - Solve for implied volatility
//! - Fetch market data

pub mod core;
pub mod dashboard;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        time_to_expiry, Greeks, MarketInputs, OptionQuote, OptionType, PnLSeries, PricingError,
        PricingResult,
    };

    // Models
    pub use crate::models::{
        d1_d2,
        greeks as bs_greeks,
        norm_cdf,
        norm_pdf,
        pnl,
        // Black-Scholes
        price as bs_price,
        price_both,
        price_sweep,
    };

    // Dashboard
    pub use crate::dashboard::{
        render_dashboard, Dashboard, DashboardConfig, DashboardSnapshot, InputSteps, SweepConfig,
    };
}

// Re-export main types at crate root
pub use crate::core::{MarketInputs, OptionType, PricingError, PricingResult};
pub use crate::dashboard::Dashboard;
