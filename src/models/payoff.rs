//! Payoff at expiry net of premium
//!
//! Element-wise over a sweep of hypothetical underlying prices. No
//! validation happens here: NaN or infinite prices come back as NaN or
//! infinite P&L.

use ndarray::Array1;

use crate::core::{OptionType, PnLSeries};

/// Call and put P&L at each price in `stock_prices`
pub fn pnl(stock_prices: &[f64], strike: f64, premium: f64) -> PnLSeries {
    let leg = |option_type: OptionType| -> Vec<f64> {
        stock_prices
            .iter()
            .map(|&p| option_type.intrinsic(p, strike) - premium)
            .collect()
    };

    PnLSeries {
        stock_prices: stock_prices.to_vec(),
        pnl_call: leg(OptionType::Call),
        pnl_put: leg(OptionType::Put),
    }
}

/// Evenly spaced prices from `lower * spot` to `upper * spot`, endpoints included
pub fn price_sweep(spot: f64, lower: f64, upper: f64, samples: usize) -> Vec<f64> {
    Array1::linspace(spot * lower, spot * upper, samples).to_vec()
}
