//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing
//! - Greeks computation
//!
//! Every entry point validates its `MarketInputs` first and refuses to hand
//! back NaN or infinite values.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc;

use crate::core::{Greeks, MarketInputs, OptionQuote, OptionType, PricingError, PricingResult};

/// Standard normal CDF, Φ(x) = erfc(-x/√2) / 2
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Smallest vol·sqrt(T) the model accepts. Below it the Greeks' denominators
/// degenerate even where the price still comes out finite.
pub const MIN_TOTAL_VOL: f64 = 1e-12;

/// Black-Scholes d1 and d2 terms
///
/// Price and Greeks both go through here, so they accept exactly the same
/// inputs.
pub fn d1_d2(inputs: &MarketInputs) -> PricingResult<(f64, f64)> {
    inputs.validate()?;

    let vol_sqrt_t = inputs.vol * inputs.time.sqrt();
    if vol_sqrt_t < MIN_TOTAL_VOL || !(inputs.spot * vol_sqrt_t).is_normal() {
        return Err(PricingError::invalid_input(format!(
            "Total volatility too small: vol={} time={} spot={}",
            inputs.vol, inputs.time, inputs.spot
        )));
    }

    let drift = (inputs.rate + 0.5 * inputs.vol * inputs.vol) * inputs.time;
    let d1 = (inputs.log_moneyness() + drift) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    if !d1.is_finite() || !d2.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "d1/d2 not finite for {:?}",
            inputs
        )));
    }

    Ok((d1, d2))
}

fn price_from_terms(
    inputs: &MarketInputs,
    d1: f64,
    d2: f64,
    option_type: OptionType,
) -> PricingResult<OptionQuote> {
    let df = inputs.discount_factor();
    let spot = inputs.spot;
    let strike = inputs.strike;

    let price = match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    if !price.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "{} price not finite for {:?}",
            option_type.label(),
            inputs
        )));
    }

    Ok(OptionQuote::new(option_type, price, d1, d2))
}

/// Black-Scholes European option price
pub fn price(inputs: &MarketInputs, option_type: OptionType) -> PricingResult<OptionQuote> {
    let (d1, d2) = d1_d2(inputs)?;
    price_from_terms(inputs, d1, d2, option_type)
}

/// Call and put quotes sharing one d1/d2 evaluation
pub fn price_both(inputs: &MarketInputs) -> PricingResult<(OptionQuote, OptionQuote)> {
    let (d1, d2) = d1_d2(inputs)?;
    let call = price_from_terms(inputs, d1, d2, OptionType::Call)?;
    let put = price_from_terms(inputs, d1, d2, OptionType::Put)?;
    Ok((call, put))
}

/// Black-Scholes Greeks for the call and the put.
///
/// Vega is per unit of volatility and theta is per year.
pub fn greeks(inputs: &MarketInputs) -> PricingResult<Greeks> {
    let (d1, d2) = d1_d2(inputs)?;

    let spot = inputs.spot;
    let strike = inputs.strike;
    let rate = inputs.rate;
    let vol = inputs.vol;
    let sqrt_t = inputs.time.sqrt();
    let df = inputs.discount_factor();
    let pdf_d1 = norm_pdf(d1);
    let cdf_d1 = norm_cdf(d1);

    // Decay from volatility, shared by both legs
    let term1 = -spot * pdf_d1 * vol / (2.0 * sqrt_t);

    let greeks = Greeks {
        delta_call: cdf_d1,
        delta_put: cdf_d1 - 1.0,
        gamma: pdf_d1 / (spot * vol * sqrt_t),
        theta_call: term1 - rate * strike * df * norm_cdf(d2),
        theta_put: term1 + rate * strike * df * norm_cdf(-d2),
        vega: spot * pdf_d1 * sqrt_t,
    };

    if !greeks.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "Greeks not finite for {:?}",
            inputs
        )));
    }

    Ok(greeks)
}
