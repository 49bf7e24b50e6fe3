//! Option type and market inputs
//!
//! The five scalars every Black-Scholes calculation is driven by, plus the
//! call/put switch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{PricingError, PricingResult};

/// Day count basis used when deriving time to expiry from dates
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot. NaN inputs stay NaN.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        positive_part(self.phi() * (spot - strike))
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

/// max(0, x) that propagates NaN (`f64::max` would swallow it)
fn positive_part(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else {
        x.max(0.0)
    }
}

/// Time to expiry in years between two dates (ACT/365.25)
pub fn time_to_expiry(expiry: NaiveDate, from: NaiveDate) -> f64 {
    let days = (expiry - from).num_days();
    days as f64 / DAYS_PER_YEAR
}

/// Market snapshot for one pricing call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub time: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Annualised volatility
    pub vol: f64,
}

impl Default for MarketInputs {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time: 1.0,
            rate: 0.05,
            vol: 0.2,
        }
    }
}

impl MarketInputs {
    pub fn new(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> Self {
        Self {
            spot,
            strike,
            time,
            rate,
            vol,
        }
    }

    /// Build inputs from an expiry date instead of a year fraction
    pub fn with_expiry(
        spot: f64,
        strike: f64,
        expiry: NaiveDate,
        as_of: NaiveDate,
        rate: f64,
        vol: f64,
    ) -> Self {
        Self::new(spot, strike, time_to_expiry(expiry, as_of), rate, vol)
    }

    /// Check every field is inside the model's domain.
    ///
    /// Zero time or zero volatility make d1/d2 divide by zero, so both must
    /// be strictly positive.
    pub fn validate(&self) -> PricingResult<()> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time", self.time),
            ("rate", self.rate),
            ("vol", self.vol),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PricingError::invalid_input(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.spot <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "Non-positive spot: {}",
                self.spot
            )));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "Non-positive strike: {}",
                self.strike
            )));
        }
        if self.time <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "Non-positive time to expiry: {}",
                self.time
            )));
        }
        if self.rate < 0.0 {
            return Err(PricingError::invalid_input(format!(
                "Negative rate: {}",
                self.rate
            )));
        }
        if self.vol <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "Non-positive volatility: {}",
                self.vol
            )));
        }

        Ok(())
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time).exp()
    }

    /// Log-moneyness: ln(S/K)
    pub fn log_moneyness(&self) -> f64 {
        (self.spot / self.strike).ln()
    }
}
