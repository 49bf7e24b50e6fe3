//! Option quote produced by the pricing engine

use serde::{Deserialize, Serialize};

use super::option::OptionType;

/// Theoretical price of one option together with its d1/d2 terms.
///
/// Recomputed on every call, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    pub option_type: OptionType,
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
}

impl OptionQuote {
    pub fn new(option_type: OptionType, price: f64, d1: f64, d2: f64) -> Self {
        Self {
            option_type,
            price,
            d1,
            d2,
        }
    }

    /// Price less intrinsic value at the given spot
    pub fn time_value(&self, spot: f64, strike: f64) -> f64 {
        self.price - self.option_type.intrinsic(spot, strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_value() {
        let quote = OptionQuote::new(OptionType::Call, 12.0, 0.5, 0.3);
        assert!((quote.time_value(110.0, 100.0) - 2.0).abs() < 1e-12);

        let quote = OptionQuote::new(OptionType::Put, 3.0, 0.5, 0.3);
        assert!((quote.time_value(110.0, 100.0) - 3.0).abs() < 1e-12);
    }
}
