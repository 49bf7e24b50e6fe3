//! Pricing dashboard
//!
//! Pull-based render model for a calculator front end. The caller reads the
//! current inputs, asks for a snapshot, and draws it:
//!
//! 1. Both option prices
//! 2. The six Greeks as a horizontal bar chart
//! 3. A two-row call/put P&L heatmap over a sweep around spot, with a
//!    vertical marker at the current spot
//!
//! A snapshot is all-or-nothing. Invalid inputs produce an error and nothing
//! to draw.

pub mod config;
pub mod render;

pub use config::*;
pub use render::*;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::core::{
    Greeks, MarketInputs, OptionQuote, OptionType, PnLSeries, PricingError, PricingResult,
};
use crate::models::{greeks, pnl, price, price_both, price_sweep};

/// Everything one render of the dashboard needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub inputs: MarketInputs,
    pub call: OptionQuote,
    pub put: OptionQuote,
    pub greeks: Greeks,
    /// Premium the P&L is net of (the call price unless overridden)
    pub premium: f64,
    pub pnl: PnLSeries,
    /// Symmetric colour bound: the heatmap spans [-bound, bound]
    pub heatmap_bound: f64,
    /// Where the vertical spot marker sits on the price axis
    pub spot_marker: f64,
}

impl DashboardSnapshot {
    /// 2 x n P&L grid, row 0 call and row 1 put
    pub fn heatmap(&self) -> Array2<f64> {
        self.pnl.heatmap()
    }
}

/// Computes dashboard snapshots from market inputs
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DashboardConfig) -> PricingResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Inputs the form starts with
    pub fn default_inputs(&self) -> MarketInputs {
        self.config.defaults
    }

    /// Price, Greeks and P&L for one input snapshot.
    ///
    /// `premium` overrides the call price as the cost the P&L is net of.
    pub fn evaluate(
        &self,
        inputs: &MarketInputs,
        premium: Option<f64>,
    ) -> PricingResult<DashboardSnapshot> {
        check_premium(premium)?;

        let (call, put) = price_both(inputs)?;
        let greeks = greeks(inputs)?;

        let premium = premium.unwrap_or(call.price);
        let pnl = self.sweep_pnl(inputs, premium, None);
        let heatmap_bound = pnl.max_abs();

        tracing::debug!(
            call = call.price,
            put = put.price,
            premium,
            samples = pnl.len(),
            "Evaluated dashboard snapshot"
        );

        Ok(DashboardSnapshot {
            inputs: *inputs,
            call,
            put,
            greeks,
            premium,
            pnl,
            heatmap_bound,
            spot_marker: inputs.spot,
        })
    }

    /// P&L alone, for the same inputs the dashboard accepts.
    ///
    /// Returns the premium used and the series. `prices` replaces the
    /// configured sweep when given. Invalid inputs are rejected even when an
    /// explicit premium makes pricing unnecessary.
    pub fn pnl_scenario(
        &self,
        inputs: &MarketInputs,
        premium: Option<f64>,
        prices: Option<&[f64]>,
    ) -> PricingResult<(f64, PnLSeries)> {
        check_premium(premium)?;

        // Priced even with an explicit premium: this is what validates inputs
        let call = price(inputs, OptionType::Call)?;
        let premium = premium.unwrap_or(call.price);

        let series = self.sweep_pnl(inputs, premium, prices);
        tracing::debug!(premium, samples = series.len(), "Evaluated P&L scenario");
        Ok((premium, series))
    }

    fn sweep_pnl(
        &self,
        inputs: &MarketInputs,
        premium: f64,
        prices: Option<&[f64]>,
    ) -> PnLSeries {
        match prices {
            Some(prices) => pnl(prices, inputs.strike, premium),
            None => {
                let sweep = &self.config.sweep;
                let prices = price_sweep(inputs.spot, sweep.lower, sweep.upper, sweep.samples);
                pnl(&prices, inputs.strike, premium)
            }
        }
    }
}

fn check_premium(premium: Option<f64>) -> PricingResult<()> {
    match premium {
        Some(p) if !p.is_finite() => Err(PricingError::invalid_input(format!(
            "Premium must be finite, got {}",
            p
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let dashboard = Dashboard::new();
        let inputs = dashboard.default_inputs();
        let snap = dashboard.evaluate(&inputs, None).unwrap();

        assert!((snap.call.price - 10.4506).abs() < 1e-3);
        assert!((snap.put.price - 5.5735).abs() < 1e-3);
        assert_eq!(snap.premium, snap.call.price);
        assert_eq!(snap.spot_marker, 100.0);

        assert_eq!(snap.pnl.len(), 18);
        assert!((snap.pnl.stock_prices[0] - 50.0).abs() < 1e-12);
        assert!((snap.pnl.stock_prices[17] - 150.0).abs() < 1e-9);
        assert_eq!(snap.heatmap().dim(), (2, 18));

        // Both ends of the sweep are 50 in the money
        let expected = 50.0 - snap.call.price;
        assert!((snap.heatmap_bound - expected).abs() < 1e-9);
    }

    #[test]
    fn test_premium_override() {
        let dashboard = Dashboard::new();
        let snap = dashboard
            .evaluate(&MarketInputs::default(), Some(0.0))
            .unwrap();
        assert_eq!(snap.premium, 0.0);
        assert!(snap.pnl.pnl_call.iter().all(|v| *v >= 0.0));

        let bad = dashboard.evaluate(&MarketInputs::default(), Some(f64::NAN));
        assert!(bad.unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_invalid_inputs_yield_nothing() {
        let dashboard = Dashboard::new();
        let inputs = MarketInputs {
            vol: 0.0,
            ..MarketInputs::default()
        };
        assert!(dashboard.evaluate(&inputs, None).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_pnl_scenario_matches_snapshot() {
        let dashboard = Dashboard::new();
        let inputs = MarketInputs::default();
        let snap = dashboard.evaluate(&inputs, None).unwrap();

        let (premium, series) = dashboard.pnl_scenario(&inputs, None, None).unwrap();
        assert_eq!(premium, snap.call.price);
        assert_eq!(series, snap.pnl);

        let (premium, series) = dashboard
            .pnl_scenario(&inputs, Some(10.0), Some(&[50.0, 100.0, 150.0]))
            .unwrap();
        assert_eq!(premium, 10.0);
        assert_eq!(series.pnl_call, vec![-10.0, -10.0, 40.0]);
        assert_eq!(series.pnl_put, vec![40.0, -10.0, -10.0]);
    }

    #[test]
    fn test_pnl_scenario_rejects_invalid_inputs_with_explicit_premium() {
        let dashboard = Dashboard::new();
        let base = MarketInputs::default();
        let cases = [
            MarketInputs { time: 0.0, ..base },
            MarketInputs { vol: 0.0, ..base },
            MarketInputs {
                spot: -20.0,
                vol: 0.0,
                ..base
            },
        ];
        for inputs in cases {
            let err = dashboard.pnl_scenario(&inputs, Some(5.0), None).unwrap_err();
            assert!(err.is_invalid_input(), "{:?}", inputs);
        }

        let err = dashboard.pnl_scenario(&base, Some(f64::NAN), None).unwrap_err();
        assert!(err.is_invalid_input());
        let err = dashboard
            .pnl_scenario(&base, Some(f64::INFINITY), Some(&[100.0]))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_custom_sweep() {
        let mut config = DashboardConfig::default();
        config.sweep = SweepConfig {
            lower: 0.8,
            upper: 1.2,
            samples: 5,
        };
        let dashboard = Dashboard::with_config(config).unwrap();

        let snap = dashboard.evaluate(&MarketInputs::default(), Some(1.0)).unwrap();
        assert_eq!(snap.pnl.len(), 5);
        assert!((snap.pnl.stock_prices[2] - 100.0).abs() < 1e-9);
        assert!((snap.pnl.pnl_call[4] - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = DashboardConfig::default();
        config.sweep.samples = 0;
        assert!(Dashboard::with_config(config).is_err());
    }
}
