//! Option Greeks
//!
//! First and second order sensitivities shared by the call and the put.

use serde::{Deserialize, Serialize};

/// Black-Scholes sensitivities for both legs of one market snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Call delta: dC/dS
    pub delta_call: f64,
    /// Put delta: dP/dS
    pub delta_put: f64,
    /// Gamma: d²V/dS² (same for call and put)
    pub gamma: f64,
    /// Call theta, per year
    pub theta_call: f64,
    /// Put theta, per year
    pub theta_put: f64,
    /// Vega: dV/dσ per unit of volatility (same for call and put)
    pub vega: f64,
}

impl Greeks {
    /// Vega per 1 volatility point
    pub fn vega_per_vol_point(&self) -> f64 {
        self.vega / 100.0
    }

    /// Display labels and values, in chart order
    pub fn labelled(&self) -> [(&'static str, f64); 6] {
        [
            ("Δ (Call)", self.delta_call),
            ("Δ (Put)", self.delta_put),
            ("Θ (Call)", self.theta_call),
            ("Θ (Put)", self.theta_put),
            ("Γ", self.gamma),
            ("V", self.vega),
        ]
    }

    /// All six values are finite
    pub fn is_finite(&self) -> bool {
        self.labelled().iter().all(|(_, v)| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_order() {
        let g = Greeks {
            delta_call: 1.0,
            delta_put: 2.0,
            gamma: 3.0,
            theta_call: 4.0,
            theta_put: 5.0,
            vega: 6.0,
        };
        let values: Vec<f64> = g.labelled().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1.0, 2.0, 4.0, 5.0, 3.0, 6.0]);
        assert_eq!(g.labelled()[4].0, "Γ");
        assert!((g.vega_per_vol_point() - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_is_finite() {
        let mut g = Greeks::default();
        assert!(g.is_finite());
        g.gamma = f64::NAN;
        assert!(!g.is_finite());
    }
}
