//! Configuration for the pricing dashboard

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{MarketInputs, PricingError, PricingResult};

/// Dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Values the input fields start from
    pub defaults: MarketInputs,
    /// Increment per click on each input field
    pub steps: InputSteps,
    /// Price sweep behind the P&L heatmap
    pub sweep: SweepConfig,
}

impl DashboardConfig {
    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> PricingResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;

        let config: DashboardConfig = serde_json::from_str(&json)
            .map_err(|e| PricingError::serialization(e.to_string()))?;
        config.validate()?;

        tracing::info!("Loaded dashboard config from {:?}", path);
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> PricingResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PricingError::serialization(e.to_string()))?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    pub fn validate(&self) -> PricingResult<()> {
        self.defaults.validate()?;
        self.steps.validate()?;
        self.sweep.validate()
    }
}

/// Step granularity of each input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSteps {
    pub spot: f64,
    pub strike: f64,
    pub time: f64,
    pub rate: f64,
    pub vol: f64,
}

impl Default for InputSteps {
    fn default() -> Self {
        Self {
            spot: 0.10,
            strike: 0.10,
            time: 0.10,
            rate: 0.01,
            vol: 0.01,
        }
    }
}

impl InputSteps {
    pub fn validate(&self) -> PricingResult<()> {
        let steps = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time", self.time),
            ("rate", self.rate),
            ("vol", self.vol),
        ];
        match steps.iter().find(|(_, s)| !(s.is_finite() && *s > 0.0)) {
            Some((name, s)) => Err(PricingError::invalid_input(format!(
                "Step for {} must be positive, got {}",
                name, s
            ))),
            None => Ok(()),
        }
    }
}

/// P&L sweep: `samples` prices from `lower * spot` to `upper * spot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Lower bound as a multiple of spot
    /// Default: 0.5
    pub lower: f64,

    /// Upper bound as a multiple of spot
    /// Default: 1.5
    pub upper: f64,

    /// Number of prices, endpoints included
    /// Default: 18
    pub samples: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            lower: 0.5,
            upper: 1.5,
            samples: 18,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> PricingResult<()> {
        if self.samples < 2 {
            return Err(PricingError::invalid_input(format!(
                "Sweep needs at least 2 samples, got {}",
                self.samples
            )));
        }
        if !(self.lower.is_finite() && self.lower > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "Sweep lower bound must be positive, got {}",
                self.lower
            )));
        }
        if !(self.upper.is_finite() && self.upper > self.lower) {
            return Err(PricingError::invalid_input(format!(
                "Sweep upper bound {} must exceed lower bound {}",
                self.upper, self.lower
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.defaults, MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2));
        assert_eq!(config.steps.spot, 0.10);
        assert_eq!(config.steps.vol, 0.01);
        assert_eq!(config.sweep.samples, 18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard.json");

        let mut config = DashboardConfig::default();
        config.sweep.samples = 25;
        config.defaults.vol = 0.35;
        config.save(&path).unwrap();

        let loaded = DashboardConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "sweep": { "samples": 40 } }"#).unwrap();

        let loaded = DashboardConfig::from_file(&path).unwrap();
        assert_eq!(loaded.sweep.samples, 40);
        assert_eq!(loaded.sweep.lower, 0.5);
        assert_eq!(loaded.defaults, MarketInputs::default());
    }

    #[test]
    fn test_bad_files() {
        let dir = tempdir().unwrap();

        let missing = DashboardConfig::from_file(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(PricingError::IO(_))));

        let garbled = dir.path().join("garbled.json");
        std::fs::write(&garbled, "{ not json").unwrap();
        assert!(matches!(
            DashboardConfig::from_file(&garbled),
            Err(PricingError::Serialization(_))
        ));

        let invalid = dir.path().join("invalid.json");
        std::fs::write(&invalid, r#"{ "sweep": { "lower": 1.5, "upper": 0.5 } }"#).unwrap();
        assert!(matches!(
            DashboardConfig::from_file(&invalid),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sweep_validation() {
        let one = SweepConfig {
            samples: 1,
            ..Default::default()
        };
        assert!(one.validate().is_err());

        let zero_lower = SweepConfig {
            lower: 0.0,
            ..Default::default()
        };
        assert!(zero_lower.validate().is_err());

        let steps = InputSteps {
            rate: 0.0,
            ..Default::default()
        };
        assert!(steps.validate().is_err());
    }
}
