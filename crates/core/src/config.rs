//! Per-signal configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration: the set of signals to build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaConfig {
    #[serde(default)]
    pub signals: Vec<SignalSpec>,
}

impl Default for AlphaConfig {
    fn default() -> Self {
        Self {
            signals: vec![
                SignalSpec::new(SignalKind::Imbalance),
                SignalSpec::new(SignalKind::Momentum(MomentumConfig::default())),
                SignalSpec::new(SignalKind::StatisticalArb(StatArbConfig::default())),
                SignalSpec::new(SignalKind::LearnedModel(LearnedModelConfig::default())),
            ],
        }
    }
}

/// One configured signal instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSpec {
    /// Registry name override; the variant name is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: SignalKind,
}

impl SignalSpec {
    #[must_use]
    pub fn new(kind: SignalKind) -> Self {
        Self { name: None, kind }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Signal variant and its settings, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalKind {
    Imbalance,
    Momentum(MomentumConfig),
    StatisticalArb(StatArbConfig),
    LearnedModel(LearnedModelConfig),
}

/// Moving-average crossover windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumConfig {
    pub short_window: usize,
    pub long_window: usize,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            short_window: 5,
            long_window: 20,
        }
    }
}

impl MomentumConfig {
    /// Checks `0 < short_window < long_window`.
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_window == 0 {
            return Err(ConfigError::ZeroShortWindow);
        }
        if self.long_window <= self.short_window {
            return Err(ConfigError::WindowOrder {
                short: self.short_window,
                long: self.long_window,
            });
        }
        Ok(())
    }
}

/// Pair spread settings for the statistical arbitrage signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatArbConfig {
    pub asset1_symbol: String,
    pub asset2_symbol: String,
    /// Number of recent spreads averaged; `None` averages the full history
    pub spread_lookback: Option<usize>,
    /// Price observations retained for inspection
    pub history_capacity: usize,
}

impl Default for StatArbConfig {
    fn default() -> Self {
        Self {
            asset1_symbol: "AAPL".to_string(),
            asset2_symbol: "MSFT".to_string(),
            spread_lookback: None,
            history_capacity: 1024,
        }
    }
}

impl StatArbConfig {
    #[must_use]
    pub fn new(asset1_symbol: impl Into<String>, asset2_symbol: impl Into<String>) -> Self {
        Self {
            asset1_symbol: asset1_symbol.into(),
            asset2_symbol: asset2_symbol.into(),
            ..Self::default()
        }
    }

    /// Caps the spread mean to the last `lookback` observations.
    #[must_use]
    pub fn with_spread_lookback(mut self, lookback: usize) -> Self {
        self.spread_lookback = Some(lookback);
        self
    }

    /// Checks symbols are present and distinct and windows are usable.
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.asset1_symbol.trim().is_empty() {
            return Err(ConfigError::EmptySymbol {
                field: "asset1_symbol",
            });
        }
        if self.asset2_symbol.trim().is_empty() {
            return Err(ConfigError::EmptySymbol {
                field: "asset2_symbol",
            });
        }
        if self.asset1_symbol == self.asset2_symbol {
            return Err(ConfigError::IdenticalSymbols(self.asset1_symbol.clone()));
        }
        if let Some(lookback) = self.spread_lookback {
            if lookback < 2 {
                return Err(ConfigError::SpreadLookbackTooShort(lookback));
            }
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        Ok(())
    }
}

/// Learned-model signal settings. No predictor means the signal never fires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnedModelConfig {
    pub predictor: Option<LinearPredictorConfig>,
}

/// Weights for a linear predictor over the engineered feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearPredictorConfig {
    pub weights: Vec<f64>,
    #[serde(default)]
    pub bias: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================
    // MomentumConfig Tests
    // ============================================

    #[test]
    fn momentum_defaults_are_5_and_20() {
        let config = MomentumConfig::default();
        assert_eq!(config.short_window, 5);
        assert_eq!(config.long_window, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn momentum_rejects_zero_short_window() {
        let config = MomentumConfig {
            short_window: 0,
            long_window: 3,
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroShortWindow));
    }

    #[test]
    fn momentum_rejects_long_not_above_short() {
        let config = MomentumConfig {
            short_window: 4,
            long_window: 4,
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::WindowOrder { short: 4, long: 4 });
        assert!(err.to_string().contains("long_window (4)"));
    }

    // ============================================
    // StatArbConfig Tests
    // ============================================

    #[test]
    fn stat_arb_defaults_preserve_full_history_mean() {
        let config = StatArbConfig::default();
        assert_eq!(config.asset1_symbol, "AAPL");
        assert_eq!(config.asset2_symbol, "MSFT");
        assert!(config.spread_lookback.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stat_arb_rejects_identical_symbols() {
        let config = StatArbConfig::new("BTC", "BTC");
        assert_eq!(
            config.validate(),
            Err(ConfigError::IdenticalSymbols("BTC".to_string()))
        );
    }

    #[test]
    fn stat_arb_rejects_blank_symbol() {
        let config = StatArbConfig::new("  ", "ETH");
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptySymbol {
                field: "asset1_symbol"
            })
        );
    }

    #[test]
    fn stat_arb_rejects_short_lookback() {
        let config = StatArbConfig::new("BTC", "ETH").with_spread_lookback(1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpreadLookbackTooShort(1))
        );
    }

    #[test]
    fn stat_arb_rejects_zero_history() {
        let config = StatArbConfig {
            history_capacity: 0,
            ..StatArbConfig::new("BTC", "ETH")
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHistoryCapacity));
    }

    // ============================================
    // Deserialization Tests
    // ============================================

    #[test]
    fn signal_specs_deserialize_by_kind() {
        let json = r#"{
            "signals": [
                {"kind": "imbalance"},
                {"kind": "momentum", "short_window": 2, "long_window": 4},
                {"kind": "statistical_arb", "name": "btc_eth", "asset1_symbol": "BTC", "asset2_symbol": "ETH"},
                {"kind": "learned_model", "predictor": {"weights": [0, 0, 1, 0, 0]}}
            ]
        }"#;
        let config: AlphaConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.signals.len(), 4);
        assert_eq!(config.signals[0].kind, SignalKind::Imbalance);
        assert_eq!(
            config.signals[1].kind,
            SignalKind::Momentum(MomentumConfig {
                short_window: 2,
                long_window: 4
            })
        );
        assert_eq!(config.signals[2].name.as_deref(), Some("btc_eth"));
        match &config.signals[3].kind {
            SignalKind::LearnedModel(cfg) => {
                let predictor = cfg.predictor.as_ref().unwrap();
                assert_eq!(predictor.weights.len(), 5);
                assert!(predictor.bias.abs() < f64::EPSILON);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn momentum_spec_without_fields_uses_defaults() {
        let spec: SignalSpec = serde_json::from_str(r#"{"kind": "momentum"}"#).unwrap();
        assert_eq!(spec.kind, SignalKind::Momentum(MomentumConfig::default()));
        assert!(spec.name.is_none());
    }

    #[test]
    fn default_config_builds_every_variant() {
        assert_eq!(AlphaConfig::default().signals.len(), 4);
    }
}
