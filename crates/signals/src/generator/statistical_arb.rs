//! Statistical arbitrage signal generator.
//!
//! Tracks the spread `mid(asset1) - mid(asset2)` between two instruments and
//! reports how far the current spread sits from its mean:
//! `mean_spread - spread`. Positive means the spread is below its mean, i.e.
//! asset 1 is cheap relative to asset 2; negative means it is rich.

use hft_alpha_core::{
    AlphaSignal, ConfigError, MarketData, RollingWindow, SignalValue, StatArbConfig,
};

/// One paired observation of both legs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairObservation {
    pub price1: f64,
    pub price2: f64,
    /// Timestamp of the asset-1 book. The frame-level stamp on a registry
    /// reading is the latest across all assets and may differ.
    pub timestamp: f64,
}

impl PairObservation {
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.price1 - self.price2
    }
}

/// Mean of recorded spreads, either over the full history or a trailing window.
///
/// The cumulative form is the incremental update `mean += (x - mean) / n`,
/// equal to the arithmetic mean up to floating-point rounding.
#[derive(Debug, Clone)]
enum SpreadMean {
    /// Incremental mean over every observation, constant memory
    Cumulative { mean: f64 },
    /// Mean of the last `capacity` spreads
    Windowed(RollingWindow<f64>),
}

impl SpreadMean {
    fn record(&mut self, spread: f64, observations: u64) {
        match self {
            Self::Cumulative { mean } => *mean += (spread - *mean) / observations as f64,
            Self::Windowed(window) => {
                window.push(spread);
            }
        }
    }

    fn value(&self) -> Option<f64> {
        match self {
            Self::Cumulative { mean } => Some(*mean),
            Self::Windowed(window) => window.mean(),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Cumulative { mean } => *mean = 0.0,
            Self::Windowed(window) => window.clear(),
        }
    }
}

/// Signal generator for mean reversion of a two-asset spread.
///
/// Consumes multi-asset frames. A missing symbol or an empty book side on
/// either leg yields no value and leaves state untouched.
#[derive(Debug, Clone)]
pub struct StatisticalArbSignal {
    config: StatArbConfig,
    history: RollingWindow<PairObservation>,
    spread_mean: SpreadMean,
    observations: u64,
}

impl Default for StatisticalArbSignal {
    fn default() -> Self {
        let config = StatArbConfig::default();
        Self {
            history: RollingWindow::new(config.history_capacity),
            spread_mean: SpreadMean::Cumulative { mean: 0.0 },
            observations: 0,
            config,
        }
    }
}

impl StatisticalArbSignal {
    /// Creates a signal over the full spread history for the given pair.
    ///
    /// # Errors
    /// Returns an error if a symbol is empty or both symbols are the same.
    pub fn new(
        asset1_symbol: impl Into<String>,
        asset2_symbol: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::from_config(StatArbConfig::new(asset1_symbol, asset2_symbol))
    }

    /// Creates a signal from configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: StatArbConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spread_mean = match config.spread_lookback {
            Some(lookback) => SpreadMean::Windowed(RollingWindow::new(lookback)),
            None => SpreadMean::Cumulative { mean: 0.0 },
        };
        Ok(Self {
            history: RollingWindow::new(config.history_capacity),
            spread_mean,
            observations: 0,
            config,
        })
    }

    #[must_use]
    pub fn asset1_symbol(&self) -> &str {
        &self.config.asset1_symbol
    }

    #[must_use]
    pub fn asset2_symbol(&self) -> &str {
        &self.config.asset2_symbol
    }

    /// Total paired observations recorded since construction or reset.
    #[must_use]
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// Current spread mean, None before the first observation.
    #[must_use]
    pub fn spread_mean(&self) -> Option<f64> {
        if self.observations == 0 {
            None
        } else {
            self.spread_mean.value()
        }
    }

    /// Retained paired observations, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &PairObservation> {
        self.history.iter()
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.spread_mean.clear();
        self.observations = 0;
    }

    fn leg_prices(&self, data: &MarketData) -> Option<PairObservation> {
        let leg1 = data.asset(&self.config.asset1_symbol)?;
        let leg2 = data.asset(&self.config.asset2_symbol)?;
        Some(PairObservation {
            price1: leg1.mid_price()?,
            price2: leg2.mid_price()?,
            timestamp: leg1.timestamp,
        })
    }
}

impl AlphaSignal for StatisticalArbSignal {
    fn generate_signal(&mut self, data: &MarketData) -> SignalValue {
        let Some(observation) = self.leg_prices(data) else {
            tracing::debug!(
                asset1 = %self.config.asset1_symbol,
                asset2 = %self.config.asset2_symbol,
                "Missing asset or empty book side, statistical_arb has no value"
            );
            return None;
        };

        let spread = observation.spread();
        self.history.push(observation);
        self.observations += 1;
        self.spread_mean.record(spread, self.observations);

        if self.observations < 2 {
            tracing::debug!("Single observation, statistical_arb warming up");
            return None;
        }

        let mean_spread = self.spread_mean.value()?;
        let deviation = mean_spread - spread;

        tracing::trace!(spread, mean_spread, deviation, "statistical_arb computed");
        Some(deviation)
    }

    fn name(&self) -> &str {
        "statistical_arb"
    }
}
