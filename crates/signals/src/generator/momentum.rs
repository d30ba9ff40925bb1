//! Momentum signal generator.
//!
//! Moving-average crossover over book mid prices: the mean of the most recent
//! `short_window` mids minus the mean of the last `long_window` mids. Positive
//! values mean recent prices sit above the longer baseline (upward momentum).

use hft_alpha_core::{
    AlphaSignal, ConfigError, MarketData, MomentumConfig, RollingWindow, SignalValue,
};

/// A recorded mid price and the timestamp of the book it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub price: f64,
    pub timestamp: f64,
}

impl From<PricePoint> for f64 {
    fn from(point: PricePoint) -> Self {
        point.price
    }
}

/// Signal generator based on a short/long moving-average crossover.
///
/// Holds at most `long_window` observations; the oldest is evicted first.
/// Every call with a two-sided book advances the window, so calling twice with
/// the same frame records that mid price twice.
#[derive(Debug, Clone)]
pub struct MomentumSignal {
    config: MomentumConfig,
    window: RollingWindow<PricePoint>,
}

impl Default for MomentumSignal {
    fn default() -> Self {
        let config = MomentumConfig::default();
        Self {
            window: RollingWindow::new(config.long_window),
            config,
        }
    }
}

impl MomentumSignal {
    /// Creates a new `MomentumSignal`.
    ///
    /// # Errors
    /// Returns an error unless `0 < short_window < long_window`.
    pub fn new(short_window: usize, long_window: usize) -> Result<Self, ConfigError> {
        Self::from_config(MomentumConfig {
            short_window,
            long_window,
        })
    }

    /// Creates a new `MomentumSignal` from configuration.
    ///
    /// # Errors
    /// Returns an error unless `0 < short_window < long_window`.
    pub fn from_config(config: MomentumConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            window: RollingWindow::new(config.long_window),
            config,
        })
    }

    #[must_use]
    pub fn short_window(&self) -> usize {
        self.config.short_window
    }

    #[must_use]
    pub fn long_window(&self) -> usize {
        self.config.long_window
    }

    /// Number of mid prices currently held.
    #[must_use]
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Recorded observations, oldest first.
    pub fn observations(&self) -> impl Iterator<Item = &PricePoint> {
        self.window.iter()
    }

    /// Returns true once `long_window` observations have been recorded.
    #[must_use]
    pub fn is_warmed_up(&self) -> bool {
        self.window.is_full()
    }

    /// Drops all recorded prices, restarting warm-up.
    pub fn reset(&mut self) {
        self.window.clear();
    }
}

impl AlphaSignal for MomentumSignal {
    fn generate_signal(&mut self, data: &MarketData) -> SignalValue {
        let Some((price, timestamp)) = data
            .book()
            .and_then(|book| book.mid_price().map(|mid| (mid, book.timestamp)))
        else {
            tracing::debug!("No two-sided book, momentum has no value");
            return None;
        };

        self.window.push(PricePoint { price, timestamp });

        if !self.window.is_full() {
            tracing::debug!(
                observations = self.window.len(),
                required = self.config.long_window,
                "Momentum warming up"
            );
            return None;
        }

        let short_ma = self.window.mean_of_last(self.config.short_window)?;
        let long_ma = self.window.mean()?;
        let momentum = short_ma - long_ma;

        tracing::trace!(short_ma, long_ma, momentum, "momentum computed");
        Some(momentum)
    }

    fn name(&self) -> &str {
        "momentum"
    }
}
