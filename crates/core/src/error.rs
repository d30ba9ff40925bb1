//! Configuration errors raised when constructing signals.

use thiserror::Error;

/// Invalid signal configuration.
///
/// Only construction can fail; once built, a signal absorbs every data
/// condition into a "no value" result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Short moving-average window must hold at least one observation.
    #[error("short_window must be greater than zero")]
    ZeroShortWindow,

    /// Long window must be strictly longer than the short window.
    #[error("long_window ({long}) must be greater than short_window ({short})")]
    WindowOrder {
        /// Configured short window.
        short: usize,
        /// Configured long window.
        long: usize,
    },

    /// Asset symbol left blank.
    #[error("{field} must not be empty")]
    EmptySymbol {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Both legs of a pair point at the same instrument.
    #[error("asset symbols must differ, both are {0:?}")]
    IdenticalSymbols(String),

    /// Spread mean needs at least two observations to be meaningful.
    #[error("spread_lookback must be at least 2, got {0}")]
    SpreadLookbackTooShort(usize),

    /// Retained price history must hold at least one observation.
    #[error("history_capacity must be greater than zero")]
    ZeroHistoryCapacity,

    /// Predictor weights must line up with the feature vector.
    #[error("predictor expects {expected} weights, got {actual}")]
    PredictorWeights {
        /// Feature vector length.
        expected: usize,
        /// Configured weight count.
        actual: usize,
    },
}
