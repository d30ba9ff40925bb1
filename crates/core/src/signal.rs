//! Alpha signal contract.
//!
//! Every strategy consumes a [`MarketData`] frame and emits a single optional
//! scalar expressing directional pressure: positive for upward pressure,
//! negative for downward. Interpreting the value is left to the consumer.

use serde::{Deserialize, Serialize};

use crate::book::MarketData;

/// Optional alpha value.
///
/// `None` means "no signal available" (missing quotes, warm-up, unconfigured
/// dependency) and is distinct from `Some(0.0)`, a computed neutral reading.
pub type SignalValue = Option<f64>;

/// Trait implemented by every alpha signal variant.
///
/// `generate_signal` never mutates the frame but may advance internal rolling
/// state. For stateful variants it is therefore not idempotent: feeding the
/// same frame twice records it twice. An instance must not be driven from two
/// threads at once; the `Send` bound lets each instance live on its own thread.
pub trait AlphaSignal: Send {
    /// Computes the signal for the given frame.
    fn generate_signal(&mut self, data: &MarketData) -> SignalValue;

    /// Stable identifier of this signal variant, used for logging and attribution.
    fn name(&self) -> &str;
}

/// One signal's output for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaReading {
    /// Registered name of the signal
    pub signal: String,
    /// Computed value, `None` when no signal was available
    pub value: SignalValue,
    /// Timestamp of the frame the value was computed from
    pub timestamp: Option<f64>,
}

impl AlphaReading {
    #[must_use]
    pub fn new(signal: impl Into<String>, value: SignalValue, timestamp: Option<f64>) -> Self {
        Self {
            signal: signal.into(),
            value,
            timestamp,
        }
    }

    /// Returns true when the signal produced a value.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::OrderBookSnapshot;

    // ============================================
    // Mock AlphaSignal for Testing
    // ============================================

    struct CountingSignal {
        calls: usize,
    }

    impl AlphaSignal for CountingSignal {
        fn generate_signal(&mut self, _data: &MarketData) -> SignalValue {
            self.calls += 1;
            Some(self.calls as f64)
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn trait_objects_are_callable() {
        let mut signals: Vec<Box<dyn AlphaSignal>> = vec![Box::new(CountingSignal { calls: 0 })];
        let data = MarketData::from(OrderBookSnapshot::default());

        assert_eq!(signals[0].generate_signal(&data), Some(1.0));
        assert_eq!(signals[0].generate_signal(&data), Some(2.0));
        assert_eq!(signals[0].name(), "counting");
    }

    #[test]
    fn reading_serializes_absent_value_as_null() {
        let reading = AlphaReading::new("momentum", None, Some(1.5));
        let json = serde_json::to_string(&reading).unwrap();

        assert_eq!(json, r#"{"signal":"momentum","value":null,"timestamp":1.5}"#);
        assert!(!reading.is_available());
    }

    #[test]
    fn reading_distinguishes_zero_from_absent() {
        let zero = AlphaReading::new("basic_imbalance", Some(0.0), None);
        assert!(zero.is_available());
        assert_ne!(zero, AlphaReading::new("basic_imbalance", None, None));
    }
}
