//! Order book imbalance signal generator.
//!
//! Net quantity skew between the bid and ask sides. More resting bid quantity
//! than ask quantity reads as upward pressure.

use hft_alpha_core::{order_book_imbalance, AlphaSignal, MarketData, SignalValue};

/// Stateless signal returning total bid quantity minus total ask quantity.
///
/// Uses every level in the frame. A frame without a single book reads as a book
/// with no quotes, so the result is 0.0 rather than "no value".
#[derive(Debug, Clone, Default)]
pub struct BasicImbalanceSignal;

impl BasicImbalanceSignal {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AlphaSignal for BasicImbalanceSignal {
    fn generate_signal(&mut self, data: &MarketData) -> SignalValue {
        let imbalance = order_book_imbalance(data.bids(), data.asks());
        tracing::trace!(imbalance, "basic_imbalance computed");
        Some(imbalance)
    }

    fn name(&self) -> &str {
        "basic_imbalance"
    }
}
