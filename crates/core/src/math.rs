//! Stateless numeric primitives over raw price/quantity data.

use crate::book::PriceLevel;

/// Arithmetic mean of the best bid and best ask.
///
/// Ordering is the caller's responsibility: a crossed book (`best_bid > best_ask`)
/// is not detected here.
#[must_use]
pub fn mid_price(best_bid: f64, best_ask: f64) -> f64 {
    (best_bid + best_ask) / 2.0
}

/// Total bid quantity minus total ask quantity across every supplied level.
///
/// Depth is chosen by the caller: pass single-level slices for a top-of-book
/// imbalance. Returns 0.0 when either side is empty.
#[must_use]
pub fn order_book_imbalance(bids: &[PriceLevel], asks: &[PriceLevel]) -> f64 {
    if bids.is_empty() || asks.is_empty() {
        return 0.0;
    }

    let bid_qty: f64 = bids.iter().map(|l| l.quantity).sum();
    let ask_qty: f64 = asks.iter().map(|l| l.quantity).sum();
    bid_qty - ask_qty
}

/// Volume-weighted average price: `sum(price * volume) / sum(volume)`.
///
/// Returns None when the sequences are empty, differ in length, or carry no
/// volume at all.
#[must_use]
pub fn vwap(prices: &[f64], volumes: &[f64]) -> Option<f64> {
    if prices.is_empty() || volumes.is_empty() || prices.len() != volumes.len() {
        return None;
    }

    let total_volume: f64 = volumes.iter().sum();
    if total_volume == 0.0 {
        return None;
    }

    let notional: f64 = prices.iter().zip(volumes).map(|(p, v)| p * v).sum();
    Some(notional / total_volume)
}

/// Arithmetic mean, or None for an empty input.
#[must_use]
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
