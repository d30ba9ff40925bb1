//! Feature extraction for the learned-model signal.
//!
//! The predictor's input contract is a fixed-length vector. A book without
//! quotes on both sides maps to all zeros so the length never changes.

use hft_alpha_core::{order_book_imbalance, OrderBookSnapshot};

/// Length of the engineered feature vector.
pub const FEATURE_COUNT: usize = 5;

/// Engineered features, in the order given by the `*_INDEX` constants.
pub type FeatureVector = [f64; FEATURE_COUNT];

pub const BEST_BID_INDEX: usize = 0;
pub const BEST_ASK_INDEX: usize = 1;
pub const MID_PRICE_INDEX: usize = 2;
pub const TOP_IMBALANCE_INDEX: usize = 3;
pub const TIMESTAMP_INDEX: usize = 4;

/// Builds `[best_bid, best_ask, mid_price, top_level_imbalance, timestamp]`.
///
/// Returns the zero vector when the book is absent or has an empty side.
#[must_use]
pub fn extract_book_features(book: Option<&OrderBookSnapshot>) -> FeatureVector {
    let Some(book) = book else {
        return [0.0; FEATURE_COUNT];
    };
    let (Some(best_bid), Some(best_ask), Some(mid)) =
        (book.best_bid(), book.best_ask(), book.mid_price())
    else {
        return [0.0; FEATURE_COUNT];
    };

    let (top_bids, top_asks) = book.top_of_book();
    let mut features = [0.0; FEATURE_COUNT];
    features[BEST_BID_INDEX] = best_bid;
    features[BEST_ASK_INDEX] = best_ask;
    features[MID_PRICE_INDEX] = mid;
    features[TOP_IMBALANCE_INDEX] = order_book_imbalance(top_bids, top_asks);
    features[TIMESTAMP_INDEX] = book.timestamp;
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_from_two_sided_book() {
        let book = OrderBookSnapshot::new(
            vec![(100.0, 7.0), (99.0, 50.0)],
            vec![(101.0, 2.0), (102.0, 50.0)],
            1234.5,
        );

        let features = extract_book_features(Some(&book));
        assert_eq!(features, [100.0, 101.0, 100.5, 5.0, 1234.5]);
    }

    #[test]
    fn top_imbalance_ignores_deeper_levels() {
        let book = OrderBookSnapshot::new(
            vec![(100.0, 1.0), (99.0, 1000.0)],
            vec![(101.0, 3.0)],
            0.0,
        );
        assert_eq!(extract_book_features(Some(&book))[TOP_IMBALANCE_INDEX], -2.0);
    }

    #[test]
    fn empty_side_yields_zero_vector() {
        let book = OrderBookSnapshot::new(vec![(100.0, 1.0)], vec![], 9.0);
        assert_eq!(extract_book_features(Some(&book)), [0.0; FEATURE_COUNT]);
    }

    #[test]
    fn absent_book_yields_zero_vector() {
        assert_eq!(extract_book_features(None), [0.0; FEATURE_COUNT]);
    }
}
