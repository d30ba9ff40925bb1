//! Order book snapshot types.
//!
//! A snapshot is an immutable view of one instrument's book at a point in time.
//! Cross-asset signals receive a [`MultiAssetSnapshot`] keyed by symbol instead,
//! and every signal is handed the two through the [`MarketData`] wrapper.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::math;

/// Order book price level, serialized as a `[price, quantity]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PriceLevel {
    /// Price at this level
    pub price: f64,
    /// Resting quantity at this level
    pub quantity: f64,
}

impl PriceLevel {
    #[must_use]
    pub const fn new(price: f64, quantity: f64) -> Self {
        Self { price, quantity }
    }
}

impl From<(f64, f64)> for PriceLevel {
    fn from((price, quantity): (f64, f64)) -> Self {
        Self { price, quantity }
    }
}

impl From<PriceLevel> for (f64, f64) {
    fn from(level: PriceLevel) -> Self {
        (level.price, level.quantity)
    }
}

/// Snapshot of a single order book.
///
/// An empty side is valid and means "no quotes". Prices and quantities are
/// expected to be non-negative; this type does not enforce it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderBookSnapshot {
    /// Bid levels (highest price first)
    #[serde(default)]
    pub bids: Vec<PriceLevel>,
    /// Ask levels (lowest price first)
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
    /// Feed timestamp, monotonically non-decreasing per feed
    #[serde(default)]
    pub timestamp: f64,
}

impl OrderBookSnapshot {
    /// Creates a snapshot from `(price, quantity)` pairs.
    #[must_use]
    pub fn new(bids: Vec<(f64, f64)>, asks: Vec<(f64, f64)>, timestamp: f64) -> Self {
        Self {
            bids: bids.into_iter().map(PriceLevel::from).collect(),
            asks: asks.into_iter().map(PriceLevel::from).collect(),
            timestamp,
        }
    }

    /// Creates a one-level book around `mid` with the given half spread.
    #[must_use]
    pub fn quoted(mid: f64, half_spread: f64, quantity: f64, timestamp: f64) -> Self {
        Self::new(
            vec![(mid - half_spread, quantity)],
            vec![(mid + half_spread, quantity)],
            timestamp,
        )
    }

    /// Returns the best bid price (highest bid).
    #[must_use]
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|l| l.price)
    }

    /// Returns the best ask price (lowest ask).
    #[must_use]
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|l| l.price)
    }

    /// Returns true when both sides carry at least one level.
    #[must_use]
    pub fn has_both_sides(&self) -> bool {
        !self.bids.is_empty() && !self.asks.is_empty()
    }

    /// Calculates the mid price, or None when either side is empty.
    #[must_use]
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(math::mid_price(bid, ask)),
            _ => None,
        }
    }

    /// Returns single-level slices holding only the best bid and best ask.
    ///
    /// Either slice is empty when that side has no quotes.
    #[must_use]
    pub fn top_of_book(&self) -> (&[PriceLevel], &[PriceLevel]) {
        (
            &self.bids[..self.bids.len().min(1)],
            &self.asks[..self.asks.len().min(1)],
        )
    }

    /// Full-depth imbalance: total bid quantity minus total ask quantity.
    #[must_use]
    pub fn imbalance(&self) -> f64 {
        math::order_book_imbalance(&self.bids, &self.asks)
    }
}

/// Order books for several instruments keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiAssetSnapshot {
    books: BTreeMap<String, OrderBookSnapshot>,
}

impl MultiAssetSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a book for `symbol`, replacing any existing one.
    #[must_use]
    pub fn with_book(mut self, symbol: impl Into<String>, book: OrderBookSnapshot) -> Self {
        self.insert(symbol, book);
        self
    }

    pub fn insert(&mut self, symbol: impl Into<String>, book: OrderBookSnapshot) {
        self.books.insert(symbol.into(), book);
    }

    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&OrderBookSnapshot> {
        self.books.get(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<(String, OrderBookSnapshot)> for MultiAssetSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, OrderBookSnapshot)>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

/// Market input handed to every signal on each tick.
///
/// Deserializes untagged: an object with `bids`/`asks`/`timestamp` keys is a
/// single book, any other object is read as a symbol -> book map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarketData {
    /// A single instrument's book
    Book(OrderBookSnapshot),
    /// Books for several instruments
    Assets(MultiAssetSnapshot),
}

impl MarketData {
    /// Returns the single book, if this is a single-book frame.
    #[must_use]
    pub fn book(&self) -> Option<&OrderBookSnapshot> {
        match self {
            Self::Book(book) => Some(book),
            Self::Assets(_) => None,
        }
    }

    /// Looks up a symbol's book in a multi-asset frame.
    #[must_use]
    pub fn asset(&self, symbol: &str) -> Option<&OrderBookSnapshot> {
        match self {
            Self::Book(_) => None,
            Self::Assets(assets) => assets.get(symbol),
        }
    }

    /// Bid levels of a single-book frame, empty otherwise.
    #[must_use]
    pub fn bids(&self) -> &[PriceLevel] {
        match self.book() {
            Some(book) => &book.bids,
            None => &[],
        }
    }

    /// Ask levels of a single-book frame, empty otherwise.
    #[must_use]
    pub fn asks(&self) -> &[PriceLevel] {
        match self.book() {
            Some(book) => &book.asks,
            None => &[],
        }
    }

    /// Timestamp of a single-book frame, or the latest timestamp across assets.
    ///
    /// Registry readings carry this stamp. Pair signals keep their own
    /// per-observation stamp from the first leg, so the two can differ.
    #[must_use]
    pub fn timestamp(&self) -> Option<f64> {
        match self {
            Self::Book(book) => Some(book.timestamp),
            Self::Assets(assets) => assets
                .books
                .values()
                .map(|b| b.timestamp)
                .reduce(f64::max),
        }
    }
}

impl From<OrderBookSnapshot> for MarketData {
    fn from(book: OrderBookSnapshot) -> Self {
        Self::Book(book)
    }
}

impl From<MultiAssetSnapshot> for MarketData {
    fn from(assets: MultiAssetSnapshot) -> Self {
        Self::Assets(assets)
    }
}
