pub mod book;
pub mod config;
pub mod config_loader;
pub mod error;
pub mod math;
pub mod rolling;
pub mod signal;

pub use book::{MarketData, MultiAssetSnapshot, OrderBookSnapshot, PriceLevel};
pub use config::{
    AlphaConfig, LearnedModelConfig, LinearPredictorConfig, MomentumConfig, SignalKind,
    SignalSpec, StatArbConfig,
};
pub use config_loader::ConfigLoader;
pub use error::ConfigError;
pub use math::{mean, mid_price, order_book_imbalance, vwap};
pub use rolling::RollingWindow;
pub use signal::{AlphaReading, AlphaSignal, SignalValue};
