pub mod factory;
pub mod features;
pub mod generator;
pub mod predictor;
pub mod registry;

// Re-export signal generators for convenience
pub use generator::{
    BasicImbalanceSignal, LearnedModelSignal, MomentumSignal, PairObservation, PricePoint,
    StatisticalArbSignal,
};

pub use factory::build_signal;
pub use features::{extract_book_features, FeatureVector, FEATURE_COUNT};
pub use predictor::{LinearPredictor, Predictor};
pub use registry::SignalRegistry;
