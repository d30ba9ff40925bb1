//! Alpha signal generators.
//!
//! Each generator implements [`hft_alpha_core::AlphaSignal`]. Stateful
//! generators own their rolling windows exclusively.

mod imbalance;
mod learned_model;
mod momentum;
mod statistical_arb;

pub use imbalance::BasicImbalanceSignal;
pub use learned_model::LearnedModelSignal;
pub use momentum::{MomentumSignal, PricePoint};
pub use statistical_arb::{PairObservation, StatisticalArbSignal};
