//! Predictor capability consumed by the learned-model signal.
//!
//! Loading or training a model is out of scope here: anything that maps a
//! feature vector to a scalar can be attached.

use hft_alpha_core::{ConfigError, LinearPredictorConfig};

use crate::features::{FeatureVector, FEATURE_COUNT};

/// Maps an engineered feature vector to a scalar prediction.
pub trait Predictor: Send {
    fn predict(&self, features: &[f64]) -> f64;
}

impl<F> Predictor for F
where
    F: Fn(&[f64]) -> f64 + Send,
{
    fn predict(&self, features: &[f64]) -> f64 {
        self(features)
    }
}

/// Dot product of fixed weights with the features, plus a bias.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPredictor {
    weights: FeatureVector,
    bias: f64,
}

impl LinearPredictor {
    #[must_use]
    pub fn new(weights: FeatureVector, bias: f64) -> Self {
        Self { weights, bias }
    }

    #[must_use]
    pub fn weights(&self) -> &FeatureVector {
        &self.weights
    }

    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }
}

impl Predictor for LinearPredictor {
    fn predict(&self, features: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias
    }
}

impl TryFrom<&LinearPredictorConfig> for LinearPredictor {
    type Error = ConfigError;

    fn try_from(config: &LinearPredictorConfig) -> Result<Self, Self::Error> {
        let weights: FeatureVector = config.weights.as_slice().try_into().map_err(|_| {
            ConfigError::PredictorWeights {
                expected: FEATURE_COUNT,
                actual: config.weights.len(),
            }
        })?;
        Ok(Self::new(weights, config.bias))
    }
}
