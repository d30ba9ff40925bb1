//! Learned-model signal generator.
//!
//! Feeds engineered book features to an attached [`Predictor`] and returns its
//! output unchanged. Without a predictor the signal never fires.

use hft_alpha_core::{AlphaSignal, ConfigError, LearnedModelConfig, MarketData, SignalValue};

use crate::features::{extract_book_features, FeatureVector};
use crate::predictor::{LinearPredictor, Predictor};

/// Signal generator backed by an optional external predictor.
#[derive(Default)]
pub struct LearnedModelSignal {
    predictor: Option<Box<dyn Predictor>>,
}

impl LearnedModelSignal {
    /// Creates a signal with no predictor attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a signal from configuration.
    ///
    /// # Errors
    /// Returns an error if the configured predictor weights do not match the
    /// feature vector length.
    pub fn from_config(config: &LearnedModelConfig) -> Result<Self, ConfigError> {
        let mut signal = Self::new();
        if let Some(predictor) = &config.predictor {
            signal.set_predictor(LinearPredictor::try_from(predictor)?);
        }
        Ok(signal)
    }

    /// Attaches a predictor.
    #[must_use]
    pub fn with_predictor(mut self, predictor: impl Predictor + 'static) -> Self {
        self.set_predictor(predictor);
        self
    }

    pub fn set_predictor(&mut self, predictor: impl Predictor + 'static) {
        self.predictor = Some(Box::new(predictor));
    }

    /// Detaches the predictor, returning it if one was attached.
    pub fn take_predictor(&mut self) -> Option<Box<dyn Predictor>> {
        self.predictor.take()
    }

    #[must_use]
    pub fn has_predictor(&self) -> bool {
        self.predictor.is_some()
    }

    /// Features the predictor would receive for this frame.
    #[must_use]
    pub fn features(&self, data: &MarketData) -> FeatureVector {
        extract_book_features(data.book())
    }
}

impl AlphaSignal for LearnedModelSignal {
    fn generate_signal(&mut self, data: &MarketData) -> SignalValue {
        let Some(predictor) = &self.predictor else {
            tracing::debug!("No predictor attached, ml_alpha has no value");
            return None;
        };

        let features = extract_book_features(data.book());
        let prediction = predictor.predict(&features);

        tracing::trace!(?features, prediction, "ml_alpha computed");
        Some(prediction)
    }

    fn name(&self) -> &str {
        "ml_alpha"
    }
}

impl std::fmt::Debug for LearnedModelSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LearnedModelSignal")
            .field("has_predictor", &self.has_predictor())
            .finish()
    }
}
