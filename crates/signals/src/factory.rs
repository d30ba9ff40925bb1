//! Builds signal instances from configuration.

use hft_alpha_core::{AlphaSignal, ConfigError, SignalKind, SignalSpec};

use crate::generator::{
    BasicImbalanceSignal, LearnedModelSignal, MomentumSignal, StatisticalArbSignal,
};

/// Constructs the signal described by `spec`.
///
/// # Errors
/// Returns an error if the variant's configuration fails validation.
pub fn build_signal(spec: &SignalSpec) -> Result<Box<dyn AlphaSignal>, ConfigError> {
    let signal: Box<dyn AlphaSignal> = match &spec.kind {
        SignalKind::Imbalance => Box::new(BasicImbalanceSignal::new()),
        SignalKind::Momentum(config) => Box::new(MomentumSignal::from_config(*config)?),
        SignalKind::StatisticalArb(config) => {
            Box::new(StatisticalArbSignal::from_config(config.clone())?)
        }
        SignalKind::LearnedModel(config) => Box::new(LearnedModelSignal::from_config(config)?),
    };
    Ok(signal)
}

/// Name a spec registers under: the override if given, else the variant name.
#[must_use]
pub fn registered_name<'a>(spec: &'a SignalSpec, signal: &'a dyn AlphaSignal) -> &'a str {
    spec.name.as_deref().unwrap_or_else(|| signal.name())
}
