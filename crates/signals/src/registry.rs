//! Signal registry for managing multiple alpha signals.
//!
//! The registry holds a collection of signals and evaluates every one of them
//! against each incoming frame. Signals are independent: no signal sees
//! another's output.

use anyhow::Result;
use hft_alpha_core::{
    AlphaConfig, AlphaReading, AlphaSignal, ConfigError, MarketData, SignalValue,
};

use crate::factory::{build_signal, registered_name};

/// Registry for managing alpha signals.
///
/// Signals are evaluated in registration order, so readings come back in a
/// stable order for the same configuration.
pub struct SignalRegistry {
    signals: Vec<(String, Box<dyn AlphaSignal>)>,
}

impl Default for SignalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalRegistry {
    /// Creates a new empty signal registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
        }
    }

    /// Builds every signal in the configuration.
    ///
    /// # Errors
    /// Returns the first configuration error encountered.
    pub fn from_config(config: &AlphaConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for spec in &config.signals {
            let signal = build_signal(spec)?;
            let name = registered_name(spec, signal.as_ref()).to_string();
            registry.register_with_name(signal, &name);
        }

        tracing::info!(signals = ?registry.names(), "Signal registry built");
        Ok(registry)
    }

    /// Registers a signal under its own name.
    ///
    /// If a signal with the same name already exists, it will be replaced.
    pub fn register(&mut self, signal: Box<dyn AlphaSignal>) {
        let name = signal.name().to_string();
        self.register_with_name(signal, &name);
    }

    /// Registers a signal with a custom name.
    ///
    /// Allows several configured instances of one variant, e.g. two momentum
    /// signals with different windows.
    pub fn register_with_name(&mut self, signal: Box<dyn AlphaSignal>, name: &str) {
        match self.signals.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => {
                tracing::warn!(signal = %name, "Replacing registered signal");
                entry.1 = signal;
            }
            None => self.signals.push((name.to_string(), signal)),
        }
    }

    /// Returns a reference to a signal by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn AlphaSignal> {
        self.signals
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.as_ref())
    }

    /// Returns a mutable reference to a boxed signal by name.
    #[must_use]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn AlphaSignal>> {
        self.signals
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.signals.iter().any(|(n, _)| n == name)
    }

    /// Returns registered names in evaluation order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.signals.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Removes a signal by name, returning it if found.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn AlphaSignal>> {
        let idx = self.signals.iter().position(|(n, _)| n == name)?;
        Some(self.signals.remove(idx).1)
    }

    pub fn clear(&mut self) {
        self.signals.clear();
    }

    /// Evaluates every signal against the frame.
    ///
    /// Each signal produces exactly one reading; a signal with nothing to say
    /// this tick yields a reading whose value is `None`.
    pub fn evaluate_all(&mut self, data: &MarketData) -> Vec<AlphaReading> {
        let timestamp = data.timestamp();
        self.signals
            .iter_mut()
            .map(|(name, signal)| {
                let value = signal.generate_signal(data);
                tracing::debug!(signal = %name, ?value, "Signal evaluated");
                AlphaReading::new(name.clone(), value, timestamp)
            })
            .collect()
    }

    /// Evaluates a single signal by name.
    ///
    /// # Errors
    /// Returns an error if no signal is registered under `name`.
    pub fn evaluate_one(&mut self, name: &str, data: &MarketData) -> Result<SignalValue> {
        let signal = self
            .get_mut(name)
            .ok_or_else(|| anyhow::anyhow!("Signal '{}' not found", name))?;

        Ok(signal.generate_signal(data))
    }
}

impl std::fmt::Debug for SignalRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalRegistry")
            .field("signals", &self.names())
            .finish()
    }
}
