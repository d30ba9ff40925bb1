use crate::config::AlphaConfig;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Json, Toml},
    Figment,
};
use std::path::Path;

/// Environment prefix for configuration overrides.
pub const ENV_PREFIX: &str = "HFT_ALPHA_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads signal configuration by merging the TOML file, `HFT_ALPHA_`
    /// environment variables, and a sibling JSON file with the same stem.
    ///
    /// Missing files are skipped, leaving an empty signal list.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<AlphaConfig> {
        let path = path.as_ref();
        let config: AlphaConfig = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .join(Json::file(path.with_extension("json")))
            .extract()
            .with_context(|| format!("failed to load config from {}", path.display()))?;

        tracing::debug!(path = %path.display(), signals = config.signals.len(), "Config loaded");
        Ok(config)
    }

    /// Loads configuration with a profile overlay, `<stem>.<profile>.toml`,
    /// merged on top of the base file.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    pub fn load_with_profile(path: impl AsRef<Path>, profile: &str) -> Result<AlphaConfig> {
        let path = path.as_ref();
        let config: AlphaConfig = Figment::new()
            .merge(Toml::file(path))
            .merge(Toml::file(profile_path(path, profile)))
            .merge(Env::prefixed(ENV_PREFIX))
            .join(Json::file(path.with_extension("json")))
            .extract()
            .with_context(|| {
                format!(
                    "failed to load config from {} with profile {profile}",
                    path.display()
                )
            })?;

        tracing::debug!(
            path = %path.display(),
            profile,
            signals = config.signals.len(),
            "Config loaded"
        );
        Ok(config)
    }
}

fn profile_path(path: &Path, profile: &str) -> std::path::PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}.{profile}.toml"))
}
