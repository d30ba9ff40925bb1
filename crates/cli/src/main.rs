use anyhow::Context;
use clap::{Parser, Subcommand};
use hft_alpha_core::{AlphaConfig, ConfigLoader};
use hft_alpha_signals::SignalRegistry;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

mod replay;

#[derive(Parser)]
#[command(name = "hft-alpha")]
#[command(about = "Replay order book snapshots through alpha signals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every configured signal on each snapshot and print readings as JSON lines
    Replay {
        /// Config file path
        #[arg(short, long, default_value = "config/Config.toml")]
        config: PathBuf,
        /// Optional profile overlay (loads Config.<profile>.toml on top)
        #[arg(short, long, env = "HFT_ALPHA_PROFILE")]
        profile: Option<String>,
        /// JSON-lines snapshot file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Load and validate the configuration, then list the signals it builds
    CheckConfig {
        /// Config file path
        #[arg(short, long, default_value = "config/Config.toml")]
        config: PathBuf,
        /// Optional profile overlay
        #[arg(short, long, env = "HFT_ALPHA_PROFILE")]
        profile: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Readings go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Replay {
            config,
            profile,
            input,
        } => {
            let mut registry = build_registry(&config, profile.as_deref())?;
            let reader: Box<dyn BufRead> = match &input {
                Some(path) => Box::new(BufReader::new(
                    std::fs::File::open(path)
                        .with_context(|| format!("failed to open {}", path.display()))?,
                )),
                None => Box::new(io::stdin().lock()),
            };
            let stdout = io::stdout();
            let stats = replay::run(&mut registry, reader, BufWriter::new(stdout.lock()))?;
            tracing::info!(
                frames = stats.frames,
                skipped = stats.skipped,
                readings = stats.readings,
                "Replay finished"
            );
        }
        Commands::CheckConfig { config, profile } => {
            let registry = build_registry(&config, profile.as_deref())?;
            for name in registry.names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn build_registry(path: &Path, profile: Option<&str>) -> anyhow::Result<SignalRegistry> {
    let mut config = match profile {
        Some(profile) => ConfigLoader::load_with_profile(path, profile)?,
        None => ConfigLoader::load(path)?,
    };

    if config.signals.is_empty() {
        tracing::warn!(
            path = %path.display(),
            "No signals configured, using the default signal set"
        );
        config = AlphaConfig::default();
    }

    SignalRegistry::from_config(&config).context("invalid signal configuration")
}
