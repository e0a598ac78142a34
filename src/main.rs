use std::io::Write;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rapida_metadata::cli::{Cli, Context};
use rapida_metadata::config::Config;
use rapida_metadata::providers::Registry;
use rapida_metadata::settings::Settings;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    init_tracing(&config);
    if let Some(source) = &config.source {
        tracing::debug!("Using settings from {}", source.display());
    }

    let registry = Registry::builtin();
    let ctx = Context {
        config: &config,
        registry: &registry,
        settings_path: cli
            .config
            .clone()
            .unwrap_or_else(Settings::default_toml_path),
    };

    let mut stdout = std::io::stdout().lock();
    let code = rapida_metadata::cli::execute(&cli.command, &ctx, &mut std::io::stdin(), &mut stdout)?;
    stdout.flush()?;
    Ok(code)
}

/// Logs go to stderr so stdout stays a clean record.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    let json = config.logging.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let text = (!config.logging.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}
