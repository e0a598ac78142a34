//! `rapida-metadata` command tree.
//!
//! Records are read as the SDK's JSON array of `{"key","value"}` objects,
//! from `--input FILE` or stdin, and written to stdout.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, bail};
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::descriptor::ProviderDescriptor;
use crate::metadata::{MetadataKey, MetadataRecord};
use crate::providers::{ProviderKind, Registry};
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "rapida-metadata")]
#[command(version, about = "Reconcile and validate provider and tool metadata records")]
pub struct Cli {
    /// Settings file (default: ~/.rapida/metadata.toml).
    #[arg(long, global = true, env = "RAPIDA_METADATA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fill defaults and drop stale or unknown keys for a provider.
    Assemble {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        input: Input,
    },
    /// Check a record against a provider's rules. Exits non-zero when invalid.
    Validate {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        input: Input,
    },
    /// Apply one field edit to a record.
    Set {
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
        #[command(flatten)]
        input: Input,
    },
    /// List registered provider codes.
    Providers {
        #[arg(long, short = 'k')]
        kind: Option<ProviderKind>,
    },
    /// Show the fields, defaults and kept keys of a provider.
    Describe {
        #[command(flatten)]
        target: Target,
    },
    /// Show or edit persisted settings.
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommand>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommand {
    /// Print every setting as `path = value` (default).
    List,
    /// Print one setting.
    Get { path: String },
    /// Change one setting and save the settings file.
    Set { path: String, value: String },
}

#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Provider category (text, stt, tts, embedding, reranker, storage,
    /// telephony, tool). Falls back to `defaults.kind`.
    #[arg(long, short = 'k')]
    pub kind: Option<ProviderKind>,

    /// Provider or tool code, e.g. `deepgram` or `api_request`.
    #[arg(long, short = 'p')]
    pub provider: String,
}

#[derive(Args, Debug, Clone)]
pub struct Input {
    /// JSON record file; stdin when omitted or `-`.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}

/// Everything a command needs besides its arguments.
pub struct Context<'a> {
    pub config: &'a Config,
    pub registry: &'a Registry,
    /// Where `settings set` writes.
    pub settings_path: PathBuf,
}

impl Context<'_> {
    fn kind(&self, explicit: Option<ProviderKind>) -> anyhow::Result<ProviderKind> {
        match explicit.or(self.config.default_kind) {
            Some(kind) => Ok(kind),
            None => bail!("No --kind given and no defaults.kind configured"),
        }
    }

    fn render(&self, record: &MetadataRecord) -> String {
        if self.config.output.pretty {
            record.to_json_pretty()
        } else {
            record.to_json()
        }
    }
}

/// Run `command`, reading records from `stdin` when no file is given.
pub fn execute(
    command: &Command,
    ctx: &Context<'_>,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    match command {
        Command::Assemble { target, input } => {
            let record = read_record(input, stdin)?;
            let dispatch = ctx.registry.dispatch(ctx.kind(target.kind)?, &target.provider);
            writeln!(out, "{}", ctx.render(&dispatch.assemble(&record)))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { target, input } => {
            let record = read_record(input, stdin)?;
            let dispatch = ctx.registry.dispatch(ctx.kind(target.kind)?, &target.provider);
            match dispatch.validate(&record) {
                Ok(()) => {
                    writeln!(out, "valid")?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    match &err.key {
                        Some(key) => writeln!(out, "invalid ({key}): {}", err.message)?,
                        None => writeln!(out, "invalid: {}", err.message)?,
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Set { key, value, input } => {
            let record = read_record(input, stdin)?;
            let updated = record.with_value(MetadataKey::from(key.as_str()), value.as_str());
            writeln!(out, "{}", ctx.render(&updated))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Providers { kind } => {
            let kinds = match kind {
                Some(kind) => vec![*kind],
                None => ProviderKind::ALL.to_vec(),
            };
            for kind in kinds {
                writeln!(out, "{kind}: {}", ctx.registry.providers(kind).join(", "))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Describe { target } => {
            let descriptor = ctx
                .registry
                .dispatch(ctx.kind(target.kind)?, &target.provider)
                .require()?;
            write_description(descriptor, out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Settings { command } => {
            run_settings(command.as_ref().unwrap_or(&SettingsCommand::List), ctx, out)
        }
    }
}

fn read_record(input: &Input, stdin: &mut dyn Read) -> anyhow::Result<MetadataRecord> {
    match input.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            MetadataRecord::from_reader(file)
                .with_context(|| format!("failed to read record from {}", path.display()))
        }
        _ => MetadataRecord::from_reader(stdin).context("failed to read record from stdin"),
    }
}

fn write_description(descriptor: &ProviderDescriptor, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "{} ({}) [{}]",
        descriptor.code, descriptor.name, descriptor.kind
    )?;
    if !descriptor.aliases.is_empty() {
        writeln!(out, "aliases: {}", descriptor.aliases.join(", "))?;
    }
    if let Some(prefix) = descriptor.passthrough {
        writeln!(out, "passthrough: {prefix}*")?;
    }

    for field in descriptor.fields {
        let default = match field.default {
            Some("") => "\"\"".to_string(),
            Some(value) => value.to_string(),
            None => "-".to_string(),
        };
        let kept = if descriptor.keep.contains(&field.key) {
            "kept"
        } else {
            "dropped"
        };
        let checked = if field.check.is_some() {
            "checked"
        } else {
            "free"
        };
        writeln!(
            out,
            "  {:<28} default={:<36} {:<8} {}",
            field.key.as_str(),
            default,
            checked,
            kept
        )?;
    }
    Ok(())
}

fn run_settings(
    command: &SettingsCommand,
    ctx: &Context<'_>,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    let mut settings = Settings::load_toml(&ctx.settings_path)?.unwrap_or_default();

    match command {
        SettingsCommand::List => {
            for (path, value) in settings.list() {
                writeln!(out, "{path} = {value}")?;
            }
        }
        SettingsCommand::Get { path } => match settings.get(path) {
            Some(value) => writeln!(out, "{value}")?,
            None => bail!("Unknown setting: {path}"),
        },
        SettingsCommand::Set { path, value } => {
            settings.set(path, value)?;
            settings.save_toml(&ctx.settings_path)?;
            tracing::info!(path, "Saved {}", ctx.settings_path.display());
            writeln!(out, "{path} = {}", settings.get(path).unwrap_or_default())?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
