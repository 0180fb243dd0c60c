//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use tracing::{debug, instrument};
use wordstat_core::MAX_KEY_CHARS;
use wordstat_core::config::{Config, ConfigSources};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
    max_key_chars: usize,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
            max_key_chars: MAX_KEY_CHARS,
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_limit: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            top: config.top,
            min_count: config.min_count,
            input_limit: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        info.package.name.if_supports_color(Stdout, |t| t.bold()),
        info.package.version.if_supports_color(Stdout, |t| t.green())
    );
    if !info.package.description.is_empty() {
        println!("{}", info.package.description);
    }
    if !info.package.repository.is_empty() {
        println!("{} {}", label("Repository:"), info.package.repository);
    }
    if !info.package.license.is_empty() {
        println!("{} {}", label("License:"), info.package.license);
    }
    println!("{} {}", label("Key length:"), info.package.max_key_chars);

    println!();
    println!("{}", "Configuration".if_supports_color(Stdout, |t| t.bold()));
    match info.config.config_file {
        Some(ref file) => println!("  {} {file}", label("Config file:")),
        None => println!("  {} none (using defaults)", label("Config file:")),
    }
    println!("  {} {}", label("Log level:"), info.config.log_level);
    if let Some(ref dir) = info.config.log_dir {
        println!("  {} {dir}", label("Log dir:"));
    }
    if let Some(top) = info.config.top {
        println!("  {} {top}", label("Top:"));
    }
    if let Some(min) = info.config.min_count {
        println!("  {} {min}", label("Min count:"));
    }
    match info.config.input_limit {
        Some(limit) => println!("  {} {limit} bytes", label("Input limit:")),
        None => println!("  {} disabled", label("Input limit:")),
    }

    Ok(())
}

fn label(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}
