//! Validate command — check values against an `N(m,k)` number format.

use anyhow::{Context, bail};
use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use tracing::{debug, instrument};

use wordstat_core::NumberValidator;

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Maximum characters in a value: sign plus all digits.
    #[arg(short, long)]
    pub precision: usize,

    /// Maximum fractional digits (must be below precision).
    #[arg(short, long, default_value_t = 0)]
    pub scale: usize,

    /// Reject values with a leading minus sign.
    #[arg(long)]
    pub positive_only: bool,

    /// Values to check. Put negative values after `--`.
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

#[derive(Serialize)]
struct ValueResult<'a> {
    value: &'a str,
    valid: bool,
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    format: String,
    positive_only: bool,
    results: Vec<ValueResult<'a>>,
}

/// Validate each value and fail if any of them does not match the format.
#[instrument(name = "cmd_validate", skip_all, fields(precision = args.precision, scale = args.scale))]
pub fn cmd_validate(args: ValidateArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(values = args.values.len(), positive_only = args.positive_only, "executing validate command");

    let validator = NumberValidator::new(args.precision, args.scale, args.positive_only)
        .context("invalid number format")?;

    let results: Vec<ValueResult<'_>> = args
        .values
        .iter()
        .map(|value| ValueResult {
            value,
            valid: validator.is_valid(Some(value)),
        })
        .collect();
    let invalid = results.iter().filter(|r| !r.valid).count();

    if global_json {
        let report = ValidationReport {
            format: validator.to_string(),
            positive_only: validator.only_positive(),
            results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for r in &results {
            if r.valid {
                println!("{} {}", "valid:  ".if_supports_color(Stdout, |t| t.green()), r.value);
            } else {
                println!("{} {}", "invalid:".if_supports_color(Stdout, |t| t.red()), r.value);
            }
        }
    }

    if invalid > 0 {
        bail!(
            "{invalid} of {} values do not match {validator}",
            args.values.len()
        );
    }
    Ok(())
}
