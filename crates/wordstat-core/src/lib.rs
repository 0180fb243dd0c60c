//! Core library for wordstat.
//!
//! This crate provides the word-frequency statistics engine and the small
//! utilities the `wordstat` CLI builds on.
//!
//! # Modules
//!
//! - [`statistics`] - Word accumulation and deterministic ranking
//! - [`number`] - `N(m,k)` number-format validation
//! - [`report`] - Filtered frequency reports
//! - [`text`] / [`markdown`] - Word extraction from plain text and markdown
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordstat_core::{WordCount, WordStatistics, WordsStatistics};
//!
//! let mut stats = WordStatistics::new();
//! stats.record(Some("Hello")).unwrap();
//! stats.record(Some("hello")).unwrap();
//! stats.record(Some("world")).unwrap();
//!
//! assert_eq!(
//!     stats.snapshot(),
//!     vec![WordCount::new(1, "world"), WordCount::new(2, "hello")],
//! );
//! assert!(stats.record(None).is_err());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod markdown;
pub mod number;
pub mod report;
pub mod statistics;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    ConfigError, ConfigResult, StatisticsError, StatisticsResult, ValidatorError, ValidatorResult,
};
pub use number::NumberValidator;
pub use report::FrequencyReport;
pub use statistics::{MAX_KEY_CHARS, WordCount, WordStatistics, WordsStatistics, normalize_word};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
