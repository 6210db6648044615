//! Core library for seoscope.
//!
//! This crate provides the content analyzer used by the `seoscope` CLI and
//! MCP server, plus configuration loading and error types for downstream
//! consumers.
//!
//! # Modules
//!
//! - [`analyzer`] - The full content analysis entry point
//! - [`suggest`] - Optimization suggestions derived from an analysis
//! - [`metrics`] - Word/character/sentence/paragraph counting
//! - [`readability`] - Approximate Flesch Reading Ease scoring
//! - [`keywords`] - Keyword density and top-keyword extraction
//! - [`seo`] - Composite SEO scoring
//! - [`report`] - Serializable report types
//! - [`text`] - Splitting primitives shared by the above
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use seoscope_core::analyzer;
//!
//! let report = analyzer::analyze("The cat sat. The dog ran.", None)
//!     .expect("non-empty content analyzes");
//! assert_eq!(report.sentence_count, 2);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod keywords;
pub mod metrics;
pub mod readability;
pub mod report;
pub mod seo;
pub mod suggest;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};

pub use report::{AnalysisReport, AnalysisSnapshot, Priority, Suggestion};

/// Default maximum input size in bytes (5 MiB).
///
/// Guards the CLI and MCP server against resource exhaustion from
/// oversized inputs. Overridable via `max_input_bytes` in config.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
