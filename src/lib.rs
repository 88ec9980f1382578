//! # Solidafy Schema
//!
//! Turns sample JSON data, or an existing JSON Schema, into a schema that
//! OpenAI Structured Outputs accepts, wrapped in a ready-to-send request body.
//!
//! ## Quick Start
//!
//! ```rust
//! use solidafy_schema::{convert, ConversionOptions, InputKind};
//!
//! let options = ConversionOptions::default().with_schema_name("person");
//! let conversion = convert(r#"{"name": "Ana", "age": 3}"#, &options)
//!     .unwrap()
//!     .expect("input is not blank");
//!
//! assert_eq!(conversion.detected_type, InputKind::Data);
//! let request = conversion.envelope.to_json();
//! assert_eq!(request["text"]["format"]["name"], "person");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │            convert(text, options) → Envelope                 │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬──────────────────┴──────────┬─────────┬───────────┐
//! │  Detect  │          Schema             │  Clean  │ Envelope  │
//! ├──────────┼─────────────────────────────┼─────────┼───────────┤
//! │ data     │ synthesize (sample data)    │ strip   │ Chat      │
//! │ schema   │ normalize (authored schema) │ const → │ Responses │
//! │          │                             │ enum    │           │
//! └──────────┴─────────────────────────────┴─────────┴───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Conversion options
pub mod config;

/// Schema synthesis, normalization and cleaning
pub mod schema;

/// Data versus schema classification
pub mod detect;

/// Request envelope construction
pub mod envelope;

/// End-to-end pipeline and stateful converter
pub mod converter;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ConversionOptions;
pub use converter::{convert, convert_value, Conversion, ConverterState, SchemaConverter};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
