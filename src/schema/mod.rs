//! Schema module
//!
//! Everything that produces or rewrites a schema fragment.
//!
//! # Features
//!
//! - **Type Inference**: Maps JSON values to declared types
//! - **Synthesis**: Builds a full fragment from sample data
//! - **Normalization**: Applies the `additionalProperties`/`required` policy to authored schemas
//! - **Cleaning**: Removes keywords Structured Outputs does not accept

mod clean;
mod inference;
mod normalize;
mod types;

pub use clean::{clean, has_forbidden_keys, FORBIDDEN_KEYS};
pub use inference::{infer_type, synthesize, SchemaSynthesizer};
pub use normalize::{normalize, METADATA_KEYS};
pub use types::{JsonType, Properties, SchemaFragment};
