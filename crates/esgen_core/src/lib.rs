//! esgen_core: Core utilities shared by the esgen crates.
//!
//! Provides the source position types that every syntax tree node carries
//! as informational metadata.

pub mod text;

// Re-export commonly used types
pub use text::{Position, SourceLocation, TextPos, TextRange};
