//! esgen_ast: syntax tree definitions for generated JavaScript.
//!
//! This crate defines the node structs, the capability-group enums that
//! decide which node may appear in which slot, the `NodeKind` enum and the
//! operator and flag types. Trees are plain owned values.

pub mod error;
pub mod generated;
pub mod literal;
pub mod node;
pub mod node_kind;
pub mod types;

// Re-export key types
pub use error::{ConstructionError, ConstructionResult};
pub use generated::{CapabilityGroup, Node};
pub use literal::{bool_literal, number_literal, string_literal, NULL, UNDEFINED};
pub use node::*;
pub use node_kind::NodeKind;
pub use types::*;

pub use bigdecimal::BigDecimal;
