//! Core utilities and types for the Glossa client code generator.
//!
//! This crate provides fundamental types and string helpers shared by the
//! descriptor crates and the target implementations.

mod kind;
mod utils;

pub use kind::CodegenKind;
// String utilities
pub use utils::{initial_caps, to_camel_case, to_pascal_case, to_snake_case};
