// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! `glossa.toml` parsing and validation.
//!
//! The configuration file selects one target and optionally overrides its
//! folders and packages or extends its type tables.

mod error;
mod file;
mod manifest;
mod target;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::GlossaToml;
pub use manifest::{ExtraNames, Manifest, TargetConfig};
pub use target::TargetName;

/// Default configuration file name.
pub const DEFAULT_FILENAME: &str = "glossa.toml";
