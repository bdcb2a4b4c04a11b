// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Target language descriptors for the Glossa client code generator.
//!
//! An external generation engine walks the abstract API model and asks a
//! [`LanguageDescriptor`] how each piece should look in one target language:
//! which type string to emit, how to escape reserved identifiers, and where
//! generated files go. This crate never renders templates or touches the
//! filesystem.
//!
//! # Module Organization
//!
//! - [`language`] - Descriptor building blocks (ReservedWords, TypeMapping, TypeResolver, PathResolver)
//! - [`registry`] - Mapping from target name to descriptor
//! - [`testing`] - Shared invariant checks for target crates (feature-gated)

mod error;
pub mod language;
pub mod registry;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{DescriptorError, Result};
pub use language::{
    ContainerSyntax, DescriptorBuilder, LanguageDescriptor, NamingConvention, PathResolver,
    ReservedWords, SupportingFile, TemplateFile, TypeMapping, TypeResolver, Wrap,
};
pub use registry::TargetRegistry;
