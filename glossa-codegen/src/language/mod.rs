//! Descriptor building blocks.
//!
//! - [`ReservedWords`] - Reserved identifiers and their escaping
//! - [`TypeMapping`] - Abstract type name to target type name table
//! - [`TypeResolver`] - Recursive rendering of [`Property`](glossa_ir::Property) trees
//! - [`PathResolver`] - Output folders from packages
//! - [`NamingConvention`] - Case transforms for generated names
//! - [`LanguageDescriptor`] - Everything a target declares, built once

mod descriptor;
mod mapping;
mod naming;
mod paths;
mod reserved;
mod resolver;

pub use descriptor::{DescriptorBuilder, LanguageDescriptor, SupportingFile, TemplateFile};
pub use mapping::TypeMapping;
pub use naming::NamingConvention;
pub use paths::PathResolver;
pub use reserved::ReservedWords;
pub use resolver::{ContainerSyntax, TypeResolver, Wrap};
