//! Abstract property types for the Glossa client code generator.
//!
//! The external generation engine describes every model field and operation
//! parameter as a [`Property`] tree. Target descriptors turn these trees into
//! target-language type syntax.
//!
//! # Architecture
//!
//! ```text
//! API description → engine → glossa-ir (Property) → glossa-codegen (descriptor) → type strings
//! ```

mod error;
mod parse;
mod property;
mod swagger;

pub use error::IrError;
pub use parse::MAX_DEPTH;
pub use property::Property;
pub use swagger::{abstract_name, model_ref_name};
