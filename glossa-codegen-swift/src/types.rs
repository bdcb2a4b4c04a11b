//! Swift type tables.

use glossa_codegen::{ContainerSyntax, Wrap};

/// Swift standard types that are emitted as-is.
pub const PRIMITIVES: &[&str] = &["String", "Bool", "Double", "Int", "UInt", "Float", "AnyObject"];

/// Types provided by the supporting runtime files, plus `enum`.
pub const BUILTIN_TYPES: &[&str] = &["SWGDate", "SWGFile", "enum"];

/// Abstract type name to Swift type name.
pub const TYPE_MAPPING: &[(&str, &str)] = &[
    ("enum", "enum"),
    ("Date", "SWGDate"),
    ("DateTime", "SWGDate"),
    ("boolean", "Bool"),
    ("string", "String"),
    ("integer", "Int"),
    ("int", "Int"),
    ("float", "Float"),
    ("long", "Int"),
    ("double", "Double"),
    ("array", "Array"),
    ("map", "Dictionary"),
    ("number", "Double"),
    ("List", "Array"),
    ("object", "AnyObject"),
    ("File", "SWGFile"),
];

/// Concrete container types used to create values.
pub const INSTANTIATION_TYPES: &[(&str, &str)] = &[("array", "Array"), ("map", "Dictionary")];

/// `[T]` and `[String: T]`.
pub const CONTAINERS: ContainerSyntax = ContainerSyntax {
    array: Wrap::new("[", "]"),
    map: Wrap::new("[String: ", "]"),
    map_key: "String",
};
