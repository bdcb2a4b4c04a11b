//! Go type tables.

use glossa_codegen::{ContainerSyntax, Wrap};

/// Builtin Go types plus the standard-library types the mapping uses.
pub const PRIMITIVES: &[&str] = &[
    "bool",
    "int",
    "int32",
    "int64",
    "int8",
    "int16",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "uint",
    "rune",
    "byte",
    "string",
    "time.Time",
    "interface{}",
    "*os.File",
];

/// Abstract type name to Go type name.
pub const TYPE_MAPPING: &[(&str, &str)] = &[
    ("integer", "int32"),
    ("int", "int32"),
    ("long", "int64"),
    ("float", "float32"),
    ("double", "float64"),
    ("number", "float64"),
    ("boolean", "bool"),
    ("string", "string"),
    ("Date", "time.Time"),
    ("DateTime", "time.Time"),
    ("File", "*os.File"),
    ("object", "interface{}"),
];

/// `[]T` and `map[string]T`.
pub const CONTAINERS: ContainerSyntax = ContainerSyntax {
    array: Wrap::new("[]", ""),
    map: Wrap::new("map[string]", ""),
    map_key: "string",
};
