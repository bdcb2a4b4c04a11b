//! Go naming rules.

use glossa_codegen::NamingConvention;
use glossa_core::{initial_caps, to_pascal_case};

/// Go naming conventions.
///
/// Model types are PascalCase and operation ids become exported method
/// names. Files, vars and params follow the base conventions, so reserved
/// var and param names are escaped rather than case-shifted.
pub const GO_NAMING: NamingConvention = NamingConvention {
    model_to_type: to_pascal_case,
    operation_to_id: initial_caps,
    ..NamingConvention::DEFAULT
};

/// Go keywords and predeclared type names.
pub const RESERVED_WORDS: &[&str] = &[
    "break",
    "default",
    "func",
    "interface",
    "select",
    "case",
    "defer",
    "go",
    "map",
    "struct",
    "chan",
    "else",
    "goto",
    "package",
    "switch",
    "const",
    "fallthrough",
    "if",
    "range",
    "type",
    "continue",
    "for",
    "import",
    "return",
    "var",
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
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_naming() {
        assert_eq!((GO_NAMING.model_to_type)("order_item"), "OrderItem");
        assert_eq!((GO_NAMING.model_to_file)("OrderItem"), "OrderItem");
        assert_eq!((GO_NAMING.api_to_file)("StoreApi"), "StoreApi");
        assert_eq!((GO_NAMING.var_to_name)("user_name"), "user_name");
        assert_eq!((GO_NAMING.param_to_name)("user_name"), "user_name");
        assert_eq!((GO_NAMING.operation_to_id)("getPetById"), "GetPetById");
    }
}
