//! Swift naming rules.

use glossa_codegen::NamingConvention;

/// Swift keeps the generator framework's base naming.
pub const SWIFT_NAMING: NamingConvention = NamingConvention::DEFAULT;

/// Swift keywords, attributes and literal names that cannot be used as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "__COLUMN__",
    "__FILE__",
    "__FUNCTION__",
    "__LINE__",
    "as",
    "associativity",
    "break",
    "case",
    "class",
    "continue",
    "convenience",
    "default",
    "deinit",
    "didSet",
    "do",
    "dynamic",
    "dynamicType",
    "else",
    "enum",
    "extension",
    "fallthrough",
    "false",
    "final",
    "for",
    "func",
    "get",
    "if",
    "import",
    "in",
    "infix",
    "init",
    "inout",
    "internal",
    "is",
    "lazy",
    "left",
    "let",
    "mutating",
    "nil",
    "none",
    "nonmutating",
    "operator",
    "optional",
    "override",
    "postfix",
    "precedence",
    "prefix",
    "private",
    "protocol",
    "Protocol",
    "public",
    "required",
    "return",
    "right",
    "self",
    "Self",
    "set",
    "static",
    "struct",
    "subscript",
    "super",
    "switch",
    "true",
    "Type",
    "typealias",
    "unowned",
    "var",
    "weak",
    "where",
    "while",
    "willSet",
];
