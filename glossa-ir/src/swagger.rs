//! Mapping from swagger `type`/`format` pairs to the abstract vocabulary.

/// Abstract primitive name for a swagger `type` and optional `format`.
///
/// Unknown combinations fall back to the bare `type`.
pub fn abstract_name(ty: &str, format: Option<&str>) -> String {
    let name = match (ty, format) {
        ("integer", Some("int64")) => "long",
        ("integer", _) => "integer",
        ("number", Some("float")) => "float",
        ("number", Some("double")) => "double",
        ("number", _) => "number",
        ("string", Some("date")) => "Date",
        ("string", Some("date-time")) => "DateTime",
        ("file", _) => "File",
        (other, _) => other,
    };
    name.to_string()
}

/// Model name referenced by a `$ref` such as `#/definitions/Pet`.
pub fn model_ref_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}
