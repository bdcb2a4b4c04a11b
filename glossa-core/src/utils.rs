//! Shared string helpers for identifier formatting.

/// Uppercase the first character, leaving the rest untouched
/// (e.g., "pet" -> "Pet", "SWGDate" -> "SWGDate").
pub fn initial_caps(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld").
///
/// Splits on underscores and hyphens; already-PascalCase input is unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-']).map(initial_caps).collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld").
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world").
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c == '-' {
            result.push('_');
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() {
            if prev_lower {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_caps() {
        assert_eq!(initial_caps("pet"), "Pet");
        assert_eq!(initial_caps("SWGDate"), "SWGDate");
        assert_eq!(initial_caps("getPetById"), "GetPetById");
        assert_eq!(initial_caps(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("pet-store"), "PetStore");
        assert_eq!(to_pascal_case("HelloWorld"), "HelloWorld");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("get_user_id"), "getUserId");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("PetApi"), "pet_api");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("SWGDate"), "swgdate");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_pascal_case_is_idempotent() {
        for name in ["user_profile", "Pet", "order-item", "SWGFile"] {
            let once = to_pascal_case(name);
            assert_eq!(to_pascal_case(&once), once);
        }
    }
}
