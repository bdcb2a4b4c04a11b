//! Shared invariant checks for target crates.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use glossa_ir::Property;

use crate::LanguageDescriptor;

/// Assert that escaping never produces another reserved word.
pub fn assert_escape_is_collision_free(descriptor: &LanguageDescriptor) {
    let reserved = descriptor.reserved_words();
    for word in reserved.iter() {
        let escaped = reserved.escape(word);
        assert_ne!(escaped, word, "'{}' was not escaped", word);
        assert!(
            !reserved.is_reserved(&escaped),
            "escaped form '{}' of '{}' is reserved in '{}'",
            escaped,
            word,
            descriptor.name()
        );
    }
}

/// Assert that every mapped type is emitted as a known target type and that
/// model-name formatting is idempotent on it.
pub fn assert_mappings_resolve(descriptor: &LanguageDescriptor) {
    let resolver = descriptor.resolver();
    for (from, to) in resolver.mapping().iter() {
        assert!(
            resolver.is_known_type(to),
            "'{}' -> '{}' is dangling in '{}'",
            from,
            to,
            descriptor.name()
        );

        let once = descriptor.render(&Property::primitive(from));
        assert_eq!(
            descriptor.to_model_name(&once),
            once,
            "model-name formatting of '{}' is not idempotent",
            once
        );
    }
}

/// Assert that outer containers wrap inner ones for every mapped leaf.
pub fn assert_containers_nest(descriptor: &LanguageDescriptor) {
    let syntax = descriptor.resolver().containers();
    for (from, _) in descriptor.resolver().mapping().iter() {
        let leaf = descriptor.render(&Property::primitive(from));
        let nested = Property::map(Property::array(Property::primitive(from)));
        let expected = syntax.map.apply(&syntax.array.apply(&leaf));
        assert_eq!(descriptor.render(&nested), expected);
    }
}

/// Run every shared check.
pub fn assert_descriptor_invariants(descriptor: &LanguageDescriptor) {
    assert_escape_is_collision_free(descriptor);
    assert_mappings_resolve(descriptor);
    assert_containers_nest(descriptor);
}
