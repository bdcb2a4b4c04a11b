//! A target assembled only from the public builder API.

use glossa_codegen::{
    ContainerSyntax, DescriptorError, LanguageDescriptor, NamingConvention, TargetRegistry, Wrap,
    testing::assert_descriptor_invariants,
};
use glossa_core::{to_pascal_case, to_snake_case};
use glossa_ir::Property;

fn kotlin_like() -> LanguageDescriptor {
    LanguageDescriptor::builder("kotlin")
        .help("Generates a Kotlin client library.")
        .output_folder("generated-code/kotlin")
        .source_folder(Some("src/main/kotlin"))
        .api_package("io.swagger.client.api")
        .model_package("io.swagger.client.model")
        .reserved_words(["fun", "val", "var", "object", "when"])
        .primitives(["Int", "Long", "String", "Boolean", "Double", "Any"])
        .type_mappings([
            ("integer", "Int"),
            ("long", "Long"),
            ("string", "String"),
            ("boolean", "Boolean"),
            ("number", "Double"),
            ("object", "Any"),
        ])
        .instantiation_type("array", "ArrayList")
        .instantiation_type("map", "HashMap")
        .containers(ContainerSyntax {
            array: Wrap::new("List<", ">"),
            map: Wrap::new("Map<String, ", ">"),
            map_key: "String",
        })
        .naming(NamingConvention {
            model_to_type: to_pascal_case,
            api_to_file: to_snake_case,
            ..NamingConvention::DEFAULT
        })
        .model_template("model.mustache", ".kt")
        .api_template("api.mustache", ".kt")
        .build()
        .expect("kotlin-like descriptor")
}

#[test]
fn test_custom_target_invariants() {
    assert_descriptor_invariants(&kotlin_like());
}

#[test]
fn test_custom_target_rendering() {
    let kt = kotlin_like();
    let prop: Property = "map<array<integer>>".parse().unwrap();
    assert_eq!(kt.render(&prop), "Map<String, List<Int>>");
    assert_eq!(kt.instantiation_type(&prop), "HashMap<String, List<Int>>");
    assert_eq!(kt.render(&Property::primitive("pet_owner")), "PetOwner");
}

#[test]
fn test_custom_target_paths() {
    let kt = kotlin_like();
    assert_eq!(
        kt.api_file_folder(),
        std::path::Path::new("generated-code/kotlin/src/main/kotlin/io/swagger/client/api")
    );
    let api = &kt.api_templates()[0];
    assert_eq!(
        kt.api_filename(api, "pet").file_name().unwrap(),
        "pet_api.kt"
    );
}

#[test]
fn test_registry_with_custom_target() {
    let mut registry = TargetRegistry::new();
    registry.register(kotlin_like()).unwrap();
    assert!(registry.require("Kotlin").is_ok());
    assert!(matches!(
        registry.register(kotlin_like()),
        Err(DescriptorError::DuplicateTarget { .. })
    ));
}

#[test]
fn test_descriptor_shared_across_threads() {
    let kt = kotlin_like();
    let prop: Property = "array<long>".parse().unwrap();

    let rendered: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| kt.render(&prop)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(rendered.iter().all(|r| r == "List<Long>"));
}
