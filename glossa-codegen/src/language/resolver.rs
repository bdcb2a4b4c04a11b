//! Recursive rendering of abstract properties into target type syntax.

use glossa_ir::Property;
use indexmap::IndexSet;

use super::{NamingConvention, TypeMapping};

/// Prefix/suffix pair wrapped around an element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Wrap {
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    pub fn apply(&self, inner: &str) -> String {
        format!("{}{}{}", self.prefix, inner, self.suffix)
    }
}

/// How a target spells its container types.
///
/// Maps are always keyed by string, so the key type is part of `map.prefix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSyntax {
    /// Array declaration, e.g. `[T]` or `[]T`
    pub array: Wrap,
    /// Map declaration, e.g. `[String: T]` or `map[string]T`
    pub map: Wrap,
    /// Key type used in instantiation types, e.g. `Dictionary<String, T>`
    pub map_key: &'static str,
}

impl ContainerSyntax {
    /// Generic `Array<T>` / `Map<String, T>` spelling.
    pub const GENERIC: ContainerSyntax = ContainerSyntax {
        array: Wrap::new("Array<", ">"),
        map: Wrap::new("Map<String, ", ">"),
        map_key: "String",
    };
}

impl Default for ContainerSyntax {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// Renders [`Property`] trees as target type declarations.
#[derive(Debug, Clone)]
pub struct TypeResolver {
    pub(crate) mapping: TypeMapping,
    pub(crate) instantiation: TypeMapping,
    pub(crate) primitives: IndexSet<String>,
    pub(crate) builtins: IndexSet<String>,
    pub(crate) containers: ContainerSyntax,
    pub(crate) naming: NamingConvention,
}

impl TypeResolver {
    /// The abstract name to target name table.
    pub fn mapping(&self) -> &TypeMapping {
        &self.mapping
    }

    /// Container types used to instantiate values (e.g. "array" -> "Array").
    pub fn instantiation_types(&self) -> &TypeMapping {
        &self.instantiation
    }

    /// Target types that are never reformatted.
    pub fn primitives(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().map(String::as_str)
    }

    /// Target types emitted verbatim without further lookup.
    pub fn builtin_types(&self) -> impl Iterator<Item = &str> {
        self.builtins.iter().map(String::as_str)
    }

    pub fn containers(&self) -> &ContainerSyntax {
        &self.containers
    }

    pub fn is_primitive(&self, name: &str) -> bool {
        self.primitives.contains(name)
    }

    /// Returns true if `name` can be emitted without further lookup.
    pub fn is_known_type(&self, name: &str) -> bool {
        self.primitives.contains(name)
            || self.builtins.contains(name)
            || self.instantiation.iter().any(|(_, to)| to == name)
    }

    pub fn resolve_primitive(&self, name: &str) -> String {
        self.mapping.resolve_primitive(name)
    }

    /// Display-name formatting for a resolved leaf type.
    ///
    /// Primitives and builtin types are left alone; every other name goes
    /// through the target's model-name transform. Idempotent.
    pub fn to_model_name(&self, name: &str) -> String {
        if self.primitives.contains(name) || self.builtins.contains(name) {
            name.to_string()
        } else {
            (self.naming.model_to_type)(name)
        }
    }

    /// Render the type declaration of a property.
    pub fn render(&self, property: &Property) -> String {
        let rendered = match property {
            Property::Primitive(name) => self.to_model_name(&self.resolve_primitive(name)),
            Property::Array(inner) => self.containers.array.apply(&self.render(inner)),
            Property::Map(inner) => self.containers.map.apply(&self.render(inner)),
        };
        tracing::trace!(%property, %rendered, "rendered type");
        rendered
    }

    /// Formatted target name of the outermost abstract type.
    ///
    /// For containers this is the resolved container name ("Array" in Swift),
    /// for primitives the same as [`render`](Self::render).
    pub fn swagger_type(&self, property: &Property) -> String {
        self.to_model_name(&self.resolve_primitive(property.kind_name()))
    }

    /// Concrete type used to construct a value of this property.
    ///
    /// Targets without an instantiation type for the container fall back to
    /// the declaration syntax.
    pub fn instantiation_type(&self, property: &Property) -> String {
        match property {
            Property::Array(inner) => match self.instantiation.get("array") {
                Some(array) => format!("{}<{}>", array, self.render(inner)),
                None => self.render(property),
            },
            Property::Map(inner) => match self.instantiation.get("map") {
                Some(map) => format!(
                    "{}<{}, {}>",
                    map,
                    self.containers.map_key,
                    self.render(inner)
                ),
                None => self.render(property),
            },
            Property::Primitive(_) => self.render(property),
        }
    }
}

#[cfg(test)]
mod tests {
    use glossa_core::to_pascal_case;

    use super::*;

    fn resolver() -> TypeResolver {
        TypeResolver {
            mapping: [("integer", "int32"), ("string", "string"), ("object", "Any")]
                .into_iter()
                .collect(),
            instantiation: [("array", "List")].into_iter().collect(),
            primitives: ["int32", "string"].into_iter().map(String::from).collect(),
            builtins: ["Any"].into_iter().map(String::from).collect(),
            containers: ContainerSyntax::GENERIC,
            naming: NamingConvention {
                model_to_type: to_pascal_case,
                ..NamingConvention::DEFAULT
            },
        }
    }

    #[test]
    fn test_render_primitive() {
        let r = resolver();
        assert_eq!(r.render(&Property::primitive("integer")), "int32");
        assert_eq!(r.render(&Property::primitive("object")), "Any");
        assert_eq!(r.render(&Property::primitive("user_profile")), "UserProfile");
    }

    #[test]
    fn test_render_nested_containers() {
        let r = resolver();
        let prop = Property::map(Property::array(Property::primitive("integer")));
        assert_eq!(r.render(&prop), "Map<String, Array<int32>>");
    }

    #[test]
    fn test_container_element_names_are_formatted() {
        let r = resolver();
        let prop = Property::array(Property::primitive("order_item"));
        assert_eq!(r.render(&prop), "Array<OrderItem>");
    }

    #[test]
    fn test_to_model_name_is_idempotent() {
        let r = resolver();
        for name in ["int32", "Any", "pet", "order_item", "currency"] {
            let once = r.to_model_name(name);
            assert_eq!(r.to_model_name(&once), once);
        }
    }

    #[test]
    fn test_instantiation_type() {
        let r = resolver();
        let array = Property::array(Property::primitive("string"));
        assert_eq!(r.instantiation_type(&array), "List<string>");

        // no "map" instantiation type: falls back to the declaration
        let map = Property::map(Property::primitive("string"));
        assert_eq!(r.instantiation_type(&map), "Map<String, string>");
    }

    #[test]
    fn test_swagger_type() {
        let r = resolver();
        assert_eq!(r.swagger_type(&Property::primitive("integer")), "int32");
        assert_eq!(
            r.swagger_type(&Property::array(Property::primitive("integer"))),
            "Array"
        );
    }

    #[test]
    fn test_is_known_type() {
        let r = resolver();
        assert!(r.is_known_type("int32"));
        assert!(r.is_known_type("Any"));
        assert!(r.is_known_type("List"));
        assert!(!r.is_known_type("Decimal"));
    }
}
