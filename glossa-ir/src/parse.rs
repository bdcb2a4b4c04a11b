//! Parser for compact type expressions such as `map<array<integer>>`.

use std::str::FromStr;

use crate::{IrError, Property, abstract_name, model_ref_name};

/// Deepest container nesting accepted in a type expression.
pub const MAX_DEPTH: usize = 64;

impl FromStr for Property {
    type Err = IrError;

    /// Parse a type expression.
    ///
    /// A bare name is a primitive; `array<T>` and `map<T>` are containers.
    /// Any other `name<T>` is rejected with [`IrError::UnknownContainer`].
    ///
    /// Leaves may also be written as a swagger `type:format` pair
    /// (`integer:int64` is `long`) or as a `$ref` (`#/definitions/Pet` is `Pet`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser {
            input: s,
            pos: 0,
            depth: 0,
        };
        let property = parser.property()?;
        parser.skip_ws();
        if parser.pos < s.len() {
            return Err(IrError::TrailingInput {
                rest: s[parser.pos..].to_string(),
                input: s.to_string(),
            });
        }
        Ok(property)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn property(&mut self) -> Result<Property, IrError> {
        self.skip_ws();
        let name = self.name()?;
        self.skip_ws();

        if !self.eat('<') {
            return Ok(Property::Primitive(leaf_name(name)));
        }

        let wrap: fn(Property) -> Property = match name {
            "array" => Property::array,
            "map" => Property::map,
            other => {
                return Err(IrError::UnknownContainer {
                    kind: other.to_string(),
                    input: self.input.to_string(),
                });
            }
        };

        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(IrError::TooDeep {
                limit: MAX_DEPTH,
                input: self.input.to_string(),
            });
        }
        let inner = self.property()?;
        self.depth -= 1;
        self.skip_ws();
        if !self.eat('>') {
            return Err(IrError::Unclosed {
                input: self.input.to_string(),
            });
        }
        Ok(wrap(inner))
    }

    fn name(&mut self) -> Result<&'a str, IrError> {
        let input = self.input;
        let rest = &input[self.pos..];
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || "_.:-#/".contains(c)))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(IrError::ExpectedName {
                offset: self.pos,
                input: self.input.to_string(),
            });
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.input[self.pos..].starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}

/// Normalize a `$ref` or `type:format` leaf to its abstract name.
fn leaf_name(name: &str) -> String {
    if name.contains('/') {
        return model_ref_name(name).to_string();
    }
    match name.split_once(':') {
        Some((ty, format)) => abstract_name(ty, Some(format)),
        None => name.to_string(),
    }
}
