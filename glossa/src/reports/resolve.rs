//! Resolve command report.

use super::output::{Output, Report};

/// A rendered type expression.
#[derive(Debug)]
pub struct ResolvedType {
    pub expression: String,
    pub declaration: String,
    pub instantiation: String,
}

/// Report of type expressions rendered for one target.
#[derive(Debug)]
pub struct ResolveReport {
    pub target: String,
    pub types: Vec<ResolvedType>,
}

impl Report for ResolveReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("target", &self.target);
        out.newline();
        for ty in &self.types {
            if ty.instantiation == ty.declaration {
                out.key_value(&ty.expression, &ty.declaration);
            } else {
                out.key_value(
                    &ty.expression,
                    &format!("{} (new {})", ty.declaration, ty.instantiation),
                );
            }
        }
    }
}
