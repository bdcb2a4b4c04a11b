//! Post-parse validation of glossa.toml.

use std::path::Path;

use miette::SourceSpan;
use toml::Spanned;

use crate::{Manifest, Result, SourceContext};

pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let target = &manifest.target;

    if let Some(output) = &target.output {
        if output.get_ref().trim().is_empty() {
            return Err(ctx.validation_error(
                "output folder must not be empty",
                Some(SourceSpan::from(output.span())),
            ));
        }
    }

    if let Some(source) = &target.source_folder {
        if let Some(reason) = source_folder_error(source.get_ref()) {
            return Err(ctx.validation_error(reason, Some(SourceSpan::from(source.span()))));
        }
    }

    for package in [&target.api_package, &target.model_package]
        .into_iter()
        .flatten()
    {
        validate_package(package, ctx)?;
    }

    for (from, to) in &manifest.type_mappings {
        if from.is_empty() || to.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("type mapping '{}' -> '{}' must name both types", from, to),
                find_span(ctx.src(), from),
            ));
        }
    }

    for word in manifest
        .reserved_words
        .extra
        .iter()
        .chain(&manifest.primitives.extra)
    {
        if word.trim().is_empty() {
            return Err(ctx.validation_error("names in 'extra' lists must not be empty", None));
        }
    }

    Ok(())
}

fn validate_package(package: &Spanned<String>, ctx: &SourceContext) -> Result<()> {
    let name = package.get_ref();
    if let Some(reason) = package_error(name) {
        return Err(ctx.invalid_package_error(
            name.as_str(),
            reason,
            Some(SourceSpan::from(package.span())),
        ));
    }
    Ok(())
}

/// Returns the reason a package name is invalid, if it is.
fn package_error(package: &str) -> Option<String> {
    if package.is_empty() {
        return Some("package name is empty".to_string());
    }
    for segment in package.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Some("package has an empty segment".to_string()),
            Some(c) if !(c.is_alphabetic() || c == '_') => {
                return Some(format!("segment '{}' must start with a letter", segment));
            }
            _ => {}
        }
        if let Some(c) = chars.find(|c| !(c.is_alphanumeric() || *c == '_')) {
            return Some(format!("segment '{}' contains '{}'", segment, c));
        }
    }
    None
}

/// Returns the reason a source folder would leave the output folder, if it does.
fn source_folder_error(folder: &str) -> Option<String> {
    if folder.starts_with(['/', '\\']) || Path::new(folder).is_absolute() {
        return Some(format!("source folder '{}' must be relative", folder));
    }
    if folder.split(['/', '\\']).any(|segment| segment == "..") {
        return Some(format!("source folder '{}' must not contain '..'", folder));
    }
    None
}

fn find_span(src: &str, name: &str) -> Option<SourceSpan> {
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_package_error() {
        assert_eq!(package_error("api"), None);
        assert_eq!(package_error("io.swagger.client_api"), None);
        assert!(package_error("").is_some());
        assert!(package_error("api..sub").is_some());
        assert!(package_error("api.").is_some());
        assert!(package_error("1api").is_some());
        assert!(package_error("api-sub").is_some());
    }

    #[test]
    fn test_invalid_package_points_at_value() {
        let src = "[target]\nlanguage = \"swift\"\napi_package = \"api..sub\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::InvalidPackage { package, span, .. } => {
                assert_eq!(package, "api..sub");
                let span = span.expect("span");
                assert!(src[span.offset()..span.offset() + span.len()].contains("api..sub"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_source_folder_error() {
        assert_eq!(source_folder_error(""), None);
        assert_eq!(source_folder_error("Sources"), None);
        assert_eq!(source_folder_error("src/main/swift"), None);
        assert!(source_folder_error("/etc").is_some());
        assert!(source_folder_error("\\share").is_some());
        assert!(source_folder_error("..").is_some());
        assert!(source_folder_error("src/../../etc").is_some());
    }

    #[test]
    fn test_escaping_source_folder_points_at_value() {
        let src = "[target]\nlanguage = \"go\"\nsource_folder = \"../outside\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::Validation { message, span, .. } => {
                assert!(message.contains("'..'"));
                let span = span.expect("span");
                assert!(src[span.offset()..span.offset() + span.len()].contains("../outside"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = "[target]\nlanguage = \"swift\"\nsource_folder = \"/etc\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_output_rejected() {
        let err = "[target]\nlanguage = \"go\"\noutput = \"  \"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_mapping_target_rejected() {
        let err = "[target]\nlanguage = \"go\"\n\n[type_mappings]\ncurrency = \"\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        match *err {
            Error::Validation { message, .. } => assert!(message.contains("currency")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_extra_name_rejected() {
        let err = "[target]\nlanguage = \"go\"\n\n[reserved_words]\nextra = [\"\"]\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
