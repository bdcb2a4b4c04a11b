//! Operations behind the commands.
//!
//! Each operation collects data from descriptors into a report; rendering is
//! left to the caller.

use glossa_codegen::{LanguageDescriptor, TargetRegistry};
use glossa_ir::{IrError, Property};

use crate::reports::{
    CheckEntry, CheckReport, InfoReport, ResolveReport, ResolvedType, TargetSummary,
    TargetsReport,
};

/// List registered targets.
pub fn targets(registry: &TargetRegistry) -> TargetsReport {
    TargetsReport {
        targets: registry
            .iter()
            .map(|d| TargetSummary {
                name: d.name().to_string(),
                kind: d.kind().to_string(),
                help: d.help().to_string(),
            })
            .collect(),
    }
}

/// Describe one descriptor.
pub fn info(descriptor: &LanguageDescriptor) -> InfoReport {
    let templates = |files: &[glossa_codegen::TemplateFile]| {
        files
            .iter()
            .map(|t| (t.template.clone(), t.extension.clone()))
            .collect()
    };
    let resolver = descriptor.resolver();

    InfoReport {
        name: descriptor.name().to_string(),
        help: descriptor.help().to_string(),
        kind: descriptor.kind().to_string(),
        template_dir: descriptor.template_dir().to_string(),
        output_folder: descriptor.paths().output_folder().display().to_string(),
        source_folder: descriptor.paths().source_folder().map(str::to_string),
        api_folder: descriptor.api_file_folder().display().to_string(),
        model_folder: descriptor.model_file_folder().display().to_string(),
        model_templates: templates(descriptor.model_templates()),
        api_templates: templates(descriptor.api_templates()),
        supporting_files: descriptor
            .supporting_files()
            .iter()
            .map(|f| {
                (
                    f.template.clone(),
                    descriptor.supporting_file_path(f).display().to_string(),
                )
            })
            .collect(),
        type_mappings: resolver
            .mapping()
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect(),
        primitives: resolver.primitives().map(str::to_string).collect(),
        reserved_words: descriptor.reserved_words().len(),
    }
}

/// Render type expressions with a descriptor.
///
/// Fails on the first expression that is not a valid property.
pub fn resolve<S: AsRef<str>>(
    descriptor: &LanguageDescriptor,
    expressions: &[S],
) -> Result<ResolveReport, IrError> {
    let types = expressions
        .iter()
        .map(|expr| {
            let property: Property = expr.as_ref().parse()?;
            Ok(ResolvedType {
                expression: property.to_string(),
                declaration: descriptor.render(&property),
                instantiation: descriptor.instantiation_type(&property),
            })
        })
        .collect::<Result<Vec<_>, IrError>>()?;

    Ok(ResolveReport {
        target: descriptor.name().to_string(),
        types,
    })
}

/// Check descriptors, recording construction failures instead of aborting.
pub fn check(
    results: impl IntoIterator<Item = (String, glossa_codegen::Result<LanguageDescriptor>)>,
) -> CheckReport {
    let entries = results
        .into_iter()
        .map(|(target, result)| {
            match result.and_then(|d| d.validate().map(|_| d)) {
                Ok(d) => CheckEntry {
                    target,
                    reserved_words: d.reserved_words().len(),
                    type_mappings: d.resolver().mapping().len(),
                    error: None,
                },
                Err(e) => {
                    tracing::warn!(target_name = %target, error = %e, "target failed checks");
                    CheckEntry {
                        target,
                        reserved_words: 0,
                        type_mappings: 0,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    CheckReport { entries }
}

#[cfg(test)]
mod tests {
    use glossa_manifest::TargetName;

    use super::*;
    use crate::{reports::BufferOutput, targets};

    #[test]
    fn test_targets_report() {
        let registry = targets::registry().unwrap();
        let report = targets(&registry);
        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        Available targets:
          - swift (client): Generates a Swift client library.
          - go (client): Generates a Go client library.
        ");
    }

    #[test]
    fn test_info_report_go() {
        let go = targets::builder(TargetName::Go).build().unwrap();
        let report = info(&go);
        assert_eq!(report.source_folder, None);
        assert!(report.supporting_files.is_empty());
        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        go: Generates a Go client library.
        ==================================
        kind: client
        templates: golang
        output: generated-code/golang
        api folder: generated-code/golang/api
        model folder: generated-code/golang/model

        Per-entity templates:
          - model: model.mustache -> *.go
          - api: api.mustache -> *.go

        Type mappings:
          integer: int32
          int: int32
          long: int64
          float: float32
          double: float64
          number: float64
          boolean: bool
          string: string
          Date: time.Time
          DateTime: time.Time
          File: *os.File
          object: interface{}

        primitives: bool, int, int32, int64, int8, int16, uint8, uint16, uint32, uint64, float32, float64, complex64, complex128, uint, rune, byte, string, time.Time, interface{}, *os.File
        reserved words: 43
        ");
    }

    #[test]
    fn test_info_report_swift_supporting_files() {
        let swift = targets::builder(TargetName::Swift).build().unwrap();
        let report = info(&swift);
        assert_eq!(report.source_folder.as_deref(), Some("client"));
        assert_eq!(report.supporting_files.len(), 7);
        assert_eq!(report.supporting_files[0].0, "apiInvoker.mustache");
        assert!(report.supporting_files[0].1.ends_with("ApiInvoker.swift"));
        assert_eq!(report.reserved_words, 71);
    }

    #[test]
    fn test_resolve_report() {
        let swift = targets::builder(TargetName::Swift).build().unwrap();
        let report = resolve(&swift, &["map<array<integer>>", "DateTime", "array<Pet>"]).unwrap();
        assert_eq!(report.target, "swift");
        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        target: swift

        map<array<integer>>: [String: [Int]] (new Dictionary<String, [Int]>)
        DateTime: SWGDate
        array<Pet>: [Pet] (new Array<Pet>)
        ");
    }

    #[test]
    fn test_resolve_swagger_leaves() {
        let go = targets::builder(TargetName::Go).build().unwrap();
        let report = resolve(&go, &["integer:int64", "array<#/definitions/Pet>"]).unwrap();
        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        target: go

        long: int64
        array<Pet>: []Pet
        ");
    }

    #[test]
    fn test_resolve_rejects_unknown_container() {
        let go = targets::builder(TargetName::Go).build().unwrap();
        let err = resolve(&go, &["string", "set<string>"]).unwrap_err();
        assert!(matches!(err, IrError::UnknownContainer { kind, .. } if kind == "set"));
    }

    #[test]
    fn test_check_report() {
        let results = vec![
            ("go".to_string(), targets::builder(TargetName::Go).build()),
            (
                "broken".to_string(),
                targets::builder(TargetName::Go)
                    .reserved_words(["_func"])
                    .build(),
            ),
        ];
        let report = check(results);
        assert!(!report.is_valid());
        assert_eq!(report.entries[0].type_mappings, 12);
        assert!(report.entries[1].error.as_deref().unwrap().contains("_func"));
    }
}
