//! Info command report data structures.

use super::output::{Output, Report};

/// Everything a descriptor declares, flattened for display.
#[derive(Debug)]
pub struct InfoReport {
    pub name: String,
    pub help: String,
    pub kind: String,
    pub template_dir: String,
    pub output_folder: String,
    pub source_folder: Option<String>,
    pub api_folder: String,
    pub model_folder: String,
    /// (template, extension)
    pub model_templates: Vec<(String, String)>,
    /// (template, extension)
    pub api_templates: Vec<(String, String)>,
    /// (template, destination path)
    pub supporting_files: Vec<(String, String)>,
    /// (abstract name, target name)
    pub type_mappings: Vec<(String, String)>,
    pub primitives: Vec<String>,
    pub reserved_words: usize,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("{}: {}", self.name, self.help));
        out.key_value("kind", &self.kind);
        out.key_value("templates", &self.template_dir);
        out.key_value("output", &self.output_folder);
        if let Some(source) = &self.source_folder {
            out.key_value("source folder", source);
        }
        out.key_value("api folder", &self.api_folder);
        out.key_value("model folder", &self.model_folder);

        out.newline();
        out.section("Per-entity templates");
        for (template, extension) in &self.model_templates {
            out.list_item(&format!("model: {} -> *{}", template, extension));
        }
        for (template, extension) in &self.api_templates {
            out.list_item(&format!("api: {} -> *{}", template, extension));
        }

        if !self.supporting_files.is_empty() {
            out.newline();
            out.section("Supporting files");
            for (template, path) in &self.supporting_files {
                out.list_item(&format!("{} -> {}", template, path));
            }
        }

        out.newline();
        out.section("Type mappings");
        for (from, to) in &self.type_mappings {
            out.key_value_indented(from, to);
        }

        out.newline();
        out.key_value("primitives", &self.primitives.join(", "));
        out.key_value("reserved words", &self.reserved_words.to_string());
    }
}
