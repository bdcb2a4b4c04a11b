//! Targets command report.

use super::output::{Output, Report};

/// One registered target.
#[derive(Debug)]
pub struct TargetSummary {
    pub name: String,
    pub kind: String,
    pub help: String,
}

/// Report listing registered targets.
#[derive(Debug)]
pub struct TargetsReport {
    pub targets: Vec<TargetSummary>,
}

impl Report for TargetsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Available targets");
        for target in &self.targets {
            out.list_item(&format!("{} ({}): {}", target.name, target.kind, target.help));
        }
    }
}
