use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use glossa_manifest::{GlossaToml, TargetName};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    targets,
};

#[derive(Args)]
pub struct CheckCommand {
    /// Check the target configured by this glossa.toml instead of every built-in target
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let results = match &self.config {
            Some(path) => {
                let file = GlossaToml::open(path).unwrap_or_exit();
                let manifest = file.manifest();
                vec![(
                    manifest.target.language.to_string(),
                    targets::configure(manifest),
                )]
            }
            None => TargetName::ALL
                .into_iter()
                .map(|name| (name.to_string(), targets::builder(name).build()))
                .collect(),
        };

        let report = ops::check(results);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
