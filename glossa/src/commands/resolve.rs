use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::{default_config, select_descriptor};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ResolveCommand {
    /// Built-in target to render with (ignores glossa.toml)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Path to glossa.toml (defaults to ./glossa.toml)
    #[arg(short, long, default_value_os_t = default_config())]
    pub config: PathBuf,

    /// Type expressions, e.g. `integer`, `integer:int64`, `array<Pet>`, `map<array<long>>`
    #[arg(required = true)]
    pub types: Vec<String>,
}

impl ResolveCommand {
    pub fn run(&self) -> Result<()> {
        let descriptor = select_descriptor(self.target.as_deref(), &self.config)?;
        let report = ops::resolve(&descriptor, &self.types)
            .wrap_err_with(|| format!("cannot render types for '{}'", descriptor.name()))?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
