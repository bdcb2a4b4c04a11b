use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{default_config, select_descriptor};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Built-in target to describe (ignores glossa.toml)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Path to glossa.toml (defaults to ./glossa.toml)
    #[arg(short, long, default_value_os_t = default_config())]
    pub config: PathBuf,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let descriptor = select_descriptor(self.target.as_deref(), &self.config)?;
        ops::info(&descriptor).render(&mut TerminalOutput::new());
        Ok(())
    }
}
