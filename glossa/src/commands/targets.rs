use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
    targets,
};

#[derive(Args)]
pub struct TargetsCommand {}

impl TargetsCommand {
    pub fn run(&self) -> Result<()> {
        let registry = targets::registry()?;
        ops::targets(&registry).render(&mut TerminalOutput::new());
        Ok(())
    }
}
