//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod info;
mod output;
mod resolve;
mod targets;

pub use check::{CheckEntry, CheckReport};
pub use info::InfoReport;
pub use output::{Report, TerminalOutput};
pub use resolve::{ResolveReport, ResolvedType};
pub use targets::{TargetSummary, TargetsReport};

#[cfg(test)]
pub use output::BufferOutput;
