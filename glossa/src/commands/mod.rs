mod check;
mod completions;
mod info;
mod resolve;
mod targets;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use glossa_codegen::LanguageDescriptor;
use glossa_manifest::{GlossaToml, TargetName};
use info::InfoCommand;
use resolve::ResolveCommand;
use targets::TargetsCommand;
use tracing_subscriber::EnvFilter;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for glossa_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "glossa")]
#[command(version)]
#[command(about = "Inspect and check client code generator target descriptors")]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_tracing(self.verbose);

        match &self.command {
            Commands::Targets(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Resolve(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List available targets
    Targets(TargetsCommand),

    /// Show what a target declares
    Info(InfoCommand),

    /// Render type expressions such as map<array<integer>>
    Resolve(ResolveCommand),

    /// Run descriptor self-checks
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Descriptor selected either by target name or by a glossa.toml.
pub(crate) fn select_descriptor(
    target: Option<&str>,
    config: &Path,
) -> Result<LanguageDescriptor> {
    match target {
        Some(name) => {
            let registry = crate::targets::registry()?;
            // Aliases such as "golang" resolve to the registered name
            let name = name
                .parse::<TargetName>()
                .map(|t| t.as_str())
                .unwrap_or(name);
            Ok(registry.require(name)?.clone())
        }
        None => {
            let file = GlossaToml::open(config).unwrap_or_exit();
            Ok(crate::targets::configure(file.manifest())?)
        }
    }
}

/// Default glossa.toml location.
pub(crate) fn default_config() -> PathBuf {
    PathBuf::from(glossa_manifest::DEFAULT_FILENAME)
}
