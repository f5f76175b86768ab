//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod generate;
pub mod version;

use std::fs;
use std::path::Path;

use moondoc_docs::registry::{self, SiteRegistry};

use crate::cli::args::{Cli, Commands};
use crate::error::MoondocError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), MoondocError> {
    match cli.command {
        Commands::Generate(args) => generate::run(&args),
        Commands::Check(args) => check::run(&args),
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Load and parse the site registry.
pub(crate) fn load_registry(path: &Path) -> Result<SiteRegistry, MoondocError> {
    let content = fs::read_to_string(path).map_err(|e| {
        MoondocError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read registry {}: {e}", path.display()),
        ))
    })?;

    Ok(registry::parse_registry(&content)?)
}
