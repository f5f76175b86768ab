//! CLI argument definitions.
//!
//! All Clap derive structs for moondoc command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Content pipeline for the Lua tutorial site.
#[derive(Parser, Debug)]
#[command(name = "moondoc", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "MOONDOC_COLOR")]
    pub color: ColorChoice,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a document source to an MDX page.
    Generate(GenerateArgs),

    /// Lint rendered MDX pages without writing anything.
    Check(CheckArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Generate
// ============================================================================

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the document source YAML.
    #[arg(
        short,
        long,
        default_value = "content/metamethods.yaml",
        env = "MOONDOC_SOURCE"
    )]
    pub source: PathBuf,

    /// Path to write the rendered MDX page.
    #[arg(short, long, default_value = "docs/tutorial/metamethods.mdx")]
    pub output: PathBuf,

    /// Path to the site page registry.
    #[arg(long, default_value = "content/site.yaml", env = "MOONDOC_REGISTRY")]
    pub registry: PathBuf,

    /// Print the page to stdout instead of writing the output file.
    #[arg(long)]
    pub stdout: bool,

    /// Treat lint warnings on the rendered page as errors.
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Check
// ============================================================================

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// MDX files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Path to the site page registry.
    #[arg(long, default_value = "content/site.yaml", env = "MOONDOC_REGISTRY")]
    pub registry: PathBuf,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,

    /// Output format for findings.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Version
// ============================================================================

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
