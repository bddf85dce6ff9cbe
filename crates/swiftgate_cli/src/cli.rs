//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// swiftgate - SwiftLint gatekeeper for code review
#[derive(Parser)]
#[command(name = "swiftgate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (JSONC)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run against a changeset supplied by a CI host
    Ci {
        /// Path to the changeset JSON handed over by the host
        changeset: PathBuf,

        #[command(flatten)]
        lint: LintFlags,
    },

    /// Run against local uncommitted/unpushed changes
    Local {
        /// Base ref to diff against
        #[arg(long, default_value = "main")]
        base: String,

        #[command(flatten)]
        lint: LintFlags,
    },

    /// Run against a pull request's merge base
    Pr {
        /// Remote ref the pull request targets
        #[arg(long, default_value = "origin/main")]
        base: String,

        #[command(flatten)]
        lint: LintFlags,
    },

    /// Print the resolved configuration
    Edit,
}

/// Per-run overrides of the configured lint behavior.
#[derive(Debug, Clone, clap::Args)]
pub struct LintFlags {
    /// Escalate every violation to a failure
    #[arg(long)]
    pub strict: bool,

    /// Report violations inline where they anchor to the diff
    #[arg(long)]
    pub inline: bool,

    /// Pass --quiet to SwiftLint
    #[arg(long)]
    pub quiet: bool,

    /// Path to the SwiftLint executable (overrides the config file)
    #[arg(long)]
    pub swiftlint: Option<String>,
}
