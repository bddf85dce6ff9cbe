//! swiftgate CLI
//!
//! Runs SwiftLint against the files changed in a code review and gates
//! the review on the result.

mod cli;
mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use swiftgate_core::{
    Changeset, Classification, Collaborators, Cwd, Fs, LintConfig, ReportSinks, Shell, lint,
};

use crate::cli::{Cli, Commands, LintFlags};

/// Config files probed when `--config` is not given, in order.
const CONFIG_CANDIDATES: &[&str] = &[".swiftgate.jsonc", ".swiftgate.json"];

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.silent {
        EnvFilter::new("error")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(gated) => {
            if gated {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Ci { changeset, lint } => {
            let json = fs::read_to_string(changeset).into_diagnostic()?;
            let changeset = Changeset::from_json(&json).into_diagnostic()?;
            run_lint(&cli, lint, changeset)
        }
        Commands::Local { base, lint } | Commands::Pr { base, lint } => {
            let mut shell = Shell;
            let changeset = Changeset::from_git(&mut shell, base).into_diagnostic()?;
            info!(
                "Diffed against {}: {} created, {} modified",
                base,
                changeset.created.len(),
                changeset.modified.len()
            );
            run_lint(&cli, lint, changeset)
        }
        Commands::Edit => {
            let config = load_config(&cli, None)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&config).into_diagnostic()?
            );
            Ok(false)
        }
    }
}

fn run_lint(cli: &Cli, flags: &LintFlags, changeset: Changeset) -> Result<bool> {
    let mut config = load_config(cli, flags.swiftlint.as_deref())?;
    config.strict |= flags.strict;
    config.inline |= flags.inline;
    config.quiet |= flags.quiet;

    let mut shell = Shell;
    let fs_effects = Fs;
    let cwd = Cwd;
    let mut collaborators = Collaborators {
        runner: &mut shell,
        reader: &fs_effects,
        deleter: &fs_effects,
        paths: &cwd,
    };

    let mut warn =
        |m: &str, f: &str, l: u64| output::print_annotation(Classification::Warn, m, f, l);
    let mut fail =
        |m: &str, f: &str, l: u64| output::print_annotation(Classification::Fail, m, f, l);
    let mut markdown = |m: &str| output::print_markdown(m);
    let mut sinks = ReportSinks {
        warn: &mut warn,
        fail: &mut fail,
        markdown: &mut markdown,
    };

    let violations = lint(&config, &changeset, &mut collaborators, &mut sinks).into_diagnostic()?;
    Ok(output::summarize(&violations, &config))
}

/// Loads the tool configuration: `--config`, then the conventional
/// filenames, then a bare default when `--swiftlint` pins an executable.
fn load_config(cli: &Cli, swiftlint_override: Option<&str>) -> Result<LintConfig> {
    let mut config = if let Some(path) = &cli.config {
        LintConfig::from_file(path).into_diagnostic()?
    } else if let Some(path) = discover_config() {
        info!("Using config: {}", path.display());
        LintConfig::from_file(&path).into_diagnostic()?
    } else if let Some(swiftlint) = swiftlint_override {
        LintConfig::new(swiftlint)
    } else {
        return Err(miette!(
            "No configuration found. Add {} or pass --swiftlint <path>.",
            CONFIG_CANDIDATES[0]
        ));
    };

    if let Some(swiftlint) = swiftlint_override {
        config.swiftlint_path = swiftlint.to_string();
    }
    Ok(config)
}

fn discover_config() -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}
