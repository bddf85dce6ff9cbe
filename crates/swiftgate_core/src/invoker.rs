//! SwiftLint process invocation.
//!
//! One `lint` call launches SwiftLint at most once, however many files
//! were selected: enumerated files travel as `SCRIPT_INPUT_FILE_*`
//! environment variables, the same batching contract Xcode build phases
//! use. The report is written to a file and read back separately, so the
//! tool's exit status never gates result acquisition.

use std::collections::HashMap;
use std::io;

use tracing::debug;

use crate::exec::CommandRunner;
use crate::style::LintStyle;

/// Builds the SwiftLint argument list.
///
/// Quoting is applied here because the production runner joins arguments
/// into a shell line; environment values (see [`swiftlint_env`]) are
/// never quoted.
pub fn swiftlint_args(style: &LintStyle, config_file: Option<&str>, quiet: bool) -> Vec<String> {
    let mut args = vec!["lint".to_string()];
    if let Some(config) = config_file {
        args.push("--config".to_string());
        args.push(format!("\"{}\"", config));
    }
    if quiet {
        args.push("--quiet".to_string());
    }
    args.push("--reporter".to_string());
    args.push("json".to_string());
    if let LintStyle::AllFiles {
        directory: Some(dir),
    } = style
    {
        args.push("--path".to_string());
        args.push(format!("\"{}\"", dir));
    }
    args
}

/// Builds the `SCRIPT_INPUT_FILE_*` environment for enumerated files.
/// Empty for [`LintStyle::AllFiles`], which lets SwiftLint self-discover.
pub fn swiftlint_env(style: &LintStyle, files: &[String]) -> HashMap<String, String> {
    let mut env = HashMap::new();
    if !style.enumerates_files() {
        return env;
    }
    env.insert(
        "SCRIPT_INPUT_FILE_COUNT".to_string(),
        files.len().to_string(),
    );
    for (i, file) in files.iter().enumerate() {
        env.insert(format!("SCRIPT_INPUT_FILE_{}", i), file.clone());
    }
    env
}

/// Launches SwiftLint exactly once, redirecting its report to
/// `output_file`. Returns the process stdout; the caller reads the
/// report from the file, not from here.
pub fn invoke(
    runner: &mut dyn CommandRunner,
    swiftlint_path: &str,
    files: &[String],
    style: &LintStyle,
    config_file: Option<&str>,
    quiet: bool,
    output_file: &str,
) -> io::Result<String> {
    let args = swiftlint_args(style, config_file, quiet);
    let env = swiftlint_env(style, files);
    debug!(
        "Invoking {} with {} enumerated file(s)",
        swiftlint_path,
        files.len()
    );
    runner.run(swiftlint_path, &args, &env, Some(output_file))
}
