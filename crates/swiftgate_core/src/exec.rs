//! Injected collaborators for process and filesystem effects.
//!
//! Every effect the pipeline performs goes through one of these traits so
//! that the whole `lint` call can run against in-memory fakes in tests.
//! There is no process-wide shared runner; a [`Collaborators`] bundle is
//! built once per run and passed to the pieces that need it.

use std::collections::HashMap;
use std::io;
use std::process::Command;

use tracing::debug;

/// Runs an external command and returns its captured stdout.
///
/// `output_file` is a shell redirection target: when set, the command's
/// stdout is routed to that file instead of being meaningful to the
/// caller. Arguments are joined into a single `sh -c` line, so argument
/// values that need quoting must arrive already quoted. Environment
/// values are passed through verbatim and never need quoting.
pub trait CommandRunner {
    fn run(
        &mut self,
        command: &str,
        args: &[String],
        env: &HashMap<String, String>,
        output_file: Option<&str>,
    ) -> io::Result<String>;
}

/// Reads a file into a string.
pub trait FileReader {
    fn read(&self, path: &str) -> io::Result<String>;
}

/// Deletes a file, best effort.
pub trait FileDeleter {
    fn delete(&self, path: &str) -> io::Result<()>;
}

/// Supplies the current working directory as a string.
pub trait PathProvider {
    fn current_path(&self) -> String;
}

/// The full collaborator bundle for one pipeline run.
pub struct Collaborators<'a> {
    pub runner: &'a mut dyn CommandRunner,
    pub reader: &'a dyn FileReader,
    pub deleter: &'a dyn FileDeleter,
    pub paths: &'a dyn PathProvider,
}

/// Production runner: joins the command line and executes it via `sh -c`.
#[derive(Debug, Default)]
pub struct Shell;

impl CommandRunner for Shell {
    fn run(
        &mut self,
        command: &str,
        args: &[String],
        env: &HashMap<String, String>,
        output_file: Option<&str>,
    ) -> io::Result<String> {
        let mut line = String::from(command);
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        if let Some(path) = output_file {
            // The redirect target is not an argument, so it has not been
            // pre-quoted by the caller.
            line.push_str(" > \"");
            line.push_str(path);
            line.push('"');
        }
        debug!("Executing: {}", line);

        let output = Command::new("sh").arg("-c").arg(&line).envs(env).output()?;
        if !output.status.success() {
            debug!("Command exited with {}", output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Production filesystem collaborator.
#[derive(Debug, Default)]
pub struct Fs;

impl FileReader for Fs {
    fn read(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl FileDeleter for Fs {
    fn delete(&self, path: &str) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Production path provider backed by `std::env::current_dir`.
#[derive(Debug, Default)]
pub struct Cwd;

impl PathProvider for Cwd {
    fn current_path(&self) -> String {
        std::env::current_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
