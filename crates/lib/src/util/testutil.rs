//! Test utilities for buildfile-lib.
//!
//! Provides a [`CommandRunner`] that records what the pipeline would launch
//! instead of touching the real toolchain.

use std::collections::{HashMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::env::ProcessEnv;
use crate::execute::{CommandRunner, CommandStatus, Invocation};

/// Records invocations and answers with scripted exit codes.
///
/// Every program exits 0 unless configured otherwise. Programs are matched on
/// the exact `program` of the invocation, so the built executable is matched
/// by its full path.
#[derive(Debug, Default)]
pub struct FakeRunner {
  calls: Mutex<Vec<(Invocation, ProcessEnv)>>,
  exit_codes: HashMap<OsString, i32>,
  command_exit_codes: Vec<(String, i32)>,
  outputs: HashMap<OsString, PathBuf>,
  not_installed: HashSet<OsString>,
}

impl FakeRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make `program` exit with `code`.
  pub fn fail(mut self, program: impl AsRef<OsStr>, code: i32) -> Self {
    self.exit_codes.insert(program.as_ref().to_os_string(), code);
    self
  }

  /// Make every call whose rendered command line starts with `prefix` exit with `code`.
  ///
  /// Takes precedence over [`FakeRunner::fail`].
  pub fn fail_command(mut self, prefix: &str, code: i32) -> Self {
    self.command_exit_codes.push((prefix.to_string(), code));
    self
  }

  /// Write an empty file at `path` whenever `program` runs.
  pub fn creates(mut self, program: impl AsRef<OsStr>, path: impl Into<PathBuf>) -> Self {
    self.outputs.insert(program.as_ref().to_os_string(), path.into());
    self
  }

  /// Make launching `program` fail as if it were missing from PATH.
  pub fn not_installed(mut self, program: impl AsRef<OsStr>) -> Self {
    self.not_installed.insert(program.as_ref().to_os_string());
    self
  }

  pub fn calls(&self) -> Vec<Invocation> {
    self.calls.lock().unwrap().iter().map(|(inv, _)| inv.clone()).collect()
  }

  pub fn envs(&self) -> Vec<ProcessEnv> {
    self.calls.lock().unwrap().iter().map(|(_, env)| env.clone()).collect()
  }

  /// Program of every recorded call, in launch order.
  pub fn programs(&self) -> Vec<String> {
    self
      .calls()
      .iter()
      .map(|inv| inv.program.to_string_lossy().into_owned())
      .collect()
  }

  /// Rendered command line of every recorded call, in launch order.
  pub fn command_lines(&self) -> Vec<String> {
    self.calls().iter().map(ToString::to_string).collect()
  }
}

impl CommandRunner for FakeRunner {
  async fn run(&self, invocation: &Invocation, env: &ProcessEnv) -> io::Result<CommandStatus> {
    self.calls.lock().unwrap().push((invocation.clone(), env.clone()));

    if self.not_installed.contains(&invocation.program) {
      return Err(io::Error::from(io::ErrorKind::NotFound));
    }

    if let Some(path) = self.outputs.get(&invocation.program) {
      if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
      }
      std::fs::write(path, b"")?;
    }

    let line = invocation.to_string();
    let code = self
      .command_exit_codes
      .iter()
      .find(|(prefix, _)| line.starts_with(prefix.as_str()))
      .map(|(_, code)| *code)
      .or_else(|| self.exit_codes.get(&invocation.program).copied())
      .unwrap_or(0);
    Ok(CommandStatus::from_code(code))
  }
}
