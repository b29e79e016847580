//! Types describing an external command and its result.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

/// A fully formed command line, ready to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: OsString,
  pub args: Vec<OsString>,
  pub cwd: Option<PathBuf>,
}

impl Invocation {
  pub fn new(program: impl Into<OsString>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      cwd: None,
    }
  }

  pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.cwd = Some(dir.into());
    self
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program.to_string_lossy())?;
    for arg in &self.args {
      write!(f, " {}", arg.to_string_lossy())?;
    }
    Ok(())
  }
}

/// How an external command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
  /// Exit code, `None` when the process was terminated by a signal.
  pub code: Option<i32>,
}

impl CommandStatus {
  pub fn from_code(code: i32) -> Self {
    Self { code: Some(code) }
  }

  pub fn success(&self) -> bool {
    self.code == Some(0)
  }
}

impl From<ExitStatus> for CommandStatus {
  fn from(status: ExitStatus) -> Self {
    Self { code: status.code() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_joins_program_and_args() {
    let invocation = Invocation::new("cmake").args(["--build", "--preset", "default"]);
    assert_eq!(invocation.to_string(), "cmake --build --preset default");
  }

  #[test]
  fn display_without_args_is_program() {
    assert_eq!(Invocation::new("/work/build/Release/Engine").to_string(), "/work/build/Release/Engine");
  }

  #[test]
  fn only_zero_is_success() {
    assert!(CommandStatus::from_code(0).success());
    assert!(!CommandStatus::from_code(1).success());
    assert!(!CommandStatus { code: None }.success());
  }
}
