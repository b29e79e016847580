//! Runner backed by real child processes.

use std::io;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::{CommandRunner, CommandStatus, Invocation};
use crate::env::ProcessEnv;

/// Spawns commands with inherited stdio, so tool output streams straight to
/// the invoking terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  async fn run(&self, invocation: &Invocation, env: &ProcessEnv) -> io::Result<CommandStatus> {
    let mut command = Command::new(&invocation.program);
    command
      .args(&invocation.args)
      .env_clear()
      .envs(env.iter())
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit());

    if let Some(cwd) = &invocation.cwd {
      command.current_dir(cwd);
    }

    debug!(cmd = %invocation, working_dir = ?invocation.cwd, "spawning process");

    let status = command.status().await?;

    debug!(code = ?status.code(), "process exited");

    Ok(status.into())
  }
}

#[cfg(all(test, unix))]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn sh(script: &str) -> Invocation {
    Invocation::new("/bin/sh").args(["-c", script])
  }

  #[tokio::test]
  async fn reports_exit_code() {
    let status = SystemRunner.run(&sh("exit 3"), &ProcessEnv::default()).await.unwrap();
    assert_eq!(status, CommandStatus::from_code(3));
  }

  #[tokio::test]
  async fn zero_exit_is_success() {
    let status = SystemRunner.run(&sh("true"), &ProcessEnv::default()).await.unwrap();
    assert!(status.success());
  }

  #[tokio::test]
  async fn passes_exactly_the_given_environment() {
    let env = ProcessEnv::from_vars([("BUILDFILE_MARKER", "set")]);
    let script = r#"test "$BUILDFILE_MARKER" = set && test -z "$HOME""#;

    let status = SystemRunner.run(&sh(script), &env).await.unwrap();

    assert!(status.success());
  }

  #[tokio::test]
  async fn runs_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();

    let invocation = Invocation::new("/usr/bin/touch")
      .arg("cwd_marker")
      .current_dir(temp_dir.path());
    SystemRunner.run(&invocation, &ProcessEnv::default()).await.unwrap();

    assert!(temp_dir.path().join("cwd_marker").exists());
  }

  #[tokio::test]
  async fn missing_program_is_spawn_error() {
    let result = SystemRunner
      .run(&Invocation::new("/nonexistent/buildfile-tool"), &ProcessEnv::default())
      .await;

    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
  }
}
