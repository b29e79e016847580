//! Implementation of a build run.
//!
//! Wires the real process runner and the captured environment into the
//! library pipeline, then reports how the run ended.

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use buildfile_lib::config::BuildConfig;
use buildfile_lib::driver::{self, BuildOutcome};
use buildfile_lib::env::ProcessEnv;
use buildfile_lib::execute::{CommandRunner, CommandStatus, Invocation, SystemRunner};
use buildfile_lib::platform::{self, Os};

use crate::output::{format_duration, print_command, print_stat, print_success, print_warning};

/// Execute the full build.
///
/// Runs install, configure, compile and post-build in order. A missing
/// executable is reported as a warning and still counts as success.
pub fn cmd_build(config: &BuildConfig) -> Result<()> {
  let start = Instant::now();
  let os = host_os();

  info!(os = %os, arch = platform::arch(), "detected platform");
  info!(cwd = %config.source_dir.display(), "source directory");

  let env = ProcessEnv::capture().for_platform(os);
  let runner = EchoRunner(SystemRunner);

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let outcome = rt
    .block_on(driver::run(&runner, config, &env, os))
    .context("Build failed")?;

  println!();
  match &outcome {
    BuildOutcome::ArtifactRan { path } => print_success(&format!("Ran {}", path.display())),
    BuildOutcome::ArtifactNotFound { path } => {
      print_warning(&format!("Executable not found: {}", path.display()));
      print_success("Build complete");
    }
  }
  print_stat("Build type", config.build_type.as_str());
  print_stat("Preset", &config.preset);
  print_stat("Duration", &format_duration(start.elapsed()));

  Ok(())
}

fn host_os() -> Os {
  platform::os().unwrap_or_else(|| {
    warn!(os = std::env::consts::OS, "unsupported host OS, using Linux conventions");
    Os::Linux
  })
}

/// Prints each command line before handing it to the wrapped runner.
struct EchoRunner<R>(R);

impl<R: CommandRunner + Sync> CommandRunner for EchoRunner<R> {
  async fn run(&self, invocation: &Invocation, env: &ProcessEnv) -> io::Result<CommandStatus> {
    print_command(&invocation.to_string());
    self.0.run(invocation, env).await
  }
}
