//! The build driver.
//!
//! A run is a fixed, fail-fast sequence:
//!
//! 1. install dependencies (`conan install`)
//! 2. configure (`cmake --preset`)
//! 3. compile (`cmake --build`)
//! 4. post-build: publish the dependency graph, run the executable
//!
//! The first failing step aborts the run. Nothing is retried: a half-finished
//! install or build is left for the user to inspect.

mod steps;
mod types;

use tracing::info;

use crate::config::BuildConfig;
use crate::env::ProcessEnv;
use crate::execute::CommandRunner;
use crate::platform::Os;

pub use steps::{
  compile_invocation, compile_project, configure_invocation, configure_project, graph_render_invocation,
  install_dependencies, install_invocation, post_build,
};
pub use types::{BuildOutcome, DriverError};

/// Run the whole pipeline for `config` on a host of family `os`.
pub async fn run<R: CommandRunner>(
  runner: &R,
  config: &BuildConfig,
  env: &ProcessEnv,
  os: Os,
) -> Result<BuildOutcome, DriverError> {
  let layout = config.layout();
  info!(source_dir = %layout.source_dir().display(), os = %os, "starting build");

  steps::ensure_dir(&layout.build_dir()).await?;

  install_dependencies(runner, config, env).await?;
  configure_project(runner, config, env).await?;
  compile_project(runner, config, env, os).await?;
  post_build(runner, config, env, os).await
}
