//! The four pipeline steps.
//!
//! Each step builds its [`Invocation`] with a pure function, so the command
//! lines can be checked without launching anything, and then hands it to the
//! [`CommandRunner`].

use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, info, warn};

use super::types::{BuildOutcome, DriverError};
use crate::config::BuildConfig;
use crate::consts::{BUILD_MISSING_POLICY, CMAKE, CONAN, CPP_STANDARD, DOT};
use crate::env::ProcessEnv;
use crate::execute::{CommandRunner, CommandStatus, Invocation};
use crate::layout::Layout;
use crate::platform::Os;

/// `conan install` against the conanfile in the source directory.
///
/// The same profile is used for the host and the build context.
pub fn install_invocation(config: &BuildConfig) -> Invocation {
  Invocation::new(CONAN)
    .arg("install")
    .arg(config.source_dir.as_os_str())
    .args(["--build", BUILD_MISSING_POLICY])
    .arg(format!("--settings=build_type={}", config.build_type))
    .arg(format!("--settings=compiler.cppstd={}", CPP_STANDARD))
    .arg(format!("--profile:host={}", config.profile))
    .arg(format!("--profile:build={}", config.profile))
    .current_dir(&config.source_dir)
}

pub fn configure_invocation(config: &BuildConfig) -> Invocation {
  let layout = config.layout();
  let invocation = Invocation::new(CMAKE)
    .args(["--preset", config.preset.as_str()])
    .arg(format!("-DCMAKE_BUILD_TYPE={}", config.build_type))
    .current_dir(layout.source_dir());

  if config.graphviz {
    let mut flag = OsString::from("--graphviz=");
    flag.push(layout.graph_dot());
    invocation.arg(flag)
  } else {
    invocation
  }
}

pub fn compile_invocation(config: &BuildConfig, os: Os) -> Invocation {
  let invocation = Invocation::new(CMAKE)
    .args(["--build", "--preset", config.preset.as_str()])
    .current_dir(&config.source_dir);

  if os.needs_build_config() {
    invocation.args(["--config", config.build_type.as_str()])
  } else {
    invocation
  }
}

pub fn graph_render_invocation(layout: &Layout) -> Invocation {
  Invocation::new(DOT)
    .arg("-Tpng")
    .arg(layout.graph_dot())
    .arg("-o")
    .arg(layout.graph_image())
    .current_dir(layout.source_dir())
}

/// Install third-party libraries with conan.
pub async fn install_dependencies<R: CommandRunner>(
  runner: &R,
  config: &BuildConfig,
  env: &ProcessEnv,
) -> Result<(), DriverError> {
  info!(profile = %config.profile, build_type = %config.build_type, "installing dependencies");

  let status = launch(runner, &install_invocation(config), env).await?;
  if !status.success() {
    return Err(DriverError::DependencyInstall { code: status.code });
  }
  Ok(())
}

/// Configure the CMake preset, exporting the target graph when requested.
pub async fn configure_project<R: CommandRunner>(
  runner: &R,
  config: &BuildConfig,
  env: &ProcessEnv,
) -> Result<(), DriverError> {
  info!(preset = %config.preset, build_type = %config.build_type, graphviz = config.graphviz, "configuring");

  if config.graphviz {
    ensure_dir(&config.layout().graphviz_dir()).await?;
  }

  let status = launch(runner, &configure_invocation(config), env).await?;
  if !status.success() {
    return Err(DriverError::Configure { code: status.code });
  }
  Ok(())
}

pub async fn compile_project<R: CommandRunner>(
  runner: &R,
  config: &BuildConfig,
  env: &ProcessEnv,
  os: Os,
) -> Result<(), DriverError> {
  info!(preset = %config.preset, "compiling");

  let status = launch(runner, &compile_invocation(config, os), env).await?;
  if !status.success() {
    return Err(DriverError::Compile { code: status.code });
  }
  Ok(())
}

/// Publish the dependency graph (if exported) and run the built executable.
///
/// A missing executable is logged and reported as
/// [`BuildOutcome::ArtifactNotFound`]; it does not fail the run.
pub async fn post_build<R: CommandRunner>(
  runner: &R,
  config: &BuildConfig,
  env: &ProcessEnv,
  os: Os,
) -> Result<BuildOutcome, DriverError> {
  let layout = config.layout();

  if config.graphviz {
    publish_graph(runner, &layout, env).await?;
  }

  let path = layout.artifact_path(config.build_type, &config.executable_name, os);
  if !path.is_file() {
    warn!(path = %path.display(), "executable not found");
    return Ok(BuildOutcome::ArtifactNotFound { path });
  }

  info!(path = %path.display(), "running executable");

  let invocation = Invocation::new(path.as_os_str()).current_dir(layout.source_dir());
  let status = launch(runner, &invocation, env).await?;
  if !status.success() {
    return Err(DriverError::ArtifactFailed { path, code: status.code });
  }

  Ok(BuildOutcome::ArtifactRan { path })
}

async fn publish_graph<R: CommandRunner>(runner: &R, layout: &Layout, env: &ProcessEnv) -> Result<(), DriverError> {
  let status = launch(runner, &graph_render_invocation(layout), env).await?;
  if !status.success() {
    return Err(DriverError::GraphRender { code: status.code });
  }

  ensure_dir(&layout.docs_dir()).await?;

  let from = layout.graph_image();
  let to = layout.docs_graph();
  tokio::fs::copy(&from, &to)
    .await
    .map_err(|source| DriverError::CopyFile {
      from: from.clone(),
      to: to.clone(),
      source,
    })?;

  info!(path = %to.display(), "dependency graph published");
  Ok(())
}

async fn launch<R: CommandRunner>(
  runner: &R,
  invocation: &Invocation,
  env: &ProcessEnv,
) -> Result<CommandStatus, DriverError> {
  debug!(cmd = %invocation, "running");

  runner.run(invocation, env).await.map_err(|source| DriverError::Spawn {
    program: invocation.program.to_string_lossy().into_owned(),
    source,
  })
}

/// Create `path` and its parents; succeeds if it already exists.
pub(crate) async fn ensure_dir(path: &Path) -> Result<(), DriverError> {
  tokio::fs::create_dir_all(path)
    .await
    .map_err(|source| DriverError::CreateDir {
      path: path.to_path_buf(),
      source,
    })
}
