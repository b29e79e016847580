//! Error and outcome types for a build run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures that abort the pipeline.
///
/// Every variant is fatal: once one is returned no later step runs.
#[derive(Debug, Error)]
pub enum DriverError {
  /// `conan install` exited non-zero.
  #[error("dependency installation failed with exit code {code:?}")]
  DependencyInstall { code: Option<i32> },

  /// CMake configure exited non-zero.
  #[error("configure failed with exit code {code:?}")]
  Configure { code: Option<i32> },

  /// `cmake --build` exited non-zero.
  #[error("compile failed with exit code {code:?}")]
  Compile { code: Option<i32> },

  /// `dot` could not render the exported graph.
  #[error("graph rendering failed with exit code {code:?}")]
  GraphRender { code: Option<i32> },

  /// The built executable ran and exited non-zero.
  #[error("{} exited with code {code:?}", path.display())]
  ArtifactFailed { path: PathBuf, code: Option<i32> },

  /// The command could not be started (missing from PATH, not executable, ...).
  #[error("failed to launch {program}: {source}")]
  Spawn { program: String, source: io::Error },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
  CopyFile {
    from: PathBuf,
    to: PathBuf,
    source: io::Error,
  },
}

impl DriverError {
  /// Process exit code that mirrors this failure.
  ///
  /// A tool's own non-zero exit code is passed through; anything else
  /// (signals, spawn and filesystem errors) maps to 1.
  pub fn exit_code(&self) -> i32 {
    let code = match self {
      Self::DependencyInstall { code }
      | Self::Configure { code }
      | Self::Compile { code }
      | Self::GraphRender { code }
      | Self::ArtifactFailed { code, .. } => *code,
      Self::Spawn { .. } | Self::CreateDir { .. } | Self::CopyFile { .. } => None,
    };
    code.filter(|code| *code != 0).unwrap_or(1)
  }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
  /// The executable was found and exited successfully.
  ArtifactRan { path: PathBuf },
  /// Nothing at the expected path. Reported, but not a failure.
  ArtifactNotFound { path: PathBuf },
}

impl BuildOutcome {
  pub fn artifact_path(&self) -> &Path {
    match self {
      Self::ArtifactRan { path } | Self::ArtifactNotFound { path } => path,
    }
  }
}
