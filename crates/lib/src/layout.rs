//! Well-known directories of a build run.
//!
//! Every path is derived from the source directory alone, so the same
//! inputs always resolve to the same paths regardless of machine state.

use std::path::{Path, PathBuf};

use crate::config::BuildType;
use crate::consts::{BUILD_DIR, DOCS_DIR, GRAPH_NAME, GRAPHVIZ_DIR};
use crate::platform::Os;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
  source_dir: PathBuf,
}

impl Layout {
  pub fn new(source_dir: impl Into<PathBuf>) -> Self {
    Self {
      source_dir: source_dir.into(),
    }
  }

  pub fn source_dir(&self) -> &Path {
    &self.source_dir
  }

  /// CMake binary directory (`<source>/build`).
  pub fn build_dir(&self) -> PathBuf {
    self.source_dir.join(BUILD_DIR)
  }

  pub fn graphviz_dir(&self) -> PathBuf {
    self.build_dir().join(GRAPHVIZ_DIR)
  }

  /// Graph description written by `cmake --graphviz`.
  pub fn graph_dot(&self) -> PathBuf {
    self.graphviz_dir().join(format!("{}.dot", GRAPH_NAME))
  }

  /// Image rendered from [`Layout::graph_dot`].
  pub fn graph_image(&self) -> PathBuf {
    self.graphviz_dir().join(format!("{}.png", GRAPH_NAME))
  }

  pub fn docs_dir(&self) -> PathBuf {
    self.source_dir.join(DOCS_DIR)
  }

  /// Where the rendered graph is published.
  pub fn docs_graph(&self) -> PathBuf {
    self.docs_dir().join(format!("{}.png", GRAPH_NAME))
  }

  /// Expected location of the built executable: `<build>/<buildType>/<name>[.exe]`.
  pub fn artifact_path(&self, build_type: BuildType, name: &str, os: Os) -> PathBuf {
    self
      .build_dir()
      .join(build_type.as_str())
      .join(os.executable_file_name(name))
  }
}
