//! Invocation configuration.
//!
//! A [`BuildConfig`] is assembled once from the command line and is never
//! mutated while the pipeline runs.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::consts::{DEFAULT_EXECUTABLE, DEFAULT_PRESET, DEFAULT_PROFILE};
use crate::layout::Layout;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("unknown build type '{0}' (expected one of: Release, Debug, RelWithDebInfo, MinSizeRel)")]
  UnknownBuildType(String),
}

/// CMake build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildType {
  #[default]
  Release,
  Debug,
  RelWithDebInfo,
  MinSizeRel,
}

impl BuildType {
  pub const ALL: [BuildType; 4] = [
    BuildType::Release,
    BuildType::Debug,
    BuildType::RelWithDebInfo,
    BuildType::MinSizeRel,
  ];

  /// Returns the spelling CMake and conan expect.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Release => "Release",
      Self::Debug => "Debug",
      Self::RelWithDebInfo => "RelWithDebInfo",
      Self::MinSizeRel => "MinSizeRel",
    }
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for BuildType {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|build_type| build_type.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| ConfigError::UnknownBuildType(s.to_string()))
  }
}

/// Options for a single build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
  pub build_type: BuildType,
  /// CMake preset, resolved by CMake from CMakePresets.json / CMakeUserPresets.json
  pub preset: String,
  /// Conan profile used for both the host and the build context
  pub profile: String,
  /// Export the CMake target graph and render it into `docs/`
  pub graphviz: bool,
  /// Base name of the produced executable, without platform suffix
  pub executable_name: String,
  /// Directory holding the conanfile and CMake presets; everything is created beneath it
  pub source_dir: PathBuf,
}

impl BuildConfig {
  /// Create a config with every option at its default.
  pub fn new(source_dir: impl Into<PathBuf>) -> Self {
    Self {
      build_type: BuildType::default(),
      preset: DEFAULT_PRESET.to_string(),
      profile: DEFAULT_PROFILE.to_string(),
      graphviz: false,
      executable_name: DEFAULT_EXECUTABLE.to_string(),
      source_dir: source_dir.into(),
    }
  }

  pub fn layout(&self) -> Layout {
    Layout::new(&self.source_dir)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_type_parses_cmake_spelling() {
    assert_eq!("Release".parse::<BuildType>(), Ok(BuildType::Release));
    assert_eq!("RelWithDebInfo".parse::<BuildType>(), Ok(BuildType::RelWithDebInfo));
    assert_eq!("MinSizeRel".parse::<BuildType>(), Ok(BuildType::MinSizeRel));
  }

  #[test]
  fn build_type_parse_ignores_case() {
    assert_eq!("debug".parse::<BuildType>(), Ok(BuildType::Debug));
    assert_eq!("DEBUG".parse::<BuildType>().unwrap().to_string(), "Debug");
  }

  #[test]
  fn build_type_rejects_unknown() {
    let err = "Fast".parse::<BuildType>().unwrap_err();
    assert_eq!(err, ConfigError::UnknownBuildType("Fast".to_string()));
    assert!(err.to_string().contains("RelWithDebInfo"));
  }

  #[test]
  fn config_defaults() {
    let config = BuildConfig::new("/src/engine");
    assert_eq!(config.build_type, BuildType::Release);
    assert_eq!(config.preset, "default");
    assert_eq!(config.profile, "default");
    assert!(!config.graphviz);
    assert_eq!(config.executable_name, "Engine");
  }
}
