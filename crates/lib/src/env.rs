//! The process environment handed to every external command.
//!
//! The ambient environment is captured once at start-up. On macOS the Vulkan
//! SDK location is injected so that CMake's `FindVulkan` and the loader at run
//! time resolve the same installation.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::consts::DEFAULT_VULKAN_SDK_VERSION;
use crate::platform::Os;

pub const VULKAN_SDK: &str = "VULKAN_SDK";
pub const DYLD_LIBRARY_PATH: &str = "DYLD_LIBRARY_PATH";
/// Explicit SDK root, takes precedence over an ambient `VULKAN_SDK`.
pub const VULKAN_SDK_OVERRIDE: &str = "BUILDFILE_VULKAN_SDK";
/// SDK version used to derive `~/VulkanSDK/<version>/macOS`.
pub const VULKAN_SDK_VERSION: &str = "BUILDFILE_VULKAN_SDK_VERSION";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnv {
  vars: BTreeMap<OsString, OsString>,
}

impl ProcessEnv {
  /// Snapshot the environment of the current process.
  pub fn capture() -> Self {
    Self::from_vars(std::env::vars_os())
  }

  pub fn from_vars<I, K, V>(vars: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
  {
    Self {
      vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }

  /// Apply the platform-specific additions for `os`.
  pub fn for_platform(self, os: Os) -> Self {
    match os {
      Os::MacOs => self.with_vulkan_sdk(),
      Os::Linux | Os::Windows => self,
    }
  }

  pub fn get(&self, key: &str) -> Option<&OsStr> {
    self.vars.get(OsStr::new(key)).map(OsString::as_os_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
    self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
  }

  pub fn len(&self) -> usize {
    self.vars.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vars.is_empty()
  }

  fn non_empty(&self, key: &str) -> Option<&OsStr> {
    self.get(key).filter(|value| !value.is_empty())
  }

  fn vulkan_sdk_root(&self) -> Option<PathBuf> {
    if let Some(sdk) = self.non_empty(VULKAN_SDK_OVERRIDE).or_else(|| self.non_empty(VULKAN_SDK)) {
      return Some(PathBuf::from(sdk));
    }

    let home = self.non_empty("HOME")?;
    let version = self
      .non_empty(VULKAN_SDK_VERSION)
      .map(OsStr::to_os_string)
      .unwrap_or_else(|| OsString::from(DEFAULT_VULKAN_SDK_VERSION));

    Some(PathBuf::from(home).join("VulkanSDK").join(version).join("macOS"))
  }

  fn with_vulkan_sdk(mut self) -> Self {
    let Some(sdk) = self.vulkan_sdk_root() else {
      warn!("HOME is not set, leaving {} unset", VULKAN_SDK);
      return self;
    };

    let mut search_path = sdk.join("lib").into_os_string();
    if let Some(existing) = self.non_empty(DYLD_LIBRARY_PATH) {
      search_path.push(":");
      search_path.push(existing);
    }

    debug!(sdk = %sdk.display(), "injecting Vulkan SDK environment");

    self.vars.insert(VULKAN_SDK.into(), sdk.into_os_string());
    self.vars.insert(DYLD_LIBRARY_PATH.into(), search_path);
    self
  }
}
