use std::fmt;

/// Operating system families the driver knows how to build on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "darwin",
      Self::Windows => "windows",
    }
  }

  pub fn is_windows(&self) -> bool {
    matches!(self, Self::Windows)
  }

  /// File name of an executable called `name` on this OS.
  pub fn executable_file_name(&self, name: &str) -> String {
    if self.is_windows() {
      format!("{}.exe", name)
    } else {
      name.to_string()
    }
  }

  /// Whether `cmake --build` needs an explicit `--config`.
  ///
  /// The Visual Studio generators are multi-config and ignore
  /// `CMAKE_BUILD_TYPE` at build time.
  pub fn needs_build_config(&self) -> bool {
    self.is_windows()
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn current_returns_supported_os() {
    assert!(Os::current().is_some(), "Current OS should be supported");
  }

  #[test]
  fn executable_suffix_only_on_windows() {
    assert_eq!(Os::Windows.executable_file_name("Engine"), "Engine.exe");
    assert_eq!(Os::Linux.executable_file_name("Engine"), "Engine");
    assert_eq!(Os::MacOs.executable_file_name("Engine"), "Engine");
  }

  #[test]
  fn build_config_flag_only_on_windows() {
    assert!(Os::Windows.needs_build_config());
    assert!(!Os::Linux.needs_build_config());
    assert!(!Os::MacOs.needs_build_config());
  }
}
