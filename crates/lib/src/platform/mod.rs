//! Host platform detection.
//!
//! Only the operating system family influences the pipeline: it selects the
//! executable suffix, the shape of the compile command and the SDK variables
//! injected into the environment.

mod os;

pub use os::Os;

/// Returns the current operating system
///
/// Returns `None` if the OS is not supported
pub fn os() -> Option<Os> {
  Os::current()
}

/// Returns the CPU architecture name of the host (e.g., "aarch64")
pub fn arch() -> &'static str {
  std::env::consts::ARCH
}
