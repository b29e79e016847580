//! Launching external tools.
//!
//! Every step of the pipeline talks to the outside world through
//! [`CommandRunner`], so tests can substitute a recording fake for the real
//! toolchain.

mod runner;
mod types;

use std::io;

use crate::env::ProcessEnv;

pub use runner::SystemRunner;
pub use types::{CommandStatus, Invocation};

/// Runs one external command to completion.
pub trait CommandRunner {
  /// Launch `invocation` with exactly the variables in `env` and wait for it to exit.
  ///
  /// An `Err` means the process could not be started at all; a started
  /// process that fails is reported through [`CommandStatus`].
  fn run(&self, invocation: &Invocation, env: &ProcessEnv) -> impl Future<Output = io::Result<CommandStatus>> + Send;
}
