//! buildfile-lib: build orchestration for the engine project
//!
//! This crate drives the external toolchain that produces the engine:
//! - `config`: the build type, preset and profile chosen for one run
//! - `env`: the process environment forwarded to every tool
//! - `execute`: the seam over launching external commands
//! - `driver`: the install → configure → compile → post-build pipeline

pub mod config;
pub mod consts;
pub mod driver;
pub mod env;
pub mod execute;
pub mod layout;
pub mod platform;
pub mod util;
