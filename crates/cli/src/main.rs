use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use buildfile_lib::config::{BuildConfig, BuildType};
use buildfile_lib::consts::{DEFAULT_EXECUTABLE, DEFAULT_PRESET, DEFAULT_PROFILE};
use buildfile_lib::driver::DriverError;

mod cmd;
mod output;

/// buildfile - Engine build driver
///
/// Installs dependencies with conan, configures and compiles with CMake,
/// then runs the built executable.
#[derive(Parser)]
#[command(name = "buildfile")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// One of [Release, Debug, RelWithDebInfo, MinSizeRel]
  #[arg(long = "buildtype", value_name = "TYPE", default_value_t = BuildType::Release)]
  build_type: BuildType,

  /// Preset defined in CMakePresets.json or CMakeUserPresets.json
  #[arg(long, default_value = DEFAULT_PRESET)]
  preset: String,

  /// Conan profile used for both the host and the build context
  #[arg(long, default_value = DEFAULT_PROFILE)]
  profile: String,

  /// Export the CMake dependency graph and render it into docs/
  #[arg(long)]
  graphviz: bool,

  /// Name of the executable to run after a successful build
  #[arg(long = "executable", value_name = "NAME", default_value = DEFAULT_EXECUTABLE)]
  executable_name: String,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  init_tracing(cli.verbose);

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      output::print_error(&format!("{:#}", err));
      ExitCode::from(exit_code(&err))
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let source_dir = std::env::current_dir().context("Failed to determine working directory")?;

  let config = BuildConfig {
    build_type: cli.build_type,
    preset: cli.preset,
    profile: cli.profile,
    graphviz: cli.graphviz,
    executable_name: cli.executable_name,
    source_dir,
  };

  cmd::cmd_build(&config)
}

fn init_tracing(verbose: bool) {
  let default_directive = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

/// Mirror a failing tool's exit code; everything else exits 1.
fn exit_code(err: &anyhow::Error) -> u8 {
  err
    .downcast_ref::<DriverError>()
    .map(DriverError::exit_code)
    .and_then(|code| u8::try_from(code).ok())
    .unwrap_or(1)
}
