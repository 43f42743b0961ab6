//! Bootstrap and start sequencing
//!
//! The lifecycle driver runs a strict blocking sequence: genesis-presence
//! gate, state store probe, one-time bootstrap when the store is fresh, then
//! handoff to the node's start subcommand. On Unix the handoff replaces the
//! controller's process image, so the node's exit status and signal
//! disposition become the container's with nothing in between.

use std::convert::Infallible;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::store;

/// Lifecycle errors
///
/// Every variant is fatal; there is no retry or rollback. Each carries
/// enough to surface the underlying step's exit status untranslated.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The genesis config the image was built with is missing
    #[error("genesis config not found at {}", .0.display())]
    MissingGenesis(PathBuf),

    /// The node binary could not be launched at all
    #[error("failed to launch node binary {}: {source}", .bin.display())]
    Spawn {
        bin: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bootstrap subcommand ran and exited unsuccessfully
    #[error("bootstrap failed: {0}")]
    BootstrapFailed(ExitStatus),
}

impl LifecycleError {
    /// Exit code the controller terminates with for this failure
    ///
    /// Bootstrap failures adopt the child's own code (128+signal when it was
    /// signal-killed); launch failures use the shell's 127/126 convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingGenesis(_) => 1,
            Self::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => 127,
                _ => 126,
            },
            Self::BootstrapFailed(status) => exit_code_of(*status),
        }
    }
}

/// Map an exit status to the code a shell would report for it
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Arguments for the node's bootstrap subcommand
pub fn bootstrap_args(config: &Config) -> Vec<OsString> {
    vec![
        OsString::from("bootstrap"),
        OsString::from("--data-directory"),
        config.data_dir.clone().into_os_string(),
        OsString::from("--accounts-directory"),
        config.accounts_dir.clone().into_os_string(),
        OsString::from("--genesis-path"),
        config.genesis_path.clone().into_os_string(),
    ]
}

/// Arguments for the node's start subcommand
///
/// Passthrough arguments are appended verbatim, in the order received.
pub fn start_args(config: &Config, node_args: &[OsString]) -> Vec<OsString> {
    let mut args = vec![
        OsString::from("start"),
        OsString::from("--rpc-url"),
        OsString::from(&config.rpc_url),
        OsString::from("--data-directory"),
        config.data_dir.clone().into_os_string(),
    ];
    args.extend(node_args.iter().cloned());
    args
}

/// Run the startup lifecycle to handoff
///
/// Returns only on failure: a successful start replaces this process (or,
/// on non-Unix targets, exits with the node's own status after waiting it
/// out). Bootstrap, when it runs, completes or fails strictly before start
/// is attempted; an uninitialized store is never started.
pub fn run(config: &Config, node_args: &[OsString]) -> Result<Infallible, LifecycleError> {
    if !config.genesis_path.exists() {
        return Err(LifecycleError::MissingGenesis(config.genesis_path.clone()));
    }
    print_genesis(config);

    if store::is_initialized(&config.data_dir) {
        info!(data_dir = %config.data_dir.display(), "state store already initialized, skipping bootstrap");
    } else {
        bootstrap(config)?;
    }

    start(config, node_args)
}

/// One-time state store initialization from the genesis config
///
/// Blocking call into the node binary with inherited stdio. The node writes
/// the `db` marker as its final step, so an interrupted bootstrap reads as
/// uninitialized on the next start and gets retried.
fn bootstrap(config: &Config) -> Result<(), LifecycleError> {
    println!("Bootstrapping state store in {}", config.data_dir.display());
    info!(
        data_dir = %config.data_dir.display(),
        accounts_dir = %config.accounts_dir.display(),
        genesis = %config.genesis_path.display(),
        "running bootstrap"
    );

    let status = Command::new(&config.node_bin)
        .args(bootstrap_args(config))
        .status()
        .map_err(|source| LifecycleError::Spawn { bin: config.node_bin.clone(), source })?;

    if !status.success() {
        return Err(LifecycleError::BootstrapFailed(status));
    }

    println!("Bootstrap complete");
    list_accounts(config);
    Ok(())
}

/// Hand off to the node's long-running service loop
fn start(config: &Config, node_args: &[OsString]) -> Result<Infallible, LifecycleError> {
    let args = start_args(config, node_args);
    info!(bin = %config.node_bin.display(), rpc_url = %config.rpc_url, "starting node service");

    let mut cmd = Command::new(&config.node_bin);
    cmd.args(args);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // exec only returns on failure
        let source = cmd.exec();
        Err(LifecycleError::Spawn { bin: config.node_bin.clone(), source })
    }

    #[cfg(not(unix))]
    {
        // No process-image replacement here; the nearest equivalent is to
        // wait out the child and adopt its exit status.
        let status = cmd
            .status()
            .map_err(|source| LifecycleError::Spawn { bin: config.node_bin.clone(), source })?;
        std::process::exit(exit_code_of(status))
    }
}

/// Print the genesis config for operator debugging
///
/// Observability only: an unreadable (e.g. binary) genesis is not an error,
/// the file's existence was already checked.
fn print_genesis(config: &Config) {
    match fs::read_to_string(&config.genesis_path) {
        Ok(contents) => {
            println!("Genesis config ({}):", config.genesis_path.display());
            println!("{contents}");
        }
        Err(e) => {
            debug!(path = %config.genesis_path.display(), error = %e, "genesis config not printable");
        }
    }
}

/// List bootstrap-generated account artifacts for operator debugging
fn list_accounts(config: &Config) {
    match fs::read_dir(&config.accounts_dir) {
        Ok(entries) => {
            println!("Generated account artifacts in {}:", config.accounts_dir.display());
            for entry in entries.flatten() {
                println!("  {}", entry.file_name().to_string_lossy());
            }
        }
        Err(e) => {
            warn!(path = %config.accounts_dir.display(), error = %e, "cannot list accounts directory");
        }
    }
}
