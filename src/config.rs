//! Nodestrap configuration types and resolution

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory path.
pub const DATA_DIR_ENV: &str = "NODE_DATA_DIR";
/// Environment variable overriding the accounts directory path.
pub const ACCOUNTS_DIR_ENV: &str = "NODE_ACCOUNTS_DIR";
/// Environment variable overriding the RPC bind address.
pub const RPC_URL_ENV: &str = "NODE_RPC_URL";
/// Environment variable overriding the genesis config path.
pub const GENESIS_PATH_ENV: &str = "NODE_GENESIS_PATH";
/// Environment variable overriding the node executable.
pub const NODE_BIN_ENV: &str = "NODE_BIN";

const DEFAULT_DATA_DIR: &str = "/data";
const DEFAULT_ACCOUNTS_DIR: &str = "/accounts";
const DEFAULT_RPC_URL: &str = "http://0.0.0.0:57291";
const DEFAULT_GENESIS_PATH: &str = "/genesis.toml";
const DEFAULT_NODE_BIN: &str = "node";

/// Effective runtime configuration
///
/// Resolved exactly once at startup and passed by reference into the
/// lifecycle driver; nothing else in the crate reads the environment.
/// Values are taken as-is; malformed paths or URLs are the node binary's
/// to reject through its own argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the persistent state store; holds the `db` marker subpath
    pub data_dir: PathBuf,

    /// Destination for bootstrap-generated account artifacts
    pub accounts_dir: PathBuf,

    /// Address the node binds/advertises for its RPC interface
    pub rpc_url: String,

    /// Genesis configuration consumed once during bootstrap
    pub genesis_path: PathBuf,

    /// Node executable invoked for the bootstrap and start subcommands
    pub node_bin: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            accounts_dir: PathBuf::from(DEFAULT_ACCOUNTS_DIR),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            genesis_path: PathBuf::from(DEFAULT_GENESIS_PATH),
            node_bin: PathBuf::from(DEFAULT_NODE_BIN),
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Self {
        Self::resolve(|key| env::var(key).ok())
    }

    /// Resolve configuration through an injectable lookup
    ///
    /// An override wins only when present and non-empty; an empty value
    /// behaves as if the variable were unset.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| -> String {
            lookup(key).filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string())
        };

        Self {
            data_dir: PathBuf::from(get(DATA_DIR_ENV, DEFAULT_DATA_DIR)),
            accounts_dir: PathBuf::from(get(ACCOUNTS_DIR_ENV, DEFAULT_ACCOUNTS_DIR)),
            rpc_url: get(RPC_URL_ENV, DEFAULT_RPC_URL),
            genesis_path: PathBuf::from(get(GENESIS_PATH_ENV, DEFAULT_GENESIS_PATH)),
            node_bin: PathBuf::from(get(NODE_BIN_ENV, DEFAULT_NODE_BIN)),
        }
    }
}
