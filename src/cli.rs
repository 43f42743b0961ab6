//! CLI surface and passthrough arguments

use clap::Parser;
use std::ffi::OsString;

/// Nodestrap - node container startup lifecycle controller
#[derive(Parser, Debug)]
#[command(
    name = "nodestrap",
    about = "Bootstraps the node's state store on first run, then hands off to the node service",
    version,
    after_help = "Configuration comes from NODE_DATA_DIR, NODE_ACCOUNTS_DIR and NODE_RPC_URL;\n\
                  unset or empty variables fall back to built-in defaults."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Arguments forwarded verbatim to the node's start subcommand
    #[arg(
        value_name = "NODE_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub node_args: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["nodestrap"]);
        assert!(!cli.verbose);
        assert!(cli.node_args.is_empty());
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["nodestrap", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_passthrough_keeps_order() {
        let cli = Cli::parse_from(["nodestrap", "--flag", "value", "--other"]);
        assert_eq!(
            cli.node_args,
            vec![
                OsString::from("--flag"),
                OsString::from("value"),
                OsString::from("--other"),
            ]
        );
    }

    #[test]
    fn test_cli_hyphen_args_are_not_parsed() {
        // Unknown flags belong to the node, not to nodestrap
        let cli = Cli::parse_from(["nodestrap", "--rpc.max-connections", "64"]);
        assert_eq!(
            cli.node_args,
            vec![OsString::from("--rpc.max-connections"), OsString::from("64")]
        );
    }

    #[test]
    fn test_cli_verbose_before_passthrough() {
        let cli = Cli::parse_from(["nodestrap", "-v", "--flag"]);
        assert!(cli.verbose);
        assert_eq!(cli.node_args, vec![OsString::from("--flag")]);
    }
}
