//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dbflavor - Detect database server flavors and query their capabilities.
#[derive(Debug, Parser)]
#[command(name = "dbflavor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML file with extra signatures and flavor overlays
    #[arg(short, long, global = true, env = "DBFLAVOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the flavor installed under a directory
    Detect(DetectArgs),

    /// Check whether a flavor supports a feature at a version
    Check(CheckArgs),

    /// List flavors, or the features of one flavor
    Features(FeaturesArgs),

    /// Detect a flavor and list everything it supports at its version
    Probe(ProbeArgs),
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DetectArgs {
    /// Installation root (the directory holding bin/ and lib/)
    pub root: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Flavor name (mysql, percona, mariadb, ...)
    pub flavor: String,

    /// Feature name (GTID, roles, ...)
    pub feature: String,

    /// Dotted version, e.g. 8.0.21
    pub version: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `features` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FeaturesArgs {
    /// Show the features of this flavor only
    pub flavor: Option<String>,

    /// Show only these features (comma-separated)
    #[arg(long, value_delimiter = ',', requires = "flavor")]
    pub only: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ProbeArgs {
    /// Installation root; its name may carry the version (mysql-8.0.21-linux)
    pub root: PathBuf,

    /// Version to use instead of the one in the directory name
    #[arg(long = "version", value_name = "VERSION")]
    pub version_override: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check() {
        let cli = Cli::try_parse_from(["dbflavor", "check", "mysql", "GTID", "5.6.9", "--json"])
            .unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.flavor, "mysql");
                assert_eq!(args.feature, "GTID");
                assert_eq!(args.version, "5.6.9");
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_features_only_list() {
        let cli = Cli::try_parse_from(["dbflavor", "features", "mysql", "--only", "GTID,roles"])
            .unwrap();
        match cli.command {
            Commands::Features(args) => {
                assert_eq!(args.flavor.as_deref(), Some("mysql"));
                assert_eq!(args.only, vec!["GTID", "roles"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn only_requires_flavor() {
        assert!(Cli::try_parse_from(["dbflavor", "features", "--only", "GTID"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "dbflavor",
            "detect",
            "/opt/mysql",
            "--quiet",
            "--config",
            "extra.yml",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("extra.yml")));
    }

    #[test]
    fn probe_version_option() {
        let cli =
            Cli::try_parse_from(["dbflavor", "probe", "/opt/mysql", "--version", "8.0.21"]).unwrap();
        match cli.command {
            Commands::Probe(args) => assert_eq!(args.version_override.as_deref(), Some("8.0.21")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["dbflavor"]).is_err());
    }
}
