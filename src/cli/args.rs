//! Command-line argument definitions for the catalog processor
//!
//! Defines the CLI surface using the clap derive API: shared filesystem
//! options at the top level and one subcommand per operation the processing
//! core exposes.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CatalogConfig;

/// CLI arguments for the inventory catalog processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "estoque-processor",
    version,
    about = "Turn raw inventory exports into a normalized, enriched product catalog",
    long_about = "Processes the current inventory export into a normalized product \
                  catalog: detects the export shape, recovers fields from positional \
                  offsets, repairs garbled names, infers brand and weight, and serves \
                  stock statistics and per-SKU price history over the result."
)]
pub struct Args {
    /// Current inventory export supplied by the upload service
    #[arg(
        short = 'f',
        long = "data-file",
        value_name = "FILE",
        default_value = "uploads/estoque_atual.csv",
        help = "Path to the current inventory export"
    )]
    pub data_file: PathBuf,

    /// Directory of product images keyed "{SKU}.jpg"
    #[arg(
        long = "images-dir",
        value_name = "PATH",
        default_value = "static/images",
        help = "Directory holding product images"
    )]
    pub images_dir: PathBuf,

    /// Backup snapshot directory
    ///
    /// Defaults to the sibling "backups" directory of the data file.
    #[arg(
        long = "backups-dir",
        value_name = "PATH",
        help = "Directory holding timestamped backup snapshots"
    )]
    pub backups_dir: Option<PathBuf>,

    /// Output format for machine-readable results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the catalog processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process the current export into the finalized catalog
    Process,
    /// Listing-screen statistics over the catalog
    Stats,
    /// Dashboard statistics over the catalog
    Dashboard,
    /// Price history of one SKU mined from backup snapshots
    History {
        /// SKU to look up
        sku: String,
    },
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the processing configuration from the CLI options
    pub fn to_config(&self) -> CatalogConfig {
        let mut config = CatalogConfig::new(&self.data_file, &self.images_dir);
        if let Some(backups_dir) = &self.backups_dir {
            config = config.with_backups_dir(backups_dir);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["estoque-processor", "process"]).unwrap();
        assert_eq!(args.data_file, PathBuf::from("uploads/estoque_atual.csv"));
        assert_eq!(args.images_dir, PathBuf::from("static/images"));
        assert!(args.backups_dir.is_none());
        assert_eq!(args.output_format, OutputFormat::Human);
        assert!(matches!(args.command, Commands::Process));
    }

    #[test]
    fn test_history_takes_a_sku() {
        let args = Args::try_parse_from(["estoque-processor", "history", "SKU001"]).unwrap();
        match args.command {
            Commands::History { sku } => assert_eq!(sku, "SKU001"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_log_level_mapping() {
        let mut args = Args::try_parse_from(["estoque-processor", "stats"]).unwrap();
        assert_eq!(args.get_log_level(), "warn");
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");
    }

    #[test]
    fn test_backups_dir_flows_into_config() {
        let args = Args::try_parse_from([
            "estoque-processor",
            "--data-file",
            "/srv/estoque.csv",
            "--backups-dir",
            "/var/backups",
            "process",
        ])
        .unwrap();
        let config = args.to_config();
        assert_eq!(config.backups_dir, PathBuf::from("/var/backups"));
    }
}
