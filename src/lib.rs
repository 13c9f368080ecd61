//! Estoque Processor Library
//!
//! A Rust library for turning raw retail inventory spreadsheet exports into a
//! normalized, enriched product catalog.
//!
//! This library provides tools for:
//! - Detecting which of the two known export shapes a source file uses
//! - Recovering fields from positional offsets in vendor ("raw") exports
//! - Repairing garbled Portuguese product names with an ordered rule set
//! - Inferring brand and package weight from product names
//! - Generating deterministic storefront descriptions
//! - Computing stock and valuation statistics over the finalized catalog
//! - Mining historical prices from timestamped backup snapshots

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_cache;
        pub mod catalog_parser;
        pub mod enrichment;
        pub mod finalizer;
        pub mod history_miner;
        pub mod processor;
        pub mod stats_aggregator;
    }
    pub mod adapters {
        pub mod image_store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{PricePoint, Product};
pub use app::services::processor::{CatalogProcessor, CatalogSnapshot};
pub use config::CatalogConfig;

/// Result type alias for catalog processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog processing operations
///
/// Most per-row and per-file failures inside the pipeline degrade to safe
/// defaults and are reported through diagnostics rather than through this
/// enum; these variants cover the boundary failures that cannot.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Source export shape error (missing anchor, unreadable layout)
    #[error("Source format error in file '{file}': {message}")]
    SourceFormat { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Backup timestamp parsing error
    #[error("Timestamp parsing error: {message}")]
    TimestampParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a source format error
    pub fn source_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a timestamp parsing error
    pub fn timestamp_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::TimestampParsing {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::TimestampParsing {
            message: "Timestamp parsing failed".to_string(),
            source: error,
        }
    }
}
