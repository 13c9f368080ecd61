//! Export parsing for the two recognized catalog shapes
//!
//! Source files arrive in one of two shapes: a standard export with named
//! `SKU`/`Name` columns, already enriched upstream, or a raw vendor export
//! whose product table must be recovered from positional offsets around an
//! anchor cell.
//!
//! ## Architecture
//!
//! - [`sniffer`] - delimiter auto-detection and shape decision from a probe
//! - [`standard`] - direct parsing of standard-shape exports
//! - [`raw`] - anchor location, layout recovery, and per-row enrichment
//! - [`layout`] - positional offsets relative to the anchor column
//! - [`stats`] - parsing diagnostics and result structures

pub mod layout;
pub mod raw;
pub mod sniffer;
pub mod standard;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use layout::RawLayout;
pub use sniffer::{SniffResult, sniff};
pub use stats::{ExportShape, ParseResult, ParseStats};
