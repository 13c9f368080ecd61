//! Export shape detection
//!
//! Reads a small probe from the source file, auto-detects the delimiter, and
//! decides whether the file is a standard-shape export (named `SKU` and
//! `Name` columns) or a raw vendor export. Detection never fails: any read
//! or parse problem falls back to the raw shape, whose own anchor check is
//! the final arbiter.

use std::path::Path;
use tracing::debug;

use super::stats::ExportShape;
use crate::constants::{CANDIDATE_DELIMITERS, SNIFF_PROBE_LINES, STANDARD_MARKER_COLUMNS};

/// Outcome of probing a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SniffResult {
    /// Selected export shape
    pub shape: ExportShape,

    /// Detected cell delimiter
    pub delimiter: u8,
}

/// Probe a source file and decide its export shape
pub fn sniff(path: &Path) -> SniffResult {
    let raw_fallback = SniffResult {
        shape: ExportShape::Raw,
        delimiter: b',',
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            debug!("Sniff read failed for {}: {}", path.display(), error);
            return raw_fallback;
        }
    };
    let content = String::from_utf8_lossy(&bytes);

    let probe: Vec<&str> = content.lines().take(SNIFF_PROBE_LINES).collect();
    let delimiter = detect_delimiter(&probe);

    let probe_joined = probe.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(probe_joined.as_bytes());

    let header = match reader.records().next() {
        Some(Ok(record)) => record,
        _ => {
            debug!("Sniff probe unparsable for {}", path.display());
            return raw_fallback;
        }
    };

    let is_standard = STANDARD_MARKER_COLUMNS
        .iter()
        .all(|marker| header.iter().any(|cell| cell == *marker));

    let shape = if is_standard {
        ExportShape::Standard
    } else {
        ExportShape::Raw
    };
    debug!(
        "Sniffed {} as {:?} (delimiter {:?})",
        path.display(),
        shape,
        delimiter as char
    );

    SniffResult { shape, delimiter }
}

/// Pick the most frequent candidate delimiter in the first non-empty line
fn detect_delimiter(probe: &[&str]) -> u8 {
    let Some(line) = probe.iter().find(|line| !line.trim().is_empty()) else {
        return b',';
    };

    let mut best = (b',', 0usize);
    for candidate in CANDIDATE_DELIMITERS.iter().copied() {
        let count = line.bytes().filter(|byte| *byte == candidate).count();
        // strictly greater, so earlier candidates win ties
        if count > best.1 {
            best = (candidate, count);
        }
    }
    if best.1 == 0 { b',' } else { best.0 }
}
