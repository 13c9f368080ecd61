//! Price history mining over backup snapshots
//!
//! Every upload leaves a timestamped copy of the previous export in the
//! backups directory. A history query scans the newest snapshots for the
//! first line mentioning the SKU and pulls the first field shaped like a
//! comma-decimal price out of it. Snapshots that cannot be read, named, or
//! parsed are skipped individually; a history query never fails as a whole.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use crate::app::models::PricePoint;
use crate::constants::{
    BACKUP_EXTENSION, BACKUP_PREFIX, BACKUP_TIMESTAMP_FORMAT, HISTORY_BACKUP_LIMIT,
    HISTORY_DATE_FORMAT,
};
use crate::{Error, Result};

/// Fields shaped like an integer-comma-two-decimals price
static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+,\d{2}$").expect("static price pattern must compile"));

/// Scanner for timestamped backup snapshots
#[derive(Debug, Clone)]
pub struct HistoryMiner {
    backups_dir: PathBuf,
}

impl HistoryMiner {
    /// Create a miner over the given backups directory
    pub fn new(backups_dir: impl Into<PathBuf>) -> Self {
        Self {
            backups_dir: backups_dir.into(),
        }
    }

    /// Collect the price history of a SKU, oldest first
    ///
    /// Considers at most the newest snapshots (by filename, which embeds the
    /// timestamp) up to the history limit. Per-file failures skip that file
    /// only.
    pub fn product_history(&self, sku: &str) -> Vec<PricePoint> {
        if !self.backups_dir.exists() {
            debug!(
                "Backups directory missing: {}",
                self.backups_dir.display()
            );
            return Vec::new();
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.backups_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == BACKUP_EXTENSION)
            })
            .collect();

        // Newest first; the timestamp in the name makes this chronological
        files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
        files.truncate(HISTORY_BACKUP_LIMIT);

        let mut history = Vec::new();
        for path in &files {
            match scan_snapshot(path, sku) {
                Ok(Some(point)) => history.push(point),
                Ok(None) => {}
                Err(error) => {
                    debug!("Skipping backup {}: {}", path.display(), error);
                }
            }
        }

        // Output is chronological ascending
        history.reverse();
        history
    }
}

/// Pull the price of a SKU out of one snapshot, if present
fn scan_snapshot(path: &Path, sku: &str) -> Result<Option<PricePoint>> {
    let date = snapshot_date(path)?;

    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    let content = String::from_utf8_lossy(&bytes);

    if !content.contains(sku) {
        return Ok(None);
    }

    for line in content.lines() {
        if !line.contains(sku) {
            continue;
        }
        // First line mentioning the SKU decides; parse it quote-aware
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes());
        if let Some(Ok(record)) = reader.records().next() {
            for field in record.iter() {
                let candidate = field.trim();
                if PRICE_PATTERN.is_match(candidate) {
                    return Ok(Some(PricePoint {
                        date,
                        price: candidate.to_string(),
                    }));
                }
            }
        }
        break;
    }

    Ok(None)
}

/// Parse the embedded timestamp of a snapshot filename into a display date
fn snapshot_date(path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::data_validation("Backup filename is not valid UTF-8"))?;

    let stamp = file_name
        .strip_prefix(BACKUP_PREFIX)
        .unwrap_or(file_name)
        .strip_suffix(&format!(".{BACKUP_EXTENSION}"))
        .unwrap_or(file_name);

    let timestamp = NaiveDateTime::parse_from_str(stamp, BACKUP_TIMESTAMP_FORMAT)
        .map_err(|e| Error::timestamp_parsing(format!("Bad backup name '{file_name}'"), e))?;

    Ok(timestamp.format(HISTORY_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_backup(dir: &Path, stamp: &str, content: &str) {
        std::fs::write(dir.join(format!("estoque_{stamp}.csv")), content).unwrap();
    }

    #[test]
    fn test_history_is_chronological_ascending() {
        let temp_dir = TempDir::new().unwrap();
        write_backup(temp_dir.path(), "2024-01-05_10-00-00", "x,SKU7,Item,2,a,\"10,00\"\n");
        write_backup(temp_dir.path(), "2024-02-05_10-00-00", "x,SKU7,Item,2,a,\"12,50\"\n");
        write_backup(temp_dir.path(), "2024-03-05_10-00-00", "x,SKU7,Item,2,a,\"15,00\"\n");

        let miner = HistoryMiner::new(temp_dir.path());
        let history = miner.product_history("SKU7");

        assert_eq!(history.len(), 3);
        assert_eq!(history[0], PricePoint { date: "05/01/2024".to_string(), price: "10,00".to_string() });
        assert_eq!(history[1].price, "12,50");
        assert_eq!(history[2], PricePoint { date: "05/03/2024".to_string(), price: "15,00".to_string() });
    }

    #[test]
    fn test_history_caps_at_ten_newest() {
        let temp_dir = TempDir::new().unwrap();
        for day in 1..=12 {
            let stamp = format!("2024-01-{day:02}_08-00-00");
            write_backup(temp_dir.path(), &stamp, "x,SKU9,Item,1,a,\"9,99\"\n");
        }

        let miner = HistoryMiner::new(temp_dir.path());
        let history = miner.product_history("SKU9");

        assert_eq!(history.len(), 10);
        // The two oldest snapshots fall outside the window
        assert_eq!(history[0].date, "03/01/2024");
        assert_eq!(history[9].date, "12/01/2024");
    }

    #[test]
    fn test_bad_snapshot_names_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        write_backup(temp_dir.path(), "2024-01-05_10-00-00", "x,SKU1,Item,1,a,\"5,00\"\n");
        std::fs::write(temp_dir.path().join("notes.csv"), "x,SKU1,Item,1,a,\"6,00\"\n").unwrap();

        let miner = HistoryMiner::new(temp_dir.path());
        let history = miner.product_history("SKU1");

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].price, "5,00");
    }

    #[test]
    fn test_snapshot_without_sku_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        write_backup(temp_dir.path(), "2024-01-05_10-00-00", "x,OTHER,Item,1,a,\"5,00\"\n");

        let miner = HistoryMiner::new(temp_dir.path());
        assert!(miner.product_history("SKU1").is_empty());
    }

    #[test]
    fn test_first_matching_line_and_field_win() {
        let temp_dir = TempDir::new().unwrap();
        let content = "header line\n\
                       x,SKU3,Item A,1,note,\"7,25\",\"3,10\"\n\
                       x,SKU3,Item B,1,note,\"8,00\"\n";
        write_backup(temp_dir.path(), "2024-01-05_10-00-00", content);

        let miner = HistoryMiner::new(temp_dir.path());
        let history = miner.product_history("SKU3");

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].price, "7,25");
    }

    #[test]
    fn test_missing_backups_directory_yields_empty_history() {
        let miner = HistoryMiner::new("/nonexistent/backups");
        assert!(miner.product_history("SKU1").is_empty());
    }
}
