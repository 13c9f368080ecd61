//! Application constants for the catalog processor
//!
//! This module contains the layout markers, bounds, and naming conventions
//! used throughout the catalog processing pipeline.

// =============================================================================
// Export Shape Detection
// =============================================================================

/// Header cells that mark a standard-shape export (exact, case-sensitive)
pub const STANDARD_MARKER_COLUMNS: &[&str] = &["SKU", "Name"];

/// Number of lines read when sniffing the export shape
pub const SNIFF_PROBE_LINES: usize = 5;

/// Candidate delimiters considered during sniffing, in preference order
pub const CANDIDATE_DELIMITERS: &[u8] = &[b',', b';', b'\t', b'|'];

// =============================================================================
// Raw Export Layout
// =============================================================================

/// Literal marker that anchors the positional layout of a raw export
pub const RAW_ANCHOR_MARKER: &str = "Valor Custo";

/// Labels that identify a repeated header row at the SKU offset
/// (compared case-insensitively)
pub const RAW_HEADER_LABELS: &[&str] = &["sku", "código", "codigo", "code"];

/// Department tag embedded in raw cells ("Departamento: Rações")
pub const DEPARTMENT_TAG: &str = "Departamento";

/// Category assigned when no department tag is present in a row
pub const DEFAULT_CATEGORY: &str = "Geral";

/// Positional field offsets relative to the anchor column in a raw export
pub mod raw_offsets {
    /// Product code
    pub const SKU: usize = 1;

    /// Product name / description text
    pub const DESCRIPTION: usize = 2;

    /// Units in stock
    pub const STOCK: usize = 3;

    /// Sale price (comma-decimal)
    pub const PRICE: usize = 5;

    /// Acquisition cost (comma-decimal)
    pub const COST: usize = 6;

    /// Cells a row must carry beyond the anchor column to cover every offset
    pub const REQUIRED_WIDTH_BEYOND_ANCHOR: usize = 7;
}

// =============================================================================
// Enrichment
// =============================================================================

/// Storefront name stamped into generated descriptions
pub const STORE_NAME: &str = "AquaFlora Agroshop";

/// Weight acceptance bounds in kilograms (exclusive low, inclusive high)
pub const WEIGHT_MIN_KG: f64 = 0.001;
pub const WEIGHT_MAX_KG: f64 = 50.0;

// =============================================================================
// Backup Snapshots
// =============================================================================

/// Backup snapshot filename prefix (estoque_2024-03-01_18-30-00.csv)
pub const BACKUP_PREFIX: &str = "estoque_";

/// Backup snapshot filename extension
pub const BACKUP_EXTENSION: &str = "csv";

/// Timestamp layout embedded in backup filenames
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Date layout used in history output
pub const HISTORY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Newest backup snapshots considered per history query
pub const HISTORY_BACKUP_LIMIT: usize = 10;
