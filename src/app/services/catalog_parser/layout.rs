//! Positional layout recovery for raw exports
//!
//! Raw exports have no named columns. The layout is anchored on the one cell
//! whose text contains the literal "Valor Custo"; every field of interest
//! sits at a fixed offset to its right. The anchor column can drift between
//! uploads (the vendor prepends bookkeeping columns at will), so the index
//! is recomputed from the header row of every file.

use csv::StringRecord;

use crate::constants::{RAW_HEADER_LABELS, raw_offsets};

/// Column positions derived from the anchor cell of one raw export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLayout {
    /// Index of the cell containing the anchor marker
    pub anchor_index: usize,
}

impl RawLayout {
    /// Locate the anchor column in the first parsed row
    pub fn from_header_row(row: &StringRecord) -> Option<Self> {
        row.iter()
            .position(|cell| cell.contains(crate::constants::RAW_ANCHOR_MARKER))
            .map(|anchor_index| Self { anchor_index })
    }

    /// Index of the SKU cell
    pub fn sku_index(&self) -> usize {
        self.anchor_index + raw_offsets::SKU
    }

    /// Index of the product name cell
    pub fn description_index(&self) -> usize {
        self.anchor_index + raw_offsets::DESCRIPTION
    }

    /// Index of the stock cell
    pub fn stock_index(&self) -> usize {
        self.anchor_index + raw_offsets::STOCK
    }

    /// Index of the sale price cell
    pub fn price_index(&self) -> usize {
        self.anchor_index + raw_offsets::PRICE
    }

    /// Index of the acquisition cost cell
    pub fn cost_index(&self) -> usize {
        self.anchor_index + raw_offsets::COST
    }

    /// Minimum number of cells a row needs to cover every offset
    pub fn required_width(&self) -> usize {
        self.anchor_index + raw_offsets::REQUIRED_WIDTH_BEYOND_ANCHOR
    }

    /// Whether a row repeats the export header at the SKU offset
    ///
    /// Some uploads duplicate the header below the anchor line; the cell at
    /// the SKU offset then carries a column label instead of a code.
    pub fn is_repeated_header(&self, row: &StringRecord) -> bool {
        row.get(self.sku_index())
            .map(|cell| RAW_HEADER_LABELS.contains(&cell.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}
