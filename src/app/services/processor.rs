//! Catalog processing orchestration
//!
//! `CatalogProcessor` is the entry point the outer layers call per request:
//! it checks the cache against the source file's modification time, sniffs
//! the export shape on a miss, runs the matching adapter, finalizes the
//! catalog, and caches the result. Statistics and price history are served
//! from the same instance.
//!
//! Failure philosophy: a missing or unrecognizable source yields an empty
//! catalog with diagnostics, adapter-internal failures degrade the same way,
//! and only unexpected I/O after the existence check surfaces as an error.

use std::sync::Arc;
use serde::Serialize;
use tracing::{info, warn};

use crate::app::adapters::image_store::{DirectoryImageStore, ImageStore};
use crate::app::models::{PricePoint, Product};
use crate::app::services::catalog_cache::CatalogCache;
use crate::app::services::catalog_parser::{self, ExportShape, ParseResult, ParseStats};
use crate::app::services::finalizer;
use crate::app::services::history_miner::HistoryMiner;
use crate::app::services::stats_aggregator::{self, BasicStats, DashboardStats};
use crate::config::CatalogConfig;
use crate::{Error, Result};

/// A finalized catalog with its parsing diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    /// Finalized, canonically ordered records
    pub products: Vec<Product>,

    /// Diagnostics from the parse that produced this catalog
    pub stats: ParseStats,
}

impl CatalogSnapshot {
    /// Number of records in the catalog
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog carries no records
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Catalog processor for inventory exports
pub struct CatalogProcessor {
    config: CatalogConfig,
    image_store: Arc<dyn ImageStore>,
    cache: CatalogCache,
}

impl CatalogProcessor {
    /// Create a processor over the configured filesystem layout
    pub fn new(config: CatalogConfig) -> Self {
        let image_store = Arc::new(DirectoryImageStore::new(&config.images_dir));
        Self::with_image_store(config, image_store)
    }

    /// Create a processor with an explicit image store
    pub fn with_image_store(config: CatalogConfig, image_store: Arc<dyn ImageStore>) -> Self {
        Self {
            config,
            image_store,
            cache: CatalogCache::new(),
        }
    }

    /// Produce the finalized catalog for the current source file
    ///
    /// Returns the cached snapshot when the source has not changed since the
    /// last run; otherwise reprocesses the file wholesale. A missing source
    /// yields an empty snapshot and is not cached, so the catalog reappears
    /// as soon as the file does.
    pub fn process(&self) -> Result<Arc<CatalogSnapshot>> {
        let path = &self.config.data_file;

        if !path.exists() {
            info!("Source file missing: {}", path.display());
            return Ok(Arc::new(CatalogSnapshot {
                products: Vec::new(),
                stats: {
                    let mut stats = ParseStats::new();
                    stats.add_error(format!("Source file missing: {}", path.display()));
                    stats
                },
            }));
        }

        let mtime = std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(|e| Error::io(format!("Failed to stat {}", path.display()), e))?;

        if let Some(snapshot) = self.cache.lookup(mtime) {
            return Ok(snapshot);
        }

        let sniff = catalog_parser::sniff(path);
        let parsed = match sniff.shape {
            ExportShape::Standard => catalog_parser::standard::parse_standard(path, sniff.delimiter),
            ExportShape::Raw => catalog_parser::raw::parse_raw(path),
        };

        // Adapter failures degrade to an empty catalog with diagnostics;
        // the batch itself never aborts
        let ParseResult { products, stats } = parsed.unwrap_or_else(|error| {
            warn!("Adapter failed for {}: {}", path.display(), error);
            ParseResult::empty_with_error(error.to_string())
        });

        let products = finalizer::finalize(products, self.image_store.as_ref());

        info!(
            "Processed {}: {} products ({} rows dropped, {} numeric defaults)",
            path.display(),
            products.len(),
            stats.rows_dropped(),
            stats.numeric_defaults
        );

        let snapshot = Arc::new(CatalogSnapshot { products, stats });
        self.cache.store(mtime, Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Listing-screen statistics over the current catalog
    pub fn basic_stats(&self) -> Result<BasicStats> {
        let snapshot = self.process()?;
        Ok(stats_aggregator::basic_stats(&snapshot.products))
    }

    /// Dashboard statistics over the current catalog
    pub fn dashboard_stats(&self) -> Result<DashboardStats> {
        let snapshot = self.process()?;
        Ok(stats_aggregator::dashboard_stats(&snapshot.products))
    }

    /// Price history of one SKU, mined from backup snapshots
    ///
    /// History failures are fully suppressed; an unreadable backups
    /// directory reads as no history.
    pub fn product_history(&self, sku: &str) -> Vec<PricePoint> {
        HistoryMiner::new(&self.config.backups_dir).product_history(sku)
    }

    /// The configuration this processor operates over
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn raw_export() -> String {
        "relatorio,ignorado\n\
         Loja,Departamento: Rações,Valor Custo,SKU,Descricao,Estoque,Unid,Preco,Custo\n\
         Loja,Departamento: Rações,\"123,45\",SKU001,Racao Golden 10kg,5,Un,\"89,90\",\"45,50\"\n\
         Loja,Departamento: Aquarismo,\"3,20\",SKU002,Bomba Sarlo Better 100,2,Un,\"55,00\",\"30,00\"\n"
            .to_string()
    }

    fn processor_for(temp_dir: &TempDir) -> CatalogProcessor {
        let config = CatalogConfig::new(
            temp_dir.path().join("estoque_atual.csv"),
            temp_dir.path().join("images"),
        );
        CatalogProcessor::new(config)
    }

    #[test]
    fn test_missing_source_yields_empty_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let processor = processor_for(&temp_dir);

        let snapshot = processor.process().unwrap();
        assert!(snapshot.is_empty());
        assert!(!snapshot.stats.errors.is_empty());
    }

    #[test]
    fn test_raw_export_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("estoque_atual.csv"), raw_export()).unwrap();
        let processor = processor_for(&temp_dir);

        let snapshot = processor.process().unwrap();
        assert_eq!(snapshot.product_count(), 2);

        let golden = snapshot
            .products
            .iter()
            .find(|p| p.sku == "SKU001")
            .unwrap();
        assert_eq!(golden.name, "Ração Golden 10kg");
        assert_eq!(golden.regular_price, "89.90");
        assert_eq!(golden.cost, "45.50");
        assert_eq!(golden.stock, "5");
        assert_eq!(golden.brand, "Golden");
        assert_eq!(golden.weight_kg, "10.000");
        assert_eq!(golden.categories, "Rações");
    }

    #[test]
    fn test_cache_returns_same_snapshot_until_touched() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join("estoque_atual.csv");
        std::fs::write(&data_file, raw_export()).unwrap();
        let processor = processor_for(&temp_dir);

        let first = processor.process().unwrap();
        let second = processor.process().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        // Bump the modification time without rewriting content
        let file = File::options().write(true).open(&data_file).unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(10))
            .unwrap();
        drop(file);

        let third = processor.process().unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(first.product_count(), third.product_count());
    }

    #[test]
    fn test_standard_export_routes_without_enrichment() {
        let temp_dir = TempDir::new().unwrap();
        let content = "SKU,Name,Regular price,Stock\nA1,Produto Pronto,10.00,4\n";
        std::fs::write(temp_dir.path().join("estoque_atual.csv"), content).unwrap();
        let processor = processor_for(&temp_dir);

        let snapshot = processor.process().unwrap();
        assert_eq!(snapshot.product_count(), 1);
        let product = &snapshot.products[0];
        assert_eq!(product.sku, "A1");
        assert_eq!(product.name, "Produto Pronto");
        // Standard rows pass through untouched
        assert_eq!(product.brand, "");
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_stats_and_history_accessors() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("estoque_atual.csv"), raw_export()).unwrap();
        let backups = temp_dir.path().join("backups");
        std::fs::create_dir_all(&backups).unwrap();
        std::fs::write(
            backups.join("estoque_2024-01-05_10-00-00.csv"),
            "x,SKU001,Racao,5,a,\"79,90\"\n",
        )
        .unwrap();

        let processor = processor_for(&temp_dir);

        let stats = processor.basic_stats().unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.in_stock, 2);

        let history = processor.product_history("SKU001");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].price, "79,90");
    }
}
