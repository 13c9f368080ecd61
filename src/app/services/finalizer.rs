//! Catalog finalization
//!
//! The last pipeline stage: annotate each record with image presence and
//! apply the canonical ordering. Records with a photo sort before records
//! without one; ties break on the name, plain lexicographic.

use tracing::debug;

use crate::app::adapters::image_store::ImageStore;
use crate::app::models::Product;

/// Annotate image presence and apply the canonical sort
pub fn finalize(mut products: Vec<Product>, image_store: &dyn ImageStore) -> Vec<Product> {
    for product in &mut products {
        let key = format!("{}.jpg", product.sku.trim());
        product.has_image = image_store.exists(&key);
    }

    let with_image = products.iter().filter(|p| p.has_image).count();
    debug!(
        "Finalized {} products ({} with image)",
        products.len(),
        with_image
    );

    products.sort_by(|a, b| {
        (!a.has_image)
            .cmp(&!b.has_image)
            .then_with(|| a.name.cmp(&b.name))
    });
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::adapters::image_store::DirectoryImageStore;
    use tempfile::TempDir;

    fn product(sku: &str, name: &str) -> Product {
        let mut product = Product::empty();
        product.sku = sku.to_string();
        product.name = name.to_string();
        product
    }

    #[test]
    fn test_imaged_records_sort_first() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("B2.jpg"), b"jpeg").unwrap();
        let store = DirectoryImageStore::new(temp_dir.path());

        let products = vec![
            product("A1", "Areia Sanitária"),
            product("B2", "Zzz Brinquedo"),
            product("C3", "Coleira"),
        ];
        let finalized = finalize(products, &store);

        // B2 has an image and jumps the alphabetical records without one
        assert_eq!(finalized[0].sku, "B2");
        assert!(finalized[0].has_image);
        assert_eq!(finalized[1].sku, "A1");
        assert_eq!(finalized[2].sku, "C3");
    }

    #[test]
    fn test_name_breaks_ties_within_image_group() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectoryImageStore::new(temp_dir.path());

        let products = vec![
            product("X1", "Ração B"),
            product("X2", "Ração A"),
            product("X3", "Ração C"),
        ];
        let finalized = finalize(products, &store);

        let names: Vec<&str> = finalized.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ração A", "Ração B", "Ração C"]);
    }

    #[test]
    fn test_image_lookup_trims_sku() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("T1.jpg"), b"jpeg").unwrap();
        let store = DirectoryImageStore::new(temp_dir.path());

        let finalized = finalize(vec![product(" T1 ", "Tapete")], &store);
        assert!(finalized[0].has_image);
    }
}
