//! Read-only product catalog.
//!
//! The cart store reads the catalog exactly once, when it is initialized, and
//! keeps that snapshot for its whole lifetime.
//!
//! Catalogs can be built in memory ([`StaticCatalog::new`]), parsed from JSON
//! or YAML, loaded from a file, or taken from the bundled guitar catalog.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use cartstore_core::{Product, ProductId};
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("catalog lists product {0} more than once")]
    DuplicateProduct(ProductId),
}

/// Source of purchasable products.
pub trait Catalog {
    /// All products, in display order.
    fn products(&self) -> Vec<Product>;
}

impl Catalog for Vec<Product> {
    fn products(&self) -> Vec<Product> {
        self.clone()
    }
}

impl Catalog for [Product] {
    fn products(&self) -> Vec<Product> {
        self.to_vec()
    }
}

/// A fixed list of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Build a catalog from products already in memory.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateProduct` if two products share an ID.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        if let Some(dup) = products.iter().find(|p| !seen.insert(p.id)) {
            return Err(CatalogError::DuplicateProduct(dup.id));
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the text is not a valid product list.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(text)?)
    }

    /// Parse a YAML sequence of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the text is not a valid product list.
    pub fn from_yaml(text: &str) -> Result<Self, CatalogError> {
        Self::new(serde_yaml::from_str(text)?)
    }

    /// Load a catalog file; `.yaml`/`.yml` files are parsed as YAML, anything
    /// else as JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let catalog = if is_yaml {
            Self::from_yaml(&text)?
        } else {
            Self::from_json(&text)?
        };
        tracing::debug!(path = %path.display(), products = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The guitar catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only if the bundled file is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Catalog for StaticCatalog {
    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = StaticCatalog::bundled().unwrap();
        assert_eq!(catalog.len(), 12);

        let first = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(first.name, "Lukather");
        assert!(first.attribute("image").is_some());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r"
- id: 1
  name: Lukather
  price: 299
  image: guitar_01
- id: 2
  name: SRV
  price: 349.5
";
        let catalog = StaticCatalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(ProductId::new(2)).unwrap().price,
            cartstore_core::Price::from_cents(34950)
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "name": "Lukather", "price": 299},
            {"id": 1, "name": "SRV", "price": 349}
        ]"#;
        assert!(matches!(
            StaticCatalog::from_json(json),
            Err(CatalogError::DuplicateProduct(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("catalog.yml");
        std::fs::write(&yaml_path, "- {id: 7, name: Dale, price: 379}\n").unwrap();

        let catalog = StaticCatalog::load(&yaml_path).unwrap();
        assert_eq!(catalog.get(ProductId::new(7)).unwrap().name, "Dale");
    }

    #[test]
    fn test_load_missing_file() {
        let err = StaticCatalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
