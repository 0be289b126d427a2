//! Catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::catalog::{CatalogDocument, CatalogError, PricingCatalog};

/// Where the pricing tables come from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// YAML catalog document; built-in tables when absent
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Builds the catalog from the configured source
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, parsed, or is
    /// incomplete.
    pub fn load(&self, promotion_enabled: bool) -> Result<PricingCatalog, CatalogError> {
        match &self.path {
            Some(path) => {
                let doc = CatalogDocument::from_path(path)?;
                let catalog = PricingCatalog::from_document(doc, promotion_enabled)?;
                tracing::info!(
                    path = %path.display(),
                    overrides = catalog.override_count(),
                    promotion_enabled,
                    "Catalog loaded from file"
                );
                Ok(catalog)
            }
            None => {
                tracing::info!(promotion_enabled, "Using built-in catalog");
                Ok(PricingCatalog::standard(promotion_enabled))
            }
        }
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            if !path.is_file() {
                return Err(ValidationError::CatalogFileMissing(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_uses_builtin_tables() {
        let catalog = CatalogConfig::default().load(false).unwrap();
        assert_eq!(catalog, PricingCatalog::standard(false));
    }

    #[test]
    fn test_missing_file_fails_validation() {
        let config = CatalogConfig {
            path: Some(PathBuf::from("/no/such/catalog.yaml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::CatalogFileMissing(_))
        ));
        assert!(matches!(config.load(false), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let yaml = PricingCatalog::standard_document().to_yaml().unwrap();
        std::fs::write(&path, yaml).unwrap();

        let config = CatalogConfig { path: Some(path) };
        assert!(config.validate().is_ok());
        assert_eq!(config.load(true).unwrap(), PricingCatalog::standard(true));
    }
}
