//! Pod type catalog
//!
//! The set of plant categories is closed and configured per deployment:
//! every pod's `type` must be one of the catalog's machine values. The
//! catalog ships with a default set and can be loaded from a TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A single plant category: machine value plus display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodType {
    /// Machine value stored on the pod (e.g. "Herb")
    pub value: String,
    /// Human-readable label shown in the UI
    pub label: String,
}

impl PodType {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The closed enumeration of plant categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodTypeCatalog {
    #[serde(rename = "pod_type")]
    types: Vec<PodType>,
}

impl Default for PodTypeCatalog {
    fn default() -> Self {
        Self {
            types: vec![
                PodType::new("Herb", "Herb"),
                PodType::new("Succulent", "Succulent"),
                PodType::new("Flower", "Flower"),
                PodType::new("Vegetable", "Vegetable"),
                PodType::new("Fruit", "Fruit"),
                PodType::new("Tree", "Tree"),
            ],
        }
    }
}

impl PodTypeCatalog {
    pub fn new(types: Vec<PodType>) -> Self {
        Self { types }
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pod type catalog from {}", path.display()))?;
        let catalog: PodTypeCatalog =
            toml::from_str(&content).context("Failed to parse pod type catalog")?;
        info!(
            path = %path.display(),
            count = catalog.types.len(),
            "Loaded pod type catalog"
        );
        Ok(catalog)
    }

    /// Load from file or fall back to the default catalog
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match Self::from_file(path) {
                Ok(catalog) => return catalog,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load pod type catalog, using default");
                }
            }
        }
        Self::default()
    }

    /// Check whether a machine value belongs to the catalog
    pub fn contains(&self, value: &str) -> bool {
        self.types.iter().any(|t| t.value == value)
    }

    /// Look up a category by machine value
    pub fn get(&self, value: &str) -> Option<&PodType> {
        self.types.iter().find(|t| t.value == value)
    }

    /// All categories in display order
    pub fn types(&self) -> &[PodType] {
        &self.types
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = PodTypeCatalog::default();
        assert!(catalog.contains("Herb"));
        assert!(catalog.contains("Succulent"));
        assert!(!catalog.contains("Bonsai"));
        assert_eq!(catalog.get("Herb").unwrap().label, "Herb");
    }

    #[test]
    fn test_catalog_from_toml() {
        let toml = r#"
            [[pod_type]]
            value = "Herb"
            label = "Kitchen herb"

            [[pod_type]]
            value = "Cactus"
            label = "Cactus"
        "#;

        let catalog: PodTypeCatalog = toml::from_str(toml).unwrap();
        assert_eq!(catalog.types().len(), 2);
        assert!(catalog.contains("Cactus"));
        assert_eq!(catalog.get("Herb").unwrap().label, "Kitchen herb");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let catalog = PodTypeCatalog::load_or_default(&dir.path().join("absent.toml"));
        assert_eq!(catalog, PodTypeCatalog::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("types.toml");
        std::fs::write(
            &path,
            "[[pod_type]]\nvalue = \"Fern\"\nlabel = \"Fern\"\n",
        )
        .unwrap();

        let catalog = PodTypeCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.types().len(), 1);
        assert!(catalog.contains("Fern"));
    }
}
