// ⚙️ Browser configuration
//
// Optional JSON file; every field has a default so `{}` is a valid config.
// Command-line flags override file values in main.rs.

use crate::detail::LinkTemplates;
use crate::view_state::{SearchResetPolicy, SortDirection};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Directory holding gen1..gen9 partitions
    pub data_dir: PathBuf,
    pub search_reset: SearchResetPolicy,
    pub initial_sort: SortDirection,
    pub links: LinkTemplates,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            search_reset: SearchResetPolicy::default(),
            initial_sort: SortDirection::default(),
            links: LinkTemplates::default(),
        }
    }
}

impl BrowserConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BrowserConfig::from_json("{}").unwrap();
        assert_eq!(config, BrowserConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.search_reset, SearchResetPolicy::Preserve);
        assert_eq!(config.initial_sort, SortDirection::Ascending);
    }

    #[test]
    fn test_partial_config() {
        let config = BrowserConfig::from_json(
            r#"{
                "search_reset": "clear_on_category_change",
                "initial_sort": "descending",
                "links": { "sprite_base": "https://cdn.example/sprites" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.search_reset, SearchResetPolicy::ClearOnCategoryChange);
        assert_eq!(config.initial_sort, SortDirection::Descending);
        assert_eq!(config.links.sprite_base, "https://cdn.example/sprites");
        assert_eq!(config.links.search_base, LinkTemplates::default().search_base);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(BrowserConfig::from_json(r#"{"search_reset": "sometimes"}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dex.json");
        fs::write(&path, r#"{"data_dir": "/srv/dex"}"#).unwrap();

        let config = BrowserConfig::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/dex"));

        assert!(BrowserConfig::load(&dir.path().join("missing.json")).is_err());
    }
}
