//! Application configuration.
//!
//! Loaded once at startup from environment variables with fallback to
//! defaults. The menu only seeds the catalog; nothing is ever written back.
//!
//! | Variable                 | Default                   |
//! |--------------------------|---------------------------|
//! | `BISTRO_RESTAURANT_NAME` | `Bistro Lahore`           |
//! | `BISTRO_MENU_FILE`       | built-in `menu.json`      |

use std::path::{Path, PathBuf};

use bistro_core::{MenuCatalog, MenuEntry};

const DEFAULT_RESTAURANT_NAME: &str = "Bistro Lahore";
const DEFAULT_MENU: &str = include_str!("../menu.json");

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shown in the welcome banner.
    pub restaurant_name: String,

    /// Seed records for the catalog.
    pub menu: Vec<MenuEntry>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let restaurant_name = match lookup("BISTRO_RESTAURANT_NAME") {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidValue(
                    "BISTRO_RESTAURANT_NAME".to_string(),
                ))
            }
            Some(name) => name.trim().to_string(),
            None => DEFAULT_RESTAURANT_NAME.to_string(),
        };

        let menu = match lookup("BISTRO_MENU_FILE") {
            Some(path) => load_menu_file(Path::new(&path))?,
            None => default_menu()?,
        };

        if menu.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }

        Ok(AppConfig {
            restaurant_name,
            menu,
        })
    }

    /// Seeds a catalog from the configured menu.
    pub fn catalog(&self) -> Result<MenuCatalog, bistro_core::CoreError> {
        MenuCatalog::from_entries(self.menu.iter().cloned())
    }
}

fn default_menu() -> Result<Vec<MenuEntry>, ConfigError> {
    serde_json::from_str(DEFAULT_MENU).map_err(|source| ConfigError::MenuFile {
        path: PathBuf::from("<built-in>"),
        reason: source.to_string(),
    })
}

fn load_menu_file(path: &Path) -> Result<Vec<MenuEntry>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::MenuFile {
        path: path.to_path_buf(),
        reason: source.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::MenuFile {
        path: path.to_path_buf(),
        reason: source.to_string(),
    })
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot load menu from {}: {reason}", .path.display())]
    MenuFile { path: PathBuf, reason: String },

    #[error("Menu has no items")]
    EmptyMenu,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.restaurant_name, DEFAULT_RESTAURANT_NAME);

        let catalog = config.catalog().unwrap();
        assert_eq!(
            catalog.find_by_name("Pasta Carbonara").unwrap().price.rupees(),
            1299
        );
        assert_eq!(catalog.find_by_name("Kheer").unwrap().price.rupees(), 799);
    }

    #[test]
    fn test_restaurant_name_override() {
        let config =
            AppConfig::from_lookup(lookup(&[("BISTRO_RESTAURANT_NAME", " Karachi Grill ")]))
                .unwrap();
        assert_eq!(config.restaurant_name, "Karachi Grill");
    }

    #[test]
    fn test_blank_restaurant_name_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("BISTRO_RESTAURANT_NAME", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_missing_menu_file() {
        let err = AppConfig::from_lookup(lookup(&[(
            "BISTRO_MENU_FILE",
            "/definitely/not/here/menu.json",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MenuFile { .. }));
    }

    #[test]
    fn test_menu_file_override() {
        let path = std::env::temp_dir().join(format!("bistro-menu-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"name": "Halwa Puri", "price": 400}]"#).unwrap();

        let config =
            AppConfig::from_lookup(lookup(&[("BISTRO_MENU_FILE", path.to_str().unwrap())]))
                .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.menu, vec![MenuEntry::new("Halwa Puri", 400)]);
    }

    #[test]
    fn test_oversized_menu_price_rejected() {
        let path =
            std::env::temp_dir().join(format!("bistro-big-menu-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"name": "Gold Biryani", "price": 9223372036854775807}]"#)
            .unwrap();

        let config =
            AppConfig::from_lookup(lookup(&[("BISTRO_MENU_FILE", path.to_str().unwrap())]))
                .unwrap();
        std::fs::remove_file(&path).unwrap();

        let err = config.catalog().unwrap_err();
        assert!(matches!(err, bistro_core::CoreError::Validation(_)));
    }

    #[test]
    fn test_empty_menu_file_rejected() {
        let path =
            std::env::temp_dir().join(format!("bistro-empty-menu-{}.json", std::process::id()));
        std::fs::write(&path, "[]").unwrap();

        let err = AppConfig::from_lookup(lookup(&[("BISTRO_MENU_FILE", path.to_str().unwrap())]))
            .unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, ConfigError::EmptyMenu));
    }
}
