//! User-facing message catalog.
//!
//! Every user-visible string is resolved through [`localize`], which falls
//! back to the built-in default when no override is installed. Overrides are
//! read from `~/.config/chanhop/messages.toml`, a flat table of quoted keys:
//!
//! ```toml
//! "switcher.not_found" = "Nichts gefunden."
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

static CATALOG: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Result of loading the message catalog
pub struct CatalogResult {
    pub catalog: HashMap<String, String>,
    pub warning: Option<String>,
}

/// Install the catalog for the lifetime of the process.
///
/// Later calls are no-ops; [`localize`] works without any install by
/// returning defaults, so tests never need to call this.
pub fn install(catalog: HashMap<String, String>) {
    let _ = CATALOG.set(catalog);
}

/// Resolve a message key, falling back to the given default text.
pub fn localize(key: &str, default: &str) -> String {
    CATALOG
        .get()
        .and_then(|catalog| catalog.get(key))
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Loads message overrides from `~/.config/chanhop/messages.toml`.
/// Returns an empty catalog if the file doesn't exist or on parse errors.
pub fn load_catalog() -> CatalogResult {
    let path = catalog_path();

    if !path.exists() {
        return CatalogResult {
            catalog: HashMap::new(),
            warning: None,
        };
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            return CatalogResult {
                catalog: HashMap::new(),
                warning: Some(format!("Failed to read message catalog: {}", e)),
            };
        }
    };

    match toml::from_str::<HashMap<String, String>>(&contents) {
        Ok(catalog) => {
            #[cfg(debug_assertions)]
            log::debug!("Message catalog loaded, {} overrides", catalog.len());
            CatalogResult {
                catalog,
                warning: None,
            }
        }
        Err(e) => CatalogResult {
            catalog: HashMap::new(),
            warning: Some(format!("Invalid message catalog: {}", e)),
        },
    }
}

fn catalog_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("chanhop")
        .join("messages.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_falls_back_to_default() {
        // No catalog installed in tests; every key resolves to its default
        assert_eq!(
            localize("switcher.not_found", "No matches found."),
            "No matches found."
        );
    }

    #[test]
    fn test_flat_catalog_parses() {
        let toml_content = r#"
"switcher.not_found" = "Nichts gefunden."
"switcher.dm" = "(Direktnachricht)"
"#;
        let catalog: HashMap<String, String> = toml::from_str(toml_content).unwrap();
        assert_eq!(
            catalog.get("switcher.not_found").map(String::as_str),
            Some("Nichts gefunden.")
        );
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_nested_tables_rejected() {
        // The catalog is a flat string table; nested tables are a parse error
        let toml_content = r#"
[switcher]
not_found = "Nichts gefunden."
"#;
        let result: Result<HashMap<String, String>, _> = toml::from_str(toml_content);
        assert!(result.is_err());
    }
}
