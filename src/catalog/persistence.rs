use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Item;

/// Load a catalog from a JSON array of items.
///
/// The result goes through the same validation as any other catalog, so
/// duplicates or missing categories are rejected rather than merged.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let items: Vec<Item> = serde_json::from_str(&content)?;
    Catalog::new(items)
}

/// Save a catalog to a JSON file, preserving item order.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.items())?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::error::OrderError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load_roundtrip() {
        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), default_catalog()).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), default_catalog().len());
        assert_eq!(reloaded.items()[0].name, "noodle-regular-300g");
        assert_eq!(reloaded.position("soup-finish"), Some(18));
    }

    #[test]
    fn test_load_rejects_incomplete_menu() {
        let json = r#"[
            {"name": "noodle-a", "category": "noodle", "calories": 700, "sodium": 5.0, "price": 700, "satisfaction": 100}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(OrderError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_category() {
        let json = r#"[
            {"name": "gyoza", "category": "side_dish", "calories": 300, "sodium": 1.0, "price": 300, "satisfaction": 40}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(load_catalog(file.path()), Err(OrderError::Json(_))));
    }
}
