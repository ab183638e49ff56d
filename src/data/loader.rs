use crate::error::LoadError;
use crate::model::Development;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Loads a development from a JSON file.
///
/// The file mirrors the serialized [`Development`]: a `name`, an optional
/// `address` and a `houses` array. Every house must list exactly one floor
/// of each kind and no negative areas; house ids must be unique.
///
/// # Errors
///
/// Returns [`LoadError::FileRead`] if the file cannot be read,
/// [`LoadError::Json`] if it is not a valid development (including malformed
/// houses) and [`LoadError::DuplicateHouse`] if two houses share an id.
///
/// # Example
///
/// ```no_run
/// use floorplan_inspector::data::load_development;
///
/// let development = load_development("houses.json")?;
/// println!("{}: {} houses", development.name, development.total_houses());
/// # Ok::<(), floorplan_inspector::error::LoadError>(())
/// ```
pub fn load_development<P: AsRef<Path>>(path: P) -> Result<Development, LoadError> {
    let path_ref = path.as_ref();
    let content = std::fs::read_to_string(path_ref).map_err(|source| LoadError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let development: Development =
        serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path_ref.to_path_buf(),
            source,
        })?;

    check_unique_ids(&development)?;

    info!(
        path = %path_ref.display(),
        houses = development.total_houses(),
        "loaded development"
    );

    Ok(development)
}

fn check_unique_ids(development: &Development) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for house in &development.houses {
        if !seen.insert(house.id.as_str()) {
            return Err(LoadError::DuplicateHouse {
                id: house.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_development;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_catalogue_survives_json_round_trip() {
        let development = builtin_development();
        let file = write_temp(&serde_json::to_string_pretty(&development).unwrap());

        let loaded = load_development(file.path()).unwrap();
        assert_eq!(loaded, development);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut development = builtin_development();
        development.houses[1].id = "V1".to_string();
        let file = write_temp(&serde_json::to_string(&development).unwrap());

        let err = load_development(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateHouse { ref id } if id == "V1"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_development("/nonexistent/houses.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/houses.json"));
    }

    #[test]
    fn test_malformed_house_is_a_json_error() {
        let file = write_temp(r#"{"name": "X", "houses": [{"id": "V1", "name": "A", "type": "Normal",
            "parcelArea": 1, "totalConstructedArea": 1, "price": 1, "floors": []}]}"#);
        let err = load_development(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("expected 4 floors"));
    }
}
