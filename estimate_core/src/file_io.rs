//! # File I/O Module
//!
//! Reads and writes the two files a company keeps next to the engine:
//! - **Catalog files** (`.json`): the material price list, saved atomically
//!   (write to `.tmp`, fsync, rename) and version-checked on load
//! - **Constants files** (`.toml`): overrides for consumption rates and
//!   module sizes, validated before use
//!
//! ## Catalog Format
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "company_id": "acme",
//!   "modified": "2026-03-01T12:00:00Z",
//!   "materials": [ { "id": "1", "name": "Chapa ST", ... } ]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use estimate_core::file_io::{load_catalog, save_catalog};
//! use estimate_core::materials::{Material, MaterialCatalog};
//! use std::path::Path;
//!
//! let mut catalog = MaterialCatalog::new("acme");
//! catalog.push(Material::new("1", "acme", "Chapa ST", "un", 30.0, 40.0));
//!
//! save_catalog(&catalog, Path::new("catalogo.json"))?;
//! let loaded = load_catalog(Path::new("catalogo.json"))?;
//! assert_eq!(loaded.len(), 1);
//! # Ok::<(), estimate_core::errors::EstimateError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::EstimationConstants;
use crate::errors::{EstimateError, EstimateResult};
use crate::materials::{Material, MaterialCatalog};

/// Current catalog file schema version
pub const SCHEMA_VERSION: &str = "0.1.0";

/// On-disk catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Schema version the file was written with
    pub version: String,
    pub company_id: String,
    /// Last save time
    pub modified: DateTime<Utc>,
    pub materials: Vec<Material>,
}

impl CatalogFile {
    /// Wrap a catalog for saving, stamped with the current time
    pub fn from_catalog(catalog: &MaterialCatalog) -> Self {
        CatalogFile {
            version: SCHEMA_VERSION.to_string(),
            company_id: catalog.company_id.clone(),
            modified: Utc::now(),
            materials: catalog.materials.clone(),
        }
    }

    pub fn into_catalog(self) -> MaterialCatalog {
        MaterialCatalog {
            company_id: self.company_id,
            materials: self.materials,
        }
    }
}

/// Save a catalog with atomic write semantics.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to a temporary file (`.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename over the target
///
/// An interrupted save leaves the previous file intact.
pub fn save_catalog(catalog: &MaterialCatalog, path: &Path) -> EstimateResult<()> {
    let document = CatalogFile::from_catalog(catalog);
    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| EstimateError::serialization(e.to_string()))?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        EstimateError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        EstimateError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        EstimateError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        EstimateError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(
        path = %path.display(),
        materials = document.materials.len(),
        "catalog saved"
    );
    Ok(())
}

/// Load a catalog file.
///
/// # Returns
///
/// * `Ok(MaterialCatalog)` - materials in file order
/// * `Err(EstimateError::VersionMismatch)` - written by an incompatible schema
/// * `Err(EstimateError::SerializationError)` - invalid JSON
/// * `Err(EstimateError::FileError)` - I/O error
pub fn load_catalog(path: &Path) -> EstimateResult<MaterialCatalog> {
    let contents = fs::read_to_string(path).map_err(|e| {
        EstimateError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let document: CatalogFile = serde_json::from_str(&contents).map_err(|e| {
        EstimateError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&document.version)?;

    debug!(
        path = %path.display(),
        company_id = %document.company_id,
        materials = document.materials.len(),
        "catalog loaded"
    );
    Ok(document.into_catalog())
}

/// Load constant overrides from a TOML file.
///
/// Missing keys keep their defaults. The merged set is validated so a bad
/// override (zero sheet area, negative yield) is rejected here rather than
/// producing nonsense quantities later.
pub fn load_constants(path: &Path) -> EstimateResult<EstimationConstants> {
    let contents = fs::read_to_string(path).map_err(|e| {
        EstimateError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let constants: EstimationConstants = toml::from_str(&contents).map_err(|e| {
        EstimateError::serialization(format!("Invalid TOML in {}: {}", path.display(), e))
    })?;

    constants.validate()?;

    debug!(path = %path.display(), "constants loaded");
    Ok(constants)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> EstimateResult<()> {
    let mismatch = || EstimateError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_catalog() -> MaterialCatalog {
        let mut catalog = MaterialCatalog::new("acme");
        catalog.push(Material::new("1", "acme", "Chapa ST 1.20x2.40", "un", 30.0, 40.0));
        catalog.push(
            Material::with_markup("2", "acme", "Tinta Acrílica 18L", "lata", 100.0, 30.0)
                .with_category("Pintura"),
        );
        catalog
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalogo.json");

        let catalog = sample_catalog();
        save_catalog(&catalog, &path).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded, catalog);
        assert_eq!(loaded.price_for("tinta"), 130.0);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalogo.json");

        save_catalog(&sample_catalog(), &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_saved_document_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalogo.json");
        save_catalog(&sample_catalog(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["version"], SCHEMA_VERSION);
        assert_eq!(json["company_id"], "acme");
        assert!(json["modified"].is_string());
        assert_eq!(json["materials"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalogo.json");
        fs::write(
            &path,
            r#"{"version":"0.2.0","company_id":"acme","modified":"2026-01-01T00:00:00Z","materials":[]}"#,
        )
        .unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_load_missing_and_invalid_files() {
        let dir = tempdir().unwrap();

        let err = load_catalog(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, EstimateError::FileError { .. }));

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, EstimateError::SerializationError { .. }));
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("latest").is_err());
    }

    #[test]
    fn test_load_constants_partial_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("constantes.toml");
        fs::write(&path, "[masonry]\nbricks_per_m2 = 28.0\n").unwrap();

        let constants = load_constants(&path).unwrap();
        assert_eq!(constants.masonry.bricks_per_m2, 28.0);
        assert_eq!(constants.masonry.cement_bags_per_m2, 0.3);
        assert_eq!(constants.drywall, EstimationConstants::default().drywall);
    }

    #[test]
    fn test_load_constants_rejects_zero_divisor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("constantes.toml");
        fs::write(&path, "[drywall]\nsheet_area_m2 = 0.0\n").unwrap();

        let err = load_constants(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
