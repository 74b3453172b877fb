// src/core/config_manager.rs

use crate::core::{paths, registry};
use crate::models::ConfigDocument;
use crate::storage::{StorageBackend, StorageError};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur while managing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A filesystem I/O error occurred.
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file contains malformed JSON. No auto-repair is
    /// attempted; the user must fix or delete the file.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    /// An error occurred resolving a filesystem path.
    #[error("Path error: {0}")]
    Path(#[from] paths::PathError),
    /// The named backend type is not in the registry.
    #[error("Unsupported storage type: '{requested}'. Available types: {available}")]
    UnsupportedBackend {
        /// The identifier that was requested.
        requested: String,
        /// Comma-separated list of valid identifiers.
        available: String,
    },
    /// A candidate configuration's parameter keys do not exactly match the
    /// backend's declared schema.
    #[error(
        "Schema mismatch for storage '{backend}': missing keys [{missing}], unexpected keys [{unexpected}]"
    )]
    SchemaMismatch {
        /// The backend whose schema was violated.
        backend: String,
        /// Declared parameters absent from the candidate.
        missing: String,
        /// Candidate keys the schema does not declare.
        unexpected: String,
    },
    /// Constructing the selected backend failed.
    #[error("Failed to construct storage backend: {0}")]
    Backend(#[from] StorageError),
}

type ConfigResult<T> = Result<T, ConfigError>;

fn unsupported(requested: &str) -> ConfigError {
    ConfigError::UnsupportedBackend {
        requested: requested.to_string(),
        available: registry::available_backends().join(", "),
    }
}

/// Owns the on-disk configuration file: creation, reads, and whole-document
/// rewrites all go through here.
///
/// The document is loaded fully into memory on every read and rewritten
/// wholesale on every update; there is no partial-field patching. A shallow
/// merge (top-level key overwrite) is the only update primitive, so settings
/// for backends this build does not know about survive updates untouched.
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager over the default config location (`~/.todo/config.json`).
    pub fn default_location() -> ConfigResult<Self> {
        Ok(Self {
            config_path: paths::default_config_path()?,
        })
    }

    /// Creates a manager over an explicit config path. Used by tests and tooling.
    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// The path of the managed config file.
    pub fn config_path(&self) -> &std::path::Path {
        &self.config_path
    }

    /// Ensures the config file exists, creating it with the registry's default
    /// document if it doesn't. Idempotent.
    pub fn ensure_config_exists(&self) -> ConfigResult<()> {
        if self.config_path.exists() {
            return Ok(());
        }
        log::info!(
            "Config file '{}' not found. Creating it with defaults.",
            self.config_path.display()
        );
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.write_document(&registry::default_config_document())
    }

    /// Loads and parses the full configuration document, creating it first if
    /// absent.
    pub fn load_config(&self) -> ConfigResult<ConfigDocument> {
        self.ensure_config_exists()?;
        let content = fs::read_to_string(&self.config_path)?;
        let document: ConfigDocument = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Constructs the storage backend selected by the config file's
    /// `use.storage` field, feeding it that backend's parameter sub-document.
    pub fn get_storage(&self) -> ConfigResult<Box<dyn StorageBackend>> {
        let config = self.load_config()?;
        let backend_type = config.active.storage.as_str();

        let descriptor = registry::lookup(backend_type).ok_or_else(|| unsupported(backend_type))?;

        let params = config.backend_params(backend_type);
        log::debug!("Constructing '{}' storage backend.", backend_type);
        Ok((descriptor.build)(&params)?)
    }

    /// Validates `candidate` and shallow-merges it into the existing document.
    ///
    /// Validation happens BEFORE anything is loaded or written: a candidate
    /// that fails validation leaves the file untouched. On success the
    /// candidate's `use` section replaces the current one, its backend
    /// sub-documents overwrite same-named top-level keys, and all other keys
    /// persist. The merged document is then rewritten in full.
    pub fn update_config(&self, candidate: &ConfigDocument) -> ConfigResult<()> {
        self.validate_storage_config(candidate)?;

        let mut config = self.load_config()?;
        config.active = candidate.active.clone();
        for (key, value) in &candidate.backends {
            config.backends.insert(key.clone(), value.clone());
        }
        self.write_document(&config)
    }

    /// Returns the parameter sub-document stored for `backend_type`, or an
    /// empty map if the document has no entry for it (not an error).
    pub fn get_config(&self, backend_type: &str) -> ConfigResult<Map<String, Value>> {
        let config = self.load_config()?;
        Ok(config.backend_params(backend_type))
    }

    /// Checks a candidate document against the registry: the selected backend
    /// must be registered, and the candidate's parameter keys for it must
    /// exactly match the backend's declared schema.
    ///
    /// Any mismatch is a hard failure. Silently accepting a partial parameter
    /// set would let a broken configuration reach the backend constructor, so
    /// extra and missing keys both abort the update.
    pub fn validate_storage_config(&self, candidate: &ConfigDocument) -> ConfigResult<()> {
        let backend_type = candidate.active.storage.as_str();
        let descriptor = registry::lookup(backend_type).ok_or_else(|| unsupported(backend_type))?;

        let declared: BTreeSet<String> = descriptor
            .parameters
            .iter()
            .map(|p| p.name.to_string())
            .collect();
        let params = candidate.backend_params(backend_type);
        let supplied: BTreeSet<String> = params.keys().cloned().collect();

        if declared == supplied {
            return Ok(());
        }

        let missing: Vec<String> = declared.difference(&supplied).cloned().collect();
        let unexpected: Vec<String> = supplied.difference(&declared).cloned().collect();
        log::warn!(
            "Rejecting configuration for storage '{}': missing [{}], unexpected [{}].",
            backend_type,
            missing.join(", "),
            unexpected.join(", ")
        );
        Err(ConfigError::SchemaMismatch {
            backend: backend_type.to_string(),
            missing: missing.join(", "),
            unexpected: unexpected.join(", "),
        })
    }

    fn write_document(&self, document: &ConfigDocument) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(document)?;
        fs::write(&self.config_path, content)?;
        Ok(())
    }
}
