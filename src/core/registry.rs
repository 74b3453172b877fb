// src/core/registry.rs

use crate::constants::JSON_BACKEND;
use crate::core::paths;
use crate::models::{ConfigDocument, ParamSpec, UseSection};
use crate::storage::json_file::{self, JsonFileStorage};
use crate::storage::{StorageBackend, StorageResult};
use lazy_static::lazy_static;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The backend selected by a freshly generated configuration file.
pub const DEFAULT_BACKEND: &str = JSON_BACKEND;

/// Everything the configuration layer needs to know about one backend type
/// without constructing it: its declared parameter schema, a constructor, and
/// the parameter sub-document a default config file should carry for it.
pub struct BackendDescriptor {
    /// Declared parameter schema, used for config validation.
    pub parameters: &'static [ParamSpec],
    /// Builds the backend from its parameter sub-document.
    pub build: fn(&Map<String, Value>) -> StorageResult<Box<dyn StorageBackend>>,
    /// Default parameter values written on first run.
    pub default_params: fn() -> Map<String, Value>,
}

impl std::fmt::Debug for BackendDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendDescriptor")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

fn build_json_backend(params: &Map<String, Value>) -> StorageResult<Box<dyn StorageBackend>> {
    Ok(Box::new(JsonFileStorage::from_params(params)?))
}

fn default_json_params() -> Map<String, Value> {
    let mut params = Map::new();
    // Fall back to a relative path only in the (unlikely) case the home
    // directory cannot be resolved; backend construction will fail loudly then.
    let path = paths::default_tasks_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "tasks.json".to_string());
    params.insert("path".to_string(), Value::String(path));
    params
}

lazy_static! {
    /// The single source of truth for all registered backend types.
    ///
    /// Built once at startup and never mutated afterwards. To add a backend,
    /// add an entry here; the config layer picks it up for selection,
    /// validation, and default-config generation.
    static ref BACKEND_REGISTRY: BTreeMap<&'static str, BackendDescriptor> = {
        let mut registry = BTreeMap::new();
        registry.insert(
            JSON_BACKEND,
            BackendDescriptor {
                parameters: json_file::PARAMETERS,
                build: build_json_backend,
                default_params: default_json_params,
            },
        );
        registry
    };
}

/// Looks up a backend descriptor by its identifier.
pub fn lookup(backend_type: &str) -> Option<&'static BackendDescriptor> {
    BACKEND_REGISTRY.get(backend_type)
}

/// Returns the sorted list of registered backend identifiers.
pub fn available_backends() -> Vec<&'static str> {
    BACKEND_REGISTRY.keys().copied().collect()
}

/// Builds the full default configuration document: the default backend marked
/// active, plus one parameter sub-document per registered backend.
pub fn default_config_document() -> ConfigDocument {
    let mut backends = Map::new();
    for (name, descriptor) in BACKEND_REGISTRY.iter() {
        backends.insert(
            (*name).to_string(),
            Value::Object((descriptor.default_params)()),
        );
    }
    ConfigDocument {
        active: UseSection {
            storage: DEFAULT_BACKEND.to_string(),
        },
        backends,
    }
}
