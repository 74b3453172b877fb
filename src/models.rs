// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// --- TASK MODELS ---
// These are the structures persisted in the task collection file.

/// The lifecycle state of a task.
///
/// The pending state is serialized as the literal `"open"` in the task file;
/// existing files depend on that exact label.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "open")]
    Pending,
    #[serde(rename = "completed")]
    Completed,
}

/// A single persisted task.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Randomly generated identifier, unique across the whole collection.
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Set once at creation, never mutated afterwards.
    pub created_at: DateTime<Utc>,
    /// `None` until the task is completed; never cleared again.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new pending task with the given identity and `created_at = now`.
    pub fn new(id: u64, title: String, description: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
        }
    }
}

// --- BACKEND PARAMETER SCHEMA ---

/// The value type a backend expects for one of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
}

/// One entry of a backend's declared parameter schema.
///
/// Configuration candidates are validated against the full slice of these
/// before a backend is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Text,
        }
    }
}

// --- CONFIGURATION DOCUMENT MODELS ---

/// The `use` section of the config file, naming the active backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UseSection {
    /// Identifier of the backend to construct (e.g. "json").
    pub storage: String,
}

/// The full on-disk configuration document (`~/.todo/config.json`).
///
/// Besides the `use` section, the document holds one sub-document per backend
/// type with that backend's parameters. Sub-documents for backend types this
/// build does not know about are kept verbatim through the flattened map, so
/// a shallow merge never drops them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    #[serde(rename = "use")]
    pub active: UseSection,
    #[serde(flatten)]
    pub backends: Map<String, Value>,
}

impl ConfigDocument {
    /// Returns the parameter sub-document for `backend_type`, or an empty map
    /// if the document has no entry for it.
    pub fn backend_params(&self, backend_type: &str) -> Map<String, Value> {
        match self.backends.get(backend_type) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }
}
