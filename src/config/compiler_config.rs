use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{compiler::Dialect, entity::EntitySchema};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Dialect plus the entity descriptors the collaborator compiles against.
///
/// ```json
/// {
///   "dialect": { "type_case": "verbatim" },
///   "entities": [{ "table_name": "product", "dynamic_column": "dynamic_columns" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default)]
    pub dialect: Dialect,
    #[serde(default)]
    pub entities: Vec<EntitySchema>,
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string_lossy().into_owned(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn entity(&self, table_name: &str) -> Option<&EntitySchema> {
        self.entities.iter().find(|entity| entity.table_name == table_name)
    }

    pub fn with_entity(mut self, entity: EntitySchema) -> Self { self.entities.push(entity); self }
}
