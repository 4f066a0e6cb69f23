use serde::{Deserialize, Serialize};

use crate::entity::DynamicEntity;

/// Data-driven entity descriptor, usually loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub table_name: String,
    #[serde(default)]
    pub dynamic_column: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
}

impl EntitySchema {
    pub fn new(table_name: &str, dynamic_column: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            dynamic_column: Some(dynamic_column.to_string()),
            columns: vec![],
        }
    }

    pub fn without_dynamic_column(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|column| column.to_string()).collect();
        self
    }
}

impl DynamicEntity for EntitySchema {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn dynamic_column_name(&self) -> Option<&str> {
        self.dynamic_column.as_deref()
    }

    fn column_names(&self) -> &[String] {
        &self.columns
    }
}
