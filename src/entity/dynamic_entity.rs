use crate::{compiler::CompileError, entity::ColumnRef};

/// Per-entity capability naming the column that holds packed dynamic data.
pub trait DynamicEntity {
    fn table_name(&self) -> &str;

    /// `None` when the entity type has not been configured with a dynamic
    /// column.
    fn dynamic_column_name(&self) -> Option<&str>;

    /// Physical columns of the table, when known. An empty slice skips the
    /// existence check of the dynamic column.
    fn column_names(&self) -> &[String] {
        &[]
    }

    /// Resolve the dynamic column before any SQL is produced.
    fn dynamic_column(&self) -> Result<ColumnRef, CompileError> {
        let unknown = |attribute: &str| CompileError::UnknownAttribute {
            entity: self.table_name().to_string(),
            attribute: attribute.to_string(),
        };

        let name = match self.dynamic_column_name() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(unknown("")),
        };

        let columns = self.column_names();
        if !columns.is_empty() && !columns.iter().any(|column| column == name) {
            return Err(unknown(name));
        }

        Ok(ColumnRef::new(Some(self.table_name()), name))
    }
}
