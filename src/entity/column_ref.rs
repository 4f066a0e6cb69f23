use crate::compiler::Dialect;

/// The packed dynamic column, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: Option<&str>, column: &str) -> Self {
        Self {
            table: table.map(str::to_string),
            column: column.to_string(),
        }
    }

    /// `` `table`.`column` `` when a table is known, `` `column` `` otherwise.
    pub fn qualified(&self, dialect: &Dialect) -> String {
        match &self.table {
            Some(table) => format!("{}.{}", dialect.quote_table_name(table), dialect.quote_simple_name(&self.column)),
            None => dialect.quote_simple_name(&self.column),
        }
    }

    pub fn quoted(&self, dialect: &Dialect) -> String {
        dialect.quote_simple_name(&self.column)
    }

    /// Unquoted column name, as used inside condition fragments.
    pub fn bare(&self) -> &str {
        &self.column
    }
}

#[cfg(test)]
mod tests {
    use crate::{compiler::Dialect, entity::ColumnRef};

    #[test]
    pub fn test_renderings() {
        let dialect = Dialect::default();
        let column = ColumnRef::new(Some("product"), "dynamic_columns");

        assert_eq!(column.qualified(&dialect), "`product`.`dynamic_columns`");
        assert_eq!(column.quoted(&dialect), "`dynamic_columns`");
        assert_eq!(column.bare(), "dynamic_columns");
        assert_eq!(ColumnRef::new(None, "d").qualified(&dialect), "`d`");
    }
}
