use crate::{
    compiler::{AliasAssigner, Dialect, FragmentRewriter},
    entity::ColumnRef,
};

/// One entry of a projection list as handed over by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    Expression(String),
    Aliased { expression: String, alias: String },
}

impl SelectItem {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, SelectItem::Expression(expression) if expression.trim() == "*")
    }
}

impl From<&str> for SelectItem {
    fn from(value: &str) -> Self {
        SelectItem::Expression(value.to_string())
    }
}

impl From<String> for SelectItem {
    fn from(value: String) -> Self {
        SelectItem::Expression(value)
    }
}

/// Compiles a projection list: markers are expanded against the qualified
/// dynamic column, aliases are assigned, and a wildcard projection gets the
/// whole-column dump appended.
pub struct SelectListCompiler;

impl SelectListCompiler {
    pub fn compile(items: &[SelectItem], column: &ColumnRef, dialect: &Dialect) -> Vec<String> {
        let wildcard = [SelectItem::from("*")];
        let items = if items.is_empty() { &wildcard[..] } else { items };

        // Projections read through the table-qualified column, so the dump is
        // `COLUMN_JSON(`t`.`dynamic_columns`)` rather than the unqualified form.
        // Pass a `ColumnRef` without a table to get `COLUMN_JSON(`dynamic_columns`)`.
        let column_expr = column.qualified(dialect);
        let mut compiled: Vec<String> = items
            .iter()
            .map(|item| match item {
                SelectItem::Expression(expression) => {
                    let expression = FragmentRewriter::compile_condition_fragment(expression, &column_expr, dialect);
                    AliasAssigner::assign(&expression, dialect)
                }
                SelectItem::Aliased { expression, alias } => {
                    let expression = FragmentRewriter::compile_condition_fragment(expression, &column_expr, dialect);
                    AliasAssigner::assign_explicit(&expression, alias, dialect)
                }
            })
            .collect();

        if items.iter().any(SelectItem::is_wildcard) {
            compiled.push(Self::dump_item(column, dialect));
        }

        compiled
    }

    /// Raw-string variant: `column_name` is the dynamic column, optionally
    /// qualified by `table_alias`.
    pub fn compile_select_list(
        items: &[String],
        column_name: &str,
        table_alias: Option<&str>,
        dialect: &Dialect,
    ) -> Vec<String> {
        let items: Vec<SelectItem> = items.iter().cloned().map(SelectItem::from).collect();
        let column = ColumnRef::new(table_alias, column_name);
        Self::compile(&items, &column, dialect)
    }

    pub fn dump_item(column: &ColumnRef, dialect: &Dialect) -> String {
        format!(
            "{} AS {}",
            dialect.dump(&column.qualified(dialect)),
            dialect.quote_column_name(&dialect.dump_alias)
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        compiler::{Dialect, SelectItem, SelectListCompiler},
        entity::ColumnRef,
    };

    fn product_column() -> ColumnRef {
        ColumnRef::new(Some("product"), "dynamic_columns")
    }

    #[test]
    pub fn test_empty_select_is_wildcard_with_dump() {
        let dialect = Dialect::default();

        let compiled = SelectListCompiler::compile(&[], &product_column(), &dialect);

        assert_eq!(
            compiled,
            vec!["*", "COLUMN_JSON(`product`.`dynamic_columns`) AS `dynamic_columns`"]
        );
    }

    #[test]
    pub fn test_explicit_wildcard_gets_dump() {
        let dialect = Dialect::default();

        let compiled = SelectListCompiler::compile(&[SelectItem::from("id"), SelectItem::from("*")], &product_column(), &dialect);

        assert_eq!(compiled.len(), 3);
        assert_eq!(compiled[0], "`id`");
        assert_eq!(compiled[2], "COLUMN_JSON(`product`.`dynamic_columns`) AS `dynamic_columns`");
    }

    #[test]
    pub fn test_single_dynamic_item() {
        let dialect = Dialect::default();

        let compiled = SelectListCompiler::compile_select_list(
            &["(!cost|decimal(6,2)!)".to_string()],
            "dynamic_columns",
            Some("product"),
            &dialect,
        );

        assert_eq!(compiled, vec!["COLUMN_GET(`product`.`dynamic_columns`, 'cost' AS decimal(6,2))"]);
    }

    #[test]
    pub fn test_comma_joined_items_quirk() {
        let dialect = Dialect::default();

        let compiled = SelectListCompiler::compile_select_list(
            &["(!cost|decimal(6,2)!), (!price.wholesale.12|decimal(6,2)!), id".to_string()],
            "dynamic_columns",
            Some("product"),
            &dialect,
        );

        assert_eq!(
            compiled,
            vec![
                "COLUMN_GET(`product`.`dynamic_columns`, 'cost' AS decimal(6,2)), \
                 COLUMN_GET(COLUMN_GET(COLUMN_GET(`product`.`dynamic_columns`, 'price' AS BINARY), 'wholesale' AS BINARY), '12' AS decimal(6,2)), \
                 AS `id`"
            ]
        );
    }

    #[test]
    pub fn test_aliased_dynamic_item() {
        let dialect = Dialect::default();
        let items = vec![SelectItem::Aliased {
            expression: "(!boss.first!)".into(),
            alias: "boss_first".into(),
        }];

        let compiled = SelectListCompiler::compile(&items, &ColumnRef::new(None, "dynamic_columns"), &dialect);

        assert_eq!(
            compiled,
            vec!["COLUMN_GET(COLUMN_GET(`dynamic_columns`, 'boss' AS BINARY), 'first' AS CHAR) AS `boss_first`"]
        );
    }

    #[test]
    pub fn test_custom_dump_alias() {
        let mut dialect = Dialect::default();
        dialect.dump_alias = "attrs".into();

        let dump = SelectListCompiler::dump_item(&ColumnRef::new(None, "dyn"), &dialect);

        assert_eq!(dump, "COLUMN_JSON(`dyn`) AS `attrs`");
    }

    #[test]
    pub fn test_padded_wildcard() {
        let dialect = Dialect::default();
        let compiled = SelectListCompiler::compile(&[SelectItem::from(" * ")], &product_column(), &dialect);

        assert_eq!(compiled, vec!["*", "COLUMN_JSON(`product`.`dynamic_columns`) AS `dynamic_columns`"]);
    }
}
