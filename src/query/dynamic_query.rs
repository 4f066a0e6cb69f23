use tracing::debug;

use crate::{
    compiler::{CompileError, Dialect, FragmentRewriter, SelectItem, SelectListCompiler},
    entity::DynamicEntity,
};

/// Assembles one SELECT statement for an entity, routing every fragment
/// through the marker compiler.
///
/// Projection markers read the table-qualified column; WHERE, GROUP BY,
/// HAVING and ORDER BY markers read the bare column name.
pub struct DynamicQuery<'a> {
    entity: &'a dyn DynamicEntity,
    dialect: &'a Dialect,
    select: Vec<SelectItem>,
    conditions: Vec<String>,
    group_by: Vec<String>,
    having: Option<String>,
    order_by: Vec<String>,
}

impl<'a> DynamicQuery<'a> {
    pub fn new(entity: &'a dyn DynamicEntity, dialect: &'a Dialect) -> Self {
        Self {
            entity,
            dialect,
            select: vec![],
            conditions: vec![],
            group_by: vec![],
            having: None,
            order_by: vec![],
        }
    }

    pub fn select<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SelectItem>,
    {
        self.select = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn select_aliased(mut self, expression: &str, alias: &str) -> Self {
        self.select.push(SelectItem::Aliased {
            expression: expression.to_string(),
            alias: alias.to_string(),
        });
        self
    }

    /// Replace every condition with `condition`.
    pub fn where_(mut self, condition: &str) -> Self {
        self.conditions = vec![condition.to_string()];
        self
    }

    pub fn and_where(mut self, condition: &str) -> Self { self.conditions.push(condition.to_string()); self }
    pub fn group_by(mut self, expression: &str) -> Self { self.group_by.push(expression.to_string()); self }
    pub fn having(mut self, condition: &str) -> Self { self.having = Some(condition.to_string()); self }
    pub fn order_by(mut self, expression: &str) -> Self { self.order_by.push(expression.to_string()); self }

    pub fn build(&self) -> Result<String, CompileError> {
        let column = self.entity.dynamic_column()?;
        let dialect = self.dialect;
        let fragment = |raw: &String| FragmentRewriter::compile_condition_fragment(raw, column.bare(), dialect);

        let projection = SelectListCompiler::compile(&self.select, &column, dialect).join(", ");
        let mut sql = format!(
            "SELECT {} FROM {}",
            projection,
            dialect.quote_table_name(self.entity.table_name())
        );

        match self.conditions.as_slice() {
            [] => {}
            [condition] => sql.push_str(&format!(" WHERE {}", fragment(condition))),
            conditions => {
                let joined = conditions
                    .iter()
                    .map(|condition| format!("({})", fragment(condition)))
                    .collect::<Vec<_>>()
                    .join(" AND ");
                sql.push_str(&format!(" WHERE {}", joined));
            }
        }

        if !self.group_by.is_empty() {
            let group_by = self.group_by.iter().map(fragment).collect::<Vec<_>>().join(", ");
            sql.push_str(&format!(" GROUP BY {}", group_by));
        }

        if let Some(having) = &self.having {
            sql.push_str(&format!(" HAVING {}", fragment(having)));
        }

        if !self.order_by.is_empty() {
            let order_by = self.order_by.iter().map(fragment).collect::<Vec<_>>().join(", ");
            sql.push_str(&format!(" ORDER BY {}", order_by));
        }

        debug!(table = self.entity.table_name(), sql = %sql, "built dynamic query");
        Ok(sql)
    }
}
