use once_cell::sync::Lazy;
use regex::Regex;

use crate::compiler::Dialect;

// `<expr> AS <name>` or `<expr> <name>` where the name runs to the end.
static ALIAS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(.*?)(?i:\s+as\s+|\s+)([\w\-.]+)$").expect("alias pattern is a valid regex")
});

/// Projection aliasing for compiled select items.
///
/// An item ending in a bare word gets that word as a quoted alias, whatever
/// precedes it. Compiled accessors always end in `)` and are therefore
/// emitted bare, while a comma-joined item such as `<accessor>, id` turns
/// into `<accessor>, AS \`id\``. Downstream consumers rely on this exact text.
pub struct AliasAssigner;

impl AliasAssigner {
    pub fn assign(item: &str, dialect: &Dialect) -> String {
        let item = item.trim();
        match ALIAS_PATTERN.captures(item) {
            Some(captures) => format!(
                "{} AS {}",
                dialect.quote_column_name(&captures[1]),
                dialect.quote_column_name(&captures[2])
            ),
            None => dialect.quote_column_name(item),
        }
    }

    pub fn assign_explicit(expression: &str, alias: &str, dialect: &Dialect) -> String {
        let expression = if expression.contains('(') {
            expression.to_string()
        } else {
            dialect.quote_column_name(expression)
        };
        format!("{} AS {}", expression, dialect.quote_column_name(alias))
    }
}
