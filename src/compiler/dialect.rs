use serde::{Deserialize, Serialize};

/// How a caller-supplied type is written into the generated SQL.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCase {
    /// Emit the type as the caller wrote it, e.g. `decimal(6,2)`.
    #[default]
    Verbatim,
    /// Emit the uppercase keyword with the verbatim parameters, e.g. `DECIMAL(6,2)`.
    Upper,
}

/// Surface syntax of the target SQL's packed-column functions.
///
/// The defaults produce MariaDB dynamic-column SQL. Every compile call takes
/// the dialect explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    /// Extraction function, `COLUMN_GET(container, 'key' AS type)`.
    pub get_function: String,
    /// Assignment function, `COLUMN_ADD(container, 'key', value AS type)`.
    pub add_function: String,
    /// Removal function, `COLUMN_DELETE(container, 'key')`.
    pub delete_function: String,
    /// Constructor, `COLUMN_CREATE('key', value AS type, ...)`.
    pub create_function: String,
    /// Whole-column dump, `COLUMN_JSON(container)`.
    pub dump_function: String,
    pub cast_keyword: String,
    /// Cast used for every non-final path level.
    pub intermediate_type: String,
    /// Cast used for the final level when no type is given.
    pub default_type: String,
    /// Alias of the dump expression added next to `*`.
    pub dump_alias: String,
    pub string_quote: char,
    pub identifier_quote: char,
    pub type_case: TypeCase,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::mariadb()
    }
}

impl Dialect {
    pub fn mariadb() -> Self {
        Self {
            get_function: "COLUMN_GET".to_string(),
            add_function: "COLUMN_ADD".to_string(),
            delete_function: "COLUMN_DELETE".to_string(),
            create_function: "COLUMN_CREATE".to_string(),
            dump_function: "COLUMN_JSON".to_string(),
            cast_keyword: "AS".to_string(),
            intermediate_type: "BINARY".to_string(),
            default_type: "CHAR".to_string(),
            dump_alias: "dynamic_columns".to_string(),
            string_quote: '\'',
            identifier_quote: '`',
            type_case: TypeCase::Verbatim,
        }
    }

    pub fn with_type_case(mut self, type_case: TypeCase) -> Self { self.type_case = type_case; self }

    /// String literal with the quote character and backslash escaped.
    pub fn quote_string(&self, value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push(self.string_quote);
        for ch in value.chars() {
            if ch == '\\' || ch == self.string_quote {
                quoted.push('\\');
            }
            quoted.push(ch);
        }
        quoted.push(self.string_quote);
        quoted
    }

    pub fn extract(&self, container: &str, key: &str, cast: &str) -> String {
        format!(
            "{}({}, {} {} {})",
            self.get_function,
            container,
            self.quote_string(key),
            self.cast_keyword,
            cast
        )
    }

    pub fn set(&self, container: &str, key: &str, value: &str, cast: &str) -> String {
        format!(
            "{}({}, {}, {} {} {})",
            self.add_function,
            container,
            self.quote_string(key),
            value,
            self.cast_keyword,
            cast
        )
    }

    pub fn delete(&self, container: &str, key: &str) -> String {
        format!("{}({}, {})", self.delete_function, container, self.quote_string(key))
    }

    pub fn dump(&self, container: &str) -> String {
        format!("{}({})", self.dump_function, container)
    }

    /// `pairs` are `(key, rendered value, cast)`.
    pub fn create(&self, pairs: &[(String, String, String)]) -> String {
        let args = pairs
            .iter()
            .map(|(key, value, cast)| format!("{}, {} {} {}", self.quote_string(key), value, self.cast_keyword, cast))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.create_function, args)
    }

    /// Quote a single name part; `*` and already quoted names are kept.
    pub fn quote_simple_name(&self, name: &str) -> String {
        if name == "*" || name.contains(self.identifier_quote) {
            return name.to_string();
        }
        format!("{q}{name}{q}", q = self.identifier_quote)
    }

    pub fn quote_table_name(&self, name: &str) -> String {
        if name.contains('(') || name.contains("{{") {
            return name.to_string();
        }
        name.split('.')
            .map(|part| self.quote_simple_name(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Quote a possibly table-prefixed column name. Expressions (anything
    /// with a parenthesis or a `[[`/`{{` placeholder) are returned unchanged.
    pub fn quote_column_name(&self, name: &str) -> String {
        if name.contains('(') || name.contains("[[") || name.contains("{{") {
            return name.to_string();
        }
        match name.rsplit_once('.') {
            Some((prefix, column)) => format!("{}.{}", self.quote_table_name(prefix), self.quote_simple_name(column)),
            None => self.quote_simple_name(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::compiler::{Dialect, TypeCase};

    #[test]
    pub fn test_extract() {
        let dialect = Dialect::default();
        assert_eq!(
            dialect.extract("dynamic_columns", "one", "BINARY"),
            "COLUMN_GET(dynamic_columns, 'one' AS BINARY)"
        );
    }

    #[test]
    pub fn test_set_delete_dump() {
        let dialect = Dialect::mariadb();
        assert_eq!(dialect.set("c", "k", "5", "INTEGER"), "COLUMN_ADD(c, 'k', 5 AS INTEGER)");
        assert_eq!(dialect.delete("c", "k"), "COLUMN_DELETE(c, 'k')");
        assert_eq!(dialect.dump("`dynamic_columns`"), "COLUMN_JSON(`dynamic_columns`)");
    }

    #[test]
    pub fn test_create() {
        let dialect = Dialect::mariadb();
        let pairs = vec![
            ("a".to_string(), "1".to_string(), "INTEGER".to_string()),
            ("b".to_string(), "'x'".to_string(), "CHAR".to_string()),
        ];
        assert_eq!(dialect.create(&pairs), "COLUMN_CREATE('a', 1 AS INTEGER, 'b', 'x' AS CHAR)");
    }

    #[test]
    pub fn test_quote_string_escapes() {
        let dialect = Dialect::mariadb();
        assert_eq!(dialect.quote_string("it's"), r"'it\'s'");
        assert_eq!(dialect.quote_string(r"a\b"), r"'a\\b'");
    }

    #[test]
    pub fn test_quote_column_name() {
        let dialect = Dialect::mariadb();
        assert_eq!(dialect.quote_column_name("id"), "`id`");
        assert_eq!(dialect.quote_column_name("product.id"), "`product`.`id`");
        assert_eq!(dialect.quote_column_name("*"), "*");
        assert_eq!(dialect.quote_column_name("product.*"), "`product`.*");
        assert_eq!(dialect.quote_column_name("`id`"), "`id`");
        assert_eq!(dialect.quote_column_name("COUNT(*)"), "COUNT(*)");
    }

    #[test]
    pub fn test_deserialize_partial() {
        let dialect: Dialect = serde_json::from_str(r#"{ "type_case": "upper", "dump_alias": "attrs" }"#)
            .expect("Failed to deserialize dialect");

        assert_eq!(dialect.type_case, TypeCase::Upper);
        assert_eq!(dialect.dump_alias, "attrs");
        assert_eq!(dialect.get_function, "COLUMN_GET");
    }

    #[test]
    pub fn test_with_type_case() {
        assert_eq!(Dialect::mariadb().with_type_case(TypeCase::Upper).type_case, TypeCase::Upper);
    }
}
