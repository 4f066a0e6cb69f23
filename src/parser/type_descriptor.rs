use std::fmt::{self, Display};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::compiler::TypeCase;

static TYPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(binary|char|datetime|date|time|decimal|double|integer|int|signed(?:\s+(?:integer|int))?|unsigned(?:\s+(?:integer|int))?)\s*(\(\s*\d+\s*(?:,\s*\d+\s*)?\))?$",
    )
    .expect("type pattern is a valid regex")
});

/// Keywords accepted after the `|` of a marker and by the attribute API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    Binary,
    Char,
    Time,
    DateTime,
    Date,
    Decimal,
    Double,
    Int,
    Integer,
    Signed,
    Unsigned,
}

impl TypeKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKeyword::Binary => "BINARY",
            TypeKeyword::Char => "CHAR",
            TypeKeyword::Time => "TIME",
            TypeKeyword::DateTime => "DATETIME",
            TypeKeyword::Date => "DATE",
            TypeKeyword::Decimal => "DECIMAL",
            TypeKeyword::Double => "DOUBLE",
            TypeKeyword::Int => "INT",
            TypeKeyword::Integer => "INTEGER",
            TypeKeyword::Signed => "SIGNED",
            TypeKeyword::Unsigned => "UNSIGNED",
        }
    }

    fn from_leading_word(word: &str) -> Option<TypeKeyword> {
        let keyword = match word.to_ascii_uppercase().as_str() {
            "BINARY" => TypeKeyword::Binary,
            "CHAR" => TypeKeyword::Char,
            "TIME" => TypeKeyword::Time,
            "DATETIME" => TypeKeyword::DateTime,
            "DATE" => TypeKeyword::Date,
            "DECIMAL" => TypeKeyword::Decimal,
            "DOUBLE" => TypeKeyword::Double,
            "INT" => TypeKeyword::Int,
            "INTEGER" => TypeKeyword::Integer,
            "SIGNED" => TypeKeyword::Signed,
            "UNSIGNED" => TypeKeyword::Unsigned,
            _ => return None,
        };
        Some(keyword)
    }

    /// Whether a parenthesized list with `count` parameters is allowed.
    fn accepts_params(&self, count: usize) -> bool {
        match self {
            TypeKeyword::Binary | TypeKeyword::Char | TypeKeyword::Time | TypeKeyword::DateTime => count <= 1,
            TypeKeyword::Decimal => count <= 2,
            TypeKeyword::Double => count == 0 || count == 2,
            TypeKeyword::Date
            | TypeKeyword::Int
            | TypeKeyword::Integer
            | TypeKeyword::Signed
            | TypeKeyword::Unsigned => count == 0,
        }
    }
}

/// A recognized SQL scalar type, e.g. `decimal(6,2)` or `signed int`.
///
/// `keyword_text` keeps the keyword as the caller wrote it (inner whitespace
/// collapsed) and `params` keeps the parenthesized list verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub keyword: TypeKeyword,
    pub keyword_text: String,
    pub params: Option<String>,
}

impl TypeDescriptor {
    /// Parse type text leniently: anything outside the grammar yields `None`.
    pub fn parse(text: &str) -> Option<TypeDescriptor> {
        let captures = TYPE_PATTERN.captures(text.trim())?;

        let keyword_text = captures
            .get(1)?
            .as_str()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let keyword = TypeKeyword::from_leading_word(keyword_text.split(' ').next()?)?;

        let params = captures.get(2).map(|m| m.as_str().to_string());
        let count = params
            .as_deref()
            .map_or(0, |list| list.matches(',').count() + 1);

        if !keyword.accepts_params(count) {
            return None;
        }

        Some(TypeDescriptor { keyword, keyword_text, params })
    }

    pub fn plain(keyword: TypeKeyword) -> TypeDescriptor {
        TypeDescriptor {
            keyword,
            keyword_text: keyword.as_str().to_string(),
            params: None,
        }
    }

    /// Uppercase keyword followed by the verbatim parameter list.
    pub fn normalized(&self) -> String {
        format!("{}{}", self.keyword_text.to_ascii_uppercase(), self.params.as_deref().unwrap_or(""))
    }

    pub fn verbatim(&self) -> String {
        format!("{}{}", self.keyword_text, self.params.as_deref().unwrap_or(""))
    }

    pub fn render(&self, case: TypeCase) -> String {
        match case {
            TypeCase::Verbatim => self.verbatim(),
            TypeCase::Upper => self.normalized(),
        }
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized())
    }
}
