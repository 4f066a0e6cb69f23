use std::ops::Range;

use crate::parser::{AttributePath, TypeDescriptor};

/// One `(!path|type!)` occurrence inside a SQL fragment.
///
/// `start..end` bounds the whole marker including the `(!` and `!)`
/// delimiters. `raw_type` is the trimmed text after the last unescaped `|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub start: usize,
    pub end: usize,
    pub path: AttributePath,
    pub raw_type: Option<String>,
}

impl Marker {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Recognized type, or `None` when the marker has no type or its text
    /// is outside the grammar.
    pub fn type_descriptor(&self) -> Option<TypeDescriptor> {
        self.raw_type.as_deref().and_then(TypeDescriptor::parse)
    }

    pub fn source<'a>(&self, fragment: &'a str) -> &'a str {
        &fragment[self.span()]
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{AttributePath, Marker, TypeKeyword};

    fn marker(raw_type: Option<&str>) -> Marker {
        Marker {
            start: 6,
            end: 21,
            path: AttributePath::parse("cost").unwrap(),
            raw_type: raw_type.map(str::to_string),
        }
    }

    #[test]
    pub fn test_marker_source() {
        let fragment = "WHERE (!cost|decimal!) > 1";
        let mut m = marker(Some("decimal"));
        m.end = 22;

        assert_eq!(m.source(fragment), "(!cost|decimal!)");
        assert_eq!(m.span(), 6..22);
    }

    #[test]
    pub fn test_marker_type_descriptor() {
        assert_eq!(marker(Some("int")).type_descriptor().unwrap().keyword, TypeKeyword::Int);
        assert_eq!(marker(Some("varchar")).type_descriptor(), None);
        assert_eq!(marker(None).type_descriptor(), None);
    }
}
