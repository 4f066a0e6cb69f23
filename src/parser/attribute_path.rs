use std::fmt::{self, Display};

use crate::compiler::CompileError;

/// A dotted attribute name split into its nesting levels.
///
/// `price.wholesale.12` addresses key `12` inside `wholesale` inside `price`.
/// A path always has at least one segment and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePath {
    segments: Vec<String>,
}

impl AttributePath {
    /// Split an attribute name on `.`; an empty name or an empty segment is
    /// an `InvalidPath` error.
    pub fn parse(name: &str) -> Result<Self, CompileError> {
        if name.is_empty() {
            return Err(CompileError::InvalidPath(name.to_string()));
        }

        let segments: Vec<String> = name.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(CompileError::InvalidPath(name.to_string()));
        }

        Ok(Self { segments })
    }

    pub fn from_segments<I, S>(segments: I) -> Result<Self, CompileError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || segments.iter().any(String::is_empty) {
            return Err(CompileError::InvalidPath(segments.join(".")));
        }

        Ok(Self { segments })
    }

    /// Marker paths are restricted to letters, digits, `_`, `-` and `$` so
    /// that unrelated SQL between `(!` and `!)` is never taken for a path.
    pub fn is_marker_segment(segment: &str) -> bool {
        !segment.is_empty()
            && segment
                .chars()
                .all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '-' || ch == '$')
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every segment but the last one.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    pub fn leaf(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }
}

impl Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
