use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::parser::{AttributePath, Marker};

static MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\(!(.*?)!\)").expect("marker pattern is a valid regex")
});

/// Finds `(!path[|type]!)` markers inside free-form SQL text.
///
/// Scanning never fails: a candidate whose contents do not decode into a
/// path is left alone and the search resumes just after its `(!`.
pub struct MarkerScanner;

impl MarkerScanner {
    pub fn scan(fragment: &str) -> Vec<Marker> {
        let mut markers = vec![];
        let mut position = 0;

        while position < fragment.len() {
            let Some(captures) = MARKER_PATTERN.captures_at(fragment, position) else {
                break;
            };
            let (Some(whole), Some(contents)) = (captures.get(0), captures.get(1)) else {
                break;
            };

            match Self::decode(contents.as_str()) {
                Some((path, raw_type)) => {
                    markers.push(Marker {
                        start: whole.start(),
                        end: whole.end(),
                        path,
                        raw_type,
                    });
                    position = whole.end();
                }
                None => {
                    trace!(start = whole.start(), text = whole.as_str(), "skipping malformed marker");
                    position = whole.start() + 2;
                }
            }
        }

        markers
    }

    pub fn contains_marker(fragment: &str) -> bool {
        !Self::scan(fragment).is_empty()
    }

    fn decode(contents: &str) -> Option<(AttributePath, Option<String>)> {
        let (path_part, type_part) = match Self::last_unescaped_pipe(contents) {
            Some(index) => (&contents[..index], Some(contents[index + 1..].trim().to_string())),
            None => (contents, None),
        };

        let path_part = path_part.trim();
        if path_part.is_empty() {
            return None;
        }

        let segments: Vec<&str> = path_part.split('.').collect();
        if !segments.iter().all(|segment| AttributePath::is_marker_segment(segment)) {
            return None;
        }

        let path = AttributePath::from_segments(segments).ok()?;
        Some((path, type_part))
    }

    /// A pipe is escaped by an odd run of backslashes right before it.
    fn last_unescaped_pipe(contents: &str) -> Option<usize> {
        let bytes = contents.as_bytes();
        (0..bytes.len()).rev().find(|&index| {
            bytes[index] == b'|'
                && bytes[..index].iter().rev().take_while(|&&byte| byte == b'\\').count() % 2 == 0
        })
    }
}
