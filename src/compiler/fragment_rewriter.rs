use crate::{
    compiler::{AccessorCompiler, Dialect},
    parser::{Marker, MarkerScanner},
};

/// Substitutes compiled accessors back into the fragment they came from.
pub struct FragmentRewriter;

impl FragmentRewriter {
    /// Replace every marker span with its replacement text. Spans must come
    /// in source order and must not overlap; text outside them is kept
    /// byte for byte.
    pub fn rewrite(fragment: &str, replacements: &[(Marker, String)]) -> String {
        let mut text = fragment.to_string();
        for (marker, replacement) in replacements.iter().rev() {
            text.replace_range(marker.span(), replacement);
        }
        text
    }

    /// Expand every marker of a WHERE/HAVING/ORDER BY/GROUP BY fragment.
    pub fn compile_condition_fragment(raw: &str, column_expr: &str, dialect: &Dialect) -> String {
        let replacements: Vec<(Marker, String)> = MarkerScanner::scan(raw)
            .into_iter()
            .map(|marker| {
                let accessor = AccessorCompiler::compile_marker(&marker, column_expr, dialect);
                (marker, accessor)
            })
            .collect();

        if replacements.is_empty() {
            return raw.to_string();
        }
        Self::rewrite(raw, &replacements)
    }
}
