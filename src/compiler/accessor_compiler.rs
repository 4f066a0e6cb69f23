use tracing::{debug, warn};

use crate::{
    compiler::{CompileError, Dialect},
    parser::{AttributePath, Marker, TypeDescriptor},
};

/// Read path: turns an attribute path into nested extraction calls.
///
/// Every level but the last is read with the dialect's intermediate type;
/// the last level carries the requested type or the dialect default.
pub struct AccessorCompiler;

impl AccessorCompiler {
    pub fn compile(path: &AttributePath, ty: Option<&TypeDescriptor>, column_expr: &str, dialect: &Dialect) -> String {
        let mut accessor = column_expr.to_string();
        for segment in path.parents() {
            accessor = dialect.extract(&accessor, segment, &dialect.intermediate_type);
        }

        let cast = match ty {
            Some(ty) => ty.render(dialect.type_case),
            None => dialect.default_type.clone(),
        };
        let accessor = dialect.extract(&accessor, path.leaf(), &cast);

        debug!(path = %path, cast = %cast, "compiled dynamic attribute accessor");
        accessor
    }

    pub fn compile_segments(
        segments: &[String],
        ty: Option<&TypeDescriptor>,
        column_expr: &str,
        dialect: &Dialect,
    ) -> Result<String, CompileError> {
        let path = AttributePath::from_segments(segments.iter().cloned())?;
        Ok(Self::compile(&path, ty, column_expr, dialect))
    }

    pub fn compile_marker(marker: &Marker, column_expr: &str, dialect: &Dialect) -> String {
        Self::compile(&marker.path, marker.type_descriptor().as_ref(), column_expr, dialect)
    }

    /// Read expression for a dotted attribute name.
    ///
    /// Unrecognized type text falls back to the default type with a warning.
    pub fn compile_attribute_read(
        name: &str,
        type_text: Option<&str>,
        column_expr: &str,
        dialect: &Dialect,
    ) -> Result<String, CompileError> {
        let path = AttributePath::parse(name)?;
        let ty = Self::lenient_type(name, type_text);
        Ok(Self::compile(&path, ty.as_ref(), column_expr, dialect))
    }

    pub(crate) fn lenient_type(name: &str, type_text: Option<&str>) -> Option<TypeDescriptor> {
        let text = type_text?;
        let ty = TypeDescriptor::parse(text);
        if ty.is_none() {
            warn!(attribute = name, type_text = text, "unrecognized dynamic attribute type, using default");
        }
        ty
    }
}
