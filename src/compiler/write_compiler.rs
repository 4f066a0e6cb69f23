use serde_json::Value;
use tracing::debug;

use crate::{
    compiler::{AccessorCompiler, CompileError, Dialect, DynValue, TypeInference},
    parser::{AttributePath, TypeDescriptor},
};

/// Write path: nested assignment or removal mirroring the read nesting.
///
/// For `a.b.c` the containers are `column`, `GET(column, 'a')` and
/// `GET(GET(column, 'a'), 'b')`; the leaf is set (or deleted) in the deepest
/// container and every enclosing level stores the rebuilt child back as the
/// intermediate type.
pub struct WriteCompiler;

impl WriteCompiler {
    pub fn compile(
        path: &AttributePath,
        value: &DynValue,
        ty: Option<&TypeDescriptor>,
        column_expr: &str,
        dialect: &Dialect,
    ) -> String {
        let mut containers = vec![column_expr.to_string()];
        for segment in path.parents() {
            let child = dialect.extract(&containers[containers.len() - 1], segment, &dialect.intermediate_type);
            containers.push(child);
        }

        let deepest = &containers[containers.len() - 1];
        let mut expression = match (value.to_sql_literal(dialect), ty.cloned().or_else(|| TypeInference::infer(value))) {
            (Some(literal), Some(ty)) => dialect.set(deepest, path.leaf(), &literal, &ty.render(dialect.type_case)),
            _ => dialect.delete(deepest, path.leaf()),
        };

        for (container, segment) in containers.iter().zip(path.parents()).rev() {
            expression = dialect.set(container, segment, &expression, &dialect.intermediate_type);
        }

        debug!(path = %path, value = %value, removal = value.is_removal(), "compiled dynamic attribute write");
        expression
    }

    /// Write expression for a dotted attribute name. An explicit type
    /// overrides the inferred one unless its text is unrecognized.
    pub fn compile_attribute_write(
        name: &str,
        value: &DynValue,
        type_text: Option<&str>,
        column_expr: &str,
        dialect: &Dialect,
    ) -> Result<String, CompileError> {
        let path = AttributePath::parse(name)?;
        let ty = AccessorCompiler::lenient_type(name, type_text);
        Ok(Self::compile(&path, value, ty.as_ref(), column_expr, dialect))
    }

    /// Whole-column constructor for a tree of attributes.
    ///
    /// Nested objects become nested constructors stored as the intermediate
    /// type, null leaves are skipped and an empty tree renders `NULL`.
    pub fn compile_create<'a, I>(attributes: I, dialect: &Dialect) -> Result<String, CompileError>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        Ok(Self::create_level("", attributes, dialect)?.unwrap_or_else(|| "NULL".to_string()))
    }

    fn create_level<'a, I>(prefix: &str, attributes: I, dialect: &Dialect) -> Result<Option<String>, CompileError>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        let mut pairs = vec![];

        for (key, value) in attributes {
            let name = if prefix.is_empty() { key.clone() } else { format!("{}.{}", prefix, key) };

            if let Value::Object(children) = value {
                if let Some(nested) = Self::create_level(&name, children, dialect)? {
                    pairs.push((key.clone(), nested, dialect.intermediate_type.clone()));
                }
                continue;
            }

            let scalar = DynValue::from_json(&name, value)?;
            if let (Some(literal), Some(ty)) = (scalar.to_sql_literal(dialect), TypeInference::infer(&scalar)) {
                pairs.push((key.clone(), literal, ty.render(dialect.type_case)));
            }
        }

        if pairs.is_empty() {
            return Ok(None);
        }
        Ok(Some(dialect.create(&pairs)))
    }
}
