use crate::{
    compiler::{AccessorCompiler, CompileError, Dialect, DynValue, WriteCompiler},
    entity::{ColumnRef, DynamicAttributes, DynamicEntity},
};

/// Attribute read/write by dotted name on a record of a given entity type.
///
/// The dynamic column is resolved first, so an entity without one fails
/// with `UnknownAttribute` before any SQL is produced.
pub struct AttributeResolver;

impl AttributeResolver {
    pub fn read(
        entity: &dyn DynamicEntity,
        name: &str,
        type_text: Option<&str>,
        dialect: &Dialect,
    ) -> Result<String, CompileError> {
        let column = Self::column_for(entity, name)?;
        AccessorCompiler::compile_attribute_read(name, type_text, &column.qualified(dialect), dialect)
    }

    pub fn write(
        entity: &dyn DynamicEntity,
        name: &str,
        value: &DynValue,
        type_text: Option<&str>,
        dialect: &Dialect,
    ) -> Result<String, CompileError> {
        let column = Self::column_for(entity, name)?;
        WriteCompiler::compile_attribute_write(name, value, type_text, &column.qualified(dialect), dialect)
    }

    /// Write using the record's current in-memory value, so its runtime kind
    /// picks the encoding when no type is given.
    pub fn write_current(
        entity: &dyn DynamicEntity,
        attributes: &DynamicAttributes,
        name: &str,
        type_text: Option<&str>,
        dialect: &Dialect,
    ) -> Result<String, CompileError> {
        let value = attributes.value(name)?;
        Self::write(entity, name, &value, type_text, dialect)
    }

    /// `` `column` = <write expression> `` for an UPDATE statement.
    pub fn assignment(
        entity: &dyn DynamicEntity,
        name: &str,
        value: &DynValue,
        type_text: Option<&str>,
        dialect: &Dialect,
    ) -> Result<String, CompileError> {
        let column = Self::column_for(entity, name)?;
        let expression = Self::write(entity, name, value, type_text, dialect)?;
        Ok(format!("{} = {}", column.quoted(dialect), expression))
    }

    fn column_for(entity: &dyn DynamicEntity, name: &str) -> Result<ColumnRef, CompileError> {
        entity.dynamic_column().map_err(|_| CompileError::UnknownAttribute {
            entity: entity.table_name().to_string(),
            attribute: name.to_string(),
        })
    }
}
