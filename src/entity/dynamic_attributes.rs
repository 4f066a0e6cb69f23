use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{
    compiler::{CompileError, Dialect, DynValue, WriteCompiler},
    parser::AttributePath,
};

/// Decoded contents of one record's dynamic column.
///
/// Built from the whole-column dump selected next to `*`; nested levels are
/// JSON objects and attributes are addressed by dotted name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicAttributes {
    values: IndexMap<String, Value>,
}

impl DynamicAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode dump text. An empty or `null` dump is an empty attribute set.
    pub fn from_dump(dump: &str) -> Result<Self, CompileError> {
        if dump.trim().is_empty() {
            return Ok(Self::new());
        }

        let value: Value = serde_json::from_str(dump).map_err(|e| CompileError::InvalidDump(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, CompileError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Ok(Self { values: map.into_iter().collect() }),
            other => Err(CompileError::InvalidDump(format!("expected an object, got {}", other))),
        }
    }

    /// Take the dump out of a fetched row, where it sits under `alias` either
    /// as JSON text or already decoded.
    pub fn from_row(row: &Map<String, Value>, alias: &str) -> Result<Self, CompileError> {
        match row.get(alias) {
            None | Some(Value::Null) => Ok(Self::new()),
            Some(Value::String(dump)) => Self::from_dump(dump),
            Some(value) => Self::from_value(value.clone()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let path = AttributePath::parse(name).ok()?;
        let (first, rest) = path.segments().split_first()?;

        let mut current = self.values.get(first)?;
        for segment in rest {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Current value as a scalar; missing attributes are `Absent`.
    pub fn value(&self, name: &str) -> Result<DynValue, CompileError> {
        match self.get(name) {
            Some(value) => DynValue::from_json(name, value),
            None => Ok(DynValue::Absent),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set an attribute, creating (or replacing non-object) parent levels.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), CompileError> {
        let path = AttributePath::parse(name)?;
        let value = value.into();

        let Some((first, rest)) = path.segments().split_first() else {
            return CompileError::InvalidPath(name.to_string()).err();
        };
        Self::set_nested(self.values.entry(first.clone()).or_insert(Value::Null), rest, value);

        Ok(())
    }

    pub fn unset(&mut self, name: &str) -> Option<Value> {
        let path = AttributePath::parse(name).ok()?;
        let (first, rest) = path.segments().split_first()?;
        let Some((leaf, parents)) = rest.split_last() else {
            return self.values.shift_remove(first);
        };

        let mut level = self.values.get_mut(first)?.as_object_mut()?;
        for segment in parents {
            level = level.get_mut(segment)?.as_object_mut()?;
        }
        level.shift_remove(leaf)
    }

    /// Leaf attributes keyed by dotted name, in stored order.
    pub fn flatten(&self) -> IndexMap<String, Value> {
        let mut flat = IndexMap::new();
        for (key, value) in &self.values {
            Self::flatten_into(key, value, &mut flat);
        }
        flat
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Whole-column constructor for these attributes.
    pub fn to_create_sql(&self, dialect: &Dialect) -> Result<String, CompileError> {
        WriteCompiler::compile_create(&self.values, dialect)
    }

    fn flatten_into(prefix: &str, value: &Value, flat: &mut IndexMap<String, Value>) {
        match value {
            Value::Object(children) => {
                for (key, child) in children {
                    Self::flatten_into(&format!("{}.{}", prefix, key), child, flat);
                }
            }
            leaf => {
                flat.insert(prefix.to_string(), leaf.clone());
            }
        }
    }

    fn set_nested(target: &mut Value, segments: &[String], value: Value) {
        let Some((head, rest)) = segments.split_first() else {
            *target = value;
            return;
        };

        if !target.is_object() {
            *target = Value::Object(Map::new());
        }
        if let Value::Object(map) = target {
            Self::set_nested(map.entry(head.clone()).or_insert(Value::Null), rest, value);
        }
    }
}
