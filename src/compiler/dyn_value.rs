use std::fmt::{self, Display};

use ordered_float::NotNan;
use serde_json::Value;

use crate::compiler::{CompileError, Dialect};

/// Runtime kind of an in-memory attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Unsigned,
    Float,
    Text,
    Boolean,
    Null,
    Absent,
}

/// Scalar value written into a dynamic attribute.
///
/// `Absent` and `Null` both remove the key from the packed column.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum DynValue {
    Absent,
    Null,
    Bool(bool),
    Int(i64),
    /// Only for integers above `i64::MAX`.
    UInt(u64),
    Float(NotNan<f64>),
    Text(String),
}

impl DynValue {
    /// `None` for NaN and infinities, which have no SQL literal.
    pub fn float(value: f64) -> Option<DynValue> {
        if !value.is_finite() {
            return None;
        }
        NotNan::new(value).ok().map(DynValue::Float)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            DynValue::Absent => ValueKind::Absent,
            DynValue::Null => ValueKind::Null,
            DynValue::Bool(_) => ValueKind::Boolean,
            DynValue::Int(_) => ValueKind::Integer,
            DynValue::UInt(_) => ValueKind::Unsigned,
            DynValue::Float(_) => ValueKind::Float,
            DynValue::Text(_) => ValueKind::Text,
        }
    }

    pub fn is_removal(&self) -> bool {
        matches!(self, DynValue::Absent | DynValue::Null)
    }

    /// Scalar JSON values map one to one; arrays and objects are rejected.
    pub fn from_json(path: &str, value: &Value) -> Result<DynValue, CompileError> {
        let unsupported = |reason: &str| CompileError::UnsupportedValue {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        match value {
            Value::Null => Ok(DynValue::Null),
            Value::Bool(b) => Ok(DynValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(DynValue::Int(i));
                }
                if let Some(u) = n.as_u64() {
                    return Ok(DynValue::UInt(u));
                }
                n.as_f64()
                    .and_then(DynValue::float)
                    .ok_or_else(|| unsupported("number is not representable"))
            }
            Value::String(s) => Ok(DynValue::Text(s.clone())),
            Value::Array(_) => Err(unsupported("arrays are not supported")),
            Value::Object(_) => Err(unsupported("nested objects are not scalar values")),
        }
    }

    /// SQL literal for the value, `None` for removals.
    pub fn to_sql_literal(&self, dialect: &Dialect) -> Option<String> {
        match self {
            DynValue::Absent | DynValue::Null => None,
            DynValue::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            DynValue::Int(i) => Some(i.to_string()),
            DynValue::UInt(u) => Some(u.to_string()),
            DynValue::Float(f) => Some(f.into_inner().to_string()),
            DynValue::Text(s) => Some(dialect.quote_string(s)),
        }
    }
}

impl From<i64> for DynValue {
    fn from(value: i64) -> Self {
        DynValue::Int(value)
    }
}

impl From<i32> for DynValue {
    fn from(value: i32) -> Self {
        DynValue::Int(value.into())
    }
}

impl From<bool> for DynValue {
    fn from(value: bool) -> Self {
        DynValue::Bool(value)
    }
}

impl From<&str> for DynValue {
    fn from(value: &str) -> Self {
        DynValue::Text(value.to_string())
    }
}

impl From<String> for DynValue {
    fn from(value: String) -> Self {
        DynValue::Text(value)
    }
}

impl<T: Into<DynValue>> From<Option<T>> for DynValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DynValue::Null, Into::into)
    }
}

impl Display for DynValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynValue::Absent => write!(f, "absent"),
            DynValue::Null => write!(f, "NULL"),
            DynValue::Bool(b) => write!(f, "b: {}", b),
            DynValue::Int(i) => write!(f, "i: {}", i),
            DynValue::UInt(u) => write!(f, "u: {}", u),
            DynValue::Float(n) => write!(f, "f: {}", n.into_inner()),
            DynValue::Text(s) => write!(f, "s: \"{}\"", s),
        }
    }
}

impl fmt::Debug for DynValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynValue::Absent => write!(f, "Absent"),
            DynValue::Null => write!(f, "Null"),
            DynValue::Bool(_) => write!(f, "Bool({})", self),
            DynValue::Int(_) => write!(f, "Int({})", self),
            DynValue::UInt(_) => write!(f, "UInt({})", self),
            DynValue::Float(_) => write!(f, "Float({})", self),
            DynValue::Text(_) => write!(f, "Text({})", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::compiler::{CompileError, Dialect, DynValue, ValueKind};

    #[test]
    pub fn test_kinds() {
        assert_eq!(DynValue::from(3).kind(), ValueKind::Integer);
        assert_eq!(DynValue::float(1.5).unwrap().kind(), ValueKind::Float);
        assert_eq!(DynValue::from("x").kind(), ValueKind::Text);
        assert_eq!(DynValue::from(true).kind(), ValueKind::Boolean);
        assert_eq!(DynValue::from(None::<i64>).kind(), ValueKind::Null);
        assert_eq!(DynValue::Absent.kind(), ValueKind::Absent);
        assert!(DynValue::float(f64::NAN).is_none());
        assert_eq!(DynValue::UInt(u64::MAX).kind(), ValueKind::Unsigned);
    }

    #[test]
    pub fn test_infinities_have_no_literal() {
        assert!(DynValue::float(f64::INFINITY).is_none());
        assert!(DynValue::float(f64::NEG_INFINITY).is_none());
        assert_eq!(DynValue::float(f64::MAX).unwrap().kind(), ValueKind::Float);
    }

    #[test]
    pub fn test_integers_above_i64_stay_exact() {
        let dialect = Dialect::mariadb();

        let value = DynValue::from_json("n", &json!(u64::MAX)).unwrap();
        assert_eq!(value, DynValue::UInt(u64::MAX));
        assert_eq!(value.to_sql_literal(&dialect).unwrap(), "18446744073709551615");

        assert_eq!(DynValue::from_json("n", &json!(i64::MAX)).unwrap(), DynValue::Int(i64::MAX));
        assert_eq!(DynValue::from_json("n", &json!(-1)).unwrap(), DynValue::Int(-1));
    }

    #[test]
    pub fn test_literals() {
        let dialect = Dialect::mariadb();

        assert_eq!(DynValue::from(-7).to_sql_literal(&dialect).unwrap(), "-7");
        assert_eq!(DynValue::float(2.25).unwrap().to_sql_literal(&dialect).unwrap(), "2.25");
        assert_eq!(DynValue::from(true).to_sql_literal(&dialect).unwrap(), "1");
        assert_eq!(DynValue::from(false).to_sql_literal(&dialect).unwrap(), "0");
        assert_eq!(DynValue::from("it's").to_sql_literal(&dialect).unwrap(), r"'it\'s'");
        assert_eq!(DynValue::Null.to_sql_literal(&dialect), None);
        assert_eq!(DynValue::Absent.to_sql_literal(&dialect), None);
    }

    #[test]
    pub fn test_from_json() {
        assert_eq!(DynValue::from_json("a", &json!(5)).unwrap(), DynValue::Int(5));
        assert_eq!(DynValue::from_json("a", &json!(0.5)).unwrap(), DynValue::float(0.5).unwrap());
        assert_eq!(DynValue::from_json("a", &json!("s")).unwrap(), DynValue::from("s"));
        assert_eq!(DynValue::from_json("a", &json!(null)).unwrap(), DynValue::Null);

        match DynValue::from_json("tags", &json!([1, 2])) {
            Err(CompileError::UnsupportedValue { path, .. }) => assert_eq!(path, "tags"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
