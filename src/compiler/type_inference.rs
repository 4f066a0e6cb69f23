use crate::{
    compiler::{DynValue, ValueKind},
    parser::{TypeDescriptor, TypeKeyword},
};

/// Default write encoding for a value with no explicit type.
///
/// | kind    | encoding  |
/// |---------|-----------|
/// | Integer | `INTEGER` |
/// | Unsigned | `UNSIGNED INTEGER` |
/// | Float   | `DOUBLE`  |
/// | Text    | `CHAR`    |
/// | Boolean | `INTEGER` |
/// | Null    | delete    |
/// | Absent  | delete    |
pub struct TypeInference;

impl TypeInference {
    /// `None` means the key is removed rather than written.
    pub fn encoding_for(kind: ValueKind) -> Option<TypeKeyword> {
        match kind {
            ValueKind::Integer => Some(TypeKeyword::Integer),
            ValueKind::Unsigned => Some(TypeKeyword::Unsigned),
            ValueKind::Float => Some(TypeKeyword::Double),
            ValueKind::Text => Some(TypeKeyword::Char),
            ValueKind::Boolean => Some(TypeKeyword::Integer),
            ValueKind::Null | ValueKind::Absent => None,
        }
    }

    pub fn infer(value: &DynValue) -> Option<TypeDescriptor> {
        match value.kind() {
            ValueKind::Unsigned => Some(TypeDescriptor {
                keyword: TypeKeyword::Unsigned,
                keyword_text: "UNSIGNED INTEGER".to_string(),
                params: None,
            }),
            kind => Self::encoding_for(kind).map(TypeDescriptor::plain),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        compiler::{DynValue, TypeInference, ValueKind},
        parser::TypeKeyword,
    };

    #[test]
    pub fn test_table_is_total() {
        let table = [
            (ValueKind::Integer, Some(TypeKeyword::Integer)),
            (ValueKind::Unsigned, Some(TypeKeyword::Unsigned)),
            (ValueKind::Float, Some(TypeKeyword::Double)),
            (ValueKind::Text, Some(TypeKeyword::Char)),
            (ValueKind::Boolean, Some(TypeKeyword::Integer)),
            (ValueKind::Null, None),
            (ValueKind::Absent, None),
        ];

        for (kind, expected) in table {
            assert_eq!(TypeInference::encoding_for(kind), expected, "{:?}", kind);
        }
    }

    #[test]
    pub fn test_infer_descriptor() {
        assert_eq!(TypeInference::infer(&DynValue::from(1)).unwrap().to_string(), "INTEGER");
        assert_eq!(TypeInference::infer(&DynValue::from("a")).unwrap().to_string(), "CHAR");
        assert_eq!(TypeInference::infer(&DynValue::UInt(u64::MAX)).unwrap().to_string(), "UNSIGNED INTEGER");
        assert_eq!(TypeInference::infer(&DynValue::Null), None);
    }
}
