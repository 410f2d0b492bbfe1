use serde::Serialize;
use serde_json::{Number, Value};

/// Emitted type of a leaf field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    String,
    /// Homogeneous list, typed from its first element.
    List(ElementKind),
    /// Empty list, or a list whose first element carries no usable type.
    UntypedList,
    GenericMap,
}

/// Element type of a typed list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Integer,
    Float,
    Boolean,
    String,
    GenericMap,
}

/// Integral iff the literal was integral: `1`, `-0` and integers past
/// `u64::MAX` are integers, `1.0` and `1e2` are not. Needs serde_json's
/// `arbitrary_precision` so the literal text survives parsing.
pub fn is_integer(n: &Number) -> bool {
    !n.as_str().contains(['.', 'e', 'E'])
}

fn element_kind(first: &Value) -> Option<ElementKind> {
    match first {
        Value::Object(_) => Some(ElementKind::GenericMap),
        Value::Number(n) if is_integer(n) => Some(ElementKind::Integer),
        Value::Number(_) => Some(ElementKind::Float),
        Value::Bool(_) => Some(ElementKind::Boolean),
        Value::String(_) => Some(ElementKind::String),
        Value::Null | Value::Array(_) => None,
    }
}

/// Field kind of a value that is not expanded into a nested shape.
///
/// Pure in the value's JSON type (and, for numbers, in whether the literal is
/// integral). Null falls back to `String`; never fails.
pub fn classify_scalar(value: &Value) -> FieldKind {
    match value {
        Value::Number(n) if is_integer(n) => FieldKind::Integer,
        Value::Number(_) => FieldKind::Float,
        Value::Bool(_) => FieldKind::Boolean,
        Value::String(_) => FieldKind::String,
        Value::Array(xs) => match xs.first().and_then(element_kind) {
            Some(elem) => FieldKind::List(elem),
            None => FieldKind::UntypedList,
        },
        Value::Object(_) => FieldKind::GenericMap,
        Value::Null => FieldKind::String,
    }
}
