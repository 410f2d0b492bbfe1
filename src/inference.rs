//! Single-sample shape inference.
//!
//! Walk one JSON object and record, per key and in insertion order, either a
//! scalar field kind or the shape of a nested object. Arrays of objects are
//! represented by their first element only; the other elements are not
//! reconciled with it.
pub mod scalar;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

pub use scalar::{classify_scalar, ElementKind, FieldKind};

// ------------------------------ Shape Tree -------------------------------- //

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ShapeTree {
    fields: IndexMap<String, FieldSlot>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSlot {
    Scalar(FieldKind),
    /// A nested object. Empty means "generic map".
    Nested(ShapeTree),
    /// A non-empty array of objects, shaped from its representative element.
    NestedList(ShapeTree),
}

impl ShapeTree {
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn get(&self, key: &str) -> Option<&FieldSlot> { self.fields.get(key) }

    /// Slots in the key order of the source object.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSlot)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, FieldSlot)> for ShapeTree {
    fn from_iter<I: IntoIterator<Item = (String, FieldSlot)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

// ------------------------------- Observe ---------------------------------- //

/// Infer the shape of a JSON object. Total: empty objects and arrays are
/// modeled, never rejected.
pub fn infer(object: &Map<String, Value>) -> ShapeTree {
    object
        .iter()
        .map(|(key, value)| {
            let slot = infer_slot(value);
            tracing::trace!(key = %key, slot = slot_label(&slot), "inferred slot");
            (key.clone(), slot)
        })
        .collect()
}

fn infer_slot(value: &Value) -> FieldSlot {
    match value {
        Value::Object(map) => FieldSlot::Nested(infer(map)),
        Value::Array(xs) => match xs.first() {
            Some(Value::Object(representative)) => FieldSlot::NestedList(infer(representative)),
            _ => FieldSlot::Scalar(classify_scalar(value)),
        },
        _ => FieldSlot::Scalar(classify_scalar(value)),
    }
}

fn slot_label(slot: &FieldSlot) -> &'static str {
    match slot {
        FieldSlot::Scalar(_) => "scalar",
        FieldSlot::Nested(_) => "nested",
        FieldSlot::NestedList(_) => "nested_list",
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn infer_json(v: Value) -> ShapeTree {
        infer(v.as_object().unwrap())
    }

    #[test]
    fn keys_keep_insertion_order() {
        let shape = infer_json(json!({"z": 1, "a": "x", "m": true}));
        let keys: Vec<&str> = shape.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn empty_object_is_an_empty_nested_shape() {
        let shape = infer_json(json!({"a": {}}));
        assert_eq!(shape.get("a"), Some(&FieldSlot::Nested(ShapeTree::default())));
    }

    #[test]
    fn array_of_objects_samples_first_element_only() {
        let shape = infer_json(json!({"a": [{"b": 1}, {"b": "second", "c": 2}]}));
        let Some(FieldSlot::NestedList(inner)) = shape.get("a") else {
            panic!("expected nested list slot");
        };
        assert_eq!(inner.len(), 1);
        assert_eq!(inner.get("b"), Some(&FieldSlot::Scalar(FieldKind::Integer)));
    }

    #[test]
    fn empty_array_and_scalar_lists_stay_scalar() {
        let shape = infer_json(json!({"a": [], "b": ["x"], "c": [null, {"k": 1}]}));
        assert_eq!(shape.get("a"), Some(&FieldSlot::Scalar(FieldKind::UntypedList)));
        assert_eq!(shape.get("b"), Some(&FieldSlot::Scalar(FieldKind::List(ElementKind::String))));
        assert_eq!(shape.get("c"), Some(&FieldSlot::Scalar(FieldKind::UntypedList)));
    }

    #[test]
    fn deep_nesting_recurses() {
        let shape = infer_json(json!({"a": {"b": {"c": [{"d": null}]}}}));
        let Some(FieldSlot::Nested(a)) = shape.get("a") else { panic!() };
        let Some(FieldSlot::Nested(b)) = a.get("b") else { panic!() };
        let Some(FieldSlot::NestedList(c)) = b.get("c") else { panic!() };
        assert_eq!(c.get("d"), Some(&FieldSlot::Scalar(FieldKind::String)));
    }

    #[test]
    fn empty_root() {
        assert!(infer(&Map::new()).is_empty());
    }

    #[test]
    fn serializes_as_debug_view() {
        let shape = infer_json(json!({"n": 1, "tags": ["a"], "meta": {}, "items": [{"id": 2}]}));
        let view = serde_json::to_value(&shape).unwrap();
        assert_eq!(view, json!({
            "n": {"scalar": "integer"},
            "tags": {"scalar": {"list": "string"}},
            "meta": {"nested": {}},
            "items": {"nested_list": {"id": {"scalar": "integer"}}},
        }));
    }
}
