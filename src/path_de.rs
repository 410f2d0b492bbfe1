use serde_json::{Map, Value};

use crate::error::{json_type_name, Error, Result};

/// Parse JSON text, with JSON-path context in error messages.
pub fn parse_with_path(src: &str) -> Result<Value> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = match serde_path_to_error::deserialize::<_, Value>(&mut de) {
        Ok(v) => v,
        Err(err) => {
            let path = err.path().to_string();
            return Err(Error::Parse { path, source: err.into_inner() });
        }
    };
    // trailing garbage after the document
    de.end().map_err(|source| Error::Parse { path: ".".to_string(), source })?;
    Ok(value)
}

/// Optionally descend into `value` with a JSON Pointer, then require an object.
pub fn select_object(value: Value, json_pointer: Option<&str>) -> Result<Map<String, Value>> {
    let value = match json_pointer {
        None => value,
        Some(pointer) => {
            let mut value = value;
            match value.pointer_mut(pointer) {
                Some(selected) => selected.take(),
                None => return Err(Error::Pointer { pointer: pointer.to_string() }),
            }
        }
    };
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::Shape { found: json_type_name(&other) }),
    }
}

/// Parse a document that must be a JSON object at the top level.
pub fn parse_object(src: &str) -> Result<Map<String, Value>> {
    select_object(parse_with_path(src)?, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_path() {
        let err = parse_with_path(r#"{"msg": {"tags": [1, 2,, 3]}}"#).unwrap_err();
        match err {
            Error::Parse { path, .. } => assert!(path.starts_with("msg.tags"), "path: {path}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn trailing_characters_are_rejected() {
        let err = parse_with_path(r#"{"a": 1} x"#).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn top_level_array_is_a_shape_error() {
        let err = parse_object("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::Shape { found: "an array" }));
        let err = parse_object("null").unwrap_err();
        assert!(matches!(err, Error::Shape { found: "null" }));
    }

    #[test]
    fn pointer_selects_nested_object() {
        let value = parse_with_path(r#"{"data": {"items": [{"id": 1}]}}"#).unwrap();
        let map = select_object(value, Some("/data/items/0")).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["id"]);
    }

    #[test]
    fn pointer_miss_and_non_object_target() {
        let value = parse_with_path(r#"{"data": {"n": 3}}"#).unwrap();
        let err = select_object(value.clone(), Some("/nope")).unwrap_err();
        assert!(matches!(err, Error::Pointer { .. }));
        let err = select_object(value, Some("/data/n")).unwrap_err();
        assert!(matches!(err, Error::Shape { found: "a number" }));
    }
}
