//! Structured "details" data: discovery and sanitization.

use serde_json::{Map, Value};

use crate::key::{is_excluded, normalize_key};

/// Key-paths probed for structured data, highest priority first.
pub const STRUCTURED_PATHS: &[&[&str]] = &[
    &["payload", "data"],
    &["payload", "result"],
    &["payload", "output"],
    &["payload"],
    &["data"],
    &["result"],
    &["output"],
];

/// Return the first non-empty array or object found at one of
/// [`STRUCTURED_PATHS`]. Empty containers and scalars are passed over.
pub fn discover_structured(body: &Value) -> Option<&Value> {
    STRUCTURED_PATHS
        .iter()
        .filter_map(|path| resolve_path(body, path))
        .find(|candidate| is_non_empty_container(candidate))
}

/// Walk `path` through nested objects. Any missing key, a non-object on
/// the way, or an excluded segment (`output`, `outputs`) resolves to `None`.
pub fn resolve_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| {
        if is_excluded(&normalize_key(segment)) {
            return None;
        }
        current.as_object()?.get(*segment)
    })
}

/// Strip excluded keys at every depth and collapse containers that end up
/// empty. Collapsed values become `Value::Null`.
///
/// Objects drop members whose sanitized value is null or an empty array;
/// arrays drop elements the same way. Scalars are returned unchanged.
pub fn sanitize(value: &Value) -> Value {
    match value {
        Value::Object(members) => {
            let kept: Map<String, Value> = members
                .iter()
                .filter(|(key, _)| !is_excluded(&normalize_key(key)))
                .map(|(key, child)| (key.clone(), sanitize(child)))
                .filter(|(_, child)| !is_collapsed(child))
                .collect();
            if kept.is_empty() {
                Value::Null
            } else {
                Value::Object(kept)
            }
        }
        Value::Array(items) => {
            let kept: Vec<Value> = items
                .iter()
                .map(sanitize)
                .filter(|child| !is_collapsed(child))
                .collect();
            if kept.is_empty() {
                Value::Null
            } else {
                Value::Array(kept)
            }
        }
        scalar => scalar.clone(),
    }
}

fn is_collapsed(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn is_non_empty_container(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(members) => !members.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_walks_nested_objects() {
        let v = json!({"payload": {"data": {"x": 1}}});
        assert_eq!(resolve_path(&v, &["payload", "data"]), Some(&json!({"x": 1})));
        assert_eq!(resolve_path(&v, &["payload", "missing"]), None);
        assert_eq!(resolve_path(&v, &[]), Some(&v));
    }

    #[test]
    fn resolve_stops_at_non_objects() {
        let v = json!({"payload": [{"data": 1}]});
        assert_eq!(resolve_path(&v, &["payload", "data"]), None);
        assert_eq!(resolve_path(&json!("text"), &["payload"]), None);
    }

    #[test]
    fn resolve_refuses_excluded_segments() {
        let v = json!({"output": {"x": 1}, "payload": {"Outputs": [1]}});
        assert_eq!(resolve_path(&v, &["output"]), None);
        assert_eq!(resolve_path(&v, &["payload", "Outputs"]), None);
    }

    #[test]
    fn output_probes_fall_through_to_later_paths() {
        let v = json!({"payload": {"output": {"secret": "raw"}, "x": 1}});
        assert_eq!(discover_structured(&v), v.get("payload"));
        assert_eq!(sanitize(&v["payload"]), json!({"x": 1}));

        let top = json!({"output": {"secret": "raw"}, "result": [1]});
        assert_eq!(discover_structured(&top), Some(&json!([1])));

        let only = json!({"output": {"secret": "raw"}});
        assert_eq!(discover_structured(&only), None);
    }

    #[test]
    fn payload_data_has_priority() {
        let v = json!({
            "data": {"low": true},
            "payload": {"other": 1, "data": {"high": true}}
        });
        assert_eq!(discover_structured(&v), Some(&json!({"high": true})));
    }

    #[test]
    fn empty_and_scalar_candidates_are_skipped() {
        let v = json!({
            "payload": {"data": {}, "result": [], "output": "text"},
            "data": 17,
            "result": [1, 2]
        });
        // Empty data/result and the excluded output probe are passed over;
        // payload itself is a non-empty object, so it wins before `data`.
        assert_eq!(discover_structured(&v), v.get("payload"));

        let w = json!({"payload": {}, "data": "", "result": [1, 2]});
        assert_eq!(discover_structured(&w), Some(&json!([1, 2])));
    }

    #[test]
    fn nothing_found() {
        assert_eq!(discover_structured(&json!({})), None);
        assert_eq!(discover_structured(&json!({"reply": "hi"})), None);
        assert_eq!(discover_structured(&json!(["payload"])), None);
        assert_eq!(discover_structured(&json!(null)), None);
    }

    #[test]
    fn sanitize_strips_output_at_any_depth() {
        let v = json!({"x": 1, "output": {"secret": true}, "nested": {"Outputs": [1], "y": 2}});
        assert_eq!(sanitize(&v), json!({"x": 1, "nested": {"y": 2}}));
    }

    #[test]
    fn sanitize_collapses_empty_containers() {
        let v = json!({"a": {}, "b": [], "c": null, "d": [{}, [], null], "e": {"output": 1}});
        assert_eq!(sanitize(&v), Value::Null);

        let arr = json!([{"output": 1}, [], "keep"]);
        assert_eq!(sanitize(&arr), json!(["keep"]));
    }

    #[test]
    fn sanitize_keeps_falsy_scalars() {
        let v = json!({"zero": 0, "no": false, "blank": ""});
        assert_eq!(sanitize(&v), v);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(sanitize(&json!("hi")), json!("hi"));
        assert_eq!(sanitize(&json!(3.5)), json!(3.5));
        assert_eq!(sanitize(&json!(null)), Value::Null);
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = [
            json!({"a": {"output": 1, "b": [null, {}, {"c": []}]}, "d": "x"}),
            json!([[[]], [{"outputs": {}}], 0]),
            json!({"payload": {"data": [{"id": 1, "output": "raw"}]}}),
            json!({}),
            json!([]),
            json!("scalar"),
            json!(null),
        ];
        for x in samples {
            let once = sanitize(&x);
            assert_eq!(sanitize(&once), once, "not idempotent for {x}");
        }
    }
}
