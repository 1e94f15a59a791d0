//! Sanitization of management-command arguments into query filters.

use serde_json::{Map, Value};

/// Argument keys copied into the query filter when set.
pub const QUERY_ARGUMENT_KEYS: &[&str] = &["app_name", "notification_type", "course_id"];

/// Argument holding the date-range sub-filter (e.g. `created__gte`).
pub const CREATED_ARGUMENT_KEY: &str = "created";

/// Keep only the recognised query arguments.
///
/// Keys from [`QUERY_ARGUMENT_KEYS`] are copied when their value is set
/// (see [`is_set`]). Every entry of a non-empty `created` object is merged
/// in at the top level. Everything else is dropped.
pub fn clean_arguments(args: &Map<String, Value>) -> Map<String, Value> {
    let mut clean = Map::new();

    for key in QUERY_ARGUMENT_KEYS {
        if let Some(value) = args.get(*key).filter(|v| is_set(v)) {
            clean.insert((*key).to_string(), value.clone());
        }
    }

    if let Some(Value::Object(created)) = args.get(CREATED_ARGUMENT_KEY) {
        clean.extend(created.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    clean
}

/// Whether an argument value counts as provided: not null, `false`, zero,
/// or an empty string/array/object.
pub fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
