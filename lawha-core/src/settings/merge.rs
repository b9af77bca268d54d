//! Recursive settings merge.
//!
//! Objects merge key-wise; any other override value, arrays and null
//! included, replaces the default wholesale. Keys the override does not
//! mention keep their default, which is what lets blobs written by an older
//! schema load into a newer one.

use serde_json::Value;

/// Merges `overrides` onto `defaults`, returning the combined value.
pub fn merge_values(defaults: Value, overrides: Value) -> Value {
    match (defaults, overrides) {
        (Value::Object(mut base), Value::Object(over)) => {
            for (key, value) in over {
                let merged = match base.remove(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            Value::Object(base)
        }
        (_, over) => over,
    }
}
