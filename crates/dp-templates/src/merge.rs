//! Recursive merge of JSON style objects

use serde_json::Value;

/// Merge `overlay` into `base`.
///
/// Objects are merged key by key, recursing into nested objects. Any other
/// overlay value (including arrays) replaces the base value outright.
pub fn merge_json(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}
