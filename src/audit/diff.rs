//! Diff generation for audit logging
//!
//! Generates human-readable diffs between before and after values for audit
//! log entries. Only top-level field changes are reported.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => {
                        changes.push(format!(
                            "{}: {} -> {}",
                            key,
                            format_value(before_val),
                            format_value(after_val)
                        ));
                    }
                    Some(_) => {}
                    None => {
                        changes.push(format!("{}: {} -> (removed)", key, format_value(before_val)));
                    }
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ => {
            if before != after {
                Some(format!("{} -> {}", format_value(before), format_value(after)))
            } else {
                None
            }
        }
    }
}

/// Render a JSON value compactly for diff output
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(_) => "{...}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_change() {
        let before = json!({"status": "pending", "city": "Dehradun"});
        let after = json!({"status": "verified", "city": "Dehradun"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("status"));
        assert!(!diff.contains("city"));
    }

    #[test]
    fn test_no_change_is_none() {
        let value = json!({"status": "pending"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"old_field": 1});
        let after = json!({"new_field": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("(removed)"));
        assert!(diff.contains("(added)"));
    }
}
