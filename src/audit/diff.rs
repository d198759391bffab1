//! Summaries of what changed between two entity snapshots

use serde_json::{Map, Value};

/// Describe the top-level fields that differ between two snapshots,
/// e.g. `closed: false -> true, balance: 1000 -> 1500`.
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before), Value::Object(after)) => field_changes(before, after),
        _ if before != after => vec![format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )],
        _ => Vec::new(),
    };

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn field_changes(before: &Map<String, Value>, after: &Map<String, Value>) -> Vec<String> {
    let mut changes: Vec<String> = before
        .iter()
        .filter_map(|(key, old)| match after.get(key) {
            Some(new) if new == old => None,
            Some(new) => Some(format!(
                "{}: {} -> {}",
                key,
                format_value(old),
                format_value(new)
            )),
            None => Some(format!("{}: {} -> (removed)", key, format_value(old))),
        })
        .collect();

    changes.extend(
        after
            .iter()
            .filter(|(key, _)| !before.contains_key(*key))
            .map(|(key, new)| format!("{}: (added) -> {}", key, format_value(new))),
    );

    changes
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}
