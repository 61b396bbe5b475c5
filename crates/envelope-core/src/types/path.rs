//! Dotted-path assignment into JSON objects.

use serde_json::{Map, Value};

/// Set `value` at a dotted `path` inside `target`.
///
/// `"meta.pagination.page"` places the value under
/// `target["meta"]["pagination"]["page"]`. Missing intermediate levels are
/// created as empty objects. Existing arrays are written into when the
/// segment is an index within or just past their end (`"data.1"`,
/// `"rows.0.id"`); any other segment turns the array into an object keyed
/// by position. Scalar intermediates are replaced by an object. The final
/// segment is always overwritten. A path without dots is a plain insert.
pub fn set_path(target: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            target.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let slot = target
                .entry(head)
                .or_insert_with(|| Value::Object(Map::new()));
            set_within(slot, rest, value);
        }
    }
}

/// Set `value` at `path` relative to the container `slot`.
fn set_within(slot: &mut Value, path: &str, value: Value) {
    if let Value::Array(items) = &mut *slot {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        if let Some(index) = array_index(head).filter(|i| *i <= items.len()) {
            match rest {
                None if index == items.len() => items.push(value),
                None => items[index] = value,
                Some(rest) => {
                    if index == items.len() {
                        items.push(Value::Object(Map::new()));
                    }
                    set_within(&mut items[index], rest, value);
                }
            }
            return;
        }

        let keyed: Map<String, Value> = std::mem::take(items)
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect();
        *slot = Value::Object(keyed);
    }

    if !slot.is_object() {
        tracing::debug!(path = %path, "Replacing scalar value with nested object");
        *slot = Value::Object(Map::new());
    }

    if let Value::Object(child) = slot {
        set_path(child, path, value);
    }
}

/// Canonical non-negative integer segment (`"0"`, `"12"`, not `"01"`).
fn array_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == segment)
}
