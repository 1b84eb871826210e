//! Row records and the dynamic value type used throughout the table core.
//!
//! A table row is an opaque keyed record: a mapping from string keys to
//! dynamically typed values. The [`Record`] trait is the seam between the
//! table core and whatever concrete row type an application uses. A ready-made
//! implementation is provided for [`serde_json::Map<String, Value>`], which is
//! the natural shape for rows coming off an API response.
//!
//! Values are carried as [`serde_json::Value`]. The crate enables the
//! `preserve_order` feature so that object key iteration follows insertion
//! order; column inference depends on this (see
//! [`build_columns`](crate::column::build_columns)).

use serde_json::{Map, Value};

/// A keyed row record that the table can introspect.
///
/// Implementors expose their field keys and per-key values. The table core
/// never mutates a record; it only reads fields to infer columns, filter rows
/// and materialize cells.
///
/// # Examples
///
/// ```
/// use headless_table::record::Record;
/// use serde_json::{json, Value};
///
/// #[derive(Clone)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl Record for User {
///     fn field_keys(&self) -> Vec<String> {
///         vec!["name".into(), "age".into()]
///     }
///
///     fn field(&self, key: &str) -> Option<Value> {
///         match key {
///             "name" => Some(json!(self.name)),
///             "age" => Some(json!(self.age)),
///             _ => None,
///         }
///     }
/// }
///
/// let user = User { name: "ana".into(), age: 30 };
/// assert_eq!(user.field("age"), Some(json!(30)));
/// assert_eq!(user.field("email"), None);
/// ```
pub trait Record: Clone {
    /// Returns this record's field keys, in the record's own field order.
    ///
    /// The order matters: when no explicit column set is configured, the
    /// columns are inferred from the first record's keys in exactly this
    /// order.
    fn field_keys(&self) -> Vec<String>;

    /// Returns the value stored under `key`, or `None` when the record has
    /// no such field.
    fn field(&self, key: &str) -> Option<Value>;
}

impl Record for Map<String, Value> {
    fn field_keys(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

/// Converts a value to the plain text the table matches and displays.
///
/// Strings are used verbatim (no surrounding quotes), numbers and booleans
/// use their usual notation, and `Null` becomes the empty string so that a
/// missing or null field is a defined no-match during filtering rather than
/// an error. Arrays and objects fall back to their JSON serialization.
///
/// # Examples
///
/// ```
/// use headless_table::record::display_text;
/// use serde_json::json;
///
/// assert_eq!(display_text(&json!("ana")), "ana");
/// assert_eq!(display_text(&json!(30)), "30");
/// assert_eq!(display_text(&json!(true)), "true");
/// assert_eq!(display_text(&json!(null)), "");
/// ```
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn map_exposes_keys_in_insertion_order() {
        let rec = record(json!({"name": "ana", "age": 30, "active": true}));
        assert_eq!(rec.field_keys(), vec!["name", "age", "active"]);
    }

    #[test]
    fn map_field_lookup() {
        let rec = record(json!({"name": "ana"}));
        assert_eq!(rec.field("name"), Some(json!("ana")));
        assert_eq!(rec.field("missing"), None);
    }

    #[test]
    fn display_text_strings_are_unquoted() {
        assert_eq!(display_text(&json!("bo")), "bo");
    }

    #[test]
    fn display_text_null_is_empty() {
        assert_eq!(display_text(&Value::Null), "");
    }

    #[test]
    fn display_text_scalars() {
        assert_eq!(display_text(&json!(20)), "20");
        assert_eq!(display_text(&json!(2.5)), "2.5");
        assert_eq!(display_text(&json!(false)), "false");
    }

    #[test]
    fn display_text_compound_values_serialize() {
        assert_eq!(display_text(&json!([1, 2])), "[1,2]");
        assert_eq!(display_text(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
