//! Free-text row filtering.
//!
//! Filtering is a case-insensitive substring match across *all* of a
//! record's fields, not just the displayed columns. Each field value is
//! converted to its display text (see
//! [`display_text`](crate::record::display_text)), uppercased, and checked
//! for the uppercased filter term. Null and missing fields convert to the
//! empty string, so they simply never match.

use crate::record::{display_text, Record};

/// Reduces `items` to those containing `term` in any field.
///
/// An empty term passes the full collection through unchanged; otherwise the
/// result keeps the input order and contains exactly the records where at
/// least one field's display text contains the term, ignoring case.
///
/// # Examples
///
/// ```
/// use headless_table::filter::apply_filter;
/// use serde_json::{json, Map, Value};
///
/// let items: Vec<Map<String, Value>> = vec![
///     json!({"name": "ana", "age": 30}).as_object().unwrap().clone(),
///     json!({"name": "bo", "age": 20}).as_object().unwrap().clone(),
/// ];
///
/// assert_eq!(apply_filter(&items, "").len(), 2);
/// assert_eq!(apply_filter(&items, "BO").len(), 1);
/// assert_eq!(apply_filter(&items, "30").len(), 1);
/// assert_eq!(apply_filter(&items, "carol").len(), 0);
/// ```
pub fn apply_filter<R: Record>(items: &[R], term: &str) -> Vec<R> {
    if term.is_empty() {
        return items.to_vec();
    }

    let needle = term.to_uppercase();
    items
        .iter()
        .filter(|item| {
            item.field_keys().iter().any(|key| {
                item.field(key)
                    .is_some_and(|value| display_text(&value).to_uppercase().contains(&needle))
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Map, Value};

    type Rec = Map<String, Value>;

    fn record(value: Value) -> Rec {
        value.as_object().expect("object literal").clone()
    }

    fn people() -> Vec<Rec> {
        vec![
            record(json!({"name": "ana", "age": 30})),
            record(json!({"name": "bo", "age": 20})),
            record(json!({"name": "carol", "age": 25})),
        ]
    }

    #[test]
    fn empty_term_is_identity() {
        let items = people();
        assert_eq!(apply_filter(&items, ""), items);
    }

    #[test]
    fn match_is_case_insensitive() {
        let kept = apply_filter(&people(), "BO");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0]["name"], json!("bo"));
    }

    #[test]
    fn match_is_substring_not_token() {
        // "aro" sits in the middle of "carol".
        assert_eq!(apply_filter(&people(), "aro").len(), 1);
    }

    #[test]
    fn all_fields_are_searched() {
        // "25" only occurs in the age field.
        let kept = apply_filter(&people(), "25");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0]["name"], json!("carol"));
    }

    #[test]
    fn null_fields_never_match_and_never_panic() {
        let items = vec![record(json!({"name": null, "age": 30}))];
        assert!(apply_filter(&items, "null").is_empty());
        assert_eq!(apply_filter(&items, "30").len(), 1);
    }

    #[test]
    fn input_order_is_preserved() {
        let kept = apply_filter(&people(), "a");
        let names: Vec<&Value> = kept.iter().map(|r| &r["name"]).collect();
        assert_eq!(names, [&json!("ana"), &json!("carol")]);
    }

    proptest! {
        #[test]
        fn empty_term_passes_everything_through(ages in proptest::collection::vec(0u32..100, 0..20)) {
            let items: Vec<Rec> = ages.iter().map(|a| record(json!({"age": a}))).collect();
            prop_assert_eq!(apply_filter(&items, ""), items);
        }

        #[test]
        fn every_kept_row_contains_the_term(
            names in proptest::collection::vec("[a-z]{0,8}", 0..20),
            term in "[a-z]{1,3}",
        ) {
            let items: Vec<Rec> = names.iter().map(|n| record(json!({"name": n}))).collect();
            let kept = apply_filter(&items, &term);
            for row in &kept {
                let name = row["name"].as_str().unwrap();
                prop_assert!(name.to_uppercase().contains(&term.to_uppercase()));
            }
            // Everything excluded really does not match.
            let kept_count = names
                .iter()
                .filter(|n| n.to_uppercase().contains(&term.to_uppercase()))
                .count();
            prop_assert_eq!(kept.len(), kept_count);
        }
    }
}
