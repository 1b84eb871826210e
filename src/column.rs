//! Column specification and normalization.
//!
//! Authors describe columns loosely: either a bare field key, or a partial
//! [`ColumnDef`] with any of label, style variant, CSS classes and a value
//! formatter. Before rendering, every spec is normalized into a [`Column`]
//! with a concrete label and fully resolved `td`/`th` class strings.
//!
//! When no specs are supplied at all, the column set is inferred from the
//! keys of the first row record (see [`build_columns`]).

use crate::record::Record;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// A per-column value formatter.
///
/// Called as `formatter(raw_value, key, record)` and expected to return the
/// display value for the cell. The raw value is `Value::Null` when the record
/// has no field under the column's key. Formatters are author-supplied
/// closures; if one panics, the panic propagates to the caller.
///
/// # Examples
///
/// ```
/// use headless_table::column::ColumnDef;
/// use serde_json::{json, Map, Value};
///
/// let def: ColumnDef<Map<String, Value>> = ColumnDef::new("price")
///     .with_formatter(|value, _key, _record| json!(format!("${}", value)));
/// assert!(def.formatter.is_some());
/// ```
pub type Formatter<R> = Arc<dyn Fn(&Value, &str, &R) -> Value + Send + Sync>;

/// A CSS class input: a single class string or a list of class strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassSpec {
    /// One class string, used verbatim.
    One(String),
    /// Several class strings. List entries concatenate without a separator
    /// when resolved; see [`resolve_class`].
    Many(Vec<String>),
}

impl From<&str> for ClassSpec {
    fn from(s: &str) -> Self {
        ClassSpec::One(s.to_string())
    }
}

impl From<String> for ClassSpec {
    fn from(s: String) -> Self {
        ClassSpec::One(s)
    }
}

impl From<Vec<String>> for ClassSpec {
    fn from(list: Vec<String>) -> Self {
        ClassSpec::Many(list)
    }
}

impl From<Vec<&str>> for ClassSpec {
    fn from(list: Vec<&str>) -> Self {
        ClassSpec::Many(list.into_iter().map(String::from).collect())
    }
}

/// A partial, author-supplied column descriptor.
///
/// Only `key` is required. Everything else defaults during normalization:
/// the label is derived from the key, and the `td`/`th` classes are resolved
/// from `variant`, `class` and the cell-specific class inputs.
///
/// # Examples
///
/// ```
/// use headless_table::column::ColumnDef;
/// use serde_json::{Map, Value};
///
/// let def: ColumnDef<Map<String, Value>> = ColumnDef::new("age")
///     .with_label("Age (years)")
///     .with_variant("primary")
///     .with_td_class("text-right");
/// assert_eq!(def.label.as_deref(), Some("Age (years)"));
/// ```
pub struct ColumnDef<R> {
    /// The record field this column reads.
    pub key: String,
    /// Header label; derived from `key` when absent or empty.
    pub label: Option<String>,
    /// Style variant, rendered as a `table-{variant}` class on both cells.
    pub variant: Option<String>,
    /// Class input applied to both `td` and `th`.
    pub class: Option<ClassSpec>,
    /// Class input applied to `td` only.
    pub td_class: Option<ClassSpec>,
    /// Class input applied to `th` only.
    pub th_class: Option<ClassSpec>,
    /// Optional value formatter for this column's cells.
    pub formatter: Option<Formatter<R>>,
}

impl<R> ColumnDef<R> {
    /// Creates a descriptor for `key` with everything else unset.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            variant: None,
            class: None,
            td_class: None,
            th_class: None,
            formatter: None,
        }
    }

    /// Sets the header label (builder pattern).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the style variant (builder pattern).
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Sets the class input shared by `td` and `th` (builder pattern).
    pub fn with_class(mut self, class: impl Into<ClassSpec>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the `td`-only class input (builder pattern).
    pub fn with_td_class(mut self, class: impl Into<ClassSpec>) -> Self {
        self.td_class = Some(class.into());
        self
    }

    /// Sets the `th`-only class input (builder pattern).
    pub fn with_th_class(mut self, class: impl Into<ClassSpec>) -> Self {
        self.th_class = Some(class.into());
        self
    }

    /// Sets the value formatter (builder pattern).
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value, &str, &R) -> Value + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            variant: self.variant.clone(),
            class: self.class.clone(),
            td_class: self.td_class.clone(),
            th_class: self.th_class.clone(),
            formatter: self.formatter.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("class", &self.class)
            .field("td_class", &self.td_class)
            .field("th_class", &self.th_class)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// An author-supplied column spec: a bare key or a partial descriptor.
pub enum FieldSpec<R> {
    /// A bare field key. Normalizes to a column with a derived label and no
    /// classes or formatter.
    Key(String),
    /// A partial descriptor with explicit settings.
    Def(ColumnDef<R>),
}

impl<R> From<&str> for FieldSpec<R> {
    fn from(key: &str) -> Self {
        FieldSpec::Key(key.to_string())
    }
}

impl<R> From<String> for FieldSpec<R> {
    fn from(key: String) -> Self {
        FieldSpec::Key(key)
    }
}

impl<R> From<ColumnDef<R>> for FieldSpec<R> {
    fn from(def: ColumnDef<R>) -> Self {
        FieldSpec::Def(def)
    }
}

impl<R> Clone for FieldSpec<R> {
    fn clone(&self) -> Self {
        match self {
            FieldSpec::Key(key) => FieldSpec::Key(key.clone()),
            FieldSpec::Def(def) => FieldSpec::Def(def.clone()),
        }
    }
}

impl<R> fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSpec::Key(key) => f.debug_tuple("Key").field(key).finish(),
            FieldSpec::Def(def) => f.debug_tuple("Def").field(def).finish(),
        }
    }
}

/// A fully resolved column, ready for rendering.
///
/// Produced by [`normalize`] once per recompute cycle and not mutated
/// afterwards. `key` is always non-empty for well-formed specs; `label`
/// falls back to a derived form of the key.
pub struct Column<R> {
    /// The record field this column reads.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Style variant the classes were resolved from, if any.
    pub variant: Option<String>,
    /// Resolved class string for body cells.
    pub td_class: String,
    /// Resolved class string for header cells.
    pub th_class: String,
    /// Optional value formatter for this column's cells.
    pub formatter: Option<Formatter<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            variant: self.variant.clone(),
            td_class: self.td_class.clone(),
            th_class: self.th_class.clone(),
            formatter: self.formatter.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("td_class", &self.td_class)
            .field("th_class", &self.th_class)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// Derives a header label from a field key.
///
/// The first grapheme is uppercased and the remainder is kept as-is.
/// Underscores are intentionally left in place, so `"first_name"` becomes
/// `"First_name"`; existing label snapshots depend on this.
///
/// # Examples
///
/// ```
/// use headless_table::column::derive_label;
///
/// assert_eq!(derive_label("name"), "Name");
/// assert_eq!(derive_label("first_name"), "First_name");
/// assert_eq!(derive_label(""), "");
/// ```
pub fn derive_label(key: &str) -> String {
    let mut graphemes = key.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + graphemes.as_str(),
        None => String::new(),
    }
}

fn push_class(out: &mut String, spec: &ClassSpec) {
    match spec {
        // List entries concatenate as-is, with no separator between them or
        // from whatever precedes them.
        ClassSpec::Many(list) if !list.is_empty() => {
            for class in list {
                out.push_str(class);
            }
        }
        ClassSpec::Many(_) => {}
        ClassSpec::One(class) => out.push_str(class),
    }
}

/// Merges a style variant with up to two class inputs into one class string.
///
/// The result starts with `table-{variant}` when a variant is given. The
/// primary input is appended directly; when a secondary input is present, a
/// single space is appended before it. An absent or empty-string secondary
/// contributes nothing, while an empty-list secondary still contributes the
/// space.
///
/// Spacing in the output is irregular on purpose: list inputs concatenate
/// their entries without separators, and nothing separates the variant class
/// from the primary input. Consumers that need regular spacing put it in
/// their class strings themselves.
///
/// # Examples
///
/// ```
/// use headless_table::column::{resolve_class, ClassSpec};
///
/// assert_eq!(resolve_class(Some("dark"), None, None), "table-dark");
/// assert_eq!(
///     resolve_class(Some("dark"), Some(&" striped".into()), Some(&"wide".into())),
///     "table-dark striped wide",
/// );
/// ```
pub fn resolve_class(
    variant: Option<&str>,
    primary: Option<&ClassSpec>,
    secondary: Option<&ClassSpec>,
) -> String {
    let mut classes = match variant {
        Some(variant) => format!("table-{variant}"),
        None => String::new(),
    };

    if let Some(primary) = primary {
        push_class(&mut classes, primary);
    }

    match secondary {
        None => classes,
        Some(ClassSpec::One(s)) if s.is_empty() => classes,
        Some(secondary) => {
            classes.push(' ');
            push_class(&mut classes, secondary);
            classes
        }
    }
}

/// Normalizes a column spec into a resolved [`Column`].
///
/// Bare keys get a derived label and empty class strings. Descriptors keep
/// their settings, with the label defaulted when absent or empty and each of
/// `td_class`/`th_class` resolved via [`resolve_class`] from the variant, the
/// shared class input and the cell-specific one. Never fails.
pub fn normalize<R>(spec: &FieldSpec<R>) -> Column<R> {
    match spec {
        FieldSpec::Key(key) => Column {
            label: derive_label(key),
            key: key.clone(),
            variant: None,
            td_class: String::new(),
            th_class: String::new(),
            formatter: None,
        },
        FieldSpec::Def(def) => {
            let label = match &def.label {
                Some(label) if !label.is_empty() => label.clone(),
                _ => derive_label(&def.key),
            };
            Column {
                label,
                td_class: resolve_class(
                    def.variant.as_deref(),
                    def.class.as_ref(),
                    def.td_class.as_ref(),
                ),
                th_class: resolve_class(
                    def.variant.as_deref(),
                    def.class.as_ref(),
                    def.th_class.as_ref(),
                ),
                key: def.key.clone(),
                variant: def.variant.clone(),
                formatter: def.formatter.clone(),
            }
        }
    }
}

/// Builds the active column set from explicit specs or from the rows.
///
/// Explicit specs win and keep their order. With no specs, the keys of the
/// *first* record are used, in that record's own key order; later records
/// with extra or missing keys are not consulted (their extra fields are never
/// shown, their missing fields materialize as null cells). With neither specs
/// nor rows, the column set is empty.
///
/// # Examples
///
/// ```
/// use headless_table::column::{build_columns, FieldSpec};
/// use serde_json::{json, Map, Value};
///
/// let rows: Vec<Map<String, Value>> = vec![
///     json!({"name": "ana", "age": 30}).as_object().unwrap().clone(),
/// ];
/// let specs: Vec<FieldSpec<Map<String, Value>>> = Vec::new();
///
/// let columns = build_columns(&specs, &rows);
/// let labels: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
/// assert_eq!(labels, ["Name", "Age"]);
/// ```
pub fn build_columns<R: Record>(specs: &[FieldSpec<R>], items: &[R]) -> Vec<Column<R>> {
    if !specs.is_empty() {
        return specs.iter().map(normalize).collect();
    }

    match items.first() {
        Some(first) => first
            .field_keys()
            .into_iter()
            .map(|key| normalize(&FieldSpec::Key(key)))
            .collect(),
        None => Vec::new(),
    }
}
