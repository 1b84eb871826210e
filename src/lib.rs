#![warn(missing_docs)]

//! # headless-table
//!
//! A headless table view-model for interactive UI tables: column
//! normalization, free-text filtering and client-side pagination, with no
//! rendering of its own.
//!
//! ## Overview
//!
//! Given a collection of row records and an optional column specification,
//! the [`table::Model`] derives everything a table renderer needs:
//!
//! - a resolved column set (labels, per-cell class strings, optional value
//!   formatters), either from explicit specs or inferred from the first
//!   record's keys;
//! - the subset of rows matching a free-text filter term, compared
//!   case-insensitively against every field's text form;
//! - a cell matrix pairing each visible row with each column (raw value,
//!   formatted value, owning column, selection/expansion flags);
//! - pagination state: the current page slice, the total page count and
//!   previous/next availability.
//!
//! The crate draws no markup and wires no events. It is a pure in-memory
//! layer: a presentation layer feeds it records, a filter term and page
//! controls, and renders the structures it returns (plus two static ARIA
//! role attributes for the container elements).
//!
//! ## Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`record`] | Row-record abstraction and value-to-text coercion |
//! | [`column`] | Column specs, normalization, class and label resolution |
//! | [`filter`] | Case-insensitive substring row filtering |
//! | [`pager`]  | Page size/index state and slice math |
//! | [`table`]  | The model tying the pipeline together |
//!
//! ## Quick start
//!
//! ```
//! use headless_table::prelude::*;
//! use serde_json::{json, Map, Value};
//!
//! let items: Vec<Map<String, Value>> = vec![
//!     json!({"name": "ana", "age": 30}).as_object().unwrap().clone(),
//!     json!({"name": "bo", "age": 20}).as_object().unwrap().clone(),
//! ];
//!
//! let mut table = Table::new(items)
//!     .with_fields(vec![
//!         "name".into(),
//!         ColumnDef::new("age")
//!             .with_label("Age (years)")
//!             .with_formatter(|value, _key, _rec: &Map<String, Value>| {
//!                 json!(format!("{value} yrs"))
//!             })
//!             .into(),
//!     ])
//!     .with_page_size(10);
//!
//! assert_eq!(table.header()[1].label, "Age (years)");
//! assert_eq!(table.visible_rows()[0][1].value, json!("30 yrs"));
//!
//! table.set_filter("BO");
//! assert_eq!(table.visible_rows().len(), 1);
//! assert!(!table.can_next());
//! ```
//!
//! ## Recomputation model
//!
//! There is no implicit dependency tracking. Each derived structure is a
//! pure function of the model's inputs, and every input setter
//! (`set_items`, `set_fields`, `set_filter`) rebuilds the derived state
//! synchronously before returning. Page size and index only affect which
//! slice of the matrix is visible, so changing them never rebuilds
//! anything.
//!
//! ## Edge behavior
//!
//! Empty inputs degrade to empty outputs throughout; nothing in the
//! pipeline returns an error. Two edges worth knowing about:
//!
//! - [`table::Model::total_pages`] is the zero-based index of the last
//!   page and is `-1` for an empty row set;
//! - the page index is never clamped — navigation guards keep it in range,
//!   and an index set out of range just produces an empty visible page.

pub mod column;
pub mod filter;
pub mod pager;
pub mod record;
pub mod table;

pub use column::{
    build_columns, derive_label, normalize, resolve_class, ClassSpec, Column, ColumnDef,
    FieldSpec, Formatter,
};
pub use filter::apply_filter;
pub use pager::PageState;
pub use record::{display_text, Record};
pub use table::{materialize, Cell, ElementProps, Model as Table, Row};

/// Prelude module for convenient imports.
///
/// ```
/// use headless_table::prelude::*;
/// ```
pub mod prelude {
    pub use crate::column::{ClassSpec, Column, ColumnDef, FieldSpec, Formatter};
    pub use crate::pager::PageState;
    pub use crate::record::Record;
    pub use crate::table::{Cell, ElementProps, Model as Table, Row};
}
