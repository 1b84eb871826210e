//! The table view-model.
//!
//! [`Model`] ties the pipeline together: it owns the source records, the
//! column specs, the filter term and the page state, and derives from them
//! the resolved column set, the filtered record set and the full cell matrix.
//! Rendering is somebody else's job; the model only hands out structures
//! (visible rows, header columns, navigation flags, two static role
//! attributes) for a presentation layer to consume.
//!
//! Derivation is synchronous and push-based: every setter that changes an
//! input to the pipeline rebuilds the derived state before returning, and all
//! reads are pure. Derived structures are replaced wholesale on each rebuild,
//! never patched in place.

use crate::column::{build_columns, Column, FieldSpec};
use crate::filter::apply_filter;
use crate::pager::PageState;
use crate::record::Record;
use serde_json::Value;

/// Static attributes for a container element.
///
/// The table container carries `role="table"` and the body container
/// `role="rowgroup"`; see [`Model::table_props`] and [`Model::body_props`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementProps {
    /// The ARIA role for the element.
    pub role: &'static str,
}

/// One cell's full display state.
///
/// A cell pairs a record with one resolved column: the raw field value, the
/// formatted display value, and two UI flags that this crate always
/// initializes to `false` and never touches afterwards. They belong to the
/// presentation layer (row expansion and selection have no source of truth
/// here).
#[derive(Debug, Clone)]
pub struct Cell<R> {
    /// The record this cell belongs to.
    pub item: R,
    /// The row's position within the filtered, pre-pagination set.
    pub index: usize,
    /// The column this cell belongs to.
    pub field: Column<R>,
    /// The raw field value; `Value::Null` when the record lacks the key.
    pub unformatted: Value,
    /// The display value: the formatter output, or the raw value when the
    /// column has no formatter.
    pub value: Value,
    /// Whether the row's detail view is expanded. Always starts `false`.
    pub detail_showing: bool,
    /// Whether the row is selected. Always starts `false`.
    pub row_selected: bool,
}

/// One materialized row: its cells in column order.
pub type Row<R> = Vec<Cell<R>>;

/// Cross-products filtered records with the column set into a cell matrix.
///
/// Row `index` is the record's position within `filtered` (pre-pagination).
/// Cells appear in column order; a record without a column's key gets
/// `Value::Null` as its raw value. Columns with a formatter have it applied
/// as `formatter(raw, key, record)`. Pure function of its inputs.
pub fn materialize<R: Record>(filtered: &[R], columns: &[Column<R>]) -> Vec<Row<R>> {
    filtered
        .iter()
        .enumerate()
        .map(|(index, item)| {
            columns
                .iter()
                .map(|column| {
                    let unformatted = item.field(&column.key).unwrap_or(Value::Null);
                    let value = match &column.formatter {
                        Some(formatter) => formatter(&unformatted, &column.key, item),
                        None => unformatted.clone(),
                    };
                    Cell {
                        item: item.clone(),
                        index,
                        field: column.clone(),
                        unformatted,
                        value,
                        detail_showing: false,
                        row_selected: false,
                    }
                })
                .collect()
        })
        .collect()
}

/// A headless table model over a collection of row records.
///
/// # Examples
///
/// ```
/// use headless_table::table::Model;
/// use serde_json::{json, Map, Value};
///
/// let items: Vec<Map<String, Value>> = vec![
///     json!({"name": "ana", "age": 30}).as_object().unwrap().clone(),
///     json!({"name": "bo", "age": 20}).as_object().unwrap().clone(),
/// ];
///
/// let mut table = Model::new(items);
///
/// let labels: Vec<&str> = table.header().iter().map(|c| c.label.as_str()).collect();
/// assert_eq!(labels, ["Name", "Age"]);
/// assert_eq!(table.visible_rows().len(), 2);
///
/// table.set_filter("BO");
/// assert_eq!(table.visible_rows().len(), 1);
/// assert_eq!(table.visible_rows()[0][0].value, json!("bo"));
/// ```
pub struct Model<R: Record> {
    items: Vec<R>,
    fields: Vec<FieldSpec<R>>,
    filter: String,
    page: PageState,

    // Derived state, rebuilt by refresh().
    columns: Vec<Column<R>>,
    filtered: Vec<R>,
    rows: Vec<Row<R>>,
}

impl<R: Record> Model<R> {
    /// Creates a model over `items` with inferred columns, no filter, page
    /// size 10 and page index 0.
    pub fn new(items: Vec<R>) -> Self {
        let mut model = Self {
            items,
            fields: Vec::new(),
            filter: String::new(),
            page: PageState::new(),
            columns: Vec::new(),
            filtered: Vec::new(),
            rows: Vec::new(),
        };
        model.refresh();
        model
    }

    /// Sets the explicit column specs (builder pattern).
    ///
    /// An empty spec list means columns are inferred from the first record.
    pub fn with_fields(mut self, fields: Vec<FieldSpec<R>>) -> Self {
        self.fields = fields;
        self.refresh();
        self
    }

    /// Sets the page size (builder pattern). Sizes below 1 are clamped to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page = self.page.with_page_size(page_size);
        self
    }

    /// Sets the initial page index (builder pattern). Not range-checked.
    pub fn with_page_index(mut self, page_index: usize) -> Self {
        self.page = self.page.with_page_index(page_index);
        self
    }

    /// Sets the filter term (builder pattern).
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self.refresh();
        self
    }

    /// Rebuilds every derived structure from the current inputs.
    fn refresh(&mut self) {
        self.columns = build_columns(&self.fields, &self.items);
        self.filtered = apply_filter(&self.items, &self.filter);
        self.rows = materialize(&self.filtered, &self.columns);
    }

    /// Replaces the source records.
    pub fn set_items(&mut self, items: Vec<R>) {
        self.items = items;
        self.refresh();
    }

    /// Replaces the column specs.
    pub fn set_fields(&mut self, fields: Vec<FieldSpec<R>>) {
        self.fields = fields;
        self.refresh();
    }

    /// Replaces the filter term.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.refresh();
    }

    /// The source records.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// The current filter term.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The resolved column set, in display order.
    pub fn header(&self) -> &[Column<R>] {
        &self.columns
    }

    /// The full materialized matrix: every filtered row, pre-pagination.
    pub fn rows(&self) -> &[Row<R>] {
        &self.rows
    }

    /// The rows of the current page.
    ///
    /// At most `page_size` rows; empty when the page index is out of range.
    pub fn visible_rows(&self) -> &[Row<R>] {
        let (start, end) = self.page.slice_bounds(self.rows.len());
        &self.rows[start..end]
    }

    /// Number of rows surviving the filter.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// True when no rows survive the filter.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The current page size.
    pub fn page_size(&self) -> usize {
        self.page.page_size()
    }

    /// Sets the page size. Sizes below 1 are clamped to 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.set_page_size(page_size);
    }

    /// The current zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page.page_index()
    }

    /// Sets the page index. Not range-checked; an out-of-range index makes
    /// [`visible_rows`](Self::visible_rows) empty until it moves back into
    /// range.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.page.set_page_index(page_index);
    }

    /// The zero-based index of the last page; `-1` when there are no rows.
    pub fn total_pages(&self) -> i64 {
        self.page.total_pages(self.rows.len())
    }

    /// True when a previous page exists.
    pub fn can_prev(&self) -> bool {
        self.page.can_prev()
    }

    /// True when a next page exists.
    pub fn can_next(&self) -> bool {
        self.page.can_next(self.rows.len())
    }

    /// Moves to the previous page if one exists.
    pub fn prev_page(&mut self) {
        self.page.prev_page();
    }

    /// Moves to the next page if one exists.
    pub fn next_page(&mut self) {
        let len = self.rows.len();
        self.page.next_page(len);
    }

    /// Static attributes for the table container element.
    pub fn table_props(&self) -> ElementProps {
        ElementProps { role: "table" }
    }

    /// Static attributes for the table body container element.
    pub fn body_props(&self) -> ElementProps {
        ElementProps { role: "rowgroup" }
    }
}

impl<R: Record> Default for Model<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
