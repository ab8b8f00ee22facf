//! Table builders: manual rows or collection projections.
//!
//! [`TableBuilder`] composes `<table>` structure from explicitly supplied
//! header cells and rows; [`CollectionTableBuilder`] derives the body from a
//! projection over a collection, either whole-row selectors or per-column
//! definitions. Column definitions, when present, win over any row selector
//! and also drive the generated header row.

use tracing::trace;

use crate::attrs::{AttrSet, attr_methods};
use crate::element::Element;
use crate::sink::{RenderSink, Renderable, Sequence};

/// Chainable builder for a `<table>` with manually supplied rows.
///
/// # Example
///
/// ```rust
/// use grappelli_html::{Renderable, table};
///
/// let report = table()
/// 	.header(["Name", "Email"])
/// 	.row(["Alice", "alice@example.com"]);
/// assert_eq!(
/// 	report.to_html(),
/// 	"<table><thead><tr><th>Name</th><th>Email</th></tr></thead>\
/// 	<tbody><tr><td>Alice</td><td>alice@example.com</td></tr></tbody></table>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct TableBuilder {
	attrs: AttrSet,
	caption: Option<String>,
	header_cells: Vec<String>,
	custom_head: Option<Element>,
	custom_body: Option<Element>,
	custom_foot: Option<Element>,
	text_rows: Vec<Vec<String>>,
	element_rows: Vec<Vec<Element>>,
}

/// Creates an empty manual table builder.
pub fn table() -> TableBuilder {
	TableBuilder::new()
}

impl TableBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	attr_methods!();

	/// Sets the `<caption>` text, emitted right after the open tag.
	pub fn caption(mut self, text: impl Into<String>) -> Self {
		self.caption = Some(text.into());
		self
	}

	/// Declares plain-text header cells for a generated `<thead>`.
	pub fn header<I>(mut self, cells: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.header_cells = cells.into_iter().map(Into::into).collect();
		self
	}

	/// Replaces the generated head section wholesale.
	pub fn head(mut self, element: Element) -> Self {
		self.custom_head = Some(element);
		self
	}

	/// Replaces the generated body section wholesale; buffered rows are
	/// ignored while a custom body is set.
	pub fn body(mut self, element: Element) -> Self {
		self.custom_body = Some(element);
		self
	}

	/// Sets the foot section.
	pub fn foot(mut self, element: Element) -> Self {
		self.custom_foot = Some(element);
		self
	}

	/// Appends a row of plain-text cells.
	///
	/// Generated bodies emit all text rows before any element rows,
	/// regardless of call interleaving.
	pub fn row<I>(mut self, cells: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.text_rows
			.push(cells.into_iter().map(Into::into).collect());
		self
	}

	/// Appends a row of element cells, each rendered inside its `<td>`.
	pub fn element_row<I>(mut self, cells: I) -> Self
	where
		I: IntoIterator<Item = Element>,
	{
		self.element_rows.push(cells.into_iter().collect());
		self
	}
}

fn emit_caption(caption: &Option<String>, sink: &mut dyn RenderSink, seq: &mut Sequence) {
	if let Some(text) = caption {
		sink.open_element(seq.next(), "caption");
		sink.add_text_content(seq.next(), text);
		sink.close_element();
	}
}

fn emit_text_row(sink: &mut dyn RenderSink, seq: &mut Sequence, cell_tag: &str, cells: &[String]) {
	sink.open_element(seq.next(), "tr");
	for cell in cells {
		sink.open_element(seq.next(), cell_tag);
		sink.add_text_content(seq.next(), cell);
		sink.close_element();
	}
	sink.close_element();
}

impl Renderable for TableBuilder {
	fn render_to(&self, sink: &mut dyn RenderSink, seq: &mut Sequence) {
		sink.open_element(seq.next(), "table");
		self.attrs.emit(sink, seq);
		emit_caption(&self.caption, sink, seq);
		if let Some(head) = &self.custom_head {
			head.render_to(sink, seq);
		} else if !self.header_cells.is_empty() {
			sink.open_element(seq.next(), "thead");
			emit_text_row(sink, seq, "th", &self.header_cells);
			sink.close_element();
		}
		if let Some(body) = &self.custom_body {
			body.render_to(sink, seq);
		} else if !self.text_rows.is_empty() || !self.element_rows.is_empty() {
			sink.open_element(seq.next(), "tbody");
			for row in &self.text_rows {
				emit_text_row(sink, seq, "td", row);
			}
			for row in &self.element_rows {
				sink.open_element(seq.next(), "tr");
				for cell in row {
					sink.open_element(seq.next(), "td");
					cell.render_to(sink, seq);
					sink.close_element();
				}
				sink.close_element();
			}
			sink.close_element();
		}
		if let Some(foot) = &self.custom_foot {
			foot.render_to(sink, seq);
		}
		sink.close_element();
	}
}

/// A cell value produced by a column selector: escaped text or a nested
/// element.
pub enum CellValue {
	/// Escaped text content.
	Text(String),
	/// An element rendered inside the cell.
	Element(Element),
}

impl From<String> for CellValue {
	fn from(text: String) -> Self {
		CellValue::Text(text)
	}
}

impl From<&str> for CellValue {
	fn from(text: &str) -> Self {
		CellValue::Text(text.to_string())
	}
}

impl From<Element> for CellValue {
	fn from(element: Element) -> Self {
		CellValue::Element(element)
	}
}

struct ColumnDef<T> {
	header: String,
	cell: Box<dyn Fn(&T) -> CellValue>,
}

enum RowSource<T> {
	None,
	Text(Box<dyn Fn(&T) -> Vec<String>>),
	TextIndexed(Box<dyn Fn(&T, usize) -> Vec<String>>),
	Elements(Box<dyn Fn(&T) -> Vec<Element>>),
	ElementsIndexed(Box<dyn Fn(&T, usize) -> Vec<Element>>),
}

/// Chainable builder for a `<table>` whose body is projected from a
/// collection.
///
/// # Example
///
/// ```rust
/// use grappelli_html::{Renderable, table_for};
///
/// struct User {
/// 	name: &'static str,
/// 	active: bool,
/// }
///
/// let users = vec![
/// 	User { name: "John", active: true },
/// 	User { name: "Jane", active: false },
/// ];
/// let listing = table_for(users)
/// 	.column("Name", |u: &User| u.name)
/// 	.column("Status", |u: &User| if u.active { "Active" } else { "Inactive" });
/// let html = listing.to_html();
/// assert!(html.contains("<th>Name</th><th>Status</th>"));
/// assert!(html.contains("<td>Jane</td><td>Inactive</td>"));
/// ```
pub struct CollectionTableBuilder<T> {
	items: Vec<T>,
	attrs: AttrSet,
	caption: Option<String>,
	columns: Vec<ColumnDef<T>>,
	row_source: RowSource<T>,
	row_class: Option<Box<dyn Fn(&T) -> String>>,
	row_attrs: Option<Box<dyn Fn(&T) -> Vec<(String, String)>>>,
	custom_foot: Option<Element>,
}

impl<T> std::fmt::Debug for CollectionTableBuilder<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CollectionTableBuilder")
			.field("items", &self.items.len())
			.field("caption", &self.caption)
			.field("columns", &self.columns.len())
			.finish_non_exhaustive()
	}
}

/// Creates a table builder over a collection.
pub fn table_for<T, I>(items: I) -> CollectionTableBuilder<T>
where
	I: IntoIterator<Item = T>,
{
	CollectionTableBuilder::new(items)
}

impl<T> CollectionTableBuilder<T> {
	/// Creates a builder over `items`; the collection is gathered once and
	/// iterated in order on every render.
	pub fn new<I>(items: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		Self {
			items: items.into_iter().collect(),
			attrs: AttrSet::new(),
			caption: None,
			columns: Vec::new(),
			row_source: RowSource::None,
			row_class: None,
			row_attrs: None,
			custom_foot: None,
		}
	}

	attr_methods!();

	/// Sets the `<caption>` text.
	pub fn caption(mut self, text: impl Into<String>) -> Self {
		self.caption = Some(text.into());
		self
	}

	/// Sets the foot section.
	pub fn foot(mut self, element: Element) -> Self {
		self.custom_foot = Some(element);
		self
	}

	/// Declares a typed column; the selector may return text or an
	/// [`Element`].
	///
	/// Columns, once declared, drive both the header row and the body
	/// cells; any configured row selector is ignored.
	pub fn column<F, C>(mut self, header: impl Into<String>, selector: F) -> Self
	where
		F: Fn(&T) -> C + 'static,
		C: Into<CellValue>,
	{
		self.columns.push(ColumnDef {
			header: header.into(),
			cell: Box::new(move |item| selector(item).into()),
		});
		self
	}

	/// Projects each item to a row of text cells.
	///
	/// The four row-selector shapes share one slot; the last one set wins.
	pub fn row<F, I>(mut self, selector: F) -> Self
	where
		F: Fn(&T) -> I + 'static,
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.row_source = RowSource::Text(Box::new(move |item| {
			selector(item).into_iter().map(Into::into).collect()
		}));
		self
	}

	/// Projects each item and its zero-based render index to text cells.
	pub fn row_indexed<F, I>(mut self, selector: F) -> Self
	where
		F: Fn(&T, usize) -> I + 'static,
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.row_source = RowSource::TextIndexed(Box::new(move |item, index| {
			selector(item, index).into_iter().map(Into::into).collect()
		}));
		self
	}

	/// Projects each item to a row of element cells.
	pub fn element_row<F, I>(mut self, selector: F) -> Self
	where
		F: Fn(&T) -> I + 'static,
		I: IntoIterator<Item = Element>,
	{
		self.row_source =
			RowSource::Elements(Box::new(move |item| selector(item).into_iter().collect()));
		self
	}

	/// Projects each item and its zero-based render index to element cells.
	pub fn element_row_indexed<F, I>(mut self, selector: F) -> Self
	where
		F: Fn(&T, usize) -> I + 'static,
		I: IntoIterator<Item = Element>,
	{
		self.row_source = RowSource::ElementsIndexed(Box::new(move |item, index| {
			selector(item, index).into_iter().collect()
		}));
		self
	}

	/// Sets the `<tr>` class per item; blank results omit the attribute.
	pub fn row_class<F, S>(mut self, selector: F) -> Self
	where
		F: Fn(&T) -> S + 'static,
		S: Into<String>,
	{
		self.row_class = Some(Box::new(move |item| selector(item).into()));
		self
	}

	/// Adds per-item `<tr>` attributes.
	pub fn row_attrs<F, I, K, V>(mut self, selector: F) -> Self
	where
		F: Fn(&T) -> I + 'static,
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.row_attrs = Some(Box::new(move |item| {
			selector(item)
				.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect()
		}));
		self
	}

	fn open_row(&self, sink: &mut dyn RenderSink, seq: &mut Sequence, item: &T) {
		sink.open_element(seq.next(), "tr");
		if let Some(class_fn) = &self.row_class {
			let class = class_fn(item);
			if !class.trim().is_empty() {
				sink.add_attribute(seq.next(), "class", &class);
			}
		}
		if let Some(attrs_fn) = &self.row_attrs {
			for (name, value) in attrs_fn(item) {
				sink.add_attribute(seq.next(), &name, &value);
			}
		}
	}

	fn emit_row(&self, sink: &mut dyn RenderSink, seq: &mut Sequence, item: &T, index: usize) {
		self.open_row(sink, seq, item);
		if !self.columns.is_empty() {
			for column in &self.columns {
				sink.open_element(seq.next(), "td");
				match (column.cell)(item) {
					CellValue::Text(text) => sink.add_text_content(seq.next(), &text),
					CellValue::Element(element) => element.render_to(sink, seq),
				}
				sink.close_element();
			}
		} else {
			match &self.row_source {
				RowSource::None => {}
				RowSource::Text(selector) => {
					emit_td_text_cells(sink, seq, &selector(item));
				}
				RowSource::TextIndexed(selector) => {
					emit_td_text_cells(sink, seq, &selector(item, index));
				}
				RowSource::Elements(selector) => {
					emit_td_element_cells(sink, seq, &selector(item));
				}
				RowSource::ElementsIndexed(selector) => {
					emit_td_element_cells(sink, seq, &selector(item, index));
				}
			}
		}
		sink.close_element();
	}
}

fn emit_td_text_cells(sink: &mut dyn RenderSink, seq: &mut Sequence, cells: &[String]) {
	for cell in cells {
		sink.open_element(seq.next(), "td");
		sink.add_text_content(seq.next(), cell);
		sink.close_element();
	}
}

fn emit_td_element_cells(sink: &mut dyn RenderSink, seq: &mut Sequence, cells: &[Element]) {
	for cell in cells {
		sink.open_element(seq.next(), "td");
		cell.render_to(sink, seq);
		sink.close_element();
	}
}

impl<T> Renderable for CollectionTableBuilder<T> {
	fn render_to(&self, sink: &mut dyn RenderSink, seq: &mut Sequence) {
		trace!(
			items = self.items.len(),
			columns = self.columns.len(),
			"rendering collection table"
		);
		sink.open_element(seq.next(), "table");
		self.attrs.emit(sink, seq);
		emit_caption(&self.caption, sink, seq);
		if !self.columns.is_empty() {
			sink.open_element(seq.next(), "thead");
			sink.open_element(seq.next(), "tr");
			for column in &self.columns {
				sink.open_element(seq.next(), "th");
				sink.add_text_content(seq.next(), &column.header);
				sink.close_element();
			}
			sink.close_element();
			sink.close_element();
		}
		sink.open_element(seq.next(), "tbody");
		let has_body = !self.columns.is_empty() || !matches!(self.row_source, RowSource::None);
		if has_body {
			for (index, item) in self.items.iter().enumerate() {
				self.emit_row(sink, seq, item, index);
			}
		}
		sink.close_element();
		if let Some(foot) = &self.custom_foot {
			foot.render_to(sink, seq);
		}
		sink.close_element();
	}
}
