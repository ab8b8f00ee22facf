//! Select builders: manual option lists or collection projections.
//!
//! [`SelectBuilder`] composes `<select>`/`<option>`/`<optgroup>` structure
//! from explicitly supplied options, with an open-group context so options
//! added after `opt_group` attach to that group. [`CollectionSelectBuilder`]
//! projects options from a collection, with selection/disable predicates,
//! optional grouping, and placeholder injection.

use std::fmt;

use tracing::trace;

use crate::attrs::{AttrSet, attr_methods};
use crate::sink::{RenderSink, Renderable, Sequence};

/// One `<option>` leaf.
///
/// An absent value emits no `value` attribute, so the option text doubles
/// as the submitted value per standard HTML behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOption {
	value: Option<String>,
	text: String,
	selected: bool,
	disabled: bool,
}

impl SelectOption {
	/// Creates an option with a value and label text.
	pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			value: Some(value.into()),
			text: text.into(),
			selected: false,
			disabled: false,
		}
	}

	/// Creates an option without a `value` attribute.
	pub fn unvalued(text: impl Into<String>) -> Self {
		Self {
			value: None,
			text: text.into(),
			selected: false,
			disabled: false,
		}
	}

	/// Sets the selected flag.
	pub fn selected(mut self, selected: bool) -> Self {
		self.selected = selected;
		self
	}

	/// Sets the disabled flag.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	fn emit(&self, sink: &mut dyn RenderSink, seq: &mut Sequence) {
		sink.open_element(seq.next(), "option");
		if let Some(value) = &self.value {
			sink.add_attribute(seq.next(), "value", value);
		}
		if self.selected {
			sink.add_attribute(seq.next(), "selected", "");
		}
		if self.disabled {
			sink.add_attribute(seq.next(), "disabled", "");
		}
		sink.add_text_content(seq.next(), &self.text);
		sink.close_element();
	}
}

#[derive(Debug, Clone)]
struct OptGroup {
	label: String,
	disabled: bool,
	options: Vec<SelectOption>,
}

impl OptGroup {
	fn emit(&self, sink: &mut dyn RenderSink, seq: &mut Sequence) {
		sink.open_element(seq.next(), "optgroup");
		sink.add_attribute(seq.next(), "label", &self.label);
		if self.disabled {
			sink.add_attribute(seq.next(), "disabled", "");
		}
		for option in &self.options {
			option.emit(sink, seq);
		}
		sink.close_element();
	}
}

#[derive(Debug, Clone)]
enum SelectItem {
	Leaf(SelectOption),
	Group(OptGroup),
}

/// Chainable builder for a `<select>` with manually supplied options.
///
/// # Example
///
/// ```rust
/// use grappelli_html::{Renderable, SelectOption, select};
///
/// let colors = select()
/// 	.name("color")
/// 	.option("r", "Red")
/// 	.item(SelectOption::new("g", "Green").selected(true));
/// assert_eq!(
/// 	colors.to_html(),
/// 	"<select name=\"color\"><option value=\"r\">Red</option>\
/// 	<option value=\"g\" selected>Green</option></select>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct SelectBuilder {
	attrs: AttrSet,
	name: Option<String>,
	required: bool,
	disabled: bool,
	multiple: bool,
	size: Option<u32>,
	items: Vec<SelectItem>,
	open_group: Option<OptGroup>,
}

/// Creates an empty manual select builder.
pub fn select() -> SelectBuilder {
	SelectBuilder::new()
}

impl SelectBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	attr_methods!();

	/// Sets the `name` attribute.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the `required` flag.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Sets the `disabled` flag.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Sets the `multiple` flag.
	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = multiple;
		self
	}

	/// Sets the visible `size`.
	pub fn size(mut self, size: u32) -> Self {
		self.size = Some(size);
		self
	}

	/// Appends a plain option to the open group, or to the top level when no
	/// group is open.
	pub fn option(self, value: impl Into<String>, text: impl Into<String>) -> Self {
		self.item(SelectOption::new(value, text))
	}

	/// Appends a fully configured option.
	pub fn item(mut self, option: SelectOption) -> Self {
		match &mut self.open_group {
			Some(group) => group.options.push(option),
			None => self.items.push(SelectItem::Leaf(option)),
		}
		self
	}

	/// Opens an option group; an already-open group is closed first.
	pub fn opt_group(mut self, label: impl Into<String>) -> Self {
		self.close_open_group();
		self.open_group = Some(OptGroup {
			label: label.into(),
			disabled: false,
			options: Vec::new(),
		});
		self
	}

	/// Opens a disabled option group; an already-open group is closed first.
	pub fn opt_group_disabled(mut self, label: impl Into<String>) -> Self {
		self.close_open_group();
		self.open_group = Some(OptGroup {
			label: label.into(),
			disabled: true,
			options: Vec::new(),
		});
		self
	}

	/// Closes the open group; a no-op when none is open.
	pub fn end_group(mut self) -> Self {
		self.close_open_group();
		self
	}

	fn close_open_group(&mut self) {
		if let Some(group) = self.open_group.take() {
			self.items.push(SelectItem::Group(group));
		}
	}
}

fn emit_control_attrs(
	attrs: &AttrSet,
	name: Option<&str>,
	required: bool,
	disabled: bool,
	multiple: bool,
	size: Option<u32>,
	sink: &mut dyn RenderSink,
	seq: &mut Sequence,
) {
	attrs.emit(sink, seq);
	if let Some(name) = name {
		sink.add_attribute(seq.next(), "name", name);
	}
	if required {
		sink.add_attribute(seq.next(), "required", "");
	}
	if disabled {
		sink.add_attribute(seq.next(), "disabled", "");
	}
	if multiple {
		sink.add_attribute(seq.next(), "multiple", "");
	}
	if let Some(size) = size {
		sink.add_attribute(seq.next(), "size", &size.to_string());
	}
}

impl Renderable for SelectBuilder {
	fn render_to(&self, sink: &mut dyn RenderSink, seq: &mut Sequence) {
		sink.open_element(seq.next(), "select");
		emit_control_attrs(
			&self.attrs,
			self.name.as_deref(),
			self.required,
			self.disabled,
			self.multiple,
			self.size,
			sink,
			seq,
		);
		for item in &self.items {
			match item {
				SelectItem::Leaf(option) => option.emit(sink, seq),
				SelectItem::Group(group) => group.emit(sink, seq),
			}
		}
		// a group left open counts as the final item
		if let Some(group) = &self.open_group {
			group.emit(sink, seq);
		}
		sink.close_element();
	}
}

/// Chainable builder for a `<select>` whose options are projected from a
/// collection.
///
/// # Example
///
/// ```rust
/// use grappelli_html::{Renderable, select_for};
///
/// let sizes = select_for(["S", "M", "L"])
/// 	.name("size")
/// 	.value(|s: &&str| s.to_lowercase())
/// 	.selected_value("m");
/// let html = sizes.to_html();
/// assert!(html.contains("<option value=\"m\" selected>M</option>"));
/// ```
pub struct CollectionSelectBuilder<T> {
	items: Vec<T>,
	attrs: AttrSet,
	name: Option<String>,
	required: bool,
	disabled: bool,
	multiple: bool,
	size: Option<u32>,
	value_fn: Option<Box<dyn Fn(&T) -> String>>,
	text_fn: Box<dyn Fn(&T) -> String>,
	selected_fn: Option<Box<dyn Fn(&T) -> bool>>,
	selected_value: Option<String>,
	disabled_fn: Option<Box<dyn Fn(&T) -> bool>>,
	group_fn: Option<Box<dyn Fn(&T) -> String>>,
	placeholder: Option<String>,
}

impl<T> fmt::Debug for CollectionSelectBuilder<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CollectionSelectBuilder")
			.field("items", &self.items.len())
			.field("name", &self.name)
			.field("placeholder", &self.placeholder)
			.field("grouped", &self.group_fn.is_some())
			.finish_non_exhaustive()
	}
}

/// Creates a select builder over a collection.
///
/// Option text defaults to each item's `Display` form until a
/// [`text`](CollectionSelectBuilder::text) selector replaces it.
pub fn select_for<T, I>(items: I) -> CollectionSelectBuilder<T>
where
	T: fmt::Display + 'static,
	I: IntoIterator<Item = T>,
{
	CollectionSelectBuilder::new(items)
}

impl<T> CollectionSelectBuilder<T> {
	/// Creates a builder over `items`; the collection is gathered once and
	/// iterated in order on every render.
	pub fn new<I>(items: I) -> Self
	where
		T: fmt::Display + 'static,
		I: IntoIterator<Item = T>,
	{
		Self {
			items: items.into_iter().collect(),
			attrs: AttrSet::new(),
			name: None,
			required: false,
			disabled: false,
			multiple: false,
			size: None,
			value_fn: None,
			text_fn: Box::new(|item: &T| item.to_string()),
			selected_fn: None,
			selected_value: None,
			disabled_fn: None,
			group_fn: None,
			placeholder: None,
		}
	}

	attr_methods!();

	/// Sets the `name` attribute.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the `required` flag.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Sets the `disabled` flag on the `<select>` itself.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Sets the `multiple` flag.
	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = multiple;
		self
	}

	/// Sets the visible `size`.
	pub fn size(mut self, size: u32) -> Self {
		self.size = Some(size);
		self
	}

	/// Sets the option-value selector.
	///
	/// Without one, options carry no `value` attribute.
	pub fn value<F, S>(mut self, selector: F) -> Self
	where
		F: Fn(&T) -> S + 'static,
		S: Into<String>,
	{
		self.value_fn = Some(Box::new(move |item| selector(item).into()));
		self
	}

	/// Sets the option-text selector, replacing the `Display` default.
	pub fn text<F, S>(mut self, selector: F) -> Self
	where
		F: Fn(&T) -> S + 'static,
		S: Into<String>,
	{
		self.text_fn = Box::new(move |item| selector(item).into());
		self
	}

	/// Marks options selected per item.
	///
	/// Takes precedence over
	/// [`selected_value`](Self::selected_value) when both are configured.
	pub fn selected<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&T) -> bool + 'static,
	{
		self.selected_fn = Some(Box::new(predicate));
		self
	}

	/// Marks selected the options whose value equals `value`.
	///
	/// Only consulted when no [`selected`](Self::selected) predicate is set.
	pub fn selected_value(mut self, value: impl Into<String>) -> Self {
		self.selected_value = Some(value.into());
		self
	}

	/// Disables options per item.
	pub fn disabled_option<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&T) -> bool + 'static,
	{
		self.disabled_fn = Some(Box::new(predicate));
		self
	}

	/// Partitions options into `<optgroup>`s keyed by `selector`.
	///
	/// Grouping, not chunking: all items sharing a key end up in one group
	/// even when they are not contiguous in the source; groups appear in
	/// the order of each key's first occurrence, and members keep their
	/// relative order.
	pub fn group_by<F, S>(mut self, selector: F) -> Self
	where
		F: Fn(&T) -> S + 'static,
		S: Into<String>,
	{
		self.group_fn = Some(Box::new(move |item| selector(item).into()));
		self
	}

	/// Adds a leading empty-valued placeholder option, emitted before all
	/// other options and groups.
	pub fn placeholder(mut self, label: impl Into<String>) -> Self {
		self.placeholder = Some(label.into());
		self
	}

	fn build_option(&self, item: &T) -> SelectOption {
		let value = self.value_fn.as_ref().map(|selector| selector(item));
		let selected = match (&self.selected_fn, &self.selected_value) {
			(Some(predicate), _) => predicate(item),
			(None, Some(target)) => value.as_deref() == Some(target.as_str()),
			(None, None) => false,
		};
		SelectOption {
			text: (self.text_fn)(item),
			selected,
			disabled: self.disabled_fn.as_ref().is_some_and(|predicate| predicate(item)),
			value,
		}
	}
}

impl<T> Renderable for CollectionSelectBuilder<T> {
	fn render_to(&self, sink: &mut dyn RenderSink, seq: &mut Sequence) {
		trace!(
			items = self.items.len(),
			grouped = self.group_fn.is_some(),
			"rendering collection select"
		);
		sink.open_element(seq.next(), "select");
		emit_control_attrs(
			&self.attrs,
			self.name.as_deref(),
			self.required,
			self.disabled,
			self.multiple,
			self.size,
			sink,
			seq,
		);
		if let Some(label) = &self.placeholder {
			sink.open_element(seq.next(), "option");
			sink.add_attribute(seq.next(), "value", "");
			sink.add_text_content(seq.next(), label);
			sink.close_element();
		}
		match &self.group_fn {
			Some(group_fn) => {
				let mut groups: Vec<(String, Vec<&T>)> = Vec::new();
				for item in &self.items {
					let key = group_fn(item);
					match groups.iter_mut().find(|(existing, _)| *existing == key) {
						Some((_, members)) => members.push(item),
						None => groups.push((key, vec![item])),
					}
				}
				for (label, members) in &groups {
					sink.open_element(seq.next(), "optgroup");
					sink.add_attribute(seq.next(), "label", label);
					for item in members {
						self.build_option(item).emit(sink, seq);
					}
					sink.close_element();
				}
			}
			None => {
				for item in &self.items {
					self.build_option(item).emit(sink, seq);
				}
			}
		}
		sink.close_element();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_end_group_without_open_group_is_noop() {
		let builder = select().end_group().option("1", "One");
		assert_eq!(builder.items.len(), 1);
		assert!(builder.open_group.is_none());
	}

	#[test]
	fn test_options_attach_to_open_group() {
		let builder = select().opt_group("A").option("1", "One");
		assert!(builder.items.is_empty());
		let group = builder.open_group.as_ref().unwrap();
		assert_eq!(group.options.len(), 1);
	}
}
