//! Shared attribute, class, and style accumulation.
//!
//! Every builder family carries the same attribute machinery; it lives here
//! once, together with the macro that stamps the chainable setter surface
//! onto each builder type.

use crate::sink::{RenderSink, Sequence};

/// Attribute storage shared by every builder.
///
/// Attributes and style properties are insertion-ordered with
/// last-write-wins on the key; class tokens keep append order and may
/// repeat. Emission order is fixed: `id` first, then `class`, then `style`,
/// then the remaining attributes in insertion order.
#[derive(Debug, Default, Clone)]
pub(crate) struct AttrSet {
	attrs: Vec<(String, String)>,
	classes: Vec<String>,
	styles: Vec<(String, String)>,
}

impl AttrSet {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute; a later write to the same name overwrites the
	/// value in place, keeping the original position.
	pub(crate) fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Appends a class token; blank tokens are silently dropped.
	pub(crate) fn push_class(&mut self, token: impl Into<String>) {
		let token = token.into();
		if !token.trim().is_empty() {
			self.classes.push(token);
		}
	}

	/// Sets a style property, last write wins.
	pub(crate) fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
		let property = property.into();
		let value = value.into();
		match self.styles.iter_mut().find(|(p, _)| *p == property) {
			Some(slot) => slot.1 = value,
			None => self.styles.push((property, value)),
		}
	}

	/// Emits the accumulated attributes for the currently open tag.
	pub(crate) fn emit(&self, sink: &mut dyn RenderSink, seq: &mut Sequence) {
		if let Some((_, id)) = self.attrs.iter().find(|(n, _)| n == "id") {
			sink.add_attribute(seq.next(), "id", id);
		}
		if !self.classes.is_empty() {
			sink.add_attribute(seq.next(), "class", &self.classes.join(" "));
		}
		if !self.styles.is_empty() {
			let style = self
				.styles
				.iter()
				.map(|(property, value)| format!("{property}: {value}"))
				.collect::<Vec<_>>()
				.join("; ");
			sink.add_attribute(seq.next(), "style", &style);
		}
		for (name, value) in &self.attrs {
			if name != "id" {
				sink.add_attribute(seq.next(), name, value);
			}
		}
	}
}

/// Stamps the common chainable attribute surface onto a builder type.
///
/// The host type must have a field `attrs: AttrSet`.
macro_rules! attr_methods {
	() => {
		/// Appends a CSS class token; blank tokens are silently dropped.
		pub fn class(mut self, name: impl Into<String>) -> Self {
			self.attrs.push_class(name);
			self
		}

		/// Appends several class tokens, preserving iteration order.
		pub fn classes<I>(mut self, names: I) -> Self
		where
			I: IntoIterator,
			I::Item: Into<String>,
		{
			for name in names {
				self.attrs.push_class(name);
			}
			self
		}

		/// Appends a class token only when `condition` holds.
		pub fn class_if(mut self, name: impl Into<String>, condition: bool) -> Self {
			if condition {
				self.attrs.push_class(name);
			}
			self
		}

		/// Sets the `id` attribute, always emitted first.
		pub fn id(mut self, value: impl Into<String>) -> Self {
			self.attrs.set("id", value);
			self
		}

		/// Sets an attribute; later writes to the same name win.
		pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
			self.attrs.set(name, value);
			self
		}

		/// Merges several attributes at once.
		pub fn attrs<I, K, V>(mut self, entries: I) -> Self
		where
			I: IntoIterator<Item = (K, V)>,
			K: Into<String>,
			V: Into<String>,
		{
			for (name, value) in entries {
				self.attrs.set(name, value);
			}
			self
		}

		/// Sets a `data-*` attribute.
		pub fn data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
			let name = format!("data-{}", name.into());
			self.attrs.set(name, value);
			self
		}

		/// Sets an inline style property; later writes to the same property
		/// win.
		pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
			self.attrs.set_style(property, value);
			self
		}

		/// Merges several style properties at once.
		pub fn styles<I, K, V>(mut self, entries: I) -> Self
		where
			I: IntoIterator<Item = (K, V)>,
			K: Into<String>,
			V: Into<String>,
		{
			for (property, value) in entries {
				self.attrs.set_style(property, value);
			}
			self
		}
	};
}

pub(crate) use attr_methods;
