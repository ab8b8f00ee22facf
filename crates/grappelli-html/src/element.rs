//! Fluent element builders.
//!
//! [`Element`] is a mutable, chainable description of one tagged HTML
//! element: attributes, class tokens, inline styles, text/raw/fragment
//! content, and ordered children. [`VoidElement`] shares the attribute
//! machinery but has no content surface at all, which makes "void elements
//! cannot contain children" a type-level guarantee rather than a runtime
//! check.
//!
//! Factory functions exist for the common tags; `element(tag)` covers
//! arbitrary container tags and `void_element(tag)` the rest of the HTML
//! void set, both validating the tag name.

use std::borrow::Cow;

use crate::attrs::{AttrSet, attr_methods};
use crate::error::{BuilderError, Result};
use crate::select::{CollectionSelectBuilder, SelectBuilder};
use crate::sink::{RenderSink, Renderable, Sequence};
use crate::table::{CollectionTableBuilder, TableBuilder};

/// The HTML tags that cannot contain children and take no closing tag.
pub(crate) const VOID_TAGS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

pub(crate) fn is_void_tag(tag: &str) -> bool {
	VOID_TAGS.contains(&tag)
}

/// A normalized child accepted by [`Element::child`].
///
/// Nested elements keep their own ordered list; every other builder kind is
/// folded into the element's fragment-content slot, in call order relative
/// to other non-element content.
pub enum Child {
	/// A nested container element.
	Element(Element),
	/// Any other renderable builder: void element, table, or select.
	Fragment(Box<dyn Renderable>),
}

impl From<Element> for Child {
	fn from(element: Element) -> Self {
		Child::Element(element)
	}
}

impl From<VoidElement> for Child {
	fn from(element: VoidElement) -> Self {
		Child::Fragment(Box::new(element))
	}
}

impl From<TableBuilder> for Child {
	fn from(builder: TableBuilder) -> Self {
		Child::Fragment(Box::new(builder))
	}
}

impl<T: 'static> From<CollectionTableBuilder<T>> for Child {
	fn from(builder: CollectionTableBuilder<T>) -> Self {
		Child::Fragment(Box::new(builder))
	}
}

impl From<SelectBuilder> for Child {
	fn from(builder: SelectBuilder) -> Self {
		Child::Fragment(Box::new(builder))
	}
}

impl<T: 'static> From<CollectionSelectBuilder<T>> for Child {
	fn from(builder: CollectionSelectBuilder<T>) -> Self {
		Child::Fragment(Box::new(builder))
	}
}

/// Chainable builder for one non-void HTML element.
///
/// Construction mutates the builder in place; the terminal render is a
/// read-only walk, so a built element can be rendered repeatedly with
/// identical output.
///
/// # Example
///
/// ```rust
/// use grappelli_html::{Renderable, a, li, ul};
///
/// let menu = ul()
/// 	.class("menu")
/// 	.children((1..=2).map(|n| li().child(a().attr("href", format!("/{n}")).text(format!("Page {n}")))));
/// assert_eq!(
/// 	menu.to_html(),
/// 	"<ul class=\"menu\"><li><a href=\"/1\">Page 1</a></li><li><a href=\"/2\">Page 2</a></li></ul>"
/// );
/// ```
pub struct Element {
	tag: Cow<'static, str>,
	attrs: AttrSet,
	text: Option<String>,
	raw: Option<String>,
	content: Vec<Box<dyn Renderable>>,
	children: Vec<Element>,
}

impl std::fmt::Debug for Element {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Element")
			.field("tag", &self.tag)
			.field("text", &self.text)
			.field("raw", &self.raw)
			.field("content_count", &self.content.len())
			.field("children_count", &self.children.len())
			.finish_non_exhaustive()
	}
}

impl Element {
	/// Creates an element with an arbitrary tag name.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::InvalidTagName`] when `tag` is empty or
	/// whitespace-only.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Result<Self> {
		let tag = tag.into();
		if tag.trim().is_empty() {
			return Err(BuilderError::InvalidTagName(tag.into_owned()));
		}
		Ok(Self::from_static_tag(tag))
	}

	fn from_static_tag(tag: Cow<'static, str>) -> Self {
		Self {
			tag,
			attrs: AttrSet::new(),
			text: None,
			raw: None,
			content: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	attr_methods!();

	/// Sets the text content, replacing any previous text.
	///
	/// Text is escaped by the sink at emission time; this builder never
	/// escapes anything itself.
	pub fn text(mut self, content: impl Into<String>) -> Self {
		self.text = Some(content.into());
		self
	}

	/// Sets raw markup emitted without escaping, replacing any previous raw
	/// payload.
	///
	/// The caller is responsible for the safety of `markup`; hostile input
	/// passed here reaches the output verbatim.
	pub fn raw(mut self, markup: impl Into<String>) -> Self {
		self.raw = Some(markup.into());
		self
	}

	/// Attaches a pre-built fragment as content.
	pub fn content(mut self, fragment: impl Renderable + 'static) -> Self {
		self.content.push(Box::new(fragment));
		self
	}

	/// Appends a child builder of any kind.
	///
	/// Nested [`Element`]s keep their own child list, emitted after all
	/// other content; void elements, tables, and selects land in the
	/// fragment-content slot in call order.
	pub fn child(mut self, child: impl Into<Child>) -> Self {
		match child.into() {
			Child::Element(element) => self.children.push(element),
			Child::Fragment(fragment) => self.content.push(fragment),
		}
		self
	}

	/// Appends many element children, preserving iteration order.
	pub fn children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator<Item = Element>,
	{
		self.children.extend(children);
		self
	}
}

impl Renderable for Element {
	fn render_to(&self, sink: &mut dyn RenderSink, seq: &mut Sequence) {
		sink.open_element(seq.next(), &self.tag);
		self.attrs.emit(sink, seq);
		if let Some(text) = &self.text {
			sink.add_text_content(seq.next(), text);
		}
		if let Some(raw) = &self.raw {
			sink.add_raw_content(seq.next(), raw);
		}
		for fragment in &self.content {
			let position = seq.next();
			sink.add_fragment(position, fragment.as_ref(), seq);
		}
		for child in &self.children {
			child.render_to(sink, seq);
		}
		sink.close_element();
	}
}

/// Chainable builder for a void HTML element (`<br>`, `<img>`, ...).
///
/// Shares the attribute surface of [`Element`] but exposes no content or
/// child methods; its emission consists of the open tag and attributes only,
/// never a close instruction.
#[derive(Debug, Clone)]
pub struct VoidElement {
	tag: Cow<'static, str>,
	attrs: AttrSet,
}

impl VoidElement {
	/// Creates a void element for a tag in the HTML void set.
	///
	/// Only recognized void tags are accepted: a void element emits no close
	/// instruction, so a sink has to know the tag is void to keep its output
	/// well formed, and sinks only know the standard set.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::InvalidTagName`] when `tag` is empty or
	/// whitespace-only, and [`BuilderError::NotAVoidTag`] for any other tag
	/// outside the void set.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Result<Self> {
		let tag = tag.into();
		if tag.trim().is_empty() {
			return Err(BuilderError::InvalidTagName(tag.into_owned()));
		}
		if !is_void_tag(&tag) {
			return Err(BuilderError::NotAVoidTag(tag.into_owned()));
		}
		Ok(Self::from_static_tag(tag))
	}

	fn from_static_tag(tag: Cow<'static, str>) -> Self {
		Self {
			tag,
			attrs: AttrSet::new(),
		}
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	attr_methods!();
}

impl Renderable for VoidElement {
	fn render_to(&self, sink: &mut dyn RenderSink, seq: &mut Sequence) {
		sink.open_element(seq.next(), &self.tag);
		self.attrs.emit(sink, seq);
	}
}

/// Creates an element builder with an arbitrary tag name.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidTagName`] for an empty or whitespace-only
/// tag.
pub fn element(tag: impl Into<Cow<'static, str>>) -> Result<Element> {
	Element::new(tag)
}

/// Creates a void-element builder for a tag in the HTML void set.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidTagName`] for an empty or whitespace-only
/// tag, and [`BuilderError::NotAVoidTag`] for a tag outside the void set.
pub fn void_element(tag: impl Into<Cow<'static, str>>) -> Result<VoidElement> {
	VoidElement::new(tag)
}

/// Macro for defining HTML element factory functions.
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> Element {
			Element::from_static_tag(Cow::Borrowed($tag))
		}
	};
}

/// Macro for defining void-element factory functions.
macro_rules! define_void_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> VoidElement {
			VoidElement::from_static_tag(Cow::Borrowed($tag))
		}
	};
}

define_element!(
	/// Creates a `<div>` element.
	///
	/// # Example
	///
	/// ```rust
	/// use grappelli_html::{Renderable, div, p};
	///
	/// let container = div().class("container").child(p().text("Content"));
	/// assert_eq!(
	/// 	container.to_html(),
	/// 	"<div class=\"container\"><p>Content</p></div>"
	/// );
	/// ```
	div, "div"
);

define_element!(
	/// Creates a `<span>` element.
	span, "span"
);

define_element!(
	/// Creates a `<p>` element (paragraph).
	p, "p"
);

define_element!(
	/// Creates an `<a>` element (hyperlink).
	a, "a"
);

define_element!(
	/// Creates a `<button>` element.
	button, "button"
);

define_element!(
	/// Creates a `<form>` element.
	form, "form"
);

define_element!(
	/// Creates a `<label>` element.
	label, "label"
);

define_element!(
	/// Creates a `<fieldset>` element.
	fieldset, "fieldset"
);

define_element!(
	/// Creates a `<legend>` element.
	legend, "legend"
);

define_element!(
	/// Creates a `<textarea>` element.
	textarea, "textarea"
);

define_element!(
	/// Creates a `<ul>` element (unordered list).
	ul, "ul"
);

define_element!(
	/// Creates an `<ol>` element (ordered list).
	ol, "ol"
);

define_element!(
	/// Creates an `<li>` element (list item).
	li, "li"
);

define_element!(
	/// Creates an `<h1>` element (heading level 1).
	h1, "h1"
);

define_element!(
	/// Creates an `<h2>` element (heading level 2).
	h2, "h2"
);

define_element!(
	/// Creates an `<h3>` element (heading level 3).
	h3, "h3"
);

define_element!(
	/// Creates an `<h4>` element (heading level 4).
	h4, "h4"
);

define_element!(
	/// Creates an `<h5>` element (heading level 5).
	h5, "h5"
);

define_element!(
	/// Creates an `<h6>` element (heading level 6).
	h6, "h6"
);

define_element!(
	/// Creates a `<header>` element.
	header, "header"
);

define_element!(
	/// Creates a `<footer>` element.
	footer, "footer"
);

define_element!(
	/// Creates a `<nav>` element.
	nav, "nav"
);

define_element!(
	/// Creates a `<section>` element.
	section, "section"
);

define_element!(
	/// Creates an `<article>` element.
	article, "article"
);

define_element!(
	/// Creates a `<strong>` element.
	strong, "strong"
);

define_element!(
	/// Creates an `<em>` element.
	em, "em"
);

define_element!(
	/// Creates a `<small>` element.
	small, "small"
);

define_element!(
	/// Creates a `<pre>` element.
	pre, "pre"
);

define_element!(
	/// Creates a `<code>` element.
	code, "code"
);

define_element!(
	/// Creates a `<blockquote>` element.
	blockquote, "blockquote"
);

define_element!(
	/// Creates a `<caption>` element.
	caption, "caption"
);

define_element!(
	/// Creates a `<thead>` element.
	thead, "thead"
);

define_element!(
	/// Creates a `<tbody>` element.
	tbody, "tbody"
);

define_element!(
	/// Creates a `<tfoot>` element.
	tfoot, "tfoot"
);

define_element!(
	/// Creates a `<tr>` element (table row).
	tr, "tr"
);

define_element!(
	/// Creates a `<th>` element (header cell).
	th, "th"
);

define_element!(
	/// Creates a `<td>` element (data cell).
	td, "td"
);

define_void_element!(
	/// Creates a `<br>` element (line break).
	br, "br"
);

define_void_element!(
	/// Creates an `<hr>` element (thematic break).
	hr, "hr"
);

define_void_element!(
	/// Creates an `<img>` element.
	///
	/// # Example
	///
	/// ```rust
	/// use grappelli_html::{Renderable, img};
	///
	/// let logo = img().attr("src", "/logo.png").attr("alt", "Logo");
	/// assert_eq!(logo.to_html(), "<img src=\"/logo.png\" alt=\"Logo\">");
	/// ```
	img, "img"
);

define_void_element!(
	/// Creates an `<input>` element.
	input, "input"
);

define_void_element!(
	/// Creates a `<meta>` element.
	meta, "meta"
);

define_void_element!(
	/// Creates a `<link>` element.
	link, "link"
);

define_void_element!(
	/// Creates a `<source>` element.
	source, "source"
);

define_void_element!(
	/// Creates an `<area>` element.
	area, "area"
);

define_void_element!(
	/// Creates a `<col>` element.
	col, "col"
);

define_void_element!(
	/// Creates an `<embed>` element.
	embed, "embed"
);

define_void_element!(
	/// Creates a `<track>` element.
	track, "track"
);

define_void_element!(
	/// Creates a `<wbr>` element (word-break opportunity).
	wbr, "wbr"
);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_tag_name_rejected() {
		assert_eq!(
			Element::new("").unwrap_err(),
			BuilderError::InvalidTagName(String::new())
		);
		assert!(matches!(
			element("   "),
			Err(BuilderError::InvalidTagName(_))
		));
		assert!(matches!(void_element(""), Err(BuilderError::InvalidTagName(_))));
	}

	#[test]
	fn test_custom_tag_accepted() {
		let widget = element("x-widget").unwrap();
		assert_eq!(widget.tag(), "x-widget");
	}

	#[test]
	fn test_void_element_restricted_to_void_set() {
		assert_eq!(void_element("img").unwrap().tag(), "img");
		assert_eq!(
			void_element("x-icon").unwrap_err(),
			BuilderError::NotAVoidTag("x-icon".to_string())
		);
		assert!(matches!(void_element("div"), Err(BuilderError::NotAVoidTag(_))));
	}
}
