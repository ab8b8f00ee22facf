//! Built-in string-producing sink.
//!
//! [`HtmlRenderer`] is the reference [`RenderSink`]: it serializes the
//! instruction stream into an HTML string, handling escaping, boolean
//! attributes, and void tags. Host frameworks with their own rendering
//! engines supply their own sink instead.

use tracing::trace;

use crate::element::is_void_tag;
use crate::sink::{RenderSink, Renderable, Sequence};

/// Attributes that are presence-only in HTML.
const BOOLEAN_ATTRS: &[&str] = &[
	"autofocus", "checked", "disabled", "multiple", "readonly", "required", "selected",
];

fn is_boolean_attr(name: &str) -> bool {
	BOOLEAN_ATTRS.contains(&name)
}

/// Simple HTML escape function.
fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// A [`RenderSink`] that serializes the instruction stream into a `String`.
///
/// Text and attribute values are escaped here; raw content passes through
/// untouched. An empty value on a known boolean attribute renders as the
/// bare attribute name. Recognized void tags are not pushed onto the
/// open-tag stack, so builders that never emit a close instruction for them
/// still produce well-formed output.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
	out: String,
	stack: Vec<String>,
	tag_open: bool,
}

impl HtmlRenderer {
	/// Creates an empty renderer.
	pub fn new() -> Self {
		Self::default()
	}

	fn close_bracket(&mut self) {
		if self.tag_open {
			self.out.push('>');
			self.tag_open = false;
		}
	}

	/// Finishes serialization and returns the HTML string.
	pub fn finish(mut self) -> String {
		self.close_bracket();
		self.out
	}
}

impl RenderSink for HtmlRenderer {
	fn open_element(&mut self, _position: u32, tag: &str) {
		self.close_bracket();
		self.out.push('<');
		self.out.push_str(tag);
		self.tag_open = true;
		if !is_void_tag(tag) {
			self.stack.push(tag.to_string());
		}
	}

	fn close_element(&mut self) {
		self.close_bracket();
		if let Some(tag) = self.stack.pop() {
			self.out.push_str("</");
			self.out.push_str(&tag);
			self.out.push('>');
		}
	}

	fn add_attribute(&mut self, _position: u32, name: &str, value: &str) {
		self.out.push(' ');
		self.out.push_str(name);
		if !(value.is_empty() && is_boolean_attr(name)) {
			self.out.push_str("=\"");
			self.out.push_str(&html_escape(value));
			self.out.push('"');
		}
	}

	fn add_text_content(&mut self, _position: u32, text: &str) {
		self.close_bracket();
		self.out.push_str(&html_escape(text));
	}

	fn add_raw_content(&mut self, _position: u32, markup: &str) {
		self.close_bracket();
		self.out.push_str(markup);
	}

	fn add_fragment(&mut self, _position: u32, fragment: &dyn Renderable, seq: &mut Sequence) {
		fragment.render_to(self, seq);
	}
}

/// Renders any fragment through [`HtmlRenderer`].
///
/// # Example
///
/// ```rust
/// use grappelli_html::{div, render_to_string};
///
/// let html = render_to_string(&div().id("app"));
/// assert_eq!(html, "<div id=\"app\"></div>");
/// ```
pub fn render_to_string(fragment: &dyn Renderable) -> String {
	let mut renderer = HtmlRenderer::new();
	let mut seq = Sequence::new();
	fragment.render_to(&mut renderer, &mut seq);
	let html = renderer.finish();
	trace!(len = html.len(), "rendered fragment");
	html
}
