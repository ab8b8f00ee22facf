//! The emission contract between builders and a host rendering engine.
//!
//! Builders never format HTML themselves. The terminal render walks the
//! finished builder tree depth-first and emits primitive instructions into a
//! [`RenderSink`] supplied by the caller. Instruction positions come from a
//! [`Sequence`] cursor threaded by `&mut` through every nested call, so no
//! two instructions of one logical render share a position value.

/// Monotonically increasing position cursor for one logical render.
///
/// Created fresh per render and advanced on every emitted instruction,
/// including instructions emitted by spliced fragments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sequence(u32);

impl Sequence {
	/// Creates a cursor starting at zero.
	pub fn new() -> Self {
		Self(0)
	}

	/// Returns the current position and advances the cursor.
	pub fn next(&mut self) -> u32 {
		let position = self.0;
		self.0 += 1;
		position
	}
}

/// Primitive-emission interface a host rendering engine must supply.
///
/// Instructions follow strict nesting: every `open_element` for a container
/// tag is paired with exactly one `close_element`, in LIFO order. Void
/// elements are the exception and emit an open instruction only.
///
/// Escaping text and attribute values is the sink's job; raw content must
/// never be escaped. An empty attribute value denotes a presence-only
/// boolean attribute (`required`, `selected`, ...); sinks producing text
/// decide how to serialize it.
pub trait RenderSink {
	/// Begins a tag at the given position.
	fn open_element(&mut self, position: u32, tag: &str);

	/// Ends the most recently opened unclosed tag.
	fn close_element(&mut self);

	/// Attaches an attribute to the most recently opened, not yet closed tag.
	fn add_attribute(&mut self, position: u32, name: &str, value: &str);

	/// Adds text content to the currently open tag, escaped by the sink.
	fn add_text_content(&mut self, position: u32, text: &str);

	/// Adds markup to the currently open tag without escaping.
	fn add_raw_content(&mut self, position: u32, markup: &str);

	/// Splices the output of a nested renderable.
	///
	/// Implementations normally recurse via `fragment.render_to(self, seq)`
	/// so the spliced instructions keep drawing positions from the same
	/// cursor.
	fn add_fragment(&mut self, position: u32, fragment: &dyn Renderable, seq: &mut Sequence);
}

/// Capability of producing an emission sequence against a sink.
///
/// Every builder implements this. Rendering is a read-only walk over the
/// builder's state, so the same built value can be rendered any number of
/// times with identical output.
pub trait Renderable {
	/// Emits this value as primitive instructions into `sink`.
	fn render_to(&self, sink: &mut dyn RenderSink, seq: &mut Sequence);

	/// Renders through the built-in string sink.
	///
	/// # Example
	///
	/// ```rust
	/// use grappelli_html::{Renderable, span};
	///
	/// assert_eq!(span().text("hi").to_html(), "<span>hi</span>");
	/// ```
	fn to_html(&self) -> String
	where
		Self: Sized,
	{
		crate::render::render_to_string(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sequence_is_monotonic() {
		let mut seq = Sequence::new();
		assert_eq!(seq.next(), 0);
		assert_eq!(seq.next(), 1);
		assert_eq!(seq.next(), 2);
	}
}
