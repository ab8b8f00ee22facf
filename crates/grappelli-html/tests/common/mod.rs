//! Shared test support: a sink that records raw instructions.

use grappelli_html::{RenderSink, Renderable, Sequence};

/// One recorded primitive instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
	Open(u32, String),
	Close,
	Attr(u32, String, String),
	Text(u32, String),
	Raw(u32, String),
	Fragment(u32),
}

impl Instruction {
	/// The position carried by this instruction, if any.
	pub fn position(&self) -> Option<u32> {
		match self {
			Instruction::Open(position, _)
			| Instruction::Attr(position, _, _)
			| Instruction::Text(position, _)
			| Instruction::Raw(position, _)
			| Instruction::Fragment(position) => Some(*position),
			Instruction::Close => None,
		}
	}
}

/// Records every primitive call, recursing into spliced fragments.
#[derive(Debug, Default)]
pub struct RecordingSink {
	pub instructions: Vec<Instruction>,
}

impl RecordingSink {
	pub fn new() -> Self {
		Self::default()
	}
}

impl RenderSink for RecordingSink {
	fn open_element(&mut self, position: u32, tag: &str) {
		self.instructions
			.push(Instruction::Open(position, tag.to_string()));
	}

	fn close_element(&mut self) {
		self.instructions.push(Instruction::Close);
	}

	fn add_attribute(&mut self, position: u32, name: &str, value: &str) {
		self.instructions
			.push(Instruction::Attr(position, name.to_string(), value.to_string()));
	}

	fn add_text_content(&mut self, position: u32, text: &str) {
		self.instructions
			.push(Instruction::Text(position, text.to_string()));
	}

	fn add_raw_content(&mut self, position: u32, markup: &str) {
		self.instructions
			.push(Instruction::Raw(position, markup.to_string()));
	}

	fn add_fragment(&mut self, position: u32, fragment: &dyn Renderable, seq: &mut Sequence) {
		self.instructions.push(Instruction::Fragment(position));
		fragment.render_to(self, seq);
	}
}

/// Renders a fragment into a fresh recording sink.
pub fn record(fragment: &dyn Renderable) -> Vec<Instruction> {
	let mut sink = RecordingSink::new();
	let mut seq = Sequence::new();
	fragment.render_to(&mut sink, &mut seq);
	sink.instructions
}
