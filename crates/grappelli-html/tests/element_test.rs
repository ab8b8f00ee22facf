use grappelli_html::{BuilderError, Renderable, a, br, div, li, p, select, span, table, ul, void_element};

mod common;

use common::{Instruction, record};

#[test]
fn test_class_accumulation_order() {
	let html = div().class("a").classes(["b", "c"]).to_html();
	assert_eq!(html, "<div class=\"a b c\"></div>");
}

#[test]
fn test_class_if() {
	let html = div().class_if("x", false).class_if("y", true).to_html();
	assert_eq!(html, "<div class=\"y\"></div>");
}

#[test]
fn test_blank_class_tokens_dropped() {
	let html = div().class("a").class("   ").class("b").to_html();
	assert_eq!(html, "<div class=\"a b\"></div>");
}

#[test]
fn test_style_join_in_call_order() {
	let html = div().style("color", "red").style("margin", "1px").to_html();
	assert_eq!(html, "<div style=\"color: red; margin: 1px\"></div>");
}

#[test]
fn test_id_emitted_first() {
	let html = div().attr("role", "note").class("c").id("main").to_html();
	assert_eq!(html, "<div id=\"main\" class=\"c\" role=\"note\"></div>");
}

#[test]
fn test_attr_last_write_wins() {
	let html = a().attr("href", "/a").attr("href", "/b").to_html();
	assert_eq!(html, "<a href=\"/b\"></a>");
}

#[test]
fn test_attrs_merge() {
	let html = div()
		.attrs([("role", "note"), ("lang", "en")])
		.attr("role", "alert")
		.to_html();
	assert_eq!(html, "<div role=\"alert\" lang=\"en\"></div>");
}

#[test]
fn test_data_attribute() {
	let html = div().data("user-id", "7").to_html();
	assert_eq!(html, "<div data-user-id=\"7\"></div>");
}

#[test]
fn test_text_is_escaped() {
	let html = p().text("a < b & c").to_html();
	assert_eq!(html, "<p>a &lt; b &amp; c</p>");
}

#[test]
fn test_raw_is_not_escaped() {
	let html = div().raw("<i>em</i>").to_html();
	assert_eq!(html, "<div><i>em</i></div>");
}

#[test]
fn test_fixed_content_order() {
	// text, then raw, then fragment content, then element children,
	// regardless of call order
	let html = div()
		.child(span().text("s"))
		.child(br())
		.raw("<!--r-->")
		.text("t")
		.to_html();
	assert_eq!(html, "<div>t<!--r--><br><span>s</span></div>");
}

#[test]
fn test_content_fragment() {
	let html = div().content(span().text("x")).to_html();
	assert_eq!(html, "<div><span>x</span></div>");
}

#[test]
fn test_children_preserve_iteration_order() {
	let html = ul()
		.children(vec![li().text("1"), li().text("2"), li().text("3")])
		.to_html();
	assert_eq!(html, "<ul><li>1</li><li>2</li><li>3</li></ul>");
}

#[test]
fn test_select_and_table_as_children() {
	let html = div()
		.child(select().option("1", "One"))
		.child(table().row(["x"]))
		.to_html();
	assert_eq!(
		html,
		"<div><select><option value=\"1\">One</option></select>\
		<table><tbody><tr><td>x</td></tr></tbody></table></div>"
	);
}

#[test]
fn test_render_is_idempotent() {
	let card = div()
		.class("card")
		.id("c1")
		.child(span().text("title"))
		.child(br())
		.child(select().opt_group("G").option("1", "One"));
	let first = record(&card);
	let second = record(&card);
	assert_eq!(first, second);
	assert_eq!(card.to_html(), card.to_html());
}

#[test]
fn test_void_element_emits_no_close_text_or_children() {
	let rule = br().id("b").class("x");
	let instructions = record(&rule);
	assert_eq!(
		instructions,
		vec![
			Instruction::Open(0, "br".to_string()),
			Instruction::Attr(1, "id".to_string(), "b".to_string()),
			Instruction::Attr(2, "class".to_string(), "x".to_string()),
		]
	);
	assert!(!instructions.contains(&Instruction::Close));
}

#[test]
fn test_nested_void_element_keeps_parent_closed() {
	// every open of a non-void tag must be matched by its own close, so a
	// void child may not steal the parent's closing tag
	let html = div().child(void_element("hr").unwrap()).to_html();
	assert_eq!(html, "<div><hr></div>");
	assert!(matches!(
		void_element("x-icon"),
		Err(BuilderError::NotAVoidTag(_))
	));
}

#[test]
fn test_positions_never_repeat_within_one_render() {
	let tree = div()
		.class("outer")
		.child(span().text("a"))
		.child(br())
		.child(div().child(span().text("b")));
	let positions: Vec<u32> = record(&tree)
		.iter()
		.filter_map(Instruction::position)
		.collect();
	let mut deduped = positions.clone();
	deduped.dedup();
	assert_eq!(positions, deduped);
	assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}
