use std::fmt;

use grappelli_html::{Renderable, SelectOption, select, select_for};
use rstest::*;

#[derive(Debug, Clone)]
struct Locale {
	code: &'static str,
	label: &'static str,
	region: &'static str,
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label)
	}
}

#[fixture]
fn locales() -> Vec<Locale> {
	vec![
		Locale {
			code: "en",
			label: "English",
			region: "Europe",
		},
		Locale {
			code: "ja",
			label: "Japanese",
			region: "Asia",
		},
		Locale {
			code: "fr",
			label: "French",
			region: "Europe",
		},
	]
}

#[rstest]
fn test_control_attribute_order() {
	let html = select()
		.id("s")
		.name("color")
		.required(true)
		.multiple(true)
		.size(3)
		.option("r", "Red")
		.to_html();
	assert_eq!(
		html,
		"<select id=\"s\" name=\"color\" required multiple size=\"3\">\
		<option value=\"r\">Red</option></select>"
	);
}

#[rstest]
fn test_groups_emitted_in_declaration_order() {
	let html = select()
		.opt_group("A")
		.option("1", "One")
		.opt_group("B")
		.option("2", "Two")
		.to_html();
	assert_eq!(
		html,
		"<select><optgroup label=\"A\"><option value=\"1\">One</option></optgroup>\
		<optgroup label=\"B\"><option value=\"2\">Two</option></optgroup></select>"
	);
}

#[rstest]
fn test_open_group_renders_without_mutation() {
	let menu = select().option("0", "Top").opt_group("Tail").option("1", "One");
	let first = menu.to_html();
	let second = menu.to_html();
	assert_eq!(
		first,
		"<select><option value=\"0\">Top</option>\
		<optgroup label=\"Tail\"><option value=\"1\">One</option></optgroup></select>"
	);
	assert_eq!(first, second);
}

#[rstest]
fn test_unvalued_option_has_no_value_attribute() {
	let html = select().item(SelectOption::unvalued("Plain")).to_html();
	assert_eq!(html, "<select><option>Plain</option></select>");
}

#[rstest]
fn test_disabled_option_and_group() {
	let html = select()
		.item(SelectOption::new("x", "X").disabled(true))
		.opt_group_disabled("Legacy")
		.option("y", "Y")
		.to_html();
	assert_eq!(
		html,
		"<select><option value=\"x\" disabled>X</option>\
		<optgroup label=\"Legacy\" disabled><option value=\"y\">Y</option></optgroup></select>"
	);
}

#[rstest]
fn test_selected_flag_on_manual_option() {
	let html = select()
		.option("r", "Red")
		.item(SelectOption::new("g", "Green").selected(true))
		.to_html();
	assert!(html.contains("<option value=\"g\" selected>Green</option>"));
}

#[rstest]
fn test_collection_text_defaults_to_display(locales: Vec<Locale>) {
	let html = select_for(locales).to_html();
	assert_eq!(
		html,
		"<select><option>English</option><option>Japanese</option>\
		<option>French</option></select>"
	);
}

#[rstest]
fn test_collection_text_selector_replaces_display(locales: Vec<Locale>) {
	let html = select_for(locales)
		.value(|l: &Locale| l.code)
		.text(|l: &Locale| format!("{} ({})", l.label, l.code))
		.to_html();
	assert!(html.contains("<option value=\"ja\">Japanese (ja)</option>"));
}

#[rstest]
fn test_group_by_collects_noncontiguous_keys(locales: Vec<Locale>) {
	// Europe, Asia, Europe in source order still yields two groups
	let html = select_for(locales)
		.value(|l: &Locale| l.code)
		.group_by(|l: &Locale| l.region)
		.to_html();
	assert_eq!(
		html,
		"<select><optgroup label=\"Europe\">\
		<option value=\"en\">English</option>\
		<option value=\"fr\">French</option></optgroup>\
		<optgroup label=\"Asia\"><option value=\"ja\">Japanese</option></optgroup></select>"
	);
}

#[rstest]
fn test_selected_predicate_wins_over_selected_value(locales: Vec<Locale>) {
	let html = select_for(locales)
		.value(|l: &Locale| l.code)
		.selected_value("en")
		.selected(|l: &Locale| l.code == "ja")
		.to_html();
	assert!(html.contains("<option value=\"ja\" selected>Japanese</option>"));
	assert!(html.contains("<option value=\"en\">English</option>"));
}

#[rstest]
fn test_selected_value_matches_option_value(locales: Vec<Locale>) {
	let html = select_for(locales)
		.value(|l: &Locale| l.code)
		.selected_value("fr")
		.to_html();
	assert!(html.contains("<option value=\"fr\" selected>French</option>"));
}

#[rstest]
fn test_selected_value_without_value_selector_matches_nothing(locales: Vec<Locale>) {
	let html = select_for(locales).selected_value("en").to_html();
	assert!(!html.contains("selected"));
}

#[rstest]
fn test_disabled_option_predicate(locales: Vec<Locale>) {
	let html = select_for(locales)
		.value(|l: &Locale| l.code)
		.disabled_option(|l: &Locale| l.code == "fr")
		.to_html();
	assert!(html.contains("<option value=\"fr\" disabled>French</option>"));
	assert!(html.contains("<option value=\"en\">English</option>"));
}

#[rstest]
fn test_placeholder_precedes_groups(locales: Vec<Locale>) {
	let html = select_for(locales)
		.name("locale")
		.placeholder("Choose a locale")
		.value(|l: &Locale| l.code)
		.group_by(|l: &Locale| l.region)
		.to_html();
	assert!(html.starts_with(
		"<select name=\"locale\"><option value=\"\">Choose a locale</option>\
		<optgroup label=\"Europe\">"
	));
}

#[rstest]
fn test_empty_collection_keeps_placeholder() {
	let html = select_for(Vec::<Locale>::new())
		.name("locale")
		.placeholder("Choose a locale")
		.to_html();
	assert_eq!(
		html,
		"<select name=\"locale\"><option value=\"\">Choose a locale</option></select>"
	);
}

#[rstest]
fn test_empty_collection_without_placeholder() {
	let html = select_for(Vec::<Locale>::new()).name("locale").to_html();
	assert_eq!(html, "<select name=\"locale\"></select>");
}
