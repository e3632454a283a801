//! DOM-backed slider regions and the `printMetadata` binding, run in a browser.
//!
//! `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]
#![allow(unused_crate_dependencies)]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};
use wiki_graph_slider::{
	DomRegion, MetadataRenderer, NodeRecord, OutputRegion, SliderError, print_metadata,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window()
		.and_then(|w| w.document())
		.expect("test runs in a browser")
}

/// Appends a `div` with `id` to the body; the caller removes it.
fn mount_div(id: &str) -> Element {
	let document = document();
	let div = document.create_element("div").expect("create div");
	div.set_id(id);
	document
		.body()
		.expect("document body")
		.append_child(&div)
		.expect("append div");
	div
}

fn luna() -> NodeRecord {
	NodeRecord::new("Luna Lovegood", "Luna_Lovegood", "luna.jpg")
		.with_connection("Neville Longbottom", "Neville_Longbottom")
}

#[wasm_bindgen_test]
fn test_missing_region_is_reported() {
	let err = DomRegion::by_id(&document(), "nope").expect_err("no element with that id");
	assert_eq!(err, SliderError::RegionNotFound("nope".into()));
	assert_eq!(err.to_string(), "output region `nope` not found");
}

#[wasm_bindgen_test]
fn test_render_writes_inner_html() {
	let div = mount_div("slider-render-test");
	div.set_inner_html("<p>stale</p>");

	let mut region = DomRegion::by_id(&document(), "slider-render-test").expect("region exists");
	MetadataRenderer::default().render(&luna(), &mut region);

	let html = div.inner_html();
	assert!(!html.contains("stale"));
	assert!(html.contains(">Luna Lovegood</a></h1>"));
	assert!(html.contains("http://harrypotter.wikia.com/wiki/Neville_Longbottom"));
	assert_eq!(region.content(), html);
	div.remove();
}

#[wasm_bindgen_test]
fn test_cleared_selection_empties_the_div() {
	let div = mount_div("slider-clear-test");
	let mut region = DomRegion::new(div.clone());
	let renderer = MetadataRenderer::default();

	renderer.render_selection(Some(&luna()), &mut region);
	assert!(!div.inner_html().is_empty());

	renderer.render_selection(None, &mut region);
	assert_eq!(div.inner_html(), "");
	div.remove();
}

#[wasm_bindgen_test]
fn test_print_metadata_rejects_non_record() {
	let err = print_metadata(JsValue::from_str("x")).expect_err("a string is not a record");
	let message = err.as_string().expect("error is a string");
	assert!(message.starts_with("invalid node record"), "{}", message);
}

#[wasm_bindgen_test]
fn test_print_metadata_without_slider_fails() {
	assert!(document().get_element_by_id("slider").is_none());
	let node = serde_wasm_bindgen::to_value(&luna()).expect("record to js");

	let err = print_metadata(node).expect_err("no slider element");
	assert_eq!(
		err.as_string().as_deref(),
		Some("output region `slider` not found")
	);
}

#[wasm_bindgen_test]
fn test_print_metadata_renders_into_slider() {
	let div = mount_div("slider");
	let node = serde_wasm_bindgen::to_value(&luna()).expect("record to js");

	print_metadata(node).expect("slider exists");
	assert!(div.inner_html().contains(r#"<img src="luna.jpg""#));
	div.remove();
}
