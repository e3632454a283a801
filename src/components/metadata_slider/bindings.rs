//! JavaScript entry point for hosts that render the slider without Leptos.

use log::error;
use wasm_bindgen::prelude::*;

use super::config::SliderConfig;
use super::region::DomRegion;
use super::render::MetadataRenderer;
use super::types::NodeRecord;

/// Renders `node` into the element with id `"slider"`.
///
/// `node` is a plain object with `label`, `link`, `link_image`,
/// `connection_label` and `connection_link` fields.
#[wasm_bindgen(js_name = printMetadata)]
pub fn print_metadata(node: JsValue) -> Result<(), JsValue> {
	let record: NodeRecord = serde_wasm_bindgen::from_value(node).map_err(|e| {
		error!("Invalid node record: {}", e);
		JsValue::from_str(&format!("invalid node record: {}", e))
	})?;

	let renderer = MetadataRenderer::new(SliderConfig::default());
	let mut region = DomRegion::from_window(&renderer.config().region_id).map_err(|e| {
		error!("{}", e);
		JsValue::from_str(&e.to_string())
	})?;
	renderer.render(&record, &mut region);
	Ok(())
}
