use leptos::prelude::*;
use log::warn;

use super::config::SliderConfig;
use super::region::DomRegion;
use super::render::MetadataRenderer;
use super::types::NodeRecord;

/// The detail panel for the selected graph node.
///
/// Owns a `div` carrying `config.region_id` and rewrites its content whenever
/// `node` changes; `None` clears it.
#[component]
pub fn MetadataSlider(
	#[prop(into)] node: Signal<Option<NodeRecord>>,
	#[prop(optional)] config: SliderConfig,
) -> impl IntoView {
	let region_ref = NodeRef::<leptos::html::Div>::new();
	let region_id = config.region_id.clone();
	let renderer = MetadataRenderer::new(config);

	Effect::new(move |_| {
		let record = node.get();
		let Some(div) = region_ref.get() else {
			if record.is_some() {
				warn!("Slider region not mounted yet; skipping render");
			}
			return;
		};
		let mut region = DomRegion::new(div.into());
		renderer.render_selection(record.as_ref(), &mut region);
	});

	view! { <div node_ref=region_ref id=region_id class="slider" /> }
}
