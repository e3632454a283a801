use leptos::prelude::*;
use log::warn;

use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::components::metadata_slider::{MetadataSlider, NodeRecord};

/// Built-in dataset: a handful of characters and how they relate.
pub fn sample_records() -> Vec<NodeRecord> {
	let record = |label: &str, link: &str, connections: &[(&str, &str)]| {
		connections.iter().fold(
			NodeRecord::new(label, link, format!("images/{}.jpg", link.to_lowercase())),
			|node, &(l, k)| node.with_connection(l, k),
		)
	};

	vec![
		record(
			"Harry Potter",
			"Harry_Potter",
			&[
				("Ron Weasley", "Ron_Weasley"),
				("Hermione Granger", "Hermione_Granger"),
				("Albus Dumbledore", "Albus_Dumbledore"),
				("Rubeus Hagrid", "Rubeus_Hagrid"),
				("Tom Riddle", "Tom_Riddle"),
			],
		),
		record(
			"Hermione Granger",
			"Hermione_Granger",
			&[("Ron Weasley", "Ron_Weasley"), ("Harry Potter", "Harry_Potter")],
		),
		record(
			"Ron Weasley",
			"Ron_Weasley",
			&[
				("Harry Potter", "Harry_Potter"),
				("Hermione Granger", "Hermione_Granger"),
				("Ginny Weasley", "Ginevra_Weasley"),
			],
		),
		record(
			"Ginny Weasley",
			"Ginevra_Weasley",
			&[("Ron Weasley", "Ron_Weasley"), ("Harry Potter", "Harry_Potter")],
		),
		record(
			"Albus Dumbledore",
			"Albus_Dumbledore",
			&[
				("Harry Potter", "Harry_Potter"),
				("Severus Snape", "Severus_Snape"),
				("Tom Riddle", "Tom_Riddle"),
			],
		),
		record(
			"Severus Snape",
			"Severus_Snape",
			&[("Albus Dumbledore", "Albus_Dumbledore"), ("Tom Riddle", "Tom_Riddle")],
		),
		record(
			"Rubeus Hagrid",
			"Rubeus_Hagrid",
			&[("Harry Potter", "Harry_Potter"), ("Albus Dumbledore", "Albus_Dumbledore")],
		),
		record(
			"Tom Riddle",
			"Tom_Riddle",
			&[("Harry Potter", "Harry_Potter"), ("Severus Snape", "Severus_Snape")],
		),
	]
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let records = StoredValue::new(sample_records());
	let graph_data = Signal::derive(move || records.with_value(|r| GraphData::from_records(r)));
	let (selected, set_selected) = signal(None::<NodeRecord>);

	let on_select = Callback::new(move |id: String| {
		let record = records.with_value(|r| r.iter().find(|n| n.link == id).cloned());
		if record.is_none() {
			warn!("No metadata for node {}", id);
		}
		set_selected.set(record);
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<ForceGraphCanvas data=graph_data on_select=on_select />
				<div class="graph-overlay">
					<h1>"Character Connections"</h1>
					<p class="subtitle">"Click a character to see its connections. Drag to rearrange, scroll to zoom."</p>
				</div>
				<MetadataSlider node=selected />
			</div>
		</ErrorBoundary>
	}
}
