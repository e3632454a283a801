//! Browser entry point.

#![allow(unused_crate_dependencies)]

use wiki_graph_slider::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App)
}
