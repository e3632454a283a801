//! UI components: the relationship graph and the node detail slider.

pub(crate) mod force_graph;
pub mod metadata_slider;
