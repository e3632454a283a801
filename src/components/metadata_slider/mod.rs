//! Node detail panel: record type, markup builder, output regions and the Leptos component.

mod bindings;
mod component;
mod config;
mod error;
pub mod markup;
mod region;
mod render;
mod types;

pub use bindings::print_metadata;
pub use component::MetadataSlider;
pub use config::{DEFAULT_REGION_ID, DEFAULT_WIKI_BASE, SliderConfig};
pub use error::SliderError;
pub use region::{DomRegion, MemoryRegion, OutputRegion};
pub use render::MetadataRenderer;
pub use types::NodeRecord;
