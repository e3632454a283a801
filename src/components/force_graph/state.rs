use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::GraphData;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const NODE_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 12.0;
/// Pointer travel (screen px) past which a press becomes a drag, not a click.
pub const CLICK_SLOP: f64 = 4.0;
const HIGHLIGHT_SPEED: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: Option<String>,
	pub color: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// A pointer press, either on a node or on the background.
#[derive(Clone, Debug, Default)]
pub struct PointerState {
	pub node: Option<DefaultNodeIdx>,
	pub start: (f64, f64),
	pub origin: (f64, f64),
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub pointer: Option<PointerState>,
	pub hover: HoverState,
	pub selected: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	adjacency: HashMap<DefaultNodeIdx, HashSet<DefaultNodeIdx>>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut adjacency: HashMap<DefaultNodeIdx, HashSet<DefaultNodeIdx>> = HashMap::new();
		let count = data.nodes.len().max(1) as f64;

		for (i, node) in data.nodes.iter().enumerate() {
			let color = node.color.clone().unwrap_or_else(|| {
				let group = node.group.unwrap_or(0) as usize;
				COLORS[group % COLORS.len()].into()
			});
			// Seed on a circle so the simulation has no coincident nodes.
			let angle = (i as f64) * 2.0 * PI / count;
			let idx = graph.add_node(NodeData {
				x: (120.0 * angle.cos()) as f32,
				y: (120.0 * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for link in &data.links {
			let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) else {
				continue;
			};
			graph.add_edge(src, tgt, EdgeData::default());
			adjacency.entry(src).or_default().insert(tgt);
			adjacency.entry(tgt).or_default().insert(src);
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pointer: None,
			hover: HoverState::default(),
			selected: None,
			width,
			height,
			adjacency,
		}
	}

	/// Swaps in new graph data, keeping the current pan and zoom. Selection and
	/// hover refer to the old node indices and are cleared.
	pub fn rebuild(&mut self, data: &GraphData) {
		let transform = std::mem::take(&mut self.transform);
		*self = Self::new(data, self.width, self.height);
		self.transform = transform;
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Closest node within [`HIT_RADIUS`] of a screen position.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut best: Option<(DefaultNodeIdx, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < HIT_RADIUS && best.is_none_or(|(_, d)| dist < d) {
				best = Some((node.index(), dist));
			}
		});
		best.map(|(idx, _)| idx)
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut pos = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = Some((node.x() as f64, node.y() as f64));
			}
		});
		pos
	}

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		let node = self.node_at_position(sx, sy);
		let origin = match node {
			Some(idx) => self.node_position(idx).unwrap_or_default(),
			None => (self.transform.x, self.transform.y),
		};
		self.pointer = Some(PointerState {
			node,
			start: (sx, sy),
			origin,
			moved: false,
		});
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		if self.pointer.is_none() {
			let hovered = self.node_at_position(sx, sy);
			self.set_hover(hovered);
			return;
		}
		let Some(pointer) = self.pointer.as_mut() else {
			return;
		};
		let (dx, dy) = (sx - pointer.start.0, sy - pointer.start.1);
		if !pointer.moved && (dx * dx + dy * dy).sqrt() > CLICK_SLOP {
			pointer.moved = true;
		}
		if !pointer.moved {
			return;
		}
		let (node, origin) = (pointer.node, pointer.origin);

		match node {
			Some(idx) => {
				let k = self.transform.k;
				let (nx, ny) = ((origin.0 + dx / k) as f32, (origin.1 + dy / k) as f32);
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
			}
			None => {
				self.transform.x = origin.0 + dx;
				self.transform.y = origin.1 + dy;
			}
		}
	}

	/// Ends a press. Returns the id of the node when the press was a click on it,
	/// and marks that node selected.
	pub fn pointer_up(&mut self) -> Option<String> {
		let pointer = self.pointer.take()?;
		if pointer.moved {
			return None;
		}
		let idx = pointer.node?;
		self.selected = Some(idx);
		self.node_id(idx)
	}

	pub fn pointer_leave(&mut self) {
		self.pointer = None;
		self.set_hover(None);
	}

	/// Zooms by `factor` around a screen position, clamped to `[0.1, 10]`.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = k;
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors = node
			.and_then(|idx| self.adjacency.get(&idx).cloned())
			.unwrap_or_default();
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn is_selected(&self, idx: DefaultNodeIdx) -> bool {
		self.selected == Some(idx)
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		let target = if self.hover.node.is_some() { 1.0 } else { 0.0 };
		let step = (HIGHLIGHT_SPEED * dt as f64).min(1.0);
		self.hover.highlight_t += (target - self.hover.highlight_t) * step;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn pair() -> GraphData {
		let node = |id: &str| GraphNode {
			id: id.into(),
			label: Some(id.into()),
			color: None,
			group: None,
		};
		GraphData {
			nodes: vec![node("a"), node("b")],
			links: vec![GraphLink {
				source: "a".into(),
				target: "b".into(),
			}],
		}
	}

	/// Screen position of a node at zoom 1.
	fn screen_pos(state: &ForceGraphState, id: &str) -> (f64, f64) {
		let mut pos = (0.0, 0.0);
		state.graph.visit_nodes(|n| {
			if n.data.user_data.id == id {
				pos = (
					n.x() as f64 + state.transform.x,
					n.y() as f64 + state.transform.y,
				);
			}
		});
		pos
	}

	#[test]
	fn click_on_node_selects_it() {
		let mut state = ForceGraphState::new(&pair(), 400.0, 300.0);
		let (x, y) = screen_pos(&state, "b");

		state.pointer_down(x, y);
		state.pointer_move(x + 1.0, y);
		assert_eq!(state.pointer_up().as_deref(), Some("b"));
		assert!(state.selected.is_some_and(|idx| state.is_selected(idx)));
	}

	#[test]
	fn dragging_a_node_does_not_select() {
		let mut state = ForceGraphState::new(&pair(), 400.0, 300.0);
		let (x, y) = screen_pos(&state, "a");

		state.pointer_down(x, y);
		state.pointer_move(x + 40.0, y + 40.0);
		assert_eq!(state.pointer_up(), None);
		assert!(state.selected.is_none());
		let (nx, ny) = screen_pos(&state, "a");
		assert!((nx - (x + 40.0)).abs() < 0.01 && (ny - (y + 40.0)).abs() < 0.01);
	}

	#[test]
	fn background_drag_pans() {
		let mut state = ForceGraphState::new(&pair(), 400.0, 300.0);
		state.pointer_down(5.0, 5.0);
		state.pointer_move(25.0, 15.0);
		assert_eq!(state.pointer_up(), None);
		assert_eq!((state.transform.x, state.transform.y), (220.0, 160.0));
	}

	#[test]
	fn hover_highlights_neighbors() {
		let mut state = ForceGraphState::new(&pair(), 400.0, 300.0);
		let (x, y) = screen_pos(&state, "a");
		state.pointer_move(x, y);

		let mut highlighted = 0;
		state.graph.visit_nodes(|n| {
			if state.is_highlighted(n.index()) {
				highlighted += 1;
			}
		});
		assert_eq!(highlighted, 2);

		state.pointer_leave();
		assert!(state.hover.node.is_none() && state.hover.neighbors.is_empty());
	}

	#[test]
	fn rebuild_keeps_view_and_drops_selection() {
		let mut state = ForceGraphState::new(&pair(), 400.0, 300.0);
		let (x, y) = screen_pos(&state, "a");
		state.pointer_down(x, y);
		state.pointer_up();
		state.zoom_at(10.0, 10.0, 2.0);
		let (tx, ty, k) = (state.transform.x, state.transform.y, state.transform.k);

		let mut bigger = pair();
		bigger.nodes.push(GraphNode {
			id: "c".into(),
			label: None,
			color: None,
			group: None,
		});
		state.rebuild(&bigger);

		assert_eq!((state.transform.x, state.transform.y, state.transform.k), (tx, ty, k));
		assert!(state.selected.is_none());
		let mut count = 0;
		state.graph.visit_nodes(|_| count += 1);
		assert_eq!(count, 3);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut state = ForceGraphState::new(&pair(), 400.0, 300.0);
		for _ in 0..100 {
			state.zoom_at(200.0, 150.0, 1.1);
		}
		assert_eq!(state.transform.k, 10.0);
	}
}
