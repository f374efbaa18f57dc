//! In-memory stage and watcher for exercising the controller without a page.

use std::time::Duration;

use super::error::SceneError;
use super::model::{Annotation, Bounds, Edge, Node};
use super::stage::{Reveal, SectionWatcher, Stage};

#[derive(Clone, Debug, PartialEq)]
pub enum Drawn {
	Node(Node),
	Edge(Edge),
	Annotation(Annotation),
}

#[derive(Clone, Debug)]
pub struct Element {
	pub drawn: Drawn,
	pub revealed: Option<Reveal>,
}

/// Records every draw call. Handles index into `elements`; `order` is the
/// scene's back-to-front stacking of node and edge handles.
pub struct RecordingStage {
	bounds: Bounds,
	pub elements: Vec<Element>,
	pub order: Vec<usize>,
	pub pending: Vec<(usize, Reveal, Duration)>,
	/// Handles in the order `flush` revealed them.
	pub revealed: Vec<usize>,
}

impl RecordingStage {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			bounds: Bounds::new(width, height),
			elements: Vec::new(),
			order: Vec::new(),
			pending: Vec::new(),
			revealed: Vec::new(),
		}
	}

	/// Run every scheduled reveal, shortest delay first.
	pub fn flush(&mut self) {
		let mut pending = std::mem::take(&mut self.pending);
		pending.sort_by_key(|(_, _, delay)| *delay);
		for (handle, reveal, _) in pending {
			self.elements[handle].revealed = Some(reveal);
			self.revealed.push(handle);
		}
	}

	pub fn annotations(&self) -> Vec<&Annotation> {
		self.elements
			.iter()
			.filter_map(|el| match &el.drawn {
				Drawn::Annotation(a) => Some(a),
				_ => None,
			})
			.collect()
	}

	fn push(&mut self, drawn: Drawn) -> usize {
		self.elements.push(Element {
			drawn,
			revealed: None,
		});
		self.elements.len() - 1
	}
}

impl Stage for RecordingStage {
	type Handle = usize;

	fn bounds(&self) -> Bounds {
		self.bounds
	}

	fn draw_node(&mut self, node: &Node) -> Result<usize, SceneError> {
		let handle = self.push(Drawn::Node(node.clone()));
		self.order.push(handle);
		Ok(handle)
	}

	fn draw_edge(&mut self, edge: &Edge) -> Result<usize, SceneError> {
		let handle = self.push(Drawn::Edge(edge.clone()));
		self.order.insert(0, handle);
		Ok(handle)
	}

	fn draw_annotation(&mut self, annotation: &Annotation) -> Result<usize, SceneError> {
		Ok(self.push(Drawn::Annotation(annotation.clone())))
	}

	fn reveal(&mut self, handle: &usize, reveal: Reveal, delay: Duration) -> Result<(), SceneError> {
		self.pending.push((*handle, reveal, delay));
		Ok(())
	}
}

/// Sections are plain indices; tests fire enter events by hand.
#[derive(Default)]
pub struct ManualWatcher {
	observed: Vec<(usize, Box<dyn FnMut()>)>,
}

impl ManualWatcher {
	pub fn enter(&mut self, section: usize) {
		for (_, on_enter) in self.observed.iter_mut().filter(|(s, _)| *s == section) {
			on_enter();
		}
	}
}

impl SectionWatcher for ManualWatcher {
	type Section = usize;

	fn observe(&mut self, section: usize, on_enter: Box<dyn FnMut()>) -> Result<(), SceneError> {
		self.observed.push((section, on_enter));
		Ok(())
	}
}
