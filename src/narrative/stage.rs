//! Capabilities the controller renders and listens through.
//!
//! Drawing is two-phase: `draw_*` puts an element on the page in its hidden
//! initial state, and `reveal` commits it to its final state after a delay.
//! The browser stage defers the commit with a timer; test stages can run it
//! whenever they like.

use std::time::Duration;

use super::error::SceneError;
use super::model::{Annotation, Bounds, Edge, Node};

/// Final state an element transitions to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reveal {
	/// Fade a node's disc and label in.
	Node {
		/// Disc opacity.
		fill: f64,
		/// Label opacity.
		label: f64,
	},
	/// Fade a line in.
	Edge {
		/// Line opacity.
		opacity: f64,
	},
	/// Toggle the annotation's `visible` class.
	Annotation,
}

/// A drawing surface plus the page around it.
pub trait Stage {
	/// Whatever the stage needs to find an element again at reveal time.
	type Handle: Clone;

	/// Size of the drawing surface.
	fn bounds(&self) -> Bounds;

	/// Append a hidden node on top of everything drawn so far.
	fn draw_node(&mut self, node: &Node) -> Result<Self::Handle, SceneError>;

	/// Insert a hidden line behind everything drawn so far.
	fn draw_edge(&mut self, edge: &Edge) -> Result<Self::Handle, SceneError>;

	/// Append a hidden callout to the page.
	fn draw_annotation(&mut self, annotation: &Annotation) -> Result<Self::Handle, SceneError>;

	/// Commit `handle` to `reveal` once `delay` has passed. Fire and forget.
	fn reveal(
		&mut self,
		handle: &Self::Handle,
		reveal: Reveal,
		delay: Duration,
	) -> Result<(), SceneError>;
}

/// Source of "section entered the viewport" events.
pub trait SectionWatcher {
	/// How the watcher identifies a section.
	type Section;

	/// Call `on_enter` every time `section` becomes visible.
	fn observe(
		&mut self,
		section: Self::Section,
		on_enter: Box<dyn FnMut()>,
	) -> Result<(), SceneError>;
}
