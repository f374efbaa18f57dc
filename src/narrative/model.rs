//! Scene data owned by the controller's registries.

/// Fill used when a step does not pick a color.
pub const DEFAULT_NODE_COLOR: &str = "#4a90e2";
/// Radius used when a step does not pick a size.
pub const DEFAULT_NODE_RADIUS: f64 = 20.0;

/// A position in drawing-surface (or page) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Pixels from the left edge.
	pub x: f64,
	/// Pixels from the top edge.
	pub y: f64,
}

impl Point {
	/// A point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// The same point shifted by `(dx, dy)`.
	pub fn offset(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy)
	}
}

/// Size of the drawing surface, measured once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
}

impl Bounds {
	/// Bounds of a `width` by `height` surface.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Midpoint of the surface; step coordinates are laid out around it.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}
}

/// A labeled disc in the narrative graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Registry key.
	pub id: String,
	/// Center of the disc.
	pub position: Point,
	/// Text drawn on the disc.
	pub label: String,
	/// CSS fill color.
	pub color: String,
	/// Disc radius in pixels.
	pub radius: f64,
}

impl Node {
	/// A node with the default color and radius.
	pub fn new(id: impl Into<String>, position: Point, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			position,
			label: label.into(),
			color: DEFAULT_NODE_COLOR.into(),
			radius: DEFAULT_NODE_RADIUS,
		}
	}

	/// Replace the fill color.
	pub fn with_color(mut self, color: impl Into<String>) -> Self {
		self.color = color.into();
		self
	}

	/// Replace the disc radius.
	pub fn with_radius(mut self, radius: f64) -> Self {
		self.radius = radius;
		self
	}
}

/// A line between two registered nodes.
///
/// Endpoint coordinates are captured when the edge is created; later
/// overwrites of either node do not move it.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
	/// Source position at creation time.
	pub start: Point,
	/// Target position at creation time.
	pub end: Point,
	/// Relative thickness; 1.0 is a normal line.
	pub strength: f64,
}

impl Edge {
	/// Registry key, `"{from}-{to}"`.
	pub fn key(&self) -> String {
		edge_key(&self.from, &self.to)
	}
}

/// Key under which the edge `from -> to` is registered.
pub fn edge_key(from: &str, to: &str) -> String {
	format!("{from}-{to}")
}

/// A floating quote callout. Annotations are never removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
	/// Top-left corner in page pixels.
	pub position: Point,
	/// Quoted excerpt, shown emphasised.
	pub quote: String,
	/// Commentary under the quote.
	pub explanation: String,
}
