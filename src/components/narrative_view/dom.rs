use std::time::Duration;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::narrative::{Annotation, Bounds, Edge, Node, Reveal, SceneError, Stage};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const EDGE_STROKE: &str = "#666";
const EDGE_WIDTH_PER_STRENGTH: f64 = 3.0;
const LABEL_FONT_SIZE: &str = "14";
const VISIBLE_CLASS: &str = "visible";

/// Live elements behind a drawn scene item.
#[derive(Clone, Debug)]
pub enum DomHandle {
	Node {
		group: Element,
		circle: Element,
		label: Element,
	},
	Edge(Element),
	Annotation(HtmlElement),
}

impl DomHandle {
	fn apply(&self, reveal: Reveal) -> Result<(), JsValue> {
		match (self, reveal) {
			(Self::Node { circle, label, .. }, Reveal::Node { fill, label: text }) => {
				circle.set_attribute("opacity", &fill.to_string())?;
				label.set_attribute("opacity", &text.to_string())
			}
			(Self::Edge(line), Reveal::Edge { opacity }) => {
				line.set_attribute("opacity", &opacity.to_string())
			}
			(Self::Annotation(el), Reveal::Annotation) => el.class_list().add_1(VISIBLE_CLASS),
			(handle, reveal) => Err(JsValue::from_str(&format!(
				"{reveal:?} does not apply to {}",
				handle.root().tag_name()
			))),
		}
	}

	fn root(&self) -> &Element {
		match self {
			Self::Node { group, .. } => group,
			Self::Edge(line) => line,
			Self::Annotation(el) => el,
		}
	}
}

/// Draws into an `<svg>` surface and floats callouts over the page body.
pub struct DomStage {
	document: Document,
	surface: Element,
}

impl DomStage {
	pub fn new(document: Document, surface: Element) -> Self {
		Self { document, surface }
	}

	fn svg(&self, tag: &str) -> Result<Element, SceneError> {
		Ok(self.document.create_element_ns(Some(SVG_NS), tag)?)
	}
}

impl Stage for DomStage {
	type Handle = DomHandle;

	fn bounds(&self) -> Bounds {
		let rect = self.surface.get_bounding_client_rect();
		Bounds::new(rect.width(), rect.height())
	}

	fn draw_node(&mut self, node: &Node) -> Result<DomHandle, SceneError> {
		let (x, y) = (node.position.x, node.position.y);
		let group = self.svg("g")?;
		group.set_attribute("class", "network-node")?;
		group.set_attribute("transform", &format!("translate({x}, {y})"))?;

		let circle = self.svg("circle")?;
		circle.set_attribute("r", &node.radius.to_string())?;
		circle.set_attribute("fill", &node.color)?;
		circle.set_attribute("opacity", "0")?;

		let label = self.svg("text")?;
		label.set_attribute("text-anchor", "middle")?;
		label.set_attribute("dy", "0.35em")?;
		label.set_attribute("font-size", LABEL_FONT_SIZE)?;
		label.set_attribute("fill", "#fff")?;
		label.set_attribute("opacity", "0")?;
		label.set_text_content(Some(&node.label));

		group.append_child(&circle)?;
		group.append_child(&label)?;
		self.surface.append_child(&group)?;
		Ok(DomHandle::Node {
			group,
			circle,
			label,
		})
	}

	fn draw_edge(&mut self, edge: &Edge) -> Result<DomHandle, SceneError> {
		let line = self.svg("line")?;
		line.set_attribute("class", "network-edge")?;
		line.set_attribute("x1", &edge.start.x.to_string())?;
		line.set_attribute("y1", &edge.start.y.to_string())?;
		line.set_attribute("x2", &edge.end.x.to_string())?;
		line.set_attribute("y2", &edge.end.y.to_string())?;
		line.set_attribute("stroke", EDGE_STROKE)?;
		line.set_attribute(
			"stroke-width",
			&(edge.strength * EDGE_WIDTH_PER_STRENGTH).to_string(),
		)?;
		line.set_attribute("opacity", "0")?;

		// Behind every node already on the surface.
		let first = self.surface.first_child();
		self.surface.insert_before(&line, first.as_ref())?;
		Ok(DomHandle::Edge(line))
	}

	fn draw_annotation(&mut self, annotation: &Annotation) -> Result<DomHandle, SceneError> {
		let body = self.document.body().ok_or(SceneError::NoBody)?;
		let el: HtmlElement = self
			.document
			.create_element("div")?
			.dyn_into()
			.map_err(JsValue::from)?;
		el.set_class_name("annotation");
		// Same viewport origin as the sticky surface the coordinates come from.
		let style = el.style();
		style.set_property("position", "fixed")?;
		style.set_property("left", &format!("{}px", annotation.position.x))?;
		style.set_property("top", &format!("{}px", annotation.position.y))?;

		let quote = self.document.create_element("div")?;
		quote.set_class_name("quote");
		quote.set_text_content(Some(&annotation.quote));
		let explanation = self.document.create_element("p")?;
		explanation.set_text_content(Some(&annotation.explanation));

		el.append_child(&quote)?;
		el.append_child(&explanation)?;
		body.append_child(&el)?;
		Ok(DomHandle::Annotation(el))
	}

	fn reveal(
		&mut self,
		handle: &DomHandle,
		reveal: Reveal,
		delay: Duration,
	) -> Result<(), SceneError> {
		let handle = handle.clone();
		after(delay, move || {
			if let Err(err) = handle.apply(reveal) {
				warn!("reveal failed: {:?}", err);
			}
		})
	}
}

/// Run `f` once after `delay` on the page's timer queue.
fn after(delay: Duration, f: impl FnOnce() + 'static) -> Result<(), SceneError> {
	let window = web_sys::window().ok_or(SceneError::NoWindow)?;
	let callback = Closure::once_into_js(f);
	let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
	window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)?;
	Ok(())
}
