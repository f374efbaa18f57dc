use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, error, info};

use super::config::{NarrativeConfig, StepReplay};
use super::error::SceneError;
use super::model::{Annotation, Bounds, Edge, Node, Point, edge_key};
use super::stage::{Reveal, SectionWatcher, Stage};
use super::steps;

/// Action run when a step's section is entered.
pub type StepAction<S> = fn(&mut NarrativeController<S>) -> Result<(), SceneError>;

/// One scroll-activated unit of the narrative.
pub struct Step<S: Stage> {
	/// Stable name, used in logs.
	pub name: &'static str,
	/// Scene mutation for this step.
	pub action: StepAction<S>,
}

impl<S: Stage> Step<S> {
	/// A step called `name` running `action`.
	pub const fn new(name: &'static str, action: StepAction<S>) -> Self {
		Self { name, action }
	}
}

/// Maps visible sections to narrative steps and grows the scene.
pub struct NarrativeController<S: Stage> {
	stage: S,
	config: NarrativeConfig,
	bounds: Bounds,
	center: Point,
	nodes: HashMap<String, Node>,
	edges: HashMap<String, Edge>,
	annotations: Vec<Annotation>,
	steps: Vec<Step<S>>,
	visited: Vec<bool>,
	current: Option<usize>,
}

impl<S: Stage> NarrativeController<S> {
	/// A controller running the AI-safety history on `stage`.
	pub fn new(stage: S, config: NarrativeConfig) -> Self {
		Self::with_steps(stage, config, steps::ai_safety_history())
	}

	/// A controller running an arbitrary step list.
	pub fn with_steps(stage: S, config: NarrativeConfig, steps: Vec<Step<S>>) -> Self {
		let bounds = stage.bounds();
		Self {
			center: bounds.center(),
			bounds,
			visited: vec![false; steps.len()],
			steps,
			stage,
			config,
			nodes: HashMap::new(),
			edges: HashMap::new(),
			annotations: Vec::new(),
			current: None,
		}
	}

	/// Start listening: the `i`th section activates step `i`.
	///
	/// Sections past the end of the step list are observed too; entering them
	/// is a no-op.
	pub fn initialize<W>(
		self,
		watcher: &mut W,
		sections: impl IntoIterator<Item = W::Section>,
	) -> Result<Rc<RefCell<Self>>, SceneError>
	where
		S: 'static,
		W: SectionWatcher,
	{
		info!(
			"narrative surface {}x{}, {} steps",
			self.bounds.width,
			self.bounds.height,
			self.steps.len()
		);
		let shared = Rc::new(RefCell::new(self));
		for (index, section) in sections.into_iter().enumerate() {
			let controller = Rc::clone(&shared);
			watcher.observe(
				section,
				Box::new(move || {
					if let Err(err) = controller.borrow_mut().activate_step(index) {
						error!("step {index} failed: {err}");
					}
				}),
			)?;
		}
		Ok(shared)
	}

	/// Run step `index`. Out-of-range indices are ignored.
	pub fn activate_step(&mut self, index: usize) -> Result<(), SceneError> {
		let Some(step) = self.steps.get(index) else {
			debug!("no step for section {index}");
			return Ok(());
		};
		let (name, action) = (step.name, step.action);
		self.current = Some(index);

		if self.config.replay == StepReplay::Once && self.visited[index] {
			debug!("step `{name}` already ran");
			return Ok(());
		}
		self.visited[index] = true;

		info!("activating step {index} `{name}`");
		action(self)
	}

	/// Register and draw `node`, replacing any node with the same id.
	pub fn add_node(&mut self, node: Node) -> Result<S::Handle, SceneError> {
		let handle = self.stage.draw_node(&node)?;
		let reveal = Reveal::Node {
			fill: self.config.opacity.node_fill,
			label: self.config.opacity.node_label,
		};
		self.stage.reveal(&handle, reveal, self.config.timing.node)?;

		debug!(
			"node `{}` at ({}, {})",
			node.id, node.position.x, node.position.y
		);
		self.nodes.insert(node.id.clone(), node);
		Ok(handle)
	}

	/// Connect two registered nodes. Returns `None` without drawing anything
	/// if either endpoint is unknown.
	pub fn add_edge(
		&mut self,
		from: &str,
		to: &str,
		strength: f64,
	) -> Result<Option<S::Handle>, SceneError> {
		let (Some(source), Some(target)) = (self.nodes.get(from), self.nodes.get(to)) else {
			debug!("skipping edge {from} -> {to}: endpoint not drawn yet");
			return Ok(None);
		};
		let edge = Edge {
			from: from.into(),
			to: to.into(),
			start: source.position,
			end: target.position,
			strength,
		};

		let handle = self.stage.draw_edge(&edge)?;
		let reveal = Reveal::Edge {
			opacity: self.config.opacity.edge,
		};
		self.stage.reveal(&handle, reveal, self.config.timing.edge)?;

		debug!("edge {from} -> {to}");
		self.edges.insert(edge.key(), edge);
		Ok(Some(handle))
	}

	/// Float a quote callout at `position`.
	pub fn show_annotation(
		&mut self,
		position: Point,
		quote: impl Into<String>,
		explanation: impl Into<String>,
	) -> Result<S::Handle, SceneError> {
		let annotation = Annotation {
			position,
			quote: quote.into(),
			explanation: explanation.into(),
		};
		let handle = self.stage.draw_annotation(&annotation)?;
		self.stage
			.reveal(&handle, Reveal::Annotation, self.config.timing.annotation)?;
		self.annotations.push(annotation);
		Ok(handle)
	}

	/// Midpoint of the drawing surface.
	pub fn center(&self) -> Point {
		self.center
	}

	/// Surface size measured at construction.
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Most recently activated step, if any.
	pub fn current_step(&self) -> Option<usize> {
		self.current
	}

	/// Number of steps in the narrative.
	pub fn step_count(&self) -> usize {
		self.steps.len()
	}

	/// Name of step `index`.
	pub fn step_name(&self, index: usize) -> Option<&'static str> {
		self.steps.get(index).map(|step| step.name)
	}

	/// Registered node by id.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.get(id)
	}

	/// Registered edge `from -> to`.
	pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
		self.edges.get(&edge_key(from, to))
	}

	/// Number of registered nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of registered edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Every annotation shown so far, oldest first.
	pub fn annotations(&self) -> &[Annotation] {
		&self.annotations
	}

	/// The stage being drawn on.
	pub fn stage(&self) -> &S {
		&self.stage
	}

	/// Mutable access to the stage.
	pub fn stage_mut(&mut self) -> &mut S {
		&mut self.stage
	}
}
