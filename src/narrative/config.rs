use std::time::Duration;

/// What to do when a reader scrolls back into a section whose step already ran.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepReplay {
	/// Run the step's action on every enter event.
	#[default]
	Always,
	/// Run each step's action at most once per page view.
	Once,
}

/// When a section counts as "entered".
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityConfig {
	/// Fraction of the section that must be visible.
	pub threshold: f64,
	/// CSS margin applied to the viewport before intersecting.
	pub root_margin: String,
}

impl Default for VisibilityConfig {
	fn default() -> Self {
		Self {
			threshold: 0.5,
			root_margin: "-20% 0px -20% 0px".into(),
		}
	}
}

/// Delays before each kind of element is committed to its visible state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
	/// Node fade-in delay.
	pub node: Duration,
	/// Edge fade-in delay.
	pub edge: Duration,
	/// Annotation `visible` class delay.
	pub annotation: Duration,
}

impl Default for RevealTiming {
	fn default() -> Self {
		Self {
			node: Duration::from_millis(100),
			edge: Duration::from_millis(200),
			annotation: Duration::from_millis(300),
		}
	}
}

/// Final opacities of revealed scene elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOpacity {
	/// Node disc.
	pub node_fill: f64,
	/// Node label.
	pub node_label: f64,
	/// Connecting line.
	pub edge: f64,
}

impl Default for RevealOpacity {
	fn default() -> Self {
		Self {
			node_fill: 0.9,
			node_label: 1.0,
			edge: 0.6,
		}
	}
}

/// Everything tunable about the narrative scene.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrativeConfig {
	/// CSS selector for the prose sections, in step order.
	pub section_selector: String,
	/// Visibility policy for section enter events.
	pub visibility: VisibilityConfig,
	/// Reveal delays.
	pub timing: RevealTiming,
	/// Reveal opacities.
	pub opacity: RevealOpacity,
	/// Replay behaviour on re-entering a section.
	pub replay: StepReplay,
}

impl Default for NarrativeConfig {
	fn default() -> Self {
		Self {
			section_selector: "section".into(),
			visibility: VisibilityConfig::default(),
			timing: RevealTiming::default(),
			opacity: RevealOpacity::default(),
			replay: StepReplay::default(),
		}
	}
}
