//! The AI-safety history, one step per prose section.

use super::controller::{NarrativeController, Step};
use super::error::SceneError;
use super::model::Node;
use super::stage::Stage;

/// Quote shown when the `capabilities` node appears.
pub const TURING_QUOTE: &str = "\"At some stage therefore we should have to expect the machines to take control.\" - Alan Turing, 1951";
/// Quote shown when the `alignment` node appears.
pub const ASIMOV_QUOTE: &str = "Asimov's Three Laws: The first systematic attempt at AI safety.";
/// Quote shown when the `risk` node appears.
pub const GOOD_QUOTE: &str = "\"The first ultraintelligent machine is the last invention that man need ever make\" - I.J. Good, 1965";

/// Steps in page order: intro, first warning, robot laws, intelligence explosion.
pub fn ai_safety_history<S: Stage>() -> Vec<Step<S>> {
	vec![
		Step::new("intro", intro),
		Step::new("first-warning", first_warning),
		Step::new("robot-laws", robot_laws),
		Step::new("intelligence-explosion", intelligence_explosion),
	]
}

/// The scene starts empty.
fn intro<S: Stage>(_: &mut NarrativeController<S>) -> Result<(), SceneError> {
	Ok(())
}

fn first_warning<S: Stage>(ctl: &mut NarrativeController<S>) -> Result<(), SceneError> {
	let center = ctl.center();
	ctl.add_node(
		Node::new("capabilities", center, "AI Capabilities")
			.with_color("#e74c3c")
			.with_radius(15.0),
	)?;
	ctl.show_annotation(
		center.offset(100.0, -100.0),
		TURING_QUOTE,
		"In 1951, before computers could even multiply reliably, Turing saw the endgame.",
	)?;
	Ok(())
}

fn robot_laws<S: Stage>(ctl: &mut NarrativeController<S>) -> Result<(), SceneError> {
	let center = ctl.center();
	ctl.add_node(
		Node::new("alignment", center.offset(-150.0, 100.0), "Alignment")
			.with_color("#27ae60")
			.with_radius(12.0),
	)?;
	ctl.show_annotation(
		center.offset(-300.0, 50.0),
		ASIMOV_QUOTE,
		"But they fail. What happens when laws conflict? Who decides what \"harm\" means?",
	)?;
	Ok(())
}

fn intelligence_explosion<S: Stage>(ctl: &mut NarrativeController<S>) -> Result<(), SceneError> {
	let center = ctl.center();
	ctl.add_node(
		Node::new("risk", center.offset(150.0, -50.0), "Risk Assessment")
			.with_color("#f39c12")
			.with_radius(18.0),
	)?;
	// Only connects once first-warning has drawn `capabilities`.
	ctl.add_edge("capabilities", "risk", 1.0)?;
	ctl.show_annotation(
		center.offset(200.0, -150.0),
		GOOD_QUOTE,
		"This wasn't science fiction. It was a mathematical theorem about recursive optimization.",
	)?;
	Ok(())
}
