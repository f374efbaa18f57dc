use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::dom::DomStage;
use super::observer::IntersectionWatcher;
use crate::narrative::{NarrativeConfig, NarrativeController, SceneError};

/// Keeps the controller and its observer alive for the page's lifetime.
struct Runtime {
	_controller: Rc<RefCell<NarrativeController<DomStage>>>,
	_watcher: IntersectionWatcher,
}

fn start(surface: Element, config: &NarrativeConfig) -> Result<Runtime, SceneError> {
	let document = web_sys::window()
		.ok_or(SceneError::NoWindow)?
		.document()
		.ok_or(SceneError::NoDocument)?;

	let found = document.query_selector_all(&config.section_selector)?;
	let sections: Vec<Element> = (0..found.length())
		.filter_map(|i| found.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect();
	info!(
		"observing {} `{}` sections",
		sections.len(),
		config.section_selector
	);

	let stage = DomStage::new(document, surface);
	let mut watcher = IntersectionWatcher::new(&config.visibility)?;
	let controller =
		NarrativeController::new(stage, config.clone()).initialize(&mut watcher, sections)?;

	Ok(Runtime {
		_controller: controller,
		_watcher: watcher,
	})
}

/// Sticky SVG diagram that grows as the reader scrolls through `children`.
///
/// Every element matching `config.section_selector` drives one narrative
/// step, in document order. A failed start is rendered as an error for the
/// nearest `ErrorBoundary`.
#[component]
pub fn NarrativeNetwork(
	#[prop(optional)] config: NarrativeConfig,
	children: Children,
) -> impl IntoView {
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let runtime: Rc<RefCell<Option<Runtime>>> = Rc::new(RefCell::new(None));
	let failure = RwSignal::new(None::<SceneError>);

	Effect::new(move |_| {
		let Some(svg) = svg_ref.get() else {
			return;
		};
		if runtime.borrow().is_some() {
			return;
		}
		match start(svg.into(), &config) {
			Ok(started) => *runtime.borrow_mut() = Some(started),
			Err(err) => {
				error!("narrative network failed to start: {err}");
				failure.set(Some(err));
			}
		}
	});

	view! {
		<div class="narrative">
			<div class="network-container">
				<svg node_ref=svg_ref id="network" class="network" />
			</div>
			<div class="story">{children()}</div>
			{move || failure.get().map(Err::<(), SceneError>)}
		</div>
	}
}
