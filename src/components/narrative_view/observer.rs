use std::cell::RefCell;
use std::rc::Rc;

use log::trace;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::narrative::{SceneError, SectionWatcher, VisibilityConfig};

type Targets = Rc<RefCell<Vec<(Element, Box<dyn FnMut()>)>>>;

/// `IntersectionObserver` over the prose sections. One observer serves every
/// section; entries are matched back to their callbacks by element identity.
pub struct IntersectionWatcher {
	observer: IntersectionObserver,
	targets: Targets,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
	pub fn new(config: &VisibilityConfig) -> Result<Self, SceneError> {
		let targets: Targets = Rc::new(RefCell::new(Vec::new()));
		let dispatch = targets.clone();
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, _: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if !entry.is_intersecting() {
						continue;
					}
					let target = entry.target();
					let mut targets = dispatch.borrow_mut();
					match targets.iter_mut().find(|(el, _)| *el == target) {
						Some((_, on_enter)) => on_enter(),
						None => trace!("intersection for unobserved <{}>", target.tag_name()),
					}
				}
			},
		);

		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(config.threshold));
		init.set_root_margin(&config.root_margin);
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

		Ok(Self {
			observer,
			targets,
			_callback: callback,
		})
	}
}

impl SectionWatcher for IntersectionWatcher {
	type Section = Element;

	fn observe(&mut self, section: Element, on_enter: Box<dyn FnMut()>) -> Result<(), SceneError> {
		self.observer.observe(&section);
		self.targets.borrow_mut().push((section, on_enter));
		Ok(())
	}
}

impl Drop for IntersectionWatcher {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}
