//! Helpers for the browser tests (`wasm-pack test --headless --firefox`).

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// A fresh `<svg>` attached to the body.
pub fn surface() -> Element {
	let document = document();
	let svg = document
		.create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
		.unwrap();
	svg.set_attribute("width", "800").unwrap();
	svg.set_attribute("height", "600").unwrap();
	document.body().unwrap().append_child(&svg).unwrap();
	svg
}

/// Resolve after `millis` on the page's timer queue.
pub async fn sleep(millis: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
			.unwrap();
	});
	wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}
