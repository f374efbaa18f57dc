use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while drawing into the page. None of these occur on a
/// well-formed page.
#[derive(Clone, Debug, Error)]
#[allow(missing_docs)]
pub enum SceneError {
	#[error("no global `window` available")]
	NoWindow,
	#[error("window has no `document`")]
	NoDocument,
	#[error("document has no `body`")]
	NoBody,
	#[error("DOM call failed: {0}")]
	Dom(String),
}

impl From<JsValue> for SceneError {
	fn from(value: JsValue) -> Self {
		Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
