mod component;
mod dom;
mod observer;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

pub use component::NarrativeNetwork;
