//! Scroll-driven narrative graph: which section is on screen decides which
//! nodes, edges and quote callouts have been drawn.
//!
//! Nothing in here touches the DOM. The browser side lives in
//! `components::narrative_view`, which implements [`Stage`] and
//! [`SectionWatcher`] on top of `web-sys`.

mod config;
mod controller;
mod error;
mod model;
mod stage;
pub mod steps;

#[cfg(test)]
mod testing;

pub use config::{NarrativeConfig, RevealOpacity, RevealTiming, StepReplay, VisibilityConfig};
pub use controller::{NarrativeController, Step, StepAction};
pub use error::SceneError;
pub use model::{Annotation, Bounds, DEFAULT_NODE_COLOR, DEFAULT_NODE_RADIUS, Edge, Node, Point};
pub use stage::{Reveal, SectionWatcher, Stage};
