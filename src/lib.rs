//! Scroll-through history of AI safety: a Leptos client-side app whose
//! diagram grows as the reader moves through the story.
//!
//! The scene logic lives in [`narrative`] and has no DOM dependency;
//! `components::narrative_view` binds it to SVG and `IntersectionObserver`.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

mod components;
pub mod narrative;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Route `log` output and panics to the browser console.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("console logging at debug level");
}

/// The story at `/`, a not-found page everywhere else.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		<Title text="The Machines Take Control: A Short History of AI Safety" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
