use leptos::prelude::*;

use crate::components::narrative_view::NarrativeNetwork;

/// One prose section of the story. Sections map to narrative steps in order.
struct Chapter {
	id: &'static str,
	title: &'static str,
	paragraphs: &'static [&'static str],
}

const CHAPTERS: &[Chapter] = &[
	Chapter {
		id: "intro",
		title: "The Machines Take Control",
		paragraphs: &[
			"Worries about artificial intelligence are older than the field's name.",
			"Scroll on to watch the argument assemble itself, one idea at a time.",
		],
	},
	Chapter {
		id: "first-warning",
		title: "The First Warning",
		paragraphs: &[
			"In a 1951 radio lecture, Alan Turing considered what would follow once machines began to think.",
			"His answer was short: they would outstrip us, and control would pass to them.",
		],
	},
	Chapter {
		id: "robot-laws",
		title: "Laws for Robots",
		paragraphs: &[
			"Isaac Asimov tried to write safety down as rules, three laws every robot must obey.",
			"His own stories are mostly about how those rules go wrong.",
		],
	},
	Chapter {
		id: "intelligence-explosion",
		title: "The Intelligence Explosion",
		paragraphs: &[
			"In 1965 I.J. Good pointed out that a machine able to design better machines would not stop at one.",
			"Capability feeds on itself, and with it the size of the risk.",
		],
	},
];

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"The diagram could not be drawn."</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<NarrativeNetwork>
				{CHAPTERS
					.iter()
					.map(|chapter| {
						view! {
							<section id=chapter.id>
								<h2>{chapter.title}</h2>
								{chapter.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
							</section>
						}
					})
					.collect_view()}
			</NarrativeNetwork>
		</ErrorBoundary>
	}
}
