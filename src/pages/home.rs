use leptos::prelude::*;

use crate::api::HttpFacade;
use crate::components::info_cards::{ComplexityCard, DefinitionCard, Header, PropertiesCard};
use crate::components::quiz_card::QuizCard;
use crate::components::sidebar::Sidebar;
use crate::components::visualizer::Visualizer;
use crate::config::AppConfig;
use crate::model::{RandomValues, Shell};

/// Explorer page: navigation, live visualizer and reference cards.
#[component]
pub fn Home() -> impl IntoView {
	let config = expect_context::<AppConfig>();

	// Session state lives here and reaches children through context.
	provide_context(RwSignal::new(Shell::new(config.default_structure)));
	provide_context(StoredValue::new(RandomValues::from_entropy()));
	provide_context(HttpFacade::new(&config.api_base_url));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

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
			<div class="app">
				<Sidebar />
				<main class="main">
					<Header />
					<div class="content">
						<div class="content-grid">
							<div class="column-wide">
								<div class="card visualizer-card">
									<div class="visualizer-card-header">
										<h3 class="card-heading">"Interactive Visualizer"</h3>
										<span class="live-dot">"Live Preview"</span>
									</div>
									<div class="visualizer-stage">
										<Visualizer />
									</div>
								</div>
								<DefinitionCard />
							</div>
							<div class="column-narrow">
								<ComplexityCard />
								<PropertiesCard />
								<QuizCard />
							</div>
						</div>
					</div>
				</main>
			</div>
		</ErrorBoundary>
	}
}
