//! Leptos client-side app for exploring classic data structures.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::info;

pub mod api;
pub mod config;
pub mod error;
pub mod model;

// Browser entropy backend for `rand`.
#[cfg(target_arch = "wasm32")]
use getrandom as _;
// Only the browser fetch path awaits JS promises.
#[cfg(not(target_arch = "wasm32"))]
use wasm_bindgen_futures as _;

// Modules
mod components;
mod pages;

// Top-Level pages
use crate::config::AppConfig;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(config: &AppConfig) {
	let _ = console_log::init_with_level(config.log_level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {}", config.log_level);
}

/// An app router which renders the explorer and handles 404's
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="DataStruct Explorer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
