use datastruct_explorer::App;
use datastruct_explorer::config::AppConfig;
use leptos::prelude::*;
use log::warn;

fn main() {
	let (config, warnings) = AppConfig::from_build_env();
	datastruct_explorer::init_logging(&config);
	for warning in &warnings {
		warn!("{warning}");
	}
	mount_to_body(move || view! { <App config=config.clone() /> });
}
