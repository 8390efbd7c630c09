use leptos::prelude::*;
use log::debug;

use crate::model::{LinearKind, LinearState, RandomValues, Shell};

// (position in the sequence, value); used as the render key too.
type Cell = (usize, i64);

fn cells(state: Option<&LinearState>) -> Vec<Cell> {
	state.map(LinearState::indexed_display_order).unwrap_or_default()
}

/// Editable sequence drawn the way its kind is usually pictured.
#[component]
pub fn LinearView(kind: LinearKind) -> impl IntoView {
	let shell = expect_context::<RwSignal<Shell>>();
	let values = expect_context::<StoredValue<RandomValues>>();
	let items = move || shell.with(|s| cells(s.state().linear()));
	let (push_label, pop_label) = kind.action_labels();

	let push = move |_| {
		values.update_value(|source| {
			shell.update(|s| {
				if let Some(value) = s.push_generated(source) {
					debug!("{push_label} {value}");
				}
			})
		})
	};
	let pop = move |_| {
		shell.update(|s| {
			if let Some(value) = s.pop() {
				debug!("{pop_label} {value}");
			}
		})
	};

	let body = match kind {
		LinearKind::Array => view! {
			<div class="array-row">
				<For
					each=items
					key=|cell| *cell
					children=|(index, value)| {
						view! {
							<div class="cell array-cell enter-scale">
								<span class="cell-value">{value}</span>
								<span class="cell-index">{format!("[{index}]")}</span>
							</div>
						}
					}
				/>
			</div>
		}
		.into_any(),
		LinearKind::Stack => view! {
			<div class="stack-well">
				<For
					each=items
					key=|cell| *cell
					children=|(_, value)| {
						view! { <div class="cell stack-cell enter-drop">{value}</div> }
					}
				/>
			</div>
		}
		.into_any(),
		LinearKind::Queue => view! {
			<div class="queue-row">
				<span class="end-label">"Front"</span>
				<div class="queue-lane">
					<For
						each=items
						key=|cell| *cell
						children=|(_, value)| {
							view! { <div class="cell queue-cell enter-slide">{value}</div> }
						}
					/>
				</div>
				<span class="end-label">"Rear"</span>
			</div>
		}
		.into_any(),
		LinearKind::LinkedList => view! {
			<div class="list-row">
				<For
					each=move || {
						let cells = items();
						let last = cells.len().saturating_sub(1);
						cells
							.into_iter()
							.map(|(index, value)| (index, value, index == last))
							.collect::<Vec<_>>()
					}
					key=|cell| *cell
					children=|(_, value, is_tail)| {
						view! {
							<div class="list-node enter-scale">
								<div class="list-box">
									<div class="list-value">{value}</div>
									<div class="list-next">"NEXT"</div>
								</div>
								{if is_tail {
									view! { <div class="list-link list-null">"NULL"</div> }.into_any()
								} else {
									view! { <div class="list-link list-arrow"></div> }.into_any()
								}}
							</div>
						}
					}
				/>
			</div>
		}
		.into_any(),
	};

	view! {
		<div class="visualizer linear-visualizer">
			{body}
			<div class="actions">
				<button class="btn btn-primary" on:click=push>
					"+ "
					{push_label}
				</button>
				<button class="btn btn-outline" on:click=pop>
					"− "
					{pop_label}
				</button>
			</div>
		</div>
	}
}
