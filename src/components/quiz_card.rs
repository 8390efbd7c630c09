use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpFacade, try_record};
use crate::model::quiz::{Quiz, QuizSubmission};
use crate::model::{Shell, StructureDescriptor};

#[component]
fn QuizForm(desc: &'static StructureDescriptor) -> impl IntoView {
	let facade = expect_context::<HttpFacade>();
	let quiz = StoredValue::new(Quiz::for_descriptor(desc));
	let total = quiz.with_value(|q| q.questions.len());
	let answers = RwSignal::new(vec![None::<usize>; total]);
	let email = RwSignal::new(String::new());
	let submission = RwSignal::new(QuizSubmission::default());
	let notice = RwSignal::new(None::<String>);

	let submit = move |_| {
		let score = quiz.with_value(|q| answers.with_untracked(|a| q.score(a)));
		let begun = submission
			.try_update(|s| s.begin(desc.id, score, &email.get_untracked()));
		match begun {
			Some(Ok(result)) => {
				notice.set(Some(String::from("Saving…")));
				let facade = facade.clone();
				spawn_local(async move {
					let saved = try_record(&facade, &result).await;
					// The form may be gone by now; late replies are dropped.
					let _ = submission.try_update(|s| s.finish(saved));
					let _ = notice.try_set(Some(if saved {
						format!("Saved: {score}/{total} correct")
					} else {
						format!("Scored {score}/{total}, but the result could not be saved")
					}));
				});
			}
			Some(Err(refusal)) => notice.set(Some(refusal.to_string())),
			None => {}
		}
	};

	let questions = quiz.with_value(|q| {
		q.questions
			.iter()
			.enumerate()
			.map(|(qi, question)| {
				let options = question
					.options
					.iter()
					.enumerate()
					.map(|(oi, option)| {
						let chosen = move || answers.with(|a| a[qi] == Some(oi));
						view! {
							<button
								class="quiz-option"
								class:chosen=chosen
								on:click=move |_| answers.update(|a| a[qi] = Some(oi))
							>
								{*option}
							</button>
						}
					})
					.collect_view();
				view! {
					<li class="quiz-question">
						<p>{question.prompt.clone()}</p>
						<div class="quiz-options">{options}</div>
					</li>
				}
			})
			.collect_view()
	});

	view! {
		<ol class="quiz-questions">{questions}</ol>
		<input
			class="quiz-email"
			type="email"
			placeholder="you@example.com"
			prop:value=move || email.get()
			on:input=move |ev| email.set(event_target_value(&ev))
		/>
		<button
			class="btn btn-light"
			disabled=move || submission.with(QuizSubmission::in_flight)
			on:click=submit
		>
			"Submit"
		</button>
		<p class="quiz-notice">{move || notice.get()}</p>
	}
}

/// Call to action that expands into a short quiz on the active structure.
#[component]
pub fn QuizCard() -> impl IntoView {
	let shell = expect_context::<RwSignal<Shell>>();
	let desc = Memo::new(move |_| shell.with(|s| s.active()));
	let open = RwSignal::new(false);

	// A new structure starts with the card collapsed.
	Effect::new(move |_| {
		desc.track();
		open.set(false);
	});

	view! {
		<div class="card card-accent quiz-card">
			<h3 class="quiz-title">"Take a Quiz"</h3>
			<p class="quiz-lede">{move || format!("Test your knowledge on {}s.", desc.get().name)}</p>
			{move || {
				if open.get() {
					view! { <QuizForm desc=desc.get() /> }.into_any()
				} else {
					view! {
						<button class="quiz-start" on:click=move |_| open.set(true)>
							"Start Now ›"
						</button>
					}
						.into_any()
				}
			}}
		</div>
	}
}
