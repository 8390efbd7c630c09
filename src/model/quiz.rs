//! Multiple-choice quiz derived from a descriptor's complexity table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::registry::{self, StructureDescriptor};

/// A question about one complexity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
	/// Prompt shown to the learner.
	pub prompt: String,
	/// Candidate answers in display order.
	pub options: Vec<&'static str>,
	/// Index into `options` of the right answer.
	pub correct: usize,
}

/// Questions for one structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
	/// Slug of the structure being quizzed.
	pub structure_id: &'static str,
	/// One question per complexity field.
	pub questions: Vec<Question>,
}

impl Quiz {
	/// Builds the four complexity questions for `desc`.
	pub fn for_descriptor(desc: &StructureDescriptor) -> Self {
		let options = answer_pool();
		let questions = desc
			.complexity
			.entries()
			.into_iter()
			.map(|(operation, answer)| Question {
				prompt: format!(
					"What is the {} complexity of {} {}?",
					operation.to_lowercase(),
					indefinite_article(desc.name),
					desc.name
				),
				correct: options
					.iter()
					.position(|option| *option == answer)
					.unwrap_or_default(),
				options: options.clone(),
			})
			.collect();
		Self {
			structure_id: desc.id,
			questions,
		}
	}

	/// Number of answers matching the right option. Unanswered and
	/// surplus entries score nothing.
	pub fn score(&self, answers: &[Option<usize>]) -> u32 {
		self.questions
			.iter()
			.zip(answers)
			.filter(|(question, answer)| **answer == Some(question.correct))
			.count() as u32
	}
}

fn indefinite_article(noun: &str) -> &'static str {
	match noun.chars().next().map(|c| c.to_ascii_lowercase()) {
		Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
		_ => "a",
	}
}

// Every distinct complexity string in the catalog, sorted.
fn answer_pool() -> Vec<&'static str> {
	registry::list()
		.iter()
		.flat_map(|desc| desc.complexity.entries().map(|(_, value)| value))
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect()
}

/// Record written to the backend after a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
	/// Matches a descriptor id.
	pub structure_id: String,
	/// Number of correct answers.
	pub score: u32,
	/// Who took the quiz.
	pub user_email: String,
}

/// Why a submission was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRefusal {
	/// A write for this quiz has not completed yet.
	#[error("a submission is already in progress")]
	InFlight,
	/// The email address is blank or malformed.
	#[error("enter a valid email address")]
	InvalidEmail,
}

/// Outcome of the last completed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The backend stored the result.
	Saved,
	/// The backend could not be reached or refused the write.
	NotSaved,
}

/// Tracks one quiz's write so it cannot be sent twice concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSubmission {
	in_flight: bool,
	last: Option<SubmitOutcome>,
}

impl QuizSubmission {
	/// Claims the write slot and produces the record to send.
	pub fn begin(
		&mut self,
		structure_id: &str,
		score: u32,
		user_email: &str,
	) -> Result<QuizResult, SubmitRefusal> {
		if self.in_flight {
			return Err(SubmitRefusal::InFlight);
		}
		let user_email = user_email.trim();
		if !is_plausible_email(user_email) {
			return Err(SubmitRefusal::InvalidEmail);
		}
		self.in_flight = true;
		Ok(QuizResult {
			structure_id: structure_id.to_owned(),
			score,
			user_email: user_email.to_owned(),
		})
	}

	/// Releases the write slot.
	pub fn finish(&mut self, saved: bool) {
		self.in_flight = false;
		self.last = Some(if saved {
			SubmitOutcome::Saved
		} else {
			SubmitOutcome::NotSaved
		});
	}

	/// Whether a write is pending.
	pub fn in_flight(&self) -> bool {
		self.in_flight
	}

	/// Result of the most recent completed write.
	pub fn last_outcome(&self) -> Option<SubmitOutcome> {
		self.last
	}
}

fn is_plausible_email(email: &str) -> bool {
	match email.split_once('@') {
		Some((local, domain)) => {
			!local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
		}
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_one_question_per_complexity_field() {
		let desc = registry::get("graph").unwrap();
		let quiz = Quiz::for_descriptor(desc);
		assert_eq!(quiz.structure_id, "graph");
		assert_eq!(quiz.questions.len(), 4);

		let search = &quiz.questions[1];
		assert_eq!(search.prompt, "What is the search complexity of a Graph?");
		assert_eq!(search.options[search.correct], "O(V + E)");
		assert_eq!(quiz.questions[0].options[quiz.questions[0].correct], "N/A");
	}

	#[test]
	fn prompt_uses_indefinite_article() {
		let array = Quiz::for_descriptor(registry::get("array").unwrap());
		assert_eq!(
			array.questions[0].prompt,
			"What is the access complexity of an Array?"
		);
		let list = Quiz::for_descriptor(registry::get("linked-list").unwrap());
		assert_eq!(
			list.questions[3].prompt,
			"What is the deletion complexity of a Linked List?"
		);
	}

	#[test]
	fn options_are_distinct_and_sorted() {
		let quiz = Quiz::for_descriptor(registry::get("array").unwrap());
		let options = &quiz.questions[0].options;
		assert!(options.windows(2).all(|pair| pair[0] < pair[1]));
		assert!(options.contains(&"O(log n)"));
	}

	#[test]
	fn scores_only_correct_answers() {
		let quiz = Quiz::for_descriptor(registry::get("tree").unwrap());
		let right: Vec<_> = quiz.questions.iter().map(|q| Some(q.correct)).collect();
		assert_eq!(quiz.score(&right), 4);

		let wrong = (quiz.questions[0].correct + 1) % quiz.questions[0].options.len();
		let mixed = [Some(wrong), None, right[2], right[3]];
		assert_eq!(quiz.score(&mixed), 2);
		assert_eq!(quiz.score(&[]), 0);
	}

	#[test]
	fn second_submission_is_refused_while_in_flight() {
		let mut submission = QuizSubmission::default();
		let result = submission.begin("stack", 3, " ada@example.com ").unwrap();
		assert_eq!(result.user_email, "ada@example.com");
		assert!(submission.in_flight());
		assert_eq!(
			submission.begin("stack", 3, "ada@example.com"),
			Err(SubmitRefusal::InFlight)
		);

		submission.finish(false);
		assert_eq!(submission.last_outcome(), Some(SubmitOutcome::NotSaved));
		assert!(submission.begin("stack", 4, "ada@example.com").is_ok());
		submission.finish(true);
		assert_eq!(submission.last_outcome(), Some(SubmitOutcome::Saved));
	}

	#[test]
	fn rejects_malformed_email_without_claiming_slot() {
		let mut submission = QuizSubmission::default();
		for email in ["", "   ", "nobody", "@example.com", "ada@", "a da@example.com"] {
			assert_eq!(
				submission.begin("queue", 1, email),
				Err(SubmitRefusal::InvalidEmail),
				"{email:?}"
			);
		}
		assert!(!submission.in_flight());
	}

	#[test]
	fn result_serializes_with_wire_field_names() {
		let result = QuizResult {
			structure_id: "queue".into(),
			score: 2,
			user_email: "ada@example.com".into(),
		};
		let json = serde_json::to_value(&result).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"structure_id": "queue",
				"score": 2,
				"user_email": "ada@example.com",
			})
		);
	}
}
