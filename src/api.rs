//! Client for the persistence backend: catalog reads and quiz result writes.
//!
//! Uses web-sys fetch in the browser. Off wasm every request reports a
//! connectivity error, which callers already treat as a degraded state.

use std::cell::RefCell;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::error::PersistenceError;
use crate::model::quiz::QuizResult;

const STRUCTURES_PATH: &str = "/api/structures";
const QUIZ_RESULTS_PATH: &str = "/api/quiz-results";
const HEALTH_PATH: &str = "/api/health";

/// Reply of the health route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
	/// `"ok"` when the server is up.
	pub status: String,
	/// Human readable detail.
	#[serde(default)]
	pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
	error: String,
}

#[derive(Deserialize)]
struct WriteAck {
	#[serde(default)]
	success: bool,
}

/// The two remote operations the app relies on, plus a liveness probe.
#[allow(async_fn_in_trait)]
pub trait PersistenceFacade {
	/// Every persisted structure record, shape left to the backend.
	async fn fetch_all_structures(&self) -> Result<Vec<Value>, PersistenceError>;

	/// Appends one quiz result. Repeating a call stores a duplicate.
	async fn record_quiz_result(&self, result: &QuizResult) -> Result<(), PersistenceError>;

	/// Asks the backend whether it is serving.
	async fn check_health(&self) -> Result<HealthStatus, PersistenceError>;
}

/// Catalog records, or an empty list when the backend is unavailable.
pub async fn structures_or_empty<F: PersistenceFacade>(facade: &F) -> Vec<Value> {
	match facade.fetch_all_structures().await {
		Ok(records) => {
			debug!("fetched {} structure records", records.len());
			records
		}
		Err(err) => {
			warn!("structure catalog unavailable: {err}");
			Vec::new()
		}
	}
}

/// Sends `result`, reporting whether it was stored.
pub async fn try_record<F: PersistenceFacade>(facade: &F, result: &QuizResult) -> bool {
	match facade.record_quiz_result(result).await {
		Ok(()) => true,
		Err(err) => {
			warn!("quiz result for {} not saved: {err}", result.structure_id);
			false
		}
	}
}

/// Talks to the backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFacade {
	base_url: String,
}

impl HttpFacade {
	/// Client rooted at `base_url` (empty for same origin).
	pub fn new(base_url: &str) -> Self {
		Self {
			base_url: base_url.trim_end_matches('/').to_owned(),
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	#[cfg(target_arch = "wasm32")]
	async fn send(
		&self,
		method: &str,
		path: &str,
		body: Option<String>,
	) -> Result<(u16, String), PersistenceError> {
		use wasm_bindgen::{JsCast, JsValue};
		use wasm_bindgen_futures::JsFuture;
		use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

		fn connectivity(err: JsValue) -> PersistenceError {
			PersistenceError::Connectivity(format!("{err:?}"))
		}

		let url = self.url(path);
		let opts = RequestInit::new();
		opts.set_method(method);
		opts.set_mode(RequestMode::Cors);
		if let Some(body) = body {
			let headers = Headers::new().map_err(connectivity)?;
			headers
				.set("Content-Type", "application/json")
				.map_err(connectivity)?;
			opts.set_headers(&headers);
			opts.set_body(&JsValue::from_str(&body));
		}

		let request = Request::new_with_str_and_init(&url, &opts).map_err(connectivity)?;
		let window = web_sys::window()
			.ok_or_else(|| PersistenceError::Connectivity("no window".to_owned()))?;
		let resp: Response = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(connectivity)?
			.dyn_into()
			.map_err(connectivity)?;
		let text = JsFuture::from(resp.text().map_err(connectivity)?)
			.await
			.map_err(connectivity)?;
		Ok((resp.status(), text.as_string().unwrap_or_default()))
	}

	#[cfg(not(target_arch = "wasm32"))]
	async fn send(
		&self,
		method: &str,
		path: &str,
		_body: Option<String>,
	) -> Result<(u16, String), PersistenceError> {
		Err(PersistenceError::Connectivity(format!(
			"{method} {}: fetch is only available in the browser",
			self.url(path)
		)))
	}
}

impl PersistenceFacade for HttpFacade {
	async fn fetch_all_structures(&self) -> Result<Vec<Value>, PersistenceError> {
		let (status, body) = self.send("GET", STRUCTURES_PATH, None).await?;
		decode_structures(status, &body)
	}

	async fn record_quiz_result(&self, result: &QuizResult) -> Result<(), PersistenceError> {
		let payload = serde_json::to_string(result)?;
		let (status, body) = self.send("POST", QUIZ_RESULTS_PATH, Some(payload)).await?;
		decode_write(status, &body)
	}

	async fn check_health(&self) -> Result<HealthStatus, PersistenceError> {
		let (status, body) = self.send("GET", HEALTH_PATH, None).await?;
		if !is_success(status) {
			return Err(PersistenceError::Connectivity(error_reason(status, &body)));
		}
		Ok(serde_json::from_str(&body)?)
	}
}

fn is_success(status: u16) -> bool {
	(200..300).contains(&status)
}

// Prefers the backend's `{ "error": ... }` text over the bare status.
fn error_reason(status: u16, body: &str) -> String {
	serde_json::from_str::<ErrorBody>(body)
		.map(|err| err.error)
		.unwrap_or_else(|_| format!("HTTP {status}"))
}

fn decode_structures(status: u16, body: &str) -> Result<Vec<Value>, PersistenceError> {
	if !is_success(status) {
		return Err(PersistenceError::Connectivity(error_reason(status, body)));
	}
	Ok(serde_json::from_str(body)?)
}

fn decode_write(status: u16, body: &str) -> Result<(), PersistenceError> {
	if !is_success(status) {
		return Err(PersistenceError::WriteFailure(error_reason(status, body)));
	}
	let ack: WriteAck = serde_json::from_str(body)?;
	if ack.success {
		Ok(())
	} else {
		Err(PersistenceError::WriteFailure(
			"backend did not confirm the write".to_owned(),
		))
	}
}

/// Keeps everything in memory; used offline and in tests.
#[derive(Debug, Default)]
pub struct InMemoryFacade {
	structures: Vec<Value>,
	results: RefCell<Vec<QuizResult>>,
	offline: bool,
}

impl InMemoryFacade {
	/// Store preloaded with `structures`.
	pub fn with_structures(structures: Vec<Value>) -> Self {
		Self {
			structures,
			..Self::default()
		}
	}

	/// Store whose every call fails as if the backend were down.
	pub fn offline() -> Self {
		Self {
			offline: true,
			..Self::default()
		}
	}

	/// Results written so far, oldest first.
	pub fn recorded(&self) -> Vec<QuizResult> {
		self.results.borrow().clone()
	}

	fn ensure_online(&self) -> Result<(), PersistenceError> {
		if self.offline {
			Err(PersistenceError::Connectivity("store is offline".to_owned()))
		} else {
			Ok(())
		}
	}
}

impl PersistenceFacade for InMemoryFacade {
	async fn fetch_all_structures(&self) -> Result<Vec<Value>, PersistenceError> {
		self.ensure_online()?;
		Ok(self.structures.clone())
	}

	async fn record_quiz_result(&self, result: &QuizResult) -> Result<(), PersistenceError> {
		self.ensure_online()
			.map_err(|err| PersistenceError::WriteFailure(err.to_string()))?;
		self.results.borrow_mut().push(result.clone());
		Ok(())
	}

	async fn check_health(&self) -> Result<HealthStatus, PersistenceError> {
		self.ensure_online()?;
		Ok(HealthStatus {
			status: "ok".to_owned(),
			message: "in-memory store".to_owned(),
		})
	}
}

#[cfg(test)]
mod tests {
	use pollster::block_on;
	use serde_json::json;

	use super::*;

	fn result(score: u32) -> QuizResult {
		QuizResult {
			structure_id: "stack".to_owned(),
			score,
			user_email: "ada@example.com".to_owned(),
		}
	}

	#[test]
	fn writes_are_appended_not_deduplicated() {
		let store = InMemoryFacade::default();
		assert!(block_on(try_record(&store, &result(3))));
		assert!(block_on(try_record(&store, &result(3))));
		assert_eq!(store.recorded(), vec![result(3), result(3)]);
	}

	#[test]
	fn offline_store_degrades_instead_of_failing() {
		let store = InMemoryFacade::offline();
		assert!(block_on(structures_or_empty(&store)).is_empty());
		assert!(!block_on(try_record(&store, &result(1))));
		assert!(matches!(
			block_on(store.record_quiz_result(&result(1))),
			Err(PersistenceError::WriteFailure(_))
		));
		assert!(block_on(store.check_health()).is_err());
	}

	#[test]
	fn returns_preloaded_structures() {
		let rows = vec![json!({"id": 1, "slug": "array"}), json!({"id": 2, "slug": "tree"})];
		let store = InMemoryFacade::with_structures(rows.clone());
		assert_eq!(block_on(structures_or_empty(&store)), rows);
		assert_eq!(block_on(store.check_health()).unwrap().status, "ok");
	}

	#[test]
	fn decodes_structure_list() {
		let rows = decode_structures(200, r#"[{"id":1},{"id":2}]"#).unwrap();
		assert_eq!(rows.len(), 2);
		assert!(matches!(
			decode_structures(200, "{}"),
			Err(PersistenceError::Decode(_))
		));
	}

	#[test]
	fn surfaces_backend_error_text() {
		let body = r#"{"error":"Database connection failed. Ensure MariaDB is running and configured."}"#;
		assert_eq!(
			decode_structures(500, body),
			Err(PersistenceError::Connectivity(
				"Database connection failed. Ensure MariaDB is running and configured.".to_owned()
			))
		);
		assert_eq!(
			decode_write(500, r#"{"error":"Failed to save result"}"#),
			Err(PersistenceError::WriteFailure("Failed to save result".to_owned()))
		);
		assert_eq!(
			decode_write(502, "<html>bad gateway</html>"),
			Err(PersistenceError::WriteFailure("HTTP 502".to_owned()))
		);
	}

	#[test]
	fn write_requires_confirmation() {
		assert_eq!(decode_write(200, r#"{"success":true}"#), Ok(()));
		assert!(matches!(
			decode_write(200, r#"{"success":false}"#),
			Err(PersistenceError::WriteFailure(_))
		));
	}

	#[test]
	fn http_facade_is_unreachable_off_wasm() {
		let facade = HttpFacade::new("http://localhost:3000/");
		assert_eq!(facade.url(STRUCTURES_PATH), "http://localhost:3000/api/structures");
		assert!(block_on(structures_or_empty(&facade)).is_empty());
		assert!(!block_on(try_record(&facade, &result(2))));
	}
}
