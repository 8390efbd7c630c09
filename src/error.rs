//! Error types shared by the registry and the persistence client.

use thiserror::Error;

/// Lookup failure in the structure catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// No descriptor carries this id.
	#[error("no data structure registered under id `{0}`")]
	NotFound(String),
}

/// Failure talking to the persistence backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
	/// The request never produced a usable response.
	#[error("backend unreachable: {0}")]
	Connectivity(String),
	/// The backend refused or failed a write.
	#[error("write rejected: {0}")]
	WriteFailure(String),
	/// The response body did not have the expected shape.
	#[error("unexpected response body: {0}")]
	Decode(String),
}

impl From<serde_json::Error> for PersistenceError {
	fn from(err: serde_json::Error) -> Self {
		PersistenceError::Decode(err.to_string())
	}
}
