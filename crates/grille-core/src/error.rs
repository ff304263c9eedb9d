//! Error types for saved-view management

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while managing saved views
#[derive(Debug, Error)]
pub enum ViewError {
	/// A view name was empty or whitespace-only after trimming
	#[error("view name must not be empty")]
	InvalidViewName,

	/// Attempted to delete a protected view
	#[error("view {id} is protected and cannot be deleted")]
	ProtectedView {
		/// Identifier of the protected view
		id: Uuid,
	},

	/// Attempted to register a second default view
	#[error("a default view already exists; view {id} cannot also be the default")]
	DuplicateDefault {
		/// Identifier of the rejected view
		id: Uuid,
	},

	/// A lookup referenced a list domain that was never registered
	#[error("unknown list domain: {domain}")]
	UnknownDomain {
		/// The domain key that failed to resolve
		domain: String,
	},

	/// A persistence backend failed to load or save view data
	#[error("view store error: {0}")]
	Store(String),
}

/// Result type alias for saved-view operations
pub type Result<T> = std::result::Result<T, ViewError>;
