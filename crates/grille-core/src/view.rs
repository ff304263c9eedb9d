//! Saved view snapshots
//!
//! A [`SavedView`] freezes the column visibility and filter set of a list
//! screen at the moment a user saved it. Snapshots are immutable; loading
//! one never mutates it, and saving again produces a new snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ViewColumn;
use crate::filter::ViewFilter;

/// A named, persistable snapshot of a list configuration
///
/// Serializes with camelCase keys so stored documents match the casing the
/// surrounding portal uses on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedView {
	/// Stable identifier, assigned at creation
	pub id: Uuid,
	/// Display name chosen by the user
	pub name: String,
	/// Optional free-form description
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub description: Option<String>,
	/// Column set as it was when the view was saved
	pub columns: Vec<ViewColumn>,
	/// Filter conditions as they were when the view was saved
	pub filters: Vec<ViewFilter>,
	/// Whether this view is applied when the screen opens
	pub is_default: bool,
	/// Whether this view is seeded by the system and protected from deletion
	pub is_system_view: bool,
	/// Identifier of the user who created the view
	pub created_by: String,
	/// Creation timestamp
	pub created_at: DateTime<Utc>,
	/// Last modification timestamp
	pub updated_at: DateTime<Utc>,
}

impl SavedView {
	/// Creates a fresh user-owned snapshot
	///
	/// The view receives a new identifier, is neither default nor
	/// system-protected, and carries `now` as both timestamps.
	pub fn snapshot(
		name: impl Into<String>,
		description: Option<String>,
		columns: Vec<ViewColumn>,
		filters: Vec<ViewFilter>,
		created_by: impl Into<String>,
		now: DateTime<Utc>,
	) -> Self {
		Self {
			id: Uuid::new_v4(),
			name: name.into(),
			description,
			columns,
			filters,
			is_default: false,
			is_system_view: false,
			created_by: created_by.into(),
			created_at: now,
			updated_at: now,
		}
	}
}
