//! Column descriptors for list screens
//!
//! A list domain (students, classes, invoices, ...) declares its full column
//! set once; per-user visibility is layered on top without ever changing the
//! declared order or dropping a key.

use serde::{Deserialize, Serialize};

/// A single column of a list screen
///
/// # Examples
///
/// ```rust
/// use grille_core::column::ViewColumn;
///
/// let column = ViewColumn::new("lastName", "Last name");
/// assert_eq!(column.key, "lastName");
/// assert!(column.visible);
///
/// let hidden = ViewColumn::new("ssn", "SSN").hidden();
/// assert!(!hidden.visible);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewColumn {
	/// Stable field key the column projects
	pub key: String,
	/// Human-readable header label
	pub label: String,
	/// Whether the column is currently shown
	pub visible: bool,
}

impl ViewColumn {
	/// Creates a visible column
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			visible: true,
		}
	}

	/// Marks the column as hidden, consuming and returning it
	pub fn hidden(mut self) -> Self {
		self.visible = false;
		self
	}
}

/// Returns a copy of `columns` with the visibility of `key` set to `visible`
///
/// Column order is preserved. A `key` that does not occur in `columns` leaves
/// the result identical to the input; unknown keys are not an error.
pub fn set_visible(columns: &[ViewColumn], key: &str, visible: bool) -> Vec<ViewColumn> {
	columns
		.iter()
		.map(|column| {
			let mut column = column.clone();
			if column.key == key {
				column.visible = visible;
			}
			column
		})
		.collect()
}

/// Returns a copy of `columns` with the visibility of `key` flipped
pub fn toggle_visible(columns: &[ViewColumn], key: &str) -> Vec<ViewColumn> {
	columns
		.iter()
		.map(|column| {
			let mut column = column.clone();
			if column.key == key {
				column.visible = !column.visible;
			}
			column
		})
		.collect()
}

/// Returns the visible columns in declaration order
pub fn visible_columns(columns: &[ViewColumn]) -> Vec<&ViewColumn> {
	columns.iter().filter(|column| column.visible).collect()
}

/// Reconciles a persisted column snapshot against the current domain schema
///
/// The schema is authoritative for the key set, ordering and labels; the
/// snapshot only contributes visibility for keys it still knows about.
/// Columns added to the schema after the snapshot was taken keep their
/// schema default, and snapshot columns whose key has since been removed
/// are dropped.
///
/// # Examples
///
/// ```rust
/// use grille_core::column::{reconcile_columns, ViewColumn};
///
/// let schema = vec![
/// 	ViewColumn::new("name", "Name"),
/// 	ViewColumn::new("email", "Email"),
/// ];
/// let snapshot = vec![
/// 	ViewColumn::new("name", "Old label").hidden(),
/// 	ViewColumn::new("deletedField", "Gone"),
/// ];
///
/// let merged = reconcile_columns(&schema, &snapshot);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].label, "Name");
/// assert!(!merged[0].visible);
/// assert!(merged[1].visible);
/// ```
pub fn reconcile_columns(schema: &[ViewColumn], snapshot: &[ViewColumn]) -> Vec<ViewColumn> {
	schema
		.iter()
		.map(|column| {
			let mut column = column.clone();
			if let Some(saved) = snapshot.iter().find(|saved| saved.key == column.key) {
				column.visible = saved.visible;
			}
			column
		})
		.collect()
}
