//! Transient working state of one list screen
//!
//! The controller mediates between the UI and the registry: column toggles,
//! filter edits and the search term mutate the working state only, and
//! save/load/delete route through here so the active-view reference stays
//! coherent. Nothing in this module persists anything.

use std::sync::Arc;

use grille_core::clock::Clock;
use grille_core::column::{
	reconcile_columns, set_visible, toggle_visible, visible_columns, ViewColumn,
};
use grille_core::error::{Result, ViewError};
use grille_core::filter::ViewFilter;
use grille_core::view::SavedView;
use uuid::Uuid;

use crate::registry::ViewRegistry;

/// The working, possibly unsaved configuration of a list screen
///
/// Transient by design: it lives for a session and is never persisted.
/// There is deliberately no dirty flag distinguishing an edited state from
/// a freshly loaded view.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentViewState {
	/// The loaded view, if the working state came from one
	pub active_view_id: Option<Uuid>,
	/// Working copy of the domain's columns; only visibility ever changes
	pub working_columns: Vec<ViewColumn>,
	/// Working filter conditions
	pub working_filters: Vec<ViewFilter>,
	/// Current free-text search term
	pub search_term: String,
}

/// Stateful mediator holding one domain's [`CurrentViewState`]
pub struct ViewController {
	schema: Vec<ViewColumn>,
	state: CurrentViewState,
	clock: Arc<dyn Clock>,
	actor: String,
}

impl ViewController {
	/// Creates a controller whose working state mirrors the domain schema
	pub fn new(schema: Vec<ViewColumn>, clock: Arc<dyn Clock>, actor: impl Into<String>) -> Self {
		let state = CurrentViewState {
			active_view_id: None,
			working_columns: schema.clone(),
			working_filters: Vec::new(),
			search_term: String::new(),
		};
		Self {
			schema,
			state,
			clock,
			actor: actor.into(),
		}
	}

	/// The full working state
	pub fn state(&self) -> &CurrentViewState {
		&self.state
	}

	/// The loaded view id, without any liveness check
	///
	/// Use [`ensure_active`](Self::ensure_active) first when the registry
	/// may have changed underneath the controller.
	pub fn active_view_id(&self) -> Option<Uuid> {
		self.state.active_view_id
	}

	/// The working columns, full schema key set in declaration order
	pub fn working_columns(&self) -> &[ViewColumn] {
		&self.state.working_columns
	}

	/// The working columns currently visible, in declaration order
	pub fn visible_columns(&self) -> Vec<&ViewColumn> {
		visible_columns(&self.state.working_columns)
	}

	/// The working filter conditions
	pub fn working_filters(&self) -> &[ViewFilter] {
		&self.state.working_filters
	}

	/// The current search term
	pub fn search_term(&self) -> &str {
		&self.state.search_term
	}

	/// Flips the visibility of one working column
	///
	/// Unknown keys are a no-op. The active-view reference and the registry
	/// are never touched; toggling is a working-state edit like any other.
	pub fn toggle_column(&mut self, key: &str) {
		self.state.working_columns = toggle_visible(&self.state.working_columns, key);
	}

	/// Sets the visibility of one working column explicitly
	pub fn set_column_visible(&mut self, key: &str, visible: bool) {
		self.state.working_columns = set_visible(&self.state.working_columns, key, visible);
	}

	/// Replaces the working filter set wholesale
	pub fn set_filters(&mut self, filters: Vec<ViewFilter>) {
		self.state.working_filters = filters;
	}

	/// Sets the free-text search term
	pub fn set_search_term(&mut self, term: impl Into<String>) {
		self.state.search_term = term.into();
	}

	/// Copies a saved snapshot into the working state
	///
	/// The snapshot's columns are reconciled against the domain schema, so
	/// a view saved under an older schema generation still yields a working
	/// column set with exactly the schema's keys. The copy is deep; later
	/// working-state edits never reach back into the snapshot. The search
	/// term is not part of a snapshot and stays as it was.
	pub fn load_view(&mut self, view: &SavedView) {
		self.state.working_columns = reconcile_columns(&self.schema, &view.columns);
		self.state.working_filters = view.filters.clone();
		self.state.active_view_id = Some(view.id);
	}

	/// Freezes the working state into a new named snapshot
	///
	/// The name is trimmed and must be non-empty; validation happens before
	/// the registry is touched, so a rejected save leaves everything as it
	/// was. The snapshot gets a fresh id and timestamps, never carries the
	/// default or system flag, and becomes the active view once appended.
	pub fn save_view(
		&mut self,
		registry: &mut ViewRegistry,
		name: impl Into<String>,
		description: Option<String>,
	) -> Result<SavedView> {
		let name = name.into();
		let name = name.trim();
		if name.is_empty() {
			return Err(ViewError::InvalidViewName);
		}

		let view = SavedView::snapshot(
			name,
			description,
			self.state.working_columns.clone(),
			self.state.working_filters.clone(),
			self.actor.clone(),
			self.clock.now(),
		);
		registry.add(view.clone())?;
		self.state.active_view_id = Some(view.id);
		tracing::debug!(
			view_id = %view.id,
			view_name = %view.name,
			"saved working state as a view"
		);
		Ok(view)
	}

	/// Deletes a view, re-selecting a fallback when it was the active one
	///
	/// Protected-view errors from the registry propagate. Deleting an id
	/// the registry does not know is a no-op, and deleting a non-active
	/// view leaves the working state and active reference untouched. When
	/// the active view goes, the fallback is computed strictly from the
	/// post-removal registry: the flagged default if present, else the
	/// first remaining entry, else a bare schema reset.
	pub fn delete_view(&mut self, registry: &mut ViewRegistry, id: Uuid) -> Result<()> {
		let removed = registry.remove_by_id(id)?;
		if removed.is_none() {
			return Ok(());
		}
		if self.state.active_view_id == Some(id) {
			tracing::debug!(view_id = %id, "deleted the active view, selecting a fallback");
			self.select_fallback(registry);
		}
		Ok(())
	}

	/// Repairs a dangling active-view reference
	///
	/// If the active id no longer resolves in the registry, the same
	/// fallback rule as for deletions is applied. A dangling reference is
	/// an internal inconsistency, so it is healed quietly instead of being
	/// surfaced as a lookup failure.
	pub fn ensure_active(&mut self, registry: &ViewRegistry) {
		if let Some(id) = self.state.active_view_id {
			if !registry.contains(id) {
				tracing::warn!(
					view_id = %id,
					"active view is gone from the registry, selecting a fallback"
				);
				self.select_fallback(registry);
			}
		}
	}

	/// Discards the working state for the bare schema
	///
	/// Every column becomes visible, filters and search term are cleared,
	/// and no view is active.
	pub fn reset_to_schema(&mut self) {
		self.state.working_columns = self
			.schema
			.iter()
			.map(|column| {
				let mut column = column.clone();
				column.visible = true;
				column
			})
			.collect();
		self.state.working_filters.clear();
		self.state.search_term.clear();
		self.state.active_view_id = None;
	}

	fn select_fallback(&mut self, registry: &ViewRegistry) {
		let fallback = registry
			.list()
			.iter()
			.find(|view| view.is_default)
			.or_else(|| registry.list().first());
		match fallback {
			Some(view) => self.load_view(view),
			None => self.reset_to_schema(),
		}
	}
}
