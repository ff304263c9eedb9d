//! Per-domain registry of saved views
//!
//! Every domain owns exactly one protected default view: it is seeded at
//! registry construction, flagged `is_default` and `is_system_view`, and can
//! be neither deleted nor demoted. All other entries are ordinary user
//! snapshots. The registry stores the protected default at the front of the
//! collection, so a registry is never empty and always knows its default.

use grille_core::clock::Clock;
use grille_core::column::ViewColumn;
use grille_core::error::{Result, ViewError};
use grille_core::view::SavedView;
use uuid::Uuid;

/// Per-domain collection of [`SavedView`] snapshots
///
/// Entries are kept in insertion order, which is also the order a view
/// picker presents them in. Snapshots are never patched in place; the only
/// sanctioned edit is a full [`replace`](ViewRegistry::replace) by id.
///
/// # Examples
///
/// ```rust
/// use grille_core::clock::SystemClock;
/// use grille_core::column::ViewColumn;
/// use grille_views::registry::ViewRegistry;
///
/// let schema = vec![ViewColumn::new("lastName", "Last name")];
/// let registry = ViewRegistry::seeded("Students", &schema, &SystemClock, "system");
///
/// assert_eq!(registry.list().len(), 1);
/// assert!(registry.default_view().is_system_view);
/// ```
#[derive(Debug, Clone)]
pub struct ViewRegistry {
	views: Vec<SavedView>,
}

impl ViewRegistry {
	/// Creates a registry holding only the domain's seed view
	///
	/// The seed carries every schema column with its declared visibility,
	/// no filters, and both protection flags set.
	pub fn seeded(
		domain_label: &str,
		schema: &[ViewColumn],
		clock: &dyn Clock,
		created_by: &str,
	) -> Self {
		Self {
			views: vec![seed_view(domain_label, schema, clock, created_by)],
		}
	}

	/// Rebuilds a registry from stored snapshots, healing inconsistencies
	///
	/// The first entry flagged both default and system is adopted as the
	/// protected default and moved to the front. Any further default flags
	/// are demoted, and when no stored entry qualifies at all a fresh seed
	/// is created. Corrupt flag data is repaired rather than rejected, so a
	/// damaged store never prevents a domain from opening.
	pub fn from_views(
		domain_label: &str,
		schema: &[ViewColumn],
		clock: &dyn Clock,
		created_by: &str,
		views: Vec<SavedView>,
	) -> Self {
		let mut default: Option<SavedView> = None;
		let mut extras = Vec::with_capacity(views.len());

		for mut view in views {
			if default.is_none() && view.is_default && view.is_system_view {
				default = Some(view);
				continue;
			}
			if view.is_default {
				tracing::warn!(
					view_id = %view.id,
					view_name = %view.name,
					"demoting extra default flag on stored view"
				);
				view.is_default = false;
			}
			extras.push(view);
		}

		let default = match default {
			Some(view) => view,
			None => {
				tracing::warn!(
					domain = %domain_label,
					"stored views carry no default, seeding a fresh one"
				);
				seed_view(domain_label, schema, clock, created_by)
			}
		};

		let mut healed = Vec::with_capacity(extras.len() + 1);
		healed.push(default);
		healed.extend(extras);
		Self { views: healed }
	}

	/// Returns every view in picker order, the protected default first
	pub fn list(&self) -> &[SavedView] {
		&self.views
	}

	/// Looks a view up by id
	pub fn get_by_id(&self, id: Uuid) -> Option<&SavedView> {
		self.views.iter().find(|view| view.id == id)
	}

	/// Returns whether a view with this id exists
	pub fn contains(&self, id: Uuid) -> bool {
		self.get_by_id(id).is_some()
	}

	/// Identifier of the protected default view
	pub fn default_id(&self) -> Uuid {
		self.views[0].id
	}

	/// The protected default view
	pub fn default_view(&self) -> &SavedView {
		&self.views[0]
	}

	/// Appends a user snapshot
	///
	/// The registry already owns its one default, so a view arriving with
	/// the default flag set is rejected with [`ViewError::DuplicateDefault`].
	/// Existing entries are never touched.
	pub fn add(&mut self, view: SavedView) -> Result<()> {
		if view.is_default {
			return Err(ViewError::DuplicateDefault { id: view.id });
		}
		self.views.push(view);
		Ok(())
	}

	/// Replaces the entry with the same id wholesale
	///
	/// This is the only sanctioned way to "edit" a snapshot. Replacing the
	/// protected default must keep both protection flags, and no other
	/// entry may acquire the default flag. An id no entry carries leaves
	/// the registry unchanged.
	pub fn replace(&mut self, view: SavedView) -> Result<()> {
		if view.id == self.default_id() {
			if !view.is_default || !view.is_system_view {
				return Err(ViewError::ProtectedView { id: view.id });
			}
		} else if view.is_default {
			return Err(ViewError::DuplicateDefault { id: view.id });
		}

		if let Some(slot) = self.views.iter_mut().find(|slot| slot.id == view.id) {
			*slot = view;
		}
		Ok(())
	}

	/// Removes the entry with this id and returns it
	///
	/// Removing the protected default fails with
	/// [`ViewError::ProtectedView`]. An unknown id returns `Ok(None)`;
	/// callers asked to delete something that is already gone have nothing
	/// left to do.
	pub fn remove_by_id(&mut self, id: Uuid) -> Result<Option<SavedView>> {
		if id == self.default_id() {
			return Err(ViewError::ProtectedView { id });
		}
		match self.views.iter().position(|view| view.id == id) {
			Some(index) => Ok(Some(self.views.remove(index))),
			None => Ok(None),
		}
	}
}

fn seed_view(
	domain_label: &str,
	schema: &[ViewColumn],
	clock: &dyn Clock,
	created_by: &str,
) -> SavedView {
	let now = clock.now();
	SavedView {
		id: Uuid::new_v4(),
		name: format!("{domain_label} (default)"),
		description: None,
		columns: schema.to_vec(),
		filters: Vec::new(),
		is_default: true,
		is_system_view: true,
		created_by: created_by.to_string(),
		created_at: now,
		updated_at: now,
	}
}
