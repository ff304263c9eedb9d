//! One list domain's complete view machinery
//!
//! A [`DomainViews`] couples the per-domain [`ViewRegistry`] with the
//! session's [`ViewController`] and the domain profile (schema, searchable
//! fields, record accessor), so every list screen drives the same engine
//! through the same surface instead of keeping its own copy of the logic.

use std::sync::Arc;

use grille_core::clock::Clock;
use grille_core::column::ViewColumn;
use grille_core::error::Result;
use grille_core::filter::ViewFilter;
use grille_core::record::{FieldAccessor, JsonAccessor, JsonRecord};
use grille_core::view::SavedView;
use uuid::Uuid;

use crate::controller::ViewController;
use crate::registry::ViewRegistry;

/// Owner recorded on seeded system views
const SYSTEM_ACTOR: &str = "system";

/// Static description of a list domain
pub struct DomainProfile<R> {
	/// Stable domain key ("students", "invoices", ...)
	pub key: String,
	/// Human-readable domain label used to name the seeded default view
	pub label: String,
	/// Full column schema in render order
	pub schema: Vec<ViewColumn>,
	/// Fields the free-text search stage reads
	pub searchable_fields: Vec<String>,
	/// Projection from the domain's record type to comparable text
	pub accessor: Arc<dyn FieldAccessor<R>>,
}

impl<R> DomainProfile<R> {
	/// Creates a profile with an explicit accessor
	pub fn new(
		key: impl Into<String>,
		label: impl Into<String>,
		schema: Vec<ViewColumn>,
		searchable_fields: Vec<String>,
		accessor: Arc<dyn FieldAccessor<R>>,
	) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			schema,
			searchable_fields,
			accessor,
		}
	}
}

impl DomainProfile<JsonRecord> {
	/// Creates a profile over map-shaped records with the standard accessor
	pub fn json(
		key: impl Into<String>,
		label: impl Into<String>,
		schema: Vec<ViewColumn>,
		searchable_fields: Vec<String>,
	) -> Self {
		Self::new(key, label, schema, searchable_fields, Arc::new(JsonAccessor))
	}
}

/// The {registry, controller} pair of one domain
///
/// Construction seeds the registry with the domain's protected default view
/// and applies it, so a freshly opened screen already shows the default
/// configuration.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use grille_core::clock::SystemClock;
/// use grille_core::column::ViewColumn;
/// use grille_core::filter::{FilterOperator, ViewFilter};
/// use grille_core::record::JsonRecord;
/// use grille_views::domain::{DomainProfile, DomainViews};
/// use serde_json::json;
///
/// let profile = DomainProfile::json(
/// 	"students",
/// 	"Students",
/// 	vec![
/// 		ViewColumn::new("name", "Name"),
/// 		ViewColumn::new("className", "Class"),
/// 	],
/// 	vec!["name".to_string()],
/// );
/// let mut domain = DomainViews::new(profile, Arc::new(SystemClock), "admin-7");
///
/// let records: Vec<JsonRecord> = vec![
/// 	JsonRecord::from([
/// 		("name".to_string(), json!("Erik Nilsson")),
/// 		("className".to_string(), json!("3B")),
/// 	]),
/// 	JsonRecord::from([
/// 		("name".to_string(), json!("Anna Svensson")),
/// 		("className".to_string(), json!("3A")),
/// 	]),
/// ];
///
/// domain.set_search_term("erik");
/// domain.set_filters(vec![ViewFilter::new("className", FilterOperator::Equals, "3B")]);
///
/// let hits = domain.evaluate(&records);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0]["name"], json!("Erik Nilsson"));
/// ```
pub struct DomainViews<R> {
	profile: DomainProfile<R>,
	registry: ViewRegistry,
	controller: ViewController,
}

impl<R> DomainViews<R> {
	/// Creates a freshly seeded domain and applies its default view
	pub fn new(profile: DomainProfile<R>, clock: Arc<dyn Clock>, actor: impl Into<String>) -> Self {
		let registry =
			ViewRegistry::seeded(&profile.label, &profile.schema, clock.as_ref(), SYSTEM_ACTOR);
		let mut controller = ViewController::new(profile.schema.clone(), clock, actor);
		controller.load_view(registry.default_view());
		Self {
			profile,
			registry,
			controller,
		}
	}

	/// Rebuilds a domain from stored snapshots and applies the default view
	///
	/// Stored flag inconsistencies are healed by
	/// [`ViewRegistry::from_views`].
	pub fn from_stored(
		profile: DomainProfile<R>,
		clock: Arc<dyn Clock>,
		actor: impl Into<String>,
		views: Vec<SavedView>,
	) -> Self {
		let registry = ViewRegistry::from_views(
			&profile.label,
			&profile.schema,
			clock.as_ref(),
			SYSTEM_ACTOR,
			views,
		);
		let mut controller = ViewController::new(profile.schema.clone(), clock, actor);
		controller.load_view(registry.default_view());
		Self {
			profile,
			registry,
			controller,
		}
	}

	/// The domain key
	pub fn key(&self) -> &str {
		&self.profile.key
	}

	/// The domain label
	pub fn label(&self) -> &str {
		&self.profile.label
	}

	/// The domain's full column schema
	pub fn schema(&self) -> &[ViewColumn] {
		&self.profile.schema
	}

	/// Fields the search stage consults
	pub fn searchable_fields(&self) -> &[String] {
		&self.profile.searchable_fields
	}

	/// Read access to the domain's registry
	pub fn registry(&self) -> &ViewRegistry {
		&self.registry
	}

	/// Read access to the session controller
	pub fn controller(&self) -> &ViewController {
		&self.controller
	}

	/// Every saved view in picker order
	pub fn views(&self) -> &[SavedView] {
		self.registry.list()
	}

	/// Flips the visibility of one working column
	pub fn toggle_column(&mut self, key: &str) {
		self.controller.toggle_column(key);
	}

	/// Sets the visibility of one working column explicitly
	pub fn set_column_visible(&mut self, key: &str, visible: bool) {
		self.controller.set_column_visible(key, visible);
	}

	/// Replaces the working filter set wholesale
	pub fn set_filters(&mut self, filters: Vec<ViewFilter>) {
		self.controller.set_filters(filters);
	}

	/// Sets the free-text search term
	pub fn set_search_term(&mut self, term: impl Into<String>) {
		self.controller.set_search_term(term);
	}

	/// The working columns currently visible, in render order
	pub fn visible_columns(&self) -> Vec<&ViewColumn> {
		self.controller.visible_columns()
	}

	/// Loads a saved view into the working state
	///
	/// Returns `false` when the id is not in the registry; the working
	/// state is untouched in that case.
	pub fn load_view(&mut self, id: Uuid) -> bool {
		match self.registry.get_by_id(id) {
			Some(view) => {
				self.controller.load_view(view);
				true
			}
			None => false,
		}
	}

	/// Saves the working state as a new named view and activates it
	pub fn save_view(
		&mut self,
		name: impl Into<String>,
		description: Option<String>,
	) -> Result<SavedView> {
		self.controller.save_view(&mut self.registry, name, description)
	}

	/// Replaces a stored view wholesale by id
	pub fn replace_view(&mut self, view: SavedView) -> Result<()> {
		self.registry.replace(view)
	}

	/// Deletes a view, falling back per the controller rules when active
	pub fn delete_view(&mut self, id: Uuid) -> Result<()> {
		self.controller.delete_view(&mut self.registry, id)
	}

	/// The active view id, healed against the registry before returning
	pub fn active_view_id(&mut self) -> Option<Uuid> {
		self.controller.ensure_active(&self.registry);
		self.controller.active_view_id()
	}

	/// The active view itself, healed the same way
	pub fn active_view(&mut self) -> Option<&SavedView> {
		self.controller.ensure_active(&self.registry);
		self.controller
			.active_view_id()
			.and_then(|id| self.registry.get_by_id(id))
	}

	/// Runs the evaluation pipeline over a record batch
	///
	/// Uses the current search term and working filters together with the
	/// profile's searchable fields and accessor. Matching records come back
	/// as references in input order.
	pub fn evaluate<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
		grille_engine::evaluate(
			records,
			self.controller.search_term(),
			self.controller.working_filters(),
			&self.profile.searchable_fields,
			self.profile.accessor.as_ref(),
		)
	}

	/// Discards the working state for the bare schema
	pub fn reset_to_schema(&mut self) {
		self.controller.reset_to_schema();
	}
}
