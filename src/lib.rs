//! # Grille
//!
//! Saved-view configuration and filtering engine for data-grid list screens.
//!
//! Grille is the one piece of logic that recurs across every list screen of
//! an administration portal: choosing which columns are visible, narrowing
//! the rows with field filters and a free-text search, and persisting named
//! combinations of both as reusable views. Screens stay thin; they hand
//! grille their records and render what comes back.
//!
//! ## Core Principles
//!
//! - **One engine, many screens**: every domain instantiates the same
//!   registry/controller pair instead of reimplementing the logic inline
//! - **Pure evaluation**: filtering and search are functions of their
//!   inputs, with records kept opaque behind a projection seam
//! - **Snapshots, not live objects**: a saved view is immutable; editing
//!   means saving anew or replacing wholesale by id
//! - **Self-healing state**: a dangling active-view reference is repaired
//!   on read, never surfaced as a lookup failure
//!
//! ## Quick Example
//!
//! ```rust
//! use grille::prelude::*;
//! use serde_json::json;
//!
//! // Describe the domain once.
//! let arena: ViewArena<JsonRecord> = ViewArena::new("admin-7");
//! let students = arena.register(DomainProfile::json(
//! 	"students",
//! 	"Students",
//! 	vec![
//! 		ViewColumn::new("name", "Name"),
//! 		ViewColumn::new("className", "Class"),
//! 		ViewColumn::new("status", "Status"),
//! 	],
//! 	vec!["name".to_string()],
//! ));
//!
//! // Configure the working state and save it as a named view.
//! let mut students = students.write();
//! students.toggle_column("status");
//! students.set_filters(vec![ViewFilter::new("className", FilterOperator::Equals, "3B")]);
//! let saved = students.save_view("My 3B roster", None)?;
//! assert_eq!(students.active_view_id(), Some(saved.id));
//!
//! // Evaluate records against the working state on every render.
//! let records: Vec<JsonRecord> = vec![
//! 	JsonRecord::from([
//! 		("name".to_string(), json!("Erik Nilsson")),
//! 		("className".to_string(), json!("3B")),
//! 	]),
//! 	JsonRecord::from([
//! 		("name".to_string(), json!("Anna Svensson")),
//! 		("className".to_string(), json!("3A")),
//! 	]),
//! ];
//! let hits = students.evaluate(&records);
//! assert_eq!(hits.len(), 1);
//! # Ok::<(), grille::ViewError>(())
//! ```

// Re-export the core data model
pub use grille_core::clock::{Clock, FixedClock, SystemClock};
pub use grille_core::column::{
	reconcile_columns, set_visible, toggle_visible, visible_columns, ViewColumn,
};
pub use grille_core::error::{Result, ViewError};
pub use grille_core::filter::{FilterOperator, ViewFilter};
pub use grille_core::record::{FieldAccessor, JsonAccessor, JsonRecord};
pub use grille_core::view::SavedView;

// Re-export the evaluation pipeline
pub use grille_engine::{evaluate, filter_matches, matches_all, search_matches};

// Re-export the stateful layer
pub use grille_views::{
	CurrentViewState, DomainProfile, DomainViews, JsonFileStore, MemoryStore, ViewArena,
	ViewController, ViewRegistry, ViewStore,
};

/// Commonly used types, importable in one line
pub mod prelude {
	pub use grille_core::clock::{Clock, FixedClock, SystemClock};
	pub use grille_core::column::{visible_columns, ViewColumn};
	pub use grille_core::error::{Result, ViewError};
	pub use grille_core::filter::{FilterOperator, ViewFilter};
	pub use grille_core::record::{FieldAccessor, JsonAccessor, JsonRecord};
	pub use grille_core::view::SavedView;
	pub use grille_engine::evaluate;
	pub use grille_views::{
		CurrentViewState, DomainProfile, DomainViews, JsonFileStore, MemoryStore, ViewArena,
		ViewController, ViewRegistry, ViewStore,
	};
}
