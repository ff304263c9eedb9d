//! # grille-core
//!
//! Core data model for the grille saved-view engine.
//!
//! A list screen is described by its column schema ([`column::ViewColumn`]),
//! narrowed by filter conditions ([`filter::ViewFilter`]) and frozen into
//! named snapshots ([`view::SavedView`]). Records stay opaque behind the
//! [`record::FieldAccessor`] projection seam, and timestamps come from an
//! injected [`clock::Clock`].
//!
//! ## Quick Start
//!
//! ```rust
//! use grille_core::column::{visible_columns, ViewColumn};
//! use grille_core::filter::{FilterOperator, ViewFilter};
//!
//! let columns = vec![
//! 	ViewColumn::new("lastName", "Last name"),
//! 	ViewColumn::new("personalNumber", "Personal number").hidden(),
//! ];
//! let filters = vec![ViewFilter::new("className", FilterOperator::Equals, "3B")];
//!
//! assert_eq!(visible_columns(&columns).len(), 1);
//! assert_eq!(filters[0].value, "3B");
//! ```

pub mod clock;
pub mod column;
pub mod error;
pub mod filter;
pub mod record;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use column::{reconcile_columns, set_visible, toggle_visible, visible_columns, ViewColumn};
pub use error::{Result, ViewError};
pub use filter::{FilterOperator, ViewFilter};
pub use record::{FieldAccessor, JsonAccessor, JsonRecord};
pub use view::SavedView;
