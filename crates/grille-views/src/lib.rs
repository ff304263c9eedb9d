//! # grille-views
//!
//! Stateful saved-view layer for grille.
//!
//! [`registry::ViewRegistry`] keeps a domain's saved snapshots with one
//! protected default, [`controller::ViewController`] holds the session's
//! working state, and [`domain::DomainViews`] couples the two with the
//! domain profile so screens drive a single surface. An [`arena::ViewArena`]
//! hands out those pairs per domain key, and [`store::ViewStore`] backends
//! persist snapshot collections between sessions.

pub mod arena;
pub mod controller;
pub mod domain;
pub mod registry;
pub mod store;

pub use arena::ViewArena;
pub use controller::{CurrentViewState, ViewController};
pub use domain::{DomainProfile, DomainViews};
pub use registry::ViewRegistry;
pub use store::{JsonFileStore, MemoryStore, ViewStore};
