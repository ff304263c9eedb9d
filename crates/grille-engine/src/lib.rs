//! # grille-engine
//!
//! Pure evaluation pipeline for grille list views.
//!
//! Everything in this crate is a function of its arguments: no state, no
//! I/O, no mutation of the record batch. The stateful layer hands the
//! current search term and filter set to [`pipeline::evaluate`] and renders
//! whatever comes back.

pub mod pipeline;
pub mod predicate;

pub use pipeline::evaluate;
pub use predicate::{filter_matches, matches_all, search_matches};
