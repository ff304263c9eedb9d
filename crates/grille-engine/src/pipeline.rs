//! The full evaluation pipeline
//!
//! Search and filters compose conjunctively: a record is kept when it
//! matches the free-text term on the searchable fields AND satisfies every
//! filter condition. The stages are independent predicates, so their
//! composition order affects performance only, never the result.

use grille_core::filter::ViewFilter;
use grille_core::record::FieldAccessor;

use crate::predicate::{matches_all, search_matches};

/// Evaluates a search term and filter set against a batch of records
///
/// Returns references to the matching records in their original order.
/// The input is never mutated and the result borrows from it, so repeated
/// evaluation of the same input yields the same output.
///
/// # Examples
///
/// ```rust
/// use grille_core::filter::{FilterOperator, ViewFilter};
/// use grille_core::record::{JsonAccessor, JsonRecord};
/// use grille_engine::pipeline::evaluate;
/// use serde_json::json;
///
/// let records: Vec<JsonRecord> = vec![
/// 	JsonRecord::from([
/// 		("lastName".to_string(), json!("Lindqvist")),
/// 		("className".to_string(), json!("3B")),
/// 	]),
/// 	JsonRecord::from([
/// 		("lastName".to_string(), json!("Ekström")),
/// 		("className".to_string(), json!("3A")),
/// 	]),
/// ];
/// let filters = vec![ViewFilter::new("className", FilterOperator::Equals, "3B")];
/// let searchable = vec!["lastName".to_string()];
///
/// let hits = evaluate(&records, "lind", &filters, &searchable, &JsonAccessor);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0]["lastName"], json!("Lindqvist"));
/// ```
pub fn evaluate<'a, R, A>(
	records: &'a [R],
	term: &str,
	filters: &[ViewFilter],
	searchable_fields: &[String],
	accessor: &A,
) -> Vec<&'a R>
where
	A: FieldAccessor<R> + ?Sized,
{
	records
		.iter()
		.filter(|record| {
			search_matches(accessor, record, term, searchable_fields)
				&& matches_all(accessor, record, filters)
		})
		.collect()
}
