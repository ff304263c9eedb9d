//! Per-record match predicates
//!
//! Comparisons are case-insensitive via `str::to_lowercase`, which handles
//! the full Unicode range the portal's Swedish field data needs.

use grille_core::filter::{FilterOperator, ViewFilter};
use grille_core::record::FieldAccessor;

/// Returns whether `record` satisfies a single filter condition
///
/// A field that projects to `None` or to the empty string fails the
/// condition regardless of operator, so records with missing data never
/// leak through a filter.
///
/// # Examples
///
/// ```rust
/// use grille_core::filter::{FilterOperator, ViewFilter};
/// use grille_core::record::{JsonAccessor, JsonRecord};
/// use grille_engine::predicate::filter_matches;
/// use serde_json::json;
///
/// let mut record = JsonRecord::new();
/// record.insert("className".to_string(), json!("3B"));
///
/// let filter = ViewFilter::new("className", FilterOperator::Equals, "3b");
/// assert!(filter_matches(&JsonAccessor, &record, &filter));
/// ```
pub fn filter_matches<R, A>(accessor: &A, record: &R, filter: &ViewFilter) -> bool
where
	A: FieldAccessor<R> + ?Sized,
{
	let value = match accessor.project(record, &filter.field) {
		Some(value) if !value.is_empty() => value,
		_ => return false,
	};

	let haystack = value.to_lowercase();
	let needle = filter.value.to_lowercase();

	match filter.operator {
		FilterOperator::Equals => haystack == needle,
		FilterOperator::Contains => haystack.contains(&needle),
		FilterOperator::StartsWith => haystack.starts_with(&needle),
		FilterOperator::EndsWith => haystack.ends_with(&needle),
	}
}

/// Returns whether `record` satisfies every condition in `filters`
///
/// The conjunction short-circuits on the first failing condition. An empty
/// filter set admits every record.
pub fn matches_all<R, A>(accessor: &A, record: &R, filters: &[ViewFilter]) -> bool
where
	A: FieldAccessor<R> + ?Sized,
{
	filters
		.iter()
		.all(|filter| filter_matches(accessor, record, filter))
}

/// Returns whether `record` matches a free-text search term
///
/// The term must occur as a case-insensitive substring of at least one of
/// the `searchable_fields`. Only the literally empty term admits every
/// record; whitespace in the term is significant. A record none of whose
/// searchable fields project fails any non-empty term.
pub fn search_matches<R, A>(
	accessor: &A,
	record: &R,
	term: &str,
	searchable_fields: &[String],
) -> bool
where
	A: FieldAccessor<R> + ?Sized,
{
	if term.is_empty() {
		return true;
	}

	let needle = term.to_lowercase();
	searchable_fields.iter().any(|field| {
		accessor
			.project(record, field)
			.map(|value| value.to_lowercase().contains(&needle))
			.unwrap_or(false)
	})
}
