//! Field filter conditions attached to a view

use serde::{Deserialize, Serialize};

/// Comparison operator applied between a record field and a filter value
///
/// The set is closed: a filter that cannot name one of these operators does
/// not deserialize, so the evaluation engine never sees an operator it does
/// not understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
	/// Case-insensitive equality
	Equals,
	/// Case-insensitive substring match
	Contains,
	/// Case-insensitive prefix match
	StartsWith,
	/// Case-insensitive suffix match
	EndsWith,
}

/// One filter condition of a view
///
/// All conditions of a view must hold for a record to pass; the engine
/// combines them conjunctively.
///
/// # Examples
///
/// ```rust
/// use grille_core::filter::{FilterOperator, ViewFilter};
///
/// let filter = ViewFilter::new("className", FilterOperator::Equals, "3B");
/// assert_eq!(filter.field, "className");
/// assert_eq!(filter.operator, FilterOperator::Equals);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFilter {
	/// Field key the condition reads from each record
	pub field: String,
	/// Comparison to perform
	pub operator: FilterOperator,
	/// Literal the field value is compared against
	pub value: String,
}

impl ViewFilter {
	/// Creates a filter condition
	pub fn new(
		field: impl Into<String>,
		operator: FilterOperator,
		value: impl Into<String>,
	) -> Self {
		Self {
			field: field.into(),
			operator,
			value: value.into(),
		}
	}
}
