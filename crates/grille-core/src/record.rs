//! Record projection
//!
//! The engine never assumes a record shape. Each list domain supplies a
//! [`FieldAccessor`] that projects a named field of its record type to the
//! text the filter and search stages compare against. Synthetic fields
//! (a `"name"` assembled from first and last name, say) are just accessor
//! logic; the engine cannot tell them apart from stored ones.

use std::collections::HashMap;

use serde_json::Value;

/// Dynamic record shape used by the portal's list screens
pub type JsonRecord = HashMap<String, Value>;

/// Projects one field of a record to comparable text
///
/// Returning `None` means the field is absent for this record; the
/// evaluation stages treat that as a failed match rather than an error.
pub trait FieldAccessor<R>: Send + Sync {
	/// Returns the textual value of `field` on `record`, if any
	fn project(&self, record: &R, field: &str) -> Option<String>;
}

impl<R, F> FieldAccessor<R> for F
where
	F: Fn(&R, &str) -> Option<String> + Send + Sync,
{
	fn project(&self, record: &R, field: &str) -> Option<String> {
		self(record, field)
	}
}

/// Accessor for [`JsonRecord`] rows
///
/// Strings project as-is, numbers and booleans through their display form.
/// Null, missing keys, empty strings and compound values (arrays, objects)
/// all project to `None`.
///
/// # Examples
///
/// ```rust
/// use grille_core::record::{FieldAccessor, JsonAccessor, JsonRecord};
/// use serde_json::json;
///
/// let mut record = JsonRecord::new();
/// record.insert("lastName".to_string(), json!("Lindqvist"));
/// record.insert("absences".to_string(), json!(4));
/// record.insert("notes".to_string(), json!(null));
///
/// let accessor = JsonAccessor;
/// assert_eq!(accessor.project(&record, "lastName"), Some("Lindqvist".to_string()));
/// assert_eq!(accessor.project(&record, "absences"), Some("4".to_string()));
/// assert_eq!(accessor.project(&record, "notes"), None);
/// assert_eq!(accessor.project(&record, "missing"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAccessor;

impl FieldAccessor<JsonRecord> for JsonAccessor {
	fn project(&self, record: &JsonRecord, field: &str) -> Option<String> {
		match record.get(field)? {
			Value::String(text) if text.is_empty() => None,
			Value::String(text) => Some(text.clone()),
			Value::Number(number) => Some(number.to_string()),
			Value::Bool(flag) => Some(flag.to_string()),
			Value::Null | Value::Array(_) | Value::Object(_) => None,
		}
	}
}
