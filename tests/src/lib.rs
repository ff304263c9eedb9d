//! Shared fixtures for the grille integration tests
//!
//! One student list domain with a handful of roster records, driven by a
//! pinned clock so snapshot timestamps are reproducible.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use grille::prelude::*;
use serde_json::json;

/// A pinned instant all fixtures agree on
pub fn epoch() -> DateTime<Utc> {
	DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

/// A clock pinned to [`epoch`]
pub fn fixed_clock() -> FixedClock {
	FixedClock::new(epoch())
}

/// The student domain's full column schema
pub fn students_schema() -> Vec<ViewColumn> {
	vec![
		ViewColumn::new("name", "Name"),
		ViewColumn::new("ssn", "SSN"),
		ViewColumn::new("email", "Email"),
		ViewColumn::new("className", "Class"),
		ViewColumn::new("status", "Status"),
	]
}

/// Profile for the student list: only `name` is searchable
pub fn students_profile() -> DomainProfile<JsonRecord> {
	DomainProfile::json("students", "Students", students_schema(), vec!["name".to_string()])
}

/// An arena on the pinned clock, acting as one signed-in administrator
pub fn arena() -> ViewArena<JsonRecord> {
	ViewArena::with_clock("admin-7", Arc::new(fixed_clock()))
}

/// A small roster of student records
pub fn roster() -> Vec<JsonRecord> {
	let rows = [
		("Anna Svensson", "050301-2345", "anna@example.se", "3A", "active"),
		("Erik Nilsson", "041122-7890", "erik@example.se", "3B", "active"),
		("Maria Lindgren", "050615-1122", "maria@example.se", "3B", "Inactive"),
	];
	rows.into_iter()
		.map(|(name, ssn, email, class, status)| {
			JsonRecord::from([
				("name".to_string(), json!(name)),
				("ssn".to_string(), json!(ssn)),
				("email".to_string(), json!(email)),
				("className".to_string(), json!(class)),
				("status".to_string(), json!(status)),
			])
		})
		.collect()
}

/// Names of the given records, in order
pub fn names(records: &[&JsonRecord]) -> Vec<String> {
	records
		.iter()
		.map(|record| record["name"].as_str().unwrap_or_default().to_string())
		.collect()
}
