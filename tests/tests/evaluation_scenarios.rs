//! End-to-end evaluation scenarios through the domain surface

use grille::prelude::*;
use grille_integration_tests::{arena, names, roster, students_profile};
use rstest::rstest;
use serde_json::json;

#[test]
fn test_toggling_a_column_narrows_the_header_row() {
	let arena = arena();
	let students = arena.register(DomainProfile::json(
		"students-compact",
		"Students",
		vec![
			ViewColumn::new("name", "Name"),
			ViewColumn::new("ssn", "SSN"),
			ViewColumn::new("email", "Email"),
		],
		vec!["name".to_string()],
	));
	let mut students = students.write();

	students.toggle_column("email");

	let visible: Vec<&str> = students
		.visible_columns()
		.iter()
		.map(|column| column.key.as_str())
		.collect();
	assert_eq!(visible, vec!["name", "ssn"]);
}

#[test]
fn test_free_text_search_finds_by_searchable_field() {
	let arena = arena();
	let students = arena.register(students_profile());
	let records = roster();
	let mut students = students.write();

	students.set_search_term("erik");

	let hits = students.evaluate(&records);
	assert_eq!(names(&hits), vec!["Erik Nilsson"]);
}

#[test]
fn test_equals_filter_folds_case_on_both_sides() {
	let arena = arena();
	let students = arena.register(students_profile());
	let records = vec![
		JsonRecord::from([
			("name".to_string(), json!("A")),
			("status".to_string(), json!("active")),
		]),
		JsonRecord::from([
			("name".to_string(), json!("B")),
			("status".to_string(), json!("Inactive")),
		]),
	];
	let mut students = students.write();

	students.set_filters(vec![ViewFilter::new("status", FilterOperator::Equals, "Active")]);

	let hits = students.evaluate(&records);
	assert_eq!(names(&hits), vec!["A"]);
}

#[test]
fn test_search_and_filters_are_anded() {
	let arena = arena();
	let students = arena.register(students_profile());
	let records = roster();
	let mut students = students.write();

	// Two students are in 3B, but only one of them matches the term.
	students.set_search_term("maria");
	students.set_filters(vec![ViewFilter::new("className", FilterOperator::Equals, "3B")]);

	let hits = students.evaluate(&records);
	assert_eq!(names(&hits), vec!["Maria Lindgren"]);
}

#[rstest]
#[case::starts_with(FilterOperator::StartsWith, "anna", vec!["Anna Svensson"])]
#[case::ends_with(FilterOperator::EndsWith, "sson", vec!["Anna Svensson", "Erik Nilsson"])]
#[case::contains(FilterOperator::Contains, "ils", vec!["Erik Nilsson"])]
fn test_operator_spread_over_the_name_field(
	#[case] operator: FilterOperator,
	#[case] value: &str,
	#[case] expected: Vec<&str>,
) {
	let arena = arena();
	let students = arena.register(students_profile());
	let records = roster();
	let mut students = students.write();

	// Filters may read any field the accessor projects, searchable or not.
	students.set_filters(vec![ViewFilter::new("name", operator, value)]);

	let hits = students.evaluate(&records);
	assert_eq!(names(&hits), expected);
}

#[test]
fn test_empty_term_and_filters_admit_the_whole_roster() {
	let arena = arena();
	let students = arena.register(students_profile());
	let records = roster();
	let students = students.read();

	let hits = students.evaluate(&records);

	assert_eq!(hits.len(), records.len());
	assert_eq!(
		names(&hits),
		vec!["Anna Svensson", "Erik Nilsson", "Maria Lindgren"]
	);
}

#[test]
fn test_evaluation_is_pure_and_repeatable() {
	let arena = arena();
	let students = arena.register(students_profile());
	let records = roster();
	let before = records.clone();
	let mut students = students.write();
	students.set_search_term("nils");
	students.set_filters(vec![ViewFilter::new("status", FilterOperator::Equals, "active")]);

	let first = names(&students.evaluate(&records));
	let second = names(&students.evaluate(&records));

	assert_eq!(first, second);
	assert_eq!(records, before);
}

#[test]
fn test_missing_fields_fail_filters_closed() {
	let arena = arena();
	let students = arena.register(students_profile());
	// A record with no status at all must never pass a status filter.
	let records = vec![JsonRecord::from([("name".to_string(), json!("Ghost"))])];
	let mut students = students.write();

	students.set_filters(vec![ViewFilter::new(
		"status",
		FilterOperator::Contains,
		"",
	)]);

	assert!(students.evaluate(&records).is_empty());
}
