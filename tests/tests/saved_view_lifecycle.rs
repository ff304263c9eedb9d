//! Save, load and delete lifecycle of views across the whole stack

use std::sync::Arc;

use chrono::Duration;
use grille::prelude::*;
use grille_integration_tests::{arena, epoch, fixed_clock, students_profile, students_schema};
use rstest::rstest;
use uuid::Uuid;

// ==================== 1. SAVE AND LOAD ====================

#[test]
fn test_save_then_load_round_trips_after_unrelated_edits() {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();
	students.toggle_column("ssn");
	students.set_filters(vec![
		ViewFilter::new("className", FilterOperator::Equals, "3B"),
		ViewFilter::new("status", FilterOperator::Equals, "active"),
	]);
	let columns_at_save = students.controller().working_columns().to_vec();
	let filters_at_save = students.controller().working_filters().to_vec();

	let saved = students.save_view("My View", Some("3B actives".to_string())).unwrap();

	// Unrelated churn between save and load.
	students.toggle_column("name");
	students.toggle_column("ssn");
	students.set_filters(Vec::new());
	students.set_search_term("noise");

	assert!(students.load_view(saved.id));
	assert_eq!(students.controller().working_columns(), columns_at_save.as_slice());
	assert_eq!(students.controller().working_filters(), filters_at_save.as_slice());
	assert_eq!(students.active_view_id(), Some(saved.id));
}

#[test]
fn test_saved_snapshots_take_their_timestamps_from_the_clock() {
	let clock = fixed_clock();
	let arena = ViewArena::with_clock("admin-7", Arc::new(clock.clone()));
	let students = arena.register(students_profile());
	clock.advance(Duration::hours(2));

	let saved = students.write().save_view("My View", None).unwrap();

	assert_eq!(saved.created_at, epoch() + Duration::hours(2));
	assert_eq!(saved.updated_at, saved.created_at);
	assert_eq!(saved.created_by, "admin-7");
}

#[test]
fn test_loading_an_unknown_id_changes_nothing() {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();
	students.set_filters(vec![ViewFilter::new("status", FilterOperator::Equals, "active")]);
	let before = students.controller().state().clone();

	assert!(!students.load_view(Uuid::new_v4()));
	assert_eq!(students.controller().state(), &before);
}

#[test]
fn test_duplicate_view_names_coexist_within_a_domain() {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();

	let first = students.save_view("My View", None).unwrap();
	let second = students.save_view("My View", None).unwrap();

	assert_ne!(first.id, second.id);
	let named: Vec<&SavedView> = students
		.views()
		.iter()
		.filter(|view| view.name == "My View")
		.collect();
	assert_eq!(named.len(), 2);
}

// ==================== 2. NAME VALIDATION ====================

#[rstest]
#[case::empty("")]
#[case::blank("   ")]
fn test_blank_names_are_rejected_and_retryable(#[case] name: &str) {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();
	let views_before = students.views().len();

	let result = students.save_view(name, None);
	assert!(matches!(result, Err(ViewError::InvalidViewName)));
	assert_eq!(students.views().len(), views_before);

	// The failure is local and retryable: fixing the name just works.
	let saved = students.save_view("My View", None).unwrap();
	assert_eq!(students.active_view_id(), Some(saved.id));
}

// ==================== 3. DELETE AND FALLBACK ====================

#[test]
fn test_deleting_a_non_active_view_disturbs_nothing() {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();
	let doomed = students.save_view("Doomed", None).unwrap();
	students.set_filters(vec![
		ViewFilter::new("className", FilterOperator::Equals, "3B"),
		ViewFilter::new("status", FilterOperator::Equals, "active"),
	]);
	let active = students.save_view("My View", None).unwrap();

	students.delete_view(doomed.id).unwrap();

	assert_eq!(students.active_view_id(), Some(active.id));
	assert_eq!(students.controller().working_filters().len(), 2);
	assert!(!students.views().iter().any(|view| view.id == doomed.id));
}

#[test]
fn test_deleting_the_active_view_falls_back_to_the_flagged_default() {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();
	// Several entries, so a naive "first saved" fallback would be wrong.
	students.save_view("First", None).unwrap();
	let active = students.save_view("Second", None).unwrap();

	students.delete_view(active.id).unwrap();

	let default_id = students.registry().default_id();
	assert_eq!(students.active_view_id(), Some(default_id));
	assert!(!students.views().iter().any(|view| view.id == active.id));
}

#[test]
fn test_the_active_reference_never_dangles_after_a_delete() {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();
	let active = students.save_view("Mine", None).unwrap();

	students.delete_view(active.id).unwrap();

	let resolved = students.active_view_id();
	assert!(resolved.is_some());
	assert!(students.registry().contains(resolved.unwrap_or_default()));
}

#[test]
fn test_a_dangling_reference_is_healed_on_the_next_read() {
	// Drive the controller and registry directly to fabricate the
	// inconsistency a buggy caller could leave behind.
	let clock: Arc<dyn Clock> = Arc::new(fixed_clock());
	let mut registry =
		ViewRegistry::seeded("Students", &students_schema(), clock.as_ref(), "system");
	let mut controller = ViewController::new(students_schema(), clock, "admin-7");
	let saved = controller.save_view(&mut registry, "Mine", None).unwrap();
	registry.remove_by_id(saved.id).unwrap();

	controller.ensure_active(&registry);

	assert_eq!(controller.active_view_id(), Some(registry.default_id()));
}

#[test]
fn test_the_seeded_default_cannot_be_deleted() {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();
	let default_id = students.registry().default_id();

	let result = students.delete_view(default_id);

	assert!(matches!(result, Err(ViewError::ProtectedView { id }) if id == default_id));
	assert!(students.registry().contains(default_id));
	assert_eq!(students.active_view_id(), Some(default_id));
}

// ==================== 4. REPLACE ====================

#[test]
fn test_replace_is_the_only_way_to_edit_a_snapshot() {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();
	let saved = students.save_view("My View", None).unwrap();

	let mut edited = saved.clone();
	edited.name = "My View, renamed".to_string();
	edited.description = Some("Now with a description".to_string());
	students.replace_view(edited).unwrap();

	let stored = students.registry().get_by_id(saved.id).unwrap();
	assert_eq!(stored.name, "My View, renamed");
	assert_eq!(stored.id, saved.id);
}

#[test]
fn test_replace_cannot_demote_the_default_or_crown_a_second() {
	let arena = arena();
	let students = arena.register(students_profile());
	let mut students = students.write();
	let saved = students.save_view("My View", None).unwrap();

	let mut demoted = students.registry().default_view().clone();
	demoted.is_default = false;
	assert!(matches!(
		students.replace_view(demoted),
		Err(ViewError::ProtectedView { .. })
	));

	let mut crowned = saved.clone();
	crowned.is_default = true;
	assert!(matches!(
		students.replace_view(crowned),
		Err(ViewError::DuplicateDefault { .. })
	));
}
