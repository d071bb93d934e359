use super::*;
use crate::model::{ChapterStatus, Subject};
use std::collections::BTreeMap;

fn chapter(
    subject: Subject,
    name: &str,
    class_label: &str,
    unit: &str,
    years: &[(&str, u32)],
    solved: u32,
    status: ChapterStatus,
    is_weak: bool,
) -> ChapterRecord {
    ChapterRecord {
        subject,
        chapter_name: name.to_owned(),
        class_label: class_label.to_owned(),
        unit: unit.to_owned(),
        yearly_question_counts: years
            .iter()
            .map(|(y, n)| (y.to_string(), *n))
            .collect::<BTreeMap<_, _>>(),
        questions_solved: solved,
        status,
        is_weak,
    }
}

fn two_physics_chapters() -> Vec<ChapterRecord> {
    vec![
        chapter(
            Subject::Physics,
            "Mechanics",
            "11",
            "Mechanics",
            &[("2023", 5), ("2022", 3)],
            2,
            ChapterStatus::NotStarted,
            false,
        ),
        chapter(
            Subject::Physics,
            "Optics",
            "12",
            "Optics",
            &[("2023", 10)],
            10,
            ChapterStatus::Completed,
            true,
        ),
    ]
}

fn mixed_dataset() -> Vec<ChapterRecord> {
    vec![
        chapter(Subject::Physics, "A", "11", "Mechanics", &[("2024", 4)], 0, ChapterStatus::NotStarted, true),
        chapter(Subject::Physics, "B", "12", "Optics", &[("2024", 2)], 1, ChapterStatus::InProgress, false),
        chapter(Subject::Chemistry, "C", "11", "Organic", &[("2024", 9)], 0, ChapterStatus::NotStarted, false),
        chapter(Subject::Physics, "D", "11", "Optics", &[("2024", 4)], 4, ChapterStatus::Completed, true),
        chapter(Subject::Physics, "E", "12", "Mechanics", &[("2024", 7)], 0, ChapterStatus::NotStarted, false),
        chapter(Subject::Physics, "F", "11", "Mechanics", &[("2024", 4)], 0, ChapterStatus::NotStarted, false),
        chapter(Subject::Mathematics, "G", "12", "Calculus", &[("2024", 1)], 0, ChapterStatus::NotStarted, true),
    ]
}

fn names(engine: &ChapterEngine) -> Vec<String> {
    engine.derived_list().map(|c| c.chapter_name.clone()).collect()
}

#[test]
fn no_filters_sorts_ascending_by_total() {
    let engine = ChapterEngine::new(two_physics_chapters());
    assert_eq!(names(&engine), ["Mechanics", "Optics"]);
}

#[test]
fn weak_toggle_keeps_only_weak_chapters() {
    let mut engine = ChapterEngine::new(two_physics_chapters());
    engine.toggle_show_weak();
    assert_eq!(names(&engine), ["Optics"]);
}

#[test]
fn sort_toggle_reverses_order() {
    let mut engine = ChapterEngine::new(two_physics_chapters());
    engine.toggle_sort_direction();
    assert_eq!(names(&engine), ["Optics", "Mechanics"]);
}

#[test]
fn active_subject_scopes_the_list() {
    let mut engine = ChapterEngine::new(mixed_dataset());
    engine.set_active_subject(Subject::Chemistry);
    assert_eq!(names(&engine), ["C"]);
    engine.set_active_subject(Subject::Mathematics);
    assert_eq!(names(&engine), ["G"]);
}

#[test]
fn ties_keep_dataset_order_in_both_directions() {
    // A, D y F suman 4
    let mut engine = ChapterEngine::new(mixed_dataset());
    assert_eq!(names(&engine), ["B", "A", "D", "F", "E"]);
    engine.toggle_sort_direction();
    assert_eq!(names(&engine), ["E", "A", "D", "F", "B"]);
}

#[test]
fn totals_above_u32_sort_after_smaller_ones() {
    let dataset = vec![
        chapter(Subject::Physics, "Huge", "11", "Mechanics", &[("2023", u32::MAX), ("2024", 1)], 0, ChapterStatus::NotStarted, false),
        chapter(Subject::Physics, "Small", "11", "Mechanics", &[("2024", 3)], 0, ChapterStatus::NotStarted, false),
    ];
    let mut engine = ChapterEngine::new(dataset);
    assert_eq!(names(&engine), ["Small", "Huge"]);
    engine.toggle_sort_direction();
    assert_eq!(names(&engine), ["Huge", "Small"]);
}

#[test]
fn set_selected_classes_is_idempotent() {
    let mut engine = ChapterEngine::new(mixed_dataset());
    engine.set_selected_classes(["11"]);
    let first = names(&engine);
    engine.set_selected_classes(["11"]);
    assert_eq!(names(&engine), first);
    assert_eq!(first, ["A", "D", "F"]);
}

#[test]
fn set_selected_units_replaces_instead_of_adding() {
    let mut engine = ChapterEngine::new(mixed_dataset());
    engine.set_selected_units(["Optics"]);
    engine.set_selected_units(["Mechanics"]);
    assert_eq!(names(&engine), ["A", "F", "E"]);
}

#[test]
fn toggles_commute() {
    let mut forward = ChapterEngine::new(mixed_dataset());
    forward.toggle_class("11");
    forward.toggle_unit("Mechanics");
    forward.toggle_show_not_started();
    forward.toggle_show_weak();

    let mut backward = ChapterEngine::new(mixed_dataset());
    backward.toggle_show_weak();
    backward.toggle_show_not_started();
    backward.toggle_unit("Mechanics");
    backward.toggle_class("11");

    assert_eq!(forward.filters(), backward.filters());
    assert_eq!(names(&forward), names(&backward));
    assert_eq!(names(&forward), ["A"]);
}

#[test]
fn toggling_a_class_twice_removes_the_restriction() {
    let mut engine = ChapterEngine::new(mixed_dataset());
    let all = names(&engine);
    engine.toggle_class("12");
    assert_eq!(names(&engine), ["B", "E"]);
    engine.toggle_class("12");
    assert!(engine.filters().selected_classes.is_empty());
    assert_eq!(names(&engine), all);
}

#[test]
fn not_started_filter() {
    let mut engine = ChapterEngine::new(mixed_dataset());
    engine.toggle_show_not_started();
    assert_eq!(names(&engine), ["A", "F", "E"]);
}

#[test]
fn available_options_depend_only_on_subject() {
    let mut engine = ChapterEngine::new(mixed_dataset());
    let classes = engine.derive_available_classes();
    let units = engine.derive_available_units();
    assert_eq!(classes, ["11", "12"]);
    assert_eq!(units, ["Mechanics", "Optics"]);

    engine.set_selected_classes(["11"]);
    engine.toggle_show_weak();
    engine.toggle_show_not_started();
    assert_eq!(engine.derive_available_units(), units);
    assert_eq!(engine.derive_available_classes(), classes);

    engine.set_active_subject(Subject::Chemistry);
    assert_eq!(engine.derive_available_classes(), ["11"]);
    assert_eq!(engine.derive_available_units(), ["Organic"]);
}

#[test]
fn navigate_to_out_of_bounds_is_a_noop() {
    let mut engine = ChapterEngine::new(mixed_dataset());
    assert!(engine.select_chapter(2));
    let len = engine.derived_len() as isize;

    assert!(!engine.navigate_to(-1));
    assert!(!engine.navigate_to(len));
    assert_eq!(engine.selection().current_index, 2);

    assert!(engine.navigate_to(len - 1));
    assert_eq!(engine.selection().current_index, 4);
}

#[test]
fn select_chapter_outside_the_list_is_ignored() {
    let mut engine = ChapterEngine::new(two_physics_chapters());
    assert!(!engine.select_chapter(2));
    assert!(!engine.selection().is_open);
}

#[test]
fn previous_and_next_respect_the_ends() {
    let mut engine = ChapterEngine::new(two_physics_chapters());
    engine.select_chapter(0);
    assert!(!engine.has_previous());
    assert!(engine.has_next());
    assert!(!engine.previous());

    assert!(engine.next());
    assert_eq!(engine.selected_chapter().map(|c| c.chapter_name.as_str()), Some("Optics"));
    assert!(engine.has_previous());
    assert!(!engine.has_next());
    assert!(!engine.next());
    assert_eq!(engine.selection().current_index, 1);
}

#[test]
fn close_detail_hides_the_selection() {
    let mut engine = ChapterEngine::new(two_physics_chapters());
    engine.select_chapter(1);
    engine.close_detail();
    assert!(!engine.selection().is_open);
    assert!(engine.selected_chapter().is_none());
}

#[test]
fn selection_follows_the_chapter_when_it_survives_a_filter_change() {
    let mut engine = ChapterEngine::new(two_physics_chapters());
    engine.select_chapter(1); // Optics
    engine.toggle_sort_direction();
    assert_eq!(engine.selection().current_index, 0);
    assert_eq!(engine.selected_chapter().map(|c| c.chapter_name.as_str()), Some("Optics"));
}

#[test]
fn selection_is_clamped_when_the_chapter_disappears() {
    let mut engine = ChapterEngine::new(mixed_dataset());
    // B, A, D, F, E -> abrimos E
    engine.select_chapter(4);
    engine.set_selected_classes(["11"]);
    // A, D, F: E ya no está
    let selection = engine.selection();
    assert!(selection.is_open);
    assert_eq!(selection.current_index, 2);
    assert!(selection.current_index < engine.derived_len());
}

#[test]
fn selection_closes_when_the_list_becomes_empty() {
    let mut engine = ChapterEngine::new(two_physics_chapters());
    engine.select_chapter(0);
    engine.set_active_subject(Subject::Chemistry);
    assert_eq!(engine.derived_len(), 0);
    assert!(!engine.selection().is_open);
    assert!(engine.selected_chapter().is_none());
}

#[test]
fn revision_bumps_on_every_mutation() {
    let mut engine = ChapterEngine::new(two_physics_chapters());
    let start = engine.revision();
    engine.toggle_show_weak();
    engine.select_chapter(0);
    engine.close_detail();
    assert_eq!(engine.revision(), start + 3);

    // las no-op no cuentan
    engine.close_detail();
    engine.navigate_to(-1);
    assert_eq!(engine.revision(), start + 3);
}

#[test]
fn derive_chapter_list_is_pure() {
    let dataset = mixed_dataset();
    let filters = FilterState::default();
    assert_eq!(
        derive_chapter_list(&dataset, &filters),
        derive_chapter_list(&dataset, &filters)
    );
}
