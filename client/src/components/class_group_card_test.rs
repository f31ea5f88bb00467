use super::*;
use crate::state::schedule::{SectionDraft, Weekday};

fn section() -> ClassSection {
    SectionDraft {
        course_code: "CS 101".to_owned(),
        section_number: "002".to_owned(),
        course_name: "Introduction to Computer Science".to_owned(),
        instructor: "Dr. Smith".to_owned(),
        days: vec![Weekday::Tuesday, Weekday::Thursday],
        start_time: "13:00".to_owned(),
        end_time: "14:15".to_owned(),
        location: "Room 101".to_owned(),
        credits: 4,
    }
    .build()
    .expect("valid draft")
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn adding_a_section_raises_success_toast() {
    Owner::new().with(|| {
        let schedule = RwSignal::new(ScheduleState::default());
        let toasts = RwSignal::new(ToastState::default());
        let group_id = schedule.with_untracked(|s| s.groups[0].id.clone());

        assert!(add_section_with_toast(schedule, toasts, &group_id, section()));

        assert_eq!(schedule.with_untracked(|s| s.groups[0].sections.len()), 1);
        toasts.with_untracked(|t| {
            assert_eq!(t.items.len(), 1);
            assert_eq!(t.items[0].kind, ToastKind::Success);
            assert_eq!(t.items[0].message, "Added CS 101 section 002");
        });
    });
}

#[test]
fn adding_to_a_removed_group_stays_silent() {
    Owner::new().with(|| {
        let schedule = RwSignal::new(ScheduleState::default());
        let toasts = RwSignal::new(ToastState::default());

        assert!(!add_section_with_toast(schedule, toasts, "gone", section()));
        assert!(toasts.with_untracked(|t| t.items.is_empty()));
    });
}

#[test]
fn invalid_draft_raises_error_toast() {
    Owner::new().with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let err = SectionDraft::default().build().expect_err("empty draft");

        report_invalid_draft(toasts, &err);

        toasts.with_untracked(|t| {
            assert_eq!(t.items.len(), 1);
            assert_eq!(t.items[0].kind, ToastKind::Error);
            assert_eq!(t.items[0].message, "Course code is required");
        });
    });
}
