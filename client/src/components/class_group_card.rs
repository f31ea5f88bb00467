//! Card for one class group and its sections.

#[cfg(test)]
#[path = "class_group_card_test.rs"]
mod class_group_card_test;

use leptos::prelude::*;

use crate::components::add_section_dialog::AddSectionDialog;
use crate::components::section_card::SectionCard;
use crate::components::toaster::show_toast;
use crate::state::schedule::{ClassSection, DraftError, ScheduleState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::schedule_format::section_count_label;

/// Add `section` to the group and announce it. Returns `false` when the group
/// no longer exists, in which case nothing is shown.
pub fn add_section_with_toast(
    schedule: RwSignal<ScheduleState>,
    toasts: RwSignal<ToastState>,
    group_id: &str,
    section: ClassSection,
) -> bool {
    let label = format!("Added {} section {}", section.course_code, section.section_number);
    let added = schedule.try_update(|s| s.add_section(group_id, section)).unwrap_or(false);
    if added {
        show_toast(toasts, ToastKind::Success, label);
    }
    added
}

pub fn report_invalid_draft(toasts: RwSignal<ToastState>, err: &DraftError) {
    show_toast(toasts, ToastKind::Error, err.to_string());
}

#[component]
pub fn ClassGroupCard(group_id: String) -> impl IntoView {
    let schedule = expect_context::<RwSignal<ScheduleState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let group_id = StoredValue::new(group_id);

    let group = move || group_id.with_value(|id| schedule.with(|s| s.group(id).cloned()));
    let name = move || group().map(|g| g.name).unwrap_or_default();
    let sections = move || group().map(|g| g.sections).unwrap_or_default();
    let has_selection = move || group_id.with_value(|id| schedule.with(|s| s.selected.contains_key(id)));
    let summary = move || {
        let available = format!("{} available", section_count_label(sections().len()));
        if has_selection() { format!("{available} • 1 selected") } else { available }
    };

    let on_remove_group = move |_| {
        group_id.with_value(|id| {
            schedule.update(|s| {
                s.remove_group(id);
            });
        });
    };
    let on_add = Callback::new(move |section: ClassSection| {
        group_id.with_value(|id| add_section_with_toast(schedule, toasts, id, section));
    });
    let on_invalid = Callback::new(move |err: DraftError| report_invalid_draft(toasts, &err));

    view! {
        <section class="group-card">
            <header class="group-card__header">
                <div>
                    <h2 class="group-card__name">{name}</h2>
                    <p class="group-card__summary">{summary}</p>
                </div>
                <div class="group-card__actions">
                    <AddSectionDialog on_add on_invalid/>
                    <Show when=move || schedule.with(ScheduleState::can_remove_group)>
                        <button class="btn btn--ghost" title="Remove class group" on:click=on_remove_group>
                            "Remove"
                        </button>
                    </Show>
                </div>
            </header>
            <Show
                when=move || !sections().is_empty()
                fallback=|| {
                    view! {
                        <p class="group-card__empty">
                            "No sections added yet. Click \"Add Section\" to add options for this class."
                        </p>
                    }
                }
            >
                <div class="group-card__sections">
                    <For
                        each=sections
                        key=|section| section.id.clone()
                        children=move |section: ClassSection| {
                            let section_id = StoredValue::new(section.id.clone());
                            let selected = Signal::derive(move || {
                                group_id.with_value(|g| {
                                    section_id.with_value(|sid| schedule.with(|s| s.is_selected(g, sid)))
                                })
                            });
                            let on_select = Callback::new(move |()| {
                                group_id.with_value(|g| {
                                    section_id.with_value(|sid| schedule.update(|s| s.select_section(g, sid)));
                                });
                            });
                            let on_remove = Callback::new(move |()| {
                                group_id.with_value(|g| {
                                    section_id.with_value(|sid| {
                                        schedule.update(|s| {
                                            s.remove_section(g, sid);
                                        });
                                    });
                                });
                            });
                            view! { <SectionCard section selected on_select on_remove/> }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
