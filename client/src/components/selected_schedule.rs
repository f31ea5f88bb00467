//! Summary of the sections picked across all groups.

use leptos::prelude::*;

use crate::state::schedule::{ClassSection, ScheduleState};
use crate::util::schedule_format::{credits_label, meeting_summary};

/// Hidden until at least one group has a selection.
#[component]
pub fn SelectedSchedule() -> impl IntoView {
    let schedule = expect_context::<RwSignal<ScheduleState>>();

    let entries = move || {
        schedule.with(|s| {
            s.selected_schedule()
                .into_iter()
                .map(|entry| (entry.group.id.clone(), entry.section.clone()))
                .collect::<Vec<_>>()
        })
    };
    let total = move || credits_label(schedule.with(ScheduleState::total_credits));

    view! {
        <Show when=move || schedule.with(|s| !s.selected.is_empty())>
            <section class="selected-schedule">
                <h2 class="selected-schedule__title">"Selected Schedule"</h2>
                <For
                    each=entries
                    key=|(group_id, section): &(String, ClassSection)| format!("{group_id}/{}", section.id)
                    children=|(_, section): (String, ClassSection)| {
                        let heading = format!("{} - {}", section.course_code, section.course_name);
                        let meta = format!("Section {} • {}", section.section_number, meeting_summary(&section));
                        view! {
                            <div class="selected-schedule__row">
                                <div>
                                    <div class="selected-schedule__course">{heading}</div>
                                    <div class="selected-schedule__meta">{meta}</div>
                                </div>
                                <span class="badge">{credits_label(u32::from(section.credits))}</span>
                            </div>
                        }
                    }
                />
                <p class="selected-schedule__total">"Total: " {total}</p>
            </section>
        </Show>
    }
}
