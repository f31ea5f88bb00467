//! Class scheduler page.

use leptos::prelude::*;

use crate::components::class_group_card::ClassGroupCard;
use crate::components::selected_schedule::SelectedSchedule;
use crate::components::theme_toggle::{ThemeMenu, ThemeToggle};
use crate::state::schedule::ScheduleState;

#[component]
pub fn SchedulerPage() -> impl IntoView {
    let schedule = expect_context::<RwSignal<ScheduleState>>();

    let group_ids = move || schedule.with(|s| s.groups.iter().map(|g| g.id.clone()).collect::<Vec<_>>());
    let on_add_group = move |_| {
        schedule.update(|s| {
            s.add_group();
        });
    };

    view! {
        <div class="scheduler-page">
            <header class="toolbar scheduler-page__header">
                <div>
                    <h1 class="scheduler-page__title">"Class Scheduler"</h1>
                    <p class="scheduler-page__lede">
                        "Organize your class options into groups. Each group holds mutually exclusive classes or sections."
                    </p>
                </div>
                <span class="toolbar__spacer"></span>
                <ThemeMenu/>
                <ThemeToggle/>
            </header>

            <div class="scheduler-page__actions">
                <button class="btn btn--primary" on:click=on_add_group>
                    "+ Add Class Group"
                </button>
            </div>

            <div class="scheduler-page__groups">
                <For
                    each=group_ids
                    key=|id| id.clone()
                    children=|group_id: String| view! { <ClassGroupCard group_id/> }
                />
            </div>

            <SelectedSchedule/>
        </div>
    }
}
