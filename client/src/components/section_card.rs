//! Selectable card for one class section.

use leptos::prelude::*;

use crate::state::schedule::ClassSection;
use crate::util::schedule_format::{credits_label, meeting_summary};

/// Card for `section`. Clicking the card toggles selection; the remove
/// button does not.
#[component]
pub fn SectionCard(
    section: ClassSection,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<()>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let meeting = meeting_summary(&section);
    let credits = credits_label(u32::from(section.credits));

    view! {
        <div
            class=move || if selected.get() { "section-card section-card--selected" } else { "section-card" }
            on:click=move |_| on_select.run(())
        >
            <div class="section-card__header">
                <div>
                    <div class="section-card__code">{section.course_code}</div>
                    <div class="section-card__number">"Section " {section.section_number}</div>
                </div>
                <button
                    class="btn btn--ghost section-card__remove"
                    title="Remove section"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_remove.run(());
                    }
                >
                    "×"
                </button>
            </div>
            <div class="section-card__name">{section.course_name}</div>
            <dl class="section-card__details">
                <dt>"Time"</dt>
                <dd>{meeting}</dd>
                <dt>"Instructor"</dt>
                <dd>{section.instructor}</dd>
                <dt>"Location"</dt>
                <dd>{section.location}</dd>
            </dl>
            <div class="section-card__footer">
                <span class="badge">{credits}</span>
                <Show when=move || selected.get()>
                    <span class="badge badge--primary">"Selected"</span>
                </Show>
            </div>
        </div>
    }
}
