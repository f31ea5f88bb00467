//! Modal form for adding a section to a class group.

use leptos::prelude::*;

use crate::state::schedule::{CREDIT_CHOICES, ClassSection, DraftError, SectionDraft, Weekday};

/// Text inputs of the form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DraftText {
    CourseCode,
    SectionNumber,
    CourseName,
    Instructor,
    StartTime,
    EndTime,
    Location,
}

impl DraftText {
    fn get(self, draft: &SectionDraft) -> &String {
        match self {
            Self::CourseCode => &draft.course_code,
            Self::SectionNumber => &draft.section_number,
            Self::CourseName => &draft.course_name,
            Self::Instructor => &draft.instructor,
            Self::StartTime => &draft.start_time,
            Self::EndTime => &draft.end_time,
            Self::Location => &draft.location,
        }
    }

    fn get_mut(self, draft: &mut SectionDraft) -> &mut String {
        match self {
            Self::CourseCode => &mut draft.course_code,
            Self::SectionNumber => &mut draft.section_number,
            Self::CourseName => &mut draft.course_name,
            Self::Instructor => &mut draft.instructor,
            Self::StartTime => &mut draft.start_time,
            Self::EndTime => &mut draft.end_time,
            Self::Location => &mut draft.location,
        }
    }
}

/// "+ Add Section" button plus the dialog it opens.
///
/// `on_add` receives a validated section; `on_invalid` receives the first
/// validation failure, which is also shown inline.
#[component]
pub fn AddSectionDialog(on_add: Callback<ClassSection>, on_invalid: Callback<DraftError>) -> impl IntoView {
    let open = RwSignal::new(false);
    let draft = RwSignal::new(SectionDraft::default());
    let error = RwSignal::new(None::<String>);

    let on_open = move |_| {
        draft.set(SectionDraft::default());
        error.set(None);
        open.set(true);
    };
    let on_cancel = move |_| open.set(false);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with(SectionDraft::build) {
            Ok(section) => {
                on_add.run(section);
                open.set(false);
            }
            Err(err) => {
                error.set(Some(err.to_string()));
                on_invalid.run(err);
            }
        }
    };

    view! {
        <button class="btn btn--small" on:click=on_open>"+ Add Section"</button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=on_cancel>
                <form class="dialog" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                    <h2>"Add Class Section"</h2>
                    <div class="dialog__row">
                        {text_field(draft, DraftText::CourseCode, "Course Code", "text", "CS 101")}
                        {text_field(draft, DraftText::SectionNumber, "Section Number", "text", "001")}
                    </div>
                    {text_field(draft, DraftText::CourseName, "Course Name", "text", "Introduction to Computer Science")}
                    {text_field(draft, DraftText::Instructor, "Instructor", "text", "Dr. Smith")}
                    {day_picker(draft)}
                    <div class="dialog__row">
                        {text_field(draft, DraftText::StartTime, "Start Time", "time", "")}
                        {text_field(draft, DraftText::EndTime, "End Time", "time", "")}
                    </div>
                    <div class="dialog__row">
                        {text_field(draft, DraftText::Location, "Location", "text", "Room 101")}
                        {credits_select(draft)}
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=on_cancel>"Cancel"</button>
                        <button type="submit" class="btn btn--primary">"Add Section"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

fn text_field(
    draft: RwSignal<SectionDraft>,
    field: DraftText,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || draft.with(|d| field.get(d).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| *field.get_mut(d) = value);
                }
            />
        </label>
    }
}

fn day_picker(draft: RwSignal<SectionDraft>) -> impl IntoView {
    let days = Weekday::ALL
        .into_iter()
        .map(|day| {
            view! {
                <button
                    type="button"
                    title=day.name()
                    class=move || {
                        if draft.with(|d| d.days.contains(&day)) { "btn btn--small btn--primary" } else { "btn btn--small" }
                    }
                    on:click=move |_| draft.update(|d| d.toggle_day(day))
                >
                    {day.abbreviation()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="dialog__label">
            "Days"
            <div class="dialog__days">{days}</div>
        </div>
    }
}

fn credits_select(draft: RwSignal<SectionDraft>) -> impl IntoView {
    let options = CREDIT_CHOICES
        .into_iter()
        .map(|credits| {
            view! {
                <option value=credits.to_string() selected=move || draft.with(|d| d.credits == credits)>
                    {credits}
                </option>
            }
        })
        .collect_view();

    view! {
        <label class="dialog__label">
            "Credits"
            <select
                class="dialog__input"
                on:change=move |ev| {
                    if let Ok(credits) = event_target_value(&ev).parse::<u8>() {
                        draft.update(|d| d.credits = credits);
                    }
                }
            >
                {options}
            </select>
        </label>
    }
}
