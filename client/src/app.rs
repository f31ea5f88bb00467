//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::theme_provider::ThemeProvider;
use crate::components::toaster::Toaster;
use crate::pages::scheduler::SchedulerPage;
use crate::state::schedule::ScheduleState;
use crate::state::toast::ToastState;

/// HTML shell for SSR.
///
/// The theme bootstrap runs inline before any stylesheet or bundle so the
/// first paint already carries `data-theme`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=theme::BOOTSTRAP_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component. Provides global state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ScheduleState::default()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/course-planner.css"/>
        <Title text="Class Scheduler"/>

        <ThemeProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=SchedulerPage/>
                    </Routes>
                </main>
            </Router>
            <Toaster/>
        </ThemeProvider>
    }
}
