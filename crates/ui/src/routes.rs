use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use exam_core::model::{ExamFlow, Screen};

use crate::views::{ExamView, HomeView, ResultView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/exam", ExamView)] Exam {},
        #[route("/result", ResultView)] Review {},
}

impl Route {
    /// Route that renders `screen`.
    #[must_use]
    pub fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Home => Route::Home {},
            Screen::InExam => Route::Exam {},
            Screen::ReviewingResult => Route::Review {},
        }
    }
}

#[component]
fn Layout() -> Element {
    let flow = use_context::<Signal<ExamFlow>>();
    let exam_title = flow
        .read()
        .session()
        .selected_exam()
        .map(ToString::to_string);

    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "CBT" }
                if let Some(title) = exam_title {
                    span { class: "topbar-exam", "{title}" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
