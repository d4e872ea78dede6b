use dioxus::prelude::*;
use dioxus_router::Router;
use exam_core::model::ExamFlow;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // The one exam session of the process, shared by every screen.
    use_context_provider(|| Signal::new(ExamFlow::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "CBT" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
