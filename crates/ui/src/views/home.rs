use dioxus::prelude::*;
use dioxus_router::use_navigator;
use exam_core::model::{ExamFlow, ExamName};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    exams: Vec<ExamName>,
}

/// Selection shown in the picker: the user's pick if still listed, then the
/// launch preselection, then the first exam.
fn effective_selection(
    exams: &[ExamName],
    picked: Option<&ExamName>,
    preselected: Option<&ExamName>,
) -> Option<ExamName> {
    picked
        .filter(|name| exams.contains(name))
        .or_else(|| preselected.filter(|name| exams.contains(name)))
        .or_else(|| exams.first())
        .cloned()
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut flow = use_context::<Signal<ExamFlow>>();
    let navigator = use_navigator();
    let exam_service = ctx.exam_service();
    let preselected = ctx.preselected_exam().cloned();
    let catalog_label = ctx.catalog_label().to_string();

    let mut picked = use_signal(|| None::<ExamName>);
    let mut start_error = use_signal(|| None::<ViewError>);
    let mut starting = use_signal(|| false);

    let resource = {
        let exam_service = exam_service.clone();
        use_resource(move || {
            let exam_service = exam_service.clone();
            async move {
                let exams = exam_service.list_exams().await;
                Ok::<_, ViewError>(HomeData { exams })
            }
        })
    };
    let state = view_state_from_resource(&resource);

    let selection = match &state {
        ViewState::Ready(data) => {
            effective_selection(&data.exams, picked.read().as_ref(), preselected.as_ref())
        }
        _ => None,
    };

    let start_exam = {
        let selection = selection.clone();
        move |_: MouseEvent| {
            let Some(name) = selection.clone() else {
                return;
            };
            let exam_service = exam_service.clone();
            starting.set(true);
            start_error.set(None);
            spawn(async move {
                let opened = exam_service.open_exam(&name).await;
                let started = opened.and_then(|exam| exam_service.start(&mut flow.write(), &exam));
                starting.set(false);
                match started {
                    Ok(()) => {
                        navigator.replace(Route::for_screen(flow.read().screen()));
                    }
                    Err(err) => {
                        tracing::warn!(exam = %name, error = %err, "could not start exam");
                        start_error.set(Some(ViewError::from_service(&err)));
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "page home",
            h2 { "Choose an exam" }
            p { class: "home-catalog", "Catalog: {catalog_label}" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.exams.is_empty() {
                        p { class: "home-empty", "No exams found." }
                    } else {
                        select {
                            id: "exam-select",
                            class: "exam-select",
                            onchange: move |evt| {
                                if let Ok(name) = ExamName::new(evt.value()) {
                                    picked.set(Some(name));
                                }
                            },
                            for name in data.exams.iter() {
                                option {
                                    key: "{name}",
                                    value: "{name}",
                                    selected: Some(name) == selection.as_ref(),
                                    "{name}"
                                }
                            }
                        }
                    }
                    button {
                        id: "exam-start",
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: selection.is_none() || starting(),
                        onclick: start_exam,
                        "Start"
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            if let Some(err) = start_error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}
