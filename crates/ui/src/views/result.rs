use dioxus::prelude::*;
use dioxus_router::use_navigator;
use exam_core::model::{ExamFlow, Modal, ModalResult};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::modals::ConfirmExitModal;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ResultRowVm, ResultVm};

#[component]
pub fn ResultView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut flow = use_context::<Signal<ExamFlow>>();
    let navigator = use_navigator();
    let exam_service = ctx.exam_service();

    let resource = use_resource(move || {
        let exam_service = exam_service.clone();
        // Grade a snapshot; dialogs opening on this screen must not re-grade.
        let session = flow.peek().session().clone();
        async move {
            let graded = exam_service.grade(&session).await;
            Ok::<_, ViewError>(ResultVm::from(&graded))
        }
    });
    let state = view_state_from_resource(&resource);
    let modal = flow.read().modal();

    let exit_cancel = use_callback(move |()| {
        flow.write().resolve_modal(ModalResult::Cancel);
    });
    let exit_confirm = use_callback(move |()| {
        flow.write().resolve_modal(ModalResult::Confirm(None));
        navigator.replace(Route::for_screen(flow.read().screen()));
    });

    rsx! {
        div { class: "page result",
            div { class: "result-toolbar",
                button {
                    id: "result-home",
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = flow.write().open_modal(Modal::ConfirmExit) {
                            tracing::debug!(error = %err, "modal not opened");
                        }
                    },
                    "Home"
                }
                button {
                    id: "result-return",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = flow.write().return_to_exam() {
                            tracing::debug!(error = %err, "return ignored");
                            return;
                        }
                        navigator.replace(Route::for_screen(flow.read().screen()));
                    },
                    "Back to exam"
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Grading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    ResultDetails { vm }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            if modal == Some(Modal::ConfirmExit) {
                ConfirmExitModal { on_cancel: exit_cancel, on_confirm: exit_confirm }
            }
        }
    }
}

#[component]
fn ResultDetails(vm: ResultVm) -> Element {
    rsx! {
        h2 { class: "result-summary", "{vm.summary_line}" }
        dl { class: "result-meta",
            dt { "Submitted" }
            dd { "{vm.submitted_at_str}" }
            if let Some(elapsed) = vm.elapsed_str.as_ref() {
                dt { "Time taken" }
                dd { "{elapsed}" }
            }
        }
        if vm.key_missing {
            p { class: "result-warning",
                "No answer key was found for this exam, so every question is marked incorrect."
            }
        }
        table { class: "result-table",
            thead {
                tr {
                    th { "Question" }
                    th { "Your answer" }
                    th { "Correct answer" }
                }
            }
            tbody {
                for row in vm.rows.iter().cloned() {
                    ResultRow { key: "{row.question}", row }
                }
            }
        }
    }
}

#[component]
fn ResultRow(row: ResultRowVm) -> Element {
    let verdict = if row.is_correct { "correct" } else { "incorrect" };
    rsx! {
        tr {
            td { "{row.question}" }
            td { class: "{verdict}", "{row.user_answer}" }
            td { "{row.correct_answer}" }
        }
    }
}
