use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use exam_core::model::{ExamFlow, Modal, ModalResult};

use crate::routes::Route;
use crate::views::modals::{ConfirmExitModal, EditQuestionModal};
use crate::vm::ExamPageVm;

#[component]
pub fn ExamView() -> Element {
    let mut flow = use_context::<Signal<ExamFlow>>();
    let navigator = use_navigator();
    let mut question_input = use_signal(String::new);

    let (loaded, vm, modal) = {
        let flow = flow.read();
        (
            flow.session().is_loaded(),
            ExamPageVm::from_session(flow.session()),
            flow.modal(),
        )
    };

    let mut open_modal = move |modal: Modal| {
        if let Err(err) = flow.write().open_modal(modal) {
            tracing::debug!(error = %err, "modal not opened");
        }
    };

    let edit_cancel = use_callback(move |()| {
        flow.write().resolve_modal(ModalResult::Cancel);
    });
    let edit_confirm = use_callback(move |()| {
        flow.write()
            .resolve_modal(ModalResult::Confirm(Some(question_input())));
    });
    let edit_input = use_callback(move |value: String| question_input.set(value));

    let exit_cancel = use_callback(move |()| {
        flow.write().resolve_modal(ModalResult::Cancel);
    });
    let exit_confirm = use_callback(move |()| {
        flow.write().resolve_modal(ModalResult::Confirm(None));
        navigator.replace(Route::for_screen(flow.read().screen()));
    });

    if !loaded {
        return rsx! {
            div { class: "page",
                p { "No exam in progress." }
                Link { to: Route::Home {}, "Back to home" }
            }
        };
    }

    let question_value = vm.question_value.clone();

    rsx! {
        div { class: "page exam",
            div { class: "exam-toolbar",
                button {
                    id: "exam-home",
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| open_modal(Modal::ConfirmExit),
                    "Home"
                }
                span { class: "exam-progress", "{vm.progress_label}" }
                button {
                    id: "exam-submit",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        match flow.write().submit() {
                            Ok(()) => {}
                            Err(err) => {
                                tracing::debug!(error = %err, "submit ignored");
                                return;
                            }
                        }
                        navigator.replace(Route::for_screen(flow.read().screen()));
                    },
                    "Submit"
                }
            }

            div { class: "exam-page",
                if let Some(src) = vm.image_src.as_ref() {
                    img { class: "exam-image", src: "{src}", alt: "{vm.page_label}" }
                }
                div { class: "exam-page-nav",
                    button {
                        id: "page-prev",
                        class: "btn",
                        r#type: "button",
                        disabled: !vm.has_prev_page,
                        onclick: move |_| {
                            flow.write().session_mut().prev_page();
                        },
                        "◀"
                    }
                    span { class: "exam-page-label", "{vm.page_label}" }
                    button {
                        id: "page-next",
                        class: "btn",
                        r#type: "button",
                        disabled: !vm.has_next_page,
                        onclick: move |_| {
                            flow.write().session_mut().next_page();
                        },
                        "▶"
                    }
                }
            }

            div { class: "exam-answers",
                div { class: "exam-question-nav",
                    button {
                        id: "question-prev",
                        class: "btn",
                        r#type: "button",
                        disabled: !vm.has_prev_question,
                        onclick: move |_| {
                            flow.write().session_mut().prev_question();
                        },
                        "◀"
                    }
                    button {
                        id: "question-edit",
                        class: "btn exam-question-label",
                        r#type: "button",
                        title: "Go to question",
                        onclick: move |_| {
                            question_input.set(question_value.clone());
                            open_modal(Modal::EditQuestion);
                        },
                        "{vm.question_label}"
                    }
                    button {
                        id: "question-next",
                        class: "btn",
                        r#type: "button",
                        disabled: !vm.has_next_question,
                        onclick: move |_| {
                            flow.write().session_mut().next_question();
                        },
                        "▶"
                    }
                }
                div { class: "exam-choices",
                    for answer in vm.answers.iter().cloned() {
                        button {
                            key: "{answer.label}",
                            id: "answer-{answer.label}",
                            class: "{answer.css_class()}",
                            r#type: "button",
                            onclick: move |_| {
                                flow.write().session_mut().select_answer(answer.choice);
                            },
                            "{answer.label}"
                        }
                    }
                }
            }

            match modal {
                Some(Modal::ConfirmExit) => rsx! {
                    ConfirmExitModal { on_cancel: exit_cancel, on_confirm: exit_confirm }
                },
                Some(Modal::EditQuestion) => rsx! {
                    EditQuestionModal {
                        value: question_input(),
                        on_input: edit_input,
                        on_cancel: edit_cancel,
                        on_confirm: edit_confirm,
                    }
                },
                None => rsx! {},
            }
        }
    }
}
