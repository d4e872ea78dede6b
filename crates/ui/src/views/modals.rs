use dioxus::prelude::*;

#[component]
pub fn ConfirmExitModal(on_cancel: Callback<()>, on_confirm: Callback<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Leave the exam?" }
                p { class: "modal-body",
                    "Your answers will be discarded and you will return to the home screen."
                }
                div { class: "modal-actions",
                    button {
                        id: "exit-confirm",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Yes"
                    }
                    button {
                        id: "exit-cancel",
                        class: "btn modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "No"
                    }
                }
            }
        }
    }
}

#[component]
pub fn EditQuestionModal(
    value: String,
    on_input: Callback<String>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Go to question" }
                input {
                    id: "question-input",
                    class: "modal-input",
                    r#type: "text",
                    inputmode: "numeric",
                    value: "{value}",
                    oninput: move |evt| {
                        let digits: String = evt.value().chars().filter(char::is_ascii_digit).collect();
                        on_input.call(digits);
                    },
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            on_confirm.call(());
                        }
                    },
                }
                div { class: "modal-actions",
                    button {
                        id: "question-go",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Go"
                    }
                    button {
                        id: "question-cancel",
                        class: "btn modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
