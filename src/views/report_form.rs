use crate::controller::ReportController;
use crate::notify::StatusLine;
use crate::types::ReportForm;
use dioxus::prelude::*;

#[component]
pub fn ReportFormView(status: Signal<Option<StatusLine>>) -> Element {
    let controller = use_context::<ReportController>();
    let mut name = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut motivation = use_signal(String::new);
    let mut performance = use_signal(String::new);
    let mut goals = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let current_form = move || ReportForm {
        name: name(),
        role: role(),
        motivation: motivation(),
        performance: performance(),
        goals: goals(),
    };
    let ready = current_form().is_ready();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let form = current_form();
        if !form.is_ready() {
            return;
        }
        submitting.set(true);
        let controller = controller.clone();
        spawn(async move {
            controller.submit(form).await;
            submitting.set(false);
        });
    };

    rsx! {
        section { class: "card report-form",
            h2 { class: "section-title", "New report" }
            form { onsubmit: on_submit,
                div { class: "form-row",
                    label { class: "form-field",
                        span { "Name" }
                        input {
                            r#type: "text", name: "nome", required: true,
                            value: "{name}", oninput: move |ev| name.set(ev.value()),
                        }
                    }
                    label { class: "form-field",
                        span { "Role" }
                        input {
                            r#type: "text", name: "papel", required: true,
                            value: "{role}", oninput: move |ev| role.set(ev.value()),
                        }
                    }
                }
                label { class: "form-field",
                    span { "Motivation" }
                    textarea {
                        name: "motivacao", rows: "3",
                        value: "{motivation}", oninput: move |ev| motivation.set(ev.value()),
                    }
                }
                label { class: "form-field",
                    span { "Performance" }
                    textarea {
                        name: "desempenho", rows: "3",
                        value: "{performance}", oninput: move |ev| performance.set(ev.value()),
                    }
                }
                label { class: "form-field",
                    span { "Goals" }
                    textarea {
                        name: "objetivos", rows: "3",
                        value: "{goals}", oninput: move |ev| goals.set(ev.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting() || !ready,
                    if submitting() { "Generating…" } else { "Generate report" }
                }
            }
            StatusBanner { status: status() }
        }
    }
}

#[component]
fn StatusBanner(status: Option<StatusLine>) -> Element {
    let Some(line) = status else {
        return rsx! {};
    };
    rsx! {
        div { class: format_args!("status-line {}", line.severity.css_class()), role: "status",
            "{line.message}"
        }
    }
}
