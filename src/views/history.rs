use crate::controller::{Confirmation, MSG_CONFIRM_REMOVE, ReportController};
use crate::types::ReportRecord;
use dioxus::prelude::*;

/// Report list, rebuilt from the latest snapshot on every change
#[component]
pub fn HistoryView(records: Vec<ReportRecord>, pending_removal: Signal<Option<ReportRecord>>) -> Element {
    rsx! {
        section { class: "card history",
            h2 { class: "section-title", "Generated reports" }
            ul { class: "history-list",
                if records.is_empty() {
                    li { class: "history-empty", "No reports generated yet." }
                }
                for record in records.iter() {
                    HistoryItem {
                        key: "{record.pdf_name}",
                        record: record.clone(),
                        pending_removal,
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryItem(record: ReportRecord, pending_removal: Signal<Option<ReportRecord>>) -> Element {
    let controller = use_context::<ReportController>();
    let mut pending_removal = pending_removal;
    let pdf_name = record.pdf_name.clone();
    let to_confirm = record.clone();

    rsx! {
        li { class: "history-row",
            span { class: "history-label", "{record.name} - {record.role}" }
            div { class: "history-actions",
                button {
                    class: "btn btn-primary btn-small",
                    r#type: "button",
                    onclick: move |_| {
                        controller.download(&pdf_name);
                    },
                    "Download"
                }
                button {
                    class: "btn btn-danger btn-small",
                    r#type: "button",
                    onclick: move |_| pending_removal.set(Some(to_confirm.clone())),
                    "Remove"
                }
            }
        }
    }
}

/// Confirmation dialog guarding the remove action
#[component]
pub fn ConfirmRemoval(pending_removal: Signal<Option<ReportRecord>>) -> Element {
    let controller = use_context::<ReportController>();
    let mut pending_removal = pending_removal;
    let Some(record) = pending_removal() else {
        return rsx! {};
    };

    let answer = move |confirmation: Confirmation| {
        let controller = controller.clone();
        let pdf_name = record.pdf_name.clone();
        pending_removal.set(None);
        spawn(async move {
            controller.remove(&pdf_name, confirmation).await;
        });
    };
    let mut accept = answer.clone();
    let mut decline = answer;

    rsx! {
        div { class: "dialog-overlay", role: "dialog", aria_modal: "true",
            div { class: "dialog-panel",
                p { class: "dialog-message", "{MSG_CONFIRM_REMOVE}" }
                div { class: "dialog-actions",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| decline(Confirmation::Declined),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| accept(Confirmation::Accepted),
                        "Remove"
                    }
                }
            }
        }
    }
}
