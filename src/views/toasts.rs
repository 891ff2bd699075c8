use crate::notify::ToastQueue;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const TOAST_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]");

fn toast_time(created_at: OffsetDateTime) -> String {
    let local = match UtcOffset::current_local_offset() {
        Ok(offset) => created_at.to_offset(offset),
        Err(_) => created_at,
    };
    local.format(TOAST_TIME_FORMAT).unwrap_or_default()
}

#[component]
pub fn ToastStack(toasts: Signal<ToastQueue>) -> Element {
    let mut toasts = toasts;
    let snapshot = toasts();
    rsx! {
        div { class: "toast-stack", aria_live: "assertive",
            for toast in snapshot.toasts().iter() {
                div {
                    key: "{toast.id}",
                    class: format_args!("toast {}", toast.notice.severity.css_class()),
                    role: "alert",
                    div { class: "toast-body",
                        span { class: "toast-time", "{toast_time(toast.created_at)}" }
                        span { class: "toast-message", "{toast.notice.message}" }
                    }
                    button {
                        class: "toast-close btn-ghost",
                        r#type: "button",
                        aria_label: "Dismiss",
                        onclick: {
                            let id = toast.id;
                            move |_| {
                                toasts.with_mut(|queue| queue.dismiss(id));
                            }
                        },
                        dangerous_inner_html: "&times;"
                    }
                }
            }
        }
    }
}
