use crate::api::{HttpReportApi, ReportApi};
use crate::config::ClientConfig;
use crate::controller::{ClientEvent, DownloadRequest, ReportController};
use crate::error::ClientResult;
use crate::notify::{Notice, StatusLine, ToastQueue};
use crate::storage::PreferenceStore;
use crate::theme::{load_theme, resolve, root_class_script, theme_definition, toggle_theme};
use crate::types::{ColorScheme, ReportRecord, ThemeMode};
use crate::views::{ConfirmRemoval, HistoryView, ReportFormView, ToastStack};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

const APP_CSS: Asset = asset!("/assets/reportdesk.css");
const PREFERENCES_NAMESPACE: &str = "preferences";

const SYSTEM_SCHEME_WATCH: &str = r#"
const query = window.matchMedia('(prefers-color-scheme: dark)');
dioxus.send(query.matches);
query.addEventListener('change', (event) => dioxus.send(event.matches));
"#;

static SESSION: OnceCell<Session> = OnceCell::new();

/// What the app needs before its first render
struct Session {
    config: ClientConfig,
    api: Arc<dyn ReportApi>,
}

/// Build the HTTP client for `config` and run the app
pub fn launch(config: ClientConfig) -> ClientResult<()> {
    let api = HttpReportApi::new(config.server_url.clone())?;
    if SESSION
        .set(Session {
            config,
            api: Arc::new(api),
        })
        .is_err()
    {
        tracing::warn!("report desk already launched; keeping the first session");
    }
    dioxus::launch(App);
    Ok(())
}

#[component]
pub fn App() -> Element {
    let Some(session) = SESSION.get() else {
        return rsx! {
            div { class: "app-error", "Report server is not configured." }
        };
    };

    let records = use_signal(Vec::<ReportRecord>::new);
    let toasts = use_signal(ToastQueue::default);
    let status = use_signal(|| None::<StatusLine>);
    let pending_removal = use_signal(|| None::<ReportRecord>);

    let controller = use_report_controller(session, records, toasts, status);
    use_context_provider(|| controller);

    let store = use_hook(|| PreferenceStore::new(PREFERENCES_NAMESPACE));
    let theme = use_signal(|| load_theme(&store));
    let prefers_dark = use_system_dark_preference();
    let scheme = resolve(theme(), prefers_dark());
    use_root_theme_class(theme, prefers_dark);

    rsx! {
        ThemeStyles { scheme }
        div { class: "app-shell",
            AppHeader { scheme, theme, store }
            main { class: "app-main",
                ReportFormView { status }
                HistoryView { records: records(), pending_removal }
            }
        }
        ConfirmRemoval { pending_removal }
        ToastStack { toasts }
    }
}

/// Create the controller once, pump its events into signals and load the history
fn use_report_controller(
    session: &'static Session,
    records: Signal<Vec<ReportRecord>>,
    toasts: Signal<ToastQueue>,
    status: Signal<Option<StatusLine>>,
) -> ReportController {
    use_hook(move || {
        let (controller, mut events) =
            ReportController::new(session.api.clone(), session.config.auto_delete_delay);
        let toast_duration = session.config.toast_duration;

        let mut records = records;
        let mut status = status;
        spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    ClientEvent::History(snapshot) => records.set(snapshot),
                    ClientEvent::Notice(notice) => show_toast(toasts, notice, toast_duration),
                    ClientEvent::Status(line) => status.set(Some(line)),
                    ClientEvent::Download(request) => trigger_download(&request),
                }
            }
        });

        let loader = controller.clone();
        spawn(async move {
            loader.load_history().await;
        });

        controller
    })
}

fn show_toast(toasts: Signal<ToastQueue>, notice: Notice, duration: Duration) {
    let mut toasts = toasts;
    let id = toasts.with_mut(|queue| queue.push(notice));
    spawn(async move {
        tokio::time::sleep(duration).await;
        toasts.with_mut(|queue| queue.dismiss(id));
    });
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Save a file through a temporary anchor, like a user clicking a link
fn trigger_download(request: &DownloadRequest) {
    tracing::debug!(url = %request.url, filename = %request.filename, "starting download");
    let script = format!(
        "const link = document.createElement('a'); link.href = {}; link.download = {}; \
         document.body.appendChild(link); link.click(); document.body.removeChild(link);",
        js_string(&request.url),
        js_string(&request.filename),
    );
    let _ = document::eval(&script);
}

fn use_system_dark_preference() -> Signal<bool> {
    let prefers_dark = use_signal(|| false);
    use_hook(move || {
        let mut prefers_dark = prefers_dark;
        spawn(async move {
            let mut watcher = document::eval(SYSTEM_SCHEME_WATCH);
            while let Ok(matches) = watcher.recv::<bool>().await {
                prefers_dark.set(matches);
            }
        });
    });
    prefers_dark
}

fn use_root_theme_class(theme: Signal<ThemeMode>, prefers_dark: Signal<bool>) {
    use_effect(move || {
        let scheme = resolve(theme(), prefers_dark());
        let _ = document::eval(&root_class_script(scheme));
    });
}

#[component]
fn ThemeStyles(scheme: ColorScheme) -> Element {
    let definition = theme_definition(scheme);
    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(scheme: ColorScheme, theme: Signal<ThemeMode>, store: PreferenceStore) -> Element {
    let definition = theme_definition(scheme);
    let mut theme = theme;
    rsx! {
        header { class: "header",
            div { class: "header-content",
                h1 { class: "header-title", "Report Desk" }
                button {
                    class: "btn btn-ghost theme-toggle",
                    r#type: "button",
                    title: definition.toggle_label,
                    aria_label: definition.toggle_label,
                    onclick: move |_| {
                        let next = toggle_theme(&store, theme());
                        theme.set(next);
                    },
                    "{definition.toggle_icon}"
                }
            }
        }
    }
}
