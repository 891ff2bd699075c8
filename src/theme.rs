use crate::storage::PreferenceStore;
use crate::types::{ColorScheme, ThemeMode};

pub const THEME_KEY: &str = "theme";
pub const DARK_ROOT_CLASS: &str = "dark-mode";

pub struct ThemeDefinition {
    pub css: &'static str,
    pub root_class: &'static str,
    /// Icon for the toggle, pointing at the scheme the next click reaches
    pub toggle_icon: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(scheme: ColorScheme) -> ThemeDefinition {
    match scheme {
        ColorScheme::Dark => ThemeDefinition {
            css: DARK_THEME,
            root_class: DARK_ROOT_CLASS,
            toggle_icon: "\u{2600}\u{fe0f}",
            toggle_label: "Switch to light theme",
        },
        ColorScheme::Light => ThemeDefinition {
            css: LIGHT_THEME,
            root_class: "",
            toggle_icon: "\u{1f319}",
            toggle_label: "Switch to dark theme",
        },
    }
}

/// Effective scheme for a stored mode; the system preference only matters in `Auto`.
pub fn resolve(mode: ThemeMode, system_prefers_dark: bool) -> ColorScheme {
    match mode {
        ThemeMode::Dark => ColorScheme::Dark,
        ThemeMode::Light => ColorScheme::Light,
        ThemeMode::Auto if system_prefers_dark => ColorScheme::Dark,
        ThemeMode::Auto => ColorScheme::Light,
    }
}

/// Script that leaves only this scheme's class on the document root
pub fn root_class_script(scheme: ColorScheme) -> String {
    let quoted = |class: &str| serde_json::Value::from(class).to_string();
    let mut script = format!(
        "const root = document.documentElement; root.classList.remove({});",
        quoted(DARK_ROOT_CLASS)
    );
    let root_class = theme_definition(scheme).root_class;
    if !root_class.is_empty() {
        script.push_str(&format!(" root.classList.add({});", quoted(root_class)));
    }
    script
}

/// Read the persisted mode once at startup
pub fn load_theme(store: &PreferenceStore) -> ThemeMode {
    store
        .get(THEME_KEY)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

/// Advance the mode and persist the result; storage failures keep the new mode.
pub fn toggle_theme(store: &PreferenceStore, current: ThemeMode) -> ThemeMode {
    let next = current.toggle();
    if let Err(err) = store.set(THEME_KEY, next.as_str()) {
        tracing::warn!(error = %err, "failed to persist theme preference");
    }
    tracing::debug!(from = %current, to = %next, "theme toggled");
    next
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #121212;
    --color-bg-secondary: #1e1e1e;
    --color-text-primary: #f1f1f1;
    --color-text-muted: #a8a8a8;
    --color-border: #2f2f2f;
    --color-input-bg: #1a1a1a;
    --color-input-border: #3a3a3a;
    --color-accent: #4c8dff;
    --color-success: #2fa36b;
    --color-info: #2b8fb3;
    --color-danger: #d9534f;
    --color-secondary: #5c636a;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.card { background: var(--color-bg-secondary); border-color: var(--color-border); }
.form-field input,
.form-field textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f5f6f8;
    --color-bg-secondary: #ffffff;
    --color-text-primary: #1b1f24;
    --color-text-muted: #6c757d;
    --color-border: #dee2e6;
    --color-input-bg: #ffffff;
    --color-input-border: #ced4da;
    --color-accent: #0d6efd;
    --color-success: #198754;
    --color-info: #0dcaf0;
    --color-danger: #dc3545;
    --color-secondary: #6c757d;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.card { background: var(--color-bg-secondary); border-color: var(--color-border); }
.form-field input,
.form-field textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_follows_system_only_in_auto() {
        assert_eq!(resolve(ThemeMode::Auto, true), ColorScheme::Dark);
        assert_eq!(resolve(ThemeMode::Auto, false), ColorScheme::Light);
        assert_eq!(resolve(ThemeMode::Light, true), ColorScheme::Light);
        assert_eq!(resolve(ThemeMode::Dark, false), ColorScheme::Dark);
    }

    #[test]
    fn test_toggle_icon_points_at_next_scheme() {
        assert_eq!(theme_definition(ColorScheme::Dark).toggle_icon, "\u{2600}\u{fe0f}");
        assert_eq!(theme_definition(ColorScheme::Light).toggle_icon, "\u{1f319}");
        assert_eq!(theme_definition(ColorScheme::Dark).root_class, DARK_ROOT_CLASS);
    }

    #[test]
    fn test_root_class_script_follows_definition() {
        let dark = root_class_script(ColorScheme::Dark);
        assert!(dark.contains(r#"root.classList.remove("dark-mode");"#));
        assert!(dark.ends_with(r#"root.classList.add("dark-mode");"#));

        let light = root_class_script(ColorScheme::Light);
        assert!(light.contains(r#"root.classList.remove("dark-mode");"#));
        assert!(!light.contains("classList.add"));
    }
}
