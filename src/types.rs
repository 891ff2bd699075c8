use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One generated report known to the client
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "papel")]
    pub role: String,
    pub pdf_name: String,
    pub url: String,
}

impl ReportRecord {
    pub fn new(name: impl Into<String>, role: impl Into<String>, pdf_name: impl Into<String>) -> Self {
        let pdf_name = pdf_name.into();
        Self {
            name: name.into(),
            role: role.into(),
            url: download_path(&pdf_name),
            pdf_name,
        }
    }

    /// File name offered to the user when saving the report
    pub fn download_filename(&self) -> String {
        let cleaned: String = self
            .name
            .trim()
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        if cleaned.is_empty() {
            self.pdf_name.clone()
        } else {
            format!("{cleaned}.pdf")
        }
    }
}

impl From<HistoryEntry> for ReportRecord {
    fn from(entry: HistoryEntry) -> Self {
        ReportRecord::new(entry.name, entry.role, entry.pdf_name)
    }
}

pub fn download_path(pdf_name: &str) -> String {
    format!("/download/{pdf_name}")
}

/// Raw element of the server's history listing
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "papel")]
    pub role: String,
    pub pdf_name: String,
}

/// Body returned by the generation endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub pdf_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Fields of the report form, sent as multipart text parts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub name: String,
    pub role: String,
    pub motivation: String,
    pub performance: String,
    pub goals: String,
}

impl ReportForm {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    /// Wire field names paired with their values, in form order
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("nome", self.name.as_str()),
            ("papel", self.role.as_str()),
            ("motivacao", self.motivation.as_str()),
            ("desempenho", self.performance.as_str()),
            ("objetivos", self.goals.as_str()),
        ]
    }

    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty() && !self.role.trim().is_empty()
    }
}

/// Persisted theme preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    /// Any non-dark mode becomes dark; dark becomes light.
    pub fn toggle(self) -> ThemeMode {
        match self {
            ThemeMode::Auto | ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(ThemeMode::Auto),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode '{other}'")),
        }
    }
}

/// Visual mode actually applied to the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_derives_download_url() {
        let record = ReportRecord::new("Ana", "Enfermeira", "r1.pdf");
        assert_eq!(record.url, "/download/r1.pdf");
        assert_eq!(record.download_filename(), "Ana.pdf");
    }

    #[test]
    fn test_download_filename_strips_separators() {
        let record = ReportRecord::new("a/b\\c", "x", "r2.pdf");
        assert_eq!(record.download_filename(), "a_b_c.pdf");

        let blank = ReportRecord::new("  ", "x", "r3.pdf");
        assert_eq!(blank.download_filename(), "r3.pdf");
    }

    #[test]
    fn test_history_entry_uses_wire_names() {
        let raw = r#"[{"nome":"Ana","papel":"Enfermeira","pdf_name":"r1.pdf"}]"#;
        let entries: Vec<HistoryEntry> = serde_json::from_str(raw).unwrap();
        let record = ReportRecord::from(entries[0].clone());
        assert_eq!(record.name, "Ana");
        assert_eq!(record.role, "Enfermeira");
        assert_eq!(record.url, "/download/r1.pdf");
    }

    #[test]
    fn test_generate_response_without_identifier() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(parsed.pdf_name, None);
        assert_eq!(parsed.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_form_fields_use_wire_names() {
        let mut form = ReportForm::new("Ana", "Enfermeira");
        form.goals = "Aprender".to_string();
        let names: Vec<&str> = form.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, ["nome", "papel", "motivacao", "desempenho", "objetivos"]);
        assert_eq!(form.fields()[4].1, "Aprender");
        assert!(form.is_ready());
        assert!(!ReportForm::new(" ", "Enfermeira").is_ready());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Auto.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light\n".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
