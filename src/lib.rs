//! Client for a report-generation server: submits report forms, mirrors the
//! server's report history, handles downloads and deletions, and keeps the
//! light/dark theme preference.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod notify;
pub mod storage;
pub mod theme;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;

pub use api::{HttpReportApi, ReportApi};
pub use config::ClientConfig;
pub use controller::{
    ClientEvent, Confirmation, DownloadRequest, RemoveOutcome, ReportController, SubmitOutcome,
};
pub use error::{ClientError, ClientResult, ConfigError, StorageError};
pub use types::{ColorScheme, ReportForm, ReportRecord, ThemeMode};
