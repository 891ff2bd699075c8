pub mod history;
pub mod report_form;
pub mod toasts;

pub use history::{ConfirmRemoval, HistoryView};
pub use report_form::ReportFormView;
pub use toasts::ToastStack;
