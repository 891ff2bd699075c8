use time::OffsetDateTime;

/// Visual weight of a toast or status message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Danger,
    Secondary,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "severity-success",
            Severity::Info => "severity-info",
            Severity::Danger => "severity-danger",
            Severity::Secondary => "severity-secondary",
        }
    }
}

/// Transient user-facing message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Content of the persistent status region under the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub severity: Severity,
}

impl StatusLine {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    pub created_at: OffsetDateTime,
}

/// Visible toasts in arrival order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            notice,
            created_at: OffsetDateTime::now_utc(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_ids_increase() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::new("one", Severity::Info));
        let second = queue.push(Notice::new("two", Severity::Success));
        assert!(second > first);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::new("one", Severity::Info));
        let second = queue.push(Notice::new("two", Severity::Danger));
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts()[0].id, second);
        assert!(queue.dismiss(second));
        assert!(queue.is_empty());
    }
}
