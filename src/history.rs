use crate::types::ReportRecord;

/// Ordered list of known reports, most recent first.
///
/// Records are addressed by `pdf_name`; removal of an absent identifier is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportHistory {
    records: Vec<ReportRecord>,
}

impl ReportHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh server listing
    pub fn replace(&mut self, records: Vec<ReportRecord>) {
        self.records = records;
    }

    /// Insert at the front, dropping any stale record with the same identifier
    pub fn prepend(&mut self, record: ReportRecord) {
        self.records.retain(|existing| existing.pdf_name != record.pdf_name);
        self.records.insert(0, record);
    }

    pub fn remove(&mut self, pdf_name: &str) -> Option<ReportRecord> {
        let index = self.records.iter().position(|r| r.pdf_name == pdf_name)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, pdf_name: &str) -> Option<&ReportRecord> {
        self.records.iter().find(|r| r.pdf_name == pdf_name)
    }

    pub fn contains(&self, pdf_name: &str) -> bool {
        self.get(pdf_name).is_some()
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ReportRecord {
        ReportRecord::new("Ana", "Enfermeira", id)
    }

    #[test]
    fn test_prepend_keeps_newest_first() {
        let mut history = ReportHistory::new();
        history.prepend(record("a.pdf"));
        history.prepend(record("b.pdf"));
        let ids: Vec<&str> = history.records().iter().map(|r| r.pdf_name.as_str()).collect();
        assert_eq!(ids, ["b.pdf", "a.pdf"]);
    }

    #[test]
    fn test_prepend_replaces_duplicate_identifier() {
        let mut history = ReportHistory::new();
        history.prepend(record("a.pdf"));
        history.prepend(record("b.pdf"));
        history.prepend(record("a.pdf"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].pdf_name, "a.pdf");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut history = ReportHistory::new();
        history.prepend(record("a.pdf"));
        assert!(history.remove("a.pdf").is_some());
        assert!(history.remove("a.pdf").is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn test_replace_discards_previous_records() {
        let mut history = ReportHistory::new();
        history.prepend(record("old.pdf"));
        history.replace(vec![record("x.pdf"), record("y.pdf")]);
        assert!(!history.contains("old.pdf"));
        assert_eq!(history.records()[1].pdf_name, "y.pdf");
    }
}
