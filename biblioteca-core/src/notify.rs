//! Toast notifications and the delete confirmation modal

use serde::{Deserialize, Serialize};

/// Toast severity, doubling as its CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A visible toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    /// Identifies this toast to its dismiss timer
    pub generation: u64,
}

/// The single toast slot. A new toast replaces whatever is showing.
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    generation: u64,
}

impl ToastSlot {
    /// Show a toast, returning the generation its timer must present to dismiss it
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.generation += 1;
        self.current = Some(Toast {
            message: message.into(),
            severity,
            generation: self.generation,
        });
        self.generation
    }

    /// Hide the toast if it is still the one identified by `generation`
    ///
    /// Returns whether anything was hidden.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(toast) if toast.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

/// Delete confirmation dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmModal {
    pending: Option<i64>,
}

impl ConfirmModal {
    /// Remember the target and open the dialog
    pub fn open(&mut self, id: i64) {
        self.pending = Some(id);
    }

    /// Close the dialog, discarding the pending target
    pub fn close(&mut self) {
        self.pending = None;
    }

    /// Close the dialog and hand back the target to delete, if any
    pub fn confirm(&mut self) -> Option<i64> {
        self.pending.take()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<i64> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_replaces_current() {
        let mut slot = ToastSlot::default();
        let first = slot.show("primeiro", Severity::Success);
        let second = slot.show("segundo", Severity::Error);

        let toast = slot.current().unwrap();
        assert_eq!(toast.message, "segundo");
        assert_eq!(toast.severity, Severity::Error);

        // the first timer must not hide the second toast
        assert!(!slot.dismiss(first));
        assert!(slot.current().is_some());
        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_modal_cancel_discards_target() {
        let mut modal = ConfirmModal::default();
        modal.open(1);
        assert!(modal.is_open());
        assert_eq!(modal.pending(), Some(1));

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn test_modal_confirm_takes_target() {
        let mut modal = ConfirmModal::default();
        modal.open(42);
        assert_eq!(modal.confirm(), Some(42));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_severity_classes() {
        assert_eq!(Severity::Success.css_class(), "success");
        assert_eq!(Severity::Error.css_class(), "error");
        assert_eq!(Severity::Warning.css_class(), "warning");
    }
}
