#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Info,
}

impl Severity {
    /// Suffix of the `alert-*` style class.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Font Awesome icon name shown in front of the message.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Warning => "exclamation-triangle",
            Severity::Info => "info-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertPhase {
    Visible,
    /// Lifetime elapsed; the element is fading out and is removed next.
    Fading,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub message: String,
    pub severity: Severity,
    pub phase: AlertPhase,
}

impl Alert {
    pub fn class(&self) -> String {
        let show = match self.phase {
            AlertPhase::Visible => " show",
            AlertPhase::Fading => "",
        };
        format!(
            "alert alert-{} alert-dismissible fade{show} success-alert",
            self.severity.as_str()
        )
    }
}

/// Single-slot alert holder. Showing a new alert drops the current one
/// immediately. Timer callbacks carry the id they were armed for, so a timer
/// outliving its alert is a no-op.
#[derive(Clone, Debug, Default)]
pub struct Notifier {
    current: Option<Alert>,
    next_id: u64,
}

impl Notifier {
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> AlertId {
        let id = AlertId(self.next_id);
        self.next_id += 1;
        self.current = Some(Alert {
            id,
            message: message.into(),
            severity,
            phase: AlertPhase::Visible,
        });
        id
    }

    /// Start the fade-out. Returns false when `id` is no longer current.
    pub fn fade(&mut self, id: AlertId) -> bool {
        match self.current.as_mut() {
            Some(alert) if alert.id == id => {
                alert.phase = AlertPhase::Fading;
                true
            }
            _ => false,
        }
    }

    /// Remove the alert if it is still the current one.
    pub fn retire(&mut self, id: AlertId) -> bool {
        if self.current.as_ref().is_some_and(|a| a.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_alert_replaces_first() {
        let mut notifier = Notifier::default();
        let first = notifier.show("one", Severity::Success);
        let second = notifier.show("two", Severity::Warning);
        assert_ne!(first, second);

        let current = notifier.current().expect("alert");
        assert_eq!(current.id, second);
        assert_eq!(current.message, "two");
    }

    #[test]
    fn stale_timers_do_not_touch_new_alert() {
        let mut notifier = Notifier::default();
        let first = notifier.show("one", Severity::Success);
        let second = notifier.show("two", Severity::Success);

        assert!(!notifier.fade(first));
        assert!(!notifier.retire(first));
        let current = notifier.current().expect("alert");
        assert_eq!(current.id, second);
        assert_eq!(current.phase, AlertPhase::Visible);
    }

    #[test]
    fn fades_then_retires() {
        let mut notifier = Notifier::default();
        let id = notifier.show("saved", Severity::Success);
        assert!(notifier.fade(id));
        assert_eq!(notifier.current().map(|a| a.phase), Some(AlertPhase::Fading));
        assert!(notifier.retire(id));
        assert!(notifier.current().is_none());
        assert!(!notifier.retire(id));
    }

    #[test]
    fn icon_and_class_follow_severity() {
        assert_eq!(Severity::Success.icon(), "check-circle");
        assert_eq!(Severity::Warning.icon(), "exclamation-triangle");
        assert_eq!(Severity::Info.icon(), "info-circle");

        let mut notifier = Notifier::default();
        let id = notifier.show("careful", Severity::Warning);
        assert_eq!(
            notifier.current().expect("alert").class(),
            "alert alert-warning alert-dismissible fade show success-alert"
        );
        notifier.fade(id);
        assert_eq!(
            notifier.current().expect("alert").class(),
            "alert alert-warning alert-dismissible fade success-alert"
        );
    }
}
