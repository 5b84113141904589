//! Toast Notifications
//!
//! One notification per screen; showing a new one replaces the current one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast success",
            Severity::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationState {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
}

impl NotificationState {
    pub fn success(message: impl Into<String>) -> Self {
        Self { open: true, message: message.into(), severity: Severity::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { open: true, message: message.into(), severity: Severity::Error }
    }

    /// Hide, keeping the last message for the closing animation
    pub fn close(&mut self) {
        self.open = false;
    }
}
