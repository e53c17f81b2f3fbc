//! UI collaborators the facade reports failures through.
//!
//! Hosts with a real UI implement `Navigator` and `Alerter` over their router
//! and dialog library. `LogNavigator` and `LogAlerter` are for hosts without
//! one; they only emit `tracing` events.

use std::fmt;

/// Moves the user to another route.
pub trait Navigator: Send + Sync {
    fn navigate_by_url(&self, url: &str);
}

/// Shows a blocking modal dialog.
pub trait Alerter: Send + Sync {
    fn fire(&self, alert: &Alert);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertIcon {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

impl fmt::Display for AlertIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertIcon::Success => "success",
            AlertIcon::Error => "error",
            AlertIcon::Warning => "warning",
            AlertIcon::Info => "info",
            AlertIcon::Question => "question",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub text: String,
    pub icon: AlertIcon,
}

impl Alert {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            text: text.into(),
            icon: AlertIcon::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_by_url(&self, url: &str) {
        tracing::info!(url, "navigate");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlerter;

impl Alerter for LogAlerter {
    fn fire(&self, alert: &Alert) {
        tracing::warn!(title = %alert.title, icon = %alert.icon, "{}", alert.text);
    }
}
