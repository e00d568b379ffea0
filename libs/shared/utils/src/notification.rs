// libs/shared/utils/src/notification.rs
//
// Toast-style user feedback. The booking flow reports outcomes through a
// `Notifier`; the default one writes them to the log.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Default toast surface, used by `BookingService::with_defaults`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success | Severity::Info => info!(%severity, "{}", message),
            Severity::Warning => warn!(%severity, "{}", message),
            Severity::Error => error!(%severity, "{}", message),
        }
    }
}
