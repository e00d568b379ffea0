pub mod notification;
pub mod test_utils;

pub use notification::{Notifier, Severity, TracingNotifier};
