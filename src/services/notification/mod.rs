/// Receives user-facing outcomes ("slot already booked", "invalid
/// configuration") as plain strings. Presentation is up to the implementor.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Service for routing calendar messages into the application log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::warn!("{}", message);
    }
}
