use super::traits::{Notifier, NotifyEvent};

/// Discards every event.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    #[inline(always)]
    fn notify(&self, _event: &NotifyEvent) {}

    fn name(&self) -> &str {
        "noop"
    }
}
