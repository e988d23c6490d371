use super::traits::{Notifier, NotifyEvent};

/// Fans every event out to several notifiers, in order.
pub struct MultiNotifier {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl MultiNotifier {
    pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
        Self { notifiers }
    }
}

impl Notifier for MultiNotifier {
    fn notify(&self, event: &NotifyEvent) {
        for notifier in &self.notifiers {
            notifier.notify(event);
        }
    }

    fn name(&self) -> &str {
        "multi"
    }
}
