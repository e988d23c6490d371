use super::traits::{Notifier, NotifyEvent};
use crate::ui::style as ui;

/// Prints each event as one styled line on stderr.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(event: &NotifyEvent) -> String {
        format!("{} {}", ui::status_mark(!event.is_failure()), event.message())
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, event: &NotifyEvent) {
        eprintln!("  {}", Self::render(event));
    }

    fn name(&self) -> &str {
        "console"
    }
}
