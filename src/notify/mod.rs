pub mod console;
pub mod log;
pub mod multi;
pub mod noop;
pub mod traits;

pub use self::log::LogNotifier;
pub use console::ConsoleNotifier;
pub use multi::MultiNotifier;
pub use noop::NoopNotifier;
pub use traits::{Notifier, NotifyEvent};

/// Notifier for the command line: console lines unless `quiet`, always logs.
pub fn create_notifier(quiet: bool) -> Box<dyn Notifier> {
    if quiet {
        Box::new(LogNotifier::new())
    } else {
        Box::new(MultiNotifier::new(vec![
            Box::new(ConsoleNotifier),
            Box::new(LogNotifier::new()),
        ]))
    }
}
