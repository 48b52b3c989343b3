use std::io::{self, Write};

/// Delivery channel for the rollup message.
pub trait Notifier {
    /// Delivers `message`. Delivery problems are reported by the implementation, never returned.
    fn send(&self, message: &str);
}

/// Placeholder channel that prints the message instead of posting it to a webhook.
#[derive(Debug, Default)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn send(&self, message: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "\nNotification preview:\n{message}") {
            tracing::error!(error = %e, "failed to print notification");
        }
    }
}
