//! Spinner for backend round trips

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a steady-tick spinner with the given message
///
/// Call `finish_and_clear` before printing results.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
