//! Spinner shown while the fast tier is pending

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// An indicatif spinner on stderr. Does nothing when created quiet.
pub struct FastSpinner {
    bar: Option<ProgressBar>,
}

impl FastSpinner {
    pub fn start(message: &str, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner line before the answer is printed.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
