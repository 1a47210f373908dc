//! Progress spinner for corpus scans.
//!
//! The spinner is drawn only when the `ui` feature is on, progress is
//! enabled, stdout is a TTY, and neither `NO_COLOR` nor `SENTMD_NO_PROGRESS`
//! is set. Otherwise every method is a no-op.

#[cfg(feature = "ui")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "ui")]
use std::io::IsTerminal;
#[cfg(feature = "ui")]
use std::time::Duration;

pub(crate) struct Progress {
    #[cfg(feature = "ui")]
    bar: Option<ProgressBar>,
}

impl Progress {
    #[cfg(feature = "ui")]
    pub(crate) fn new(enabled: bool) -> Self {
        let bar = (enabled && is_interactive()).then(|| {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
                pb.set_style(
                    style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]),
                );
            }
            pb.enable_steady_tick(Duration::from_millis(80));
            pb
        });
        Self { bar }
    }

    #[cfg(not(feature = "ui"))]
    pub(crate) fn new(_enabled: bool) -> Self {
        Self {}
    }

    pub(crate) fn set_message(&self, msg: impl Into<String>) {
        #[cfg(feature = "ui")]
        if let Some(bar) = &self.bar {
            bar.set_message(msg.into());
        }
        #[cfg(not(feature = "ui"))]
        let _ = msg;
    }

    pub(crate) fn finish_and_clear(&self) {
        #[cfg(feature = "ui")]
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    #[cfg(test)]
    fn is_drawn(&self) -> bool {
        #[cfg(feature = "ui")]
        return self.bar.is_some();
        #[cfg(not(feature = "ui"))]
        return false;
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.finish_and_clear();
    }
}

#[cfg(feature = "ui")]
fn is_interactive() -> bool {
    std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none()
        && std::env::var_os("SENTMD_NO_PROGRESS").is_none()
}
