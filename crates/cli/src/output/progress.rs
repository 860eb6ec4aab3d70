//! Spinner shown while waiting on the server

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::OutputConfig;

const TICK: Duration = Duration::from_millis(100);

/// Spinner for one request. Cleared on `finish` or drop; never drawn in
/// quiet or JSON mode or with `--no-progress`.
#[derive(Debug)]
pub struct Spinner(Option<ProgressBar>);

impl Spinner {
    pub fn start(config: &OutputConfig, message: &str) -> Self {
        if config.quiet || config.json || config.no_progress {
            return Self(None);
        }

        let bar = ProgressBar::new_spinner().with_message(message.to_string());
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.enable_steady_tick(TICK);
        Self(Some(bar))
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.0 {
            bar.finish_and_clear();
        }
    }

    fn is_drawn(&self) -> bool {
        self.0.is_some()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(config: OutputConfig) -> bool {
        Spinner::start(&config, "loading").is_drawn()
    }

    #[test]
    fn test_hidden_in_quiet_json_and_no_progress_modes() {
        assert!(!drawn(OutputConfig {
            quiet: true,
            ..Default::default()
        }));
        assert!(!drawn(OutputConfig {
            json: true,
            ..Default::default()
        }));
        assert!(!drawn(OutputConfig {
            no_progress: true,
            ..Default::default()
        }));
    }

    #[test]
    fn test_drawn_by_default() {
        let spinner = Spinner::start(&OutputConfig::default(), "loading");
        assert!(spinner.is_drawn());
        spinner.finish();
    }
}
