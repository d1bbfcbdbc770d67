use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};
use luis_botmock::FetchEvent;
use tokio::sync::mpsc::UnboundedReceiver;

/// Terminal spinner; a no-op when stderr is not a TTY or output is quiet.
#[derive(Clone)]
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str, quiet: bool) -> Self {
        if quiet || !std::io::stderr().is_terminal() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    pub fn finish_ok(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

/// Drain fetch events until every sender is dropped. Returns the number of
/// assets fetched.
pub async fn report_fetch_events(mut rx: UnboundedReceiver<FetchEvent>, progress: Progress) -> usize {
    let mut fetched = 0;
    while let Some(event) = rx.recv().await {
        match event {
            FetchEvent::AssetFetched { asset } => {
                fetched += 1;
                tracing::info!(%asset, "fetched {asset}");
                progress.set_message(&format!("fetched {asset}"));
            }
            FetchEvent::Failed { asset, message } => {
                tracing::warn!(%asset, %message, "failed to fetch {asset}");
            }
        }
    }
    fetched
}
