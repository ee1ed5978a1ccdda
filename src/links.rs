//! Opening external links (resume download, contact details).

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::desktop::Link;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("could not open {url}: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait LinkOpener: std::fmt::Debug {
    fn open(&mut self, url: &str) -> Result<(), LinkError>;
}

/// Hands the URL to the system browser.
#[derive(Debug, Default)]
pub struct BrowserLinkOpener;

impl LinkOpener for BrowserLinkOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError> {
        webbrowser::open(url).map_err(|source| LinkError::Browser {
            url: url.to_string(),
            source,
        })
    }
}

/// Remembers every URL instead of opening it. Clones share the record.
#[derive(Debug, Default, Clone)]
pub struct RecordingLinkOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingLinkOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|list| list.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError> {
        if let Ok(mut list) = self.opened.lock() {
            list.push(url.to_string());
        }
        Ok(())
    }
}

/// Open `link`, logging instead of failing.
pub fn open_link(opener: &mut dyn LinkOpener, link: Link) {
    let url = link.url();
    match opener.open(url) {
        Ok(()) => tracing::info!(url, "opened link"),
        Err(err) => tracing::warn!(error = %err, "link open failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FailingOpener;

    impl LinkOpener for FailingOpener {
        fn open(&mut self, url: &str) -> Result<(), LinkError> {
            Err(LinkError::Browser {
                url: url.to_string(),
                source: std::io::Error::other("no browser"),
            })
        }
    }

    #[test]
    fn recording_opener_shares_history_between_clones() {
        let recorder = RecordingLinkOpener::default();
        let mut handle = recorder.clone();
        open_link(&mut handle, Link::Github);
        assert_eq!(recorder.opened(), vec![Link::Github.url().to_string()]);
    }

    #[test]
    fn failures_are_swallowed() {
        open_link(&mut FailingOpener, Link::Email);
    }
}
