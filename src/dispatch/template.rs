//! Template method: a fixed download loop with overridable hooks.

use tracing::info;

/// Progress increment applied by [`Downloader::start_download`].
pub const PROGRESS_STEP: u8 = 10;

/// A download whose progress reporting is supplied by the implementor.
///
/// `start_download` is the template: it advances progress from 0 to 100 in
/// steps of [`PROGRESS_STEP`], calling `on_percentage` after every step and
/// `on_done` exactly once at the end.
pub trait Downloader {
    fn url(&self) -> &str;

    fn on_percentage(&mut self, percentage: u8);

    fn on_done(&mut self);

    fn start_download(&mut self) {
        info!(url = self.url(), "Start download");
        let mut percentage = 0;
        while percentage < 100 {
            percentage += PROGRESS_STEP;
            self.on_percentage(percentage);
        }
        self.on_done();
    }
}

/// Downloader that records the progress it was told about.
///
/// # Example
///
/// ```rust
/// use patterns::dispatch::{Downloader, VideoDownloader};
///
/// let mut video = VideoDownloader::new("https://video");
/// video.start_download();
///
/// assert!(video.is_done());
/// assert_eq!(video.progress().last(), Some(&100));
/// ```
#[derive(Clone, Debug)]
pub struct VideoDownloader {
    url: String,
    progress: Vec<u8>,
    done: bool,
}

impl VideoDownloader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            progress: Vec::new(),
            done: false,
        }
    }

    pub fn progress(&self) -> &[u8] {
        &self.progress
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Downloader for VideoDownloader {
    fn url(&self) -> &str {
        &self.url
    }

    fn on_percentage(&mut self, percentage: u8) {
        self.progress.push(percentage);
    }

    fn on_done(&mut self) {
        info!(url = %self.url, "Download done");
        self.done = true;
    }
}
