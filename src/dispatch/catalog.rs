//! Fixed table of redirect targets.

/// The download URLs the mock redirects to once an endpoint "succeeds".
const VIDEO_URLS: [&str; 9] = [
    "https://www.pexels.com/download/video/17169505/",
    "https://www.pexels.com/download/video/27831511/",
    "https://www.pexels.com/download/video/15283135/",
    "https://www.pexels.com/download/video/15283202/",
    "https://www.pexels.com/download/video/15283199/",
    "https://www.pexels.com/download/video/15283174/",
    "https://www.pexels.com/download/video/15612910/",
    "https://www.pexels.com/download/video/20422317/",
    "https://www.pexels.com/download/video/14993748/",
];

/// Read-only catalog mapping video ids onto the URL table.
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoCatalog;

impl VideoCatalog {
    pub fn new() -> Self {
        Self
    }

    /// URL for a video id. Ids wrap around the table (`id mod 9`).
    pub fn url_for(&self, id: u16) -> &'static str {
        VIDEO_URLS[id as usize % VIDEO_URLS.len()]
    }
}
