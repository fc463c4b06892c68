//! Progress display while a tileset is composed and written

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar counting composed tiles
///
/// Hidden entirely when constructed quiet, so callers can report
/// unconditionally.
pub struct TilesetProgress {
    bar: ProgressBar,
}

impl TilesetProgress {
    /// Create a bar for `total` tiles labelled with the tileset name
    pub fn new(name: &str, total: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total)
        };
        bar.set_style(TILE_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Record one finished tile
    pub fn advance(&self, message: String) {
        self.bar.set_message(message);
        self.bar.inc(1);
    }

    /// Number of tiles recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with a final message
    pub fn finish(&self, message: String) {
        self.bar.finish_with_message(message);
    }
}
