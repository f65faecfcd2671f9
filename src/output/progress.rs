//! Progress reporting for guess scoring

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for scoring `len` guesses
///
/// Hidden when `quiet` is set or stderr is not a terminal.
#[must_use]
pub fn scoring_bar(len: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "Scoring guesses: |{bar:30.cyan/blue}| {percent}% ({pos}/{len})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░"),
    );
    pb
}
