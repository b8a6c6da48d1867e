//! Candidate filename search for slide images.
//!
//! When a slide carries no explicit image reference, the image directory is
//! searched with a fixed, ordered list of filenames derived from the slide's
//! 1-based position. Order is significant: the first existing candidate wins
//! and the search stops.

use std::path::{Path, PathBuf};

/// Extensions tried for each candidate stem, in order.
const CANDIDATE_EXTENSIONS: &[&str] = &["png", "jpg"];

/// Ordered candidate filenames for the slide at 1-based position `number`:
/// bare number, `slide_N`, `image_N`, then the zero-padded two-digit form,
/// each with `.png` before `.jpg`.
pub fn image_candidates(number: usize) -> Vec<String> {
    let stems = [
        format!("{number}"),
        format!("slide_{number}"),
        format!("image_{number}"),
        format!("{number:02}"),
    ];

    stems
        .iter()
        .flat_map(|stem| {
            CANDIDATE_EXTENSIONS
                .iter()
                .map(move |ext| format!("{stem}.{ext}"))
        })
        .collect()
}

/// Search `dir` for the first existing candidate for the given slide
/// position. Returns `None` when no candidate exists.
pub fn find_slide_image(dir: &Path, number: usize) -> Option<PathBuf> {
    image_candidates(number)
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}
