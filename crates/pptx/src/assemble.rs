//! Deck assembly: title selection, image resolution, and note joining.
//!
//! Consumes the parsed slide sequence by reference and produces the
//! render-time [`Deck`] model the writer consumes. All filesystem access is
//! limited to ordered, read-only existence checks for images.

use crate::images::find_slide_image;
use deck_core::{Error, Result, Slide};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Presentation-level options for deck assembly.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Override for the deck title. Defaults to the first slide's title.
    pub title: Option<String>,

    /// Subtitle on the title slide. Empty when not provided.
    pub subtitle: Option<String>,

    /// Directory searched for per-slide images.
    pub images_dir: Option<PathBuf>,
}

/// The render-time model: a title slide plus all content slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Title shown on the title slide.
    pub title: String,

    /// Subtitle shown on the title slide; empty means none.
    pub subtitle: String,

    /// Content slides in document order.
    pub slides: Vec<DeckSlide>,
}

impl Deck {
    /// Total slide count including the title slide.
    pub fn total_slides(&self) -> usize {
        self.slides.len() + 1
    }
}

/// One content slide, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSlide {
    /// 1-based position, also the key for the image-directory search.
    pub number: usize,

    /// Slide title.
    pub title: String,

    /// Bullet lines, rendered as a flat single-level list.
    pub bullets: Vec<String>,

    /// Speaker notes joined with newlines; `None` when the slide has none.
    pub notes: Option<String>,

    /// Resolved on-disk image path; `None` when nothing was found.
    pub image: Option<PathBuf>,
}

/// Assemble parsed slides into a deck.
///
/// Refuses an empty slide sequence: a deck consisting of only a title slide
/// is never produced.
pub fn assemble(slides: &[Slide], options: &AssembleOptions) -> Result<Deck> {
    if slides.is_empty() {
        return Err(Error::EmptyDeck);
    }

    let title = options
        .title
        .clone()
        .unwrap_or_else(|| slides[0].title.clone());
    let subtitle = options.subtitle.clone().unwrap_or_default();

    let slides = slides
        .iter()
        .enumerate()
        .map(|(idx, slide)| build_slide(slide, idx + 1, options.images_dir.as_deref()))
        .collect();

    Ok(Deck {
        title,
        subtitle,
        slides,
    })
}

fn build_slide(slide: &Slide, number: usize, images_dir: Option<&Path>) -> DeckSlide {
    let notes = if slide.notes.is_empty() {
        None
    } else {
        Some(slide.notes.join("\n"))
    };

    DeckSlide {
        number,
        title: slide.title.clone(),
        bullets: slide.bullets.clone(),
        notes,
        image: resolve_image(slide, number, images_dir),
    }
}

/// Image resolution precedence: an explicit reference is used iff its path
/// exists on disk. A dangling explicit reference does not fall back to the
/// directory search; the directory candidates are only consulted when the
/// slide carries no reference at all.
fn resolve_image(slide: &Slide, number: usize, images_dir: Option<&Path>) -> Option<PathBuf> {
    match &slide.image {
        Some(reference) => {
            let path = Path::new(reference);
            path.exists().then(|| path.to_path_buf())
        }
        None => images_dir.and_then(|dir| find_slide_image(dir, number)),
    }
}
