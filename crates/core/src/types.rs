//! Domain types for representing parsed slide content.

use serde::{Deserialize, Serialize};

/// A single parsed slide: the render-independent representation of one
/// content slide in the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide title, taken from the heading line that opened the slide.
    pub title: String,

    /// Bullet text in document order. May be empty.
    pub bullets: Vec<String>,

    /// Speaker note lines in document order. Joined with newlines at
    /// render time. May be empty.
    pub notes: Vec<String>,

    /// Optional image reference (path or URL). A later image line on the
    /// same slide overwrites an earlier one.
    pub image: Option<String>,
}

impl Slide {
    /// Create a new slide with the given title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bullets: Vec::new(),
            notes: Vec::new(),
            image: None,
        }
    }

    /// Append a bullet line to this slide.
    pub fn add_bullet(&mut self, text: impl Into<String>) {
        self.bullets.push(text.into());
    }

    /// Append a speaker note line to this slide.
    pub fn add_note(&mut self, text: impl Into<String>) {
        self.notes.push(text.into());
    }

    /// Set the slide image, replacing any previous reference.
    pub fn set_image(&mut self, reference: impl Into<String>) {
        self.image = Some(reference.into());
    }

    /// Whether this slide has collected any bullets yet.
    pub fn has_bullets(&self) -> bool {
        !self.bullets.is_empty()
    }
}
