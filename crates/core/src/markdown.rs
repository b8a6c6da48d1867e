//! Line-oriented markdown parser producing slide records.
//!
//! A single left-to-right pass classifies each line against a fixed set of
//! rules (title, bullet, image, note) and folds the results into an ordered
//! slide sequence. This is intentionally not a full markdown parser: tables,
//! inline formatting, nested lists, and code blocks are out of scope.

use crate::types::Slide;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a level 1 or 2 heading, with an optional "Slide N:" label that is
/// stripped from the captured title text.
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,2}\s+(?:Slide\s+\d+:\s+)?(.+)$").unwrap());

/// Matches an ordered-list marker ("1. ", "23. ", ...).
static ORDERED_BULLET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// Captures the parenthesized reference of a markdown image line.
static IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^!\[.*?\]\((.+?)\)").unwrap());

/// Prefixes that mark a line as an explicit speaker note. Matched
/// case-insensitively against the start of the line.
const NOTE_PREFIXES: &[&str] = &["note:", "speaker notes:", "notes:"];

/// Parse markdown text into an ordered sequence of slides.
///
/// Slides appear in the order their title lines appeared in the document.
/// Content lines before the first title line are discarded. A document with
/// no recognizable title line yields an empty sequence.
pub fn parse_markdown(text: &str) -> Vec<Slide> {
    let mut state = ParseState::default();

    for line in text.lines() {
        state.feed(line.trim_end());
    }

    state.finish()
}

/// Accumulator threaded over the input lines: the finished slides plus the
/// one slide currently open (if any).
#[derive(Debug, Default)]
struct ParseState {
    slides: Vec<Slide>,
    current: Option<Slide>,
}

impl ParseState {
    /// Classify one right-trimmed line and update the accumulator.
    ///
    /// Rule precedence: title first (always), then bullet, ordered bullet,
    /// image, note prefix, and finally the fallback-note rule. Everything
    /// after the title rule requires an open slide.
    fn feed(&mut self, line: &str) {
        if let Some(caps) = TITLE_REGEX.captures(line) {
            if let Some(open) = self.current.take() {
                self.slides.push(open);
            }
            self.current = Some(Slide::new(caps[1].trim()));
            return;
        }

        let Some(slide) = self.current.as_mut() else {
            return;
        };

        if line.starts_with("- ") || line.starts_with("* ") {
            slide.add_bullet(line[2..].trim());
        } else if ORDERED_BULLET_REGEX.is_match(line) {
            slide.add_bullet(ORDERED_BULLET_REGEX.replace(line, "").into_owned());
        } else if line.starts_with("![") {
            // A malformed image line (no closing parenthesis form) is
            // skipped without setting an image.
            if let Some(caps) = IMAGE_REGEX.captures(line) {
                slide.set_image(&caps[1]);
            }
        } else if is_note_line(line) {
            let text = line.split_once(':').map(|(_, rest)| rest).unwrap_or("");
            slide.add_note(text.trim());
        } else if !line.is_empty() && line != "---" && !line.starts_with('#') {
            // Plain prose is only kept as a note once the slide has
            // bullets; prose before the first bullet is dropped.
            if slide.has_bullets() {
                slide.add_note(line);
            }
        }
    }

    /// Finalize the still-open slide, if any, and return the sequence.
    fn finish(mut self) -> Vec<Slide> {
        if let Some(open) = self.current.take() {
            self.slides.push(open);
        }
        self.slides
    }
}

/// Whether the line starts with one of the recognized note prefixes.
fn is_note_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    NOTE_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}
