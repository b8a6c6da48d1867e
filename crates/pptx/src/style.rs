//! Fixed styling constants applied uniformly across the deck.
//!
//! These are configuration values, not behavior: every slide uses the same
//! sizes, color, and geometry, so they live in one table instead of inline
//! in the writer. Lengths are in English Metric Units (EMU), font sizes in
//! hundredths of a point (the DrawingML `sz` unit).

/// EMU per inch, the base unit of OOXML geometry.
pub const EMU_PER_INCH: i64 = 914_400;

/// Slide canvas: 10 x 7.5 inches.
pub const SLIDE_WIDTH: i64 = 10 * EMU_PER_INCH;
pub const SLIDE_HEIGHT: i64 = 15 * EMU_PER_INCH / 2;

/// Notes page canvas (portrait).
pub const NOTES_WIDTH: i64 = SLIDE_HEIGHT;
pub const NOTES_HEIGHT: i64 = SLIDE_WIDTH;

/// Brand color applied to every title run.
pub const TITLE_COLOR: &str = "1F3864";

/// Title-slide title: 44 pt bold.
pub const DECK_TITLE_SIZE: u32 = 4400;

/// Title-slide subtitle: 24 pt.
pub const DECK_SUBTITLE_SIZE: u32 = 2400;

/// Content-slide title: 32 pt bold.
pub const SLIDE_TITLE_SIZE: u32 = 3200;

/// Bullet text: 18 pt.
pub const BULLET_SIZE: u32 = 1800;

/// Space before each bullet paragraph: 12 pt.
pub const BULLET_SPACE_BEFORE: u32 = 1200;

/// A fixed rectangular region on a slide, in EMU.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// Title placeholder on the title slide.
pub const DECK_TITLE_REGION: Region = Region {
    x: 3 * EMU_PER_INCH / 4,
    y: 9 * EMU_PER_INCH / 4,
    cx: 17 * EMU_PER_INCH / 2,
    cy: 3 * EMU_PER_INCH / 2,
};

/// Subtitle placeholder on the title slide.
pub const DECK_SUBTITLE_REGION: Region = Region {
    x: 3 * EMU_PER_INCH / 2,
    y: 17 * EMU_PER_INCH / 4,
    cx: 7 * EMU_PER_INCH,
    cy: EMU_PER_INCH,
};

/// Title placeholder on content slides.
pub const SLIDE_TITLE_REGION: Region = Region {
    x: EMU_PER_INCH / 2,
    y: 3 * EMU_PER_INCH / 10,
    cx: 9 * EMU_PER_INCH,
    cy: 5 * EMU_PER_INCH / 4,
};

/// Bullet body placeholder on content slides.
pub const SLIDE_BODY_REGION: Region = Region {
    x: EMU_PER_INCH / 2,
    y: 7 * EMU_PER_INCH / 4,
    cx: 9 * EMU_PER_INCH,
    cy: 21 * EMU_PER_INCH / 4,
};

/// Notes body placeholder on notes pages.
pub const NOTES_BODY_REGION: Region = Region {
    x: EMU_PER_INCH / 2,
    y: 9 * EMU_PER_INCH / 2,
    cx: 13 * EMU_PER_INCH / 2,
    cy: 9 * EMU_PER_INCH / 2,
};

/// Picture region: right-hand side of the slide, fixed offset. Pictures are
/// scaled by this fixed width; height follows the image's aspect ratio.
pub const PICTURE_LEFT: i64 = 6 * EMU_PER_INCH;
pub const PICTURE_TOP: i64 = 2 * EMU_PER_INCH;
pub const PICTURE_WIDTH: i64 = 7 * EMU_PER_INCH / 2;
