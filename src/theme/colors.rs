//! Colors - BookTrack Theme Colors

use gpui::{rgb, Rgba};

/// BookTrack color palette - All colors are accessed via associated functions
pub struct BookColors;

impl BookColors {
    // Background colors
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }

    // Status colors
    /// Error - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
}
