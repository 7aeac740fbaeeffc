//! Presenter trait for the 128x64 monochrome display

use core::fmt::Write;

use heapless::String;

/// Display width in pixels
pub const SCREEN_WIDTH: u8 = 128;

/// Display height in pixels
pub const SCREEN_HEIGHT: u8 = 64;

/// Errors that can occur when drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Display did not answer during initialization
    NotInitialized,
    /// Bus error while pushing a frame
    Communication,
    /// Text did not fit the formatting buffer
    BufferOverflow,
}

/// Text scale
///
/// Small fits 21 characters per line; Large about 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

/// Trait for the frame presenter
///
/// Drawing calls compose an off-screen frame; nothing is visible until
/// `flush()` is called.
pub trait Presenter {
    /// Blank the frame
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (`x`, `y`) pixels
    fn draw_text(&mut self, x: u8, y: u8, size: TextSize, text: &str)
        -> Result<(), DisplayError>;

    /// Draw a filled selection bar with inverted small text
    ///
    /// - `x`, `y`: top-left corner of the bar
    /// - `width`, `height`: bar size in pixels
    ///
    /// The text starts 5 px right of and 1 px below the bar corner.
    fn draw_highlighted_row(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        text: &str,
    ) -> Result<(), DisplayError>;

    /// Make the composed frame visible
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// Helper trait for drawing common screens
pub trait PresenterExt: Presenter {
    /// Clear, draw one line of text, flush
    fn show_text(&mut self, x: u8, y: u8, size: TextSize, text: &str) -> Result<(), DisplayError> {
        self.clear()?;
        self.draw_text(x, y, size, text)?;
        self.flush()
    }

    /// Clear, draw a caption and a large value underneath, flush
    fn show_caption_value(
        &mut self,
        caption: (u8, u8, TextSize, &str),
        value: (u8, u8, &str),
    ) -> Result<(), DisplayError> {
        self.clear()?;
        let (x, y, size, text) = caption;
        self.draw_text(x, y, size, text)?;
        self.draw_text(value.0, value.1, TextSize::Large, value.2)?;
        self.flush()
    }

    /// Draw formatted text without allocating
    fn draw_fmt(
        &mut self,
        x: u8,
        y: u8,
        size: TextSize,
        args: core::fmt::Arguments<'_>,
    ) -> Result<(), DisplayError> {
        let text: String<32> = format_text(args)?;
        self.draw_text(x, y, size, &text)
    }
}

// Blanket implementation for all presenters
impl<T: Presenter + ?Sized> PresenterExt for T {}

/// Format into a fixed-capacity string
pub fn format_text<const N: usize>(args: core::fmt::Arguments<'_>) -> Result<String<N>, DisplayError> {
    let mut text = String::new();
    text.write_fmt(args).map_err(|_| DisplayError::BufferOverflow)?;
    Ok(text)
}

/// Format milliseconds as seconds with three decimals (`1234` -> `1.234`)
pub fn format_seconds<const N: usize>(ms: u32, unit: &str) -> Result<String<N>, DisplayError> {
    format_text(format_args!("{}.{:03}{}", ms / 1000, ms % 1000, unit))
}
