//! Text presenter over a frame buffer

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X18};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use mabite_core::traits::{DisplayError, Presenter, TextSize};

use crate::frame::FrameBuffer;

/// Text inset inside a selection bar
const BAR_TEXT_DX: i32 = 5;
const BAR_TEXT_DY: i32 = 1;

/// Destination for finished frames
pub trait FrameSink {
    fn push(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError>;
}

fn font(size: TextSize) -> &'static MonoFont<'static> {
    match size {
        TextSize::Small => &FONT_6X10,
        TextSize::Medium => &FONT_9X18,
        TextSize::Large => &FONT_10X20,
    }
}

/// `Presenter` drawing into an off-screen frame
pub struct Canvas<S> {
    frame: FrameBuffer,
    sink: S,
}

impl<S: FrameSink> Canvas<S> {
    pub fn new(sink: S) -> Self {
        Self {
            frame: FrameBuffer::new(),
            sink,
        }
    }

    /// The frame being composed
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn text(&mut self, x: i32, y: i32, font: &MonoFont<'_>, color: BinaryColor, text: &str) {
        let style = MonoTextStyle::new(font, color);
        // The frame buffer cannot fail
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(&mut self.frame);
    }
}

impl<S: FrameSink> Presenter for Canvas<S> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.frame.clear();
        Ok(())
    }

    fn draw_text(&mut self, x: u8, y: u8, size: TextSize, text: &str) -> Result<(), DisplayError> {
        self.text(x.into(), y.into(), font(size), BinaryColor::On, text);
        Ok(())
    }

    fn draw_highlighted_row(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        text: &str,
    ) -> Result<(), DisplayError> {
        let corner = Point::new(x.into(), y.into());
        let _ = Rectangle::new(corner, Size::new(width.into(), height.into()))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.frame);
        self.text(
            corner.x + BAR_TEXT_DX,
            corner.y + BAR_TEXT_DY,
            font(TextSize::Small),
            BinaryColor::Off,
            text,
        );
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.sink.push(&self.frame)
    }
}
