//! Display task
//!
//! Pushes finished frames to the OLED. Frames arriving while a transfer
//! is in flight collapse into one: only the latest is ever sent.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;

use mabite_core::traits::DisplayError;
use mabite_display::{FrameBuffer, FrameSink};

use crate::channels::{FRAME, FRAME_READY};
use crate::ssd1306::Ssd1306;

pub type Oled = Ssd1306<I2c<'static, I2C1, Async>>;

/// Frame sink handing frames to the display task
pub struct SharedFrame;

impl FrameSink for SharedFrame {
    fn push(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        FRAME.lock(|shared| shared.borrow_mut().clone_from(frame));
        FRAME_READY.signal(());
        Ok(())
    }
}

#[embassy_executor::task]
pub async fn display_task(mut oled: Oled) {
    info!("Display task started");

    loop {
        FRAME_READY.wait().await;
        let frame = FRAME.lock(|shared| shared.borrow().clone());

        match oled.flush(&frame).await {
            Ok(()) => trace!("Frame sent"),
            Err(e) => warn!("Frame transfer failed: {:?}", e),
        }
    }
}
