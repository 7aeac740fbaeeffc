//! Console task
//!
//! Owns the game core and its collaborators. Boots the menu, then hands
//! every tick to the menu controller.

use defmt::*;

use mabite_core::config::ConsoleConfig;
use mabite_core::state::ConsoleEvent;
use mabite_core::traits::Clock;
use mabite_core::{AppContext, MenuController, Outputs};
use mabite_display::Canvas;
use mabite_hal::{ButtonPanel, LightBar, Speaker};
use mabite_hal_rp2040::{DialAdc, PwmTone, RpInput, RpOutput};

use super::display::SharedFrame;
use super::tick::{EmbassyClock, TICK_SIGNAL};

pub type Panel = ButtonPanel<RpInput, RpInput, DialAdc>;
pub type Lights = LightBar<RpOutput>;
pub type Piezo = Speaker<PwmTone, EmbassyClock>;

/// Board collaborators moved into the console task
pub struct ConsoleIo {
    pub panel: Panel,
    pub lights: Lights,
    pub speaker: Piezo,
    pub seed: u64,
}

#[embassy_executor::task]
pub async fn console_task(mut io: ConsoleIo) {
    info!("Console task started");

    let mut ctx = AppContext::new(ConsoleConfig::default(), io.seed);
    let mut canvas = Canvas::new(SharedFrame);
    let mut menu = MenuController::new();

    {
        let mut out = Outputs::new(&mut canvas, &mut io.speaker, &mut io.lights);
        let event = menu.boot(&mut ctx, &mut out, &mut io.panel, EmbassyClock.now_ms());
        info!("Console event: {}", event);
    }

    loop {
        let now_ms = TICK_SIGNAL.wait().await;
        io.speaker.service();

        let mut out = Outputs::new(&mut canvas, &mut io.speaker, &mut io.lights);
        let Some(event) = menu.tick(&mut ctx, &mut out, &mut io.panel, now_ms) else {
            continue;
        };

        if event.is_user_event() {
            info!("Player: {}", event);
        } else {
            debug!("Console event: {}", event);
        }
        if let (ConsoleEvent::SessionFinished(_), Some(outcome)) = (event, menu.last_outcome()) {
            info!("Result: {}", outcome);
        }
    }
}
