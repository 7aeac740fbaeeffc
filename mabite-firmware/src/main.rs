//! MABITE - Handheld Cognitive Console Firmware
//!
//! Main firmware binary for the RP2040 console board: four lit buttons,
//! a confirm button, a menu dial, a piezo and a 128x64 OLED.
//!
//! All game logic lives in `mabite-core`; this binary wires the board
//! collaborators to it and runs three tasks:
//! - tick: fixed-rate time base
//! - console: menu controller and game sessions
//! - display: streams finished frames to the OLED

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use {defmt_rtt as _, panic_probe as _};

use mabite_hal::analog::collect_entropy;
use mabite_hal::{ButtonPanel, LightBar, Speaker};
use mabite_hal_rp2040::pins::{assigned_pins, check_pin_map, OLED_ADDR};
use mabite_hal_rp2040::{ConsolePins, DialAdc, PwmTone, RpInput, RpOutput};

mod channels;
mod ssd1306;
mod tasks;

use crate::ssd1306::Ssd1306;
use crate::tasks::tick::EmbassyClock;
use crate::tasks::ConsoleIo;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Dial samples folded into the generator seed
const SEED_SAMPLES: usize = 64;

/// OLED bus speed (fast mode)
const OLED_I2C_HZ: u32 = 400_000;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("MABITE firmware starting...");

    let p = embassy_rp::init(Default::default());
    if let Err(e) = check_pin_map(assigned_pins()) {
        error!("Pin map invalid: {:?}", e);
        halt();
    }
    let pins = ConsolePins::take(p);
    info!("Peripherals initialized");

    // OLED on I2C1 (GPIO18 SDA, GPIO19 SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = OLED_I2C_HZ;
    let i2c = I2c::new_async(pins.oled_i2c, pins.oled_scl, pins.oled_sda, Irqs, i2c_config);

    let mut oled = Ssd1306::new(i2c, OLED_ADDR);
    if let Err(e) = oled.init().await {
        error!("Failed to initialize display: {:?}", e);
        halt();
    }
    info!("OLED initialized");

    // Buttons are active-low with internal pull-ups
    let buttons = pins.buttons.map(RpInput::pull_up);
    let confirm = RpInput::pull_up(pins.confirm);
    let dial = DialAdc::new(pins.adc, pins.dial);
    let mut panel = ButtonPanel::new(buttons, confirm, dial);

    let seed = collect_entropy(panel.dial_mut(), SEED_SAMPLES);
    debug!("Seed {=u64:x}", seed);

    let lights = LightBar::new(pins.leds.map(RpOutput::new));
    let speaker = Speaker::new(PwmTone::new(pins.speaker_slice, pins.speaker), EmbassyClock);
    info!("Buttons, lights and speaker initialized");

    let io = ConsoleIo {
        panel,
        lights,
        speaker,
        seed,
    };

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::display_task(oled)).unwrap();
    spawner.spawn(tasks::console_task(io)).unwrap();

    info!("All tasks spawned, console running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Park the CPU after an unrecoverable startup failure
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
