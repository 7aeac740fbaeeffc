//! Note frequencies in Hz (equal temperament, A4 = 440 Hz)
//!
//! Only the notes the console actually plays are listed.

pub const NOTE_DS3: u16 = 156;
pub const NOTE_G3: u16 = 196;
pub const NOTE_C4: u16 = 262;
pub const NOTE_E4: u16 = 330;
pub const NOTE_G4: u16 = 392;
pub const NOTE_A4: u16 = 440;
pub const NOTE_C5: u16 = 523;
pub const NOTE_CS5: u16 = 554;
pub const NOTE_D5: u16 = 587;
pub const NOTE_DS5: u16 = 622;
pub const NOTE_E5: u16 = 659;
pub const NOTE_G5: u16 = 784;
pub const NOTE_C6: u16 = 1047;
pub const NOTE_E6: u16 = 1319;
pub const NOTE_G6: u16 = 1568;
