//! Melody and light-flash playback
//!
//! Both players are stepped from the tick loop. A step that was polled
//! late still ends on its original deadline, and several overdue steps
//! are caught up in one poll.

use crate::traits::{AudioCue, Channel, StimulusLights};

use super::timer::Timer;

/// One note of a melody
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub freq_hz: u16,
    /// How long the tone sounds (0 = until the next note)
    pub tone_ms: u32,
    /// Time from this note's start to the next note's start
    pub step_ms: u32,
}

impl Note {
    pub const fn new(freq_hz: u16, tone_ms: u32, step_ms: u32) -> Self {
        Self {
            freq_hz,
            tone_ms,
            step_ms,
        }
    }

    /// A note that sounds for its whole step
    pub const fn legato(freq_hz: u16, step_ms: u32) -> Self {
        Self::new(freq_hz, 0, step_ms)
    }
}

/// Something the speaker can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tune {
    /// Fixed note list
    Notes(&'static [Note]),
    /// Sweep from `center_hz - span_hz` up to `center_hz + span_hz` in 1 Hz
    /// steps, repeated `cycles` times
    Warble {
        center_hz: u16,
        span_hz: u16,
        step_ms: u32,
        cycles: u8,
    },
}

impl Tune {
    /// Number of steps in the tune
    pub fn len(&self) -> usize {
        match self {
            Tune::Notes(notes) => notes.len(),
            Tune::Warble { span_hz, cycles, .. } => {
                (2 * *span_hz as usize + 1) * *cycles as usize
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Note at step `index`
    pub fn note(&self, index: usize) -> Option<Note> {
        if index >= self.len() {
            return None;
        }
        match self {
            Tune::Notes(notes) => notes.get(index).copied(),
            Tune::Warble {
                center_hz,
                span_hz,
                step_ms,
                ..
            } => {
                let sweep = 2 * *span_hz as usize + 1;
                let offset = (index % sweep) as u16;
                let freq = center_hz.saturating_sub(*span_hz).saturating_add(offset);
                Some(Note::legato(freq, *step_ms))
            }
        }
    }

    /// Total playing time in milliseconds
    pub fn duration_ms(&self) -> u32 {
        (0..self.len())
            .filter_map(|i| self.note(i))
            .map(|n| n.step_ms)
            .sum()
    }
}

/// Steps through a [`Tune`] without blocking
#[derive(Debug, Clone, Copy, Default)]
pub struct MelodyPlayer {
    tune: Option<Tune>,
    step: usize,
    timer: Option<Timer>,
}

impl MelodyPlayer {
    pub const fn new() -> Self {
        Self {
            tune: None,
            step: 0,
            timer: None,
        }
    }

    /// Start playing `tune` from its first note
    pub fn start(&mut self, tune: Tune, audio: &mut dyn AudioCue, now_ms: u32) {
        self.tune = Some(tune);
        self.step = 0;
        match tune.note(0) {
            Some(note) => {
                audio.play_tone(note.freq_hz, note.tone_ms);
                self.timer = Some(Timer::after(now_ms, note.step_ms));
            }
            None => self.finish(audio),
        }
    }

    /// Advance playback
    ///
    /// Returns `true` once the tune is over (and when idle).
    pub fn poll(&mut self, audio: &mut dyn AudioCue, now_ms: u32) -> bool {
        let Some(tune) = self.tune else {
            return true;
        };

        while let Some(timer) = self.timer {
            if !timer.is_expired(now_ms) {
                return false;
            }
            self.step += 1;
            match tune.note(self.step) {
                Some(note) => {
                    audio.play_tone(note.freq_hz, note.tone_ms);
                    self.timer = Some(timer.chain(note.step_ms));
                }
                None => {
                    self.finish(audio);
                    return true;
                }
            }
        }
        true
    }

    pub fn is_playing(&self) -> bool {
        self.tune.is_some()
    }

    /// Stop immediately and silence the speaker
    pub fn cancel(&mut self, audio: &mut dyn AudioCue) {
        if self.is_playing() {
            self.finish(audio);
        }
    }

    fn finish(&mut self, audio: &mut dyn AudioCue) {
        audio.stop();
        self.tune = None;
        self.timer = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlashPhase {
    Idle,
    Lit(usize),
    Gap(usize),
}

/// Flashes a list of channels: light + tone, then a dark gap
///
/// The caller keeps ownership of the channel list and passes the same
/// slice to every `poll`.
#[derive(Debug, Clone, Copy)]
pub struct Flasher {
    on_ms: u32,
    gap_ms: u32,
    phase: FlashPhase,
    timer: Timer,
}

impl Flasher {
    pub const fn new(on_ms: u32, gap_ms: u32) -> Self {
        Self {
            on_ms,
            gap_ms,
            phase: FlashPhase::Idle,
            timer: Timer::expired(0),
        }
    }

    /// Light the first channel of `moves`
    pub fn start(
        &mut self,
        moves: &[Channel],
        audio: &mut dyn AudioCue,
        lights: &mut dyn StimulusLights,
        now_ms: u32,
    ) {
        self.phase = FlashPhase::Idle;
        if let Some(&first) = moves.first() {
            self.light(0, first, audio, lights, Timer::after(now_ms, self.on_ms));
        }
    }

    /// Advance; returns `true` once the last gap has elapsed
    pub fn poll(
        &mut self,
        moves: &[Channel],
        audio: &mut dyn AudioCue,
        lights: &mut dyn StimulusLights,
        now_ms: u32,
    ) -> bool {
        loop {
            match self.phase {
                FlashPhase::Idle => return true,
                _ if !self.timer.is_expired(now_ms) => return false,
                FlashPhase::Lit(i) => {
                    if let Some(&ch) = moves.get(i) {
                        lights.set(ch, false);
                    }
                    audio.stop();
                    self.phase = FlashPhase::Gap(i);
                    self.timer = self.timer.chain(self.gap_ms);
                }
                FlashPhase::Gap(i) => match moves.get(i + 1) {
                    Some(&next) => {
                        let timer = self.timer.chain(self.on_ms);
                        self.light(i + 1, next, audio, lights, timer);
                    }
                    None => {
                        self.phase = FlashPhase::Idle;
                        return true;
                    }
                },
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != FlashPhase::Idle
    }

    fn light(
        &mut self,
        index: usize,
        ch: Channel,
        audio: &mut dyn AudioCue,
        lights: &mut dyn StimulusLights,
        timer: Timer,
    ) {
        lights.set(ch, true);
        audio.play_tone(ch.tone_hz(), self.on_ms);
        self.phase = FlashPhase::Lit(index);
        self.timer = timer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{AudioEvent, RecordingAudio, RecordingLights};

    static TWO: [Note; 2] = [Note::new(500, 100, 150), Note::new(600, 200, 300)];

    #[test]
    fn test_melody_steps_on_deadlines() {
        let mut audio = RecordingAudio::default();
        let mut player = MelodyPlayer::new();

        player.start(Tune::Notes(&TWO), &mut audio, 0);
        assert_eq!(audio.last_tone(), Some((500, 100)));
        assert!(!player.poll(&mut audio, 149));
        assert!(!player.poll(&mut audio, 150));
        assert_eq!(audio.last_tone(), Some((600, 200)));
        assert!(!player.poll(&mut audio, 449));
        assert!(player.poll(&mut audio, 450));
        assert_eq!(audio.events.last(), Some(&AudioEvent::Stop));
        assert!(!player.is_playing());
    }

    #[test]
    fn test_late_poll_catches_up() {
        let mut audio = RecordingAudio::default();
        let mut player = MelodyPlayer::new();

        player.start(Tune::Notes(&TWO), &mut audio, 0);
        assert!(player.poll(&mut audio, 10_000));
        assert_eq!(audio.tones().count(), 2);
    }

    #[test]
    fn test_warble_sweep() {
        let tune = Tune::Warble {
            center_hz: 523,
            span_hz: 10,
            step_ms: 6,
            cycles: 10,
        };
        assert_eq!(tune.len(), 210);
        assert_eq!(tune.note(0).map(|n| n.freq_hz), Some(513));
        assert_eq!(tune.note(20).map(|n| n.freq_hz), Some(533));
        assert_eq!(tune.note(21).map(|n| n.freq_hz), Some(513));
        assert_eq!(tune.note(210), None);
        assert_eq!(tune.duration_ms(), 1260);
    }

    #[test]
    fn test_cancel_silences() {
        let mut audio = RecordingAudio::default();
        let mut player = MelodyPlayer::new();
        player.start(Tune::Notes(&TWO), &mut audio, 0);
        player.cancel(&mut audio);
        assert!(!player.is_playing());
        assert_eq!(audio.events.last(), Some(&AudioEvent::Stop));
    }

    #[test]
    fn test_flasher_sequence() {
        let mut audio = RecordingAudio::default();
        let mut lights = RecordingLights::default();
        let moves = [Channel::ALL[2], Channel::ALL[0]];
        let mut flasher = Flasher::new(300, 50);

        flasher.start(&moves, &mut audio, &mut lights, 0);
        assert!(lights.is_on(Channel::ALL[2]));
        assert_eq!(audio.last_tone(), Some((Channel::ALL[2].tone_hz(), 300)));

        assert!(!flasher.poll(&moves, &mut audio, &mut lights, 300));
        assert!(!lights.is_on(Channel::ALL[2]));

        assert!(!flasher.poll(&moves, &mut audio, &mut lights, 350));
        assert!(lights.is_on(Channel::ALL[0]));

        assert!(!flasher.poll(&moves, &mut audio, &mut lights, 699));
        assert!(flasher.poll(&moves, &mut audio, &mut lights, 700));
        assert!(lights.all_dark());
        assert!(!flasher.is_active());
    }

    #[test]
    fn test_flasher_empty() {
        let mut audio = RecordingAudio::default();
        let mut lights = RecordingLights::default();
        let mut flasher = Flasher::new(300, 50);
        flasher.start(&[], &mut audio, &mut lights, 0);
        assert!(flasher.poll(&[], &mut audio, &mut lights, 0));
    }
}
