//! Audio cue trait

/// Trait for the piezo speaker
///
/// Tones are fire-and-forget: the implementation is responsible for
/// silencing the output once `duration_ms` has passed.
pub trait AudioCue {
    /// Start a square-wave tone
    ///
    /// A new tone replaces whatever is currently sounding.
    /// A `duration_ms` of zero means "until `stop()`".
    fn play_tone(&mut self, freq_hz: u16, duration_ms: u32);

    /// Silence the speaker immediately
    fn stop(&mut self);
}
