//! Numeric helpers: intervals, amplitudes, the mel scale and MIDI pitchbend.

/// Default pitchbend range in cents (a whole tone in each direction).
pub const DEFAULT_PITCHBEND_CENTS: i32 = 200;

/// Highest 14-bit MIDI pitchbend value. 8192 is no bend.
pub const MAX_PITCHBEND: i32 = 16383;

const MEL_FACTOR: f64 = 1127.01048;
const MEL_BREAK_FREQ: f64 = 700.0;

/// Converts a ratio between two frequencies to an interval in semitones.
///
/// # Examples
/// ```
/// use pitchtools::units::ratio_to_interval;
///
/// assert_eq!(ratio_to_interval(2.0), 12.0);
/// ```
pub fn ratio_to_interval(ratio: f64) -> f64 {
    12.0 * ratio.log2()
}

/// Converts an interval in semitones to a ratio between two frequencies.
pub fn interval_to_ratio(interval: f64) -> f64 {
    2f64.powf(interval / 12.0)
}

/// Converts decibels to amplitude (0 dB = 1.0).
pub fn db_to_amp(db: f64) -> f64 {
    10f64.powf(0.05 * db)
}

/// Converts amplitude to decibels. Amplitudes below machine epsilon are
/// clamped, so silence maps to a finite value.
pub fn amp_to_db(amp: f64) -> f64 {
    amp.max(f64::EPSILON).log10() * 20.0
}

/// Position of a frequency in the mel scale.
pub fn freq_to_mel(freq: f64) -> f64 {
    MEL_FACTOR * (1.0 + freq / MEL_BREAK_FREQ).ln()
}

/// Frequency of a position in the mel scale.
pub fn mel_to_freq(mel: f64) -> f64 {
    MEL_BREAK_FREQ * ((mel / MEL_FACTOR).exp() - 1.0)
}

/// Converts a MIDI pitchbend value (0..=16383) to cents, given the cents
/// corresponding to the maximum bend.
pub fn pitchbend_to_cents(pitchbend: i32, max_cents: i32) -> i32 {
    let max_cents = max_cents as f64;
    ((pitchbend as f64 / MAX_PITCHBEND as f64) * (max_cents * 2.0) - max_cents + 0.5).floor()
        as i32
}

/// Converts a deviation in cents to a MIDI pitchbend value, given the cents
/// corresponding to the maximum bend.
pub fn cents_to_pitchbend(cents: i32, max_cents: i32) -> i32 {
    ((cents + max_cents) as f64 / (max_cents as f64 * 2.0) * MAX_PITCHBEND as f64 + 0.5).floor()
        as i32
}
