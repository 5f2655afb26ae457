//! Conversion between frequencies, midinotes and notenames.
//!
//! A [`PitchConverter`] carries the reference frequency for A4 and the
//! notation preference for eighth tones. Besides ad-hoc converters there is
//! one process-wide default, used by the free functions of this module.
//!
//! # Example
//!
//! ```
//! use pitchtools::PitchConverter;
//!
//! let cnv = PitchConverter::new().with_reference_freq(440.0);
//! assert_eq!(cnv.m2f(69.0), 440.0);
//! assert_eq!(cnv.m2n(61.2), "4C#+20");
//! assert_eq!(cnv.n2m("4E<").unwrap(), 63.75);
//! ```

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{PitchError, PitchResult};
use crate::notated::{notate, NotatedPitch, Pitch};
use crate::note::{
    construct_notename, format_midinote, midi_to_note_parts, notename_to_midinote,
    quantize_midinote, split_cents, split_notename, ChromaticParts, QuantizeMethod,
    A4_MIDINOTE, DEFAULT_REFERENCE_FREQ, MIN_FREQ,
};

static DEFAULT_CONVERTER: RwLock<PitchConverter> = RwLock::new(PitchConverter::new());

/// Converts between frequencies, midinotes and notenames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchConverter {
    /// Frequency of A4 in Hz.
    reference_freq: f64,
    /// Use `>`/`<` for pitches a quarter of a semitone away from a chromatic pitch.
    eighth_tone_symbols: bool,
}

impl Default for PitchConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchConverter {
    /// Creates a converter with A4 = 442 Hz and eighth-tone symbols enabled.
    pub const fn new() -> Self {
        Self {
            reference_freq: DEFAULT_REFERENCE_FREQ,
            eighth_tone_symbols: true,
        }
    }

    /// Sets the reference frequency (A4).
    pub fn with_reference_freq(mut self, reference_freq: f64) -> Self {
        self.reference_freq = reference_freq;
        self
    }

    /// Enables or disables the eighth-tone symbols `>` and `<` when formatting.
    pub fn with_eighth_tone_symbols(mut self, enabled: bool) -> Self {
        self.eighth_tone_symbols = enabled;
        self
    }

    /// Returns the reference frequency (A4) in Hz.
    pub fn reference_freq(&self) -> f64 {
        self.reference_freq
    }

    /// Sets the reference frequency (A4) of this converter.
    pub fn set_reference_freq(&mut self, reference_freq: f64) {
        self.reference_freq = reference_freq;
    }

    /// Returns true if eighth-tone symbols are used when formatting.
    pub fn eighth_tone_symbols(&self) -> bool {
        self.eighth_tone_symbols
    }

    /// Converts a frequency in Hz to a midinote.
    ///
    /// Frequencies below 9 Hz map to midinote 0.
    pub fn f2m(&self, freq: f64) -> f64 {
        if freq < MIN_FREQ {
            return 0.0;
        }
        12.0 * (freq / self.reference_freq).log2() + A4_MIDINOTE
    }

    /// Converts a midinote to a frequency in Hz.
    pub fn m2f(&self, midinote: f64) -> f64 {
        2f64.powf((midinote - A4_MIDINOTE) / 12.0) * self.reference_freq
    }

    /// Rounds a frequency to the nearest pitch of a grid with `divisions`
    /// steps per semitone.
    pub fn freq_round(&self, freq: f64, divisions: u32) -> PitchResult<f64> {
        let midinote = quantize_midinote(self.f2m(freq), divisions, QuantizeMethod::Round)?;
        Ok(self.m2f(midinote))
    }

    /// Converts a midinote to a notename.
    pub fn midinote_to_notename(&self, midinote: f64) -> String {
        format_midinote(midinote, self.eighth_tone_symbols)
    }

    /// Shorthand for [`PitchConverter::midinote_to_notename`].
    pub fn m2n(&self, midinote: f64) -> String {
        self.midinote_to_notename(midinote)
    }

    /// Converts a notename to a midinote.
    pub fn n2m(&self, notename: &str) -> PitchResult<f64> {
        notename_to_midinote(notename)
    }

    /// Converts a notename to a frequency in Hz.
    pub fn n2f(&self, notename: &str) -> PitchResult<f64> {
        self.n2m(notename).map(|m| self.m2f(m))
    }

    /// Converts a frequency in Hz to a notename.
    pub fn f2n(&self, freq: f64) -> String {
        self.m2n(self.f2m(freq))
    }

    /// Splits a midinote into octave, chromatic name, microtone symbol and cents.
    pub fn midi_to_note_parts(&self, midinote: f64) -> ChromaticParts {
        midi_to_note_parts(midinote, self.eighth_tone_symbols)
    }

    /// Converts a notename to its canonical form (`a4+24` -> `4A+24`).
    pub fn normalize_notename(&self, notename: &str) -> PitchResult<String> {
        self.n2m(notename).map(|m| self.m2n(m))
    }

    /// Frequencies of all the keys between `start` and `stop` (inclusive).
    ///
    /// The piano range is `A0` to `C8`.
    pub fn pianofreqs(&self, start: &str, stop: &str) -> PitchResult<Vec<f64>> {
        let first = self.n2m(start)?.trunc() as i64;
        let last = self.n2m(stop)?.trunc() as i64;
        Ok((first..=last).map(|m| self.m2f(m as f64)).collect())
    }

    /// Converts a pitch given as text to a midinote.
    ///
    /// Accepts every notename plus frequencies ending in `hz`/`Hz`. A notename
    /// may carry a frequency offset: `"100hz"`, `"4F+20hz"`, `"8C-4hz"`.
    pub fn str2midi(&self, text: &str) -> PitchResult<f64> {
        let text = text.trim();
        let Some(body) = text
            .strip_suffix("hz")
            .or_else(|| text.strip_suffix("Hz"))
        else {
            return self.n2m(text);
        };

        match body.rfind(|c: char| c == '+' || c == '-') {
            Some(idx) if idx > 0 => {
                let offset: f64 = body[idx..].parse().map_err(|_| {
                    PitchError::invalid_notename(text, "could not parse frequency offset")
                })?;
                let freq = self.n2f(&body[..idx])? + offset;
                Ok(self.f2m(freq))
            }
            _ => {
                let freq: f64 = body
                    .parse()
                    .map_err(|_| PitchError::invalid_notename(text, "could not parse frequency"))?;
                Ok(self.f2m(freq))
            }
        }
    }

    /// Interprets a whitespace-separated list of pitches as midinotes.
    ///
    /// Each item is either a number (a midinote) or anything accepted by
    /// [`PitchConverter::str2midi`].
    pub fn as_midinotes(&self, pitches: &str) -> PitchResult<Vec<f64>> {
        pitches
            .split_whitespace()
            .map(|item| match item.parse::<f64>() {
                Ok(midinote) => Ok(midinote),
                Err(_) => self.str2midi(item),
            })
            .collect()
    }

    /// Converts a midinote or notename to a [`NotatedPitch`].
    ///
    /// Midinotes are snapped to a grid of `divisions` steps per semitone and
    /// spelled with this converter.
    pub fn notated_pitch(
        &self,
        pitch: impl Into<Pitch>,
        divisions: u32,
    ) -> PitchResult<NotatedPitch> {
        notate(self, pitch.into(), divisions)
    }
}

// ============================================================================
// Process-wide default
// ============================================================================

/// Returns a copy of the process-wide default converter.
pub fn default_converter() -> PitchConverter {
    *DEFAULT_CONVERTER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide default converter.
pub fn set_default_converter(converter: PitchConverter) {
    *DEFAULT_CONVERTER
        .write()
        .unwrap_or_else(PoisonError::into_inner) = converter;
}

/// Sets the reference frequency (A4) of the process-wide default converter.
pub fn set_reference_freq(reference_freq: f64) {
    DEFAULT_CONVERTER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set_reference_freq(reference_freq);
}

/// Returns the reference frequency (A4) of the process-wide default converter.
pub fn reference_freq() -> f64 {
    default_converter().reference_freq()
}

/// Converts a midinote to a frequency with the default converter.
pub fn m2f(midinote: f64) -> f64 {
    default_converter().m2f(midinote)
}

/// Converts a frequency to a midinote with the default converter.
pub fn f2m(freq: f64) -> f64 {
    default_converter().f2m(freq)
}

/// Converts a midinote to a notename with the default converter.
pub fn m2n(midinote: f64) -> String {
    default_converter().m2n(midinote)
}

/// Converts a notename to a midinote.
pub fn n2m(notename: &str) -> PitchResult<f64> {
    notename_to_midinote(notename)
}

/// Converts a notename to a frequency with the default converter.
pub fn n2f(notename: &str) -> PitchResult<f64> {
    default_converter().n2f(notename)
}

/// Converts a frequency to a notename with the default converter.
pub fn f2n(freq: f64) -> String {
    default_converter().f2n(freq)
}

/// Converts a notename to its canonical form with the default converter.
pub fn normalize_notename(notename: &str) -> PitchResult<String> {
    default_converter().normalize_notename(notename)
}

/// Converts a pitch given as text (notename or frequency) with the default converter.
pub fn str2midi(text: &str) -> PitchResult<f64> {
    default_converter().str2midi(text)
}

// ============================================================================
// Rounding
// ============================================================================

/// Quantizes the cents of a notename to a grid of `divisions` steps per semitone.
///
/// The spelling is kept unless the quantized cents reach a whole semitone.
///
/// # Examples
/// ```
/// use pitchtools::quantize_notename;
///
/// assert_eq!(quantize_notename("4A+18", 4).unwrap(), "4A+25");
/// assert_eq!(quantize_notename("4Db-10", 1).unwrap(), "4Db");
/// ```
pub fn quantize_notename(notename: &str, divisions: u32) -> PitchResult<String> {
    if divisions == 0 {
        return Err(PitchError::UnsupportedDivisions { divisions });
    }
    let steps = divisions as f64;
    let mut parts = split_notename(notename)?;
    let quantized = (parts.cents_deviation as f64 / 100.0 * steps).round_ties_even();
    let mut cents = (quantized / steps * 100.0).trunc() as i32;
    if cents.abs() >= 100 {
        let midinote = quantize_midinote(n2m(notename)?, divisions, QuantizeMethod::Round)?;
        parts = split_notename(&m2n(midinote))?;
        cents = parts.cents_deviation;
    }
    Ok(construct_notename(
        parts.octave,
        parts.diatonic_name,
        parts.alteration,
        cents,
    ))
}

/// Rounds a midinote to a grid of `divisions` steps per semitone.
///
/// Returns the rounded notename and the deviation in cents from the original
/// pitch to the chromatic pitch of the rounded notename (which can be negative).
///
/// # Examples
/// ```
/// use pitchtools::pitch_round;
///
/// assert_eq!(pitch_round(60.1, 1).unwrap(), ("4C".to_string(), 10));
/// assert_eq!(pitch_round(60.75, 4).unwrap(), ("4Db<".to_string(), -25));
/// ```
pub fn pitch_round(midinote: f64, divisions: u32) -> PitchResult<(String, i32)> {
    let rounded = quantize_midinote(midinote, divisions, QuantizeMethod::Round)?;
    let notename = m2n(rounded);
    let (base, _) = split_cents(&notename)?;
    let deviation = midinote - n2m(&base)?;
    Ok((notename, (deviation * 100.0).round_ties_even() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_m2f_f2m_reference() {
        let cnv = PitchConverter::new();
        assert_eq!(cnv.m2f(69.0), 442.0);
        assert_close(cnv.m2f(81.0), 884.0);
        assert_close(cnv.f2m(442.0), 69.0);
        assert_close(cnv.f2m(221.0), 57.0);
    }

    #[test]
    fn test_f2m_floor() {
        let cnv = PitchConverter::new();
        assert_eq!(cnv.f2m(8.9), 0.0);
        assert_eq!(cnv.f2m(0.0), 0.0);
        assert!(cnv.f2m(9.0) > 0.0);
    }

    #[test]
    fn test_converter_reference_freq() {
        let mut cnv = PitchConverter::new().with_reference_freq(440.0);
        assert_eq!(cnv.reference_freq(), 440.0);
        assert_eq!(cnv.n2f("4A").unwrap(), 440.0);
        cnv.set_reference_freq(415.0);
        assert_eq!(cnv.n2f("A4").unwrap(), 415.0);
        assert_eq!(cnv.f2n(415.0), "4A");
    }

    #[test]
    fn test_eighth_tone_preference() {
        let cnv = PitchConverter::new().with_eighth_tone_symbols(false);
        assert!(!cnv.eighth_tone_symbols());
        assert_eq!(cnv.m2n(60.25), "4C+25");
        assert_eq!(PitchConverter::new().m2n(60.25), "4C>");
        assert_eq!(PitchConverter::new().midinote_to_notename(60.75), "4Db<");
        assert_eq!(cnv.midi_to_note_parts(60.75).chromatic_name, "Db");
    }

    #[test]
    fn test_freq_round() {
        let cnv = PitchConverter::new().with_reference_freq(440.0);
        assert_close(cnv.freq_round(445.0, 1).unwrap(), 440.0);
        assert!(cnv.freq_round(445.0, 0).is_err());
    }

    #[test]
    fn test_normalize_notename() {
        let cnv = PitchConverter::new();
        assert_eq!(cnv.normalize_notename("a4+24").unwrap(), "4A+24");
        assert_eq!(cnv.normalize_notename("4B#").unwrap(), "5C");
        assert_eq!(cnv.normalize_notename("Db4+75").unwrap(), "4D<");
    }

    #[test]
    fn test_pianofreqs_range() {
        let cnv = PitchConverter::new().with_reference_freq(440.0);
        let freqs = cnv.pianofreqs("A0", "C8").unwrap();
        assert_eq!(freqs.len(), 88);
        assert_close(freqs[0], 27.5);
        assert_close(freqs[48], 440.0);
    }

    #[test]
    fn test_str2midi_notenames_and_frequencies() {
        let cnv = PitchConverter::new().with_reference_freq(440.0);
        assert_eq!(cnv.str2midi("4C").unwrap(), 60.0);
        assert_close(cnv.str2midi("440hz").unwrap(), 69.0);
        assert_close(cnv.str2midi("880Hz").unwrap(), 81.0);
        assert_close(
            cnv.str2midi("4A+20hz").unwrap(),
            cnv.f2m(460.0),
        );
        assert_close(
            cnv.str2midi("4A-40hz").unwrap(),
            cnv.f2m(400.0),
        );
        assert!(cnv.str2midi("4A+xhz").is_err());
        assert!(cnv.str2midi("abchz").is_err());
    }

    #[test]
    fn test_as_midinotes() {
        let cnv = PitchConverter::new().with_reference_freq(440.0);
        let midinotes = cnv.as_midinotes("4G 4C 61.5 440hz").unwrap();
        assert_eq!(midinotes.len(), 4);
        assert_eq!(midinotes[..3], [67.0, 60.0, 61.5]);
        assert_close(midinotes[3], 69.0);
        assert!(cnv.as_midinotes("4G 4X").is_err());
        assert!(cnv.as_midinotes("").unwrap().is_empty());
    }

    #[test]
    fn test_quantize_notename() {
        assert_eq!(quantize_notename("4A+18", 4).unwrap(), "4A+25");
        assert_eq!(quantize_notename("4A+10", 4).unwrap(), "4A");
        assert_eq!(quantize_notename("4A+30", 2).unwrap(), "4A+");
        assert_eq!(quantize_notename("4Eb-20", 1).unwrap(), "4Eb");
        assert!(quantize_notename("4A", 0).is_err());
    }

    #[test]
    fn test_quantize_notename_whole_semitone() {
        // 90 cents above C rounds to a full semitone and is respelled.
        assert_eq!(quantize_notename("4C+90", 1).unwrap(), "4C#");
        assert_eq!(quantize_notename("4B+90", 2).unwrap(), "5C");
    }

    #[test]
    fn test_pitch_round() {
        assert_eq!(pitch_round(60.1, 1).unwrap(), ("4C".to_string(), 10));
        assert_eq!(pitch_round(60.75, 1).unwrap(), ("4C#".to_string(), -25));
        assert_eq!(pitch_round(60.6, 2).unwrap(), ("4C+".to_string(), 60));
        assert!(pitch_round(60.0, 0).is_err());
    }

    #[test]
    fn test_converter_serde_defaults() {
        let cnv: PitchConverter = serde_json::from_str("{}").unwrap();
        assert_eq!(cnv, PitchConverter::new());
        let cnv: PitchConverter = serde_json::from_str(r#"{"reference_freq": 440.0}"#).unwrap();
        assert_eq!(cnv.reference_freq(), 440.0);
        assert!(cnv.eighth_tone_symbols());
    }
}
