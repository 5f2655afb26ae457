//! The process-wide default converter.
//!
//! Kept in its own test binary with a single test, since it mutates global
//! state that the free functions read.

use pitchtools::{
    default_converter, f2m, m2f, m2n, n2f, reference_freq, set_default_converter,
    set_reference_freq, PitchConverter, DEFAULT_REFERENCE_FREQ,
};

#[test]
fn test_default_converter_setters() {
    assert_eq!(reference_freq(), DEFAULT_REFERENCE_FREQ);
    assert_eq!(m2f(69.0), 442.0);

    let adhoc = PitchConverter::new();
    set_reference_freq(440.0);
    assert_eq!(reference_freq(), 440.0);
    assert_eq!(n2f("4A").unwrap(), 440.0);
    assert!((f2m(880.0) - 81.0).abs() < 1e-9);
    // Ad-hoc converters are values and keep their own settings.
    assert_eq!(adhoc.reference_freq(), 442.0);

    set_default_converter(
        PitchConverter::new()
            .with_reference_freq(415.0)
            .with_eighth_tone_symbols(false),
    );
    let snapshot = default_converter();
    assert_eq!(snapshot.reference_freq(), 415.0);
    assert!(!snapshot.eighth_tone_symbols());
    assert_eq!(m2n(60.25), "4C+25");

    set_default_converter(PitchConverter::default());
    assert_eq!(m2n(60.25), "4C>");
    assert_eq!(reference_freq(), 442.0);
}
