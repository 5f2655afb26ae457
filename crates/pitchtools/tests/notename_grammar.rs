//! Integration tests for the notename grammar and the midinote formatter.

use pitchtools::{
    enharmonic, format_midinote, m2n, n2m, notated_pitch, quantize_midinote, quantize_notename,
    split_notename, Alteration, ErrorKind, PitchConverter, PitchError, QuantizeMethod,
};
use pretty_assertions::assert_eq;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_documented_literals() {
    assert_close(n2m("4C").unwrap(), 60.0);
    assert_close(n2m("4D-20").unwrap(), 61.8);
    assert_close(n2m("4Eb+").unwrap(), 63.5);
    assert_close(n2m("4E<").unwrap(), 63.75);
    assert_close(n2m("4C#-12").unwrap(), 60.88);
}

#[test]
fn test_letter_first_equals_octave_first() {
    for (a, b) in [("C4", "4C"), ("Db5+20", "5Db+20"), ("b3-", "3B-"), ("f#2>", "2F#>")] {
        assert_close(n2m(a).unwrap(), n2m(b).unwrap());
    }
}

#[test]
fn test_invalid_notenames() {
    for bad in ["4Z", "C##4", "4Cbb", "", "   ", "H4", "4C+1.5", "x", "4C 4D"] {
        let err = n2m(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "'{}'", bad);
    }
}

#[test]
fn test_out_of_range_octave_and_cents() {
    for bad in [
        "2147483647C",
        "-2147483648C",
        "C2147483647",
        "101C",
        "-101C",
        "4C#+2147483600",
        "4C-2147483648",
        "4C+10001",
    ] {
        let err = n2m(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "'{}'", bad);
        assert!(notated_pitch(bad, 4).is_err(), "'{}'", bad);
        assert!(enharmonic(bad).is_err(), "'{}'", bad);
    }

    assert_close(n2m("100C").unwrap(), 1212.0);
    assert_close(n2m("-100C").unwrap(), -1188.0);
    assert_close(n2m("4C+10000").unwrap(), 160.0);
    assert_close(n2m("4C-10000").unwrap(), -40.0);
}

#[test]
fn test_split_notename_resolves_shortcuts() {
    let cases = [
        ("4C", 0),
        ("4C+", 50),
        ("4C-", -50),
        ("4C>", 25),
        ("4C<", -25),
        ("4C↑", 25),
        ("4C↓", -25),
        ("4C+7", 7),
        ("4C-120", -120),
    ];
    for (notename, cents) in cases {
        assert_eq!(split_notename(notename).unwrap().cents_deviation, cents, "{}", notename);
    }
    assert_eq!(split_notename("Bb3").unwrap().alteration, Alteration::Flat);
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_documented_formatting() {
    assert_eq!(m2n(61.2), "4C#+20");
    assert_eq!(m2n(60.5), "4C+");
    assert_eq!(m2n(61.5), "4D-");
    assert_eq!(m2n(60.25), "4C>");
    assert_eq!(m2n(66.25), "4Gb>");
    assert_eq!(m2n(60.75), "4Db<");
}

#[test]
fn test_formatting_without_eighth_tones() {
    let cnv = PitchConverter::new().with_eighth_tone_symbols(false);
    assert_eq!(cnv.m2n(60.25), "4C+25");
    assert_eq!(cnv.m2n(60.75), "4Db-25");
    assert_eq!(cnv.m2n(60.5), "4C+");
    assert_eq!(format_midinote(60.25, false), cnv.m2n(60.25));
}

#[test]
fn test_semitone_grid_roundtrip() {
    for midinote in 0..128 {
        let midinote = midinote as f64;
        assert_close(n2m(&m2n(midinote)).unwrap(), midinote);
    }
}

// ============================================================================
// Quantization
// ============================================================================

#[test]
fn test_quantization_literals() {
    assert_eq!(quantize_midinote(60.1, 4, QuantizeMethod::Round).unwrap(), 60.0);
    assert_eq!(quantize_midinote(60.13, 4, QuantizeMethod::Round).unwrap(), 60.25);
    assert_eq!(quantize_midinote(60.49, 2, QuantizeMethod::Floor).unwrap(), 60.0);
    assert_eq!(quantize_notename("4A+18", 4).unwrap(), "4A+25");
}

#[test]
fn test_quantize_method_names() {
    assert_eq!("round".parse::<QuantizeMethod>().unwrap(), QuantizeMethod::Round);
    let err = "nearest".parse::<QuantizeMethod>().unwrap_err();
    assert!(matches!(err, PitchError::UnknownQuantizeMethod { .. }));
    assert_eq!(err.code(), "PITCH_004");
}
