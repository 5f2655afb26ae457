//! Tests for the notename grammar.

use pretty_assertions::assert_eq;

use super::*;
use crate::error::PitchError;

fn assert_midinote(notename: &str, expected: f64) {
    let midinote = notename_to_midinote(notename)
        .unwrap_or_else(|e| panic!("'{}' should parse: {}", notename, e));
    assert!(
        (midinote - expected).abs() < 1e-9,
        "'{}' parsed as {}, expected {}",
        notename,
        midinote,
        expected
    );
}

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_parse_literals() {
    assert_midinote("4C", 60.0);
    assert_midinote("4D-20", 61.8);
    assert_midinote("4Eb+", 63.5);
    assert_midinote("4E<", 63.75);
    assert_midinote("4C#-12", 60.88);
    assert_midinote("4A", 69.0);
}

#[test]
fn test_parse_both_orders() {
    for (octave_first, letter_first) in [
        ("4C#+10", "C#4+10"),
        ("5Db-", "Db5-"),
        ("3A>", "A3>"),
        ("-1C", "C-1"),
    ] {
        assert_eq!(
            split_notename(octave_first).unwrap(),
            split_notename(letter_first).unwrap()
        );
    }
}

#[test]
fn test_parse_case_insensitive_letter() {
    assert_eq!(
        notename_to_midinote("4eb").unwrap(),
        notename_to_midinote("4Eb").unwrap()
    );
    assert_eq!(split_notename("c#4").unwrap().diatonic_name, 'C');
}

#[test]
fn test_parse_arrow_aliases() {
    assert_midinote("4C↑", 60.25);
    assert_midinote("4C↓", 59.75);
    assert_midinote("C4↑", 60.25);
}

#[test]
fn test_parse_negative_octave() {
    assert_midinote("-1C", 0.0);
    assert_midinote("-1A", 9.0);
}

#[test]
fn test_parse_spelling_across_octave() {
    // B# and Cb sound in the neighbouring octave.
    assert_midinote("4B#", 72.0);
    assert_midinote("4Cb", 59.0);
    assert_midinote("4E#", 65.0);
    assert_midinote("4Fb", 64.0);
}

#[test]
fn test_parse_trims_whitespace() {
    assert_midinote("  4G ", 67.0);
}

#[test]
fn test_parse_rejects_invalid() {
    for bad in ["4Z", "C##4", "", "4H", "h4", "4", "C", "4C+x", "4C#b", "4C+10hz"] {
        let err = notename_to_midinote(bad).unwrap_err();
        assert!(err.is_parse_error(), "'{}' should be a parse error", bad);
        assert_eq!(err.code(), "PITCH_001");
    }
}

#[test]
fn test_parse_error_reports_input() {
    match split_notename("4H") {
        Err(PitchError::InvalidNotename { input, .. }) => assert_eq!(input, "4H"),
        other => panic!("expected InvalidNotename, got {:?}", other),
    }
}

// ============================================================================
// NoteParts Tests
// ============================================================================

#[test]
fn test_split_notename_parts() {
    let parts = split_notename("4C#+10").unwrap();
    assert_eq!(
        parts,
        NoteParts {
            octave: 4,
            diatonic_name: 'C',
            alteration: Alteration::Sharp,
            cents_deviation: 10,
        }
    );
    assert_eq!(parts.alteration_cents(), 100);
    assert_eq!(parts.chromatic_name(), "C#");
    assert_eq!(parts.diatonic_step(), 0);

    let parts = split_notename("5Db<").unwrap();
    assert_eq!(parts.cents_deviation, -25);
    assert_eq!(parts.diatonic_step(), 1);
}

#[test]
fn test_note_parts_sounding_cents() {
    assert_eq!(split_notename("4C").unwrap().sounding_cents(), 6000);
    assert_eq!(split_notename("4B#").unwrap().sounding_cents(), 7200);
    assert_eq!(split_notename("4Cb-10").unwrap().sounding_cents(), 5890);
}

#[test]
fn test_split_cents() {
    assert_eq!(split_cents("4E-").unwrap(), ("4E".to_string(), -50));
    assert_eq!(split_cents("5C#+10").unwrap(), ("5C#".to_string(), 10));
    assert_eq!(split_cents("Eb4").unwrap(), ("4Eb".to_string(), 0));
}

#[test]
fn test_notename_upper() {
    assert_eq!(notename_upper("4eb").unwrap(), "4Eb");
    assert_eq!(notename_upper("eb4+20").unwrap(), "4Eb+20");
    assert_eq!(notename_upper("c4>").unwrap(), "4C+25");
}

#[test]
fn test_construct_notename() {
    assert_eq!(construct_notename(4, 'a', Alteration::Flat, -25), "4Ab-25");
    assert_eq!(construct_notename(6, 'd', Alteration::Sharp, 40), "6D#+40");
    assert_eq!(construct_notename(5, 'e', Alteration::Natural, -50), "5E-");
    assert_eq!(construct_notename(3, 'G', Alteration::Natural, 0), "3G");
}

#[test]
fn test_is_valid_notename() {
    assert!(is_valid_notename("4C", DEFAULT_MIN_PITCH));
    assert!(is_valid_notename("0C", DEFAULT_MIN_PITCH));
    assert!(!is_valid_notename("-1B", DEFAULT_MIN_PITCH));
    assert!(is_valid_notename("-1B", 0.0));
    assert!(!is_valid_notename("C##4", DEFAULT_MIN_PITCH));
}

// ============================================================================
// Round-trip Tests
// ============================================================================

#[test]
fn test_format_then_parse_quarter_tone_grid() {
    for step in 0..(128 * 4) {
        let midinote = step as f64 / 4.0;
        for eighth in [true, false] {
            let notename = format_midinote(midinote, eighth);
            let parsed = notename_to_midinote(&notename).unwrap();
            assert!(
                (parsed - midinote).abs() < 1e-6,
                "{} -> '{}' -> {}",
                midinote,
                notename,
                parsed
            );
        }
    }
}

#[test]
fn test_parse_then_format_keeps_pitch() {
    for notename in ["4Db+20", "3B#", "5Cb-30", "Eb4<", "4G+"] {
        let midinote = notename_to_midinote(notename).unwrap();
        let reparsed = notename_to_midinote(&format_midinote(midinote, true)).unwrap();
        assert!((reparsed - midinote).abs() < 1e-6, "{}", notename);
    }
}
