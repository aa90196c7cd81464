// Conversion properties: bijectivity, spacing invariance, passthrough,
// attachment integrity, lyrics pass-through, case preservation

use cabc_converter::converters::cabc_to_abc::mapper::map_token;
use cabc_converter::converters::cabc_to_abc::{
    convert_cabc_to_abc, convert_document, ConversionSettings, InputKind,
};
use cabc_converter::diagnostics::kinds;
use cabc_converter::models::{OutputVariant, SwaraMapping, TokenKind};
use cabc_converter::parse::tokenize;

const HEADERS: &str = "X:1\nT:Test Song\nM:4/4\nL:1/4\nK:C";

fn is_swara_char(c: char) -> bool {
    "SRGMPDNsrgmpdn".contains(c)
}

#[test]
fn test_mapping_round_trips_every_swara() {
    let mapping = SwaraMapping::global();
    for swara in "SRGMPDN".chars().chain("srgmpdn".chars()) {
        let western = mapping.to_western(swara).expect("every swara maps");
        assert_eq!(mapping.to_swara(western), Some(swara), "round trip for {swara}");
        assert_eq!(western.is_uppercase(), swara.is_uppercase(), "case kept for {swara}");
    }
}

#[test]
fn test_spacing_invariance() {
    let lines = [
        "S R G M | P D N s |",
        "  S2  R4 G- |  -G M   P2 ||",
        "|: s'2 n, d/2 p3/2 z :|",
        "\"Am\"S [K:D] !fermata!R2 % last bar",
    ];
    for line in lines {
        let output = convert_cabc_to_abc(line).unwrap();
        assert_eq!(output.chars().count(), line.chars().count(), "length of {line:?}");

        for (i, (before, after)) in line.chars().zip(output.chars()).enumerate() {
            let token_at = tokenize(line)
                .into_iter()
                .find(|t| t.position() <= i && i < t.position() + t.len());
            let is_mapped = token_at
                .map(|t| t.kind() == TokenKind::Swara && t.position() == i)
                .unwrap_or(false);
            if is_mapped {
                assert!(is_swara_char(before));
            } else {
                assert_eq!(before, after, "char {i} of {line:?} changed");
            }
        }
    }
}

#[test]
fn test_token_count_preserved() {
    let line = "S2 R4 G- | -G M P2 |";
    let tokens = tokenize(line);
    let pieces: Vec<String> = tokens.iter().map(|t| map_token(t, 1).unwrap()).collect();

    assert_eq!(pieces.len(), tokens.len());
    for (token, piece) in tokens.iter().zip(&pieces) {
        assert_eq!(token.len(), piece.chars().count(), "token {:?}", token.raw());
    }
    assert_eq!(pieces.concat(), convert_cabc_to_abc(line).unwrap());
    assert_eq!(pieces.concat(), "C2 D4 E- | -E F G2 |");
}

#[test]
fn test_passthrough_tokens_identical_in_every_variant() {
    let input = format!("{HEADERS}\n|: S z2 R x | G- -G :|\nw:sa ri ga _");
    let result =
        convert_document(&input, InputKind::NotesLyrics, &ConversionSettings::default()).unwrap();

    for rendered in &result.variants {
        let content = rendered.content();
        for header in HEADERS.lines() {
            assert!(content.contains(header), "{} lost header {header}", rendered.variant);
        }
        assert!(
            content.contains("|: C z2 D x | E- -E :|"),
            "{} altered bars or rests",
            rendered.variant
        );
    }
}

#[test]
fn test_attachment_integrity() {
    assert_eq!(convert_cabc_to_abc("S2'-").unwrap(), "C2'-");
    assert_eq!(convert_cabc_to_abc("S'2-").unwrap(), "C'2-");
    assert_eq!(convert_cabc_to_abc("n,,/2").unwrap(), "b,,/2");
}

#[test]
fn test_lyrics_pass_through() {
    let input = format!("{HEADERS}\nS R G M |\nw: sa ri ga ma");
    let result =
        convert_document(&input, InputKind::NotesLyrics, &ConversionSettings::default()).unwrap();

    for variant in [OutputVariant::NotesLyrics, OutputVariant::NotesLyricsSwaras] {
        let content = result.content(variant).unwrap();
        assert_eq!(
            content.lines().filter(|l| *l == "w: sa ri ga ma").count(),
            1,
            "{variant} must carry the lyric line unchanged"
        );
    }
    for variant in [OutputVariant::Notes, OutputVariant::NotesSwaras] {
        let content = result.content(variant).unwrap();
        assert!(!content.contains("w: sa ri ga ma"), "{variant} must not carry lyrics");
    }
}

#[test]
fn test_end_to_end_scale() {
    let input = format!("{HEADERS}\nS R G M P D N S");
    let result = convert_document(&input, InputKind::Notes, &ConversionSettings::default()).unwrap();

    let notes = result.content(OutputVariant::Notes).unwrap();
    assert_eq!(notes, format!("{HEADERS}\nC D E F G A B C"));

    let swaras = result.content(OutputVariant::NotesSwaras).unwrap();
    assert_eq!(swaras, format!("{HEADERS}\nC D E F G A B C\nw:S R G M P D N S"));
}

#[test]
fn test_case_preservation() {
    assert_eq!(convert_cabc_to_abc("s").unwrap(), "c");
    assert_eq!(convert_cabc_to_abc("S s").unwrap(), "C c");
}

#[test]
fn test_never_fails_on_arbitrary_literals() {
    let noisy = "S ~@#$^&*()_+{}<>?é漢 \"unclosed R";
    let output = convert_cabc_to_abc(noisy).unwrap();
    assert_eq!(output, "C ~@#$^&*()_+{}<>?é漢 \"unclosed R");

    let result = convert_document(noisy, InputKind::Notes, &ConversionSettings::default()).unwrap();
    assert_eq!(result.diagnostics.of_kind(kinds::UNTERMINATED_QUOTE).count(), 1);
}

#[test]
fn test_idempotent_conversion() {
    let input = format!("{HEADERS}\nS R G- | -G M P2 |\nw:sri go _ vin da");
    let settings = ConversionSettings::default();
    let first = convert_document(&input, InputKind::NotesLyrics, &settings).unwrap();
    let second = convert_document(&input, InputKind::NotesLyrics, &settings).unwrap();
    assert_eq!(first.variants, second.variants);
}
