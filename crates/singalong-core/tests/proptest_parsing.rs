//! Property-based checks: parsing never panics and is insensitive to the
//! representation differences the normalizer folds away.

use proptest::prelude::*;
use singalong_core::parse::fold_text;
use singalong_core::{normalize, normalize_bytes, parse, parse_archive_member, parse_bytes};

/// Dash variants the normalizer folds to ASCII `-`.
const TYPOGRAPHIC_DASHES: [char; 5] = ['\u{2012}', '\u{2013}', '\u{2014}', '\u{FE58}', '\u{FF0D}'];

/// Name fragments without separators, mixing ASCII, accented and CJK text.
fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9éøüß日本語タイトル ]{1,20}")
        .unwrap()
        .prop_map(|s| s.trim().to_string())
        .prop_filter("non-empty", |s| !s.is_empty())
}

proptest! {
    #[test]
    fn parse_never_panics(raw in any::<String>()) {
        let _ = parse(&raw);
        let _ = parse_archive_member(&raw);
    }

    #[test]
    fn parse_bytes_never_panics(raw in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = parse_bytes(&raw);
        let _ = normalize_bytes(&raw);
    }

    #[test]
    fn parse_is_deterministic(raw in any::<String>()) {
        prop_assert_eq!(parse(&raw), parse(&raw));
    }

    #[test]
    fn fold_text_is_idempotent(raw in any::<String>()) {
        let once = fold_text(&raw);
        prop_assert_eq!(fold_text(&once), once);
    }

    #[test]
    fn normalized_stem_has_no_typographic_dashes(raw in any::<String>()) {
        let stem = normalize(&raw);
        prop_assert!(!stem.contains(TYPOGRAPHIC_DASHES), "dash left in {:?}", stem);
    }

    #[test]
    fn dash_variants_parse_alike(
        artist in word(),
        title in word(),
        dash in prop::sample::select(TYPOGRAPHIC_DASHES.to_vec()),
    ) {
        let ascii = parse(&format!("{artist} - {title}.cdg"));
        let typographic = parse(&format!("{artist} {dash} {title}.cdg"));
        prop_assert_eq!(ascii, typographic);
    }

    #[test]
    fn spaced_dash_round_trips_fields(artist in word(), title in word()) {
        let song = parse(&format!("{artist} - {title}.mp3"));
        prop_assert_eq!(song.artist(), artist.as_str());
        prop_assert_eq!(song.title(), title.as_str());
    }
}
