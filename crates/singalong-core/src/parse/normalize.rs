//! Stem normalization: turns a raw path into a comparison-safe stem.
//!
//! The steps run in a fixed order:
//!
//! 1. unify `\` and `/` and keep only the final path segment
//! 2. strip exactly one trailing extension
//! 3. compose to Unicode NFC (HFS+ stores decomposed names)
//! 4. fold full-width ASCII variants to ASCII
//! 5. fold typographic dashes to ASCII `-`, keeping the surrounding spacing
//! 6. drop zero-width characters, unify exotic spaces, trim
//! 7. strip a single trailing period

use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Dash-like characters that downstream matchers should see as `-`.
const DASH_VARIANTS: &[char] = &[
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus sign
    '\u{FE58}', // small em dash
    '\u{FE63}', // small hyphen-minus
];

/// Zero-width characters dropped outright. ZWJ and ZWNJ are kept: they
/// carry meaning in emoji sequences and several scripts.
const INVISIBLE: &[char] = &['\u{180E}', '\u{200B}', '\u{2060}', '\u{FEFF}'];

/// Distance between a full-width form (U+FF01..=U+FF5E) and its ASCII twin.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Normalize a raw filename or path into its stem.
///
/// Never fails. Directory-only input (`"music/"`) yields an empty string.
///
/// ```
/// use singalong_core::normalize;
///
/// assert_eq!(normalize(r"C:\karaoke\Artist — Title.cdg"), "Artist - Title");
/// assert_eq!(normalize("song.cdg.bak"), "song.cdg");
/// ```
pub fn normalize(raw: &str) -> String {
    let stem = strip_extension(basename(raw));
    strip_trailing_period(fold_text(stem))
}

/// Normalize raw bytes, keeping only the longest valid UTF-8 prefix.
pub fn normalize_bytes(raw: &[u8]) -> String {
    let text = decodable_prefix(raw);
    if text.len() < raw.len() {
        log::warn!(
            "Name is not valid UTF-8 after byte {}; normalizing the decodable prefix",
            text.len()
        );
    }
    normalize(text)
}

/// Apply the character-level folding (steps 3 to 6) without touching path
/// structure or extensions. Used for directory names as well as stems.
pub fn fold_text(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let mut folded = String::with_capacity(composed.len());

    for c in composed.chars() {
        match c {
            c if INVISIBLE.contains(&c) => {}
            c if DASH_VARIANTS.contains(&c) => folded.push('-'),
            '\u{FF01}'..='\u{FF5E}' => folded.push(fold_fullwidth(c)),
            '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => {
                folded.push(' ');
            }
            c => folded.push(c),
        }
    }

    // Folding can leave a base letter next to a combining mark it now
    // composes with (`Ａ\u{301}` becomes `A\u{301}`), so recompose.
    let trimmed = folded.trim();
    if is_nfc(trimmed) {
        trimmed.to_owned()
    } else {
        trimmed.nfc().collect()
    }
}

/// Drop one trailing `.` and any whitespace it leaves exposed.
pub(crate) fn strip_trailing_period(folded: String) -> String {
    match folded.strip_suffix('.') {
        Some(rest) => rest.trim_end().to_owned(),
        None => folded,
    }
}

/// The final path segment, treating `\` and `/` alike.
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or_default()
}

/// Strip one trailing extension. A leading dot (`.cdg`) is part of the name,
/// the way `Path::file_stem` treats dotfiles.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

fn fold_fullwidth(c: char) -> char {
    char::from_u32(u32::from(c) - FULLWIDTH_OFFSET).unwrap_or(c)
}

pub(crate) fn decodable_prefix(raw: &[u8]) -> &str {
    match std::str::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => std::str::from_utf8(&raw[..e.valid_up_to()]).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_unifies_separators() {
        assert_eq!(normalize(r"C:\my-music\rock-hits\Queen - Bohemian Rhapsody.cdg"), "Queen - Bohemian Rhapsody");
        assert_eq!(normalize("/music/rock-band/best-of/Artist - Title.mp3"), "Artist - Title");
        assert_eq!(normalize(r"mixed/dir\Artist - Title.kar"), "Artist - Title");
    }

    #[test]
    fn test_directory_only_is_empty() {
        assert_eq!(normalize("music/"), "");
        assert_eq!(normalize(r"music\karaoke\"), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_strips_exactly_one_extension() {
        assert_eq!(normalize("song.cdg.bak"), "song.cdg");
        assert_eq!(normalize("Artist - Song.name.cdg"), "Artist - Song.name");
        assert_eq!(normalize("NoExtension"), "NoExtension");
    }

    #[test]
    fn test_dotfile_keeps_its_name() {
        assert_eq!(normalize(".cdg"), ".cdg");
    }

    #[test]
    fn test_composes_decomposed_text() {
        let decomposed = "Bjo\u{308}rk - Jo\u{301}ga.cdg";
        assert_eq!(normalize(decomposed), "Björk - Jóga");
        assert_eq!(normalize(decomposed), normalize("Björk - Jóga.cdg"));
    }

    #[test]
    fn test_folds_fullwidth_forms() {
        assert_eq!(normalize("ＡＢＣ（Ｌｉｖｅ）.cdg"), "ABC(Live)");
        assert_eq!(normalize("Artist － Title.mp3"), "Artist - Title");
        assert_eq!(normalize("Artist\u{3000}-\u{3000}Title.mp3"), "Artist - Title");
    }

    #[test]
    fn test_folds_dash_variants_keeping_spacing() {
        assert_eq!(normalize("Artist — Title.mp3"), "Artist - Title");
        assert_eq!(normalize("Artist – Title.mp3"), "Artist - Title");
        assert_eq!(normalize("Artist ‒ Title.mp3"), "Artist - Title");
        assert_eq!(normalize("Artist ﹘ Title.mp3"), "Artist - Title");
        assert_eq!(normalize("Artist—Title.mp3"), "Artist-Title");
    }

    #[test]
    fn test_strips_invisible_characters() {
        assert_eq!(normalize("\u{FEFF}Artist\u{200B} - Title\u{2060}.mp3"), "Artist - Title");
        assert_eq!(normalize("\u{00A0}Artist - Title\u{00A0}.mp3"), "Artist - Title");
    }

    #[test]
    fn test_recomposes_after_folding() {
        assert_eq!(fold_text("Ａ\u{301}"), "\u{C1}");
        assert_eq!(fold_text("e\u{200B}\u{301}"), "\u{E9}");
    }

    #[test]
    fn test_strips_single_trailing_period() {
        assert_eq!(normalize("Artist - Title..mp3"), "Artist - Title");
        assert_eq!(normalize("Artist - Title."), "Artist - Title");
        assert_eq!(normalize("Wait For It ...cdg"), "Wait For It .");
    }

    #[test]
    fn test_dash_only_passes_through() {
        assert_eq!(normalize("---.cdg"), "---");
        assert_eq!(normalize("———.cdg"), "---");
    }

    #[test]
    fn test_preserves_cjk() {
        assert_eq!(normalize("日本語 - タイトル.cdg"), "日本語 - タイトル");
        assert_eq!(normalize("ラーメン.kar"), "ラーメン");
    }

    #[test]
    fn test_normalize_bytes_keeps_decodable_prefix() {
        let mut raw = "Artist - Title".as_bytes().to_vec();
        raw.extend_from_slice(&[0xFF, 0xFE]);
        raw.extend_from_slice(b".cdg");
        assert_eq!(normalize_bytes(&raw), "Artist - Title");
        assert_eq!(normalize_bytes(&[0xC3]), "");
        assert_eq!(normalize_bytes("Artist - Title.cdg".as_bytes()), "Artist - Title");
    }
}
