//! Canonical comparison form for ASR transcripts.
//!
//! Speech-to-text output is inconsistent about accents and punctuation, so
//! every pattern is matched against this form instead of the raw text.

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

/// Normalize a raw transcript.
///
/// The result contains only `[a-z0-9]` separated by single spaces, with no
/// leading or trailing whitespace. Total for every input.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    let mut result = String::with_capacity(lowered.len());
    let mut pending_space = false;

    // Only nonspacing marks (accents) are dropped. Spacing and enclosing marks
    // fall through to the separator branch.
    let decomposed = lowered
        .trim()
        .nfd()
        .filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark);

    for ch in decomposed {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space && !result.is_empty() {
                result.push(' ');
            }
            pending_space = false;
            result.push(ch);
        } else {
            // Anything else (punctuation, other scripts, whitespace) separates words.
            pending_space = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents() {
        assert_eq!(normalize("cállate"), "callate");
        assert_eq!(normalize("ÉPICO"), "epico");
        assert_eq!(normalize("no confío"), "no confio");
        assert_eq!(normalize("ñoño"), "nono");
    }

    #[test]
    fn collapses_punctuation_and_whitespace() {
        assert_eq!(normalize("  ¡Cállate,   bot!!  "), "callate bot");
        assert_eq!(normalize("jaja...jaja"), "jaja jaja");
        assert_eq!(normalize("hola\t\n mundo"), "hola mundo");
    }

    #[test]
    fn enclosing_marks_separate_words() {
        assert_eq!(normalize("a\u{20DD}b"), "a b");
        assert_eq!(normalize("1\u{FE0F}\u{20E3}2\u{FE0F}\u{20E3}"), "1 2");
        // Spacing mark (Devanagari vowel sign AA) between ASCII letters.
        assert_eq!(normalize("x\u{093E}y"), "x y");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize("Son las 3:45"), "son las 3 45");
    }

    #[test]
    fn empty_and_non_latin_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!¿¡..."), "");
        assert_eq!(normalize("привет мир"), "");
        assert_eq!(normalize("你好 bot"), "bot");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "",
            "Cállate, MALDITO bot!!",
            "  estoy   triste... ",
            "¿Qué miedo?",
            "ÅÉÎÕÜ çñ 123",
            "emoji 😂😂 jaja",
            "привет",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn output_alphabet_is_canonical() {
        let out = normalize("  Ünïcödé — mezcla: ABC/def_123 \u{301}x ");
        assert!(
            out.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
        );
        assert!(!out.contains("  "));
        assert_eq!(out, out.trim());
    }
}
