//! Text canonicalisation for accent- and case-insensitive matching.
//!
//! Queries and candidate fields go through the same [`normalize`] so that
//! substring containment ignores diacritics, case and surrounding space.

use unicode_normalization::UnicodeNormalization;

/// Canonicalise `text` for comparison.
///
/// Decomposes to NFKD, drops everything outside printable ASCII (which
/// removes combining accents), folds ASCII whitespace to a plain space,
/// trims and lower-cases. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter_map(|c| {
            if c.is_ascii_whitespace() {
                Some(' ')
            } else if c.is_ascii_graphic() {
                Some(c.to_ascii_lowercase())
            } else {
                None
            }
        })
        .collect();
    folded.trim().to_string()
}

/// Number of characters left after normalising `text`.
pub fn normalized_len(text: &str) -> usize {
    // Normalised text is pure ASCII.
    normalize(text).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Criptografía"), "criptografia");
        assert_eq!(normalize("Sécurité"), "securite");
        assert_eq!(normalize("Überwachung"), "uberwachung");
        assert_eq!(normalize("proteção"), "protecao");
    }

    #[test]
    fn folds_case_and_trims() {
        assert_eq!(normalize("  RansomWare \n"), "ransomware");
    }

    #[test]
    fn inner_whitespace_becomes_space() {
        assert_eq!(normalize("denial\tof\nservice"), "denial of service");
    }

    #[test]
    fn compatibility_forms_decompose() {
        // U+FB01 LATIN SMALL LIGATURE FI
        assert_eq!(normalize("\u{FB01}rewall"), "firewall");
    }

    #[test]
    fn non_latin_text_vanishes() {
        assert_eq!(normalize("病毒"), "");
        assert_eq!(normalize("вирус x"), "x");
    }

    #[test]
    fn empty_yields_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "Cortafuegos de Aplicación",
            "  ÀÉÎÕÜ  ",
            "Zero-Day\tExploit",
            "ﬁ ﬂ",
            "",
            "日本 phishing",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn normalized_len_counts_chars() {
        assert_eq!(normalized_len(" Ñu "), 2);
        assert_eq!(normalized_len("病毒"), 0);
    }
}
