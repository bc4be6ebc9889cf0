//! Tone notation formatters
//!
//! Character-based transcriptions carry Chao tone letters (`˥ ˧ ˨ ˩`) and
//! length colons. The formatters rewrite that notation into alternate
//! schemes after segmentation; the word-based path never produces tone
//! glyphs and is left untouched by callers.

use std::fmt;

/// Output notation for tone marks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToneFormat {
    /// Leave the IPA tone letters as-is
    #[default]
    Original,
    /// Replace tone letters with level digits (5/3/2/1) and strip `:`
    Numeric,
    /// Rewrite Cantonese tone contours as Jyutping tone digits
    Jyutping,
}

/// Numeric substitutions: one digit per level-tone letter, then the
/// length colon is dropped.
const NUMERIC_RULES: &[(&str, &str)] = &[
    ("\u{02E5}", "5"), // ˥
    ("\u{02E7}", "3"), // ˧
    ("\u{02E8}", "2"), // ˨
    ("\u{02E9}", "1"), // ˩
    (":", ""),
];

/// Jyutping substitutions, in application order. Digraphs must precede the
/// single glyphs they contain, and stop-tone consonant pairs must fire
/// before the bare level-tone fallbacks.
const JYUTPING_RULES: &[(&str, &str)] = &[
    // Contour-tone digraphs
    ("\u{02E5}\u{02E7}", "1"), // ˥˧
    ("\u{02E5}\u{02E5}", "1"), // ˥˥
    ("\u{02E7}\u{02E5}", "2"), // ˧˥
    ("\u{02E7}\u{02E7}", "3"), // ˧˧
    ("\u{02E8}\u{02E9}", "4"), // ˨˩
    ("\u{02E9}\u{02E9}", "4"), // ˩˩
    ("\u{02E9}\u{02E7}", "5"), // ˩˧
    ("\u{02E8}\u{02E7}", "5"), // ˨˧
    ("\u{02E8}\u{02E8}", "6"), // ˨˨
    // Stop tones: entering-tone syllables end in k/t/p
    ("k\u{02E5}", "k7"),
    ("k\u{02E7}", "k8"),
    ("k\u{02E8}", "k9"),
    ("t\u{02E5}", "t7"),
    ("t\u{02E7}", "t8"),
    ("t\u{02E8}", "t9"),
    ("p\u{02E5}", "p7"),
    ("p\u{02E7}", "p8"),
    ("p\u{02E8}", "p9"),
    // Remaining single level tones
    ("\u{02E5}", "1"), // ˥
    ("\u{02E7}", "3"), // ˧
    ("\u{02E8}", "6"), // ˨
    (":", ""),
];

fn apply_rules(text: &str, rules: &[(&str, &str)]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

impl ToneFormat {
    /// All formats, in presentation order
    pub const ALL: [ToneFormat; 3] = [
        ToneFormat::Original,
        ToneFormat::Numeric,
        ToneFormat::Jyutping,
    ];

    /// Stable name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneFormat::Original => "original",
            ToneFormat::Numeric => "numeric",
            ToneFormat::Jyutping => "jyutping",
        }
    }

    /// Rewrite tone notation in a joined transcription
    ///
    /// Pure and total; `Original` is the identity. Each rule is a literal,
    /// non-overlapping, left-to-right substitution over the whole string.
    pub fn apply(&self, text: &str) -> String {
        match self {
            ToneFormat::Original => text.to_string(),
            ToneFormat::Numeric => apply_rules(text, NUMERIC_RULES),
            ToneFormat::Jyutping => apply_rules(text, JYUTPING_RULES),
        }
    }
}

impl fmt::Display for ToneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_is_identity() {
        let inputs = ["", "t˥a˧:", "/tsʊŋ˥/", "plain ascii", "˥˧˨˩"];
        for input in inputs {
            assert_eq!(ToneFormat::Original.apply(input), input);
        }
    }

    #[test]
    fn test_numeric_replaces_tones_and_strips_colon() {
        assert_eq!(ToneFormat::Numeric.apply("t˥a˧:"), "t5a3");
        assert_eq!(ToneFormat::Numeric.apply("˥˧˨˩"), "5321");
        assert_eq!(ToneFormat::Numeric.apply("a:b:c"), "abc");
    }

    #[test]
    fn test_numeric_leaves_other_characters() {
        assert_eq!(ToneFormat::Numeric.apply("/sɛk˨/"), "/sɛk2/");
        assert_eq!(ToneFormat::Numeric.apply("no tones here"), "no tones here");
    }

    #[test]
    fn test_jyutping_contour_digraphs() {
        assert_eq!(ToneFormat::Jyutping.apply("a˥˧"), "a1");
        assert_eq!(ToneFormat::Jyutping.apply("a˧˥"), "a2");
        assert_eq!(ToneFormat::Jyutping.apply("a˨˩"), "a4");
        assert_eq!(ToneFormat::Jyutping.apply("a˩˧"), "a5");
        assert_eq!(ToneFormat::Jyutping.apply("a˨˨"), "a6");
    }

    #[test]
    fn test_jyutping_digraph_beats_single_glyph() {
        // ˧˥ is tone 2; it must not decay into "3" + "1" via the single
        // glyph rules that follow it in the table
        assert_eq!(ToneFormat::Jyutping.apply("si˧˥"), "si2");
        assert_eq!(ToneFormat::Jyutping.apply("si˥˥"), "si1");
    }

    #[test]
    fn test_jyutping_stop_tones() {
        assert_eq!(ToneFormat::Jyutping.apply("sɛk˥"), "sɛk7");
        assert_eq!(ToneFormat::Jyutping.apply("sɐt˧"), "sɐt8");
        assert_eq!(ToneFormat::Jyutping.apply("sɐp˨"), "sɐp9");
    }

    #[test]
    fn test_jyutping_single_level_tones() {
        assert_eq!(ToneFormat::Jyutping.apply("si˥"), "si1");
        assert_eq!(ToneFormat::Jyutping.apply("si˧"), "si3");
        assert_eq!(ToneFormat::Jyutping.apply("si˨"), "si6");
    }

    #[test]
    fn test_jyutping_strips_colon() {
        assert_eq!(ToneFormat::Jyutping.apply("sa:m˥"), "sam1");
    }

    #[test]
    fn test_format_names() {
        assert_eq!(ToneFormat::Original.as_str(), "original");
        assert_eq!(ToneFormat::Numeric.as_str(), "numeric");
        assert_eq!(ToneFormat::Jyutping.as_str(), "jyutping");
        assert_eq!(ToneFormat::Jyutping.to_string(), "jyutping");
    }

    #[test]
    fn test_all_ordering() {
        let names: Vec<&str> = ToneFormat::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["original", "numeric", "jyutping"]);
    }

    #[test]
    fn test_empty_input() {
        for format in ToneFormat::ALL {
            assert_eq!(format.apply(""), "");
        }
    }
}
