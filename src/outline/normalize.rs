//! Text normalization for extracted runs.
//!
//! PDF extraction leaves typographic glyphs, injected whitespace inside
//! words ("T o SEE Y ou"), and uneven spacing. Normalization maps a fixed
//! set of glyphs to ASCII, repairs character-split words, and collapses
//! whitespace. The result is deterministic and idempotent.

/// Typographic glyphs mapped to plain ASCII before any other cleanup.
const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2013}', "-"),  // en dash
    ('\u{2014}', "--"), // em dash
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2022}', "*"),
    ('\u{F0B7}', "*"), // Symbol-font bullet (private use area)
];

/// Normalize a piece of extracted text.
///
/// Applies glyph replacements, repairs broken words, collapses whitespace
/// runs to single spaces, and trims the ends.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut replaced = String::with_capacity(text.len());
    for c in text.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => replaced.push_str(to),
            None => replaced.push(c),
        }
    }

    repair_broken_words(&replaced)
}

/// Merge words that were split character-by-character during extraction.
///
/// A run of whitespace-separated single letters merges into one token,
/// absorbing a trailing lowercase fragment left over from the split word:
/// `"T o SEE Y ou"` becomes `"To SEE You"`. Applied left-to-right,
/// non-overlapping. Joining with single spaces doubles as whitespace
/// collapsing.
fn repair_broken_words(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        if !is_single_letter(tokens[i]) {
            out.push(tokens[i].to_string());
            i += 1;
            continue;
        }

        let mut merged = tokens[i].to_string();
        let mut j = i + 1;
        while j < tokens.len() && is_single_letter(tokens[j]) {
            merged.push_str(tokens[j]);
            j += 1;
        }
        if j < tokens.len() && is_lowercase_fragment(tokens[j]) {
            merged.push_str(tokens[j]);
            j += 1;
        }
        out.push(merged);
        i = j;
    }

    out.join(" ")
}

fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/// A word tail like "ou" in "Y ou": alphabetic and starting lowercase.
fn is_lowercase_fragment(token: &str) -> bool {
    token.chars().all(|c| c.is_alphabetic())
        && token.chars().next().is_some_and(|c| c.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_replacements() {
        assert_eq!(normalize("a \u{2013} b \u{2014} c"), "a - b -- c");
        assert_eq!(normalize("\u{2018}quoted\u{2019}"), "'quoted'");
        assert_eq!(normalize("\u{201C}quoted\u{201D}"), "\"quoted\"");
        assert_eq!(normalize("\u{2022} item \u{F0B7} item"), "* item * item");
    }

    #[test]
    fn test_broken_word_repair() {
        assert_eq!(normalize("T o SEE Y ou"), "To SEE You");
        assert_eq!(normalize("T o d a y"), "Today");
        assert_eq!(normalize("quest for excellence"), "quest for excellence");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize("  spaced\t\tout   text \n"), "spaced out text");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "T o SEE Y ou",
            "  spaced\t\tout   text ",
            "\u{2018}a\u{2019} \u{2013} b",
            "1.2 Numbered heading",
            "REVISION HISTORY",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_single_trailing_letter_survives() {
        assert_eq!(normalize("appendix A"), "appendix A");
        assert_eq!(normalize("x"), "x");
    }
}
