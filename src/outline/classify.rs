//! Heading classification.
//!
//! An ordered table of predicate rules, evaluated in sequence; the first
//! rule that decides wins. Keeping the cascade as data makes rule
//! precedence directly testable.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{HeadingLevel, LogicalLine};

use super::thresholds::FontThresholds;

/// What a single rule decided for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleOutcome {
    /// Definitely not a heading; stop evaluating.
    Reject,
    /// A heading at this level; stop evaluating.
    Accept(HeadingLevel),
    /// This rule has no opinion; try the next one.
    Pass,
}

type Rule = fn(&LogicalLine, &FontThresholds) -> RuleOutcome;

/// Rules in precedence order. An all-caps numbered heading is decided by
/// the all-caps rule, never the numbered rule.
const RULES: &[(&str, Rule)] = &[
    ("reject-artifacts", reject_artifacts),
    ("all-caps", all_caps),
    ("numbered", numbered),
    ("styled", styled),
];

/// Classify one line against the document's thresholds.
///
/// Returns the heading level, or `None` for body text. All size
/// comparisons use inclusive lower bounds.
pub fn classify(line: &LogicalLine, thresholds: &FontThresholds) -> Option<HeadingLevel> {
    for (_, rule) in RULES {
        match rule(line, thresholds) {
            RuleOutcome::Reject => return None,
            RuleOutcome::Accept(level) => return Some(level),
            RuleOutcome::Pass => {}
        }
    }
    None
}

fn page_artifact_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^page\s+\d+").unwrap())
}

fn numbered_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+(?:\.\d+)*)\s+.+").unwrap())
}

/// Very short fragments (unless set in the document's largest font) and
/// page-number artifacts are never headings.
fn reject_artifacts(line: &LogicalLine, t: &FontThresholds) -> RuleOutcome {
    if line.char_count() < 3 && line.size < t.max_size {
        return RuleOutcome::Reject;
    }
    if page_artifact_re().is_match(&line.text) {
        return RuleOutcome::Reject;
    }
    RuleOutcome::Pass
}

/// Fully upper-case lines in a large font are strong H1 candidates.
fn all_caps(line: &LogicalLine, t: &FontThresholds) -> RuleOutcome {
    if is_all_caps(&line.text) && line.char_count() > 3 && line.size >= t.h2_size {
        return RuleOutcome::Accept(HeadingLevel::H1);
    }
    RuleOutcome::Pass
}

/// Numbered headings like "2.1 Scope": the dot count of the numeric
/// prefix picks the level, a relaxed size test confirms it. A numbered
/// line failing its size test falls through to the style rule.
fn numbered(line: &LogicalLine, t: &FontThresholds) -> RuleOutcome {
    let Some(caps) = numbered_prefix_re().captures(&line.text) else {
        return RuleOutcome::Pass;
    };
    let dots = caps[1].matches('.').count();
    let level = match dots {
        0 if line.size >= t.h1_size * 0.9 => Some(HeadingLevel::H1),
        1 if line.size >= t.h2_size * 0.8 => Some(HeadingLevel::H2),
        d if d >= 2 && line.size >= t.h3_size * 0.8 => Some(HeadingLevel::H3),
        _ => None,
    };
    match level {
        Some(level) => RuleOutcome::Accept(level),
        None => RuleOutcome::Pass,
    }
}

/// Bold or italic lines classify purely by size band.
fn styled(line: &LogicalLine, t: &FontThresholds) -> RuleOutcome {
    if !(line.is_bold || line.is_italic) {
        return RuleOutcome::Pass;
    }
    if line.size >= t.h1_size {
        RuleOutcome::Accept(HeadingLevel::H1)
    } else if line.size >= t.h2_size {
        RuleOutcome::Accept(HeadingLevel::H2)
    } else if line.size >= t.h3_size {
        RuleOutcome::Accept(HeadingLevel::H3)
    } else {
        RuleOutcome::Pass
    }
}

/// True if the text has at least one upper-case letter and none in
/// lower case.
fn is_all_caps(text: &str) -> bool {
    text.chars().any(|c| c.is_uppercase()) && !text.chars().any(|c| c.is_lowercase())
}
