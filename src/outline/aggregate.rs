//! Line aggregation: raw runs of one visual line into a [`LogicalLine`].

use crate::model::{DocumentRuns, LogicalLine, TextRun};

use super::normalize::normalize;

/// Font-name fragments that indicate a bold face.
const BOLD_MARKERS: &[&str] = &["bold", "black", "heavy", "demi"];

/// Font-name fragment that indicates an italic face.
const ITALIC_MARKER: &str = "italic";

/// Merge the ordered runs of one visual line into a logical line.
///
/// Runs whose normalized text is empty are dropped; a line with no
/// surviving runs produces nothing. Size and y-position are arithmetic
/// means over the contributing runs, and the style flags are set if any
/// contributing run carries the style.
pub fn merge_line(runs: &[TextRun], page: u32) -> Option<LogicalLine> {
    let mut words = Vec::new();
    let mut size_sum = 0.0f32;
    let mut y_sum = 0.0f32;
    let mut is_bold = false;
    let mut is_italic = false;

    for run in runs {
        let text = normalize(&run.text);
        if text.is_empty() {
            continue;
        }
        let font = run.font.to_lowercase();
        is_bold |= BOLD_MARKERS.iter().any(|m| font.contains(m));
        is_italic |= font.contains(ITALIC_MARKER);
        size_sum += run.size;
        y_sum += run.y;
        words.push(text);
    }

    if words.is_empty() {
        return None;
    }

    let count = words.len() as f32;
    Some(LogicalLine {
        text: words.join(" "),
        size: size_sum / count,
        is_bold,
        is_italic,
        y: y_sum / count,
        page,
    })
}

/// Collect the logical lines of an entire document, in extraction order.
pub fn collect_lines(doc: &DocumentRuns) -> Vec<LogicalLine> {
    let mut lines = Vec::new();
    for (page_idx, page) in doc.pages.iter().enumerate() {
        for runs in &page.lines {
            if let Some(line) = merge_line(runs, page_idx as u32) {
                lines.push(line);
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageRuns;

    #[test]
    fn test_merge_line_averages_metrics() {
        let runs = vec![
            TextRun::new("Hello", 12.0, "Helvetica", 100.0),
            TextRun::new("world", 14.0, "Helvetica-Bold", 102.0),
        ];
        let line = merge_line(&runs, 3).unwrap();
        assert_eq!(line.text, "Hello world");
        assert_eq!(line.size, 13.0);
        assert_eq!(line.y, 101.0);
        assert_eq!(line.page, 3);
        assert!(line.is_bold);
        assert!(!line.is_italic);
    }

    #[test]
    fn test_style_lexicon() {
        for font in ["Arial-Bold", "Roboto Black", "HeavyFace", "Demi Sans"] {
            let runs = vec![TextRun::new("x y z", 10.0, font, 0.0)];
            assert!(merge_line(&runs, 0).unwrap().is_bold, "font: {}", font);
        }
        let runs = vec![TextRun::new("slanted", 10.0, "Times-Italic", 0.0)];
        let line = merge_line(&runs, 0).unwrap();
        assert!(line.is_italic);
        assert!(!line.is_bold);
    }

    #[test]
    fn test_empty_runs_dropped() {
        let runs = vec![
            TextRun::new("   ", 30.0, "Helvetica", 50.0),
            TextRun::new("Title", 12.0, "Helvetica", 60.0),
        ];
        let line = merge_line(&runs, 0).unwrap();
        // the whitespace-only run contributes nothing, including its size
        assert_eq!(line.text, "Title");
        assert_eq!(line.size, 12.0);
        assert_eq!(line.y, 60.0);
    }

    #[test]
    fn test_all_empty_line_is_none() {
        let runs = vec![TextRun::new("  ", 12.0, "Helvetica", 0.0)];
        assert!(merge_line(&runs, 0).is_none());
        assert!(merge_line(&[], 0).is_none());
    }

    #[test]
    fn test_collect_lines_pages_in_order() {
        let doc = DocumentRuns {
            pages: vec![
                PageRuns {
                    lines: vec![vec![TextRun::new("first", 10.0, "F", 0.0)]],
                },
                PageRuns {
                    lines: vec![vec![TextRun::new("second", 10.0, "F", 0.0)]],
                },
            ],
        };
        let lines = collect_lines(&doc);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].page, 0);
        assert_eq!(lines[1].page, 1);
    }
}
