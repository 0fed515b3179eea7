//! Paragraph segmenter - Blank-line separated prose blocks of a section body.
//!
//! Code is structurally part of a section but never prose: a block whose
//! first line opens a fence (```` ``` ```` or `~~~`) is dropped together with
//! every following block up to the closing fence, and a block whose first
//! line is indented by four spaces (or a tab) is dropped as an indented code
//! block. A fence opened partway through a prose paragraph keeps that
//! paragraph but drops the blocks that follow until it closes. Dropped blocks
//! still consume a paragraph index so indices always reflect position within
//! the section.

use std::iter::FusedIterator;

/// Opening markers for fenced code blocks.
const FENCE_MARKERS: [&str; 2] = ["```", "~~~"];

/// Indentation that turns a block into an indented code block.
const CODE_INDENT: &str = "    ";

/// A prose paragraph borrowed from a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// 0-based position of the block within its section, code blocks included.
    pub index: usize,

    /// Paragraph text with surrounding whitespace trimmed.
    pub text: &'a str,
}

/// Lazy iterator over the prose paragraphs of one section body.
///
/// A clone continues from the current position; call [`segment_paragraphs`]
/// again to walk the same body from the beginning.
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    rest: &'a str,
    next_index: usize,
    open_fence: Option<&'static str>,
}

/// Splits a section body into paragraphs on runs of blank lines.
///
/// An empty body yields no paragraphs.
pub fn segment_paragraphs(body: &str) -> Paragraphs<'_> {
    Paragraphs {
        rest: body,
        next_index: 0,
        open_fence: None,
    }
}

/// Splits off the first line, returning it (without the newline) and the remainder.
fn split_first_line(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => (text, ""),
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns the fence marker a line opens with, if any.
fn fence_marker(line: &str) -> Option<&'static str> {
    let line = line.trim_start();
    FENCE_MARKERS.iter().copied().find(|m| line.starts_with(m))
}

/// Walks every line of a block and returns the fence left open after it.
///
/// A marker line closes the open fence when it matches, otherwise it opens a
/// new one, so a fence started mid-paragraph is still tracked.
fn fence_after(block: &str, mut open: Option<&'static str>) -> Option<&'static str> {
    for line in block.lines() {
        match open {
            Some(marker) if line.trim_start().starts_with(marker) => open = None,
            Some(_) => {}
            None => open = fence_marker(line),
        }
    }
    open
}

fn is_indented_code(block: &str) -> bool {
    block.starts_with(CODE_INDENT) || block.starts_with('\t')
}

impl<'a> Paragraphs<'a> {
    /// Consumes the next run of non-blank lines, skipping leading blank lines.
    fn next_block(&mut self) -> Option<&'a str> {
        loop {
            if self.rest.is_empty() {
                return None;
            }
            let (line, remainder) = split_first_line(self.rest);
            if !is_blank(line) {
                break;
            }
            self.rest = remainder;
        }

        let start = self.rest;
        let mut cursor = self.rest;
        while !cursor.is_empty() {
            let (line, remainder) = split_first_line(cursor);
            if is_blank(line) {
                break;
            }
            cursor = remainder;
        }
        self.rest = cursor;

        let consumed = start.len() - cursor.len();
        Some(&start[..consumed])
    }
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = Paragraph<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let block = self.next_block()?;
            let index = self.next_index;
            self.next_index += 1;

            let inside_fence = self.open_fence.is_some();
            let indented = !inside_fence && is_indented_code(block);
            let opens_fence = !inside_fence && !indented && fence_marker(block).is_some();
            if !indented {
                self.open_fence = fence_after(block, self.open_fence);
            }

            if inside_fence {
                tracing::trace!(index, "Skipping block inside fenced code");
                continue;
            }

            if opens_fence {
                tracing::trace!(index, "Skipping fenced code block");
                continue;
            }

            if indented {
                tracing::trace!(index, "Skipping indented code block");
                continue;
            }

            return Some(Paragraph {
                index,
                text: block.trim(),
            });
        }
    }
}

impl FusedIterator for Paragraphs<'_> {}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(body: &str) -> Vec<&str> {
        segment_paragraphs(body).map(|p| p.text).collect()
    }

    fn indices(body: &str) -> Vec<usize> {
        segment_paragraphs(body).map(|p| p.index).collect()
    }

    // ───────────────────────────────────────────────────────────────
    // Splitting
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_body_yields_no_paragraphs() {
        assert!(texts("").is_empty());
    }

    #[test]
    fn whitespace_only_body_yields_no_paragraphs() {
        assert!(texts("  \n\n\t\n").is_empty());
    }

    #[test]
    fn single_paragraph_is_trimmed() {
        assert_eq!(texts("  One paragraph.  "), vec!["One paragraph."]);
    }

    #[test]
    fn splits_on_blank_line() {
        assert_eq!(texts("First.\n\nSecond."), vec!["First.", "Second."]);
    }

    #[test]
    fn runs_of_blank_lines_are_one_boundary() {
        assert_eq!(texts("First.\n\n\n\nSecond."), vec!["First.", "Second."]);
        assert_eq!(indices("First.\n\n\n\nSecond."), vec![0, 1]);
    }

    #[test]
    fn whitespace_only_lines_are_boundaries() {
        assert_eq!(texts("First.\n   \t\nSecond."), vec!["First.", "Second."]);
    }

    #[test]
    fn multi_line_paragraph_stays_together() {
        assert_eq!(
            texts("Line one\nline two\n\nNext"),
            vec!["Line one\nline two", "Next"]
        );
    }

    #[test]
    fn crlf_blank_lines_are_boundaries() {
        assert_eq!(texts("First.\r\n\r\nSecond.\r\n"), vec!["First.", "Second."]);
    }

    // ───────────────────────────────────────────────────────────────
    // Code block filtering
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn fenced_block_is_dropped() {
        let body = "Intro.\n\n```sql\nSELECT * FROM database; -- chosen\n```\n\nOutro.";
        assert_eq!(texts(body), vec!["Intro.", "Outro."]);
    }

    #[test]
    fn dropped_blocks_still_consume_indices() {
        let body = "Intro.\n\n```\ncode\n```\n\nOutro.";
        assert_eq!(indices(body), vec![0, 2]);
    }

    #[test]
    fn fenced_block_with_blank_lines_is_dropped_entirely() {
        let body = "Intro.\n\n```\nfirst\n\nWe chose the database.\n```\n\nOutro.";
        assert_eq!(texts(body), vec!["Intro.", "Outro."]);
        assert_eq!(indices(body), vec![0, 3]);
    }

    #[test]
    fn tilde_fence_is_dropped() {
        let body = "~~~\ncode\n~~~\n\nProse.";
        assert_eq!(texts(body), vec!["Prose."]);
    }

    #[test]
    fn unclosed_fence_drops_rest_of_body() {
        let body = "Prose.\n\n```\ncode\n\nmore code";
        assert_eq!(texts(body), vec!["Prose."]);
    }

    #[test]
    fn indented_code_block_is_dropped() {
        let body = "Prose.\n\n    let x = database();\n    x.use();\n\nMore prose.";
        assert_eq!(texts(body), vec!["Prose.", "More prose."]);
        assert_eq!(indices(body), vec![0, 2]);
    }

    #[test]
    fn tab_indented_block_is_dropped() {
        assert_eq!(texts("Prose.\n\n\tcode();"), vec!["Prose."]);
    }

    #[test]
    fn shallow_indentation_is_prose() {
        assert_eq!(texts("Prose.\n\n  Indented two."), vec!["Prose.", "Indented two."]);
    }

    #[test]
    fn fence_opened_mid_paragraph_is_closed_by_later_block() {
        let body = "Example config:\n```yaml\na: 1\n\n```\n\nWe chose a queue.";
        assert_eq!(texts(body), vec!["Example config:\n```yaml\na: 1", "We chose a queue."]);
        assert_eq!(indices(body), vec![0, 2]);
    }

    #[test]
    fn closing_marker_starting_a_block_does_not_reopen() {
        let body = "```\ncode\n\n```\n\nProse after.\n\nMore prose.";
        assert_eq!(texts(body), vec!["Prose after.", "More prose."]);
    }

    #[test]
    fn fence_closed_and_reopened_within_block_stays_open() {
        let body = "```\na\n\n```\n```\nb\n\nstill code\n```\n\nProse.";
        assert_eq!(texts(body), vec!["Prose."]);
    }

    #[test]
    fn markers_inside_indented_code_do_not_open_a_fence() {
        let body = "Prose.\n\n    ```\n    sample\n\nMore prose.";
        assert_eq!(texts(body), vec!["Prose.", "More prose."]);
    }

    #[test]
    fn only_code_yields_nothing() {
        assert!(texts("```\na\n```\n\n    b").is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // Iterator behaviour
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn segmenting_again_restarts_from_beginning() {
        let body = "A.\n\nB.";
        let first: Vec<_> = segment_paragraphs(body).collect();
        let second: Vec<_> = segment_paragraphs(body).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn iterator_is_lazy_and_fused() {
        let mut paragraphs = segment_paragraphs("A.\n\nB.");
        assert_eq!(paragraphs.next().map(|p| p.text), Some("A."));
        assert_eq!(paragraphs.next().map(|p| p.text), Some("B."));
        assert_eq!(paragraphs.next(), None);
        assert_eq!(paragraphs.next(), None);
    }
}
