//! Section splitter - Level-two headings and the body text beneath them.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Matches "## Title" at line start: exactly two markers, whitespace, then a title.
/// "### Subsection" does not match because the third character is not whitespace.
static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##[ \t]+(\S.*)$").expect("heading regex is valid"));

/// One section of a planning document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading text, trimmed.
    pub title: String,

    /// Everything between this heading and the next one, trimmed.
    pub body: String,

    /// 0-based ordinal of the heading among all headings in the document.
    pub position: usize,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>, position: usize) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            position,
        }
    }

    /// Returns true if the title contains `needle`, ignoring case.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Insertion-ordered mapping from section title to section.
///
/// Titles are keys. When a title repeats, the later section replaces the
/// earlier one's body and position, but the entry keeps the iteration slot of
/// the first occurrence. Repeated titles therefore lose the earlier body; this
/// is a known limitation of keying sections by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: IndexMap<String, Section>,
}

impl SectionMap {
    /// Creates an empty section map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a section, returning the section it replaced if the title was already present.
    pub fn insert(&mut self, section: Section) -> Option<Section> {
        self.sections.insert(section.title.clone(), section)
    }

    /// Looks up a section by exact title.
    pub fn get(&self, title: &str) -> Option<&Section> {
        self.sections.get(title)
    }

    /// Finds the first section (in map order) whose title contains `needle`, ignoring case.
    pub fn find_by_title_fragment(&self, needle: &str) -> Option<&Section> {
        self.sections.values().find(|s| s.title_contains(needle))
    }

    /// Iterates sections in map order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Iterates section titles in map order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Returns the number of distinct section titles.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the document had no headings.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Extracts the title from a heading line, or None if the line is not a heading.
fn heading_title(line: &str) -> Option<&str> {
    HEADING_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Closes the open section, if any, and stores it in the map.
fn flush_section(map: &mut SectionMap, open: Option<(&str, usize, Vec<&str>)>) {
    if let Some((title, position, lines)) = open {
        let body = lines.join("\n");
        if let Some(replaced) = map.insert(Section::new(title, body.trim(), position)) {
            tracing::warn!(
                title = %replaced.title,
                earlier_position = replaced.position,
                later_position = position,
                "Duplicate section title, earlier body overwritten"
            );
        }
    }
}

/// Splits document text into sections keyed by heading title.
///
/// Text before the first heading belongs to no section and is ignored.
/// A heading followed directly by another heading (or by end of input)
/// produces a section with an empty body.
pub fn split_sections(text: &str) -> SectionMap {
    let mut map = SectionMap::new();
    let mut current: Option<(&str, usize, Vec<&str>)> = None;
    let mut position = 0;

    for line in text.lines() {
        if let Some(title) = heading_title(line) {
            flush_section(&mut map, current.take());
            current = Some((title, position, Vec::new()));
            position += 1;
        } else if let Some((_, _, lines)) = current.as_mut() {
            lines.push(line);
        }
    }
    flush_section(&mut map, current.take());

    tracing::debug!(sections = map.len(), headings = position, "Split document into sections");
    map
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────────────────────────────────────────────────
    // Heading detection
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn detects_level_two_heading() {
        assert_eq!(heading_title("## Technical Context"), Some("Technical Context"));
    }

    #[test]
    fn trims_heading_title() {
        assert_eq!(heading_title("##   Summary   "), Some("Summary"));
    }

    #[test]
    fn ignores_other_heading_levels() {
        assert_eq!(heading_title("# Plan"), None);
        assert_eq!(heading_title("### Subsection"), None);
    }

    #[test]
    fn ignores_marker_without_space() {
        assert_eq!(heading_title("##Summary"), None);
    }

    #[test]
    fn ignores_indented_marker() {
        assert_eq!(heading_title("  ## Summary"), None);
    }

    #[test]
    fn ignores_marker_with_blank_title() {
        assert_eq!(heading_title("##    "), None);
    }

    // ───────────────────────────────────────────────────────────────
    // Splitting
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn document_without_headings_yields_empty_map() {
        let map = split_sections("# Title\n\nJust prose.\n\n### Not a section\n");
        assert!(map.is_empty());
    }

    #[test]
    fn empty_document_yields_empty_map() {
        assert!(split_sections("").is_empty());
    }

    #[test]
    fn bodies_run_until_next_heading() {
        let text = "## Summary\n\nFirst body.\n\n## Architecture\nSecond body.\n";
        let map = split_sections(text);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Summary").unwrap().body, "First body.");
        assert_eq!(map.get("Architecture").unwrap().body, "Second body.");
    }

    #[test]
    fn subsections_stay_inside_parent_body() {
        let text = "## Architecture\n\n### Storage\n\nPostgres.\n";
        let map = split_sections(text);

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("Architecture").unwrap().body,
            "### Storage\n\nPostgres."
        );
    }

    #[test]
    fn heading_followed_by_heading_has_empty_body() {
        let map = split_sections("## Empty\n## Full\ncontent");
        assert_eq!(map.get("Empty").unwrap().body, "");
        assert_eq!(map.get("Full").unwrap().body, "content");
    }

    #[test]
    fn trailing_heading_has_empty_body() {
        let map = split_sections("## Only");
        assert_eq!(map.get("Only").unwrap().body, "");
    }

    #[test]
    fn preamble_before_first_heading_is_ignored() {
        let map = split_sections("# Plan\n\nIntro text.\n\n## Summary\nBody");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Summary").unwrap().body, "Body");
    }

    #[test]
    fn sections_keep_document_order() {
        let map = split_sections("## C\nc\n## A\na\n## B\nb\n");
        let titles: Vec<_> = map.titles().collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn positions_are_heading_ordinals() {
        let map = split_sections("## First\n1\n## Second\n2\n");
        assert_eq!(map.get("First").unwrap().position, 0);
        assert_eq!(map.get("Second").unwrap().position, 1);
    }

    #[test]
    fn duplicate_title_last_write_wins_in_first_slot() {
        let map = split_sections("## Notes\nfirst\n## Other\nx\n## Notes\nsecond\n");

        assert_eq!(map.len(), 2);
        let notes = map.get("Notes").unwrap();
        assert_eq!(notes.body, "second");
        assert_eq!(notes.position, 2);

        let titles: Vec<_> = map.titles().collect();
        assert_eq!(titles, vec!["Notes", "Other"]);
    }

    #[test]
    fn handles_windows_line_endings() {
        let map = split_sections("## Summary\r\nBody line\r\n\r\n## Next\r\nMore\r\n");
        assert_eq!(map.get("Summary").unwrap().body, "Body line");
        assert_eq!(map.get("Next").unwrap().body, "More");
    }

    #[test]
    fn find_by_title_fragment_ignores_case() {
        let map = split_sections("## 2. Technical Context\nbody\n");
        assert!(map.find_by_title_fragment("technical context").is_some());
        assert!(map.find_by_title_fragment("project structure").is_none());
    }
}
