use std::sync::LazyLock;

use regex::Regex;

/// Section boundary: anchored and multiline, so only lines that *begin* with
/// the marker split at this level.
static SECTION_SPLIT: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?m)^## ").expect("section pattern is valid"));

/// Per-document metadata threaded explicitly through block assembly.
#[derive(Debug, Clone)]
pub struct DocumentContext {
	/// URL segment from the filename.
	pub slug: String,
	/// Frontmatter title.
	pub title: String,
	/// Frontmatter rank, copied onto every block of the document.
	pub rank: Option<f64>,
}

/// A heading-delimited division of a document: the heading text and
/// everything up to the next division at the same level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	/// Raw heading text (first line of the split segment).
	pub heading: String,
	/// Remaining lines of the segment.
	pub body: String,
}

/// Split a document body into its intro and sections.
///
/// The split is anchored: only lines beginning with `## ` start a new
/// section. Mid-line occurrences do not split at this level; see
/// [`split_subsections`] for the subsection behavior.
pub fn split_sections(body: &str) -> (String, Vec<Section>) {
	let mut segments = SECTION_SPLIT.split(body.trim());
	let intro = segments.next().unwrap_or_default().trim().to_string();
	let sections = segments.map(section_from_segment).collect();
	(intro, sections)
}

/// Split a section body into its intro and subsections.
///
/// Unlike [`split_sections`] this is a plain substring split: *any* `## `
/// occurrence splits, including mid-line ones and the tail of a `### `
/// heading line (which leaves a stray `#` on the preceding piece).
pub fn split_subsections(body: &str) -> (String, Vec<Section>) {
	let mut segments = body.trim().split("## ");
	let intro = segments.next().unwrap_or_default().trim().to_string();
	let subsections = segments.map(section_from_segment).collect();
	(intro, subsections)
}

/// The first line of a segment is its heading text; the rest is the body.
fn section_from_segment(segment: &str) -> Section {
	let mut lines = segment.split('\n');
	let heading = lines.next().unwrap_or_default().to_string();
	let body = lines.collect::<Vec<_>>().join("\n");
	Section { heading, body }
}

/// Normalize CRLF line endings to LF.
pub fn normalize_line_endings(content: &str) -> String {
	if content.contains('\r') {
		content.replace("\r\n", "\n").replace('\r', "\n")
	} else {
		content.to_string()
	}
}
