use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid"));
static ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.+?)_").expect("valid"));
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").expect("valid"));
static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").expect("valid"));
static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[(.*?)\]\(.+?\)").expect("valid"));
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.+?)\]\(.+?\)").expect("valid"));
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("valid"));

/// Heading prefix marker flagging a type-definition section. Stripped from
/// breadcrumb labels; the raw heading still feeds [`normalize_slugify`].
static TYPE_MARKER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\[TYPE\]:\s+(.+)").expect("valid"));

/// Strip inline markdown markup from a single-line label: bold, italics,
/// inline code, strikethrough, and link/image syntax (keeping the label
/// text). Newlines collapse to spaces.
pub fn remove_markdown(text: &str) -> String {
	let text = BOLD.replace_all(text, "$1");
	let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
	let text = ITALIC_STAR.replace_all(&text, "$1");
	let text = INLINE_CODE.replace_all(&text, "$1");
	let text = STRIKETHROUGH.replace_all(&text, "$1");
	let text = IMAGE.replace_all(&text, "$1");
	let text = LINK.replace_all(&text, "$1");
	let text = text.replace('\n', " ");
	let text = SPACE_RUNS.replace_all(&text, " ");
	text.trim().to_string()
}

/// Turn a heading into a URL-safe anchor: markdown stripped, lower-cased,
/// runs of non-alphanumeric characters collapsed into single `-` separators.
pub fn normalize_slugify(text: &str) -> String {
	let stripped = remove_markdown(text);
	let mut slug = String::with_capacity(stripped.len());
	let mut pending_separator = false;

	for ch in stripped.chars() {
		if ch.is_ascii_alphanumeric() {
			if pending_separator && !slug.is_empty() {
				slug.push('-');
			}
			pending_separator = false;
			slug.push(ch.to_ascii_lowercase());
		} else {
			pending_separator = true;
		}
	}

	slug
}

/// Strip a leading `[TYPE]: ` marker from a heading, returning the remainder
/// unchanged when no marker is present.
pub fn strip_type_marker(text: &str) -> String {
	TYPE_MARKER.replace(text, "$1").into_owned()
}
