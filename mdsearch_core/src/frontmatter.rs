use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::SearchError;
use crate::SearchResult;

/// Leading metadata block: an opening `---` line, the metadata body, and a
/// closing `---` line. CRLF tolerated.
static FRONTMATTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)")
		.expect("frontmatter pattern is valid")
});

/// Metadata extracted from a document's leading frontmatter block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
	/// Document title, used as the outermost breadcrumb. Empty when absent.
	pub title: String,
	/// Ordering hint inherited by every block of the document. `None` when
	/// absent, non-numeric, or zero.
	pub rank: Option<f64>,
}

/// Split the leading frontmatter block from a document, returning the parsed
/// metadata and the remaining body.
///
/// A document without a frontmatter block is a hard error; `path` is only
/// used for error attribution.
pub fn extract_frontmatter(markdown: &str, path: &Path) -> SearchResult<(Frontmatter, String)> {
	let Some(captures) = FRONTMATTER_BLOCK.captures(markdown) else {
		return Err(SearchError::MissingFrontmatter {
			path: path.display().to_string(),
		});
	};

	let raw = captures.get(1).map_or("", |capture| capture.as_str());
	let body = markdown[captures.get(0).map_or(0, |m| m.end())..].to_string();

	let value: serde_yaml_ng::Value =
		serde_yaml_ng::from_str(raw).map_err(|e| SearchError::FrontmatterParse {
			path: path.display().to_string(),
			reason: e.to_string(),
		})?;

	let title = value
		.get("title")
		.and_then(serde_yaml_ng::Value::as_str)
		.unwrap_or_default()
		.to_string();
	let rank = coerce_rank(value.get("rank"));

	Ok((Frontmatter { title, rank }, body))
}

/// Numeric coercion for the `rank` key. Strings are parsed; anything else
/// non-numeric is absent. Zero and NaN are also treated as absent.
fn coerce_rank(value: Option<&serde_yaml_ng::Value>) -> Option<f64> {
	let rank = match value {
		Some(serde_yaml_ng::Value::Number(number)) => number.as_f64(),
		Some(serde_yaml_ng::Value::String(text)) => text.trim().parse::<f64>().ok(),
		_ => None,
	};

	rank.filter(|rank| rank.is_finite() && *rank != 0.0)
}
