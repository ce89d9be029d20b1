use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::SearchResult;
use crate::config::SearchConfig;
use crate::document::DocumentContext;
use crate::document::normalize_line_endings;
use crate::document::split_sections;
use crate::document::split_subsections;
use crate::frontmatter::extract_frontmatter;
use crate::plaintext::plaintext;
use crate::registry::ModuleRegistry;
use crate::registry::expand_type_placeholders;
use crate::scanner::DiscoveredFile;
use crate::scanner::ScanOptions;
use crate::scanner::discover_files;
use crate::slug::normalize_slugify;
use crate::slug::remove_markdown;
use crate::slug::strip_type_marker;

/// A single searchable unit of documentation: one hierarchy node of one
/// document, with enough context to display and link a search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBlock {
	/// Heading labels locating this block, outermost first.
	pub breadcrumbs: Vec<String>,
	/// Link target: `{base}/{slug}` for a document intro, otherwise
	/// `{base}/{slug}#{anchor}` with the deepest heading's slug as the
	/// fragment.
	pub href: String,
	/// Flattened plaintext of the block's body.
	pub content: String,
	/// Ordering hint from document frontmatter, shared by every block of the
	/// document.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rank: Option<f64>,
}

/// Extract search blocks from every discovered document under `root`,
/// loading `mdsearch.toml` when present.
pub fn extract_blocks(root: &Path) -> SearchResult<Vec<SearchBlock>> {
	let config = SearchConfig::load_or_default(root)?;
	extract_blocks_with_config(root, &config)
}

/// Extract search blocks from every discovered document under `root` using
/// an already-loaded configuration.
///
/// Blocks are emitted in document order, each document contributing its
/// intro block followed by its sections and their subsections depth-first.
pub fn extract_blocks_with_config(
	root: &Path,
	config: &SearchConfig,
) -> SearchResult<Vec<SearchBlock>> {
	let registry = match &config.modules {
		Some(path) => ModuleRegistry::load(&root.join(path))?,
		None => ModuleRegistry::default(),
	};

	let options = ScanOptions::from_config(config);
	let content_root = root.join(&config.content_dir);
	let files = discover_files(&content_root, &options)?;

	let mut blocks = Vec::new();
	for file in &files {
		debug!(path = %file.path.display(), slug = %file.slug, "extracting document");
		let raw = std::fs::read_to_string(&file.path)?;
		blocks.extend(document_blocks(&raw, file, &registry, &config.base_href)?);
	}

	Ok(blocks)
}

/// Decompose one document into its search blocks: intro, then one block per
/// section, then one per subsection.
pub fn document_blocks(
	markdown: &str,
	file: &DiscoveredFile,
	registry: &ModuleRegistry,
	base_href: &str,
) -> SearchResult<Vec<SearchBlock>> {
	let markdown = normalize_line_endings(markdown);
	let markdown = expand_type_placeholders(&markdown, registry);
	let (frontmatter, body) = extract_frontmatter(&markdown, &file.path)?;

	let context = DocumentContext {
		slug: file.slug.clone(),
		title: frontmatter.title,
		rank: frontmatter.rank,
	};
	let title_label = breadcrumb_label(&context.title);

	let mut blocks = Vec::new();
	let (intro, sections) = split_sections(&body);

	blocks.push(SearchBlock {
		breadcrumbs: vec![title_label.clone()],
		href: build_href(base_href, &[&context.slug]),
		content: plaintext(&intro)?,
		rank: context.rank,
	});

	for section in &sections {
		let (section_intro, subsections) = split_subsections(&section.body);
		let section_label = breadcrumb_label(&section.heading);
		let section_slug = normalize_slugify(&section.heading);

		blocks.push(SearchBlock {
			breadcrumbs: vec![title_label.clone(), section_label.clone()],
			href: build_href(base_href, &[&context.slug, &section_slug]),
			content: plaintext(&section_intro)?,
			rank: context.rank,
		});

		for subsection in &subsections {
			let subsection_slug = normalize_slugify(&subsection.heading);

			blocks.push(SearchBlock {
				breadcrumbs: vec![
					title_label.clone(),
					section_label.clone(),
					breadcrumb_label(&subsection.heading),
				],
				href: build_href(base_href, &[&context.slug, &section_slug, &subsection_slug]),
				content: plaintext(subsection.body.trim())?,
				rank: context.rank,
			});
		}
	}

	Ok(blocks)
}

/// Breadcrumb labels strip the `[TYPE]: ` marker first, then any inline
/// markdown. The slug for the same heading is computed from the raw text
/// instead (see [`normalize_slugify`]).
fn breadcrumb_label(heading: &str) -> String {
	remove_markdown(&strip_type_marker(heading))
}

/// Build a link target from hierarchical path parts. Only the first part is
/// a path segment; the deepest remaining part becomes the fragment, and
/// intermediate parts are not encoded.
fn build_href(base: &str, parts: &[&str]) -> String {
	match parts {
		[] => base.to_string(),
		[slug] => format!("{base}/{slug}"),
		[slug, .., anchor] => format!("{base}/{slug}#{anchor}"),
	}
}
