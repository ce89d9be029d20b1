use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::LazyLock;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;
use regex::Regex;
use tracing::debug;

use crate::SearchError;
use crate::SearchResult;
use crate::config::DEFAULT_MAX_FILE_SIZE;
use crate::config::SearchConfig;

/// Basename pattern for indexable documents: a two-digit ordering prefix, a
/// hyphen, and the slug that becomes the document's URL segment.
static DOCUMENT_NAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\d{2}-(.+)\.md$").expect("document name pattern is valid"));

/// Options for controlling how the content root is scanned.
///
/// Use [`ScanOptions::default()`] for sensible defaults or
/// [`ScanOptions::from_config`] to construct from a [`SearchConfig`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
	/// Gitignore-style patterns to exclude from scanning.
	pub exclude_patterns: Vec<String>,
	/// Glob patterns a file must match to be considered.
	pub include_set: GlobSet,
	/// Maximum file size to read in bytes.
	pub max_file_size: u64,
	/// Whether to disable `.gitignore` integration.
	pub disable_gitignore: bool,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self {
			exclude_patterns: Vec::new(),
			include_set: build_glob_set(&[String::from("**/*.md")]),
			max_file_size: DEFAULT_MAX_FILE_SIZE,
			disable_gitignore: false,
		}
	}
}

impl ScanOptions {
	/// Construct [`ScanOptions`] from a [`SearchConfig`].
	pub fn from_config(config: &SearchConfig) -> Self {
		Self {
			exclude_patterns: config.exclude.patterns.clone(),
			include_set: build_glob_set(&config.include.patterns),
			max_file_size: config.max_file_size,
			disable_gitignore: config.disable_gitignore,
		}
	}
}

/// A markdown file whose basename matched the numbered naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
	/// Absolute path of the file.
	pub path: PathBuf,
	/// The captured slug, used as the document's URL segment.
	pub slug: String,
}

/// Extract the document slug from a basename, if it follows the numbered
/// naming convention (`01-foo.md` → `foo`).
pub fn document_slug(basename: &str) -> Option<&str> {
	DOCUMENT_NAME
		.captures(basename)
		.and_then(|captures| captures.get(1))
		.map(|capture| capture.as_str())
}

/// Recursively collect all indexable documents under `root`.
///
/// Files whose basename does not match the numbered naming convention are
/// silently skipped. The result is sorted by path for deterministic output
/// ordering.
pub fn discover_files(root: &Path, options: &ScanOptions) -> SearchResult<Vec<DiscoveredFile>> {
	let mut files = Vec::new();
	let mut visited_dirs = HashSet::new();

	// Build gitignore matcher (respects .gitignore unless disabled).
	let gitignore = if options.disable_gitignore {
		Gitignore::empty()
	} else {
		build_gitignore(root)
	};

	// Build exclude matcher from [exclude] patterns.
	let custom_exclude = build_exclude_matcher(root, &options.exclude_patterns)?;

	walk_dir(
		root,
		root,
		options,
		&gitignore,
		&custom_exclude,
		&mut files,
		&mut visited_dirs,
	)?;

	// Sort for deterministic ordering.
	files.sort_by(|a, b| a.path.cmp(&b.path));
	debug!(count = files.len(), root = %root.display(), "discovered documents");
	Ok(files)
}

/// Build a `GlobSet` from a list of glob pattern strings.
fn build_glob_set(patterns: &[String]) -> GlobSet {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		if let Ok(glob) = Glob::new(pattern) {
			builder.add(glob);
		}
	}
	builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Build a `Gitignore` matcher from exclude patterns specified in
/// `mdsearch.toml` `[exclude]`. These follow `.gitignore` syntax and are
/// applied on top of any `.gitignore` rules.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> SearchResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder.add_line(None, pattern).map_err(|e| {
			SearchError::ConfigParse(format!("invalid exclude pattern `{pattern}`: {e}"))
		})?;
	}
	builder
		.build()
		.map_err(|e| SearchError::ConfigParse(format!("failed to build exclude rules: {e}")))
}

/// Build a `Gitignore` matcher from the content root's `.gitignore` file (if
/// any).
fn build_gitignore(root: &Path) -> Gitignore {
	let mut builder = GitignoreBuilder::new(root);
	let gitignore_path = root.join(".gitignore");
	if gitignore_path.exists() {
		let _ = builder.add(gitignore_path);
	}
	builder.build().unwrap_or_else(|_| Gitignore::empty())
}

fn is_ignored_directory_name(name: &str) -> bool {
	name.starts_with('.') || name == "node_modules" || name == "target"
}

fn walk_dir(
	root: &Path,
	dir: &Path,
	options: &ScanOptions,
	gitignore: &Gitignore,
	custom_exclude: &Gitignore,
	files: &mut Vec<DiscoveredFile>,
	visited_dirs: &mut HashSet<PathBuf>,
) -> SearchResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	// Detect symlink cycles by tracking canonical paths.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		return Err(SearchError::SymlinkCycle {
			path: dir.display().to_string(),
		});
	}

	let entries = std::fs::read_dir(dir)?;

	for entry in entries {
		let entry = entry?;
		let path = entry.path();
		let is_dir = path.is_dir();

		// Skip hidden directories and common non-content directories.
		if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
			if is_dir && is_ignored_directory_name(name) {
				continue;
			}
		}

		// Check against gitignore patterns.
		if gitignore.matched(&path, is_dir).is_ignore() {
			continue;
		}

		// Check against exclude patterns from mdsearch.toml [exclude].
		if custom_exclude.matched(&path, is_dir).is_ignore() {
			continue;
		}

		if is_dir {
			walk_dir(
				root,
				&path,
				options,
				gitignore,
				custom_exclude,
				files,
				visited_dirs,
			)?;
			continue;
		}

		let Ok(rel_path) = path.strip_prefix(root) else {
			continue;
		};
		if !options.include_set.is_match(rel_path) {
			continue;
		}

		let Some(slug) = path
			.file_name()
			.and_then(|name| name.to_str())
			.and_then(document_slug)
		else {
			continue;
		};

		let metadata = std::fs::metadata(&path)?;
		if metadata.len() > options.max_file_size {
			return Err(SearchError::FileTooLarge {
				path: path.display().to_string(),
				size: metadata.len(),
				limit: options.max_file_size,
			});
		}

		files.push(DiscoveredFile {
			slug: slug.to_string(),
			path,
		});
	}

	Ok(())
}
