use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::SearchError;
use crate::SearchResult;

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["mdsearch.toml", ".mdsearch.toml", ".config/mdsearch.toml"];

/// Configuration loaded from an `mdsearch.toml` file.
///
/// ```toml
/// content_dir = "content/docs"
/// base_href = "/docs"
/// modules = "generated/type-info.json"
/// max_file_size = 1048576
///
/// [include]
/// patterns = ["**/*.md"]
///
/// [exclude]
/// patterns = ["drafts/", "*.draft.md"]
/// ```
///
/// Every key is optional; a missing config file means all defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
	/// Directory containing the numbered markdown documents, relative to the
	/// project root.
	#[serde(default = "default_content_dir")]
	pub content_dir: PathBuf,
	/// Leading path for every generated `href`.
	#[serde(default = "default_base_href")]
	pub base_href: String,
	/// Optional path to a module registry JSON file used to expand
	/// `> TYPES:` placeholder lines, relative to the project root.
	#[serde(default)]
	pub modules: Option<PathBuf>,
	/// Inclusion configuration — glob patterns a file must match to be
	/// considered at all.
	#[serde(default)]
	pub include: IncludeConfig,
	/// Exclusion configuration using gitignore-style patterns.
	#[serde(default)]
	pub exclude: ExcludeConfig,
	/// Maximum file size in bytes to read. Larger files abort the build.
	/// Defaults to 10 MB.
	#[serde(default = "default_max_file_size")]
	pub max_file_size: u64,
	/// When true, `.gitignore` files are not used for filtering. By default
	/// (`false`), files that git would ignore are skipped.
	#[serde(default)]
	pub disable_gitignore: bool,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			content_dir: default_content_dir(),
			base_href: default_base_href(),
			modules: None,
			include: IncludeConfig::default(),
			exclude: ExcludeConfig::default(),
			max_file_size: DEFAULT_MAX_FILE_SIZE,
			disable_gitignore: false,
		}
	}
}

/// Glob patterns restricting which files are considered for discovery.
#[derive(Debug, Clone, Deserialize)]
pub struct IncludeConfig {
	#[serde(default = "default_include_patterns")]
	pub patterns: Vec<String>,
}

impl Default for IncludeConfig {
	fn default() -> Self {
		Self {
			patterns: default_include_patterns(),
		}
	}
}

/// Gitignore-style patterns excluded from discovery.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeConfig {
	#[serde(default)]
	pub patterns: Vec<String>,
}

impl SearchConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> SearchResult<Option<SearchConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: SearchConfig =
			toml::from_str(&content).map_err(|e| SearchError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults when no config
	/// file exists.
	pub fn load_or_default(root: &Path) -> SearchResult<SearchConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}
}

fn default_content_dir() -> PathBuf {
	PathBuf::from("content/docs")
}

fn default_base_href() -> String {
	String::from("/docs")
}

fn default_include_patterns() -> Vec<String> {
	vec![String::from("**/*.md")]
}

fn default_max_file_size() -> u64 {
	DEFAULT_MAX_FILE_SIZE
}
