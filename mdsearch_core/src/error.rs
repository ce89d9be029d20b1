use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SearchError {
	#[error(transparent)]
	#[diagnostic(code(mdsearch::io_error))]
	Io(#[from] std::io::Error),

	#[error("failure to parse markdown: {0}")]
	#[diagnostic(code(mdsearch::markdown))]
	Markdown(String),

	#[error("no frontmatter block in `{path}`")]
	#[diagnostic(
		code(mdsearch::missing_frontmatter),
		help("start the file with a `---` delimited metadata block containing a title")
	)]
	MissingFrontmatter { path: String },

	#[error("failed to parse frontmatter in `{path}`: {reason}")]
	#[diagnostic(code(mdsearch::frontmatter_parse))]
	FrontmatterParse { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdsearch::config_parse),
		help("check that mdsearch.toml is valid TOML with top-level keys and an optional [exclude] section")
	)]
	ConfigParse(String),

	#[error("failed to load module registry `{path}`: {reason}")]
	#[diagnostic(
		code(mdsearch::registry_load),
		help("the registry must be a JSON file with a top-level `modules` array")
	)]
	RegistryLoad { path: String, reason: String },

	#[error("file too large: `{path}` is {size} bytes (limit: {limit} bytes)")]
	#[diagnostic(
		code(mdsearch::file_too_large),
		help("increase the file size limit in mdsearch.toml or exclude this file")
	)]
	FileTooLarge { path: String, size: u64, limit: u64 },

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(mdsearch::symlink_cycle),
		help("remove the circular symlink or exclude this path")
	)]
	SymlinkCycle { path: String },
}

pub type SearchResult<T> = Result<T, SearchError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
