use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Extract searchable content blocks from markdown documentation.",
	long_about = "mdsearch turns a tree of numbered markdown documents (01-intro.md, \
	              02-routing.md, …) into a flat array of search blocks. Each block carries a \
	              breadcrumb trail of heading labels, a link target with the deepest heading as \
	              its anchor, the flattened plaintext of its body, and an optional rank from the \
	              document frontmatter.\n\nQuick start:\n  mdsearch list     Show the documents \
	              that would be indexed\n  mdsearch extract  Emit the search block array as JSON"
)]
pub struct SearchCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Extract search blocks from every document under the content root.
	///
	/// Walks the configured content directory (default `content/docs`),
	/// keeps files named like `01-slug.md`, and emits one block per document
	/// intro, section, and subsection. The JSON output is the array a search
	/// index ingests directly.
	Extract {
		/// Output format. Use `json` for the raw block array or `text` for a
		/// human-readable listing.
		#[arg(long, value_enum, default_value_t = OutputFormat::Json)]
		format: OutputFormat,

		/// Write output to a file instead of stdout.
		#[arg(long)]
		out: Option<PathBuf>,
	},
	/// List the documents that would be indexed.
	///
	/// Shows each discovered document's slug and path without extracting
	/// content. Useful for checking naming-convention and exclude-pattern
	/// behavior before a build.
	List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Pretty-printed JSON array of search blocks.
	Json,
	/// Human-readable listing with colors and formatting.
	Text,
}
