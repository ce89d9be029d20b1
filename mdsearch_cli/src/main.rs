use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdsearch_cli::Commands;
use mdsearch_cli::OutputFormat;
use mdsearch_cli::SearchCli;
use mdsearch_core::AnyEmptyResult;
use mdsearch_core::ScanOptions;
use mdsearch_core::SearchBlock;
use mdsearch_core::SearchConfig;
use mdsearch_core::discover_files;
use mdsearch_core::extract_blocks_with_config;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = SearchCli::parse();

	// Respect NO_COLOR, --no-color, and terminal support.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stdout).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose);

	let result = match args.command {
		Some(Commands::Extract { format, ref out }) => run_extract(&args, format, out.as_deref()),
		Some(Commands::List) => run_list(&args),
		None => {
			eprintln!("No subcommand specified. Run `mdsearch --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<mdsearch_core::SearchError>() {
			Ok(search_err) => {
				let report: miette::Report = (*search_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool) {
	let default_filter = if verbose { "mdsearch_core=debug" } else { "warn" };
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn resolve_root(args: &SearchCli) -> PathBuf {
	args.path.clone().unwrap_or_else(|| PathBuf::from("."))
}

fn run_extract(args: &SearchCli, format: OutputFormat, out: Option<&Path>) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config = SearchConfig::load_or_default(&root)?;
	let blocks = extract_blocks_with_config(&root, &config)?;

	let rendered = match format {
		OutputFormat::Json => serde_json::to_string_pretty(&blocks)?,
		OutputFormat::Text => render_text(&blocks),
	};

	match out {
		Some(path) => {
			std::fs::write(path, format!("{rendered}\n"))?;
			println!(
				"Wrote {} block(s) to {}",
				blocks.len(),
				colored!(path.display(), bold)
			);
		}
		None => println!("{rendered}"),
	}

	Ok(())
}

fn run_list(args: &SearchCli) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config = SearchConfig::load_or_default(&root)?;
	let options = ScanOptions::from_config(&config);
	let content_root = root.join(&config.content_dir);
	let files = discover_files(&content_root, &options)?;

	if files.is_empty() {
		println!("No documents found under {}", content_root.display());
		return Ok(());
	}

	for file in &files {
		let shown = file.path.strip_prefix(&root).unwrap_or(&file.path);
		println!("{}  {}", colored!(&file.slug, bold), shown.display());
	}
	println!("\n{} document(s)", files.len());

	Ok(())
}

fn render_text(blocks: &[SearchBlock]) -> String {
	let mut out = String::new();

	for block in blocks {
		let trail = block.breadcrumbs.join(" > ");
		out.push_str(&format!("{}\n", colored!(trail, bold)));
		out.push_str(&format!("  {}\n", block.href));
		if let Some(rank) = block.rank {
			out.push_str(&format!("  {}\n", colored!(format!("rank {rank}"), yellow)));
		}
		let preview: String = block.content.chars().take(80).collect();
		if !preview.is_empty() {
			out.push_str(&format!("  {}\n", preview.replace('\n', " ")));
		}
		out.push('\n');
	}

	out.push_str(&format!("{} block(s)", blocks.len()));
	out
}
