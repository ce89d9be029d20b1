use std::fmt::Write as _;
use std::path::Path;
use std::sync::LazyLock;

use derive_more::Deref;
use regex::Regex;
use serde::Deserialize;

use crate::SearchError;
use crate::SearchResult;

/// Placeholder line expanded into generated type sections.
static TYPES_PLACEHOLDER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^> TYPES: (.+)$").expect("placeholder pattern is valid"));

/// A single exported type from a documented module.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDoc {
	/// Exported type name.
	pub name: String,
	/// Prose description of the type. May be empty.
	#[serde(default)]
	pub comment: String,
	/// Declaration snippet rendered as a fenced code block. May be empty.
	#[serde(default)]
	pub snippet: String,
}

/// One documented module and the types it exports.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDocs {
	/// Module name as referenced by placeholder lines.
	pub name: String,
	#[serde(default)]
	pub types: Vec<TypeDoc>,
}

/// Lookup table used to expand `> TYPES: {module}` placeholder lines into
/// literal markdown. An empty registry is valid and leaves every placeholder
/// untouched.
#[derive(Debug, Clone, Default, Deref, Deserialize)]
pub struct ModuleRegistry {
	#[deref]
	#[serde(default)]
	modules: Vec<ModuleDocs>,
}

impl ModuleRegistry {
	/// Load a registry from a JSON file with a top-level `modules` array.
	pub fn load(path: &Path) -> SearchResult<ModuleRegistry> {
		let bytes = std::fs::read(path).map_err(|e| SearchError::RegistryLoad {
			path: path.display().to_string(),
			reason: e.to_string(),
		})?;

		serde_json::from_slice(&bytes).map_err(|e| SearchError::RegistryLoad {
			path: path.display().to_string(),
			reason: e.to_string(),
		})
	}

	/// Look up a module by the name placeholder lines refer to it by.
	#[must_use]
	pub fn find(&self, name: &str) -> Option<&ModuleDocs> {
		self.modules.iter().find(|module| module.name == name)
	}
}

/// Replace every resolvable `> TYPES: {module}` line with generated sections,
/// one `### [TYPE]: {name}` heading per exported type followed by its comment
/// and declaration snippet. Unresolved module names are left verbatim.
pub fn expand_type_placeholders(markdown: &str, registry: &ModuleRegistry) -> String {
	let mut out = String::with_capacity(markdown.len());

	for line in markdown.lines() {
		let resolved = TYPES_PLACEHOLDER
			.captures(line)
			.and_then(|captures| registry.find(captures[1].trim()));

		let Some(module) = resolved else {
			out.push_str(line);
			out.push('\n');
			continue;
		};

		for type_doc in &module.types {
			let _ = writeln!(out, "### [TYPE]: {}\n", type_doc.name);
			if !type_doc.comment.is_empty() {
				out.push_str(type_doc.comment.trim_end());
				out.push_str("\n\n");
			}
			if !type_doc.snippet.is_empty() {
				out.push_str("```ts\n");
				out.push_str(type_doc.snippet.trim_end());
				out.push_str("\n```\n\n");
			}
		}
	}

	out
}
