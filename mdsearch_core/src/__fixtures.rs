use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::registry::ModuleRegistry;
use crate::scanner::DiscoveredFile;

/// A document with a section and a nested subsection.
pub(crate) const GUIDE_DOC: &str = "---\ntitle: Guide\nrank: 2\n---\n\nWelcome to the \
                                    guide.\n\n## Getting started\n\nInstall the \
                                    package.\n\n### Requirements\n\nAny supported platform.\n";

/// A minimal document without headings.
pub(crate) const INTRO_DOC: &str = "---\ntitle: Introduction\n---\n\nWelcome to the project.\n";

pub(crate) fn doc_file(slug: &str) -> DiscoveredFile {
	DiscoveredFile {
		path: PathBuf::from(format!("01-{slug}.md")),
		slug: slug.to_string(),
	}
}

pub(crate) fn sample_registry() -> ModuleRegistry {
	serde_json::from_str(
		r#"{
	"modules": [
		{
			"name": "app/session",
			"types": [
				{
					"name": "Session",
					"comment": "An authenticated session.",
					"snippet": "interface Session {\n\tuser: string;\n}"
				},
				{ "name": "SessionStore" }
			]
		}
	]
}"#,
	)
	.expect("sample registry is valid JSON")
}

pub(crate) fn write_file(root: &Path, relative: &str, contents: &str) {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).expect("create fixture directories");
	}
	fs::write(path, contents).expect("write fixture file");
}
