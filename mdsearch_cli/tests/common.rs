use std::fs;
use std::path::Path;

use assert_cmd::Command;

pub fn mdsearch_cmd() -> Command {
	let mut cmd = Command::cargo_bin("mdsearch").expect("mdsearch binary builds");
	cmd.env("NO_COLOR", "1");
	cmd
}

pub fn write_file(root: &Path, relative: &str, contents: &str) {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).expect("create fixture directories");
	}
	fs::write(path, contents).expect("write fixture file");
}

pub const INTRO_DOC: &str =
	"---\ntitle: Introduction\nrank: 1\n---\n\nWelcome to the project.\n\n## Install\n\nRun the \
	 installer.\n";
