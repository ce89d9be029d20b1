mod common;

use common::INTRO_DOC;
use common::mdsearch_cmd;
use common::write_file;
use mdsearch_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn list_names_discovered_documents() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(tmp.path(), "content/docs/01-introduction.md", INTRO_DOC);
	write_file(tmp.path(), "content/docs/02-routing.md", INTRO_DOC);
	write_file(tmp.path(), "content/docs/scratch.md", INTRO_DOC);

	mdsearch_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(
			predicates::str::contains("introduction")
				.and(predicates::str::contains("routing"))
				.and(predicates::str::contains("2 document(s)")),
		);

	Ok(())
}

#[test]
fn list_reports_empty_content_root() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	mdsearch_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("No documents found"));

	Ok(())
}

#[test]
fn list_applies_exclude_patterns() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(
		tmp.path(),
		"mdsearch.toml",
		"content_dir = \"docs\"\n\n[exclude]\npatterns = [\"drafts/\"]\n",
	);
	write_file(tmp.path(), "docs/01-public.md", INTRO_DOC);
	write_file(tmp.path(), "docs/drafts/01-secret.md", INTRO_DOC);

	mdsearch_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("public").and(predicates::str::contains("secret").not()));

	Ok(())
}
