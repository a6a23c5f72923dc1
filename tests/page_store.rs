use std::fs;
use std::io::Cursor;
use std::io::Write;

use shortcut::update::extract;
use shortcut::{PageStore, RenderError, RenderOptions, Renderer, render_path};
use tempfile::tempdir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const GIT_PAGE: &str = "# git\n\n> Version control\n\n$ Commit staged changes\n`{{git commit}}\n";

fn archive(entries: &[(&str, &str)]) -> Vec<u8> {
	let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
	for (name, body) in entries {
		writer.start_file(*name, SimpleFileOptions::default()).unwrap();
		writer.write_all(body.as_bytes()).unwrap();
	}
	writer.finish().unwrap().into_inner()
}

#[test]
fn extracted_archive_is_listed_and_rendered() {
	let dir = tempdir().unwrap();
	let pages = dir.path().join("pages");
	extract(&archive(&[("git.md", GIT_PAGE), ("vim.md", "# vim\n")]), &pages).unwrap();

	let store = PageStore::new(&pages);
	assert_eq!(store.list().unwrap(), vec!["git", "vim"]);

	let renderer = Renderer::new(RenderOptions::plain());
	let mut out: Vec<u8> = Vec::new();
	let path = store.path_for("git").unwrap();
	let report = render_path(&renderer, &path, &mut out).unwrap();

	assert_eq!(report.lines, 6);
	assert!(report.unterminated_spans.is_empty());
	assert_eq!(
		String::from_utf8(out).unwrap(),
		" git\n\n Version control\n\n Commit staged changes\ngit commit\n"
	);
}

#[test]
fn styled_page_uses_the_legacy_codes() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("git.md");
	fs::write(&path, "`{{git commit}}\n").unwrap();

	let mut out: Vec<u8> = Vec::new();
	render_path(&Renderer::default(), &path, &mut out).unwrap();

	assert_eq!(
		String::from_utf8(out).unwrap(),
		"\x1b[32m\x1b[37mgit commit\x1b[37m\x1b[22m\x1b[39m\n"
	);
}

#[test]
fn unknown_program_is_unavailable() {
	let dir = tempdir().unwrap();
	let path = PageStore::new(dir.path()).path_for("git").unwrap();

	let mut out: Vec<u8> = Vec::new();
	let err = render_path(&Renderer::default(), &path, &mut out).unwrap_err();

	assert!(matches!(err, RenderError::SourceUnavailable { .. }));
	assert!(out.is_empty());
}
