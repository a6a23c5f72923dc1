//! Property tests for the page renderer.
//!
//! These pin the behaviour every page relies on: plain text passes through,
//! sigils are consumed, disabled styling emits no escapes and rendering is
//! deterministic.

use proptest::prelude::*;
use shortcut::{RenderOptions, Renderer};

fn plain_renderer() -> Renderer {
	Renderer::new(RenderOptions::plain())
}

fn styled_renderer() -> Renderer {
	Renderer::new(RenderOptions::default())
}

/// A line without sigil, braces or line terminators.
fn plain_line() -> impl Strategy<Value = String> {
	"[^#$>`{}\r\n\x1b][^{}\r\n\x1b]{0,40}"
}

/// Any single line, markup included.
fn any_line() -> impl Strategy<Value = String> {
	"[^\r\n\x1b]{0,60}"
}

fn document(line: impl Strategy<Value = String>) -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(line, 0..12)
}

fn join(lines: &[String]) -> String {
	lines.iter().map(|line| format!("{line}\n")).collect()
}

proptest! {
	#[test]
	fn plain_lines_pass_through_unchanged(lines in document(plain_line())) {
		let text = join(&lines);
		prop_assert_eq!(plain_renderer().render_to_string(&text), text);
	}

	#[test]
	fn sigils_are_consumed(sigil in "[#$>`]", rest in "[^{}\r\n\x1b]{0,40}") {
		let rendered = plain_renderer().render_to_string(&format!("{sigil}{rest}\n"));
		prop_assert_eq!(rendered, format!("{rest}\n"));
	}

	#[test]
	fn disabled_styling_emits_no_escapes(lines in document(any_line())) {
		let rendered = plain_renderer().render_to_string(&join(&lines));
		prop_assert!(!rendered.contains('\x1b'));
	}

	#[test]
	fn every_source_line_yields_one_output_line(lines in document(any_line())) {
		let rendered = styled_renderer().render_to_string(&join(&lines));
		prop_assert_eq!(rendered.matches('\n').count(), lines.len());
	}

	#[test]
	fn styled_lines_end_with_a_reset(lines in document(any_line())) {
		let rendered = styled_renderer().render_to_string(&join(&lines));
		for line in rendered.lines() {
			prop_assert!(line.ends_with("\x1b[22m\x1b[39m"), "line {:?}", line);
		}
	}

	#[test]
	fn rendering_is_deterministic(lines in document(any_line())) {
		let text = join(&lines);
		let renderer = styled_renderer();
		prop_assert_eq!(renderer.render_to_string(&text), renderer.render_to_string(&text));
	}

	#[test]
	fn braces_never_leak_into_plain_output(line in "[^\r\n\x1b{}]{0,20}", inner in "[^\r\n\x1b{}]{0,20}") {
		let rendered = plain_renderer().render_to_string(&format!("x{line}{{{{{inner}}}}}\n"));
		prop_assert_eq!(rendered, format!("x{line}{inner}\n"));
	}

	#[test]
	fn leading_span_is_bracketed_exactly(inner in "[^\r\n\x1b{}]{0,20}", rest in "[^\r\n\x1b{}]{0,20}") {
		let rendered = styled_renderer().render_to_string(&format!("{{{{{inner}}}}}{rest}\n"));
		prop_assert_eq!(rendered, format!("\x1b[37m{inner}\x1b[37m{rest}\x1b[22m\x1b[39m\n"));
	}
}
