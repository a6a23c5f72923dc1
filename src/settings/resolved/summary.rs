use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Pages directory: {}", config.pages_dir.display());
	println!("  Page extension: {}", config.extension);
	println!("  Archive URL: {}", config.archive_url);
	println!(
		"  Colour: {} (styling {})",
		config.colour.as_str(),
		bool_to_word(config.render.styling)
	);
	println!("  After a span: {}", config.render.span_close.as_str());

	let palette = &config.render.palette;
	println!(
		"  Colours: title={} category={} explanation={} shortcut={} description={} reset={}",
		palette.title.name(),
		palette.category.name(),
		palette.explanation.name(),
		palette.shortcut.name(),
		palette.description.name(),
		palette.reset.name()
	);
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use shortcut::RenderOptions;

	use super::*;
	use crate::settings::ColourMode;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "on");
		assert_eq!(super::bool_to_word(false), "off");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			pages_dir: PathBuf::from("/tmp/pages"),
			extension: ".md".into(),
			archive_url: "https://example.com/shortcuts.zip".into(),
			colour: ColourMode::Never,
			render: RenderOptions::plain(),
		};

		print_summary(&config);
	}
}
