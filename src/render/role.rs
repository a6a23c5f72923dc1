use super::style::{StyleDirective, Tint};

/// Semantic category of a whole line, chosen by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
	/// `#` introduces the page title.
	Title,
	/// `$` introduces a category heading.
	Category,
	/// `>` introduces an explanation or usage note.
	Explanation,
	/// `` ` `` introduces an example shortcut or command.
	ShortcutExample,
	/// Any line without a leading sigil.
	Plain,
}

impl Role {
	/// Classify a line from its first character.
	///
	/// Returns `None` when the character is not a sigil, in which case the
	/// line is [`Role::Plain`] and the character is ordinary content.
	pub fn classify(first: char) -> Option<Self> {
		match first {
			'#' => Some(Self::Title),
			'$' => Some(Self::Category),
			'>' => Some(Self::Explanation),
			'`' => Some(Self::ShortcutExample),
			_ => None,
		}
	}

	/// Foreground tint used for the line body.
	pub fn tint(self) -> Option<Tint> {
		match self {
			Self::Title => Some(Tint::Title),
			Self::Category => Some(Tint::Category),
			Self::Explanation => Some(Tint::Explanation),
			Self::ShortcutExample => Some(Tint::Shortcut),
			Self::Plain => None,
		}
	}

	/// Directives emitted once, right after the sigil is consumed.
	pub fn opening_directives(self) -> &'static [StyleDirective] {
		match self {
			Self::Title => &[StyleDirective::BoldOn, StyleDirective::Foreground(Tint::Title)],
			Self::Category => &[StyleDirective::Foreground(Tint::Category)],
			Self::Explanation => &[StyleDirective::Foreground(Tint::Explanation)],
			Self::ShortcutExample => &[StyleDirective::Foreground(Tint::Shortcut)],
			Self::Plain => &[],
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case('#', Role::Title)]
	#[case('$', Role::Category)]
	#[case('>', Role::Explanation)]
	#[case('`', Role::ShortcutExample)]
	fn sigils_map_to_roles(#[case] sigil: char, #[case] role: Role) {
		assert_eq!(Role::classify(sigil), Some(role));
	}

	#[rstest]
	#[case('a')]
	#[case(' ')]
	#[case('{')]
	#[case('-')]
	#[case('é')]
	fn other_characters_are_plain(#[case] first: char) {
		assert_eq!(Role::classify(first), None);
	}

	#[test]
	fn title_is_the_only_bold_role() {
		for role in [
			Role::Title,
			Role::Category,
			Role::Explanation,
			Role::ShortcutExample,
			Role::Plain,
		] {
			let bold = role.opening_directives().contains(&StyleDirective::BoldOn);
			assert_eq!(bold, role == Role::Title, "{role:?}");
		}
	}

	#[test]
	fn plain_lines_open_without_directives() {
		assert!(Role::Plain.opening_directives().is_empty());
		assert_eq!(Role::Plain.tint(), None);
	}
}
