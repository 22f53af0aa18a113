use serde::{Deserialize, Serialize};

/// One classified unit of parsed post body output.
///
/// Text is stored fully decoded: character references are resolved and
/// `<br>`/`<wbr>` already replaced with their literal characters.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Element {
	/// Unformatted text
	Plain(String),

	/// Bold formatting tags
	Bold(String),

	/// Strikethrough formatting tags
	Strikethrough(String),

	/// Quoted text
	Quote(String),

	/// Link to a post or board that no longer exists
	DeadLink(String),

	/// Hyperlink. Either an explicit anchor tag or a bare URL picked up by
	/// the autolinker. The display text may contain zero width spaces; the
	/// href never does.
	Anchor { text: String, href: String },

	/// Programming code tags
	Code(String),
}
