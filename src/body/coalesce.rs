use super::tokenizer::{tokenize, Token};

/// Tokenize the body with adjacent text runs merged into one token.
///
/// `<br>` and `<wbr>` append a newline and a zero width space to the current
/// run instead of surfacing as tag tokens, so they never open a tag context.
pub fn coalesce(body: &str, mut consumer: impl FnMut(Token<'_>)) {
	let mut buf = String::new();
	tokenize(body, |tok| match tok {
		Token::Text(text) => buf.push_str(text),
		Token::Start("<br>") => buf.push('\n'),
		Token::Start("<wbr>") => buf.push('\u{200b}'),
		tok => {
			if !buf.is_empty() {
				consumer(Token::Text(&buf));
				buf.clear();
			}
			consumer(tok);
		}
	});
	if !buf.is_empty() {
		consumer(Token::Text(&buf));
	}
}
