/// Token of the raw post body markup
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Token<'a> {
	/// Run of text with any character references already decoded
	Text(&'a str),

	/// Opening tag with brackets and attributes preserved verbatim
	Start(&'a str),

	/// Closing tag
	End(&'a str),
}

/// Decode the named character references actually seen in API content.
///
/// Case-sensitive whole-reference match. There is no general numeric
/// reference decoding; anything not in this table passes through verbatim.
fn decode_entity(entity: &str) -> Option<&'static str> {
	Some(match entity {
		"&#039;" => "'",
		"&#044;" => ",",
		"&amp;" => "&",
		"&gt;" => ">",
		"&lt;" => "<",
		"&quot;" => "\"",
		_ => return None,
	})
}

/// Split the body into text, start tag and end tag tokens.
///
/// Never fails on any input: an unterminated tag or character reference
/// turns the remainder of the input into one final text token.
pub fn tokenize<'a>(body: &'a str, mut consumer: impl FnMut(Token<'a>)) {
	let mut chunk = body;
	while !chunk.is_empty() {
		let split = match chunk.find(|c| c == '<' || c == '&') {
			Some(i) => i,
			None => {
				consumer(Token::Text(chunk));
				return;
			}
		};
		if split != 0 {
			consumer(Token::Text(&chunk[..split]));
		}

		let rem = &chunk[split..];
		if rem.starts_with('<') {
			match rem.find('>') {
				Some(end) => {
					let tag = &rem[..=end];
					consumer(if tag.starts_with("</") {
						Token::End(tag)
					} else {
						Token::Start(tag)
					});
					chunk = &rem[end + 1..];
				}
				// Unterminated tag
				None => {
					consumer(Token::Text(rem));
					return;
				}
			}
		} else {
			match rem.find(';') {
				Some(end) => {
					let entity = &rem[..=end];
					consumer(Token::Text(
						decode_entity(entity).unwrap_or(entity),
					));
					chunk = &rem[end + 1..];
				}
				// Unterminated character reference
				None => {
					consumer(Token::Text(rem));
					return;
				}
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::{tokenize, Token};

	fn tokenize_to_vec(body: &str) -> Vec<Token> {
		let mut out = Vec::new();
		tokenize(body, |tok| out.push(tok));
		out
	}

	#[test]
	fn empty_input() {
		assert_eq!(tokenize_to_vec(""), vec![]);
	}

	#[test]
	fn tags_and_text() {
		use Token::*;

		assert_eq!(
			tokenize_to_vec(r#"a<b>b</b><span class="quote">c</span>"#),
			vec![
				Text("a"),
				Start("<b>"),
				Text("b"),
				End("</b>"),
				Start(r#"<span class="quote">"#),
				Text("c"),
				End("</span>"),
			],
		);
	}

	#[test]
	fn entity_decoding() {
		use Token::*;

		assert_eq!(
			tokenize_to_vec("&gt;&bogus;&lt;"),
			vec![Text(">"), Text("&bogus;"), Text("<")],
		);
	}

	#[test]
	fn unterminated_tag_becomes_text() {
		assert_eq!(
			tokenize_to_vec("abc<b def"),
			vec![Token::Text("abc"), Token::Text("<b def")],
		);
	}

	#[test]
	fn unterminated_entity_becomes_text() {
		assert_eq!(
			tokenize_to_vec("abc&amp"),
			vec![Token::Text("abc"), Token::Text("&amp")],
		);
	}
}
