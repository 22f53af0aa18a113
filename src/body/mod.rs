//! Single pass parser for the quasi-HTML post bodies served by the API.
//!
//! The markup is limited to a small tag and entity whitelist, so tags are
//! dispatched by comparing the full raw tag text against literal constants
//! instead of through a general attribute parser. The parser must never
//! fail: anything malformed degrades to literal text or is dropped.

mod coalesce;
mod tokenizer;
mod urls;

use crate::payloads::post_body::Element;
use coalesce::coalesce;
use lazy_static::lazy_static;
use regex::Regex;
use tokenizer::Token;

lazy_static! {
	static ref HREF: Regex = Regex::new(r#"href="[^"]*""#).unwrap();
}

/// Parse a raw post body into typed elements, invoking the consumer once
/// per element in document order.
///
/// Pure and infallible; all state is local to one call, so concurrent
/// invocations on independent inputs need no locking. Text inside
/// unrecognized tags is dropped. That is a deliberate lossy policy, not an
/// error.
pub fn parse(body: &str, mut consumer: impl FnMut(Element)) {
	let mut tag_stack = Vec::<String>::new();
	coalesce(body, |tok| match tok {
		Token::Text(text) => match tag_stack.last().map(String::as_str) {
			None => urls::autolink(text, &mut consumer),
			Some("<b>") => consumer(Element::Bold(text.into())),
			Some("<s>") => consumer(Element::Strikethrough(text.into())),
			Some(r#"<span class="quote">"#) => {
				consumer(Element::Quote(text.into()))
			}
			Some(r#"<span class="deadlink">"#) => {
				consumer(Element::DeadLink(text.into()))
			}
			Some(r#"<pre class="prettyprint">"#) => {
				consumer(Element::Code(text.into()))
			}
			Some(tag) if tag.starts_with("<a ") => {
				// First href attribute wins. Attributes are not parsed
				// beyond this one pattern search.
				let href = HREF
					.find(tag)
					.map(|m| {
						let s = m.as_str();
						&s[6..s.len() - 1]
					})
					.unwrap_or("");
				consumer(Element::Anchor {
					text: text.into(),
					href: href.into(),
				});
			}
			// Text inside an unrecognized tag context is dropped
			Some(_) => (),
		},
		Token::Start(tag) => tag_stack.push(tag.into()),
		// Unconditional pop; popping an empty stack from unbalanced markup
		// is a no-op
		Token::End(_) => {
			tag_stack.pop();
		}
	});
}

#[cfg(test)]
mod test {
	use super::parse;
	use crate::payloads::post_body::Element::{self, *};

	fn parse_to_vec(body: &str) -> Vec<Element> {
		let mut out = Vec::new();
		parse(body, |el| out.push(el));
		out
	}

	macro_rules! plain {
		($text:expr) => {
			Plain($text.into())
		};
	}

	macro_rules! anchor {
		($text:expr, $href:expr) => {
			Anchor {
				text: $text.into(),
				href: $href.into(),
			}
		};
	}

	macro_rules! test_parse {
		($( $name:ident($in:expr => [$($el:expr),* $(,)?]) )+) => {
			$(
				#[test]
				fn $name() {
					assert_eq!(parse_to_vec($in), vec![$($el),*]);
				}
			)+
		};
	}

	test_parse! {
		empty_body("" => [])
		plain_text("abc def" => [plain!("abc def")])
		bold("abc<b>def</b>ghi" => [
			plain!("abc"),
			Bold("def".into()),
			plain!("ghi"),
		])
		strikethrough("abc<s>def</s>ghi" => [
			plain!("abc"),
			Strikethrough("def".into()),
			plain!("ghi"),
		])
		quote(r#"abc<span class="quote">def</span>ghi"# => [
			plain!("abc"),
			Quote("def".into()),
			plain!("ghi"),
		])
		deadlink(r#"abc<span class="deadlink">def</span>ghi"# => [
			plain!("abc"),
			DeadLink("def".into()),
			plain!("ghi"),
		])
		code(r#"abc<pre class="prettyprint">def<br>ghi</pre>jkl"# => [
			plain!("abc"),
			Code("def\nghi".into()),
			plain!("jkl"),
		])
		anchor_tag(r##"abc<a href="#foo">def</a>ghi"## => [
			plain!("abc"),
			anchor!("def", "#foo"),
			plain!("ghi"),
		])
		anchor_without_href(r#"<a class="x">def</a>"# => [anchor!("def", "")])
		anchor_first_href_wins(r#"<a href="a" href="b">x</a>"# => [
			anchor!("x", "a"),
		])
		entities(r#"&#039;&#044;&amp;&gt;&lt;&quot;"# => [
			plain!("',&><\""),
		])
		unknown_entity_passes_through("&unknown;abc" => [
			plain!("&unknown;abc"),
		])
		decoding_is_not_repeated("&amp;gt;" => [plain!("&gt;")])
		line_break_tags("abc<br><br>def<wbr>ghi" => [
			plain!("abc\n\ndef\u{200b}ghi"),
		])
		unterminated_tag("abc<b" => [plain!("abc<b")])
		unterminated_entity("abc&amp" => [plain!("abc&amp")])
		unmatched_end_tag("abc</b>def" => [plain!("abc"), plain!("def")])
		unknown_tag_drops_text("abc<blink>def</blink>ghi" => [
			plain!("abc"),
			plain!("ghi"),
		])
		only_stack_top_classifies("<b>a<i>b</i>c</b>" => [
			Bold("a".into()),
			Bold("c".into()),
		])
		raw_url("abc example.com/a/b.gif ghi" => [
			plain!("abc "),
			anchor!("example.com/a/b.gif", "example.com/a/b.gif"),
			plain!(" ghi"),
		])
		raw_url_with_wbr("http://example.com/e<wbr>/f.gif" => [
			anchor!(
				"http://example.com/e\u{200b}/f.gif",
				"http://example.com/e/f.gif"
			),
		])
		raw_magnet_link("abc magnet:?xt=urn:udp:xd def" => [
			plain!("abc "),
			anchor!("magnet:?xt=urn:udp:xd", "magnet:?xt=urn:udp:xd"),
			plain!(" def"),
		])
		urls_not_linkified_inside_tags("<b>example.com</b>" => [
			Bold("example.com".into()),
		])
	}

	// The reference rendering of a longer body with mixed markup
	#[test]
	fn mixed_markup() {
		assert_eq!(
			parse_to_vec(
				r#"&gt;be me<br><span class="quote">&gt;greentext</span><br>see example.com"#,
			),
			vec![
				plain!(">be me\n"),
				Quote(">greentext".into()),
				plain!("\nsee "),
				anchor!("example.com", "example.com"),
			],
		);
	}
}
