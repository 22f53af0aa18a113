use crate::payloads::post_body::Element;
use lazy_static::lazy_static;
use regex::Regex;

/// Top level domains recognized when linkifying bare dotted tokens
const TLDS: &str = "com|net|org|edu|gov|mil|aero|asia|biz|cat|coop|info|int\
|jobs|mobi|museum|name|post|pro|tel|travel|xxx|ac|ad|ae|af|ag|ai|al|am|an|ao\
|aq|ar|as|at|au|aw|ax|az|ba|bb|bd|be|bf|bg|bh|bi|bj|bm|bn|bo|br|bs|bt|bv|bw\
|by|bz|ca|cc|cd|cf|cg|ch|ci|ck|cl|cm|cn|co|cr|cs|cu|cv|cx|cy|cz|dd|de|dj|dk\
|dm|do|dz|ec|ee|eg|eh|er|es|et|eu|fi|fj|fk|fm|fo|fr|ga|gb|gd|ge|gf|gg|gh|gi\
|gl|gm|gn|gp|gq|gr|gs|gt|gu|gw|gy|hk|hm|hn|hr|ht|hu|id|ie|il|im|in|io|iq|ir\
|is|it|je|jm|jo|jp|ke|kg|kh|ki|km|kn|kp|kr|kw|ky|kz|la|lb|lc|li|lk|lr|ls|lt\
|lu|lv|ly|ma|mc|md|me|mg|mh|mk|ml|mm|mn|mo|mp|mq|mr|ms|mt|mu|mv|mw|mx|my|mz\
|na|nc|ne|nf|ng|ni|nl|no|np|nr|nu|nz|om|pa|pe|pf|pg|ph|pk|pl|pm|pn|pr|ps|pt\
|pw|py|qa|re|ro|rs|ru|rw|sa|sb|sc|sd|se|sg|sh|si|sj|Ja|sk|sl|sm|sn|so|sr|ss\
|st|su|sv|sx|sy|sz|tc|td|tf|tg|th|tj|tk|tl|tm|tn|to|tp|tr|tt|tv|tw|tz|ua|ug\
|uk|us|uy|uz|va|vc|ve|vg|vi|vn|vu|wf|ws|ye|yt|yu|za|zm|zw";

lazy_static! {
	/// Matches in-text URLs. Derived from
	/// https://gist.github.com/gruber/8891611, extended to also match
	/// magnet: links, which as a side effect lets any scheme: token of the
	/// same shape through, including zero-slash forms like http:foo.bar.
	///
	/// Capture group 1 marks the bare dotted domain alternative, which
	/// needs the e-mail address guard applied in code.
	static ref URL: Regex = Regex::new(&format!(
		r#"(?i)\b(?:(?:(?:https?|magnet):(?:/{{0,3}}|[a-z0-9%])|[a-z0-9.\-]+[.](?:{tlds})/)(?:[^\s()<>{{}}\[\]]+|\([^\s()]*?\([^\s()]+\)[^\s()]*?\)|\([^\s]+?\))+(?:\([^\s()]*?\([^\s()]+\)[^\s()]*?\)|\([^\s]+?\)|[^\s`!()\[\]{{}};:'".,<>?«»“”‘’])|([a-z0-9]+(?:[.\-][a-z0-9]+)*[.](?:{tlds})\b/?))"#,
		tlds = TLDS,
	))
	.unwrap();
}

/// Split a root context text run into plain text and linkified URLs.
///
/// Matches are found left to right and never overlap. The anchor display
/// text keeps any zero width spaces the coalescer inserted for `<wbr>`; the
/// href has them stripped.
pub fn autolink(text: &str, consumer: &mut impl FnMut(Element)) {
	let mut locs = URL.capture_locations();
	let mut last = 0;
	let mut at = 0;
	while let Some(m) = URL.captures_read_at(&mut locs, text, at) {
		// The regex engine has no lookaround, so the e-mail guard on bare
		// domains is applied here: a dotted token touching a `@` on either
		// side is not a link
		if locs.get(1).is_some()
			&& (text[..m.start()].ends_with('@')
				|| text[m.end()..].starts_with('@'))
		{
			// Bare domains start with [a-z0-9], so +1 stays on a char
			// boundary
			at = m.start() + 1;
			continue;
		}

		if last < m.start() {
			consumer(Element::Plain(text[last..m.start()].into()));
		}
		let url = m.as_str();
		consumer(Element::Anchor {
			text: url.into(),
			href: url.replace('\u{200b}', ""),
		});
		last = m.end();
		at = m.end();
	}
	if last < text.len() {
		consumer(Element::Plain(text[last..].into()));
	}
}

#[cfg(test)]
mod test {
	use super::autolink;
	use crate::payloads::post_body::Element::{self, *};

	fn autolink_to_vec(text: &str) -> Vec<Element> {
		let mut out = Vec::new();
		autolink(text, &mut |el| out.push(el));
		out
	}

	macro_rules! anchor {
		($url:expr) => {
			Anchor {
				text: $url.into(),
				href: $url.into(),
			}
		};
	}

	#[test]
	fn no_matches() {
		assert_eq!(
			autolink_to_vec("just some text"),
			vec![Plain("just some text".into())],
		);
	}

	#[test]
	fn bare_domain() {
		assert_eq!(
			autolink_to_vec("see example.com."),
			vec![
				Plain("see ".into()),
				anchor!("example.com"),
				Plain(".".into()),
			],
		);
	}

	#[test]
	fn scheme_qualified() {
		assert_eq!(
			autolink_to_vec("a https://example.com/b c"),
			vec![
				Plain("a ".into()),
				anchor!("https://example.com/b"),
				Plain(" c".into()),
			],
		);
	}

	#[test]
	fn zero_slash_scheme() {
		assert_eq!(
			autolink_to_vec("http:foo.bar"),
			vec![anchor!("http:foo.bar")],
		);
	}

	#[test]
	fn magnet_link() {
		assert_eq!(
			autolink_to_vec("magnet:?xt=urn:udp:xd"),
			vec![anchor!("magnet:?xt=urn:udp:xd")],
		);
	}

	#[test]
	fn email_addresses_are_not_links() {
		assert_eq!(
			autolink_to_vec("mail user@example.com x"),
			vec![Plain("mail user@example.com x".into())],
		);
	}

	#[test]
	fn domain_followed_by_at_is_not_a_link() {
		assert_eq!(
			autolink_to_vec("example.com@"),
			vec![Plain("example.com@".into())],
		);
	}

	#[test]
	fn zero_width_spaces_stripped_from_href() {
		assert_eq!(
			autolink_to_vec("http://example.com/e\u{200b}/f.gif"),
			vec![Anchor {
				text: "http://example.com/e\u{200b}/f.gif".into(),
				href: "http://example.com/e/f.gif".into(),
			}],
		);
	}

	#[test]
	fn uppercase_domain() {
		assert_eq!(
			autolink_to_vec("EXAMPLE.COM"),
			vec![anchor!("EXAMPLE.COM")],
		);
	}

	#[test]
	fn multiple_matches() {
		assert_eq!(
			autolink_to_vec("a example.com b example.net"),
			vec![
				Plain("a ".into()),
				anchor!("example.com"),
				Plain(" b ".into()),
				anchor!("example.net"),
			],
		);
	}
}
