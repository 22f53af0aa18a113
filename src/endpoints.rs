//! URL construction for the read-only API and the board web site

use crate::payloads::{BoardName, ImageNumber, PageNumber, PostNumber};
use url::Url;

/// The endpoints that make up the read-only JSON API
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Endpoint {
	Boards,
	Catalog {
		board: BoardName,
	},
	Thread {
		board: BoardName,
		no: PostNumber,
	},
	Threads {
		board: BoardName,
		page: PageNumber,
	},

	/// The returned threads only have minimal information filled in
	AllThreads {
		board: BoardName,
	},

	Archive {
		board: BoardName,
	},
	Image {
		board: BoardName,
		tim: ImageNumber,
		ext: String,
	},
	Thumbnail {
		board: BoardName,
		tim: ImageNumber,
	},
	SpoilerImage,
	Flag {
		country: String,
	},
	PolFlag {
		country: String,
	},
	BoardFlag {
		board: BoardName,
		code: String,
	},
	CustomSpoiler {
		board: BoardName,
		index: u32,
	},

	/// Mobile search endpoint. Takes extra query parameters.
	Search,
}

impl Endpoint {
	fn path(&self) -> String {
		use Endpoint::*;

		match self {
			Boards => "https://a.4cdn.org/boards.json".into(),
			Catalog { board } => {
				format!("https://a.4cdn.org/{}/catalog.json", board)
			}
			Thread { board, no } => {
				format!("https://a.4cdn.org/{}/thread/{}.json", board, no)
			}
			Threads { board, page } => {
				format!("https://a.4cdn.org/{}/{}.json", board, page)
			}
			AllThreads { board } => {
				format!("https://a.4cdn.org/{}/threads.json", board)
			}
			Archive { board } => {
				format!("https://a.4cdn.org/{}/archive.json", board)
			}
			Image { board, tim, ext } => {
				format!("https://i.4cdn.org/{}/{}{}", board, tim, ext)
			}
			Thumbnail { board, tim } => {
				format!("https://i.4cdn.org/{}/{}s.jpg", board, tim)
			}
			SpoilerImage => "https://s.4cdn.org/image/spoiler.png".into(),
			Flag { country } => format!(
				"https://s.4cdn.org/image/country/{}.gif",
				country.to_lowercase(),
			),
			PolFlag { country } => format!(
				"https://s.4cdn.org/image/country/troll/{}.gif",
				country,
			),
			BoardFlag { board, code } => format!(
				"https://s.4cdn.org/image/flags/{}/{}.gif",
				board,
				code.to_lowercase(),
			),
			CustomSpoiler { board, index } => format!(
				"https://s.4cdn.org/image/spoiler-{}{}.png",
				board, index,
			),
			// Desktop browser search API. Only covers SFW boards.
			Search => "https://find.4channel.org/api".into(),
		}
	}

	/// Construct the request URL
	pub fn url(&self) -> Url {
		self.url_with_params(&[])
	}

	/// Construct the request URL with extra query parameters appended
	pub fn url_with_params(&self, params: &[(&str, &str)]) -> Url {
		// The endpoint table only produces well-formed URLs
		let mut url = Url::parse(&self.path()).unwrap();
		if !params.is_empty() {
			let mut query = url.query_pairs_mut();
			for (k, v) in params {
				query.append_pair(k, v);
			}
		}
		url
	}
}

/// Endpoints of the board web site itself. Useful for sharing browsable
/// URLs.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum WebEndpoint {
	Root,
	Catalog {
		board: BoardName,
	},
	Thread {
		board: BoardName,
		no: PostNumber,
	},
	Post {
		board: BoardName,
		no: PostNumber,
		post: PostNumber,
	},
}

impl WebEndpoint {
	fn path(&self) -> String {
		use WebEndpoint::*;

		match self {
			Root => "https://4chan.org/".into(),
			Catalog { board } => {
				format!("https://boards.4chan.org/{}/catalog", board)
			}
			Thread { board, no } => {
				format!("https://boards.4chan.org/{}/thread/{}", board, no)
			}
			Post { board, no, post } => format!(
				"https://boards.4chan.org/{}/thread/{}#p{}",
				board, no, post,
			),
		}
	}

	/// Construct the browsable URL
	pub fn url(&self) -> Url {
		Url::parse(&self.path()).unwrap()
	}
}

#[cfg(test)]
mod test {
	use super::{Endpoint, WebEndpoint};

	macro_rules! test_urls {
		($( $name:ident($ep:expr => $url:expr) )+) => {
			$(
				#[test]
				fn $name() {
					assert_eq!($ep.url().as_str(), $url);
				}
			)+
		};
	}

	test_urls! {
		boards(Endpoint::Boards => "https://a.4cdn.org/boards.json")
		catalog(Endpoint::Catalog { board: "g".into() }
			=> "https://a.4cdn.org/g/catalog.json")
		thread(Endpoint::Thread { board: "g".into(), no: 123 }
			=> "https://a.4cdn.org/g/thread/123.json")
		board_page(Endpoint::Threads { board: "g".into(), page: 2 }
			=> "https://a.4cdn.org/g/2.json")
		all_threads(Endpoint::AllThreads { board: "g".into() }
			=> "https://a.4cdn.org/g/threads.json")
		archive(Endpoint::Archive { board: "g".into() }
			=> "https://a.4cdn.org/g/archive.json")
		image(
			Endpoint::Image {
				board: "g".into(),
				tim: 1596910000123,
				ext: ".png".into(),
			} => "https://i.4cdn.org/g/1596910000123.png"
		)
		thumbnail(Endpoint::Thumbnail { board: "g".into(), tim: 15969 }
			=> "https://i.4cdn.org/g/15969s.jpg")
		flag(Endpoint::Flag { country: "US".into() }
			=> "https://s.4cdn.org/image/country/us.gif")
		web_thread(WebEndpoint::Thread { board: "g".into(), no: 123 }
			=> "https://boards.4chan.org/g/thread/123")
		web_post(
			WebEndpoint::Post { board: "g".into(), no: 123, post: 456 }
				=> "https://boards.4chan.org/g/thread/123#p456"
		)
	}

	#[test]
	fn search_params() {
		assert_eq!(
			Endpoint::Search
				.url_with_params(&[("q", "test"), ("b", "g")])
				.as_str(),
			"https://find.4channel.org/api?q=test&b=g",
		);
	}
}
