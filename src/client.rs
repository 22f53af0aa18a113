//! Asynchronous client for the read-only JSON API

use crate::cache::ByteCache;
use crate::context::PostInContext;
use crate::endpoints::Endpoint;
use crate::payloads::search::SearchResults;
use crate::payloads::{
	Archive, Boards, Catalog, ChanThread, ImageNumber, PageNumber, Pages,
	PostNumber, Threads,
};
use bytes::Bytes;
use log::{debug, trace};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Mutex;
use url::Url;

/// Transient fetch failures are retried this many times before reporting
const RETRY_COUNT: usize = 3;

/// Errors reported by the API client.
///
/// Strictly a client concern: the body parser has no failure mode and never
/// produces or consumes these.
#[derive(Debug)]
pub enum ApiError {
	/// The server did not produce a usable response
	NoResponse,

	/// Response decoding failed
	Decode(serde_json::Error),

	/// Transport failure
	Network(reqwest::Error),
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoResponse => write!(f, "no response from server"),
			Self::Decode(err) => {
				write!(f, "response decoding failed: {}", err)
			}
			Self::Network(err) => write!(f, "network error: {}", err),
		}
	}
}

impl std::error::Error for ApiError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::NoResponse => None,
			Self::Decode(err) => Some(err),
			Self::Network(err) => Some(err),
		}
	}
}

/// Client result shorthand
pub type Result<T> = std::result::Result<T, ApiError>;

/// Read-only API client with retries and a bounded response cache
pub struct Client {
	http: reqwest::Client,
	cache: Mutex<ByteCache>,
}

impl Default for Client {
	fn default() -> Self {
		Self::new()
	}
}

impl Client {
	pub fn new() -> Self {
		Self {
			http: reqwest::Client::new(),
			cache: Mutex::new(ByteCache::default()),
		}
	}

	/// Fetch raw bytes, consulting the cache first and retrying transient
	/// failures
	pub async fn fetch(&self, url: Url) -> Result<Bytes> {
		if let Some(hit) = self.cache.lock().unwrap().get(url.as_str()) {
			trace!("cache hit: {}", url);
			return Ok(hit);
		}

		let mut last_err = ApiError::NoResponse;
		for _ in 0..=RETRY_COUNT {
			match self.http.get(url.clone()).send().await {
				Ok(resp) if resp.status().is_success() => {
					match resp.bytes().await {
						Ok(body) => {
							self.cache
								.lock()
								.unwrap()
								.insert(url.as_str().into(), body.clone());
							return Ok(body);
						}
						Err(err) => last_err = ApiError::Network(err),
					}
				}
				Ok(_) => last_err = ApiError::NoResponse,
				Err(err) => last_err = ApiError::Network(err),
			}
		}
		Err(last_err)
	}

	/// Fetch and decode any JSON endpoint
	pub async fn get<T: DeserializeOwned>(
		&self,
		endpoint: &Endpoint,
	) -> Result<T> {
		self.get_with_params(endpoint, &[]).await
	}

	/// Fetch and decode any JSON endpoint with extra query parameters
	pub async fn get_with_params<T: DeserializeOwned>(
		&self,
		endpoint: &Endpoint,
		params: &[(&str, &str)],
	) -> Result<T> {
		let body = self.fetch(endpoint.url_with_params(params)).await?;
		serde_json::from_slice(&body).map_err(|err| {
			debug!("JSON decoding error: {}", err);
			ApiError::Decode(err)
		})
	}

	pub async fn boards(&self) -> Result<Boards> {
		self.get(&Endpoint::Boards).await
	}

	pub async fn catalog(&self, board: &str) -> Result<Catalog> {
		self.get(&Endpoint::Catalog {
			board: board.into(),
		})
		.await
	}

	pub async fn thread(
		&self,
		board: &str,
		no: PostNumber,
	) -> Result<ChanThread> {
		self.get(&Endpoint::Thread {
			board: board.into(),
			no,
		})
		.await
	}

	pub async fn threads(
		&self,
		board: &str,
		page: PageNumber,
	) -> Result<Threads> {
		self.get(&Endpoint::Threads {
			board: board.into(),
			page,
		})
		.await
	}

	/// The returned threads only have minimal information filled in
	pub async fn all_threads(&self, board: &str) -> Result<Pages> {
		self.get(&Endpoint::AllThreads {
			board: board.into(),
		})
		.await
	}

	pub async fn archive(&self, board: &str) -> Result<Archive> {
		self.get(&Endpoint::Archive {
			board: board.into(),
		})
		.await
	}

	/// Raw image data. Useful for file types that don't decode into a
	/// bitmap, like webm and swf.
	pub async fn image(
		&self,
		board: &str,
		tim: ImageNumber,
		ext: &str,
	) -> Result<Bytes> {
		self.fetch(
			Endpoint::Image {
				board: board.into(),
				tim,
				ext: ext.into(),
			}
			.url(),
		)
		.await
	}

	pub async fn thumbnail(
		&self,
		board: &str,
		tim: ImageNumber,
	) -> Result<Bytes> {
		self.fetch(
			Endpoint::Thumbnail {
				board: board.into(),
				tim,
			}
			.url(),
		)
		.await
	}

	/// Query the mobile search endpoint
	pub async fn search(
		&self,
		query: &str,
		offset: Option<u64>,
		length: Option<u64>,
		board: Option<&str>,
	) -> Result<SearchResults> {
		let mut params = vec![("q", query.to_owned())];
		if let Some(offset) = offset {
			params.push(("o", offset.to_string()));
		}
		if let Some(length) = length {
			params.push(("l", length.to_string()));
		}
		if let Some(board) = board {
			params.push(("b", board.to_owned()));
		}
		let params: Vec<(&str, &str)> = params
			.iter()
			.map(|(k, v)| (*k, v.as_str()))
			.collect();
		self.get_with_params(&Endpoint::Search, &params).await
	}

	/// All posts of one thread, wrapped in their context
	pub async fn posts_in_thread(
		&self,
		board: &str,
		no: PostNumber,
	) -> Result<Vec<PostInContext>> {
		Ok(self
			.thread(board, no)
			.await?
			.posts
			.into_iter()
			.map(|post| PostInContext {
				board: board.into(),
				thread: no,
				post,
			})
			.collect())
	}

	/// All posts of one board. The dependent thread fetches are serialized
	/// one at a time to keep request pressure low.
	pub async fn posts_on_board(
		&self,
		board: &str,
	) -> Result<Vec<PostInContext>> {
		let mut out = Vec::new();
		for page in self.all_threads(board).await? {
			for op in page.threads {
				out.extend(self.posts_in_thread(board, op.no).await?);
			}
		}
		Ok(out)
	}

	/// All posts of all boards, fetched board by board
	pub async fn posts(&self) -> Result<Vec<PostInContext>> {
		let mut out = Vec::new();
		for board in self.boards().await?.boards {
			out.extend(self.posts_on_board(&board.board).await?);
		}
		Ok(out)
	}
}
