//! Records of the reverse engineered mobile search API.
//!
//! Undocumented and not guaranteed stable.

use super::Posts;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct SearchResults {
	pub body: Option<SearchResultsBody>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct SearchResultsBody {
	pub board: Option<String>,
	pub nhits: Option<u64>,

	/// Encodes a decimal integer
	pub offset: Option<String>,

	pub query: Option<String>,
	pub threads: Option<Vec<SearchResultsThread>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct SearchResultsThread {
	pub board: Option<String>,
	pub posts: Option<Posts>,

	/// "tNNNN" thread ID
	pub thread: String,
}

impl SearchResults {
	/// Copy with only the threads matching the filter retained
	pub fn filter(&self, f: impl Fn(&SearchResultsThread) -> bool) -> Self {
		Self {
			body: self.body.as_ref().map(|b| SearchResultsBody {
				threads: b
					.threads
					.as_ref()
					.map(|t| t.iter().filter(|t| f(t)).cloned().collect()),
				..b.clone()
			}),
		}
	}
}
