//! Serialized data model of the read-only JSON API

pub mod post_body;
pub mod search;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type PostNumber = u64;
pub type BoardName = String;
pub type PageNumber = u32;
pub type ImageNumber = u64;

/// Post numbers of a board's archived threads
pub type Archive = Vec<PostNumber>;

/// All pages of a board's catalog
pub type Catalog = Vec<Page>;

pub type Posts = Vec<Post>;
pub type Pages = Vec<Page>;
pub type ChanThreads = Vec<ChanThread>;

/// One board of the site
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Board {
	pub board: BoardName,
	pub title: String,

	/// Worksafe board
	pub ws_board: u8,

	pub per_page: u32,
	pub pages: u32,
	pub max_filesize: u64,
	pub max_webm_filesize: u64,
	pub max_comment_chars: u32,
	pub max_webm_duration: u32,
	pub bump_limit: u32,
	pub image_limit: u32,
	pub cooldowns: Cooldowns,
	pub meta_description: String,

	/// Are spoilers enabled
	pub spoilers: Option<u8>,

	/// How many custom spoilers the board has
	pub custom_spoilers: Option<u8>,

	pub is_archived: Option<u8>,

	/// Maps flag code to flag name
	pub board_flags: Option<HashMap<String, String>>,

	/// Are flags showing the poster's country enabled on the board
	pub country_flags: Option<u8>,

	/// Are poster ID tags enabled on the board
	pub user_ids: Option<u8>,

	/// Can users submit drawings via the browser drawing app
	pub oekaki: Option<u8>,

	/// Can users submit sjis drawings using the [sjis] tags
	pub sjis_tags: Option<u8>,

	/// Board supports code syntax highlighting using the [code] tags
	pub code_tags: Option<u8>,

	/// Board supports [math] TeX and [eqn] tags
	pub math_tags: Option<u8>,

	/// Is image posting disabled for the board
	pub text_only: Option<u8>,

	/// Is the name field disabled on the board
	pub forced_anon: Option<u8>,

	/// Are webms with audio allowed
	pub webm_audio: Option<u8>,

	/// Do OPs require a subject
	pub require_subject: Option<u8>,

	/// Minimum image width in pixels
	pub min_image_width: Option<u32>,

	/// Minimum image height in pixels
	pub min_image_height: Option<u32>,
}

/// Posting cooldowns in seconds
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Cooldowns {
	pub threads: u32,
	pub replies: u32,
	pub images: u32,
}

/// Payload of the board index endpoint
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Boards {
	pub boards: Vec<Board>,
}

/// One page of a board's thread index
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Page {
	pub page: PageNumber,
	pub threads: Posts,
}

/// A message from a user.
///
/// Everything but the post number is optional on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Post {
	/// Post number
	pub no: PostNumber,

	/// Post number replied to
	pub resto: Option<PostNumber>,

	/// Stickied thread
	pub sticky: Option<u8>,

	/// Closed thread
	pub closed: Option<u8>,

	/// Archived thread
	pub archived: Option<u8>,

	/// Time when archived. Unix timestamp.
	pub archived_on: Option<u64>,

	/// Date and time in the site's display format
	pub now: Option<String>,

	/// User name
	pub name: Option<String>,

	/// Tripcode
	pub trip: Option<String>,

	/// The poster's ID. Any 8 characters.
	#[serde(rename = "id")]
	pub pid: Option<String>,

	/// Capcode
	pub capcode: Option<String>,

	/// Country code. 2 characters ISO 3166-1 alpha-2.
	pub country: Option<String>,

	/// Country name
	pub country_name: Option<String>,

	/// Poster's board flag code
	pub board_flag: Option<String>,

	/// Poster's board flag name
	pub flag_name: Option<String>,

	/// Subject
	pub sub: Option<String>,

	/// Comment. Includes escaped HTML; feed it to [crate::body::parse].
	pub com: Option<String>,

	/// Renamed filename for fetching the image. Based on a unix timestamp
	/// plus milliseconds.
	pub tim: Option<ImageNumber>,

	/// Original filename
	pub filename: Option<String>,

	/// File extension. .jpg, .png, .gif, .pdf, .swf, .webm
	pub ext: Option<String>,

	/// File size
	pub fsize: Option<u64>,

	/// File MD5
	pub md5: Option<String>,

	/// Image width
	pub w: Option<u32>,

	/// Image height
	pub h: Option<u32>,

	/// Thumbnail width
	pub tn_w: Option<u32>,

	/// Thumbnail height
	pub tn_h: Option<u32>,

	/// File deleted
	pub filedeleted: Option<u8>,

	/// Spoiler image
	pub spoiler: Option<u8>,

	/// Custom spoiler 1-99
	pub custom_spoiler: Option<u8>,

	/// Omitted posts
	pub omitted_posts: Option<u32>,

	/// Omitted images
	pub omitted_images: Option<u32>,

	/// Unix timestamp
	pub time: Option<u64>,

	/// Thread URL slug
	pub semantic_url: Option<String>,

	/// Number of unique IPs in thread
	pub unique_ips: Option<u32>,

	pub replies: Option<u32>,
	pub images: Option<u32>,

	/// Bump limit met
	pub bumplimit: Option<u8>,

	/// Image limit met
	pub imagelimit: Option<u8>,

	#[serde(rename = "lastReplies")]
	pub last_replies: Option<ChanThreads>,

	/// Time when last modified. Unix timestamp.
	pub last_modified: Option<u64>,

	/// Thread tag. Only set on the flash board.
	pub tag: Option<String>,

	/// Year the poster's pass was bought
	pub since4pass: Option<u32>,

	/// Mobile optimized image exists for post
	pub m_img: Option<u8>,
}

impl Post {
	/// Filter predicate for posts with a reasonably sized image attached
	pub fn has_reasonable_sized_image(&self) -> bool {
		self.tim.is_some()
			&& self.w.unwrap_or(0) >= 32
			&& self.h.unwrap_or(0) >= 32
	}
}

/// One thread as a list of posts, OP first
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct ChanThread {
	pub posts: Posts,
}

impl ChanThread {
	/// The thread is identified by its OP's post number
	pub fn id(&self) -> PostNumber {
		self.posts.first().map(|p| p.no).unwrap_or(0)
	}

	/// Copy with only the posts matching the filter retained
	pub fn filter_posts(&self, f: &impl Fn(&Post) -> bool) -> Self {
		Self {
			posts: self.posts.iter().filter(|p| f(p)).cloned().collect(),
		}
	}
}

impl Page {
	/// Copy with only the threads matching the filter retained
	pub fn filter_threads(&self, f: &impl Fn(&Post) -> bool) -> Self {
		Self {
			page: self.page,
			threads: self.threads.iter().filter(|p| f(p)).cloned().collect(),
		}
	}
}

/// Copy of a catalog with only the threads matching the filter retained
pub fn filter_catalog(catalog: &Catalog, f: impl Fn(&Post) -> bool) -> Catalog {
	catalog.iter().map(|page| page.filter_threads(&f)).collect()
}

/// Payload of the single page thread index endpoint
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Threads {
	pub threads: ChanThreads,
}
