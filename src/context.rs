//! Helpers for processing a post in the context of its board and thread

use crate::endpoints::Endpoint;
use crate::payloads::{BoardName, Post, PostNumber};
use url::Url;

/// A board name, thread number and post.
///
/// Not part of the wire API, but most post processing needs all three.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PostInContext {
	pub board: BoardName,
	pub thread: PostNumber,
	pub post: Post,
}

impl PostInContext {
	/// Full size image endpoint, if the post has a renderable image
	/// attached
	pub fn image(&self) -> Option<Endpoint> {
		match (self.post.tim, &self.post.ext) {
			(Some(tim), Some(ext)) if is_renderable_image_ext(ext) => {
				Some(Endpoint::Image {
					board: self.board.clone(),
					tim,
					ext: ext.clone(),
				})
			}
			_ => None,
		}
	}

	/// Thumbnail endpoint, if the post has any file attached
	pub fn thumbnail(&self) -> Option<Endpoint> {
		self.post.tim.map(|tim| Endpoint::Thumbnail {
			board: self.board.clone(),
			tim,
		})
	}

	/// A renderable image endpoint. Falls back to the thumbnail for file
	/// types that don't decode into a bitmap, like webm and swf.
	pub fn renderable_image(&self) -> Option<Endpoint> {
		match &self.post.ext {
			Some(ext) if is_renderable_image_ext(ext) => self.image(),
			_ => self.thumbnail(),
		}
	}

	pub fn renderable_image_url(&self) -> Option<Url> {
		self.renderable_image().map(|e| e.url())
	}

	/// Full image dimensions in pixels
	pub fn image_size(&self) -> Option<(u32, u32)> {
		match (self.post.w, self.post.h) {
			(Some(w), Some(h)) => Some((w, h)),
			_ => None,
		}
	}

	/// Thumbnail dimensions in pixels
	pub fn thumbnail_size(&self) -> Option<(u32, u32)> {
		match (self.post.tn_w, self.post.tn_h) {
			(Some(w), Some(h)) => Some((w, h)),
			_ => None,
		}
	}

	/// Dimensions of whatever [Self::renderable_image] resolves to
	pub fn renderable_image_size(&self) -> Option<(u32, u32)> {
		match &self.post.ext {
			Some(ext) if is_renderable_image_ext(ext) => self.image_size(),
			_ => self.thumbnail_size(),
		}
	}
}

/// File types that decode into a bitmap on all clients
pub fn is_renderable_image_ext(ext: &str) -> bool {
	matches!(ext, ".gif" | ".jpg" | ".png")
}
