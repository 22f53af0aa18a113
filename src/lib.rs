//! Read-only client for an imageboard JSON API and a parser for the
//! quasi-HTML post bodies it serves.

pub mod boards;
pub mod body;
pub mod cache;
pub mod client;
pub mod context;
pub mod endpoints;
pub mod payloads;

pub use body::parse;
pub use client::{ApiError, Client};
pub use payloads::post_body::Element;
