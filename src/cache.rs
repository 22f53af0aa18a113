//! Bounded cache of fetched resources

use bytes::Bytes;
use indexmap::IndexMap;

/// Default capacity of the client's byte cache
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Fixed capacity insertion ordered byte cache keyed by resource URL.
///
/// Inserting a new key at capacity evicts the oldest entry. Replacing an
/// existing key evicts nothing.
#[derive(Debug, Clone)]
pub struct ByteCache {
	capacity: usize,
	entries: IndexMap<String, Bytes>,
}

impl Default for ByteCache {
	fn default() -> Self {
		Self::new(DEFAULT_CACHE_CAPACITY)
	}
}

impl ByteCache {
	pub fn new(capacity: usize) -> Self {
		Self {
			capacity,
			entries: IndexMap::with_capacity(capacity),
		}
	}

	pub fn get(&self, key: &str) -> Option<Bytes> {
		self.entries.get(key).cloned()
	}

	/// Insert a fetched resource, evicting the oldest entry on overflow
	pub fn insert(&mut self, key: String, val: Bytes) {
		if !self.entries.contains_key(&key)
			&& self.entries.len() >= self.capacity
		{
			self.entries.shift_remove_index(0);
		}
		self.entries.insert(key, val);
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
