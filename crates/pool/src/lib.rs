//! Process-lifetime intern pool: a canonicalizing registry mapping content
//! to one shared [`Text`] identity.
//!
//! The pool models the two interning paths of a managed runtime:
//!
//! - load-time literal resolution ([`InternPool::with_literals`] seeds the
//!   table; [`InternPool::literal`] resolves assignments through it)
//! - explicit registration of runtime-built values
//!   ([`InternPool::register`])
//!
//! Entries live for the life of the pool and are never evicted. The pool is
//! passed by reference to whoever needs it rather than hidden behind a
//! global.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use strand_text::Text;
use tracing::{debug, trace};

/// Canonicalizing content → identity registry.
///
/// Internally synchronized, so a shared reference suffices for every
/// operation. Access is read-mostly: after the literal table is seeded,
/// only [`register`](InternPool::register) and first-time
/// [`literal`](InternPool::literal) resolutions take the write lock.
#[derive(Default)]
pub struct InternPool {
	entries: RwLock<FxHashMap<Box<str>, Text>>,
}

impl InternPool {
	/// An empty pool.
	pub fn new() -> Self {
		Self::default()
	}

	/// A pool preloaded with a program's literal table.
	///
	/// Models load-time literal resolution: every literal is interned
	/// before any other code runs, so equal-content literals resolve to
	/// one shared identity from their first use.
	pub fn with_literals<'a, I>(literals: I) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let pool = Self::new();
		{
			let mut entries = pool.entries.write();
			for lit in literals {
				entries
					.entry(Box::from(lit))
					.or_insert_with(|| Text::from_runtime(lit.to_owned()));
			}
		}
		debug!(entries = pool.len(), "literal table loaded");
		pool
	}

	/// Resolves a literal assignment through the pool.
	///
	/// Returns the canonical value for `content`, interning it on first
	/// resolution. Two literal assignments of equal content are always
	/// identity-equal.
	pub fn literal(&self, content: &str) -> Text {
		if let Some(hit) = self.lookup(content) {
			return hit;
		}
		self.insert(Text::from_runtime(content.to_owned()))
	}

	/// The canonical value for `content`, or `None` if never interned.
	///
	/// Two hits for equal content are identity-equal to each other, even
	/// when the values the caller derived that content from are not.
	pub fn query(&self, content: &str) -> Option<Text> {
		let hit = self.lookup(content);
		trace!(content, hit = hit.is_some(), "pool query");
		hit
	}

	/// Explicitly interns a runtime-built value.
	///
	/// Idempotent: when the content is already present, the existing
	/// canonical value is returned and no duplicate entry is created.
	/// When absent, `value` itself becomes the canonical entry, so the
	/// returned handle is identity-equal to `value`.
	pub fn register(&self, value: &Text) -> Text {
		self.insert(value.clone())
	}

	/// Number of interned entries.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	fn lookup(&self, content: &str) -> Option<Text> {
		self.entries.read().get(content).cloned()
	}

	// Re-checks under the write lock so a racing insert of the same
	// content still yields a single canonical entry.
	fn insert(&self, value: Text) -> Text {
		let mut entries = self.entries.write();
		if let Some(existing) = entries.get(value.as_str()) {
			return existing.clone();
		}
		debug!(content = value.as_str(), "interned");
		entries.insert(Box::from(value.as_str()), value.clone());
		value
	}
}
