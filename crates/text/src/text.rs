//! The immutable text value type.

use std::fmt;
use std::sync::Arc;

use crate::identity::Identity;

/// An immutable text value: shared content plus an observable identity.
///
/// Cloning copies the handle, so clones are identity-equal to the original,
/// the way reference assignment works in a managed runtime. Every
/// content-producing operation ([`concat`](Text::concat),
/// [`replace_char`](Text::replace_char), [`truncated`](Text::truncated))
/// allocates fresh backing storage and leaves the receiver untouched.
///
/// `==` compares content only; use [`Text::same_identity`] for allocation
/// identity.
#[derive(Clone)]
pub struct Text {
	data: Arc<str>,
}

impl Text {
	/// Wraps a runtime-built string in a fresh allocation.
	///
	/// The result never shares identity with any existing value, interned
	/// or otherwise.
	pub fn from_runtime(content: String) -> Self {
		Self { data: Arc::from(content) }
	}

	/// The content as a string slice.
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.data
	}

	/// Length in characters. Embedded NUL characters count like any other.
	pub fn len(&self) -> usize {
		self.data.chars().count()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Whether two values share the same backing allocation.
	///
	/// This is reference identity, not content equality: equal content held
	/// in two allocations compares `false` here.
	#[inline]
	pub fn same_identity(a: &Text, b: &Text) -> bool {
		Arc::ptr_eq(&a.data, &b.data)
	}

	/// Opaque handle to the backing allocation, for tests and diagnostics.
	pub fn identity(&self) -> Identity {
		Identity::of(&self.data)
	}

	/// Returns a new value with `other` appended.
	///
	/// The receiver keeps its content and identity; the result has a fresh
	/// allocation even when `other` is empty.
	pub fn concat(&self, other: &str) -> Text {
		let mut content = String::with_capacity(self.data.len() + other.len());
		content.push_str(&self.data);
		content.push_str(other);
		Text::from_runtime(content)
	}

	/// Returns a new value with every `from` character replaced by `to`.
	pub fn replace_char(&self, from: char, to: char) -> Text {
		Text::from_runtime(self.data.replace(from, &to.to_string()))
	}

	/// Returns a new value keeping only the first `at` characters.
	pub fn truncated(&self, at: usize) -> Text {
		Text::from_runtime(self.data.chars().take(at).collect())
	}

	/// Copies the content into an independent character vector.
	///
	/// Mutating the vector cannot affect this value.
	pub fn chars_vec(&self) -> Vec<char> {
		self.data.chars().collect()
	}
}

impl PartialEq for Text {
	fn eq(&self, other: &Self) -> bool {
		self.data == other.data
	}
}

impl Eq for Text {}

impl fmt::Display for Text {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.data)
	}
}

impl fmt::Debug for Text {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Text")
			.field("content", &&*self.data)
			.field("identity", &self.identity())
			.finish()
	}
}
