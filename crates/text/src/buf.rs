//! Growable character buffers.

use crate::text::Text;

/// A mutable, growable character buffer, distinct from immutable [`Text`].
///
/// Appends happen in place; [`to_text`](TextBuf::to_text) mints a freshly
/// allocated value each time it is called.
#[derive(Debug, Default, Clone)]
pub struct TextBuf {
	inner: String,
}

impl TextBuf {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a single character in place.
	pub fn push(&mut self, ch: char) {
		self.inner.push(ch);
	}

	/// Appends a string slice in place.
	pub fn push_str(&mut self, s: &str) {
		self.inner.push_str(s);
	}

	/// Length in characters.
	pub fn len(&self) -> usize {
		self.inner.chars().count()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.inner
	}

	/// Converts the buffer into a freshly allocated [`Text`].
	///
	/// Every call allocates: two calls on an unchanged buffer produce equal
	/// content with distinct identities. The result is never interned
	/// automatically.
	pub fn to_text(&self) -> Text {
		Text::from_runtime(self.inner.clone())
	}
}

impl From<&str> for TextBuf {
	fn from(s: &str) -> Self {
		Self { inner: s.to_owned() }
	}
}
