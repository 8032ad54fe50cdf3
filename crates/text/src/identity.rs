//! Opaque allocation handles.

use std::fmt;
use std::sync::Arc;

/// The address of a text value's backing allocation.
///
/// Exposed for tests and diagnostics only. Real logic compares content,
/// never addresses: an `Identity` says nothing about what the value holds,
/// only where it lives.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity(usize);

impl Identity {
	pub(crate) fn of(data: &Arc<str>) -> Self {
		Self(Arc::as_ptr(data) as *const u8 as usize)
	}
}

impl fmt::Debug for Identity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Identity({:#x})", self.0)
	}
}
