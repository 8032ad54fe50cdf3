//! Immutable text values with observable identity.
//!
//! A [`Text`] pairs *content* (the character sequence) with *identity* (the
//! backing allocation). Two values can hold equal content in distinct
//! allocations; [`Text::same_identity`] tells them apart where `==` cannot.
//! [`TextBuf`] is the mutable counterpart: a growable buffer that mints a
//! freshly allocated `Text` on every conversion.

/// Growable character buffers.
pub mod buf;
/// Opaque allocation handles.
pub mod identity;
/// The immutable text value type.
pub mod text;

pub use buf::TextBuf;
pub use identity::Identity;
pub use text::Text;
