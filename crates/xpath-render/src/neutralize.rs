//! Default-namespace neutralization.
//!
//! A document with a default namespace puts every unprefixed element in
//! that namespace, and unqualified expressions like `//item` then match
//! nothing. Turning the first `xmlns=` into `Xmlns=` demotes the
//! declaration to an ordinary attribute.
//!
//! Only the first occurrence anywhere in the bytes is touched. Prefixed
//! declarations, later declarations and attribute syntax are ignored, and
//! an `xmlns=` inside text or a comment is rewritten just the same.

use memchr::memmem;

/// Token that gets rewritten
pub const NAMESPACE_TOKEN: &[u8] = b"xmlns=";

/// Replacement for the token's first byte
pub const PLACEHOLDER: u8 = b'X';

/// Rewrite the first `xmlns=` in place.
///
/// Returns the offset of the rewritten token, or `None` if there was none.
/// The buffer length never changes.
pub fn neutralize(bytes: &mut [u8]) -> Option<usize> {
    let offset = memmem::find(bytes, NAMESPACE_TOKEN)?;
    bytes[offset] = PLACEHOLDER;
    Some(offset)
}
