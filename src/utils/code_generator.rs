//! Short code generation utilities.
//!
//! Codes are 7 characters drawn uniformly from an alphabet without the
//! look-alike characters `0 O o 1 l I i`, which keeps them readable when
//! printed or typed by hand.

use rand::Rng;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 7;

/// Characters a generated code may contain.
pub const ALPHABET: &[u8] = b"23456789abcdefghjkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Longest code accepted from the outside (admin CLI, stored rows).
const MAX_CODE_LENGTH: usize = 16;

/// Path segments that sit next to `/{code}` in the router.
///
/// A generated code equal to one of these would be shadowed by the static
/// route, so the allocator treats it as a collision. With the current
/// [`ALPHABET`] and [`CODE_LENGTH`] none of them can be generated; the check
/// guards against a future change of either, and against generators swapped in
/// with [`crate::application::services::LinkService::with_generator`].
pub const RESERVED_CODES: &[&str] = &["shorten", "stats", "urls", "health"];

/// Generates a random short code.
///
/// Uses the thread-local RNG. Uniqueness is not guaranteed here; the caller
/// checks the store.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` collides with a static route segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Cheap shape check for codes coming from outside the allocator.
///
/// Accepts the URL-safe characters older codes may contain, not only the
/// generator alphabet.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
