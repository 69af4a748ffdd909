//! Display formatting for `0x`-prefixed account addresses.
//!
//! ERROR HANDLING
//! ==============
//! An empty address renders as an empty string. Anything else that is not
//! `0x` followed by 40 hex digits is rejected so callers can choose how to
//! render the failure instead of showing a mangled link.

#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;

/// Total length of a well-formed address, including the `0x` prefix.
pub const ADDRESS_LEN: usize = 42;

const HEX_PREFIX: &str = "0x";
const BODY_LEN: usize = ADDRESS_LEN - HEX_PREFIX.len();

/// Default number of body characters kept on each side of the ellipsis.
pub const DEFAULT_PREFIX_LEN: usize = 4;
pub const DEFAULT_SUFFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("invalid address: missing 0x prefix")]
    InvalidAddressFormat,
    #[error("invalid address length: expected 42, got {0}")]
    InvalidAddressLength(usize),
    #[error("invalid address: body is not hexadecimal")]
    InvalidAddressCharacters,
}

/// Shorten an address to `0x1234...5678` using the default window.
///
/// # Errors
///
/// See [`truncate_address_with`].
pub fn truncate_address(address: &str) -> Result<String, AddressError> {
    truncate_address_with(address, DEFAULT_PREFIX_LEN, DEFAULT_SUFFIX_LEN)
}

/// Shorten an address keeping `prefix_len` body characters after `0x` and
/// the last `suffix_len` characters. Both lengths are clamped to the body.
///
/// # Errors
///
/// Returns [`AddressError`] when a non-empty address is missing the `0x`
/// prefix, is not exactly [`ADDRESS_LEN`] characters, or has a non-hex body.
pub fn truncate_address_with(
    address: &str,
    prefix_len: usize,
    suffix_len: usize,
) -> Result<String, AddressError> {
    if address.is_empty() {
        return Ok(String::new());
    }
    validate_address(address)?;

    // Validated addresses are pure ASCII, so byte slicing is char-safe.
    let head = &address[..HEX_PREFIX.len() + prefix_len.min(BODY_LEN)];
    let tail = &address[ADDRESS_LEN - suffix_len.min(BODY_LEN)..];
    Ok(format!("{head}...{tail}"))
}

/// Check that `address` is `0x` followed by 40 hex digits.
///
/// # Errors
///
/// Returns the first [`AddressError`] the address violates, checked in
/// prefix, length, character order.
pub fn validate_address(address: &str) -> Result<(), AddressError> {
    let Some(body) = address.strip_prefix(HEX_PREFIX) else {
        return Err(AddressError::InvalidAddressFormat);
    };
    let len = address.chars().count();
    if len != ADDRESS_LEN {
        return Err(AddressError::InvalidAddressLength(len));
    }
    hex::decode(body).map_err(|_| AddressError::InvalidAddressCharacters)?;
    Ok(())
}
