//! # Shared Utility Functions
//!
//! Address helpers used by the wallet-connect front-end.
//!
//! ## Address Formatting
//!
//! Functions for formatting hex wallet addresses for display:
//! - [`format_address`] - Keep the `0x` marker plus the first N and last M hex digits
//! - [`truncate_address`] - [`format_address`] with 4/4 digits
//! - [`is_hex_address`] - Check for a `0x`-prefixed 20-byte hex address
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
//! assert_eq!(format_address(address, 4, 4), "0x5aAe...eAed");
//! ```

const HEX_PREFIX: &str = "0x";
const ADDRESS_HEX_DIGITS: usize = 40;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len`
/// digits. A leading `0x` is kept and not counted as part of the prefix.
///
/// If the digits are too few to shorten, the address is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(format_address(addr, 4, 4), "0x5aAe...eAed");
/// assert_eq!(format_address(addr, 6, 2), "0x5aAeb6...ed");
/// assert_eq!(format_address("0xabc", 4, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (marker, digits) = match address.strip_prefix(HEX_PREFIX) {
        Some(rest) => (HEX_PREFIX, rest),
        None => ("", address),
    };

    let chars: Vec<char> = digits.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let head: String = chars[..prefix_len].iter().collect();
    let tail: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}{}...{}", marker, head, tail)
}

/// Format a wallet address with 4 leading and 4 trailing digits.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(
///     truncate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
///     "0x5aAe...eAed"
/// );
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// `true` for `0x` followed by exactly 40 hex digits (any case).
pub fn is_hex_address(address: &str) -> bool {
    match address.strip_prefix(HEX_PREFIX) {
        Some(digits) => {
            digits.len() == ADDRESS_HEX_DIGITS && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
