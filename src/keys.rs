//! Ethereum address validation.

/// Check if a given string is a valid Ethereum address: "0x" + 40 hex digits.
pub fn is_valid_eth_address(address: &str) -> bool {
    let hex = match address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
    {
        Some(rest) => rest,
        None => return false,
    };
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
