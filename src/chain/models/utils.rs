use alloy::primitives::Address;
use std::str::FromStr;

/// Helper function to render an Address in its EIP-55 checksummed form
pub fn address_to_string(address: &Address) -> String {
    address.to_checksum(None)
}

/// Parse a wallet address supplied by a client.
///
/// The input must carry the `0x` prefix followed by exactly 40 hex digits.
/// Mixed-case input must match its EIP-55 checksum; all-lowercase and
/// all-uppercase digits are accepted as-is.
pub fn parse_wallet_address(input: &str) -> Option<Address> {
    let digits = input.strip_prefix("0x")?;
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let address = Address::from_str(input).ok()?;

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(None) != input {
        return None;
    }

    Some(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER: &str = "0x32d146ff24e2aae2a266a872f86474c9595c0c4f";

    #[test]
    fn test_accepts_single_case_addresses() {
        assert!(parse_wallet_address(LOWER).is_some());

        let upper = format!("0x{}", LOWER[2..].to_uppercase());
        assert_eq!(parse_wallet_address(&upper), parse_wallet_address(LOWER));
    }

    #[test]
    fn test_accepts_valid_checksum() {
        let checksummed = address_to_string(&Address::from_str(LOWER).unwrap());
        assert_eq!(
            parse_wallet_address(&checksummed),
            Some(Address::from_str(LOWER).unwrap())
        );
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let checksummed = address_to_string(&Address::from_str(LOWER).unwrap());
        // Flip the case of the first letter digit to break the checksum.
        let (idx, c) = checksummed[2..]
            .char_indices()
            .find(|(_, c)| c.is_ascii_alphabetic())
            .unwrap();
        let flipped = if c.is_ascii_uppercase() {
            c.to_ascii_lowercase()
        } else {
            c.to_ascii_uppercase()
        };
        let mut broken = checksummed.clone();
        broken.replace_range(idx + 2..idx + 3, &flipped.to_string());

        assert!(parse_wallet_address(&broken).is_none());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(parse_wallet_address("").is_none());
        assert!(parse_wallet_address("0x").is_none());
        // missing prefix
        assert!(parse_wallet_address(&LOWER[2..]).is_none());
        assert!(parse_wallet_address(&format!("1x{}", &LOWER[2..])).is_none());
        // wrong length
        assert!(parse_wallet_address(&LOWER[..41]).is_none());
        assert!(parse_wallet_address(&format!("{}00", LOWER)).is_none());
        // non-hex
        assert!(parse_wallet_address(&format!("0x{}zz", &LOWER[2..40])).is_none());
        assert!(parse_wallet_address(" 0x32d146ff24e2aae2a266a872f86474c9595c0c4f").is_none());
    }
}
