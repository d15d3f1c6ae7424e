//! IPv4 input validation.

use std::net::Ipv4Addr;

/// Checks whether a string is a syntactically valid IPv4 dotted quad.
///
/// Valid iff the string parses as four octets in `[0, 255]` with no extra
/// characters. The standard library parser is strict: it rejects leading
/// zeros, whitespace, trailing garbage, and octal/hex forms.
///
/// # Arguments
///
/// * `text` - The candidate IP address string
///
/// # Returns
///
/// `true` if the string is a valid IPv4 address, `false` otherwise.
pub fn is_valid_ipv4(text: &str) -> bool {
    text.parse::<Ipv4Addr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::is_valid_ipv4;

    #[test]
    fn test_valid_addresses() {
        assert!(is_valid_ipv4("8.8.8.8"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(is_valid_ipv4("192.168.1.1"));
    }

    #[test]
    fn test_octet_out_of_range() {
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.1.1.300"));
        assert!(!is_valid_ipv4("999.999.999.999"));
    }

    #[test]
    fn test_empty_and_garbage() {
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4("abc"));
        assert!(!is_valid_ipv4("8.8.8"));
        assert!(!is_valid_ipv4("8.8.8.8.8"));
    }

    #[test]
    fn test_whitespace_is_rejected() {
        // Callers are expected to trim before validating; the validator
        // itself accepts the exact dotted quad only
        assert!(!is_valid_ipv4(" 8.8.8.8"));
        assert!(!is_valid_ipv4("8.8.8.8 "));
        assert!(!is_valid_ipv4("8.8.8.8\n"));
    }

    #[test]
    fn test_ipv6_is_rejected() {
        assert!(!is_valid_ipv4("::1"));
        assert!(!is_valid_ipv4("2001:db8::1"));
    }

    #[test]
    fn test_leading_zeros_rejected() {
        // std's parser rejects leading zeros to avoid octal ambiguity
        assert!(!is_valid_ipv4("08.8.8.8"));
        assert!(!is_valid_ipv4("8.8.8.008"));
    }
}
