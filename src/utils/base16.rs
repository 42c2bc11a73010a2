//! Decoding and encoding of base 16, that is, hex digits.
//!
//! DS digests, TLSA association data, SSHFP fingerprints, and NSEC3 salts
//! are presented in hex (RFC 4648, section 8). Formatting uses uppercase
//! digits; decoding accepts either case.

use super::DecodeError;
use core::fmt;

/// Decodes a string of hex digits.
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut res = Vec::with_capacity(s.len() / 2);
    let mut high: Option<u8> = None;
    for ch in s.chars() {
        if ch.is_ascii_whitespace() {
            continue;
        }
        let value = ch
            .to_digit(16)
            .ok_or(DecodeError::BadCharacter(ch))? as u8;
        match high.take() {
            Some(high_value) => res.push(high_value << 4 | value),
            None => high = Some(value),
        }
    }
    if high.is_some() {
        return Err(DecodeError::ShortInput);
    }
    Ok(res)
}

/// Writes data as uppercase hex digits into a format stream.
pub fn display(data: &[u8], f: &mut impl fmt::Write) -> fmt::Result {
    for b in data {
        write!(f, "{:02X}", b)?;
    }
    Ok(())
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_both_cases() {
        assert_eq!(decode("dead").unwrap(), b"\xDE\xAD");
        assert_eq!(decode("DEAD").unwrap(), b"\xDE\xAD");
        assert_eq!(decode("").unwrap(), b"");
    }

    #[test]
    fn decode_errors() {
        assert_eq!(decode("xy"), Err(DecodeError::BadCharacter('x')));
        assert_eq!(decode("abc"), Err(DecodeError::ShortInput));
    }

    #[test]
    fn display_uppercase() {
        let mut s = String::new();
        display(b"\xDE\xAD\xBE\xEF", &mut s).unwrap();
        assert_eq!(s, "DEADBEEF");
    }
}
