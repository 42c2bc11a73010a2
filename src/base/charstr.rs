//! Character strings.
//!
//! The `<character-string>` of RFC 1035 is up to 255 octets of arbitrary
//! data preceded by a one octet length. Unlike domain names, character
//! strings are never compressed, so the helpers here are plain functions
//! over the cursor without any contact with the label map.

use super::wire::{Composer, Parser, WireError};

/// Reads one character string from the parser.
pub fn parse_charstr<'a>(
    parser: &mut Parser<'a>,
) -> Result<&'a [u8], WireError> {
    let len = parser
        .parse_u8()
        .map_err(|_| WireError::InvalidLen)?;
    parser
        .parse_slice(usize::from(len))
        .map_err(|_| WireError::InvalidLen)
}

/// Appends one character string to the composer.
pub fn compose_charstr(
    composer: &mut Composer,
    data: &[u8],
) -> Result<(), WireError> {
    if data.len() > 255 {
        return Err(WireError::InvalidLen);
    }
    composer.append_u8(data.len() as u8);
    composer.append_slice(data);
    Ok(())
}

/// Appends one character string to a plain buffer.
///
/// Used by the canonical serialization path which writes into a `Vec`
/// rather than a composer.
pub fn compose_charstr_canonical(out: &mut Vec<u8>, data: &[u8]) {
    debug_assert!(data.len() <= 255);
    out.push(data.len() as u8);
    out.extend_from_slice(data);
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let mut c = Composer::new();
        compose_charstr(&mut c, b"hello").unwrap();
        let buf = c.finish();
        assert_eq!(buf, b"\x05hello");
        let mut p = Parser::new(&buf);
        assert_eq!(parse_charstr(&mut p).unwrap(), b"hello");
    }

    #[test]
    fn empty_string() {
        let mut c = Composer::new();
        compose_charstr(&mut c, b"").unwrap();
        let buf = c.finish();
        assert_eq!(buf, b"\x00");
        let mut p = Parser::new(&buf);
        assert_eq!(parse_charstr(&mut p).unwrap(), b"");
    }

    #[test]
    fn length_limits() {
        let mut c = Composer::new();
        assert!(compose_charstr(&mut c, &[0; 255]).is_ok());
        assert_eq!(
            compose_charstr(&mut c, &[0; 256]),
            Err(WireError::InvalidLen)
        );
    }

    #[test]
    fn truncated_input() {
        let mut p = Parser::new(b"\x05hel");
        assert_eq!(parse_charstr(&mut p), Err(WireError::InvalidLen));
    }
}
