//! Record data for the TSIG and TKEY meta record types.
//!
//! TSIG (RFC 8945) authenticates a single transaction with a shared
//! secret; TKEY (RFC 2930) negotiates such secrets. Both are meta records
//! that only ever appear in the additional section of a message in
//! flight. This crate provides the wire codec for them; computing or
//! checking the MAC belongs to the transport layer and is out of scope.

use crate::base::name::Name;
use crate::base::wire::{Composer, Parser, WireError};
use crate::utils::base16;
use core::fmt;

/// TSIG/TKEY error code: the MAC did not verify.
pub const TSIG_BADSIG: u16 = 16;
/// TSIG/TKEY error code: the key was not recognized.
pub const TSIG_BADKEY: u16 = 17;
/// TSIG/TKEY error code: the signed time was outside the allowed window.
pub const TSIG_BADTIME: u16 = 18;
/// TKEY error code: the mode is not supported.
pub const TKEY_BADMODE: u16 = 19;
/// TKEY error code: the key name is not usable.
pub const TKEY_BADNAME: u16 = 20;
/// TKEY error code: the algorithm is not supported.
pub const TKEY_BADALG: u16 = 21;
/// TSIG error code: the MAC was unacceptably truncated.
pub const TSIG_BADTRUNC: u16 = 22;

//------------ Tsig ----------------------------------------------------------

/// A transaction signature.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tsig {
    /// The name of the HMAC algorithm, e.g. `hmac-sha256.`.
    pub algorithm: Name,

    /// Seconds since the Unix epoch when the message was signed.
    ///
    /// The wire field is 48 bits wide; the upper 16 bits of this value
    /// are not representable and must be zero.
    pub time_signed: u64,

    /// The permitted clock error, in seconds.
    pub fudge: u16,

    /// The message authentication code.
    pub mac: Vec<u8>,

    /// The message ID of the original request.
    pub original_id: u16,

    /// The TSIG error code of a response.
    pub error: u16,

    /// Additional data; carries the server time on BADTIME errors.
    pub other: Vec<u8>,
}

impl Tsig {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        let algorithm = parser.parse_name()?;
        let time_high = parser.parse_u16()?;
        let time_low = parser.parse_u32()?;
        let fudge = parser.parse_u16()?;
        let mac_len = parser.parse_u16()?;
        let mac = parser.parse_slice(usize::from(mac_len))?.to_vec();
        let original_id = parser.parse_u16()?;
        let error = parser.parse_u16()?;
        let other_len = parser.parse_u16()?;
        let other = parser.parse_slice(usize::from(other_len))?.to_vec();
        Ok(Tsig {
            algorithm,
            time_signed: u64::from(time_high) << 32 | u64::from(time_low),
            fudge,
            mac,
            original_id,
            error,
            other,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        if self.mac.len() > usize::from(u16::MAX)
            || self.other.len() > usize::from(u16::MAX)
            || self.time_signed >> 48 != 0
        {
            return Err(WireError::InvalidLen);
        }
        composer.append_name_uncompressed(&self.algorithm);
        composer.append_u16((self.time_signed >> 32) as u16);
        composer.append_u32(self.time_signed as u32);
        composer.append_u16(self.fudge);
        composer.append_u16(self.mac.len() as u16);
        composer.append_slice(&self.mac);
        composer.append_u16(self.original_id);
        composer.append_u16(self.error);
        composer.append_u16(self.other.len() as u16);
        composer.append_slice(&self.other);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        self.algorithm.compose_canonical(out);
        out.extend_from_slice(&((self.time_signed >> 32) as u16).to_be_bytes());
        out.extend_from_slice(&(self.time_signed as u32).to_be_bytes());
        out.extend_from_slice(&self.fudge.to_be_bytes());
        out.extend_from_slice(&(self.mac.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.mac);
        out.extend_from_slice(&self.original_id.to_be_bytes());
        out.extend_from_slice(&self.error.to_be_bytes());
        out.extend_from_slice(&(self.other.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.other);
    }
}

impl fmt::Display for Tsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.algorithm, self.time_signed, self.fudge
        )?;
        base16::display(&self.mac, f)?;
        write!(f, " {} {}", self.original_id, self.error)
    }
}

//------------ Tkey ----------------------------------------------------------

/// Key negotiation data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tkey {
    /// The name of the negotiated algorithm.
    pub algorithm: Name,

    /// Start of the key's validity, seconds since the Unix epoch.
    pub inception: u32,

    /// End of the key's validity, seconds since the Unix epoch.
    pub expiration: u32,

    /// The key agreement mode.
    pub mode: u16,

    /// The TKEY error code of a response.
    pub error: u16,

    /// The key exchange data.
    pub key: Vec<u8>,

    /// Additional data, unused by the defined modes.
    pub other: Vec<u8>,
}

impl Tkey {
    /// Mode: the server assigns the key.
    pub const MODE_SERVER_ASSIGNMENT: u16 = 1;
    /// Mode: Diffie-Hellman exchange.
    pub const MODE_DIFFIE_HELLMAN: u16 = 2;
    /// Mode: GSS-API negotiation.
    pub const MODE_GSSAPI: u16 = 3;
    /// Mode: the resolver assigns the key.
    pub const MODE_RESOLVER_ASSIGNMENT: u16 = 4;
    /// Mode: the key is to be deleted.
    pub const MODE_KEY_DELETION: u16 = 5;

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        let algorithm = parser.parse_name()?;
        let inception = parser.parse_u32()?;
        let expiration = parser.parse_u32()?;
        let mode = parser.parse_u16()?;
        let error = parser.parse_u16()?;
        let key_len = parser.parse_u16()?;
        let key = parser.parse_slice(usize::from(key_len))?.to_vec();
        let other_len = parser.parse_u16()?;
        let other = parser.parse_slice(usize::from(other_len))?.to_vec();
        Ok(Tkey {
            algorithm,
            inception,
            expiration,
            mode,
            error,
            key,
            other,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        if self.key.len() > usize::from(u16::MAX)
            || self.other.len() > usize::from(u16::MAX)
        {
            return Err(WireError::InvalidLen);
        }
        composer.append_name_uncompressed(&self.algorithm);
        composer.append_u32(self.inception);
        composer.append_u32(self.expiration);
        composer.append_u16(self.mode);
        composer.append_u16(self.error);
        composer.append_u16(self.key.len() as u16);
        composer.append_slice(&self.key);
        composer.append_u16(self.other.len() as u16);
        composer.append_slice(&self.other);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        self.algorithm.compose_canonical(out);
        out.extend_from_slice(&self.inception.to_be_bytes());
        out.extend_from_slice(&self.expiration.to_be_bytes());
        out.extend_from_slice(&self.mode.to_be_bytes());
        out.extend_from_slice(&self.error.to_be_bytes());
        out.extend_from_slice(&(self.key.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.key);
        out.extend_from_slice(&(self.other.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.other);
    }
}

impl fmt::Display for Tkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.algorithm,
            self.inception,
            self.expiration,
            self.mode,
            self.error
        )
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tsig_round_trip() {
        let tsig = Tsig {
            algorithm: "hmac-sha256.".parse().unwrap(),
            time_signed: 1_700_000_000,
            fudge: 300,
            mac: vec![0xAA; 32],
            original_id: 4711,
            error: 0,
            other: Vec::new(),
        };
        let mut c = Composer::new();
        tsig.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Tsig::parse(&mut p).unwrap(), tsig);
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn tsig_badtime_other_data() {
        let tsig = Tsig {
            algorithm: "hmac-sha256.".parse().unwrap(),
            time_signed: 1_700_000_000,
            fudge: 300,
            mac: vec![0xAA; 32],
            original_id: 4711,
            error: TSIG_BADTIME,
            other: vec![0, 0, 99, 99, 99, 99],
        };
        let mut c = Composer::new();
        tsig.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Tsig::parse(&mut p).unwrap(), tsig);
    }

    #[test]
    fn tsig_rejects_wide_time() {
        let tsig = Tsig {
            algorithm: "hmac-sha256.".parse().unwrap(),
            time_signed: 1 << 48,
            fudge: 300,
            mac: Vec::new(),
            original_id: 0,
            error: 0,
            other: Vec::new(),
        };
        let mut c = Composer::new();
        assert_eq!(tsig.compose(&mut c), Err(WireError::InvalidLen));
    }

    #[test]
    fn tkey_round_trip() {
        let tkey = Tkey {
            algorithm: "gss-tsig.".parse().unwrap(),
            inception: 1_700_000_000,
            expiration: 1_700_086_400,
            mode: Tkey::MODE_GSSAPI,
            error: 0,
            key: vec![1, 2, 3, 4],
            other: Vec::new(),
        };
        let mut c = Composer::new();
        tkey.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Tkey::parse(&mut p).unwrap(), tkey);
    }

    #[test]
    fn tkey_truncated_key() {
        let mut c = Composer::new();
        c.append_name_uncompressed(&"gss-tsig.".parse().unwrap());
        c.append_u32(0);
        c.append_u32(0);
        c.append_u16(3);
        c.append_u16(0);
        c.append_u16(10);
        c.append_slice(b"short");
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Tkey::parse(&mut p), Err(WireError::ShortInput));
    }
}
