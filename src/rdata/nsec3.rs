//! Record data for the NSEC3 record types of RFC 5155.

use super::dnssec::RtypeBitmap;
use crate::base::iana::Nsec3HashAlg;
use crate::base::wire::{Composer, Parser, WireError};
use crate::utils::{base16, base32};
use core::fmt;

//------------ Nsec3 ---------------------------------------------------------

/// Hashed authenticated denial of existence.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Nsec3 {
    /// The algorithm used to hash owner names.
    pub hash_algorithm: Nsec3HashAlg,

    /// The flags; only the opt-out bit is defined.
    pub flags: u8,

    /// The number of additional hash iterations.
    pub iterations: u16,

    /// The salt mixed into each hash iteration. At most 255 octets.
    pub salt: Vec<u8>,

    /// The hashed next owner name in hash order. At most 255 octets.
    pub next_owner: Vec<u8>,

    /// The types present at the original owner name.
    pub types: RtypeBitmap,
}

impl Nsec3 {
    /// The opt-out flag: unsigned delegations may exist in the span.
    pub const FLAG_OPT_OUT: u8 = 0x01;

    /// Returns whether the opt-out flag is set.
    pub fn is_opt_out(&self) -> bool {
        self.flags & Self::FLAG_OPT_OUT != 0
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        let hash_algorithm = Nsec3HashAlg::from_int(parser.parse_u8()?);
        let flags = parser.parse_u8()?;
        let iterations = parser.parse_u16()?;
        let salt_len = parser.parse_u8()?;
        let salt = parser.parse_slice(usize::from(salt_len))?.to_vec();
        let hash_len = parser.parse_u8()?;
        let next_owner = parser.parse_slice(usize::from(hash_len))?.to_vec();
        Ok(Nsec3 {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types: RtypeBitmap::parse(parser)?,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        if self.salt.len() > 255 || self.next_owner.len() > 255 {
            return Err(WireError::InvalidLen);
        }
        composer.append_u8(self.hash_algorithm.to_int());
        composer.append_u8(self.flags);
        composer.append_u16(self.iterations);
        composer.append_u8(self.salt.len() as u8);
        composer.append_slice(&self.salt);
        composer.append_u8(self.next_owner.len() as u8);
        composer.append_slice(&self.next_owner);
        composer.append_slice(self.types.as_slice());
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.push(self.hash_algorithm.to_int());
        out.push(self.flags);
        out.extend_from_slice(&self.iterations.to_be_bytes());
        out.push(self.salt.len() as u8);
        out.extend_from_slice(&self.salt);
        out.push(self.next_owner.len() as u8);
        out.extend_from_slice(&self.next_owner);
        out.extend_from_slice(self.types.as_slice());
    }
}

impl fmt::Display for Nsec3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.hash_algorithm.to_int(),
            self.flags,
            self.iterations
        )?;
        fmt_salt(f, &self.salt)?;
        f.write_str(" ")?;
        base32::display_hex(&self.next_owner, f)?;
        write!(f, " {}", self.types)
    }
}

//------------ Nsec3param ----------------------------------------------------

/// The NSEC3 parameters of a zone.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Nsec3param {
    /// The algorithm used to hash owner names.
    pub hash_algorithm: Nsec3HashAlg,

    /// The flags. All defined NSEC3 flags are zero here.
    pub flags: u8,

    /// The number of additional hash iterations.
    pub iterations: u16,

    /// The salt mixed into each hash iteration. At most 255 octets.
    pub salt: Vec<u8>,
}

impl Nsec3param {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        let hash_algorithm = Nsec3HashAlg::from_int(parser.parse_u8()?);
        let flags = parser.parse_u8()?;
        let iterations = parser.parse_u16()?;
        let salt_len = parser.parse_u8()?;
        let salt = parser.parse_slice(usize::from(salt_len))?.to_vec();
        Ok(Nsec3param {
            hash_algorithm,
            flags,
            iterations,
            salt,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        if self.salt.len() > 255 {
            return Err(WireError::InvalidLen);
        }
        composer.append_u8(self.hash_algorithm.to_int());
        composer.append_u8(self.flags);
        composer.append_u16(self.iterations);
        composer.append_u8(self.salt.len() as u8);
        composer.append_slice(&self.salt);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.push(self.hash_algorithm.to_int());
        out.push(self.flags);
        out.extend_from_slice(&self.iterations.to_be_bytes());
        out.push(self.salt.len() as u8);
        out.extend_from_slice(&self.salt);
    }
}

impl fmt::Display for Nsec3param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.hash_algorithm.to_int(),
            self.flags,
            self.iterations
        )?;
        fmt_salt(f, &self.salt)
    }
}

/// Formats a salt, with `-` standing for the empty salt.
fn fmt_salt(f: &mut fmt::Formatter, salt: &[u8]) -> fmt::Result {
    if salt.is_empty() {
        f.write_str("-")
    } else {
        base16::display(salt, f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;

    fn sample() -> Nsec3 {
        Nsec3 {
            hash_algorithm: Nsec3HashAlg::SHA1,
            flags: 1,
            iterations: 12,
            salt: vec![0xAA, 0xBB, 0xCC, 0xDD],
            next_owner: Vec::new(),
            types: RtypeBitmap::from_types(&[Rtype::A, Rtype::RRSIG]),
        }
    }

    #[test]
    fn round_trip() {
        let mut nsec3 = sample();
        nsec3.next_owner = vec![0x1A; 20];
        let mut c = Composer::new();
        nsec3.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Nsec3::parse(&mut p).unwrap(), nsec3);
    }

    #[test]
    fn opt_out() {
        let mut nsec3 = sample();
        nsec3.next_owner = vec![1; 20];
        assert!(nsec3.is_opt_out());
        nsec3.flags = 0;
        assert!(!nsec3.is_opt_out());
    }

    #[test]
    fn truncated_salt() {
        let mut p = Parser::new(b"\x01\x00\x00\x0C\x08\xAA\xBB");
        assert_eq!(Nsec3::parse(&mut p), Err(WireError::ShortInput));
    }

    #[test]
    fn nsec3param_round_trip_and_display() {
        let param = Nsec3param {
            hash_algorithm: Nsec3HashAlg::SHA1,
            flags: 0,
            iterations: 10,
            salt: vec![0xBE, 0xEF],
        };
        let mut c = Composer::new();
        param.compose(&mut c).unwrap();
        let buf = c.finish();
        assert_eq!(buf, b"\x01\x00\x00\x0A\x02\xBE\xEF");
        let mut p = Parser::new(&buf);
        assert_eq!(Nsec3param::parse(&mut p).unwrap(), param);
        assert_eq!(param.to_string(), "1 0 10 BEEF");

        let empty = Nsec3param {
            salt: Vec::new(),
            ..param
        };
        assert_eq!(empty.to_string(), "1 0 10 -");
    }
}
