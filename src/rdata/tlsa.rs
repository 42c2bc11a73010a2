//! Record data for the TLSA record type of RFC 6698.

use crate::base::wire::{Composer, Parser, WireError};
use crate::utils::base16;
use core::fmt;

//------------ Tlsa ----------------------------------------------------------

/// A TLSA certificate association for DANE.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tlsa {
    /// How the certificate association constrains the TLS certificate.
    pub cert_usage: u8,

    /// Which part of the certificate is matched.
    pub selector: u8,

    /// How the association data is derived from the selected content.
    pub matching_type: u8,

    /// The certificate association data.
    pub cert_data: Vec<u8>,
}

impl Tlsa {
    /// Certificate usage: CA constraint (PKIX-TA).
    pub const USAGE_CA_CONSTRAINT: u8 = 0;
    /// Certificate usage: service certificate constraint (PKIX-EE).
    pub const USAGE_SERVICE_CERT: u8 = 1;
    /// Certificate usage: trust anchor assertion (DANE-TA).
    pub const USAGE_TRUST_ANCHOR: u8 = 2;
    /// Certificate usage: domain issued certificate (DANE-EE).
    pub const USAGE_DOMAIN_ISSUED: u8 = 3;

    /// Selector: the full certificate.
    pub const SELECTOR_FULL_CERT: u8 = 0;
    /// Selector: the SubjectPublicKeyInfo.
    pub const SELECTOR_SPKI: u8 = 1;

    /// Matching type: exact content.
    pub const MATCH_FULL: u8 = 0;
    /// Matching type: SHA-256 hash of the content.
    pub const MATCH_SHA256: u8 = 1;
    /// Matching type: SHA-512 hash of the content.
    pub const MATCH_SHA512: u8 = 2;

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Tlsa {
            cert_usage: parser.parse_u8()?,
            selector: parser.parse_u8()?,
            matching_type: parser.parse_u8()?,
            cert_data: parser.parse_remaining().to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u8(self.cert_usage);
        composer.append_u8(self.selector);
        composer.append_u8(self.matching_type);
        composer.append_slice(&self.cert_data);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.push(self.cert_usage);
        out.push(self.selector);
        out.push(self.matching_type);
        out.extend_from_slice(&self.cert_data);
    }
}

impl fmt::Display for Tlsa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.cert_usage, self.selector, self.matching_type
        )?;
        base16::display(&self.cert_data, f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let tlsa = Tlsa {
            cert_usage: Tlsa::USAGE_DOMAIN_ISSUED,
            selector: Tlsa::SELECTOR_SPKI,
            matching_type: Tlsa::MATCH_SHA256,
            cert_data: vec![0xAB; 32],
        };
        let mut c = Composer::new();
        tlsa.compose(&mut c).unwrap();
        let buf = c.finish();
        assert_eq!(buf.len(), 35);
        let mut p = Parser::new(&buf);
        assert_eq!(Tlsa::parse(&mut p).unwrap(), tlsa);
    }

    #[test]
    fn display() {
        let tlsa = Tlsa {
            cert_usage: 3,
            selector: 1,
            matching_type: 1,
            cert_data: vec![0xDE, 0xAD],
        };
        assert_eq!(tlsa.to_string(), "3 1 1 DEAD");
    }

    #[test]
    fn rejects_short_input() {
        let mut p = Parser::new(b"\x03\x01");
        assert_eq!(Tlsa::parse(&mut p), Err(WireError::ShortInput));
    }
}
