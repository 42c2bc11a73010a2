//! Record data for the CERT record type of RFC 4398.

use crate::base::iana::SecAlg;
use crate::base::wire::{Composer, Parser, WireError};
use crate::utils::base64;
use core::fmt;

//------------ Cert ----------------------------------------------------------

/// A certificate or certificate revocation list.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cert {
    /// The kind of certificate stored in the record.
    pub cert_type: u16,

    /// The key tag of the key inside the certificate.
    pub key_tag: u16,

    /// The algorithm of the key inside the certificate.
    pub algorithm: SecAlg,

    /// The certificate data.
    pub certificate: Vec<u8>,
}

impl Cert {
    /// Certificate type: an X.509 certificate (PKIX).
    pub const TYPE_PKIX: u16 = 1;
    /// Certificate type: an SPKI certificate.
    pub const TYPE_SPKI: u16 = 2;
    /// Certificate type: an OpenPGP packet.
    pub const TYPE_PGP: u16 = 3;
    /// Certificate type: the URL of an X.509 certificate.
    pub const TYPE_IPKIX: u16 = 4;
    /// Certificate type: the URL of an SPKI certificate.
    pub const TYPE_ISPKI: u16 = 5;
    /// Certificate type: fingerprint and URL of an OpenPGP packet.
    pub const TYPE_IPGP: u16 = 6;
    /// Certificate type: an attribute certificate.
    pub const TYPE_ACPKIX: u16 = 7;
    /// Certificate type: the URL of an attribute certificate.
    pub const TYPE_IACPKIX: u16 = 8;
    /// Certificate type: a URI private type.
    pub const TYPE_URI: u16 = 253;
    /// Certificate type: an OID private type.
    pub const TYPE_OID: u16 = 254;

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Cert {
            cert_type: parser.parse_u16()?,
            key_tag: parser.parse_u16()?,
            algorithm: SecAlg::from_int(parser.parse_u8()?),
            certificate: parser.parse_remaining().to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u16(self.cert_type);
        composer.append_u16(self.key_tag);
        composer.append_u8(self.algorithm.to_int());
        composer.append_slice(&self.certificate);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.cert_type.to_be_bytes());
        out.extend_from_slice(&self.key_tag.to_be_bytes());
        out.push(self.algorithm.to_int());
        out.extend_from_slice(&self.certificate);
    }
}

impl fmt::Display for Cert {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.cert_type,
            self.key_tag,
            self.algorithm.to_int()
        )?;
        base64::display(&self.certificate, f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let cert = Cert {
            cert_type: Cert::TYPE_PKIX,
            key_tag: 12345,
            algorithm: SecAlg::RSASHA256,
            certificate: vec![1, 2, 3, 4, 5],
        };
        let mut c = Composer::new();
        cert.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Cert::parse(&mut p).unwrap(), cert);
    }

    #[test]
    fn rejects_short_input() {
        let mut p = Parser::new(b"\x00\x01\x30");
        assert_eq!(Cert::parse(&mut p), Err(WireError::ShortInput));
    }
}
