//! Record data for the SSHFP record type of RFC 4255.

use crate::base::wire::{Composer, Parser, WireError};
use crate::utils::base16;
use core::fmt;

//------------ Sshfp ---------------------------------------------------------

/// An SSH host key fingerprint.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sshfp {
    /// The public key algorithm of the host key.
    pub algorithm: u8,

    /// The fingerprint type, i.e., the hash used.
    pub fingerprint_type: u8,

    /// The fingerprint of the host key.
    pub fingerprint: Vec<u8>,
}

impl Sshfp {
    /// Host key algorithm: RSA.
    pub const ALG_RSA: u8 = 1;
    /// Host key algorithm: DSA.
    pub const ALG_DSA: u8 = 2;
    /// Host key algorithm: ECDSA.
    pub const ALG_ECDSA: u8 = 3;
    /// Host key algorithm: Ed25519.
    pub const ALG_ED25519: u8 = 4;
    /// Host key algorithm: Ed448.
    pub const ALG_ED448: u8 = 6;

    /// Fingerprint type: SHA-1.
    pub const FP_SHA1: u8 = 1;
    /// Fingerprint type: SHA-256.
    pub const FP_SHA256: u8 = 2;

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Sshfp {
            algorithm: parser.parse_u8()?,
            fingerprint_type: parser.parse_u8()?,
            fingerprint: parser.parse_remaining().to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u8(self.algorithm);
        composer.append_u8(self.fingerprint_type);
        composer.append_slice(&self.fingerprint);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.push(self.algorithm);
        out.push(self.fingerprint_type);
        out.extend_from_slice(&self.fingerprint);
    }
}

impl fmt::Display for Sshfp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} ", self.algorithm, self.fingerprint_type)?;
        base16::display(&self.fingerprint, f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let sshfp = Sshfp {
            algorithm: Sshfp::ALG_ED25519,
            fingerprint_type: Sshfp::FP_SHA256,
            fingerprint: vec![0x12; 32],
        };
        let mut c = Composer::new();
        sshfp.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Sshfp::parse(&mut p).unwrap(), sshfp);
    }

    #[test]
    fn display() {
        let sshfp = Sshfp {
            algorithm: 4,
            fingerprint_type: 2,
            fingerprint: vec![0xBE, 0xEF],
        };
        assert_eq!(sshfp.to_string(), "4 2 BEEF");
    }
}
