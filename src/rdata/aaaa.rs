//! Record data for the AAAA record type of RFC 3596.

use crate::base::wire::{Composer, Parser, WireError};
use core::fmt;
use std::net::Ipv6Addr;

//------------ Aaaa ----------------------------------------------------------

/// An IPv6 host address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Aaaa {
    /// The address.
    pub addr: Ipv6Addr,
}

impl Aaaa {
    /// Creates record data for the given address.
    pub fn new(addr: Ipv6Addr) -> Self {
        Aaaa { addr }
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        if parser.remaining() != 16 {
            return Err(WireError::InvalidLen);
        }
        let octets = parser.parse_slice(16)?;
        let mut addr = [0u8; 16];
        addr.copy_from_slice(octets);
        Ok(Aaaa::new(addr.into()))
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_slice(&self.addr.octets());
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.addr.octets());
    }

    /// Parses any textual address form of RFC 5952.
    pub fn from_str(s: &str) -> Result<Self, WireError> {
        s.parse()
            .map(Aaaa::new)
            .map_err(|_| WireError::Form("invalid IPv6 address"))
    }
}

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let aaaa = Aaaa::from_str("2001:db8::1").unwrap();
        let mut c = Composer::new();
        aaaa.compose(&mut c).unwrap();
        let buf = c.finish();
        assert_eq!(buf.len(), 16);
        let mut p = Parser::new(&buf);
        assert_eq!(Aaaa::parse(&mut p).unwrap(), aaaa);
        assert_eq!(aaaa.to_string(), "2001:db8::1");
    }

    #[test]
    fn rejects_bad_length() {
        let mut p = Parser::new(&[0; 4]);
        assert_eq!(Aaaa::parse(&mut p), Err(WireError::InvalidLen));
    }

    #[test]
    fn from_str_rejects_ipv4() {
        assert!(Aaaa::from_str("192.0.2.1").is_err());
    }
}
