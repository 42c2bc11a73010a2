//! Record data for the SRV record type of RFC 2782.

use crate::base::name::Name;
use crate::base::wire::{Composer, Parser, WireError};
use core::fmt;

//------------ Srv -----------------------------------------------------------

/// The location of a server for a service.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Srv {
    /// The priority of this target; lower values are tried first.
    pub priority: u16,

    /// The weight for load balancing between targets of equal priority.
    pub weight: u16,

    /// The port of the service on the target host.
    pub port: u16,

    /// The target host.
    pub target: Name,
}

impl Srv {
    pub fn new(priority: u16, weight: u16, port: u16, target: Name) -> Self {
        Srv {
            priority,
            weight,
            port,
            target,
        }
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Srv {
            priority: parser.parse_u16()?,
            weight: parser.parse_u16()?,
            port: parser.parse_u16()?,
            target: parser.parse_name()?,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u16(self.priority);
        composer.append_u16(self.weight);
        composer.append_u16(self.port);
        composer.append_name_uncompressed(&self.target);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.priority.to_be_bytes());
        out.extend_from_slice(&self.weight.to_be_bytes());
        out.extend_from_slice(&self.port.to_be_bytes());
        self.target.compose_canonical(out);
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        let mut fields = s.split_whitespace();
        let mut int = || {
            fields
                .next()
                .and_then(|v| v.parse().ok())
                .ok_or(WireError::Form("invalid SRV integer"))
        };
        let priority = int()?;
        let weight = int()?;
        let port = int()?;
        let target = s
            .split_whitespace()
            .nth(3)
            .ok_or(WireError::Form("missing SRV target"))?
            .parse()?;
        Ok(Srv {
            priority,
            weight,
            port,
            target,
        })
    }
}

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let srv = Srv::from_str("10 60 5060 sip.example.com.").unwrap();
        assert_eq!(srv.port, 5060);
        let mut c = Composer::new();
        srv.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Srv::parse(&mut p).unwrap(), srv);
        assert_eq!(srv.to_string(), "10 60 5060 sip.example.com.");
    }

    #[test]
    fn target_is_not_compressed() {
        let mut c = Composer::new();
        c.append_name(&"sip.example.com.".parse().unwrap());
        let srv = Srv::new(
            0,
            0,
            5060,
            "sip.example.com.".parse().unwrap(),
        );
        let before = c.len();
        srv.compose(&mut c).unwrap();
        // Six octets of integers plus the full 17 octet name.
        assert_eq!(c.len() - before, 6 + 17);
    }

    #[test]
    fn truncated_input() {
        let mut p = Parser::new(b"\x00\x0A\x00");
        assert_eq!(Srv::parse(&mut p), Err(WireError::ShortInput));
    }
}
