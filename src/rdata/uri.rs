//! Record data for the URI record type of RFC 7553.

use super::{fmt_quoted, scan_quoted};
use crate::base::wire::{Composer, Parser, WireError};
use core::fmt;

//------------ Uri -----------------------------------------------------------

/// A mapping from a name to a URI.
///
/// Unlike most record data carrying text, the target is not a character
/// string: it occupies the entire remainder of the RDATA without a length
/// prefix.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Uri {
    /// The priority of this target; lower values are tried first.
    pub priority: u16,

    /// The weight for load balancing between targets of equal priority.
    pub weight: u16,

    /// The target URI.
    pub target: Vec<u8>,
}

impl Uri {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Uri {
            priority: parser.parse_u16()?,
            weight: parser.parse_u16()?,
            target: parser.parse_remaining().to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u16(self.priority);
        composer.append_u16(self.weight);
        composer.append_slice(&self.target);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.priority.to_be_bytes());
        out.extend_from_slice(&self.weight.to_be_bytes());
        out.extend_from_slice(&self.target);
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        let mut fields = s.split_whitespace();
        let mut int = || {
            fields
                .next()
                .and_then(|v| v.parse().ok())
                .ok_or(WireError::Form("invalid URI integer"))
        };
        let priority = int()?;
        let weight = int()?;
        let quoted = s
            .find('"')
            .map(|at| &s[at..])
            .ok_or(WireError::Form("missing URI target"))?;
        let (target, rest) = scan_quoted(quoted)?;
        if !rest.trim().is_empty() {
            return Err(WireError::Form("trailing data after URI"));
        }
        Ok(Uri {
            priority,
            weight,
            target,
        })
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} ", self.priority, self.weight)?;
        fmt_quoted(f, &self.target)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let uri =
            Uri::from_str("10 1 \"https://www.example.com/\"").unwrap();
        assert_eq!(uri.priority, 10);
        assert_eq!(uri.target, b"https://www.example.com/");
        let mut c = Composer::new();
        uri.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Uri::parse(&mut p).unwrap(), uri);
        assert_eq!(
            uri.to_string(),
            "10 1 \"https://www.example.com/\""
        );
    }

    #[test]
    fn from_str_requires_quotes() {
        assert!(Uri::from_str("10 1 https://example.com/").is_err());
    }
}
