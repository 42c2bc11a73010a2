//! Record data for the NAPTR record type of RFC 3403.

use super::fmt_quoted;
use crate::base::charstr::{
    compose_charstr, compose_charstr_canonical, parse_charstr,
};
use crate::base::name::Name;
use crate::base::wire::{Composer, Parser, WireError};
use core::fmt;

//------------ Naptr ---------------------------------------------------------

/// A naming authority pointer.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Naptr {
    /// The order in which records must be processed.
    pub order: u16,

    /// The preference among records of equal order.
    pub preference: u16,

    /// Flags controlling rewriting and interpretation.
    pub flags: Vec<u8>,

    /// The service parameters available down this rewrite path.
    pub services: Vec<u8>,

    /// The substitution expression applied to the original string.
    pub regexp: Vec<u8>,

    /// The replacement name to query next.
    pub replacement: Name,
}

impl Naptr {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Naptr {
            order: parser.parse_u16()?,
            preference: parser.parse_u16()?,
            flags: parse_charstr(parser)?.to_vec(),
            services: parse_charstr(parser)?.to_vec(),
            regexp: parse_charstr(parser)?.to_vec(),
            replacement: parser.parse_name()?,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u16(self.order);
        composer.append_u16(self.preference);
        compose_charstr(composer, &self.flags)?;
        compose_charstr(composer, &self.services)?;
        compose_charstr(composer, &self.regexp)?;
        composer.append_name_uncompressed(&self.replacement);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.order.to_be_bytes());
        out.extend_from_slice(&self.preference.to_be_bytes());
        compose_charstr_canonical(out, &self.flags);
        compose_charstr_canonical(out, &self.services);
        compose_charstr_canonical(out, &self.regexp);
        self.replacement.compose_canonical(out);
    }
}

impl fmt::Display for Naptr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} ", self.order, self.preference)?;
        fmt_quoted(f, &self.flags)?;
        f.write_str(" ")?;
        fmt_quoted(f, &self.services)?;
        f.write_str(" ")?;
        fmt_quoted(f, &self.regexp)?;
        write!(f, " {}", self.replacement)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Naptr {
        Naptr {
            order: 100,
            preference: 50,
            flags: b"s".to_vec(),
            services: b"SIP+D2U".to_vec(),
            regexp: Vec::new(),
            replacement: "_sip._udp.example.com.".parse().unwrap(),
        }
    }

    #[test]
    fn round_trip() {
        let naptr = sample();
        let mut c = Composer::new();
        naptr.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Naptr::parse(&mut p).unwrap(), naptr);
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "100 50 \"s\" \"SIP+D2U\" \"\" _sip._udp.example.com."
        );
    }

    #[test]
    fn truncated_charstr() {
        let mut p = Parser::new(b"\x00\x64\x00\x32\x05s");
        assert_eq!(Naptr::parse(&mut p), Err(WireError::InvalidLen));
    }
}
