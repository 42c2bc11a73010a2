//! Record data for the CAA record type of RFC 8659.

use super::{fmt_quoted, scan_quoted};
use crate::base::wire::{Composer, Parser, WireError};
use core::fmt;

//------------ Caa -----------------------------------------------------------

/// A certification authority authorization property.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Caa {
    /// The property flags; only the critical bit is currently defined.
    pub flags: u8,

    /// The property tag, e.g. `issue` or `iodef`.
    pub tag: Vec<u8>,

    /// The property value. Takes up the rest of the RDATA without a
    /// length prefix.
    pub value: Vec<u8>,
}

impl Caa {
    /// The issuer critical flag.
    pub const FLAG_CRITICAL: u8 = 0x80;

    /// Returns whether the critical flag is set.
    pub fn is_critical(&self) -> bool {
        self.flags & Self::FLAG_CRITICAL != 0
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        let flags = parser.parse_u8()?;
        let tag_len = parser.parse_u8()?;
        let tag = parser.parse_slice(usize::from(tag_len))?.to_vec();
        Ok(Caa {
            flags,
            tag,
            value: parser.parse_remaining().to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        if self.tag.len() > 255 {
            return Err(WireError::InvalidLen);
        }
        composer.append_u8(self.flags);
        composer.append_u8(self.tag.len() as u8);
        composer.append_slice(&self.tag);
        composer.append_slice(&self.value);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.push(self.flags);
        out.push(self.tag.len() as u8);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.value);
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        let mut fields = s.split_whitespace();
        let flags = fields
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or(WireError::Form("invalid CAA flags"))?;
        let tag = fields
            .next()
            .ok_or(WireError::Form("missing CAA tag"))?
            .as_bytes()
            .to_vec();
        if tag.len() > 255 {
            return Err(WireError::InvalidLen);
        }
        let quoted = s
            .find('"')
            .map(|at| &s[at..])
            .ok_or(WireError::Form("missing CAA value"))?;
        let (value, rest) = scan_quoted(quoted)?;
        if !rest.trim().is_empty() {
            return Err(WireError::Form("trailing data after CAA"));
        }
        Ok(Caa { flags, tag, value })
    }
}

impl fmt::Display for Caa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.flags)?;
        for &b in &self.tag {
            write!(f, "{}", b as char)?;
        }
        f.write_str(" ")?;
        fmt_quoted(f, &self.value)
    }
}

//============ Test ==========================================================
