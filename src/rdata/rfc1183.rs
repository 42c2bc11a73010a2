//! Record data for the RP and AFSDB record types of RFC 1183.

use crate::base::name::Name;
use crate::base::wire::{Composer, Parser, WireError};
use core::fmt;

//------------ Rp ------------------------------------------------------------

/// The person responsible for a domain.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Rp {
    /// The mailbox of the responsible person, encoded as a name.
    pub mbox: Name,

    /// A name owning TXT records with further information.
    pub txt: Name,
}

impl Rp {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Rp {
            mbox: parser.parse_name()?,
            txt: parser.parse_name()?,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_name_uncompressed(&self.mbox);
        composer.append_name_uncompressed(&self.txt);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        self.mbox.compose_canonical(out);
        self.txt.compose_canonical(out);
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        let mut fields = s.split_whitespace();
        let mbox = fields
            .next()
            .ok_or(WireError::Form("missing RP mailbox"))?
            .parse()?;
        let txt = fields
            .next()
            .ok_or(WireError::Form("missing RP TXT name"))?
            .parse()?;
        Ok(Rp { mbox, txt })
    }
}

impl fmt::Display for Rp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.mbox, self.txt)
    }
}

//------------ Afsdb ---------------------------------------------------------

/// The location of an AFS cell database server.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Afsdb {
    /// The subtype: 1 for AFS, 2 for DCE/NCA.
    pub subtype: u16,

    /// The server host.
    pub hostname: Name,
}

impl Afsdb {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Afsdb {
            subtype: parser.parse_u16()?,
            hostname: parser.parse_name()?,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u16(self.subtype);
        composer.append_name_uncompressed(&self.hostname);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.subtype.to_be_bytes());
        self.hostname.compose_canonical(out);
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        let mut fields = s.split_whitespace();
        let subtype = fields
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or(WireError::Form("invalid AFSDB subtype"))?;
        let hostname = fields
            .next()
            .ok_or(WireError::Form("missing AFSDB hostname"))?
            .parse()?;
        Ok(Afsdb { subtype, hostname })
    }
}

impl fmt::Display for Afsdb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.subtype, self.hostname)
    }
}

//============ Test ==========================================================
