//! Record data for types without a native representation.

use crate::base::iana::Rtype;
use crate::base::wire::{Composer, Parser, WireError};
use crate::utils::base16;
use core::fmt;

//------------ Raw -----------------------------------------------------------

/// The data of a record type this crate does not model.
///
/// The RDATA octets are preserved verbatim, so any record survives a
/// decode and encode cycle unchanged. Presentation uses the generic form
/// of RFC 3597: `\# <length> <hex data>`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Raw {
    /// The type of the record.
    pub rtype: Rtype,

    /// The raw RDATA.
    pub data: Vec<u8>,
}

impl Raw {
    pub fn new(rtype: Rtype, data: Vec<u8>) -> Self {
        Raw { rtype, data }
    }

    pub fn parse(
        rtype: Rtype,
        parser: &mut Parser,
    ) -> Result<Self, WireError> {
        Ok(Raw {
            rtype,
            data: parser.parse_remaining().to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_slice(&self.data);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.data);
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        if !self.data.is_empty() {
            f.write_str(" ")?;
            base16::display(&self.data, f)?;
        }
        Ok(())
    }
}

//============ Test ==========================================================
