//! Resource records.

use super::iana::Class;
use super::name::Name;
use super::wire::{Composer, Parser, WireError};
use crate::rdata::RData;
use core::fmt;

//------------ Record --------------------------------------------------------

/// A resource record.
///
/// A record binds typed data to an owner name, class, and time to live.
/// The record type is not stored separately: it is a property of the
/// [`RData`] value, which keeps the two from disagreeing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The name owning the record.
    pub owner: Name,

    /// The class of the record.
    pub class: Class,

    /// The time this record may be cached, in seconds.
    pub ttl: u32,

    /// The data of the record.
    pub data: RData,
}

impl Record {
    /// Creates a new record in the Internet class.
    pub fn new(owner: Name, ttl: u32, data: RData) -> Self {
        Record {
            owner,
            class: Class::IN,
            ttl,
            data,
        }
    }

    /// Reads a record off the parser.
    ///
    /// The RDATA is handed to the record-data dispatch as a sub-parser
    /// bounded to the length declared by the RDLENGTH field. The declared
    /// length must match what the data type consumes exactly.
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        let owner = parser.parse_name()?;
        let rtype = parser.parse_u16()?.into();
        let class = Class::from_int(parser.parse_u16()?);
        let ttl = parser.parse_u32()?;
        let rdlen = parser.parse_u16()?;
        let mut rdata = parser.sub_parser(usize::from(rdlen))?;
        let data = RData::parse(rtype, &mut rdata)?;
        if rdata.remaining() != 0 {
            return Err(WireError::InvalidLen);
        }
        Ok(Record {
            owner,
            class,
            ttl,
            data,
        })
    }

    /// Appends the record to the composer.
    ///
    /// The RDLENGTH field is written as a placeholder and back-patched
    /// with the measured length of the data, since compression makes the
    /// length unknowable up front.
    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_name(&self.owner);
        composer.append_u16(self.data.rtype().to_int());
        composer.append_u16(self.class.to_int());
        composer.append_u32(self.ttl);
        let lenpos = composer.len();
        composer.append_u16(0);
        self.data.compose(composer)?;
        let rdlen = composer.len() - lenpos - 2;
        if rdlen > usize::from(u16::MAX) {
            return Err(WireError::InvalidLen);
        }
        composer.patch_u16(lenpos, rdlen as u16);
        Ok(())
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.owner,
            self.ttl,
            self.class,
            self.data.rtype(),
            self.data
        )
    }
}

//============ Test ==========================================================
