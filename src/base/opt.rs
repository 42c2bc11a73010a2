//! EDNS and the OPT pseudo record.
//!
//! EDNS (RFC 6891) smuggles extra signalling into a DNS message through a
//! pseudo record of type OPT in the additional section, reusing the class
//! field for the requestor's UDP payload size and the TTL field for an
//! extended RCODE, a version number, and flag bits.
//!
//! This crate does not keep the OPT record in the additional section.
//! When a message is decoded, the record's fields are lifted into an
//! [`Edns`] value attached to the message, and on encode an OPT record is
//! synthesized at the wire boundary. Code inspecting a decoded message
//! therefore never sees OPT among the records.

use super::iana::Rtype;
use super::wire::{Composer, Parser, WireError};
use core::fmt;

//------------ EdnsOption ----------------------------------------------------

/// A single EDNS option: a code and opaque data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdnsOption {
    /// The option code.
    pub code: u16,

    /// The option data.
    pub data: Vec<u8>,
}

impl fmt::Display for EdnsOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OPT(code={})", self.code)
    }
}

//------------ Opt -----------------------------------------------------------

/// The record data of an OPT record.
///
/// An ordered sequence of options. This type only appears transiently:
/// the message decoder converts it into [`Edns`] right away.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Opt {
    /// The options in wire order.
    pub options: Vec<EdnsOption>,
}

impl Opt {
    /// Reads OPT record data off the parser.
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        let mut options = Vec::new();
        while parser.remaining() > 0 {
            let code = parser.parse_u16()?;
            let len = parser.parse_u16()?;
            let data = parser.parse_slice(usize::from(len))?.to_vec();
            options.push(EdnsOption { code, data });
        }
        Ok(Opt { options })
    }

    /// Appends the options to the composer.
    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        compose_options(&self.options, composer)
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for option in &self.options {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            option.fmt(f)?;
        }
        Ok(())
    }
}

//------------ Edns ----------------------------------------------------------

/// The EDNS attributes of a message.
///
/// The TTL word of the OPT record is kept verbatim so that any flag bits
/// defined in the future remain accessible through [`ttl`][Self::ttl];
/// the accessors below decode the parts RFC 6891 assigns.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Edns {
    /// The maximum UDP payload size the requestor can handle.
    pub udp_payload_size: u16,

    /// The raw TTL word of the OPT record.
    ttl: u32,

    /// The options carried in the OPT RDATA.
    pub options: Vec<EdnsOption>,
}

impl Edns {
    /// Creates an EDNS value announcing the given UDP payload size.
    ///
    /// Version and all flag bits start out zero.
    pub fn new(udp_payload_size: u16) -> Self {
        Edns {
            udp_payload_size,
            ttl: 0,
            options: Vec::new(),
        }
    }

    /// Assembles the EDNS attributes from a decoded OPT record.
    pub fn from_opt_record(class: u16, ttl: u32, opt: Opt) -> Self {
        Edns {
            udp_payload_size: class,
            ttl,
            options: opt.options,
        }
    }

    /// Returns the raw TTL word of the OPT record.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the upper eight bits of the extended RCODE.
    ///
    /// Combine with the four bits from the message header to form the
    /// full twelve bit response code.
    pub fn rcode_high(&self) -> u8 {
        (self.ttl >> 24) as u8
    }

    /// Sets the upper eight bits of the extended RCODE.
    pub fn set_rcode_high(&mut self, value: u8) {
        self.ttl = (self.ttl & 0x00FF_FFFF) | (u32::from(value) << 24);
    }

    /// Returns the EDNS version.
    pub fn version(&self) -> u8 {
        (self.ttl >> 16) as u8
    }

    /// Sets the EDNS version.
    pub fn set_version(&mut self, value: u8) {
        self.ttl = (self.ttl & 0xFF00_FFFF) | (u32::from(value) << 16);
    }

    /// Returns the DO bit, i.e., whether DNSSEC records are requested.
    pub fn dnssec_ok(&self) -> bool {
        self.ttl & 0x8000 != 0
    }

    /// Sets the DO bit.
    pub fn set_dnssec_ok(&mut self, set: bool) {
        if set {
            self.ttl |= 0x8000;
        } else {
            self.ttl &= !0x8000;
        }
    }

    /// Appends the synthesized OPT record to the composer.
    ///
    /// The owner is the root name and the record never takes part in
    /// compression.
    pub fn compose_opt_record(
        &self,
        composer: &mut Composer,
    ) -> Result<(), WireError> {
        composer.append_u8(0);
        composer.append_u16(Rtype::OPT.to_int());
        composer.append_u16(self.udp_payload_size);
        composer.append_u32(self.ttl);
        let lenpos = composer.len();
        composer.append_u16(0);
        compose_options(&self.options, composer)?;
        let rdlen = composer.len() - lenpos - 2;
        if rdlen > usize::from(u16::MAX) {
            return Err(WireError::InvalidLen);
        }
        composer.patch_u16(lenpos, rdlen as u16);
        Ok(())
    }
}

/// Appends a sequence of options in wire format.
fn compose_options(
    options: &[EdnsOption],
    composer: &mut Composer,
) -> Result<(), WireError> {
    for option in options {
        if option.data.len() > usize::from(u16::MAX) {
            return Err(WireError::InvalidLen);
        }
        composer.append_u16(option.code);
        composer.append_u16(option.data.len() as u16);
        composer.append_slice(&option.data);
    }
    Ok(())
}

impl fmt::Display for Edns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "udp={}", self.udp_payload_size)?;
        if self.version() != 0 {
            write!(f, " version={}", self.version())?;
        }
        if self.dnssec_ok() {
            f.write_str(" do")?;
        }
        for option in &self.options {
            write!(f, " {}", option)?;
        }
        Ok(())
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn options_round_trip() {
        let opt = Opt {
            options: vec![
                EdnsOption {
                    code: 10,
                    data: b"\x77\x3D\x66\xC9\x95\x24\x74\x30".to_vec(),
                },
                EdnsOption {
                    code: 8,
                    data: Vec::new(),
                },
            ],
        };
        let mut c = Composer::new();
        opt.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Opt::parse(&mut p).unwrap(), opt);
    }

    #[test]
    fn truncated_option_is_rejected() {
        let mut p = Parser::new(b"\x00\x0A\x00\x08\x77\x3D");
        assert_eq!(Opt::parse(&mut p), Err(WireError::ShortInput));
    }

    #[test]
    fn ttl_bit_packing() {
        let mut edns = Edns::new(4096);
        edns.set_rcode_high(0x12);
        edns.set_version(1);
        edns.set_dnssec_ok(true);
        assert_eq!(edns.ttl(), 0x1201_8000);
        assert_eq!(edns.rcode_high(), 0x12);
        assert_eq!(edns.version(), 1);
        assert!(edns.dnssec_ok());
        edns.set_dnssec_ok(false);
        assert_eq!(edns.ttl(), 0x1201_0000);
    }

    #[test]
    fn unknown_ttl_bits_are_preserved() {
        let edns = Edns::from_opt_record(512, 0x0000_4001, Opt::default());
        assert!(!edns.dnssec_ok());
        assert_eq!(edns.ttl(), 0x4001);
    }

    #[test]
    fn synthesized_record() {
        let edns = Edns::new(4096);
        let mut c = Composer::new();
        edns.compose_opt_record(&mut c).unwrap();
        assert_eq!(
            c.finish(),
            b"\x00\x00\x29\x10\x00\x00\x00\x00\x00\x00\x00"
        );
    }
}
