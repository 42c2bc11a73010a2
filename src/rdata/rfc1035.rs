//! Record data for the record types of RFC 1035.

use super::{fmt_quoted, scan_quoted};
use crate::base::charstr::{
    compose_charstr, compose_charstr_canonical, parse_charstr,
};
use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::serial::Serial;
use crate::base::wire::{Composer, Parser, WireError};
use core::fmt;
use std::net::Ipv4Addr;

//------------ A -------------------------------------------------------------

/// An IPv4 host address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct A {
    /// The address.
    pub addr: Ipv4Addr,
}

impl A {
    /// Creates record data for the given address.
    pub fn new(addr: Ipv4Addr) -> Self {
        A { addr }
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        if parser.remaining() != 4 {
            return Err(WireError::InvalidLen);
        }
        let octets = parser.parse_slice(4)?;
        Ok(A::new(
            Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]),
        ))
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_slice(&self.addr.octets());
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.addr.octets());
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        s.parse()
            .map(A::new)
            .map_err(|_| WireError::Form("invalid IPv4 address"))
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//------------ SingleName ----------------------------------------------------

/// Record data consisting of a single domain name.
///
/// This covers NS, CNAME, PTR, and DNAME as well as the hoary mail types
/// MD, MF, MB, MG, and MR, all of which share the layout. The record type
/// is carried alongside the name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SingleName {
    /// The type of the record.
    pub rtype: Rtype,

    /// The name the record data consists of.
    pub name: Name,
}

impl SingleName {
    pub fn new(rtype: Rtype, name: Name) -> Self {
        SingleName { rtype, name }
    }

    pub fn parse(
        rtype: Rtype,
        parser: &mut Parser,
    ) -> Result<Self, WireError> {
        Ok(SingleName {
            rtype,
            name: parser.parse_name()?,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        // DNAME postdates RFC 1035 and must stay uncompressed.
        if self.rtype == Rtype::DNAME {
            composer.append_name_uncompressed(&self.name);
        } else {
            composer.append_name(&self.name);
        }
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        self.name.compose_canonical(out);
    }

    pub fn from_str(rtype: Rtype, s: &str) -> Result<Self, WireError> {
        Ok(SingleName {
            rtype,
            name: s.trim().parse()?,
        })
    }
}

impl fmt::Display for SingleName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.name.fmt(f)
    }
}

//------------ Soa -----------------------------------------------------------

/// The start of a zone of authority.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Soa {
    /// The primary name server of the zone.
    pub mname: Name,

    /// The mailbox of the person responsible, encoded as a name.
    pub rname: Name,

    /// The version number of the zone.
    pub serial: Serial,

    /// The refresh interval for secondaries, in seconds.
    pub refresh: u32,

    /// The retry interval after a failed refresh, in seconds.
    pub retry: u32,

    /// How long the zone stays authoritative without refresh, in seconds.
    pub expire: u32,

    /// The minimum TTL, used for negative caching.
    pub minimum: u32,
}

impl Soa {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Soa {
            mname: parser.parse_name()?,
            rname: parser.parse_name()?,
            serial: Serial::from_int(parser.parse_u32()?),
            refresh: parser.parse_u32()?,
            retry: parser.parse_u32()?,
            expire: parser.parse_u32()?,
            minimum: parser.parse_u32()?,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_name(&self.mname);
        composer.append_name(&self.rname);
        composer.append_u32(self.serial.into_int());
        composer.append_u32(self.refresh);
        composer.append_u32(self.retry);
        composer.append_u32(self.expire);
        composer.append_u32(self.minimum);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        self.mname.compose_canonical(out);
        self.rname.compose_canonical(out);
        out.extend_from_slice(&self.serial.into_int().to_be_bytes());
        out.extend_from_slice(&self.refresh.to_be_bytes());
        out.extend_from_slice(&self.retry.to_be_bytes());
        out.extend_from_slice(&self.expire.to_be_bytes());
        out.extend_from_slice(&self.minimum.to_be_bytes());
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        let mut fields = s.split_whitespace();
        let mut next = || {
            fields.next().ok_or(WireError::Form("missing SOA field"))
        };
        let mname = next()?.parse()?;
        let rname = next()?.parse()?;
        let int = |s: &str| {
            s.parse::<u32>()
                .map_err(|_| WireError::Form("invalid SOA integer"))
        };
        Ok(Soa {
            mname,
            rname,
            serial: Serial::from_int(int(next()?)?),
            refresh: int(next()?)?,
            retry: int(next()?)?,
            expire: int(next()?)?,
            minimum: int(next()?)?,
        })
    }
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

//------------ Mx ------------------------------------------------------------

/// A mail exchange for a domain.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Mx {
    /// The preference of this exchange; lower values are tried first.
    pub preference: u16,

    /// The host providing the exchange.
    pub exchange: Name,
}

impl Mx {
    pub fn new(preference: u16, exchange: Name) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Mx {
            preference: parser.parse_u16()?,
            exchange: parser.parse_name()?,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u16(self.preference);
        composer.append_name(&self.exchange);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.preference.to_be_bytes());
        self.exchange.compose_canonical(out);
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        let mut fields = s.split_whitespace();
        let preference = fields
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or(WireError::Form("invalid MX preference"))?;
        let exchange = fields
            .next()
            .ok_or(WireError::Form("missing MX exchange"))?
            .parse()?;
        Ok(Mx {
            preference,
            exchange,
        })
    }
}

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//------------ Txt -----------------------------------------------------------

/// Free-form text.
///
/// On the wire, TXT data is a sequence of character strings of up to 255
/// octets each. The value is kept as the concatenation of the strings;
/// encoding splits it back into 255 octet chunks, so text longer than one
/// character string round-trips.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Txt {
    /// The concatenated text.
    pub data: Vec<u8>,
}

impl Txt {
    pub fn new(data: Vec<u8>) -> Self {
        Txt { data }
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        let mut data = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            data.extend_from_slice(parse_charstr(parser)?);
        }
        Ok(Txt { data })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        for chunk in self.data.chunks(255) {
            compose_charstr(composer, chunk)?;
        }
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        for chunk in self.data.chunks(255) {
            compose_charstr_canonical(out, chunk);
        }
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        // Adjacent quoted strings concatenate without a separator.
        let mut data = Vec::new();
        let mut rest = s.trim();
        loop {
            let (segment, tail) = scan_quoted(rest)?;
            data.extend_from_slice(&segment);
            rest = tail.trim_start();
            if rest.is_empty() {
                return Ok(Txt { data });
            }
        }
    }
}

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_quoted(f, &self.data)
    }
}

//------------ Hinfo ---------------------------------------------------------

/// Host information.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Hinfo {
    /// The CPU type of the host.
    pub cpu: Vec<u8>,

    /// The operating system of the host.
    pub os: Vec<u8>,
}

impl Hinfo {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Hinfo {
            cpu: parse_charstr(parser)?.to_vec(),
            os: parse_charstr(parser)?.to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        compose_charstr(composer, &self.cpu)?;
        compose_charstr(composer, &self.os)
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        compose_charstr_canonical(out, &self.cpu);
        compose_charstr_canonical(out, &self.os);
    }

    pub fn from_str(s: &str) -> Result<Self, WireError> {
        let (cpu, rest) = scan_quoted(s)?;
        let (os, rest) = scan_quoted(rest)?;
        if !rest.trim().is_empty() {
            return Err(WireError::Form("trailing data after HINFO"));
        }
        Ok(Hinfo { cpu, os })
    }
}

impl fmt::Display for Hinfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_quoted(f, &self.cpu)?;
        f.write_str(" ")?;
        fmt_quoted(f, &self.os)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn a_round_trip() {
        let mut p = Parser::new(b"\xC0\x00\x02\x01");
        let a = A::parse(&mut p).unwrap();
        assert_eq!(a.to_string(), "192.0.2.1");
        let mut c = Composer::new();
        a.compose(&mut c).unwrap();
        assert_eq!(c.finish(), b"\xC0\x00\x02\x01");
    }

    #[test]
    fn a_rejects_bad_length() {
        let mut p = Parser::new(b"\xC0\x00\x02");
        assert_eq!(A::parse(&mut p), Err(WireError::InvalidLen));
        let mut p = Parser::new(b"\xC0\x00\x02\x01\x00");
        assert_eq!(A::parse(&mut p), Err(WireError::InvalidLen));
    }

    #[test]
    fn a_from_str() {
        assert_eq!(
            A::from_str("192.168.1.1").unwrap().addr,
            Ipv4Addr::new(192, 168, 1, 1)
        );
        assert!(A::from_str("192.168.1").is_err());
        assert!(A::from_str("2001:db8::1").is_err());
    }

    #[test]
    fn single_name_from_str() {
        let ns =
            SingleName::from_str(Rtype::NS, "ns1.example.com.").unwrap();
        assert_eq!(ns.rtype, Rtype::NS);
        assert_eq!(ns.to_string(), "ns1.example.com.");
    }

    #[test]
    fn soa_from_str_and_display() {
        let s = "ns1.example.com. hostmaster.example.com. \
                 2021120101 7200 3600 1209600 300";
        let soa = Soa::from_str(s).unwrap();
        assert_eq!(soa.serial, Serial::from_int(2021120101));
        assert_eq!(soa.minimum, 300);
        assert_eq!(soa.to_string(), s);
    }

    #[test]
    fn soa_wire_round_trip() {
        let soa = Soa::from_str(
            "mname. rname. 1 2 3 4 5",
        )
        .unwrap();
        let mut c = Composer::new();
        soa.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Soa::parse(&mut p).unwrap(), soa);
    }

    #[test]
    fn mx_from_str() {
        let mx = Mx::from_str("10 mail.example.com.").unwrap();
        assert_eq!(mx.preference, 10);
        assert_eq!(mx.to_string(), "10 mail.example.com.");
        assert!(Mx::from_str("mail.example.com.").is_err());
    }

    #[test]
    fn txt_long_data_is_chunked() {
        let txt = Txt::new(vec![b'x'; 300]);
        let mut c = Composer::new();
        txt.compose(&mut c).unwrap();
        let buf = c.finish();
        // One 255 octet chunk plus one of 45.
        assert_eq!(buf.len(), 302);
        assert_eq!(buf[0], 255);
        assert_eq!(buf[256], 45);
        let mut p = Parser::new(&buf);
        assert_eq!(Txt::parse(&mut p).unwrap(), txt);
    }

    #[test]
    fn txt_multiple_strings_concatenate() {
        let mut p = Parser::new(b"\x03foo\x03bar");
        assert_eq!(Txt::parse(&mut p).unwrap().data, b"foobar");
    }

    #[test]
    fn txt_from_str() {
        assert_eq!(Txt::from_str("\"hello\"").unwrap().data, b"hello");
        assert_eq!(
            Txt::from_str("\"hello \" \"world\"").unwrap().data,
            b"hello world"
        );
        assert!(Txt::from_str("bare").is_err());
    }

    #[test]
    fn txt_truncated_charstr() {
        let mut p = Parser::new(b"\x05hi");
        assert_eq!(Txt::parse(&mut p), Err(WireError::InvalidLen));
    }

    #[test]
    fn hinfo_round_trip() {
        let hinfo = Hinfo::from_str("\"AMD64\" \"Linux\"").unwrap();
        let mut c = Composer::new();
        hinfo.compose(&mut c).unwrap();
        let buf = c.finish();
        assert_eq!(buf, b"\x05AMD64\x05Linux");
        let mut p = Parser::new(&buf);
        assert_eq!(Hinfo::parse(&mut p).unwrap(), hinfo);
        assert_eq!(hinfo.to_string(), "\"AMD64\" \"Linux\"");
    }
}
