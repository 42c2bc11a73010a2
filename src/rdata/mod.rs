//! Record data.
//!
//! Every resource record carries data whose layout depends on the record
//! type. This module provides one Rust type per supported record type,
//! organized into submodules by the RFC that defines them, and the
//! [`RData`] enum tying them together. The enum is the unit the rest of
//! the crate works with: the resource record codec asks it to decode and
//! encode itself, and [`from_str`][RData::from_str] produces record data
//! from the zone-file style presentation of a type.
//!
//! Types without a native representation decode into [`Raw`], which keeps
//! the RDATA octets verbatim together with the numeric type, so unknown
//! types survive a decode/encode round trip untouched.

pub mod aaaa;
pub mod caa;
pub mod cert;
pub mod dnssec;
pub mod generic;
pub mod naptr;
pub mod nsec3;
pub mod rfc1035;
pub mod rfc1183;
pub mod srv;
pub mod sshfp;
pub mod tlsa;
pub mod tsig;
pub mod uri;

pub use self::aaaa::Aaaa;
pub use self::caa::Caa;
pub use self::cert::Cert;
pub use self::dnssec::{Dnskey, Ds, Nsec, Rrsig, RtypeBitmap};
pub use self::generic::Raw;
pub use self::naptr::Naptr;
pub use self::nsec3::{Nsec3, Nsec3param};
pub use self::rfc1035::{Hinfo, Mx, SingleName, Soa, Txt, A};
pub use self::rfc1183::{Afsdb, Rp};
pub use self::srv::Srv;
pub use self::sshfp::Sshfp;
pub use self::tlsa::Tlsa;
pub use self::tsig::{Tkey, Tsig};
pub use self::uri::Uri;

use crate::base::iana::Rtype;
use crate::base::opt::Opt;
use crate::base::wire::{Composer, Parser, WireError};
use core::fmt;

//------------ RData ---------------------------------------------------------

/// The data of a resource record.
///
/// Every variant corresponds to one record type, except for
/// [`SingleName`], which covers all the types whose data is exactly one
/// domain name, and [`Raw`], which holds the data of any type this crate
/// has no native representation for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RData {
    /// An IPv4 host address.
    A(A),
    /// An IPv6 host address.
    Aaaa(Aaaa),
    /// A record consisting of a single domain name: NS, CNAME, PTR,
    /// DNAME, MD, MF, MB, MG, or MR.
    SingleName(SingleName),
    /// The start of a zone of authority.
    Soa(Soa),
    /// A mail exchange.
    Mx(Mx),
    /// Free-form text.
    Txt(Txt),
    /// Host information.
    Hinfo(Hinfo),
    /// A responsible person.
    Rp(Rp),
    /// An AFS database server.
    Afsdb(Afsdb),
    /// A server location.
    Srv(Srv),
    /// A naming authority pointer.
    Naptr(Naptr),
    /// A TLS certificate association.
    Tlsa(Tlsa),
    /// An SSH key fingerprint.
    Sshfp(Sshfp),
    /// A certificate.
    Cert(Cert),
    /// A uniform resource identifier.
    Uri(Uri),
    /// A certification authority restriction.
    Caa(Caa),
    /// A transaction signature.
    Tsig(Tsig),
    /// A transaction key.
    Tkey(Tkey),
    /// A DNSSEC public key.
    Dnskey(Dnskey),
    /// A DNSSEC signature.
    Rrsig(Rrsig),
    /// A delegation signer.
    Ds(Ds),
    /// Authenticated denial of existence.
    Nsec(Nsec),
    /// Hashed authenticated denial of existence.
    Nsec3(Nsec3),
    /// NSEC3 parameters.
    Nsec3param(Nsec3param),
    /// The EDNS pseudo record.
    Opt(Opt),
    /// Data of a type without a native representation.
    Raw(Raw),
}

impl RData {
    /// Returns the record type of the data.
    pub fn rtype(&self) -> Rtype {
        match self {
            RData::A(_) => Rtype::A,
            RData::Aaaa(_) => Rtype::AAAA,
            RData::SingleName(data) => data.rtype,
            RData::Soa(_) => Rtype::SOA,
            RData::Mx(_) => Rtype::MX,
            RData::Txt(_) => Rtype::TXT,
            RData::Hinfo(_) => Rtype::HINFO,
            RData::Rp(_) => Rtype::RP,
            RData::Afsdb(_) => Rtype::AFSDB,
            RData::Srv(_) => Rtype::SRV,
            RData::Naptr(_) => Rtype::NAPTR,
            RData::Tlsa(_) => Rtype::TLSA,
            RData::Sshfp(_) => Rtype::SSHFP,
            RData::Cert(_) => Rtype::CERT,
            RData::Uri(_) => Rtype::URI,
            RData::Caa(_) => Rtype::CAA,
            RData::Tsig(_) => Rtype::TSIG,
            RData::Tkey(_) => Rtype::TKEY,
            RData::Dnskey(_) => Rtype::DNSKEY,
            RData::Rrsig(_) => Rtype::RRSIG,
            RData::Ds(_) => Rtype::DS,
            RData::Nsec(_) => Rtype::NSEC,
            RData::Nsec3(_) => Rtype::NSEC3,
            RData::Nsec3param(_) => Rtype::NSEC3PARAM,
            RData::Opt(_) => Rtype::OPT,
            RData::Raw(data) => data.rtype,
        }
    }

    /// Decodes record data of the given type.
    ///
    /// The parser must be bounded to exactly the RDATA of the record.
    /// Types without a native decoder fall back to [`Raw`]. A truncated
    /// field inside the RDATA surfaces as [`WireError::InvalidLen`].
    pub fn parse(
        rtype: Rtype,
        parser: &mut Parser,
    ) -> Result<Self, WireError> {
        Self::parse_native(rtype, parser).map_err(|err| match err {
            WireError::ShortInput => WireError::InvalidLen,
            other => other,
        })
    }

    fn parse_native(
        rtype: Rtype,
        parser: &mut Parser,
    ) -> Result<Self, WireError> {
        match rtype {
            Rtype::A => A::parse(parser).map(RData::A),
            Rtype::AAAA => Aaaa::parse(parser).map(RData::Aaaa),
            Rtype::NS
            | Rtype::MD
            | Rtype::MF
            | Rtype::CNAME
            | Rtype::MB
            | Rtype::MG
            | Rtype::MR
            | Rtype::PTR
            | Rtype::DNAME => {
                SingleName::parse(rtype, parser).map(RData::SingleName)
            }
            Rtype::SOA => Soa::parse(parser).map(RData::Soa),
            Rtype::MX => Mx::parse(parser).map(RData::Mx),
            Rtype::TXT => Txt::parse(parser).map(RData::Txt),
            Rtype::HINFO => Hinfo::parse(parser).map(RData::Hinfo),
            Rtype::RP => Rp::parse(parser).map(RData::Rp),
            Rtype::AFSDB => Afsdb::parse(parser).map(RData::Afsdb),
            Rtype::SRV => Srv::parse(parser).map(RData::Srv),
            Rtype::NAPTR => Naptr::parse(parser).map(RData::Naptr),
            Rtype::TLSA => Tlsa::parse(parser).map(RData::Tlsa),
            Rtype::SSHFP => Sshfp::parse(parser).map(RData::Sshfp),
            Rtype::CERT => Cert::parse(parser).map(RData::Cert),
            Rtype::URI => Uri::parse(parser).map(RData::Uri),
            Rtype::CAA => Caa::parse(parser).map(RData::Caa),
            Rtype::TSIG => Tsig::parse(parser).map(RData::Tsig),
            Rtype::TKEY => Tkey::parse(parser).map(RData::Tkey),
            Rtype::DNSKEY => Dnskey::parse(parser).map(RData::Dnskey),
            Rtype::RRSIG => Rrsig::parse(parser).map(RData::Rrsig),
            Rtype::DS => Ds::parse(parser).map(RData::Ds),
            Rtype::NSEC => Nsec::parse(parser).map(RData::Nsec),
            Rtype::NSEC3 => Nsec3::parse(parser).map(RData::Nsec3),
            Rtype::NSEC3PARAM => {
                Nsec3param::parse(parser).map(RData::Nsec3param)
            }
            Rtype::OPT => Opt::parse(parser).map(RData::Opt),
            _ => Raw::parse(rtype, parser).map(RData::Raw),
        }
    }

    /// Appends the wire format of the data to the composer.
    ///
    /// Embedded names take part in compression only for the record types
    /// of RFC 1035; everything younger emits its names verbatim
    /// (RFC 3597, section 4).
    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        match self {
            RData::A(data) => data.compose(composer),
            RData::Aaaa(data) => data.compose(composer),
            RData::SingleName(data) => data.compose(composer),
            RData::Soa(data) => data.compose(composer),
            RData::Mx(data) => data.compose(composer),
            RData::Txt(data) => data.compose(composer),
            RData::Hinfo(data) => data.compose(composer),
            RData::Rp(data) => data.compose(composer),
            RData::Afsdb(data) => data.compose(composer),
            RData::Srv(data) => data.compose(composer),
            RData::Naptr(data) => data.compose(composer),
            RData::Tlsa(data) => data.compose(composer),
            RData::Sshfp(data) => data.compose(composer),
            RData::Cert(data) => data.compose(composer),
            RData::Uri(data) => data.compose(composer),
            RData::Caa(data) => data.compose(composer),
            RData::Tsig(data) => data.compose(composer),
            RData::Tkey(data) => data.compose(composer),
            RData::Dnskey(data) => data.compose(composer),
            RData::Rrsig(data) => data.compose(composer),
            RData::Ds(data) => data.compose(composer),
            RData::Nsec(data) => data.compose(composer),
            RData::Nsec3(data) => data.compose(composer),
            RData::Nsec3param(data) => data.compose(composer),
            RData::Opt(data) => data.compose(composer),
            RData::Raw(data) => data.compose(composer),
        }
    }

    /// Appends the canonical form of the data to a buffer.
    ///
    /// This is the serialization used for DNSSEC signing: no compression,
    /// and embedded domain names lowercased (RFC 4034, section 6.2).
    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        match self {
            RData::A(data) => data.compose_canonical(out),
            RData::Aaaa(data) => data.compose_canonical(out),
            RData::SingleName(data) => data.compose_canonical(out),
            RData::Soa(data) => data.compose_canonical(out),
            RData::Mx(data) => data.compose_canonical(out),
            RData::Txt(data) => data.compose_canonical(out),
            RData::Hinfo(data) => data.compose_canonical(out),
            RData::Rp(data) => data.compose_canonical(out),
            RData::Afsdb(data) => data.compose_canonical(out),
            RData::Srv(data) => data.compose_canonical(out),
            RData::Naptr(data) => data.compose_canonical(out),
            RData::Tlsa(data) => data.compose_canonical(out),
            RData::Sshfp(data) => data.compose_canonical(out),
            RData::Cert(data) => data.compose_canonical(out),
            RData::Uri(data) => data.compose_canonical(out),
            RData::Caa(data) => data.compose_canonical(out),
            RData::Tsig(data) => data.compose_canonical(out),
            RData::Tkey(data) => data.compose_canonical(out),
            RData::Dnskey(data) => data.compose_canonical(out),
            RData::Rrsig(data) => data.compose_canonical(out),
            RData::Ds(data) => data.compose_canonical(out),
            RData::Nsec(data) => data.compose_canonical(out),
            RData::Nsec3(data) => data.compose_canonical(out),
            RData::Nsec3param(data) => data.compose_canonical(out),
            RData::Opt(_) => {}
            RData::Raw(data) => data.compose_canonical(out),
        }
    }

    /// Parses record data from its zone-file style presentation.
    ///
    /// Only the types with a defined one-line presentation are accepted;
    /// everything else, including WKS and MINFO, returns
    /// [`WireError::NotSupported`].
    pub fn from_str(rtype: Rtype, s: &str) -> Result<Self, WireError> {
        match rtype {
            Rtype::A => A::from_str(s).map(RData::A),
            Rtype::AAAA => Aaaa::from_str(s).map(RData::Aaaa),
            Rtype::NS
            | Rtype::MD
            | Rtype::MF
            | Rtype::CNAME
            | Rtype::MB
            | Rtype::MG
            | Rtype::MR
            | Rtype::PTR
            | Rtype::DNAME => {
                SingleName::from_str(rtype, s).map(RData::SingleName)
            }
            Rtype::SOA => Soa::from_str(s).map(RData::Soa),
            Rtype::MX => Mx::from_str(s).map(RData::Mx),
            Rtype::TXT => Txt::from_str(s).map(RData::Txt),
            Rtype::HINFO => Hinfo::from_str(s).map(RData::Hinfo),
            Rtype::RP => Rp::from_str(s).map(RData::Rp),
            Rtype::AFSDB => Afsdb::from_str(s).map(RData::Afsdb),
            Rtype::SRV => Srv::from_str(s).map(RData::Srv),
            Rtype::URI => Uri::from_str(s).map(RData::Uri),
            Rtype::CAA => Caa::from_str(s).map(RData::Caa),
            _ => Err(WireError::NotSupported(rtype)),
        }
    }
}

//--- Display

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RData::A(data) => data.fmt(f),
            RData::Aaaa(data) => data.fmt(f),
            RData::SingleName(data) => data.fmt(f),
            RData::Soa(data) => data.fmt(f),
            RData::Mx(data) => data.fmt(f),
            RData::Txt(data) => data.fmt(f),
            RData::Hinfo(data) => data.fmt(f),
            RData::Rp(data) => data.fmt(f),
            RData::Afsdb(data) => data.fmt(f),
            RData::Srv(data) => data.fmt(f),
            RData::Naptr(data) => data.fmt(f),
            RData::Tlsa(data) => data.fmt(f),
            RData::Sshfp(data) => data.fmt(f),
            RData::Cert(data) => data.fmt(f),
            RData::Uri(data) => data.fmt(f),
            RData::Caa(data) => data.fmt(f),
            RData::Tsig(data) => data.fmt(f),
            RData::Tkey(data) => data.fmt(f),
            RData::Dnskey(data) => data.fmt(f),
            RData::Rrsig(data) => data.fmt(f),
            RData::Ds(data) => data.fmt(f),
            RData::Nsec(data) => data.fmt(f),
            RData::Nsec3(data) => data.fmt(f),
            RData::Nsec3param(data) => data.fmt(f),
            RData::Opt(data) => data.fmt(f),
            RData::Raw(data) => data.fmt(f),
        }
    }
}

//--- From

macro_rules! from_variant {
    ( $( $type:ident => $variant:ident, )* ) => {
        $(
            impl From<$type> for RData {
                fn from(data: $type) -> Self {
                    RData::$variant(data)
                }
            }
        )*
    };
}

from_variant! {
    A => A,
    Aaaa => Aaaa,
    SingleName => SingleName,
    Soa => Soa,
    Mx => Mx,
    Txt => Txt,
    Hinfo => Hinfo,
    Rp => Rp,
    Afsdb => Afsdb,
    Srv => Srv,
    Naptr => Naptr,
    Tlsa => Tlsa,
    Sshfp => Sshfp,
    Cert => Cert,
    Uri => Uri,
    Caa => Caa,
    Tsig => Tsig,
    Tkey => Tkey,
    Dnskey => Dnskey,
    Rrsig => Rrsig,
    Ds => Ds,
    Nsec => Nsec,
    Nsec3 => Nsec3,
    Nsec3param => Nsec3param,
    Raw => Raw,
}

//------------ Presentation helpers ------------------------------------------

/// Scans one double-quoted string from the start of `s`.
///
/// Returns the unescaped content and the remainder after the closing
/// quote. Backslash escapes the next character; `\DDD` inserts the octet
/// with that decimal value.
pub(crate) fn scan_quoted(s: &str) -> Result<(Vec<u8>, &str), WireError> {
    let rest = s.trim_start();
    let rest = rest
        .strip_prefix('"')
        .ok_or(WireError::Form("expected quoted string"))?;
    let mut data = Vec::new();
    let mut bytes = rest.bytes();
    let mut consumed = 0;
    loop {
        match bytes.next() {
            Some(b'"') => {
                consumed += 1;
                break;
            }
            Some(b'\\') => {
                consumed += 1;
                match bytes.next() {
                    Some(d0 @ b'0'..=b'9') => {
                        let d1 = bytes.next();
                        let d2 = bytes.next();
                        match (d1, d2) {
                            (Some(d1), Some(d2))
                                if d1.is_ascii_digit()
                                    && d2.is_ascii_digit() =>
                            {
                                consumed += 3;
                                let value = u32::from(d0 - b'0') * 100
                                    + u32::from(d1 - b'0') * 10
                                    + u32::from(d2 - b'0');
                                if value > 255 {
                                    return Err(WireError::Form(
                                        "invalid escape in quoted string",
                                    ));
                                }
                                data.push(value as u8);
                            }
                            _ => {
                                return Err(WireError::Form(
                                    "invalid escape in quoted string",
                                ))
                            }
                        }
                    }
                    Some(c) => {
                        consumed += 1;
                        data.push(c);
                    }
                    None => {
                        return Err(WireError::Form(
                            "unterminated quoted string",
                        ))
                    }
                }
            }
            Some(c) => {
                consumed += 1;
                data.push(c);
            }
            None => {
                return Err(WireError::Form("unterminated quoted string"))
            }
        }
    }
    Ok((data, &rest[consumed..]))
}

/// Writes octets as the content of a quoted string, escaping as needed.
pub(crate) fn fmt_quoted(
    f: &mut fmt::Formatter,
    data: &[u8],
) -> fmt::Result {
    f.write_str("\"")?;
    for &b in data {
        match b {
            b'"' | b'\\' => write!(f, "\\{}", b as char)?,
            0x20..=0x7E => write!(f, "{}", b as char)?,
            _ => write!(f, "\\{:03}", b)?,
        }
    }
    f.write_str("\"")
}

//============ Test ==========================================================
