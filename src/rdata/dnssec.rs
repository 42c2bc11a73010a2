//! Record data for the DNSSEC record types of RFC 4034.

use crate::base::iana::{DigestAlg, Rtype, SecAlg};
use crate::base::name::Name;
use crate::base::serial::Serial;
use crate::base::wire::{Composer, Parser, WireError};
use crate::utils::{base16, base64};
use core::fmt;

//------------ Dnskey --------------------------------------------------------

/// A public key for DNSSEC validation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Dnskey {
    /// The key flags.
    pub flags: u16,

    /// The protocol field. Always 3 for DNSSEC.
    pub protocol: u8,

    /// The algorithm of the key.
    pub algorithm: SecAlg,

    /// The public key material in the algorithm's format.
    pub public_key: Vec<u8>,
}

impl Dnskey {
    /// The zone key flag. Set on every DNSSEC key.
    pub const FLAG_ZONE_KEY: u16 = 0x0100;

    /// The secure entry point flag, marking a key signing key.
    pub const FLAG_SEP: u16 = 0x0001;

    /// Creates a new key with the protocol field fixed to 3.
    pub fn new(flags: u16, algorithm: SecAlg, public_key: Vec<u8>) -> Self {
        Dnskey {
            flags,
            protocol: 3,
            algorithm,
            public_key,
        }
    }

    /// Returns whether the zone key flag is set.
    pub fn is_zone_key(&self) -> bool {
        self.flags & Self::FLAG_ZONE_KEY != 0
    }

    /// Returns whether the secure entry point flag is set.
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & Self::FLAG_SEP != 0
    }

    /// Returns whether this is a key signing key (flags 257).
    pub fn is_ksk(&self) -> bool {
        self.is_zone_key() && self.is_secure_entry_point()
    }

    /// Returns whether this is a zone signing key (flags 256).
    pub fn is_zsk(&self) -> bool {
        self.is_zone_key() && !self.is_secure_entry_point()
    }

    /// Computes the key tag of the key.
    ///
    /// The key tag links RRSIG and DS records to a DNSKEY without hashing
    /// it. The computation of RFC 4034, appendix B, sums the RDATA octets
    /// with even-indexed octets shifted up by eight bits and folds the
    /// carries back in. The deprecated RSAMD5 algorithm predates that
    /// rule: there the tag is the big-endian integer in the final two
    /// octets of the key material.
    pub fn key_tag(&self) -> u16 {
        if self.algorithm == SecAlg::RSAMD5 {
            let key = &self.public_key;
            if key.len() < 2 {
                return 0;
            }
            return u16::from_be_bytes([
                key[key.len() - 2],
                key[key.len() - 1],
            ]);
        }
        let mut rdata = Vec::with_capacity(4 + self.public_key.len());
        self.compose_canonical(&mut rdata);
        let mut ac: u32 = 0;
        for (i, &b) in rdata.iter().enumerate() {
            if i & 1 == 0 {
                ac += u32::from(b) << 8;
            } else {
                ac += u32::from(b);
            }
        }
        ac += ac >> 16;
        ac as u16
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Dnskey {
            flags: parser.parse_u16()?,
            protocol: parser.parse_u8()?,
            algorithm: SecAlg::from_int(parser.parse_u8()?),
            public_key: parser.parse_remaining().to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u16(self.flags);
        composer.append_u8(self.protocol);
        composer.append_u8(self.algorithm.to_int());
        composer.append_slice(&self.public_key);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.push(self.protocol);
        out.push(self.algorithm.to_int());
        out.extend_from_slice(&self.public_key);
    }
}

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.flags,
            self.protocol,
            self.algorithm.to_int()
        )?;
        base64::display(&self.public_key, f)
    }
}

//------------ Rrsig ---------------------------------------------------------

/// A signature over an RRset.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Rrsig {
    /// The type of the RRset covered by this signature.
    pub type_covered: Rtype,

    /// The algorithm of the signing key.
    pub algorithm: SecAlg,

    /// The number of labels of the original owner name, not counting the
    /// root label or a leading wildcard label.
    pub labels: u8,

    /// The TTL of the covered RRset as it appears in the zone.
    pub original_ttl: u32,

    /// The end of the validity window.
    pub expiration: Serial,

    /// The start of the validity window.
    pub inception: Serial,

    /// The key tag of the signing key.
    pub key_tag: u16,

    /// The owner of the signing key.
    pub signer_name: Name,

    /// The signature in the algorithm's format.
    pub signature: Vec<u8>,
}

impl Rrsig {
    /// Returns whether the signature has expired at the given time.
    pub fn is_expired_at(&self, at: Serial) -> bool {
        at > self.expiration
    }

    /// Returns whether the validity window has not yet started at the
    /// given time.
    pub fn is_not_yet_valid_at(&self, at: Serial) -> bool {
        at < self.inception
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Rrsig {
            type_covered: Rtype::from_int(parser.parse_u16()?),
            algorithm: SecAlg::from_int(parser.parse_u8()?),
            labels: parser.parse_u8()?,
            original_ttl: parser.parse_u32()?,
            expiration: Serial::from_int(parser.parse_u32()?),
            inception: Serial::from_int(parser.parse_u32()?),
            key_tag: parser.parse_u16()?,
            signer_name: parser.parse_name()?,
            signature: parser.parse_remaining().to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u16(self.type_covered.to_int());
        composer.append_u8(self.algorithm.to_int());
        composer.append_u8(self.labels);
        composer.append_u32(self.original_ttl);
        composer.append_u32(self.expiration.into_int());
        composer.append_u32(self.inception.into_int());
        composer.append_u16(self.key_tag);
        // The signer name must never be compressed (RFC 4034, 3.1.7).
        composer.append_name_uncompressed(&self.signer_name);
        composer.append_slice(&self.signature);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        self.compose_rdata_head(out);
        out.extend_from_slice(&self.signature);
    }

    /// Appends the RDATA with the signature field left off and the signer
    /// name in canonical form, as used in the signed-data blob.
    pub(crate) fn compose_rdata_head(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.type_covered.to_int().to_be_bytes());
        out.push(self.algorithm.to_int());
        out.push(self.labels);
        out.extend_from_slice(&self.original_ttl.to_be_bytes());
        out.extend_from_slice(&self.expiration.into_int().to_be_bytes());
        out.extend_from_slice(&self.inception.into_int().to_be_bytes());
        out.extend_from_slice(&self.key_tag.to_be_bytes());
        self.signer_name.compose_canonical(out);
    }
}

impl fmt::Display for Rrsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} ",
            self.type_covered,
            self.algorithm.to_int(),
            self.labels,
            self.original_ttl,
            self.expiration.rrsig_time(),
            self.inception.rrsig_time(),
            self.key_tag,
            self.signer_name
        )?;
        base64::display(&self.signature, f)
    }
}

//------------ Ds ------------------------------------------------------------

/// A delegation signer record.
///
/// A DS record lives in the parent zone and carries a digest of a key
/// signing key of the child zone, linking the chain of trust across the
/// delegation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ds {
    /// The key tag of the referenced key.
    pub key_tag: u16,

    /// The algorithm of the referenced key.
    pub algorithm: SecAlg,

    /// The digest algorithm used for the digest.
    pub digest_type: DigestAlg,

    /// The digest of the owner name and DNSKEY RDATA.
    pub digest: Vec<u8>,
}

impl Ds {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Ds {
            key_tag: parser.parse_u16()?,
            algorithm: SecAlg::from_int(parser.parse_u8()?),
            digest_type: DigestAlg::from_int(parser.parse_u8()?),
            digest: parser.parse_remaining().to_vec(),
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_u16(self.key_tag);
        composer.append_u8(self.algorithm.to_int());
        composer.append_u8(self.digest_type.to_int());
        composer.append_slice(&self.digest);
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.key_tag.to_be_bytes());
        out.push(self.algorithm.to_int());
        out.push(self.digest_type.to_int());
        out.extend_from_slice(&self.digest);
    }
}

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.key_tag,
            self.algorithm.to_int(),
            self.digest_type.to_int()
        )?;
        base16::display(&self.digest, f)
    }
}

//------------ Nsec ----------------------------------------------------------

/// Authenticated denial of existence.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Nsec {
    /// The next owner name in canonical zone order.
    pub next_name: Name,

    /// The types present at this owner name.
    pub types: RtypeBitmap,
}

impl Nsec {
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Nsec {
            next_name: parser.parse_name()?,
            types: RtypeBitmap::parse(parser)?,
        })
    }

    pub fn compose(&self, composer: &mut Composer) -> Result<(), WireError> {
        composer.append_name_uncompressed(&self.next_name);
        composer.append_slice(self.types.as_slice());
        Ok(())
    }

    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        self.next_name.compose_canonical(out);
        out.extend_from_slice(self.types.as_slice());
    }
}

impl fmt::Display for Nsec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.next_name, self.types)
    }
}

//------------ RtypeBitmap ---------------------------------------------------

/// The type bitmap of NSEC and NSEC3 records.
///
/// The bitmap states which record types exist at an owner name. On the
/// wire, types are grouped by their upper eight bits into windows of 256
/// types; each present window is encoded as its number, the length of its
/// bitmap in octets, and the bitmap with the most significant bit of the
/// first octet standing for the first type of the window.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RtypeBitmap(Vec<u8>);

impl RtypeBitmap {
    /// Builds a bitmap containing the given types.
    pub fn from_types(types: &[Rtype]) -> Self {
        let mut data = Vec::new();
        for window in 0..=255u16 {
            let mut bitmap = [0u8; 32];
            let mut max_octet = None;
            for rtype in types {
                let value = rtype.to_int();
                if value >> 8 != window {
                    continue;
                }
                let bit = value & 0xFF;
                let octet = usize::from(bit >> 3);
                bitmap[octet] |= 0x80 >> (bit & 7);
                max_octet = Some(max_octet.unwrap_or(0).max(octet));
            }
            if let Some(max_octet) = max_octet {
                data.push(window as u8);
                data.push(max_octet as u8 + 1);
                data.extend_from_slice(&bitmap[..=max_octet]);
            }
        }
        RtypeBitmap(data)
    }

    /// Returns the raw wire format of the bitmap.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns whether the bitmap contains the given type.
    pub fn contains(&self, rtype: Rtype) -> bool {
        self.iter().any(|t| t == rtype)
    }

    /// Returns an iterator over the types in the bitmap.
    pub fn iter(&self) -> impl Iterator<Item = Rtype> + '_ {
        RtypeBitmapIter::new(&self.0)
    }

    /// Reads the rest of the parser as a type bitmap.
    ///
    /// Windows must be in increasing order and each bitmap between one
    /// and 32 octets, as RFC 4034, section 4.1.2 requires.
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        let data = parser.parse_remaining();
        let mut pos = 0;
        let mut prev_window: Option<u8> = None;
        while pos < data.len() {
            if data.len() - pos < 2 {
                return Err(WireError::InvalidLen);
            }
            let window = data[pos];
            let len = usize::from(data[pos + 1]);
            if len == 0 || len > 32 {
                return Err(WireError::Form("invalid type bitmap window"));
            }
            if let Some(prev) = prev_window {
                if window <= prev {
                    return Err(WireError::Form(
                        "type bitmap windows out of order",
                    ));
                }
            }
            prev_window = Some(window);
            pos += 2;
            if data.len() - pos < len {
                return Err(WireError::InvalidLen);
            }
            pos += len;
        }
        Ok(RtypeBitmap(data.to_vec()))
    }
}

impl fmt::Display for RtypeBitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for rtype in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            rtype.fmt(f)?;
        }
        Ok(())
    }
}

/// The iterator behind [`RtypeBitmap::iter`].
struct RtypeBitmapIter<'a> {
    data: &'a [u8],
    /// Index of the current window header.
    pos: usize,
    /// Octet within the current window bitmap.
    octet: usize,
    /// Bit within the current octet.
    bit: u8,
}

impl<'a> RtypeBitmapIter<'a> {
    fn new(data: &'a [u8]) -> Self {
        RtypeBitmapIter {
            data,
            pos: 0,
            octet: 0,
            bit: 0,
        }
    }
}

impl<'a> Iterator for RtypeBitmapIter<'a> {
    type Item = Rtype;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.pos + 1 >= self.data.len() {
                return None;
            }
            let window = self.data[self.pos];
            let len = usize::from(self.data[self.pos + 1]);
            if self.octet >= len {
                self.pos += 2 + len;
                self.octet = 0;
                self.bit = 0;
                continue;
            }
            let octet = self.data[self.pos + 2 + self.octet];
            while self.bit < 8 {
                let bit = self.bit;
                self.bit += 1;
                if octet & (0x80 >> bit) != 0 {
                    let value = u16::from(window) << 8
                        | (self.octet as u16) << 3
                        | u16::from(bit);
                    return Some(Rtype::from_int(value));
                }
            }
            self.octet += 1;
            self.bit = 0;
        }
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    //--- Dnskey

    fn rsa_test_key() -> Dnskey {
        // The DNSKEY from RFC 4034, section 5.4.
        Dnskey::new(
            256,
            SecAlg::RSASHA1,
            base64::decode(
                "AQOeiiR0GOMYkDshWoSKz9Xzfwjr1AYtsmx3TGkJaNXVbfi/\
                 2pHm822aJ5iI9BMzNXxeYCmZDRD99WYwYqUSdjMmmAphXdvx\
                 egXd/M5+X7OrzKBaMbCVdFLUUh6DhweJBjEVv5f2wwjM9Xzc\
                 nOf+EPbtG9DMBmADjFDc2w/rljwvFw==",
            )
            .unwrap(),
        )
    }

    #[test]
    fn dnskey_flags() {
        let zsk = Dnskey::new(256, SecAlg::ED25519, vec![0; 32]);
        assert!(zsk.is_zone_key() && zsk.is_zsk() && !zsk.is_ksk());
        let ksk = Dnskey::new(257, SecAlg::ED25519, vec![0; 32]);
        assert!(ksk.is_zone_key() && ksk.is_ksk() && !ksk.is_zsk());
        assert!(ksk.is_secure_entry_point());
    }

    #[test]
    fn dnskey_key_tag() {
        // RFC 4034, section 5.4 gives the key tag for this key.
        assert_eq!(rsa_test_key().key_tag(), 60485);
    }

    #[test]
    fn dnskey_key_tag_rsamd5() {
        let key = Dnskey::new(
            256,
            SecAlg::RSAMD5,
            vec![0x01, 0x02, 0x03, 0xAB, 0xCD],
        );
        assert_eq!(key.key_tag(), 0xABCD);
        let short = Dnskey::new(256, SecAlg::RSAMD5, vec![0x01]);
        assert_eq!(short.key_tag(), 0);
    }

    #[test]
    fn dnskey_key_tag_is_deterministic() {
        let key = rsa_test_key();
        assert_eq!(key.key_tag(), key.key_tag());
    }

    #[test]
    fn dnskey_round_trip() {
        let key = rsa_test_key();
        let mut c = Composer::new();
        key.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Dnskey::parse(&mut p).unwrap(), key);
    }

    //--- Rrsig

    fn sample_rrsig() -> Rrsig {
        Rrsig {
            type_covered: Rtype::A,
            algorithm: SecAlg::ECDSAP256SHA256,
            labels: 2,
            original_ttl: 3600,
            expiration: Serial::rrsig_from_str("20260301000000").unwrap(),
            inception: Serial::rrsig_from_str("20260201000000").unwrap(),
            key_tag: 34505,
            signer_name: "example.com.".parse().unwrap(),
            signature: vec![0x55; 64],
        }
    }

    #[test]
    fn rrsig_round_trip() {
        let rrsig = sample_rrsig();
        let mut c = Composer::new();
        rrsig.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Rrsig::parse(&mut p).unwrap(), rrsig);
    }

    #[test]
    fn rrsig_signer_is_not_compressed() {
        let mut c = Composer::new();
        c.append_name(&"example.com.".parse().unwrap());
        let before = c.len();
        sample_rrsig().compose(&mut c).unwrap();
        // 18 octets of fixed fields, 13 octets of name, 64 of signature.
        assert_eq!(c.len() - before, 18 + 13 + 64);
    }

    #[test]
    fn rrsig_validity_window() {
        let rrsig = sample_rrsig();
        let before = Serial::rrsig_from_str("20260101000000").unwrap();
        let inside = Serial::rrsig_from_str("20260215000000").unwrap();
        let after = Serial::rrsig_from_str("20260401000000").unwrap();
        assert!(rrsig.is_not_yet_valid_at(before));
        assert!(!rrsig.is_expired_at(before));
        assert!(!rrsig.is_not_yet_valid_at(inside));
        assert!(!rrsig.is_expired_at(inside));
        assert!(rrsig.is_expired_at(after));
        assert!(!rrsig.is_not_yet_valid_at(after));
    }

    //--- Ds

    #[test]
    fn ds_round_trip_and_display() {
        let ds = Ds {
            key_tag: 60485,
            algorithm: SecAlg::RSASHA1,
            digest_type: DigestAlg::SHA1,
            digest: base16::decode(
                "2BB183AF5F22588179A53B0A98631FAD1A292118",
            )
            .unwrap(),
        };
        let mut c = Composer::new();
        ds.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Ds::parse(&mut p).unwrap(), ds);
        assert_eq!(
            ds.to_string(),
            "60485 5 1 2BB183AF5F22588179A53B0A98631FAD1A292118"
        );
    }

    //--- RtypeBitmap and Nsec

    #[test]
    fn bitmap_round_trip() {
        let types = [
            Rtype::A,
            Rtype::MX,
            Rtype::RRSIG,
            Rtype::NSEC,
            Rtype::CAA,
        ];
        let bitmap = RtypeBitmap::from_types(&types);
        let listed: Vec<_> = bitmap.iter().collect();
        assert_eq!(listed, types);
        assert!(bitmap.contains(Rtype::MX));
        assert!(!bitmap.contains(Rtype::AAAA));
    }

    #[test]
    fn bitmap_is_msb_first() {
        // Type 1 (A) is the second bit of the first octet.
        let bitmap = RtypeBitmap::from_types(&[Rtype::A]);
        assert_eq!(bitmap.as_slice(), b"\x00\x01\x40");
        // CAA is type 257, window 1.
        let bitmap = RtypeBitmap::from_types(&[Rtype::CAA]);
        assert_eq!(bitmap.as_slice(), b"\x01\x01\x40");
    }

    #[test]
    fn bitmap_parse_rejects_bad_windows() {
        let mut p = Parser::new(b"\x00\x00");
        assert!(RtypeBitmap::parse(&mut p).is_err());
        let mut p = Parser::new(b"\x00\x21\x00");
        assert!(RtypeBitmap::parse(&mut p).is_err());
        let mut p = Parser::new(b"\x01\x01\x40\x00\x01\x40");
        assert!(RtypeBitmap::parse(&mut p).is_err());
        let mut p = Parser::new(b"\x00\x02\x40");
        assert_eq!(
            RtypeBitmap::parse(&mut p),
            Err(WireError::InvalidLen)
        );
    }

    #[test]
    fn nsec_round_trip() {
        let nsec = Nsec {
            next_name: "host.example.com.".parse().unwrap(),
            types: RtypeBitmap::from_types(&[
                Rtype::A,
                Rtype::RRSIG,
                Rtype::NSEC,
            ]),
        };
        let mut c = Composer::new();
        nsec.compose(&mut c).unwrap();
        let buf = c.finish();
        let mut p = Parser::new(&buf);
        assert_eq!(Nsec::parse(&mut p).unwrap(), nsec);
        assert_eq!(
            nsec.to_string(),
            "host.example.com. A RRSIG NSEC"
        );
    }
}
