//! IANA definitions for the DNS.
//!
//! The types in this module wrap the integer registries of the DNS: record
//! types, classes, opcodes, response codes, and the DNSSEC algorithm and
//! digest numbers. Each is a thin newtype over its wire integer so that
//! unknown values survive a decode/encode round trip unchanged, with
//! associated constants for the assigned values and mnemonic conversions
//! for presentation.

use super::wire::WireError;
use core::fmt;
use core::str::FromStr;

macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $int:ty, $unknown:literal;
        $(
            $(#[$vmeta:meta])*
            ($variant:ident, $value:expr, $mnemonic:literal)
        )*
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $name($int);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: $name = $name($value);
            )*

            /// Creates a value from its wire integer.
            pub const fn from_int(value: $int) -> Self {
                $name(value)
            }

            /// Returns the wire integer for this value.
            pub const fn to_int(self) -> $int {
                self.0
            }

            /// Returns the IANA mnemonic if this is an assigned value.
            pub fn mnemonic(self) -> Option<&'static str> {
                match self.0 {
                    $( $value => Some($mnemonic), )*
                    _ => None,
                }
            }
        }

        impl From<$int> for $name {
            fn from(value: $int) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $int {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        //--- Display and FromStr
        //
        // Unassigned values use the generic form of RFC 3597, i.e., the
        // prefix followed by the decimal value, and `from_str` accepts that
        // form back.

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self.mnemonic() {
                    Some(m) => f.write_str(m),
                    None => write!(f, "{}{}", $unknown, self.0),
                }
            }
        }

        impl FromStr for $name {
            type Err = WireError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($mnemonic) {
                        return Ok($name($value));
                    }
                )*
                if let Some(num) = strip_prefix_ignore_case(s, $unknown) {
                    if let Ok(value) = num.parse::<$int>() {
                        return Ok($name(value));
                    }
                }
                Err(WireError::Form("unknown mnemonic"))
            }
        }
    };
}

/// Strips `prefix` from `s` without caring about ASCII case.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => {
            Some(&s[prefix.len()..])
        }
        _ => None,
    }
}

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type identifying the kind of data
    /// it contains. This type wraps that integer; the constants cover the
    /// types this crate knows about. See the [IANA registry] for the full
    /// list.
    ///
    /// [IANA registry]: https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    Rtype, u16, "TYPE";

    /// A host address. (RFC 1035)
    (A, 1, "A")
    /// An authoritative name server. (RFC 1035)
    (NS, 2, "NS")
    /// A mail destination. (RFC 1035, obsolete)
    (MD, 3, "MD")
    /// A mail forwarder. (RFC 1035, obsolete)
    (MF, 4, "MF")
    /// The canonical name for an alias. (RFC 1035)
    (CNAME, 5, "CNAME")
    /// Marks the start of a zone of authority. (RFC 1035)
    (SOA, 6, "SOA")
    /// A mailbox domain name. (RFC 1035, experimental)
    (MB, 7, "MB")
    /// A mail group member. (RFC 1035, experimental)
    (MG, 8, "MG")
    /// A mail rename domain name. (RFC 1035, experimental)
    (MR, 9, "MR")
    /// A null resource record. (RFC 1035, experimental)
    (NULL, 10, "NULL")
    /// A well known service description. (RFC 1035)
    (WKS, 11, "WKS")
    /// A domain name pointer. (RFC 1035)
    (PTR, 12, "PTR")
    /// Host information. (RFC 1035)
    (HINFO, 13, "HINFO")
    /// Mailbox or mail list information. (RFC 1035)
    (MINFO, 14, "MINFO")
    /// Mail exchange. (RFC 1035)
    (MX, 15, "MX")
    /// Text strings. (RFC 1035)
    (TXT, 16, "TXT")
    /// Responsible person. (RFC 1183)
    (RP, 17, "RP")
    /// AFS database location. (RFC 1183)
    (AFSDB, 18, "AFSDB")
    /// A security signature. (RFC 2535, obsoleted by RRSIG)
    (SIG, 24, "SIG")
    /// A security key. (RFC 2535, obsoleted by DNSKEY)
    (KEY, 25, "KEY")
    /// An IPv6 host address. (RFC 3596)
    (AAAA, 28, "AAAA")
    /// Location information. (RFC 1876)
    (LOC, 29, "LOC")
    /// Server selection. (RFC 2782)
    (SRV, 33, "SRV")
    /// Naming authority pointer. (RFC 3403)
    (NAPTR, 35, "NAPTR")
    /// Key exchanger. (RFC 2230)
    (KX, 36, "KX")
    /// A certificate. (RFC 4398)
    (CERT, 37, "CERT")
    /// Delegation of a name redirection. (RFC 6672)
    (DNAME, 39, "DNAME")
    /// The EDNS pseudo record. (RFC 6891)
    (OPT, 41, "OPT")
    /// An address prefix list. (RFC 3123)
    (APL, 42, "APL")
    /// Delegation signer. (RFC 4034)
    (DS, 43, "DS")
    /// An SSH key fingerprint. (RFC 4255)
    (SSHFP, 44, "SSHFP")
    /// IPsec keying material. (RFC 4025)
    (IPSECKEY, 45, "IPSECKEY")
    /// A DNSSEC signature. (RFC 4034)
    (RRSIG, 46, "RRSIG")
    /// Authenticated denial of existence. (RFC 4034)
    (NSEC, 47, "NSEC")
    /// A DNSSEC public key. (RFC 4034)
    (DNSKEY, 48, "DNSKEY")
    /// DHCP information. (RFC 4701)
    (DHCID, 49, "DHCID")
    /// Hashed authenticated denial of existence. (RFC 5155)
    (NSEC3, 50, "NSEC3")
    /// NSEC3 parameters. (RFC 5155)
    (NSEC3PARAM, 51, "NSEC3PARAM")
    /// TLS certificate association. (RFC 6698)
    (TLSA, 52, "TLSA")
    /// S/MIME certificate association. (RFC 8162)
    (SMIMEA, 53, "SMIMEA")
    /// Host identity protocol. (RFC 8005)
    (HIP, 55, "HIP")
    /// Child DS. (RFC 7344)
    (CDS, 59, "CDS")
    /// A DNSKEY the child wants reflected in DS. (RFC 7344)
    (CDNSKEY, 60, "CDNSKEY")
    /// An OpenPGP key. (RFC 7929)
    (OPENPGPKEY, 61, "OPENPGPKEY")
    /// Child-to-parent synchronization. (RFC 7477)
    (CSYNC, 62, "CSYNC")
    /// A message digest over a zone. (RFC 8976)
    (ZONEMD, 63, "ZONEMD")
    /// Transaction key. (RFC 2930)
    (TKEY, 249, "TKEY")
    /// Transaction signature. (RFC 8945)
    (TSIG, 250, "TSIG")
    /// Incremental zone transfer. (RFC 1995)
    (IXFR, 251, "IXFR")
    /// Transfer of an entire zone. (RFC 1035)
    (AXFR, 252, "AXFR")
    /// Mailbox related records. (RFC 1035, query type)
    (MAILB, 253, "MAILB")
    /// Mail agent records. (RFC 1035, query type)
    (MAILA, 254, "MAILA")
    /// All records. (RFC 1035, query type)
    (ANY, 255, "ANY")
    /// A uniform resource identifier. (RFC 7553)
    (URI, 256, "URI")
    /// Certification authority restriction. (RFC 8659)
    (CAA, 257, "CAA")
    /// DNSSEC trust authorities.
    (TA, 32768, "TA")
    /// DNSSEC lookaside validation. (RFC 4431, historic)
    (DLV, 32769, "DLV")
}

int_enum! {
    /// DNS classes.
    ///
    /// In practice only the Internet class is ever seen; the others are
    /// carried for completeness. (RFC 1035)
    Class, u16, "CLASS";

    /// The Internet.
    (IN, 1, "IN")
    /// The CSNET class. (Obsolete)
    (CS, 2, "CS")
    /// The Chaos class.
    (CH, 3, "CH")
    /// Hesiod.
    (HS, 4, "HS")
}

int_enum! {
    /// Message opcodes.
    ///
    /// The opcode specifies the kind of query carried by a message.
    /// (RFC 1035)
    Opcode, u8, "OPCODE";

    /// A standard query.
    (QUERY, 0, "QUERY")
    /// An inverse query. (Obsolete)
    (IQUERY, 1, "IQUERY")
    /// A server status request.
    (STATUS, 2, "STATUS")
}

int_enum! {
    /// Response codes.
    ///
    /// The header RCODE field is four bits wide; EDNS extends it by another
    /// eight bits carried in the OPT record (see
    /// [`Edns`][crate::base::opt::Edns]). This type only covers the header
    /// part. (RFC 1035)
    Rcode, u8, "RCODE";

    /// No error condition.
    (NOERROR, 0, "NOERROR")
    /// The server was unable to interpret the query.
    (FORMERR, 1, "FORMERR")
    /// The server encountered an internal problem.
    (SERVFAIL, 2, "SERVFAIL")
    /// The queried domain name does not exist.
    (NXDOMAIN, 3, "NXDOMAIN")
    /// The requested kind of query is not supported.
    (NOTIMP, 4, "NOTIMP")
    /// The server refused to perform the operation.
    (REFUSED, 5, "REFUSED")
}

int_enum! {
    /// DNSSEC algorithm numbers.
    ///
    /// These identify the cryptographic algorithm of DNSKEY, RRSIG, and DS
    /// records. See the [IANA registry] and RFC 8624 for implementation
    /// requirements; this crate signs and verifies with RSASHA256,
    /// RSASHA512, ECDSAP256SHA256, ECDSAP384SHA384, and ED25519.
    ///
    /// [IANA registry]: https://www.iana.org/assignments/dns-sec-alg-numbers/dns-sec-alg-numbers.xhtml
    SecAlg, u8, "ALG";

    /// Delete DS. (RFC 8078)
    (DELETE, 0, "DELETE")
    /// RSA/MD5. (RFC 2537, deprecated; only the key tag rule survives)
    (RSAMD5, 1, "RSAMD5")
    /// Diffie-Hellman. (RFC 2539)
    (DH, 2, "DH")
    /// DSA/SHA-1. (RFC 2536, deprecated)
    (DSA, 3, "DSA")
    /// RSA/SHA-1. (RFC 3110, deprecated)
    (RSASHA1, 5, "RSASHA1")
    /// DSA-NSEC3-SHA1. (RFC 5155, deprecated)
    (DSA_NSEC3_SHA1, 6, "DSA-NSEC3-SHA1")
    /// RSASHA1-NSEC3-SHA1. (RFC 5155, deprecated)
    (RSASHA1_NSEC3_SHA1, 7, "RSASHA1-NSEC3-SHA1")
    /// RSA/SHA-256. (RFC 5702)
    (RSASHA256, 8, "RSASHA256")
    /// RSA/SHA-512. (RFC 5702)
    (RSASHA512, 10, "RSASHA512")
    /// GOST R 34.10-2001. (RFC 5933, deprecated)
    (ECC_GOST, 12, "ECC-GOST")
    /// ECDSA P-256 with SHA-256. (RFC 6605)
    (ECDSAP256SHA256, 13, "ECDSAP256SHA256")
    /// ECDSA P-384 with SHA-384. (RFC 6605)
    (ECDSAP384SHA384, 14, "ECDSAP384SHA384")
    /// Ed25519. (RFC 8080)
    (ED25519, 15, "ED25519")
    /// Ed448. (RFC 8080)
    (ED448, 16, "ED448")
    /// SM2/SM3. (RFC 8998)
    (SM2SM3, 17, "SM2SM3")
    /// GOST R 34.10-2012. (RFC 9558)
    (ECC_GOST12, 23, "ECC-GOST12")
    /// Reserved for indirect keys. (RFC 4034)
    (INDIRECT, 252, "INDIRECT")
    /// A private algorithm identified by a domain name. (RFC 4034)
    (PRIVATEDNS, 253, "PRIVATEDNS")
    /// A private algorithm identified by an OID. (RFC 4034)
    (PRIVATEOID, 254, "PRIVATEOID")
}

int_enum! {
    /// Digest algorithms for DS records.
    ///
    /// See the [IANA registry]. This crate computes SHA-1, SHA-256, and
    /// SHA-384 digests.
    ///
    /// [IANA registry]: https://www.iana.org/assignments/ds-rr-types/ds-rr-types.xhtml
    DigestAlg, u8, "DIGEST";

    /// SHA-1. (RFC 4034, deprecated for delegations)
    (SHA1, 1, "SHA-1")
    /// SHA-256. (RFC 4509)
    (SHA256, 2, "SHA-256")
    /// GOST R 34.11-94. (RFC 5933, deprecated)
    (GOST, 3, "GOST94")
    /// SHA-384. (RFC 6605)
    (SHA384, 4, "SHA-384")
    /// GOST R 34.11-2012. (RFC 9558)
    (GOST12, 5, "GOST12")
    /// SM3. (RFC 8998)
    (SM3, 6, "SM3")
}

int_enum! {
    /// NSEC3 hash algorithms. (RFC 5155)
    Nsec3HashAlg, u8, "HASH";

    /// SHA-1, the only algorithm currently defined.
    (SHA1, 1, "SHA-1")
}

//============ Test ==========================================================
