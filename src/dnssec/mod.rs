//! DNSSEC operations.
//!
//! This module implements the cryptographic side of DNSSEC atop the
//! message codec: the canonical serialization that signatures are
//! computed over ([`canonical`]), DS record creation and checking
//! ([`ds`]), RRSIG verification ([`verify`]), and key generation and
//! RRSIG creation ([`sign`]).
//!
//! Verification is backed by `ring`; key generation and signing by
//! OpenSSL, which unlike `ring` can generate RSA keys. The supported
//! algorithms are RSASHA256, RSASHA512, ECDSAP256SHA256, ECDSAP384SHA384,
//! and ED25519; DS digests can use SHA-1, SHA-256, and SHA-384.

pub mod canonical;
pub mod ds;
pub mod sign;
pub mod verify;

pub use self::canonical::signed_data;
pub use self::ds::{create_ds, validate_delegation, verify_ds};
pub use self::sign::SigningKey;
pub use self::verify::{find_matching_key, verify_rrsig, verify_rrsig_at};

use crate::base::wire::WireError;
use core::fmt;
use std::error;

//------------ DnssecError ---------------------------------------------------

/// An error from a DNSSEC operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DnssecError {
    /// The algorithm of the key or signature is not supported.
    UnsupportedAlgorithm,

    /// The digest type of a DS record is not supported.
    UnsupportedDigestType,

    /// The current time is past the RRSIG expiration.
    SignatureExpired,

    /// The current time is before the RRSIG inception.
    SignatureNotYetValid,

    /// The DNSKEY does not match the RRSIG key tag and algorithm.
    NoMatchingKey,

    /// The RRset type differs from the RRSIG type covered field.
    TypeMismatch,

    /// Cryptographic verification of the signature failed.
    InvalidSignature,

    /// The public key material is malformed for its algorithm.
    InvalidKey,

    /// The private key does not belong to the public key.
    KeyMismatch,

    /// An RRset to sign or verify was empty.
    EmptyRrset,

    /// A cryptographic operation failed.
    SigningFailed,

    /// Serializing data for the operation failed.
    Wire(WireError),
}

//--- From

impl From<WireError> for DnssecError {
    fn from(err: WireError) -> Self {
        DnssecError::Wire(err)
    }
}

//--- Display and Error

impl fmt::Display for DnssecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DnssecError::UnsupportedAlgorithm => {
                f.write_str("unsupported algorithm")
            }
            DnssecError::UnsupportedDigestType => {
                f.write_str("unsupported digest type")
            }
            DnssecError::SignatureExpired => {
                f.write_str("signature expired")
            }
            DnssecError::SignatureNotYetValid => {
                f.write_str("signature not yet valid")
            }
            DnssecError::NoMatchingKey => {
                f.write_str("no matching DNSKEY for RRSIG")
            }
            DnssecError::TypeMismatch => {
                f.write_str("RRset type does not match RRSIG type covered")
            }
            DnssecError::InvalidSignature => {
                f.write_str("signature verification failed")
            }
            DnssecError::InvalidKey => f.write_str("invalid public key"),
            DnssecError::KeyMismatch => {
                f.write_str("private key does not match DNSKEY")
            }
            DnssecError::EmptyRrset => f.write_str("empty RRset"),
            DnssecError::SigningFailed => {
                f.write_str("cryptographic operation failed")
            }
            DnssecError::Wire(ref err) => err.fmt(f),
        }
    }
}

impl error::Error for DnssecError {}
