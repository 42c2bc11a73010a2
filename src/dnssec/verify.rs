//! RRSIG verification.

use super::canonical::signed_data;
use super::DnssecError;
use crate::base::iana::SecAlg;
use crate::base::record::Record;
use crate::base::serial::Serial;
use crate::rdata::{Dnskey, Rrsig};
use ring::signature;

/// Verifies an RRSIG over an RRset against a DNSKEY, at the current time.
pub fn verify_rrsig(
    rrsig: &Rrsig,
    key: &Dnskey,
    rrset: &[Record],
) -> Result<(), DnssecError> {
    verify_rrsig_at(rrsig, key, rrset, Serial::now())
}

/// Verifies an RRSIG over an RRset against a DNSKEY, at a given time.
///
/// The checks happen in this order: the validity window of the RRSIG
/// (inception and expiration compared in serial number arithmetic), the
/// key tag and algorithm linking the RRSIG to the key, the type covered
/// matching the RRset, and finally the cryptographic signature over the
/// reconstructed signed data.
pub fn verify_rrsig_at(
    rrsig: &Rrsig,
    key: &Dnskey,
    rrset: &[Record],
    at: Serial,
) -> Result<(), DnssecError> {
    if rrsig.is_not_yet_valid_at(at) {
        return Err(DnssecError::SignatureNotYetValid);
    }
    if rrsig.is_expired_at(at) {
        return Err(DnssecError::SignatureExpired);
    }
    if key.key_tag() != rrsig.key_tag || key.algorithm != rrsig.algorithm {
        return Err(DnssecError::NoMatchingKey);
    }
    let first = rrset.first().ok_or(DnssecError::EmptyRrset)?;
    if first.data.rtype() != rrsig.type_covered {
        return Err(DnssecError::TypeMismatch);
    }

    let data = signed_data(rrsig, rrset)?;
    match rrsig.algorithm {
        SecAlg::RSASHA256 => verify_rsa(
            key,
            &data,
            &rrsig.signature,
            &signature::RSA_PKCS1_1024_8192_SHA256_FOR_LEGACY_USE_ONLY,
        ),
        SecAlg::RSASHA512 => verify_rsa(
            key,
            &data,
            &rrsig.signature,
            &signature::RSA_PKCS1_1024_8192_SHA512_FOR_LEGACY_USE_ONLY,
        ),
        SecAlg::ECDSAP256SHA256 => verify_ecdsa(
            key,
            &data,
            &rrsig.signature,
            &signature::ECDSA_P256_SHA256_FIXED,
            32,
        ),
        SecAlg::ECDSAP384SHA384 => verify_ecdsa(
            key,
            &data,
            &rrsig.signature,
            &signature::ECDSA_P384_SHA384_FIXED,
            48,
        ),
        SecAlg::ED25519 => verify_ed25519(key, &data, &rrsig.signature),
        _ => Err(DnssecError::UnsupportedAlgorithm),
    }
}

/// Finds the DNSKEY an RRSIG was made with.
///
/// Returns the first key matching the RRSIG's key tag and algorithm.
pub fn find_matching_key<'a>(
    rrsig: &Rrsig,
    keys: &'a [Dnskey],
) -> Option<&'a Dnskey> {
    keys.iter().find(|key| {
        key.key_tag() == rrsig.key_tag && key.algorithm == rrsig.algorithm
    })
}

/// Verifies an RSA PKCS#1 v1.5 signature.
fn verify_rsa(
    key: &Dnskey,
    data: &[u8],
    sig: &[u8],
    algorithm: &'static signature::RsaParameters,
) -> Result<(), DnssecError> {
    let (e, n) = rsa_exponent_modulus(&key.public_key, 1024 / 8)?;
    let public_key = signature::RsaPublicKeyComponents { n, e };
    public_key
        .verify(algorithm, data, sig)
        .map_err(|_| DnssecError::InvalidSignature)
}

/// Splits an RSA public key into exponent and modulus.
///
/// The DNSKEY format of RFC 3110 prefixes the exponent with its length:
/// one octet, or, if that octet is zero, a two octet length following it.
fn rsa_exponent_modulus(
    public_key: &[u8],
    min_modulus_len: usize,
) -> Result<(&[u8], &[u8]), DnssecError> {
    if public_key.len() < 3 {
        return Err(DnssecError::InvalidKey);
    }
    let (at, exponent_len) = match public_key[0] {
        0 => (
            3,
            usize::from(public_key[1]) << 8 | usize::from(public_key[2]),
        ),
        len => (1, usize::from(len)),
    };
    let rest = &public_key[at..];
    if exponent_len == 0 || rest.len() <= exponent_len {
        return Err(DnssecError::InvalidKey);
    }
    let (e, n) = rest.split_at(exponent_len);
    if n.len() < min_modulus_len {
        return Err(DnssecError::InvalidKey);
    }
    Ok((e, n))
}

/// Verifies an ECDSA signature in the fixed `r || s` format.
fn verify_ecdsa(
    key: &Dnskey,
    data: &[u8],
    sig: &[u8],
    algorithm: &'static signature::EcdsaVerificationAlgorithm,
    coord_len: usize,
) -> Result<(), DnssecError> {
    // The DNSKEY stores the bare point; ring expects the uncompressed
    // point format with its 0x04 marker. An off-curve point is rejected
    // by ring during verification.
    let public_key = key.public_key.as_slice();
    if public_key.len() != coord_len * 2 {
        return Err(DnssecError::InvalidKey);
    }
    if sig.len() != coord_len * 2 {
        return Err(DnssecError::InvalidSignature);
    }
    let mut point = Vec::with_capacity(1 + public_key.len());
    point.push(0x04);
    point.extend_from_slice(public_key);
    signature::UnparsedPublicKey::new(algorithm, &point)
        .verify(data, sig)
        .map_err(|_| DnssecError::InvalidSignature)
}

/// Verifies an Ed25519 signature.
fn verify_ed25519(
    key: &Dnskey,
    data: &[u8],
    sig: &[u8],
) -> Result<(), DnssecError> {
    if key.public_key.len() != 32 {
        return Err(DnssecError::InvalidKey);
    }
    if sig.len() != 64 {
        return Err(DnssecError::InvalidSignature);
    }
    signature::UnparsedPublicKey::new(
        &signature::ED25519,
        &key.public_key,
    )
    .verify(data, sig)
    .map_err(|_| DnssecError::InvalidSignature)
}

//============ Test ==========================================================
