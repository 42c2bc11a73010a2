//! Creating and checking DS records.

use super::DnssecError;
use crate::base::iana::DigestAlg;
use crate::base::name::Name;
use crate::rdata::{Dnskey, Ds};
use ring::digest;

/// Creates a DS record referring to the given key.
///
/// The digest is computed over the canonical owner name followed by the
/// DNSKEY RDATA (RFC 4034, section 5.1.4):
///
/// ```text
/// digest = digest_algorithm( DNSKEY owner name | DNSKEY RDATA );
/// ```
pub fn create_ds(
    owner: &Name,
    key: &Dnskey,
    digest_type: DigestAlg,
) -> Result<Ds, DnssecError> {
    Ok(Ds {
        key_tag: key.key_tag(),
        algorithm: key.algorithm,
        digest_type,
        digest: digest_dnskey(owner, key, digest_type)?,
    })
}

/// Checks that a DS record refers to the given key.
///
/// Besides the digest itself, the key tag and algorithm fields of the DS
/// record must match the key.
pub fn verify_ds(ds: &Ds, owner: &Name, key: &Dnskey) -> bool {
    if ds.key_tag != key.key_tag() || ds.algorithm != key.algorithm {
        return false;
    }
    match digest_dnskey(owner, key, ds.digest_type) {
        Ok(digest) => digest == ds.digest,
        Err(_) => false,
    }
}

/// Finds the key signing key a DS RRset delegates to.
///
/// Returns the first KSK of `keys` that one of the DS records
/// authenticates, or [`DnssecError::NoMatchingKey`].
pub fn validate_delegation<'a>(
    ds_set: &[Ds],
    owner: &Name,
    keys: &'a [Dnskey],
) -> Result<&'a Dnskey, DnssecError> {
    for ds in ds_set {
        for key in keys {
            if key.is_ksk() && verify_ds(ds, owner, key) {
                return Ok(key);
            }
        }
    }
    Err(DnssecError::NoMatchingKey)
}

/// Computes the DS digest of a key.
fn digest_dnskey(
    owner: &Name,
    key: &Dnskey,
    digest_type: DigestAlg,
) -> Result<Vec<u8>, DnssecError> {
    let algorithm = match digest_type {
        DigestAlg::SHA1 => &digest::SHA1_FOR_LEGACY_USE_ONLY,
        DigestAlg::SHA256 => &digest::SHA256,
        DigestAlg::SHA384 => &digest::SHA384,
        _ => return Err(DnssecError::UnsupportedDigestType),
    };
    let mut data = Vec::new();
    owner.compose_canonical(&mut data);
    key.compose_canonical(&mut data);
    let mut ctx = digest::Context::new(algorithm);
    ctx.update(&data);
    Ok(ctx.finish().as_ref().to_vec())
}

//============ Test ==========================================================
