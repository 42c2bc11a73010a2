//! Key generation and RRSIG creation.
//!
//! Signing is backed by OpenSSL. `ring`, which handles verification,
//! cannot generate RSA keys or export the secret parts of the keys it
//! does generate, so the signer keeps its private key as an OpenSSL
//! `PKey` for all algorithm families.

use super::canonical::signed_data;
use super::ds::create_ds;
use super::DnssecError;
use crate::base::iana::{DigestAlg, SecAlg};
use crate::base::name::Name;
use crate::base::record::Record;
use crate::base::serial::Serial;
use crate::rdata::{Dnskey, Ds, Rrsig};
use openssl::bn::{BigNum, BigNumContext};
use openssl::ec::{EcGroup, EcKey};
use openssl::ecdsa::EcdsaSig;
use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::{Id, PKey, Private};
use openssl::rsa::{Padding, Rsa};
use openssl::sign::Signer;

//------------ SigningKey ----------------------------------------------------

/// A DNSKEY together with its private key.
///
/// A signing key is constructed either by generating a fresh key pair or
/// from an existing private key and its DNSKEY; in the latter case the
/// two are checked against each other once, so that every signature made
/// later is known to verify under the public key.
pub struct SigningKey {
    /// The public half as record data.
    dnskey: Dnskey,

    /// The private key.
    pkey: PKey<Private>,

    /// The key tag of `dnskey`, computed once.
    key_tag: u16,
}

impl SigningKey {
    /// Creates a signing key from its parts.
    ///
    /// Fails with [`DnssecError::KeyMismatch`] if the private key does
    /// not belong to the DNSKEY or does not fit its algorithm.
    pub fn new(
        dnskey: Dnskey,
        pkey: PKey<Private>,
    ) -> Result<Self, DnssecError> {
        let expected_id = match dnskey.algorithm {
            SecAlg::RSASHA256 | SecAlg::RSASHA512 => Id::RSA,
            SecAlg::ECDSAP256SHA256 | SecAlg::ECDSAP384SHA384 => Id::EC,
            SecAlg::ED25519 => Id::ED25519,
            _ => return Err(DnssecError::UnsupportedAlgorithm),
        };
        if pkey.id() != expected_id {
            return Err(DnssecError::KeyMismatch);
        }
        let public = public_key_bytes(&pkey, dnskey.algorithm)
            .map_err(|_| DnssecError::KeyMismatch)?;
        if public != dnskey.public_key {
            return Err(DnssecError::KeyMismatch);
        }
        let key_tag = dnskey.key_tag();
        Ok(SigningKey {
            dnskey,
            pkey,
            key_tag,
        })
    }

    /// Generates a zone signing key (flags 256).
    ///
    /// `bits` is the RSA modulus size and ignored for the other
    /// algorithms; anything below 2048 bits is raised to 2048.
    pub fn generate(
        algorithm: SecAlg,
        bits: u32,
    ) -> Result<Self, DnssecError> {
        Self::generate_with_flags(algorithm, bits, 256)
    }

    /// Generates a key signing key (flags 257).
    pub fn generate_ksk(
        algorithm: SecAlg,
        bits: u32,
    ) -> Result<Self, DnssecError> {
        Self::generate_with_flags(algorithm, bits, 257)
    }

    fn generate_with_flags(
        algorithm: SecAlg,
        bits: u32,
        flags: u16,
    ) -> Result<Self, DnssecError> {
        let pkey = match algorithm {
            SecAlg::RSASHA256 | SecAlg::RSASHA512 => {
                let bits = bits.max(2048);
                Rsa::generate(bits)
                    .and_then(PKey::from_rsa)
                    .map_err(|_| DnssecError::SigningFailed)?
            }
            SecAlg::ECDSAP256SHA256 => generate_ec(Nid::X9_62_PRIME256V1)?,
            SecAlg::ECDSAP384SHA384 => generate_ec(Nid::SECP384R1)?,
            SecAlg::ED25519 => PKey::generate_ed25519()
                .map_err(|_| DnssecError::SigningFailed)?,
            _ => return Err(DnssecError::UnsupportedAlgorithm),
        };
        let public = public_key_bytes(&pkey, algorithm)
            .map_err(|_| DnssecError::SigningFailed)?;
        let dnskey = Dnskey::new(flags, algorithm, public);
        let key_tag = dnskey.key_tag();
        tracing::trace!(%algorithm, key_tag, "generated DNSSEC key pair");
        Ok(SigningKey {
            dnskey,
            pkey,
            key_tag,
        })
    }

    /// Returns the DNSKEY of the signing key.
    pub fn dnskey(&self) -> &Dnskey {
        &self.dnskey
    }

    /// Returns the algorithm of the key.
    pub fn algorithm(&self) -> SecAlg {
        self.dnskey.algorithm
    }

    /// Returns the key tag of the key.
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// Creates a DS record referring to this key.
    pub fn ds(
        &self,
        owner: &Name,
        digest_type: DigestAlg,
    ) -> Result<Ds, DnssecError> {
        create_ds(owner, &self.dnskey, digest_type)
    }

    /// Signs an RRset, producing its RRSIG record data.
    ///
    /// All records of `rrset` must share owner, class, and type. The
    /// label count is derived from the first owner name, excluding the
    /// root label and a leading wildcard label (RFC 4034, section 3.1.3).
    pub fn sign_rrset(
        &self,
        rrset: &[Record],
        signer_name: &Name,
        original_ttl: u32,
        inception: Serial,
        expiration: Serial,
    ) -> Result<Rrsig, DnssecError> {
        let first = rrset.first().ok_or(DnssecError::EmptyRrset)?;
        let mut rrsig = Rrsig {
            type_covered: first.data.rtype(),
            algorithm: self.dnskey.algorithm,
            labels: first.owner.rrsig_label_count(),
            original_ttl,
            expiration,
            inception,
            key_tag: self.key_tag,
            signer_name: signer_name.clone(),
            signature: Vec::new(),
        };
        let data = signed_data(&rrsig, rrset)?;
        rrsig.signature = self.sign(&data)?;
        Ok(rrsig)
    }

    /// Signs raw data with the key's algorithm.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, DnssecError> {
        self.sign_openssl(data)
            .map_err(|_| DnssecError::SigningFailed)
    }

    fn sign_openssl(&self, data: &[u8]) -> Result<Vec<u8>, ErrorStack> {
        match self.dnskey.algorithm {
            SecAlg::RSASHA256 => {
                let mut signer =
                    Signer::new(MessageDigest::sha256(), &self.pkey)?;
                signer.set_rsa_padding(Padding::PKCS1)?;
                signer.sign_oneshot_to_vec(data)
            }
            SecAlg::RSASHA512 => {
                let mut signer =
                    Signer::new(MessageDigest::sha512(), &self.pkey)?;
                signer.set_rsa_padding(Padding::PKCS1)?;
                signer.sign_oneshot_to_vec(data)
            }
            SecAlg::ECDSAP256SHA256 => {
                self.sign_ecdsa(data, MessageDigest::sha256(), 32)
            }
            SecAlg::ECDSAP384SHA384 => {
                self.sign_ecdsa(data, MessageDigest::sha384(), 48)
            }
            SecAlg::ED25519 => {
                let mut signer = Signer::new_without_digest(&self.pkey)?;
                signer.sign_oneshot_to_vec(data)
            }
            _ => unreachable!("constructors check the algorithm"),
        }
    }

    /// Signs with ECDSA and converts the DER signature into the fixed
    /// width `r || s` wire format.
    fn sign_ecdsa(
        &self,
        data: &[u8],
        digest: MessageDigest,
        coord_len: i32,
    ) -> Result<Vec<u8>, ErrorStack> {
        let mut signer = Signer::new(digest, &self.pkey)?;
        let der = signer.sign_oneshot_to_vec(data)?;
        let sig = EcdsaSig::from_der(&der)?;
        let mut out = sig.r().to_vec_padded(coord_len)?;
        out.extend(sig.s().to_vec_padded(coord_len)?);
        Ok(out)
    }
}

/// Generates an EC key on the given curve.
fn generate_ec(curve: Nid) -> Result<PKey<Private>, DnssecError> {
    let inner = || -> Result<PKey<Private>, ErrorStack> {
        let group = EcGroup::from_curve_name(curve)?;
        PKey::from_ec_key(EcKey::generate(&group)?)
    };
    inner().map_err(|_| DnssecError::SigningFailed)
}

/// Extracts the DNSKEY public key material from a private key.
fn public_key_bytes(
    pkey: &PKey<Private>,
    algorithm: SecAlg,
) -> Result<Vec<u8>, ErrorStack> {
    match algorithm {
        SecAlg::RSASHA256 | SecAlg::RSASHA512 => {
            // RFC 3110: exponent length, exponent, modulus.
            let rsa = pkey.rsa()?;
            let e = rsa.e().to_vec();
            let n = rsa.n().to_vec();
            let mut out = Vec::with_capacity(3 + e.len() + n.len());
            if e.len() < 256 {
                out.push(e.len() as u8);
            } else {
                out.push(0);
                out.extend_from_slice(&(e.len() as u16).to_be_bytes());
            }
            out.extend_from_slice(&e);
            out.extend_from_slice(&n);
            Ok(out)
        }
        SecAlg::ECDSAP256SHA256 | SecAlg::ECDSAP384SHA384 => {
            // RFC 6605: the bare point, X coordinate then Y coordinate.
            let coord_len = match algorithm {
                SecAlg::ECDSAP256SHA256 => 32,
                _ => 48,
            };
            let ec = pkey.ec_key()?;
            let mut ctx = BigNumContext::new()?;
            let mut x = BigNum::new()?;
            let mut y = BigNum::new()?;
            ec.public_key().affine_coordinates(
                ec.group(),
                &mut x,
                &mut y,
                &mut ctx,
            )?;
            let mut out = x.to_vec_padded(coord_len)?;
            out.extend(y.to_vec_padded(coord_len)?);
            Ok(out)
        }
        SecAlg::ED25519 => pkey.raw_public_key(),
        _ => unreachable!("callers check the algorithm"),
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rtype};
    use crate::dnssec::verify::verify_rrsig_at;
    use crate::dnssec::verify_ds;
    use crate::rdata::rfc1035::A;
    use crate::rdata::RData;

    fn a_rrset(owner: &str) -> Vec<Record> {
        vec![
            Record {
                owner: owner.parse().unwrap(),
                class: Class::IN,
                ttl: 3600,
                data: RData::A(A::new([192, 0, 2, 1].into())),
            },
            Record {
                owner: owner.parse().unwrap(),
                class: Class::IN,
                ttl: 3600,
                data: RData::A(A::new([192, 0, 2, 2].into())),
            },
        ]
    }

    fn sign_and_verify(algorithm: SecAlg) {
        let key = SigningKey::generate(algorithm, 2048).unwrap();
        assert_eq!(key.dnskey().flags, 256);
        assert!(key.dnskey().is_zsk());

        let signer_name: Name = "example.com.".parse().unwrap();
        let rrset = a_rrset("example.com.");
        let inception = Serial::from_int(1_700_000_000);
        let expiration = inception.add(86400);
        let rrsig = key
            .sign_rrset(&rrset, &signer_name, 3600, inception, expiration)
            .unwrap();

        assert_eq!(rrsig.type_covered, Rtype::A);
        assert_eq!(rrsig.labels, 2);
        assert_eq!(rrsig.key_tag, key.key_tag());

        let at = inception.add(3600);
        assert_eq!(
            verify_rrsig_at(&rrsig, key.dnskey(), &rrset, at),
            Ok(())
        );

        // Any change to the signed data must break the signature.
        let mut tampered = rrset.clone();
        tampered[0].data = RData::A(A::new([192, 0, 2, 99].into()));
        assert_eq!(
            verify_rrsig_at(&rrsig, key.dnskey(), &tampered, at),
            Err(DnssecError::InvalidSignature)
        );
        let mut wrong_owner = rrset.clone();
        wrong_owner[0].owner = "examp1e.com.".parse().unwrap();
        assert_eq!(
            verify_rrsig_at(&rrsig, key.dnskey(), &wrong_owner, at),
            Err(DnssecError::InvalidSignature)
        );
    }

    #[test]
    fn sign_and_verify_rsa_sha256() {
        sign_and_verify(SecAlg::RSASHA256);
    }

    #[test]
    fn sign_and_verify_rsa_sha512() {
        sign_and_verify(SecAlg::RSASHA512);
    }

    #[test]
    fn sign_and_verify_ecdsa_p256() {
        sign_and_verify(SecAlg::ECDSAP256SHA256);
    }

    #[test]
    fn sign_and_verify_ecdsa_p384() {
        sign_and_verify(SecAlg::ECDSAP384SHA384);
    }

    #[test]
    fn sign_and_verify_ed25519() {
        sign_and_verify(SecAlg::ED25519);
    }

    #[test]
    fn generated_key_shapes() {
        let key = SigningKey::generate(SecAlg::ED25519, 0).unwrap();
        assert_eq!(key.dnskey().public_key.len(), 32);
        assert_eq!(key.dnskey().protocol, 3);

        let key =
            SigningKey::generate(SecAlg::ECDSAP256SHA256, 0).unwrap();
        assert_eq!(key.dnskey().public_key.len(), 64);

        let ksk = SigningKey::generate_ksk(SecAlg::ED25519, 0).unwrap();
        assert_eq!(ksk.dnskey().flags, 257);
        assert!(ksk.dnskey().is_ksk());
    }

    #[test]
    fn weak_rsa_request_is_raised_to_2048() {
        let key = SigningKey::generate(SecAlg::RSASHA256, 512).unwrap();
        // RFC 3110 format: 1 octet exponent length, exponent, modulus.
        let exp_len = usize::from(key.dnskey().public_key[0]);
        let modulus_len = key.dnskey().public_key.len() - 1 - exp_len;
        assert!(modulus_len >= 2048 / 8);
    }

    #[test]
    fn new_checks_the_key_pair() {
        let key = SigningKey::generate(SecAlg::ED25519, 0).unwrap();
        let other = SigningKey::generate(SecAlg::ED25519, 0).unwrap();
        let raw_key = |k: &SigningKey| {
            PKey::private_key_from_raw_bytes(
                &k.pkey.raw_private_key().unwrap(),
                Id::ED25519,
            )
            .unwrap()
        };

        // The matching pair is accepted.
        assert!(
            SigningKey::new(key.dnskey().clone(), raw_key(&key)).is_ok()
        );

        // A foreign private key is rejected.
        assert_eq!(
            SigningKey::new(key.dnskey().clone(), raw_key(&other)).err(),
            Some(DnssecError::KeyMismatch)
        );

        // An algorithm mismatch is rejected.
        let mut wrong_alg = key.dnskey().clone();
        wrong_alg.algorithm = SecAlg::ECDSAP256SHA256;
        assert_eq!(
            SigningKey::new(wrong_alg, raw_key(&key)).err(),
            Some(DnssecError::KeyMismatch)
        );
    }

    #[test]
    fn unsupported_algorithm() {
        assert_eq!(
            SigningKey::generate(SecAlg::RSAMD5, 2048).err(),
            Some(DnssecError::UnsupportedAlgorithm)
        );
    }

    #[test]
    fn ds_for_generated_key() {
        let key = SigningKey::generate_ksk(SecAlg::ED25519, 0).unwrap();
        let owner: Name = "example.com.".parse().unwrap();
        let ds = key.ds(&owner, DigestAlg::SHA256).unwrap();
        assert_eq!(ds.digest.len(), 32);
        assert!(verify_ds(&ds, &owner, key.dnskey()));
    }

    #[test]
    fn empty_rrset_is_rejected() {
        let key = SigningKey::generate(SecAlg::ED25519, 0).unwrap();
        let signer: Name = "example.com.".parse().unwrap();
        assert_eq!(
            key.sign_rrset(
                &[],
                &signer,
                3600,
                Serial::from_int(0),
                Serial::from_int(1)
            )
            .err(),
            Some(DnssecError::EmptyRrset)
        );
    }
}
