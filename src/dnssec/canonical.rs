//! The canonical form of RRsets.
//!
//! DNSSEC signatures are not computed over the bytes of a message --
//! compression, case folding by intermediaries, and TTL decrementing
//! would break them. Instead both signer and verifier reconstruct a
//! canonical serialization (RFC 4034, section 6, and RFC 4035, section
//! 5.3.2): owner names lowercased and uncompressed, the records of the
//! RRset sorted by their canonical RDATA, the original TTL from the RRSIG
//! substituted, and wildcard expansions undone.

use super::DnssecError;
use crate::base::record::Record;
use crate::base::wire::WireError;
use crate::rdata::Rrsig;

/// Builds the blob of data an RRSIG signs.
///
/// The blob is the RRSIG RDATA up to but not including the signature
/// field, with the signer name in canonical form, followed by each record
/// of the RRset as
///
/// ```text
/// owner | type | class | original TTL | RDLENGTH | RDATA
/// ```
///
/// with owner and RDATA in canonical form and the records ordered by
/// canonical RDATA. If the RRSIG's label count is smaller than the number
/// of labels of an owner, the record was synthesized from a wildcard and
/// the owner is rewritten as `*.` plus its last `labels` labels.
pub fn signed_data(
    rrsig: &Rrsig,
    rrset: &[Record],
) -> Result<Vec<u8>, DnssecError> {
    let mut buf = Vec::new();
    rrsig.compose_rdata_head(&mut buf);

    let mut records: Vec<(Vec<u8>, &Record)> = rrset
        .iter()
        .map(|record| {
            let mut rdata = Vec::new();
            record.data.compose_canonical(&mut rdata);
            (rdata, record)
        })
        .collect();
    records.sort_by(|a, b| a.0.cmp(&b.0));

    for (rdata, record) in records {
        if rdata.len() > usize::from(u16::MAX) {
            return Err(WireError::InvalidLen.into());
        }
        compose_canonical_owner(&mut buf, rrsig, record);
        buf.extend_from_slice(
            &record.data.rtype().to_int().to_be_bytes(),
        );
        buf.extend_from_slice(&record.class.to_int().to_be_bytes());
        buf.extend_from_slice(&rrsig.original_ttl.to_be_bytes());
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&rdata);
    }
    Ok(buf)
}

/// Appends the canonical owner of a record, undoing wildcard expansion.
fn compose_canonical_owner(
    buf: &mut Vec<u8>,
    rrsig: &Rrsig,
    record: &Record,
) {
    let owner_labels = record.owner.labels().count();
    if usize::from(rrsig.labels) < owner_labels {
        buf.extend_from_slice(b"\x01*");
        let suffix = record
            .owner
            .suffix_wire(owner_labels - usize::from(rrsig.labels));
        buf.extend(suffix.iter().map(u8::to_ascii_lowercase));
    } else {
        record.owner.compose_canonical(buf);
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Rtype, SecAlg};
    use crate::base::serial::Serial;
    use crate::rdata::rfc1035::A;
    use crate::rdata::RData;

    fn rrsig_skeleton(type_covered: Rtype, labels: u8) -> Rrsig {
        Rrsig {
            type_covered,
            algorithm: SecAlg::ED25519,
            labels,
            original_ttl: 3600,
            expiration: Serial::from_int(1_700_086_400),
            inception: Serial::from_int(1_700_000_000),
            key_tag: 4711,
            signer_name: "example.com.".parse().unwrap(),
            signature: Vec::new(),
        }
    }

    fn a_record(owner: &str, ttl: u32, addr: [u8; 4]) -> Record {
        Record::new(
            owner.parse().unwrap(),
            ttl,
            RData::A(A::new(addr.into())),
        )
    }

    #[test]
    fn rrset_is_sorted_by_rdata() {
        let rrsig = rrsig_skeleton(Rtype::A, 2);
        let rrset = [
            a_record("example.com.", 3600, [203, 0, 113, 7]),
            a_record("example.com.", 3600, [192, 0, 2, 1]),
        ];
        let blob = signed_data(&rrsig, &rrset).unwrap();
        let lower = blob
            .windows(4)
            .position(|w| w == [192, 0, 2, 1])
            .unwrap();
        let higher = blob
            .windows(4)
            .position(|w| w == [203, 0, 113, 7])
            .unwrap();
        assert!(lower < higher);
    }

    #[test]
    fn owner_is_lowercased_and_ttl_substituted() {
        let rrsig = rrsig_skeleton(Rtype::A, 2);
        let rrset = [a_record("Example.COM.", 17, [192, 0, 2, 1])];
        let blob = signed_data(&rrsig, &rrset).unwrap();
        let owner_at = blob
            .windows(13)
            .position(|w| w == b"\x07example\x03com\x00")
            .unwrap();
        // type A, class IN, the RRSIG original TTL, RDLENGTH 4.
        assert_eq!(
            &blob[owner_at + 13..owner_at + 13 + 10],
            b"\x00\x01\x00\x01\x00\x00\x0E\x10\x00\x04"
        );
        // The record's own TTL must not appear.
        assert!(!blob
            .windows(4)
            .any(|w| w == 17u32.to_be_bytes()));
    }

    #[test]
    fn wildcard_expansion_is_undone() {
        let rrsig = rrsig_skeleton(Rtype::A, 2);
        let rrset = [a_record("a.z.w.example.com.", 3600, [192, 0, 2, 1])];
        let blob = signed_data(&rrsig, &rrset).unwrap();
        // Owner must appear as *.example.com.
        assert!(blob
            .windows(15)
            .any(|w| w == b"\x01*\x07example\x03com\x00"));
    }

    #[test]
    fn wildcard_owner_is_kept() {
        let rrsig = rrsig_skeleton(Rtype::A, 2);
        let rrset = [a_record("*.example.com.", 3600, [192, 0, 2, 1])];
        let blob = signed_data(&rrsig, &rrset).unwrap();
        assert!(blob
            .windows(15)
            .any(|w| w == b"\x01*\x07example\x03com\x00"));
    }

    #[test]
    fn blob_starts_with_rrsig_rdata() {
        let rrsig = rrsig_skeleton(Rtype::A, 2);
        let blob = signed_data(&rrsig, &[]).unwrap();
        assert_eq!(&blob[..2], &Rtype::A.to_int().to_be_bytes());
        assert_eq!(blob[2], SecAlg::ED25519.to_int());
        assert_eq!(blob[3], 2);
        // Ends with the canonical signer name.
        assert!(blob.ends_with(b"\x07example\x03com\x00"));
    }

    #[test]
    fn serialization_is_deterministic() {
        let rrsig = rrsig_skeleton(Rtype::A, 2);
        let rrset = [
            a_record("example.com.", 3600, [203, 0, 113, 7]),
            a_record("example.com.", 3600, [192, 0, 2, 1]),
        ];
        assert_eq!(
            signed_data(&rrsig, &rrset).unwrap(),
            signed_data(&rrsig, &rrset).unwrap()
        );
    }
}
