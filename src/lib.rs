//! A DNS wire-format library with a DNSSEC core.
//!
//! This crate provides the data structures and codecs needed to work with
//! DNS messages on the wire: decoding a byte buffer into a structured
//! [`Message`][base::message::Message], encoding such a message back into
//! wire format with label compression, and the DNSSEC operations that sit
//! atop the codec — key tags, DS digests, canonical RRset serialization,
//! and RRSIG signing and verification.
//!
//! The crate is split into three areas:
//!
//! * [`base`] contains the generic building blocks: domain names, the
//!   message header, questions, resource records, EDNS, and the encode and
//!   decode contexts everything threads through.
//! * [`rdata`] contains the record data types, one per supported record
//!   type, together with the dispatch that turns a type code and an RDATA
//!   slice into a typed value and back.
//! * [`dnssec`] contains canonical-form construction, DS record handling,
//!   and signature creation and verification for the RSA, ECDSA, and
//!   Ed25519 algorithm families.
//!
//! Decoding never trusts its input: compression pointers must point
//! strictly backwards and may not revisit an offset, labels and names are
//! length-limited, and RDATA is bounds-isolated from the rest of the
//! message. Any violation aborts the whole decode with an error from
//! [`base::wire`].
//!
//! The library is strictly synchronous and keeps no global state; all
//! encode and decode state lives in per-call contexts.

pub mod base;
pub mod dnssec;
pub mod rdata;
pub mod utils;
