//! Creating and consuming data in wire format.
//!
//! All encoding and decoding in this crate threads through one of the two
//! contexts defined here. [`Composer`] owns the output buffer of an encode
//! together with the label-offset map used for name compression.
//! [`Parser`] is a cursor over the bytes of a message being decoded; record
//! data is handed out as a bounded sub-parser so that a malformed RDATA
//! field can never read beyond its declared length, while compression
//! pointers inside it can still be resolved against the full message.

use super::iana::Rtype;
use super::name::Name;
use core::fmt;
use std::collections::{HashMap, HashSet};
use std::error;

/// The maximum length of an encoded domain name.
pub const MAX_NAME_LEN: usize = 255;

/// The maximum length of a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// The largest offset a compression pointer can address.
const MAX_POINTER: usize = 0x3FFF;

//------------ Composer ------------------------------------------------------

/// The context for encoding a DNS message.
///
/// A composer owns the output buffer and the map from name suffixes to
/// their position in the buffer that drives label compression. Its
/// lifetime is exactly one encode call; compression state never leaks
/// between messages.
#[derive(Clone, Debug, Default)]
pub struct Composer {
    /// The message assembled so far.
    buf: Vec<u8>,

    /// Already emitted name suffixes, lowercased, mapped to their pointer
    /// value (the buffer offset with the top two bits set).
    names: HashMap<Vec<u8>, u16>,
}

impl Composer {
    /// Creates an empty composer.
    pub fn new() -> Self {
        Composer::default()
    }

    /// Returns the number of octets written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Takes the assembled message out of the composer.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Appends a slice of octets.
    pub fn append_slice(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Appends a single octet.
    pub fn append_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Appends a 16 bit integer in network byte order.
    pub fn append_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends a 32 bit integer in network byte order.
    pub fn append_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Overwrites the two octets at `pos` with a 16 bit integer.
    ///
    /// Used to back-patch length fields once their content has been
    /// written. `pos` must point at two already written octets.
    pub fn patch_u16(&mut self, pos: usize, value: u16) {
        self.buf[pos..pos + 2].copy_from_slice(&value.to_be_bytes());
    }

    /// Appends a domain name, compressing where possible.
    ///
    /// The name is walked suffix by suffix. A suffix already present in
    /// the map is replaced by a two-octet pointer to its earlier
    /// occurrence, ending the name. Otherwise the position of the suffix
    /// is recorded -- provided it is still addressable by a 14 bit
    /// pointer -- and its first label is emitted. Caching every suffix
    /// rather than only whole names lets later sibling names share their
    /// parent.
    ///
    /// The root name is always a single zero octet and never enters the
    /// map.
    pub fn append_name(&mut self, name: &Name) {
        let bytes = name.as_wire();
        let mut idx = 0;
        loop {
            if bytes[idx] == 0 {
                self.append_u8(0);
                return;
            }
            let key = bytes[idx..].to_ascii_lowercase();
            if let Some(&pointer) = self.names.get(&key) {
                self.append_u16(pointer);
                return;
            }
            if self.buf.len() < MAX_POINTER {
                self.names.insert(key, self.buf.len() as u16 | 0xC000);
            }
            let label_len = bytes[idx] as usize;
            self.append_slice(&bytes[idx..idx + 1 + label_len]);
            idx += 1 + label_len;
        }
    }

    /// Appends a domain name without compression.
    ///
    /// Record types defined after RFC 1035 must not have their embedded
    /// names compressed (RFC 3597, section 4). The name does not become a
    /// compression target either.
    pub fn append_name_uncompressed(&mut self, name: &Name) {
        self.append_slice(name.as_wire());
    }
}

//------------ Parser --------------------------------------------------------

/// The context for decoding a DNS message.
///
/// A parser is a read cursor over the full message buffer, bounded by a
/// limit. Sequential reads cannot pass the limit; this is how RDATA is
/// isolated from the rest of the message. Name parsing may chase
/// compression pointers into earlier parts of the buffer regardless of the
/// limit.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    /// The full message.
    buf: &'a [u8],

    /// The current read position.
    pos: usize,

    /// The exclusive upper bound for sequential reads.
    limit: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a full message buffer.
    pub fn new(buf: &'a [u8]) -> Self {
        Parser {
            buf,
            pos: 0,
            limit: buf.len(),
        }
    }

    /// Returns the current read position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the number of octets left before the limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.pos
    }

    /// Reads a single octet.
    pub fn parse_u8(&mut self) -> Result<u8, WireError> {
        if self.remaining() < 1 {
            return Err(WireError::ShortInput);
        }
        let res = self.buf[self.pos];
        self.pos += 1;
        Ok(res)
    }

    /// Reads a 16 bit integer in network byte order.
    pub fn parse_u16(&mut self) -> Result<u16, WireError> {
        let octets = self.parse_slice(2)?;
        Ok(u16::from_be_bytes([octets[0], octets[1]]))
    }

    /// Reads a 32 bit integer in network byte order.
    pub fn parse_u32(&mut self) -> Result<u32, WireError> {
        let octets = self.parse_slice(4)?;
        Ok(u32::from_be_bytes([
            octets[0], octets[1], octets[2], octets[3],
        ]))
    }

    /// Reads exactly `len` octets.
    pub fn parse_slice(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        if self.remaining() < len {
            return Err(WireError::ShortInput);
        }
        let res = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(res)
    }

    /// Reads everything up to the limit.
    pub fn parse_remaining(&mut self) -> &'a [u8] {
        let res = &self.buf[self.pos..self.limit];
        self.pos = self.limit;
        res
    }

    /// Splits off a sub-parser over the next `len` octets.
    ///
    /// The sub-parser shares the full message buffer, so names inside it
    /// can resolve compression pointers, but its sequential reads are
    /// bounded to the `len` octets. The parent parser advances past them.
    pub fn sub_parser(&mut self, len: usize) -> Result<Parser<'a>, WireError> {
        if self.remaining() < len {
            return Err(WireError::ShortInput);
        }
        let sub = Parser {
            buf: self.buf,
            pos: self.pos,
            limit: self.pos + len,
        };
        self.pos += len;
        Ok(sub)
    }

    /// Reads a possibly compressed domain name.
    ///
    /// Compression pointers must point strictly backwards, i.e., before
    /// the octet the pointer itself occupies, and no offset may be visited
    /// twice while expanding a single name. Together with the 255 octet
    /// name limit this bounds the work done for any input.
    ///
    /// The parser advances by the number of octets the name occupies *at
    /// the current position*: everything up to and including the first
    /// pointer, or up to and including the terminating zero octet if the
    /// name is stored flat.
    pub fn parse_name(&mut self) -> Result<Name, WireError> {
        let mut visited = HashSet::new();
        visited.insert(self.pos);
        let mut wire = Vec::new();
        let mut cursor = self.pos;
        // Set once the first pointer is seen; sequential reads before that
        // honor the parser limit, expanded reads the full buffer.
        let mut resume: Option<usize> = None;
        loop {
            let bound = match resume {
                None => self.limit,
                Some(_) => self.buf.len(),
            };
            if cursor >= bound {
                return Err(WireError::ShortInput);
            }
            let v = self.buf[cursor];
            if v == 0 {
                cursor += 1;
                break;
            }
            match v & 0xC0 {
                0xC0 => {
                    if cursor + 2 > bound {
                        return Err(WireError::InvalidLabel);
                    }
                    let target = usize::from(u16::from_be_bytes([
                        v & 0x3F,
                        self.buf[cursor + 1],
                    ]));
                    if target >= self.buf.len()
                        || target >= cursor
                        || !visited.insert(target)
                    {
                        return Err(WireError::InvalidLabel);
                    }
                    if resume.is_none() {
                        resume = Some(cursor + 2);
                    }
                    cursor = target;
                }
                0x00 => {
                    let len = usize::from(v);
                    if cursor + 1 + len > bound {
                        return Err(WireError::ShortInput);
                    }
                    if wire.len() + 1 + len + 1 > MAX_NAME_LEN {
                        return Err(WireError::NameTooLong);
                    }
                    wire.extend_from_slice(
                        &self.buf[cursor..cursor + 1 + len],
                    );
                    cursor += 1 + len;
                }
                _ => return Err(WireError::InvalidLabel),
            }
        }
        wire.push(0);
        self.pos = resume.unwrap_or(cursor);
        Ok(Name::from_wire_unchecked(wire))
    }
}

//============ Error Types ===================================================

//------------ WireError -----------------------------------------------------

/// An error constructing or interpreting wire format data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WireError {
    /// An attempt was made to read beyond the end of the input.
    ShortInput,

    /// Record data was shorter or longer than its type requires.
    InvalidLen,

    /// A domain name exceeds 255 octets.
    NameTooLong,

    /// A single label exceeds 63 octets.
    LabelTooLong,

    /// A label is malformed: a bad length octet, an empty interior label,
    /// or a compression pointer that is truncated, out of range, forward,
    /// or part of a loop.
    InvalidLabel,

    /// The record type has no native representation for the operation.
    NotSupported(Rtype),

    /// The data was well-formed on the octet level but violated the
    /// message format in the way described.
    Form(&'static str),
}

//--- Display and Error

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WireError::ShortInput => f.write_str("unexpected end of input"),
            WireError::InvalidLen => f.write_str("invalid data length"),
            WireError::NameTooLong => f.write_str("name is too long"),
            WireError::LabelTooLong => f.write_str("label is too long"),
            WireError::InvalidLabel => f.write_str("label is invalid"),
            WireError::NotSupported(rtype) => {
                write!(f, "record type {} is not supported", rtype)
            }
            WireError::Form(msg) => f.write_str(msg),
        }
    }
}

impl error::Error for WireError {}

//============ Test ==========================================================
