//! Domain names.
//!
//! The one type of this module, [`Name`], is an absolute domain name with
//! its invariants enforced at construction: no label is empty or longer
//! than 63 octets and the whole name fits the 255 octet wire-format limit.
//! Internally a name is kept in uncompressed wire format, i.e., a sequence
//! of length-prefixed labels terminated by the zero octet of the root
//! label. This makes suffix walking for compression, canonical
//! serialization, and case-insensitive comparison simple octet operations.
//!
//! Names compare and hash without regard to ASCII case, as required both
//! by the DNS itself and by the label compression map.

use super::wire::{WireError, MAX_LABEL_LEN, MAX_NAME_LEN};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

//------------ Name ----------------------------------------------------------

/// An absolute domain name.
#[derive(Clone)]
pub struct Name {
    /// The name in uncompressed wire format, including the root label.
    wire: Vec<u8>,
}

impl Name {
    /// Returns the root name.
    pub fn root() -> Self {
        Name { wire: vec![0] }
    }

    /// Creates a name from wire-format octets known to be valid.
    ///
    /// Only used by the name parser which enforces the invariants itself.
    pub(crate) fn from_wire_unchecked(wire: Vec<u8>) -> Self {
        Name { wire }
    }

    /// Returns the uncompressed wire format of the name.
    pub fn as_wire(&self) -> &[u8] {
        &self.wire
    }

    /// Returns the length of the name in wire format.
    pub fn wire_len(&self) -> usize {
        self.wire.len()
    }

    /// Returns whether this is the root name.
    pub fn is_root(&self) -> bool {
        self.wire.len() == 1
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The root label is not included, so the iterator is empty for the
    /// root name.
    pub fn labels(&self) -> Labels<'_> {
        Labels { wire: &self.wire }
    }

    /// Returns the number of labels for an RRSIG record.
    ///
    /// Per RFC 4034, section 3.1.3, neither the root label nor a leading
    /// `*` wildcard label is counted.
    pub fn rrsig_label_count(&self) -> u8 {
        let mut labels = self.labels();
        let mut count = 0u8;
        if let Some(first) = labels.next() {
            if first != b"*" {
                count += 1;
            }
        }
        count + labels.count() as u8
    }

    /// Returns the wire format of the name with `skip` leading labels
    /// removed.
    ///
    /// Passing the total number of labels returns the root.
    pub fn suffix_wire(&self, skip: usize) -> &[u8] {
        let mut offset = 0;
        for _ in 0..skip {
            if self.wire[offset] == 0 {
                break;
            }
            offset += 1 + usize::from(self.wire[offset]);
        }
        &self.wire[offset..]
    }

    /// Appends the canonical form of the name to `out`.
    ///
    /// The canonical form of RFC 4034, section 6.1: uncompressed with all
    /// ASCII letters lowercased.
    pub fn compose_canonical(&self, out: &mut Vec<u8>) {
        out.extend(self.wire.iter().map(u8::to_ascii_lowercase));
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.wire.eq_ignore_ascii_case(&other.wire)
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in &self.wire {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

//--- FromStr

impl FromStr for Name {
    type Err = WireError;

    /// Parses a name from its presentation format.
    ///
    /// The trailing dot of an absolute name may be omitted; relative names
    /// are not a concept of this crate. Interior empty labels are
    /// rejected. The escapes of RFC 1035 presentation format, `\X` and
    /// `\DDD`, are understood.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(Name::root());
        }
        if s.is_empty() {
            return Err(WireError::InvalidLabel);
        }
        let rest = s.strip_suffix('.').unwrap_or(s);
        let mut wire = Vec::with_capacity(rest.len() + 2);
        let mut label = Vec::new();
        let mut bytes = rest.bytes();
        loop {
            let b = bytes.next();
            match b {
                Some(b'.') | None => {
                    if label.is_empty() {
                        tracing::debug!(name = s, "empty label in name");
                        return Err(WireError::InvalidLabel);
                    }
                    if label.len() > MAX_LABEL_LEN {
                        return Err(WireError::LabelTooLong);
                    }
                    wire.push(label.len() as u8);
                    wire.append(&mut label);
                    if b.is_none() {
                        break;
                    }
                }
                Some(b'\\') => match bytes.next() {
                    Some(d0 @ b'0'..=b'9') => {
                        let (d1, d2) = match (bytes.next(), bytes.next()) {
                            (Some(d1), Some(d2))
                                if d1.is_ascii_digit()
                                    && d2.is_ascii_digit() =>
                            {
                                (d1, d2)
                            }
                            _ => return Err(WireError::InvalidLabel),
                        };
                        let value = u32::from(d0 - b'0') * 100
                            + u32::from(d1 - b'0') * 10
                            + u32::from(d2 - b'0');
                        if value > 255 {
                            return Err(WireError::InvalidLabel);
                        }
                        label.push(value as u8);
                    }
                    Some(c) => label.push(c),
                    None => return Err(WireError::InvalidLabel),
                },
                Some(c) => label.push(c),
            }
        }
        wire.push(0);
        if wire.len() > MAX_NAME_LEN {
            return Err(WireError::NameTooLong);
        }
        Ok(Name { wire })
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    /// Formats the name in presentation format, always with the trailing
    /// dot.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.labels() {
            for &b in label {
                match b {
                    b'.' | b'\\' => write!(f, "\\{}", b as char)?,
                    0x21..=0x7E => write!(f, "{}", b as char)?,
                    _ => write!(f, "\\{:03}", b)?,
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//------------ Labels --------------------------------------------------------

/// An iterator over the labels of a name, root label excluded.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    wire: &'a [u8],
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let len = usize::from(*self.wire.first()?);
        if len == 0 {
            return None;
        }
        let (label, rest) = self.wire[1..].split_at(len);
        self.wire = rest;
        Some(label)
    }
}

//============ Test ==========================================================
