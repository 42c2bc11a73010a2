//! DNS messages.

use super::header::Flags;
use super::iana::Rtype;
use super::name::Name;
use super::opt::Edns;
use super::question::Question;
use super::record::Record;
use super::wire::{Composer, Parser, WireError};
use crate::rdata::RData;
use core::fmt;
use rand::Rng;

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// A message is the unit of the DNS wire protocol: a header followed by
/// the question, answer, authority, and additional sections. Messages are
/// decoded with [`from_wire`][Self::from_wire] and encoded with
/// [`to_wire`][Self::to_wire]; a decoded message is plain data and safe
/// to share between threads.
///
/// If the message carries EDNS, the OPT pseudo record is not kept in the
/// additional section; its content is available as [`edns`][Self::edns]
/// instead and the record is recreated during encoding.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    /// The transaction ID.
    pub id: u16,

    /// The header flags.
    pub flags: Flags,

    /// The question section.
    pub question: Vec<Question>,

    /// The answer section.
    pub answer: Vec<Record>,

    /// The authority section.
    pub authority: Vec<Record>,

    /// The additional section, without any OPT record.
    pub additional: Vec<Record>,

    /// The EDNS attributes, if the message carries an OPT record.
    pub edns: Option<Edns>,
}

impl Message {
    /// Creates an empty message.
    pub fn new() -> Self {
        Message::default()
    }

    /// Creates a query for the given name and type.
    ///
    /// The transaction ID is drawn from the caller's random number
    /// generator so that tests can use a deterministic source. The RD bit
    /// is set, matching what stub clients send.
    pub fn query<R: Rng>(rng: &mut R, qname: Name, qtype: Rtype) -> Self {
        let mut msg = Message::new();
        msg.id = rng.gen();
        msg.flags.set_rd(true);
        msg.question.push(Question::new(qname, qtype));
        msg
    }

    /// Decodes a message from its wire format.
    ///
    /// Decoding is fail-fast: the first violation of the message format
    /// aborts with an error. Stray octets after the last record declared
    /// by the header counts are ignored.
    pub fn from_wire(buf: &[u8]) -> Result<Self, WireError> {
        let mut parser = Parser::new(buf);
        let mut msg = Message::new();
        msg.id = parser.parse_u16()?;
        msg.flags = Flags::from_u16(parser.parse_u16()?);
        let qdcount = parser.parse_u16()?;
        let ancount = parser.parse_u16()?;
        let nscount = parser.parse_u16()?;
        let arcount = parser.parse_u16()?;

        for _ in 0..qdcount {
            msg.question.push(Question::parse(&mut parser)?);
        }
        for _ in 0..ancount {
            msg.answer.push(Record::parse(&mut parser)?);
        }
        for _ in 0..nscount {
            msg.authority.push(Record::parse(&mut parser)?);
        }
        for _ in 0..arcount {
            let record = Record::parse(&mut parser)?;
            if let RData::Opt(opt) = record.data {
                if msg.edns.is_some() {
                    return Err(WireError::Form("more than one OPT record"));
                }
                msg.edns = Some(Edns::from_opt_record(
                    record.class.to_int(),
                    record.ttl,
                    opt,
                ));
            } else {
                msg.additional.push(record);
            }
        }
        Ok(msg)
    }

    /// Encodes the message into wire format.
    ///
    /// The reserved Z bits of the flags field are cleared on the way out.
    /// If the message carries EDNS, an OPT record is appended to the
    /// additional section.
    pub fn to_wire(&self) -> Result<Vec<u8>, WireError> {
        let mut composer = Composer::new();
        composer.append_u16(self.id);
        composer.append_u16(self.flags.sanitized().to_u16());
        let arcount =
            self.additional.len() + usize::from(self.edns.is_some());
        composer.append_u16(section_count(self.question.len())?);
        composer.append_u16(section_count(self.answer.len())?);
        composer.append_u16(section_count(self.authority.len())?);
        composer.append_u16(section_count(arcount)?);

        for question in &self.question {
            question.compose(&mut composer);
        }
        for record in &self.answer {
            record.compose(&mut composer)?;
        }
        for record in &self.authority {
            record.compose(&mut composer)?;
        }
        for record in &self.additional {
            record.compose(&mut composer)?;
        }
        if let Some(edns) = &self.edns {
            edns.compose_opt_record(&mut composer)?;
        }
        Ok(composer.finish())
    }
}

/// Converts a section length into a header count field.
fn section_count(len: usize) -> Result<u16, WireError> {
    u16::try_from(len).map_err(|_| WireError::Form("section too long"))
}

//--- Display

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ID: {} {}", self.id, self.flags)?;
        if !self.question.is_empty() {
            f.write_str(" QD:")?;
            for q in &self.question {
                write!(f, " {}", q)?;
            }
        }
        for (label, records) in [
            ("AN", &self.answer),
            ("NS", &self.authority),
            ("AR", &self.additional),
        ] {
            if !records.is_empty() {
                write!(f, " {}:", label)?;
                for r in records {
                    write!(f, " {}", r)?;
                }
            }
        }
        if let Some(edns) = &self.edns {
            write!(f, " EDNS: {}", edns)?;
        }
        Ok(())
    }
}

//============ Test ==========================================================
