//! The basic building blocks of the DNS.
//!
//! This module collects everything that is generic over record types: the
//! encode and decode contexts ([`wire`]), domain names ([`name`]), the
//! message header bit-field ([`header`]), questions and resource records,
//! EDNS ([`opt`]), serial numbers ([`serial`]), and the message codec
//! itself ([`message`]).

pub mod charstr;
pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod opt;
pub mod question;
pub mod record;
pub mod serial;
pub mod wire;

pub use self::header::Flags;
pub use self::iana::{Class, DigestAlg, Opcode, Rcode, Rtype, SecAlg};
pub use self::message::Message;
pub use self::name::Name;
pub use self::opt::Edns;
pub use self::question::Question;
pub use self::record::Record;
pub use self::serial::Serial;
pub use self::wire::{Composer, Parser, WireError};
