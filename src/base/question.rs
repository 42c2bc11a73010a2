//! A single question of a DNS message.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{Composer, Parser, WireError};
use core::fmt;

//------------ Question ------------------------------------------------------

/// A question of the question section.
///
/// A question asks for all resource records of a type and class at one
/// domain name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    /// The name being queried.
    pub qname: Name,

    /// The requested record type.
    pub qtype: Rtype,

    /// The requested class.
    pub qclass: Class,
}

impl Question {
    /// Creates a new question for the Internet class.
    pub fn new(qname: Name, qtype: Rtype) -> Self {
        Question {
            qname,
            qtype,
            qclass: Class::IN,
        }
    }

    /// Reads a question off the parser.
    pub fn parse(parser: &mut Parser) -> Result<Self, WireError> {
        Ok(Question {
            qname: parser.parse_name()?,
            qtype: Rtype::from_int(parser.parse_u16()?),
            qclass: Class::from_int(parser.parse_u16()?),
        })
    }

    /// Appends the question to the composer.
    pub fn compose(&self, composer: &mut Composer) {
        composer.append_name(&self.qname);
        composer.append_u16(self.qtype.to_int());
        composer.append_u16(self.qclass.to_int());
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.qname, self.qclass, self.qtype)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let question =
            Question::new("example.com.".parse().unwrap(), Rtype::MX);
        let mut c = Composer::new();
        question.compose(&mut c);
        let buf = c.finish();
        assert_eq!(buf, b"\x07example\x03com\x00\x00\x0F\x00\x01");
        let mut p = Parser::new(&buf);
        assert_eq!(Question::parse(&mut p).unwrap(), question);
    }

    #[test]
    fn display() {
        let question =
            Question::new("google.com.".parse().unwrap(), Rtype::A);
        assert_eq!(question.to_string(), "google.com. IN A");
    }
}
