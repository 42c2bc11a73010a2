//! End-to-end tests of the message codec against captured wire data.

use dnsmsg::base::iana::{Class, Opcode, Rcode, Rtype};
use dnsmsg::base::{Flags, Message, Question, Record, WireError};
use dnsmsg::rdata::rfc1035::{Mx, SingleName, Soa, Txt, A};
use dnsmsg::rdata::{Aaaa, RData, Srv};
use dnsmsg::utils::base16;

/// A captured query for google.com with an EDNS cookie option.
const QUERY: &str = "236f0120000100000000000106676f6f676c6503636f6d00000100\
                     01000029100000000000000c000a0008773d66c995247430";

/// The response to [`QUERY`], with a compressed answer name.
const RESPONSE: &str = "236f8180000100010000000106676f6f676c6503636f6d000001\
                        0001c00c00010001000000cd0004acd9af6e0000290200000000\
                        000000";

#[test]
fn parse_query_with_edns() {
    let buf = base16::decode(QUERY).unwrap();
    let msg = Message::from_wire(&buf).unwrap();

    assert_eq!(msg.id, 9071);
    assert_eq!(msg.flags.opcode(), Opcode::QUERY);
    assert!(msg.flags.rd());
    assert!(!msg.flags.qr());
    assert_eq!(msg.flags.rcode(), Rcode::NOERROR);

    assert_eq!(msg.question.len(), 1);
    let q = &msg.question[0];
    assert_eq!(q.qname.to_string(), "google.com.");
    assert_eq!(q.qtype, Rtype::A);
    assert_eq!(q.qclass, Class::IN);

    assert!(msg.answer.is_empty());
    assert!(msg.authority.is_empty());
    assert!(msg.additional.is_empty());

    let edns = msg.edns.as_ref().unwrap();
    assert_eq!(edns.udp_payload_size, 4096);
    assert_eq!(edns.version(), 0);
    assert_eq!(edns.options.len(), 1);
    assert_eq!(edns.options[0].code, 10);
    assert_eq!(edns.options[0].data.len(), 8);
}

#[test]
fn parse_response_with_compression() {
    let buf = base16::decode(RESPONSE).unwrap();
    let msg = Message::from_wire(&buf).unwrap();

    assert_eq!(msg.id, 9071);
    assert!(msg.flags.qr() && msg.flags.rd() && msg.flags.ra());

    assert_eq!(msg.answer.len(), 1);
    let answer = &msg.answer[0];
    assert_eq!(answer.owner.to_string(), "google.com.");
    assert_eq!(answer.ttl, 205);
    assert_eq!(
        answer.data,
        RData::A(A::new([172, 217, 175, 110].into()))
    );

    assert_eq!(msg.edns.as_ref().unwrap().udp_payload_size, 512);
}

#[test]
fn reparse_after_reencode() {
    for hex in [QUERY, RESPONSE] {
        let buf = base16::decode(hex).unwrap();
        let once = Message::from_wire(&buf).unwrap();
        let again =
            Message::from_wire(&once.to_wire().unwrap()).unwrap();
        // The captured query carries a nonzero reserved Z bit, which the
        // encoder clears; everything else must survive unchanged.
        let mut expected = once.clone();
        expected.flags = expected.flags.sanitized();
        assert_eq!(again, expected);
    }
}

#[test]
fn compression_pointer_loop_is_rejected() {
    // QDCOUNT=1, and the question name points at itself.
    let mut buf =
        b"\x00\x01\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00".to_vec();
    buf.extend_from_slice(b"\xC0\x0C");
    buf.extend_from_slice(b"\x00\x01\x00\x01");
    assert_eq!(Message::from_wire(&buf), Err(WireError::InvalidLabel));
}

#[test]
fn forward_compression_pointer_is_rejected() {
    // The question name points forward to offset 0x20 where a perfectly
    // valid label lives; it must still be rejected.
    let mut buf =
        b"\x00\x01\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00".to_vec();
    buf.extend_from_slice(b"\xC0\x20");
    buf.extend_from_slice(b"\x00\x01\x00\x01");
    while buf.len() < 0x20 {
        buf.push(0);
    }
    buf.extend_from_slice(b"\x03www\x00");
    assert_eq!(Message::from_wire(&buf), Err(WireError::InvalidLabel));
}

#[test]
fn truncated_rdata_is_rejected() {
    // An A record claiming five octets of RDATA but carrying four is cut
    // short by the message end.
    let mut buf =
        b"\x00\x01\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00".to_vec();
    buf.extend_from_slice(b"\x03www\x00\x00\x01\x00\x01\x00\x00\x00\x3C");
    buf.extend_from_slice(b"\x00\x05\x7F\x00\x00\x01");
    assert_eq!(Message::from_wire(&buf), Err(WireError::ShortInput));
}

fn sample_message() -> Message {
    let mut msg = Message::new();
    msg.id = 4711;
    msg.flags = Flags::from_u16(0x8580);
    msg.question.push(Question::new(
        "example.com.".parse().unwrap(),
        Rtype::ANY,
    ));
    msg.answer.push(Record::new(
        "example.com.".parse().unwrap(),
        3600,
        RData::A(A::new([192, 0, 2, 1].into())),
    ));
    msg.answer.push(Record::new(
        "example.com.".parse().unwrap(),
        3600,
        RData::Aaaa(Aaaa::new("2001:db8::7".parse().unwrap())),
    ));
    msg.answer.push(Record::new(
        "example.com.".parse().unwrap(),
        3600,
        RData::Mx(Mx::new(10, "mail.example.com.".parse().unwrap())),
    ));
    msg.answer.push(Record::new(
        "example.com.".parse().unwrap(),
        3600,
        RData::Txt(Txt::new(b"v=spf1 -all".to_vec())),
    ));
    msg.answer.push(Record::new(
        "_sip._udp.example.com.".parse().unwrap(),
        3600,
        RData::Srv(Srv::new(
            10,
            0,
            5060,
            "sip.example.com.".parse().unwrap(),
        )),
    ));
    msg.authority.push(Record::new(
        "example.com.".parse().unwrap(),
        86400,
        RData::Soa(
            Soa::from_str(
                "ns1.example.com. hostmaster.example.com. \
                 2024010101 7200 3600 1209600 300",
            )
            .unwrap(),
        ),
    ));
    msg.additional.push(Record::new(
        "example.com.".parse().unwrap(),
        3600,
        RData::SingleName(SingleName::new(
            Rtype::NS,
            "ns1.example.com.".parse().unwrap(),
        )),
    ));
    msg
}

#[test]
fn constructed_message_round_trips() {
    let msg = sample_message();
    let wire = msg.to_wire().unwrap();
    let parsed = Message::from_wire(&wire).unwrap();
    assert_eq!(parsed, msg);

    // And byte-for-byte stability on the second pass.
    assert_eq!(parsed.to_wire().unwrap(), wire);
}

#[test]
fn long_txt_round_trips_as_multiple_strings() {
    let mut msg = Message::new();
    let text: Vec<u8> =
        (0..400u16).map(|i| b'a' + (i % 26) as u8).collect();
    msg.answer.push(Record::new(
        "example.com.".parse().unwrap(),
        60,
        RData::Txt(Txt::new(text.clone())),
    ));
    let wire = msg.to_wire().unwrap();
    let parsed = Message::from_wire(&wire).unwrap();
    match &parsed.answer[0].data {
        RData::Txt(txt) => assert_eq!(txt.data, text),
        other => panic!("expected TXT, got {}", other),
    }
}

#[test]
fn unknown_rdata_round_trips() {
    let buf = base16::decode(
        // One answer of type 999 with opaque RDATA.
        "000100000000000100000000\
         037777770003e70001000000010004deadbeef",
    )
    .unwrap();
    let msg = Message::from_wire(&buf).unwrap();
    assert_eq!(msg.answer[0].data.rtype(), Rtype::from_int(999));
    assert_eq!(msg.to_wire().unwrap(), buf);
}

#[test]
fn display_matches_presentation_format() {
    let buf = base16::decode(RESPONSE).unwrap();
    let msg = Message::from_wire(&buf).unwrap();
    assert_eq!(
        msg.to_string(),
        "ID: 9071 QUERY qr rd ra NOERROR QD: google.com. IN A \
         AN: google.com. 205 IN A 172.217.175.110 EDNS: udp=512"
    );
}
