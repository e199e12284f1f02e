use super::mock::{MockConnection, sent_content_length, split_request};
use libpost::network::application::http::{Client, Endpoint, OutgoingRequest, send};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EMPTY_RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n";

fn assert_framed(payload: &[u8], written: &[u8]) {
    let (head, body) = split_request(written);
    assert!(head.is_ascii());
    assert_eq!(sent_content_length(head), payload.len());
    assert_eq!(body, payload);
}

#[test]
fn test_content_length_matches_random_binary_payloads() {
    let mut rng = StdRng::seed_from_u64(0x7572_746c);
    for _ in 0..64 {
        let len = rng.gen_range(0..2048);
        let mut payload = vec![0u8; len];
        rng.fill(&mut payload[..]);

        let (conn, wire) = MockConnection::new(EMPTY_RESPONSE);
        let conn = conn.write_chunk(rng.gen_range(1..64));
        Client::new(conn, Endpoint::DEFAULT).exchange(&payload).unwrap();

        assert_framed(&payload, &wire.borrow().written);
    }
}

#[test]
fn test_payload_with_crlf_and_high_bytes_is_untouched() {
    let payload = b"\r\n\r\n\x00\xff\xc3\x28\x80 not text";
    let (conn, wire) = MockConnection::new(EMPTY_RESPONSE);
    Client::new(conn, Endpoint::DEFAULT).exchange(payload).unwrap();
    let wire = wire.borrow();
    // The first blank line belongs to the head, so the body is whatever follows it.
    assert_framed(payload, &wire.written);
}

#[test]
fn test_send_writes_head_then_body_with_two_flushes() {
    let (mut conn, wire) = MockConnection::new(b"");
    let request = OutgoingRequest {
        path: "/p",
        host: "h",
        body: b"\x01\x02",
    };
    send(&request, &mut conn).unwrap();
    let wire = wire.borrow();
    assert_eq!(wire.written, b"POST /p HTTP/1.1\r\nHost: h\r\nContent-Length: 2\r\n\r\n\x01\x02");
    assert_eq!(wire.flushes, 2);
    assert!(!wire.closed);
}

#[test]
fn test_head_is_rendered_without_sending() {
    let request = OutgoingRequest {
        path: "/s.hunt/Turtle.php",
        host: "www.staff.city.ac.uk",
        body: &[0xAA; 300],
    };
    assert_eq!(request.content_length(), 300);
    assert_eq!(
        request.head().unwrap().as_str(),
        "POST /s.hunt/Turtle.php HTTP/1.1\r\nHost: www.staff.city.ac.uk\r\nContent-Length: 300\r\n\r\n"
    );
}
