use libpost::network::application::http::{
    ByteSource, HeaderLine, LineEnding, LineScanner, ScannedLine, decode, parse_headers, read_body,
};
use libpost::network::error::Error;

fn scan_one(input: &[u8]) -> ScannedLine {
    let mut source = ByteSource::new(input);
    let mut scanner = LineScanner::new(&mut source, LineEnding::Lenient);
    scanner.next_line().unwrap()
}

#[test]
fn test_line_round_trip() {
    for text in ["HTTP/1.1 200 OK", "Content-Length: 13", "X: a:b: c", "~!@#$%^&*()"] {
        let mut encoded = text.as_bytes().to_vec();
        encoded.extend_from_slice(b"\r\n");
        assert_eq!(
            scan_one(&encoded),
            ScannedLine::Line(HeaderLine::try_from(text).unwrap())
        );
    }
}

#[test]
fn test_full_response_thirteen_bytes() {
    let text = "Hello, world!";
    let mut response = b"HTTP/1.1 200 OK\r\nContent-Length: 13\r\n\r\n".to_vec();
    response.extend_from_slice(text.as_bytes());

    let mut source = ByteSource::new(&response[..]);
    let meta = {
        let mut scanner = LineScanner::new(&mut source, LineEnding::Lenient);
        parse_headers(&mut scanner).unwrap()
    };
    assert_eq!(meta.declared_body_length, 13);

    let body = read_body(&mut source, meta.declared_body_length).unwrap();
    assert_eq!(body.len(), 13);
    assert!(body.is_complete());
    assert_eq!(decode(&body).unwrap(), text);
}

#[test]
fn test_no_content_length_gives_empty_body() {
    let response: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nstray";
    let mut source = ByteSource::new(response);
    let meta = {
        let mut scanner = LineScanner::new(&mut source, LineEnding::Lenient);
        parse_headers(&mut scanner).unwrap()
    };
    assert_eq!(meta.declared_body_length, 0);
    let body = read_body(&mut source, meta.declared_body_length).unwrap();
    assert!(body.is_empty());
    assert_eq!(decode(&body).unwrap(), "");
}

#[test]
fn test_stream_closing_after_five_of_thirteen() {
    let response: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 13\r\n\r\nHello";
    let mut source = ByteSource::new(response);
    let meta = {
        let mut scanner = LineScanner::new(&mut source, LineEnding::Lenient);
        parse_headers(&mut scanner).unwrap()
    };
    let body = read_body(&mut source, meta.declared_body_length).unwrap();
    assert_eq!(body.len(), 13);
    assert_eq!(body.received(), 5);
    assert_eq!(&body.as_bytes()[..5], b"Hello");
    assert!(body.as_bytes()[5..].iter().all(|&b| b == 0));
    assert_eq!(source.next_byte(), Ok(None));
}

#[test]
fn test_blank_line_right_after_status_line() {
    let response: &[u8] = b"HTTP/1.1 200 OK\r\n\r\nContent-Length: 13\r\n\r\n";
    let mut source = ByteSource::new(response);
    let mut scanner = LineScanner::new(&mut source, LineEnding::Lenient);
    let meta = parse_headers(&mut scanner).unwrap();
    assert_eq!(meta.declared_body_length, 0);
    assert_eq!(meta.status_line.as_deref(), Some("HTTP/1.1 200 OK"));
    // Header collection stopped at the blank line; the rest is still unread.
    assert!(matches!(scanner.next_line(), Ok(ScannedLine::Line(l)) if l.as_str() == "Content-Length: 13"));
}

#[test]
fn test_scanner_signals_closed_stream_explicitly() {
    assert_eq!(scan_one(b""), ScannedLine::StreamClosed);
    assert_eq!(scan_one(b"\r\n"), ScannedLine::EndOfHeaders);
}

#[test]
fn test_strict_scanner_rejects_bare_cr() {
    let mut source = ByteSource::new(&b"Host: x\rY"[..]);
    let mut scanner = LineScanner::new(&mut source, LineEnding::Strict);
    assert_eq!(scanner.next_line(), Err(Error::MalformedLineEnding));
}
