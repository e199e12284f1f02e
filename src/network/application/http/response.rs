use super::scanner::{HeaderLine, LineScanner, ScannedLine};
use crate::log::{debug, warning};
use crate::network::Read;
use crate::network::error::Error;

/// Prefix of the only response header that is interpreted. Matched
/// case-sensitively.
pub const CONTENT_LENGTH_PREFIX: &str = "Content-Length: ";

const STATUS_LINE_PREFIX: &str = "HTTP/";

/// What the header section tells us about the body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// First line starting with `HTTP/`, if any. Kept for diagnostics only;
    /// the status code is not interpreted.
    pub status_line: Option<HeaderLine>,
    /// Body length from `Content-Length`, or 0 when the header is absent.
    pub declared_body_length: usize,
}

/// Collects header lines until the blank line or the end of the stream.
///
/// Lines beginning with `Content-Length: ` set the declared body length;
/// if the header repeats, the last one wins. Every other line is skipped,
/// including near misses like `content-length: 5` or `Content-Length:5`.
/// A matching line whose value is not a decimal byte count fails with
/// [`Error::InvalidContentLength`]. Overlong lines are skipped like any
/// other header unless they start with `Content-Length: `, in which case
/// the value cannot be a byte count and the same error is returned.
pub fn parse_headers<R: Read>(scanner: &mut LineScanner<'_, R>) -> Result<ResponseMetadata, Error> {
    let mut meta = ResponseMetadata::default();

    loop {
        let line = match scanner.next_line()? {
            ScannedLine::Line(line) => line,
            ScannedLine::Truncated(line) => {
                if line.starts_with(CONTENT_LENGTH_PREFIX) {
                    return Err(Error::InvalidContentLength);
                }
                debug!("skipping overlong header line");
                continue;
            }
            ScannedLine::EndOfHeaders => break,
            ScannedLine::StreamClosed => {
                warning!("connection closed before end of headers");
                break;
            }
        };

        if let Some(value) = line.strip_prefix(CONTENT_LENGTH_PREFIX) {
            meta.declared_body_length = value
                .parse::<usize>()
                .map_err(|_| Error::InvalidContentLength)?;
        } else if meta.status_line.is_none() && line.starts_with(STATUS_LINE_PREFIX) {
            debug!("status line: {}", line.as_str());
            meta.status_line = Some(line);
        }
    }

    debug!("declared body length: {}", meta.declared_body_length);
    Ok(meta)
}
