use super::source::ByteSource;
use crate::network::Read;
use crate::network::error::Error;

/// Maximum length of a single response header line, in bytes of decoded text.
pub const MAX_HEADER_LINE_LEN: usize = 1024;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// One header line with its terminating CR/LF removed.
pub type HeaderLine = heapless::String<MAX_HEADER_LINE_LEN>;

/// Outcome of scanning one header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannedLine {
    /// A non-empty line.
    Line(HeaderLine),
    /// A line longer than [`MAX_HEADER_LINE_LEN`]. Holds the first part of
    /// the line; the rest was read up to the CR and dropped.
    Truncated(HeaderLine),
    /// The empty line that ends the header section.
    EndOfHeaders,
    /// The stream ended before any byte of a new line was read.
    StreamClosed,
}

/// How the byte following a CR is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// The byte after CR is consumed without looking at it.
    #[default]
    Lenient,
    /// The byte after CR must be LF; anything else (including end of
    /// stream) is [`Error::MalformedLineEnding`].
    Strict,
}

/// Splits the response header section into lines.
///
/// Lines end at CR. The scanner then consumes exactly one more byte,
/// normally the LF. If the stream ends in the middle of a line, the bytes
/// gathered so far are returned as a line instead of an error.
///
/// Each byte becomes one `char` (ISO-8859-1), so ASCII headers come through
/// unchanged and no byte is merged. Text past [`MAX_HEADER_LINE_LEN`] is
/// consumed but not kept, and the line is reported as
/// [`ScannedLine::Truncated`].
#[derive(Debug)]
pub struct LineScanner<'s, R> {
    source: &'s mut ByteSource<R>,
    line_ending: LineEnding,
}

impl<'s, R: Read> LineScanner<'s, R> {
    /// Creates a scanner reading from `source`. The source stays usable for
    /// the body once the scanner is dropped.
    pub fn new(source: &'s mut ByteSource<R>, line_ending: LineEnding) -> Self {
        Self {
            source,
            line_ending,
        }
    }

    /// Reads the next header line.
    pub fn next_line(&mut self) -> Result<ScannedLine, Error> {
        let Some(first) = self.source.next_byte()? else {
            return Ok(ScannedLine::StreamClosed);
        };

        let mut line = HeaderLine::new();
        let mut truncated = false;
        let mut next = Some(first);
        while let Some(byte) = next {
            if byte == CR {
                let after = self.source.next_byte()?;
                if self.line_ending == LineEnding::Strict && after != Some(LF) {
                    return Err(Error::MalformedLineEnding);
                }
                break;
            }
            if !truncated && line.push(char::from(byte)).is_err() {
                truncated = true;
            }
            next = self.source.next_byte()?;
        }

        if truncated {
            Ok(ScannedLine::Truncated(line))
        } else if line.is_empty() {
            Ok(ScannedLine::EndOfHeaders)
        } else {
            Ok(ScannedLine::Line(line))
        }
    }
}
