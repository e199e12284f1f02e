use super::body::ResponseBody;
use crate::network::error::Error;
use alloc::string::String;

/// Decodes the body as UTF-8.
///
/// Decoding is strict: any invalid sequence fails with
/// [`Error::InvalidUtf8`], carrying the length of the valid prefix. Zero
/// padding left by a short read is valid UTF-8 and decodes to NUL
/// characters.
pub fn decode(body: &ResponseBody) -> Result<String, Error> {
    core::str::from_utf8(body.as_bytes())
        .map(String::from)
        .map_err(|e| Error::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
}
