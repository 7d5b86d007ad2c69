//! Byte-order-mark based encoding detection and decoding.

use std::fmt;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

use crate::error::DecodeError;

const BOM: char = '\u{feff}';

/// Text encoding selected from the leading bytes of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    fn encoding(self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => UTF_8,
            TextEncoding::Utf16Le => UTF_16LE,
            TextEncoding::Utf16Be => UTF_16BE,
        }
    }

    /// Length of the byte-order mark consumed before decoding.
    fn bom_len(self) -> usize {
        match self {
            TextEncoding::Utf8 => 0,
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16Be => "UTF-16BE",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded upload text along with the encoding it was read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub encoding: TextEncoding,
    pub text: String,
}

/// Inspects the first two bytes for a UTF-16 byte-order mark.
///
/// Anything else, including a UTF-8 BOM or no BOM at all, is UTF-8.
pub fn detect_encoding(bytes: &[u8]) -> TextEncoding {
    match bytes {
        [0xFF, 0xFE, ..] => TextEncoding::Utf16Le,
        [0xFE, 0xFF, ..] => TextEncoding::Utf16Be,
        _ => TextEncoding::Utf8,
    }
}

/// Decodes an upload to text.
///
/// Malformed sequences are an error rather than being replaced, so a file
/// that is not what its BOM claims aborts the import. A leading BOM
/// character left after decoding is stripped.
pub fn decode(bytes: &[u8]) -> Result<DecodedText, DecodeError> {
    let encoding = detect_encoding(bytes);
    let payload = &bytes[encoding.bom_len()..];
    let decoded = encoding
        .encoding()
        .decode_without_bom_handling_and_without_replacement(payload)
        .ok_or(DecodeError { encoding })?;
    let text = decoded.strip_prefix(BOM).unwrap_or(&*decoded).to_string();

    tracing::debug!(
        encoding = %encoding,
        bytes = bytes.len(),
        chars = text.chars().count(),
        "decoded upload"
    );

    Ok(DecodedText { encoding, text })
}
