// SPDX-License-Identifier: MIT OR Apache-2.0

//! Character encodings used to decode binding files.

use std::io;

/// The character encoding of binding file contents.
///
/// # Examples
///
/// ```
/// use bindenv::domain::Charset;
///
/// assert_eq!(Charset::default(), Charset::Utf8);
/// assert_eq!(Charset::Latin1.decode(&[0x63, 0x61, 0x66, 0xE9]).unwrap(), "café");
/// assert!(Charset::Utf8.decode(&[0xE9]).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Charset {
    /// Strict UTF-8.
    #[default]
    Utf8,
    /// ISO-8859-1, where every byte is one code point.
    Latin1,
}

impl Charset {
    /// Decodes raw bytes into a string.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidData` I/O error if the bytes are not valid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> io::Result<String> {
        match self {
            Charset::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Charset::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}
