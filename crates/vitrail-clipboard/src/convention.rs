// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform text conventions for clipboard data.
//!
//! Each platform pairs a preferred MIME type with a text encoding:
//! Windows clipboards speak UTF-16 little-endian, Linux clipboards carry
//! UTF-8 with an explicit charset parameter, and everything else gets
//! plain `text/plain` UTF-8. The pair is computed once per clipboard
//! instance by a pure function of the platform.

use vitrail_core::types::Platform;

/// Generic MIME type used when the backend does not advertise the
/// platform's preferred one.
pub const FALLBACK_MIME: &str = "text/plain";

/// Text encoding used on the clipboard wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
}

impl TextEncoding {
    /// Encode a string into clipboard bytes.
    pub fn encode(&self, data: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => data.as_bytes().to_vec(),
            TextEncoding::Utf16Le => data
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect(),
        }
    }

    /// Decode clipboard bytes into a string, replacing invalid sequences
    /// rather than failing -- clipboard content from other processes is
    /// not trusted to be well-formed.
    pub fn decode_lossy(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Utf16Le => {
                // A trailing odd byte is dropped; it cannot be part of
                // any UTF-16 code unit.
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
        }
    }
}

/// A configured (MIME type, encoding) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convention {
    pub mime_type: &'static str,
    pub encoding: TextEncoding,
}

impl Convention {
    /// Compute the convention for a platform.
    ///
    /// Three variants exist: the Windows UTF-16-LE convention, the Linux
    /// UTF-8-with-charset convention, and the default UTF-8 convention
    /// for everything else.
    pub fn configure(platform: Platform) -> Convention {
        match platform {
            Platform::Windows => Convention {
                mime_type: "text/plain;charset=utf-8",
                encoding: TextEncoding::Utf16Le,
            },
            Platform::Linux => Convention {
                mime_type: "text/plain;charset=utf-8",
                encoding: TextEncoding::Utf8,
            },
            _ => Convention {
                mime_type: "text/plain",
                encoding: TextEncoding::Utf8,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_platform_variants() {
        let windows = Convention::configure(Platform::Windows);
        assert_eq!(windows.mime_type, "text/plain;charset=utf-8");
        assert_eq!(windows.encoding, TextEncoding::Utf16Le);

        let linux = Convention::configure(Platform::Linux);
        assert_eq!(linux.mime_type, "text/plain;charset=utf-8");
        assert_eq!(linux.encoding, TextEncoding::Utf8);

        for platform in [Platform::MacOs, Platform::Android, Platform::Other] {
            let convention = Convention::configure(platform);
            assert_eq!(convention.mime_type, "text/plain");
            assert_eq!(convention.encoding, TextEncoding::Utf8);
        }
    }

    #[test]
    fn utf8_round_trip() {
        let encoding = TextEncoding::Utf8;
        let bytes = encoding.encode("héllo wörld");
        assert_eq!(encoding.decode_lossy(&bytes), "héllo wörld");
    }

    #[test]
    fn utf16le_round_trip() {
        let encoding = TextEncoding::Utf16Le;
        let bytes = encoding.encode("hello");
        // Each BMP character is exactly one little-endian code unit.
        assert_eq!(bytes.len(), 10);
        assert_eq!(bytes[0], b'h');
        assert_eq!(bytes[1], 0);
        assert_eq!(encoding.decode_lossy(&bytes), "hello");
    }

    #[test]
    fn utf16le_round_trips_surrogate_pairs() {
        let encoding = TextEncoding::Utf16Le;
        let bytes = encoding.encode("🎨");
        assert_eq!(bytes.len(), 4);
        assert_eq!(encoding.decode_lossy(&bytes), "🎨");
    }

    #[test]
    fn utf16le_decode_drops_trailing_odd_byte() {
        let encoding = TextEncoding::Utf16Le;
        let mut bytes = encoding.encode("ab");
        bytes.push(0x41);
        assert_eq!(encoding.decode_lossy(&bytes), "ab");
    }

    #[test]
    fn utf8_decode_is_lossy_not_fatal() {
        let encoding = TextEncoding::Utf8;
        let decoded = encoding.decode_lossy(&[b'o', b'k', 0xFF, 0xFE]);
        assert!(decoded.starts_with("ok"));
    }
}
