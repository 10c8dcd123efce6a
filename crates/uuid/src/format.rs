//! Text output: canonical string, base64 and base64url.
//!
//! Every `*_into` writer checks the capacity of the caller's buffer before touching it, so a
//! rejected buffer is left exactly as it was. Writers return the number of bytes written.

use crate::{Uuid, UuidError, UuidResult, UUID_SIZE, UUID_STR_LEN};
use std::fmt;

#[cfg(feature = "base64")]
use crate::{UUID_BASE64URL_LEN, UUID_BASE64_LEN};
#[cfg(feature = "base64")]
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Byte ranges of the 8-4-4-4-12 groups, joined by hyphens.
const BYTE_GROUPS: [(usize, usize); 5] = [(0, 4), (4, 6), (6, 8), (8, 10), (10, 16)];

fn check_capacity(out: &[u8], required: usize, what: &str) -> UuidResult<()> {
    if out.len() < required {
        return Err(UuidError::InvalidArgument(format!(
            "{} output buffer needs {} bytes, got {}",
            what,
            required,
            out.len()
        )));
    }
    Ok(())
}

/// Lowercase hex per group, hyphens at 8, 13, 18 and 23.
fn write_canonical(
    bytes: &[u8; UUID_SIZE],
    out: &mut [u8; UUID_STR_LEN],
) -> Result<(), hex::FromHexError> {
    let mut pos = 0;
    for (i, &(start, end)) in BYTE_GROUPS.iter().enumerate() {
        if i > 0 {
            out[pos] = b'-';
            pos += 1;
        }
        let len = (end - start) * 2;
        hex::encode_to_slice(&bytes[start..end], &mut out[pos..pos + len])?;
        pos += len;
    }
    Ok(())
}

impl fmt::Display for Uuid {
    /// Formats the UUID in canonical form (36 characters, lowercase, hyphenated).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; UUID_STR_LEN];
        write_canonical(&self.0, &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl Uuid {
    /// Writes the canonical 36-character form into `out`.
    ///
    /// Only the first [`UUID_STR_LEN`] bytes of `out` are written. Rust strings need no
    /// terminator, so a buffer of exactly that length is enough.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] if `out` is shorter than [`UUID_STR_LEN`]; `out`
    /// is not modified in that case.
    pub fn encode_str_into(&self, out: &mut [u8]) -> UuidResult<usize> {
        check_capacity(out, UUID_STR_LEN, "canonical string")?;
        let mut buf = [0u8; UUID_STR_LEN];
        write_canonical(&self.0, &mut buf).map_err(|e| {
            UuidError::InvalidArgument(format!("canonical encoding failed: {}", e))
        })?;
        out[..UUID_STR_LEN].copy_from_slice(&buf);
        Ok(UUID_STR_LEN)
    }

    /// Returns the standard base64 form: 24 characters, RFC 4648 alphabet, padded.
    #[cfg(feature = "base64")]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    /// Writes the standard base64 form into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] if `out` is shorter than [`UUID_BASE64_LEN`];
    /// `out` is not modified in that case.
    #[cfg(feature = "base64")]
    pub fn encode_base64_into(&self, out: &mut [u8]) -> UuidResult<usize> {
        check_capacity(out, UUID_BASE64_LEN, "base64")?;
        STANDARD
            .encode_slice(self.0, &mut out[..UUID_BASE64_LEN])
            .map_err(|e| UuidError::InvalidArgument(format!("base64 encoding failed: {}", e)))
    }

    /// Returns the URL and filename safe base64 form: 22 characters, `-` and `_` in place of
    /// `+` and `/`, no padding.
    #[cfg(feature = "base64")]
    pub fn to_base64url(&self) -> String {
        self.base64url_bytes().iter().map(|&b| char::from(b)).collect()
    }

    /// Writes the URL and filename safe base64 form into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] if `out` is shorter than [`UUID_BASE64URL_LEN`];
    /// `out` is not modified in that case.
    #[cfg(feature = "base64")]
    pub fn encode_base64url_into(&self, out: &mut [u8]) -> UuidResult<usize> {
        check_capacity(out, UUID_BASE64URL_LEN, "base64url")?;
        out[..UUID_BASE64URL_LEN].copy_from_slice(&self.base64url_bytes());
        Ok(UUID_BASE64URL_LEN)
    }

    /// Standard encoding with the alphabet swapped, cut to 22 characters.
    ///
    /// 16 bytes always encode to 22 significant characters plus `==`, so truncating by length
    /// drops exactly the padding.
    #[cfg(feature = "base64")]
    fn base64url_bytes(&self) -> [u8; UUID_BASE64URL_LEN] {
        let standard = STANDARD.encode(self.0);
        let mut out = [0u8; UUID_BASE64URL_LEN];
        for (dst, src) in out.iter_mut().zip(standard.bytes()) {
            *dst = match src {
                b'+' => b'-',
                b'/' => b'_',
                other => other,
            };
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const SAMPLE: [u8; 16] = [
        0x44, 0xb3, 0x5f, 0x73, 0xcf, 0xbd, 0x43, 0xb4, 0x8f, 0xef, 0xca, 0x7b, 0xae, 0xa1, 0x37,
        0x5f,
    ];

    #[test]
    fn test_to_string_canonical() {
        let uuid = Uuid::from_bytes(SAMPLE);

        assert_eq!(uuid.to_string(), "44b35f73-cfbd-43b4-8fef-ca7baea1375f");
    }

    #[test]
    fn test_to_string_matches_uuid_crate() {
        let samples = [
            SAMPLE,
            [0x00; 16],
            [0xff; 16],
            [
                0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54,
                0x32, 0x10,
            ],
        ];
        for bytes in samples {
            assert_eq!(
                Uuid::from_bytes(bytes).to_string(),
                uuid::Uuid::from_bytes(bytes).hyphenated().to_string()
            );
        }
    }

    #[test]
    fn test_to_string_group_boundaries() {
        let bytes: [u8; 16] = std::array::from_fn(|i| i as u8);

        assert_eq!(
            Uuid::from_bytes(bytes).to_string(),
            "00010203-0405-0607-0809-0a0b0c0d0e0f"
        );
    }

    #[test]
    fn test_to_string_hyphen_positions() {
        let s = Uuid::MAX.to_string();

        assert_eq!(s.len(), UUID_STR_LEN);
        for (i, c) in s.chars().enumerate() {
            if matches!(i, 8 | 13 | 18 | 23) {
                assert_eq!(c, '-', "position {}", i);
            } else {
                assert_eq!(c, 'f', "position {}", i);
            }
        }
    }

    #[test]
    fn test_encode_str_into_exact_buffer() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let mut buf = [0u8; UUID_STR_LEN];

        let written = uuid.encode_str_into(&mut buf).unwrap();
        assert_eq!(written, UUID_STR_LEN);
        assert_eq!(&buf[..], b"44b35f73-cfbd-43b4-8fef-ca7baea1375f");
    }

    #[test]
    fn test_encode_str_into_larger_buffer_leaves_tail() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let mut buf = [b'#'; UUID_STR_LEN + 4];

        let written = uuid.encode_str_into(&mut buf).unwrap();
        assert_eq!(&buf[..written], b"44b35f73-cfbd-43b4-8fef-ca7baea1375f");
        assert_eq!(&buf[UUID_STR_LEN..], b"####");
    }

    #[test]
    fn test_encode_str_into_rejects_undersized_buffer() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let mut buf = [b'#'; UUID_STR_LEN - 1];

        let err = uuid.encode_str_into(&mut buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(buf.iter().all(|&b| b == b'#'));
    }

    #[test]
    fn test_encode_str_into_rejects_empty_buffer() {
        let err = Uuid::NIL.encode_str_into(&mut []).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[cfg(feature = "base64")]
    #[test]
    fn test_to_base64() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let encoded = uuid.to_base64();

        assert_eq!(encoded, "RLNfc8+9Q7SP78p7rqE3Xw==");
        assert_eq!(encoded.len(), UUID_BASE64_LEN);
    }

    #[cfg(feature = "base64")]
    #[test]
    fn test_to_base64url() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let encoded = uuid.to_base64url();

        assert_eq!(encoded, "RLNfc8-9Q7SP78p7rqE3Xw");
        assert_eq!(encoded.len(), UUID_BASE64URL_LEN);
    }

    #[cfg(feature = "base64")]
    #[test]
    fn test_to_base64url_replaces_slash() {
        // 0xff bytes encode to '/' in the standard alphabet
        let encoded = Uuid::MAX.to_base64url();

        assert_eq!(Uuid::MAX.to_base64(), "/////////////////////w==");
        assert_eq!(encoded, "_____________________w");
        assert!(!encoded.contains('='));
    }

    #[cfg(feature = "base64")]
    #[test]
    fn test_base64url_matches_url_safe_engine() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;

        for bytes in [SAMPLE, [0x00; 16], [0xff; 16], [0xfb; 16], [0x3e; 16]] {
            let uuid = Uuid::from_bytes(bytes);
            assert_eq!(uuid.to_base64url(), URL_SAFE_NO_PAD.encode(bytes));
        }
    }

    #[cfg(feature = "base64")]
    #[test]
    fn test_encode_base64_into() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let mut buf = [0u8; UUID_BASE64_LEN];

        let written = uuid.encode_base64_into(&mut buf).unwrap();
        assert_eq!(written, UUID_BASE64_LEN);
        assert_eq!(&buf[..], b"RLNfc8+9Q7SP78p7rqE3Xw==");
    }

    #[cfg(feature = "base64")]
    #[test]
    fn test_encode_base64_into_rejects_undersized_buffer() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let mut buf = [b'#'; UUID_BASE64_LEN - 1];

        let err = uuid.encode_base64_into(&mut buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(buf.iter().all(|&b| b == b'#'));
    }

    #[cfg(feature = "base64")]
    #[test]
    fn test_encode_base64url_into() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let mut buf = [0u8; UUID_BASE64URL_LEN];

        let written = uuid.encode_base64url_into(&mut buf).unwrap();
        assert_eq!(written, UUID_BASE64URL_LEN);
        assert_eq!(&buf[..], b"RLNfc8-9Q7SP78p7rqE3Xw");
    }

    #[cfg(feature = "base64")]
    #[test]
    fn test_encode_base64url_into_rejects_undersized_buffer() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let mut buf = [b'#'; UUID_BASE64URL_LEN - 1];

        let err = uuid.encode_base64url_into(&mut buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(buf.iter().all(|&b| b == b'#'));
    }
}
