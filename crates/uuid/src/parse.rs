//! Strict parser for the canonical hyphenated string form.
//!
//! Parsing runs in two passes over exactly 36 characters. The first pass checks the grammar
//! (hyphens at 8, 13, 18 and 23, hex digits everywhere else). The second decodes the 32 hex
//! digits pairwise into 16 bytes. Nothing is produced unless the first pass accepts the whole
//! input.

use crate::{Uuid, UuidError, UuidResult, UUID_SIZE, UUID_STR_LEN};

/// Character positions that must hold `-` in the canonical form.
pub(crate) const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

fn should_be_hyphen(position: usize) -> bool {
    HYPHEN_POSITIONS.contains(&position)
}

fn validate(input: &[u8]) -> UuidResult<()> {
    if input.len() != UUID_STR_LEN {
        return Err(UuidError::InvalidArgument(format!(
            "UUID string must be {} characters, got {}",
            UUID_STR_LEN,
            input.len()
        )));
    }

    for (i, &c) in input.iter().enumerate() {
        if should_be_hyphen(i) {
            if c != b'-' {
                return Err(UuidError::InvalidArgument(format!(
                    "expected '-' at position {}",
                    i
                )));
            }
            continue;
        }
        if !c.is_ascii_hexdigit() {
            return Err(UuidError::InvalidArgument(format!(
                "expected hex digit at position {}",
                i
            )));
        }
    }
    Ok(())
}

fn decode(input: &[u8]) -> UuidResult<[u8; UUID_SIZE]> {
    let mut out = [0u8; UUID_SIZE];
    let mut out_idx = 0;
    let mut input_idx = 0;

    while input_idx < UUID_STR_LEN {
        if should_be_hyphen(input_idx) {
            input_idx += 1;
            continue;
        }
        hex::decode_to_slice(
            &input[input_idx..input_idx + 2],
            &mut out[out_idx..out_idx + 1],
        )
        .map_err(|e| {
            UuidError::InvalidArgument(format!("invalid hex pair at position {}: {}", input_idx, e))
        })?;
        out_idx += 1;
        input_idx += 2;
    }
    Ok(out)
}

impl Uuid {
    /// Parses the canonical 36-character hyphenated form.
    ///
    /// Hex digits may be upper or lower case. Braces, URNs, the 32-digit simple form and
    /// surrounding whitespace are all rejected. The version and variant bits are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] if the input is not exactly 36 characters, has a
    /// non-hyphen at a hyphen position, or a non-hex character anywhere else.
    pub fn parse_str(input: &str) -> UuidResult<Self> {
        Self::parse_ascii(input.as_bytes())
    }

    /// Like [`Uuid::parse_str`], over raw bytes.
    pub fn parse_ascii(input: &[u8]) -> UuidResult<Self> {
        validate(input)?;
        decode(input).map(Uuid)
    }

    /// Parses an input that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] for `None`, otherwise as [`Uuid::parse_str`].
    pub fn parse_opt(input: Option<&str>) -> UuidResult<Self> {
        match input {
            Some(s) => Self::parse_str(s),
            None => Err(UuidError::InvalidArgument("UUID string is absent".into())),
        }
    }
}
