//! RFC 9562 UUID codec.
//!
//! A UUID is a fixed 16-byte value. This crate produces such values, reads them back from text and
//! raw bytes, and writes them out again:
//!
//! - **Generation**: random version 4 ([`Uuid::new_v4`]) and SHA-1 name-based version 5
//!   ([`Uuid::new_v5`]).
//! - **Binary import/export**: big-endian (network order) and little-endian (Microsoft COM/GUID
//!   order) 16-byte buffers.
//! - **Parsing**: the canonical hyphenated form only, validated strictly.
//! - **Formatting**: canonical string, standard base64 and URL-safe base64.
//!
//! ## Canonical string form
//! - Length: 36
//! - Hyphens at positions 8, 13, 18 and 23
//! - Hex digits everywhere else; accepted in either case, always written lowercase
//! - Example: `44b35f73-cfbd-43b4-8fef-ca7baea1375f`
//!
//! Parsing does not look at the version or variant bits. Any well-formed string is accepted,
//! including versions this crate never generates.
//!
//! ## Base64 forms
//! - Standard (RFC 4648 section 4): 24 characters, padded, e.g. `RLNfc8+9Q7SP78p7rqE3Xw==`
//! - URL and filename safe (RFC 4648 section 5): 22 characters, unpadded, e.g.
//!   `RLNfc8-9Q7SP78p7rqE3Xw`
//!
//! ## Example
//! ```
//! use rfc_uuid::Uuid;
//!
//! # #[cfg(not(feature = "v5"))]
//! # fn main() {}
//! # #[cfg(feature = "v5")]
//! # fn main() -> Result<(), rfc_uuid::UuidError> {
//! let namespace = Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
//! let uuid = Uuid::new_v5(&namespace, b"www.example.com")?;
//! assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//! - `v4` (default): random generation, pulls in `rand`.
//! - `v5` (default): name-based generation, pulls in `sha1`.
//! - `base64` (default): base64 and base64url output, pulls in `base64`.
//! - `serde` (default): (de)serialises [`Uuid`] as its canonical string.

mod binary;
mod format;
mod parse;
mod value;

#[cfg(any(feature = "v4", feature = "v5"))]
mod generate;
#[cfg(feature = "v5")]
pub mod hash;

pub use value::Uuid;

/// Number of bytes in the binary representation of a UUID.
pub const UUID_SIZE: usize = 16;

/// Length of the canonical string representation.
pub const UUID_STR_LEN: usize = 36;

/// Length of the standard base64 representation (padded).
pub const UUID_BASE64_LEN: usize = 24;

/// Length of the URL and filename safe base64 representation (unpadded).
pub const UUID_BASE64URL_LEN: usize = 22;

/// Classification of a [`UuidError`], without the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfMemory,
    Unsupported,
}

/// Error type for UUID operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// Malformed, absent or wrong-sized input or output buffer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The hash primitive could not allocate its working state.
    #[error("out of memory: {0}")]
    OutOfMemory(String),
    /// The hash primitive reported an error this crate does not recognise.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl UuidError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UuidError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            UuidError::OutOfMemory(_) => ErrorKind::OutOfMemory,
            UuidError::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
