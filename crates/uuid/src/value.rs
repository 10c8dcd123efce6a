//! The UUID value type.

use crate::{UuidError, UuidResult, UUID_SIZE};
use std::{fmt, str::FromStr};

/// Byte holding the version in its high nibble.
pub(crate) const VERSION_POSITION: usize = 6;
pub(crate) const VERSION_OFFSET: u8 = 4;
pub(crate) const VERSION_MASK: u8 = 0xF0;

/// Byte holding the variant in its top two bits.
pub(crate) const VARIANT_POSITION: usize = 8;
pub(crate) const VARIANT_OFFSET: u8 = 6;
pub(crate) const VARIANT_MASK: u8 = 0xC0;

/// A UUID: exactly 16 bytes, big-endian field order.
///
/// A `Uuid` has no identity beyond its bytes. It is created by a single producing operation
/// (generation, binary import or parsing) and never changes afterwards; copies are plain byte
/// copies.
///
/// Equality is byte equality. No ordering is defined.
///
/// # Construction
/// - [`Uuid::new_v4`] / [`Uuid::new_v5`] generate a fresh value.
/// - [`Uuid::from_bytes`] / [`Uuid::from_slice`] / [`Uuid::from_slice_le`] import raw bytes.
/// - [`Uuid::parse_str`] parses the canonical hyphenated form.
///
/// # Display format
/// `Display` writes the canonical lowercase hyphenated form, e.g.
/// `44b35f73-cfbd-43b4-8fef-ca7baea1375f`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uuid(pub(crate) [u8; UUID_SIZE]);

impl Uuid {
    /// The nil UUID, all bits zero.
    pub const NIL: Uuid = Uuid([0x00; UUID_SIZE]);

    /// The max UUID, all bits one.
    pub const MAX: Uuid = Uuid([0xFF; UUID_SIZE]);

    /// Namespace for fully qualified domain names (`6ba7b810-9dad-11d1-80b4-00c04fd430c8`).
    pub const NAMESPACE_DNS: Uuid = Uuid([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for URLs (`6ba7b811-9dad-11d1-80b4-00c04fd430c8`).
    pub const NAMESPACE_URL: Uuid = Uuid([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for ISO OIDs (`6ba7b812-9dad-11d1-80b4-00c04fd430c8`).
    pub const NAMESPACE_OID: Uuid = Uuid([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for X.500 distinguished names (`6ba7b814-9dad-11d1-80b4-00c04fd430c8`).
    pub const NAMESPACE_X500: Uuid = Uuid([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns the raw bytes in big-endian order.
    pub const fn as_bytes(&self) -> &[u8; UUID_SIZE] {
        &self.0
    }

    /// Returns the 4-bit version field (high nibble of byte 6).
    ///
    /// This is a plain bit read; parsed or imported values may carry any version.
    pub const fn version(&self) -> u8 {
        (self.0[VERSION_POSITION] & VERSION_MASK) >> VERSION_OFFSET
    }

    /// Returns the 2-bit variant field (top two bits of byte 8).
    ///
    /// `0b10` for every UUID this crate generates.
    pub const fn variant(&self) -> u8 {
        (self.0[VARIANT_POSITION] & VARIANT_MASK) >> VARIANT_OFFSET
    }

    /// Returns true if every byte is zero.
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self)
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Parses the canonical hyphenated form.
    ///
    /// This is equivalent to calling [`Uuid::parse_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
    }
}

impl From<[u8; UUID_SIZE]> for Uuid {
    fn from(bytes: [u8; UUID_SIZE]) -> Self {
        Uuid::from_bytes(bytes)
    }
}

impl From<Uuid> for [u8; UUID_SIZE] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = UuidError;

    fn try_from(data: &[u8]) -> UuidResult<Self> {
        Uuid::from_slice(data)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Uuid;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct UuidVisitor;

    impl<'de> Visitor<'de> for UuidVisitor {
        type Value = Uuid;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a canonical hyphenated UUID string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Uuid, E> {
            Uuid::parse_str(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(UuidVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_namespace_constants_match_rfc() {
        assert_eq!(
            Uuid::NAMESPACE_DNS.to_string(),
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Uuid::NAMESPACE_URL.to_string(),
            "6ba7b811-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Uuid::NAMESPACE_OID.to_string(),
            "6ba7b812-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Uuid::NAMESPACE_X500.to_string(),
            "6ba7b814-9dad-11d1-80b4-00c04fd430c8"
        );
    }

    #[test]
    fn test_namespace_constants_match_uuid_crate() {
        assert_eq!(
            Uuid::NAMESPACE_DNS.as_bytes(),
            uuid::Uuid::NAMESPACE_DNS.as_bytes()
        );
        assert_eq!(
            Uuid::NAMESPACE_URL.as_bytes(),
            uuid::Uuid::NAMESPACE_URL.as_bytes()
        );
        assert_eq!(
            Uuid::NAMESPACE_OID.as_bytes(),
            uuid::Uuid::NAMESPACE_OID.as_bytes()
        );
        assert_eq!(
            Uuid::NAMESPACE_X500.as_bytes(),
            uuid::Uuid::NAMESPACE_X500.as_bytes()
        );
    }

    #[test]
    fn test_nil_and_max() {
        assert!(Uuid::NIL.is_nil());
        assert!(!Uuid::MAX.is_nil());
        assert_eq!(Uuid::default(), Uuid::NIL);
        assert_eq!(
            Uuid::MAX.to_string(),
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    #[test]
    fn test_version_and_variant_accessors() {
        let uuid = Uuid::parse_str("44b35f73-cfbd-43b4-8fef-ca7baea1375f").unwrap();
        assert_eq!(uuid.version(), 4);
        assert_eq!(uuid.variant(), 0b10);

        assert_eq!(Uuid::NAMESPACE_DNS.version(), 1);
        assert_eq!(Uuid::NIL.version(), 0);
        assert_eq!(Uuid::MAX.variant(), 0b11);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Uuid::NAMESPACE_DNS;
        let copy = original;

        assert_eq!(original, copy);
        assert_eq!(original.as_bytes(), copy.as_bytes());
    }

    #[test]
    fn test_equality_is_byte_equality() {
        let a = Uuid::from_bytes([1; 16]);
        let mut bytes = [1; 16];
        bytes[15] = 2;
        let b = Uuid::from_bytes(bytes);

        assert_ne!(a, b);
        assert_eq!(a, Uuid::from_bytes([1; 16]));
    }

    #[test]
    fn test_display_and_debug() {
        let uuid = Uuid::NAMESPACE_DNS;

        assert_eq!(format!("{}", uuid), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(
            format!("{:?}", uuid),
            "Uuid(6ba7b810-9dad-11d1-80b4-00c04fd430c8)"
        );
    }

    #[test]
    fn test_from_str_valid() {
        let result: Result<Uuid, _> = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse();

        assert_eq!(result.unwrap(), Uuid::NAMESPACE_DNS);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<Uuid, _> = "6ba7b8109dad11d180b400c04fd430c8".parse();

        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_array_conversions() {
        let bytes = *Uuid::NAMESPACE_URL.as_bytes();
        let uuid = Uuid::from(bytes);
        let back: [u8; 16] = uuid.into();

        assert_eq!(back, bytes);
        assert_eq!(uuid.as_ref(), &bytes[..]);
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = Uuid::NAMESPACE_OID.as_bytes().to_vec();

        assert_eq!(Uuid::try_from(&bytes[..]).unwrap(), Uuid::NAMESPACE_OID);
        assert!(Uuid::try_from(&bytes[..15]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let uuid = Uuid::NAMESPACE_X500;
        let json = serde_json::to_string(&uuid).unwrap();

        assert_eq!(json, "\"6ba7b814-9dad-11d1-80b4-00c04fd430c8\"");
        let back: Uuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uuid);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_non_canonical() {
        let result: Result<Uuid, _> = serde_json::from_str("\"6ba7b8149dad11d180b400c04fd430c8\"");

        assert!(result.is_err());
    }
}
