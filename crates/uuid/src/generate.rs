//! Version 4 (random) and version 5 (SHA-1 name-based) generation.

use crate::value::{
    VARIANT_MASK, VARIANT_OFFSET, VARIANT_POSITION, VERSION_MASK, VERSION_OFFSET,
    VERSION_POSITION,
};
use crate::{Uuid, UUID_SIZE};

#[cfg(feature = "v4")]
use rand::{rngs::OsRng, CryptoRng, RngCore};

#[cfg(feature = "v5")]
use crate::hash::{HashContext, HashError, NameHasher, Sha1Hasher};
#[cfg(feature = "v5")]
use crate::{UuidError, UuidResult};

/// RFC 9562 variant, binary `10`.
const RFC_VARIANT: u8 = 0b10;

#[cfg(feature = "v4")]
const V4_VERSION: u8 = 4;
#[cfg(feature = "v5")]
const V5_VERSION: u8 = 5;

/// Overwrites the version nibble and variant bits, leaving every other bit as it was.
fn stamp_version_and_variant(bytes: &mut [u8; UUID_SIZE], version: u8) {
    bytes[VERSION_POSITION] &= !VERSION_MASK;
    bytes[VARIANT_POSITION] &= !VARIANT_MASK;
    bytes[VERSION_POSITION] |= version << VERSION_OFFSET;
    bytes[VARIANT_POSITION] |= RFC_VARIANT << VARIANT_OFFSET;
}

/// Errors after setup mean the running context refused its input.
#[cfg(feature = "v5")]
fn rejected(err: HashError) -> UuidError {
    UuidError::InvalidArgument(err.to_string())
}

impl Uuid {
    /// Generates a random (version 4) UUID from the operating system's CSPRNG.
    #[cfg(feature = "v4")]
    pub fn new_v4() -> Self {
        Self::new_v4_with(&mut OsRng)
    }

    /// Generates a random (version 4) UUID from the given cryptographically secure RNG.
    ///
    /// Draws exactly 16 bytes from `rng`.
    #[cfg(feature = "v4")]
    pub fn new_v4_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; UUID_SIZE];
        rng.fill_bytes(&mut bytes);
        stamp_version_and_variant(&mut bytes, V4_VERSION);
        Uuid(bytes)
    }

    /// Generates a name-based (version 5) UUID: SHA-1 over the namespace bytes followed by
    /// `data`, truncated to 16 bytes.
    ///
    /// The result depends only on `namespace` and `data`.
    ///
    /// # Errors
    ///
    /// None with the built-in SHA-1; see [`Uuid::new_v5_with`] for the error classification
    /// of other hashers.
    #[cfg(feature = "v5")]
    pub fn new_v5(namespace: &Uuid, data: &[u8]) -> UuidResult<Self> {
        Self::new_v5_with(&Sha1Hasher, namespace, data)
    }

    /// Generates a name-based (version 5) UUID using the given SHA-1 implementation.
    ///
    /// # Errors
    ///
    /// Failures from [`NameHasher::setup`] are classified by [`HashError`]:
    /// - [`UuidError::InvalidArgument`] if the hasher rejected its input.
    /// - [`UuidError::OutOfMemory`] if it could not allocate a context.
    /// - [`UuidError::Unsupported`] for any other hasher error.
    ///
    /// Any failure once the context exists (update or finish) is
    /// [`UuidError::InvalidArgument`].
    #[cfg(feature = "v5")]
    pub fn new_v5_with<H: NameHasher + ?Sized>(
        hasher: &H,
        namespace: &Uuid,
        data: &[u8],
    ) -> UuidResult<Self> {
        let mut ctx = hasher.setup()?;
        ctx.update(namespace.as_bytes()).map_err(rejected)?;
        ctx.update(data).map_err(rejected)?;
        let digest = ctx.finish().map_err(rejected)?;

        let mut bytes = [0u8; UUID_SIZE];
        bytes.copy_from_slice(&digest[..UUID_SIZE]);
        stamp_version_and_variant(&mut bytes, V5_VERSION);
        Ok(Uuid(bytes))
    }
}
