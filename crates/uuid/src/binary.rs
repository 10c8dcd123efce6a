//! Raw 16-byte import and export.
//!
//! Big-endian buffers are copied as they are. Little-endian buffers follow the Microsoft
//! COM/GUID layout: the first three fields (4, 2 and 2 bytes) are stored byte-reversed and the
//! last 8 bytes are stored as they are.

use crate::{Uuid, UuidError, UuidResult, UUID_SIZE};

fn swap_le_groups(mut bytes: [u8; UUID_SIZE]) -> [u8; UUID_SIZE] {
    bytes[0..4].reverse();
    bytes[4..6].reverse();
    bytes[6..8].reverse();
    bytes
}

fn exact_16(data: &[u8]) -> UuidResult<[u8; UUID_SIZE]> {
    data.try_into().map_err(|_| {
        UuidError::InvalidArgument(format!(
            "UUID buffer must be {} bytes, got {}",
            UUID_SIZE,
            data.len()
        ))
    })
}

impl Uuid {
    /// Creates a UUID from big-endian bytes.
    pub const fn from_bytes(bytes: [u8; UUID_SIZE]) -> Self {
        Uuid(bytes)
    }

    /// Creates a UUID from a big-endian byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] if `data` is not exactly 16 bytes.
    pub fn from_slice(data: &[u8]) -> UuidResult<Self> {
        exact_16(data).map(Uuid)
    }

    /// Creates a UUID from little-endian (COM/GUID) bytes.
    ///
    /// `33221100-5544-7766-8899-aabbccddeeff` in little-endian order is
    /// `00112233-4455-6677-8899-aabbccddeeff`.
    pub fn from_bytes_le(bytes: [u8; UUID_SIZE]) -> Self {
        Uuid(swap_le_groups(bytes))
    }

    /// Creates a UUID from a little-endian (COM/GUID) byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] if `data` is not exactly 16 bytes.
    pub fn from_slice_le(data: &[u8]) -> UuidResult<Self> {
        exact_16(data).map(Self::from_bytes_le)
    }

    /// Returns the big-endian bytes.
    pub const fn to_bytes(&self) -> [u8; UUID_SIZE] {
        self.0
    }

    /// Returns the bytes in little-endian (COM/GUID) order.
    pub fn to_bytes_le(&self) -> [u8; UUID_SIZE] {
        swap_le_groups(self.0)
    }

    /// Copies the big-endian bytes into the start of `out`.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] if `out` is shorter than 16 bytes; `out` is not
    /// modified in that case.
    pub fn write_bytes_into(&self, out: &mut [u8]) -> UuidResult<()> {
        if out.len() < UUID_SIZE {
            return Err(UuidError::InvalidArgument(format!(
                "output buffer needs {} bytes, got {}",
                UUID_SIZE,
                out.len()
            )));
        }
        out[..UUID_SIZE].copy_from_slice(&self.0);
        Ok(())
    }
}
