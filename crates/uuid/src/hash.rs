//! SHA-1 seam for name-based (version 5) generation.
//!
//! [`Uuid::new_v5`](crate::Uuid::new_v5) drives a [`NameHasher`] through
//! `setup → update → update → finish`. The default [`Sha1Hasher`] wraps the `sha1` crate and never
//! fails. Other implementations (hardware engines, test doubles) may fail at any stage with a
//! [`HashError`]. A failure in `setup` is classified into a [`UuidError`] by the `From` impl
//! below; a failure once the context exists always means the input was rejected.
//!
//! The hash context is an owned value. It is dropped, and so released, on every path out of the
//! generator, including early error returns.

use crate::UuidError;
use sha1::{Digest, Sha1};

/// Length of a SHA-1 digest in bytes.
pub const SHA1_DIGEST_LEN: usize = 20;

/// Failure reported by a hash primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// The primitive rejected its input.
    #[error("hash primitive rejected its input")]
    BadInput,
    /// The primitive could not allocate its working context.
    #[error("hash primitive could not allocate its context")]
    AllocFailed,
    /// Any other primitive-specific error code.
    #[error("hash primitive failed with code {0}")]
    Other(i32),
}

impl From<HashError> for UuidError {
    fn from(err: HashError) -> Self {
        match err {
            HashError::BadInput => UuidError::InvalidArgument(err.to_string()),
            HashError::AllocFailed => UuidError::OutOfMemory(err.to_string()),
            HashError::Other(_) => UuidError::Unsupported(err.to_string()),
        }
    }
}

/// Produces SHA-1 contexts.
pub trait NameHasher {
    type Context: HashContext;

    /// Allocates and starts a fresh context.
    fn setup(&self) -> Result<Self::Context, HashError>;
}

/// A running SHA-1 computation. Dropping it releases it.
pub trait HashContext {
    fn update(&mut self, data: &[u8]) -> Result<(), HashError>;

    /// Consumes the context and returns the 20-byte digest.
    fn finish(self) -> Result<[u8; SHA1_DIGEST_LEN], HashError>;
}

/// SHA-1 from the RustCrypto `sha1` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1Hasher;

/// Context for [`Sha1Hasher`].
#[derive(Clone)]
pub struct Sha1Context(Sha1);

impl NameHasher for Sha1Hasher {
    type Context = Sha1Context;

    fn setup(&self) -> Result<Sha1Context, HashError> {
        Ok(Sha1Context(Sha1::new()))
    }
}

impl HashContext for Sha1Context {
    fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        self.0.update(data);
        Ok(())
    }

    fn finish(self) -> Result<[u8; SHA1_DIGEST_LEN], HashError> {
        Ok(self.0.finalize().into())
    }
}
