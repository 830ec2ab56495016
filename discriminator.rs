//! Anchor discriminators.
//!
//! Every instruction payload starts with an 8 byte tag naming the entrypoint,
//! and every Anchor account starts with an 8 byte tag naming its type. Builders
//! use precomputed constants; the hashing helpers exist for account types and
//! for checking those constants.

use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};

use crate::{codec, types::CodecError};

/// Length of a discriminator in bytes.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Opaque 8 byte tag written at the start of an instruction or account payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub struct Discriminator([u8; DISCRIMINATOR_LEN]);

impl Discriminator {
    pub const fn from_bytes(bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; DISCRIMINATOR_LEN] {
        &self.0
    }

    /// Compute an instruction discriminator: sha256("global:<name>")[0..8]
    ///
    /// # Example
    ///
    /// ```
    /// use anchor_program_clients::Discriminator;
    ///
    /// let disc = Discriminator::instruction("refresh_reserve");
    /// assert_eq!(disc.as_bytes(), &[2, 218, 138, 235, 79, 201, 25, 102]);
    /// ```
    pub fn instruction(name: &str) -> Self {
        Self::hashed("global", name)
    }

    /// Compute an account discriminator: sha256("account:<Name>")[0..8]
    pub fn account(name: &str) -> Self {
        Self::hashed("account", name)
    }

    fn hashed(namespace: &str, name: &str) -> Self {
        let preimage = format!("{}:{}", namespace, name);
        let mut hasher = Sha256::new();
        hasher.update(preimage.as_bytes());
        let hash_result = hasher.finalize();
        let mut discriminator = [0u8; DISCRIMINATOR_LEN];
        discriminator.copy_from_slice(&hash_result[..DISCRIMINATOR_LEN]);
        Self(discriminator)
    }

    /// Write the tag at `offset`, returning the number of bytes written.
    pub fn write(&self, buffer: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        codec::write(self, buffer, offset)
    }

    /// Read a tag at `offset`.
    pub fn read(buffer: &[u8], offset: usize) -> Result<Self, CodecError> {
        codec::read::<Self>(buffer, offset).map(|(discriminator, _)| discriminator)
    }

    /// True if `data` starts with this tag.
    pub fn matches(&self, data: &[u8]) -> bool {
        data.len() >= DISCRIMINATOR_LEN && data[..DISCRIMINATOR_LEN] == self.0
    }

    /// Fail unless `data` starts with this tag.
    pub fn check(&self, data: &[u8]) -> Result<(), CodecError> {
        let found = Self::read(data, 0)?;
        if found != *self {
            return Err(CodecError::DiscriminatorMismatch {
                expected: *self,
                found,
            });
        }
        Ok(())
    }
}

impl From<[u8; DISCRIMINATOR_LEN]> for Discriminator {
    fn from(bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Discriminator {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
