//! Error and data types shared by the codec, the address deriver and the
//! instruction builders.

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::discriminator::Discriminator;

/// Failures raised while encoding or decoding a Borsh payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("writing {needed} bytes at offset {offset} overflows a {capacity} byte buffer")]
    BufferOverflow {
        offset: usize,
        needed: usize,
        capacity: usize,
    },

    #[error("read at offset {offset} runs past the end of a {len} byte buffer")]
    BufferUnderflow { offset: usize, len: usize },

    #[error("malformed encoding at offset {offset}: {reason}")]
    Malformed { offset: usize, reason: String },

    #[error("{remaining} trailing bytes left after decoding")]
    TrailingBytes { remaining: usize },

    #[error("discriminator mismatch: expected {expected}, found {found}")]
    DiscriminatorMismatch {
        expected: Discriminator,
        found: Discriminator,
    },

    #[error("failed to serialize value: {0}")]
    Serialize(String),
}

/// Failures raised while deriving a program address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("seed {index} is {len} bytes, the maximum is {max}")]
    MaxSeedLengthExceeded { index: usize, len: usize, max: usize },

    #[error("{count} seeds given, at most {max} are allowed alongside the bump")]
    TooManySeeds { count: usize, max: usize },

    #[error("bump {bump} yields an address on the ed25519 curve")]
    OnCurve { bump: u8 },

    #[error("no bump in 0..=255 yields an off-curve address")]
    NoViableBump,

    #[error("derived address {derived} does not match expected {expected}")]
    AddressMismatch { expected: Pubkey, derived: Pubkey },
}

/// Top level error for instruction builders and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("instruction {instruction} expects {expected} accounts, got {actual}")]
    AccountCountMismatch {
        instruction: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// An address derived from seeds and an owning program, together with the
/// bump that pushed it off the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramDerivedAddress {
    /// The derived address
    pub address: Pubkey,
    /// The bump seed appended after the caller's seeds
    pub bump: u8,
}

impl ProgramDerivedAddress {
    pub fn new(address: Pubkey, bump: u8) -> Self {
        Self { address, bump }
    }
}

impl From<ProgramDerivedAddress> for (Pubkey, u8) {
    fn from(pda: ProgramDerivedAddress) -> Self {
        (pda.address, pda.bump)
    }
}
