//! Program derived address search.
//!
//! A program derived address is `sha256(seeds || [bump] || program_id ||
//! "ProgramDerivedAddress")`, accepted only when the digest is not a valid
//! ed25519 point, so no private key can exist for it. Bumps are tried from 255
//! downwards and the first off-curve candidate is the canonical address.

use log::debug;
use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::associated_token_program_id,
    types::{AddressError, ProgramDerivedAddress},
};

/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds, counting the bump.
pub const MAX_SEEDS: usize = 16;

/// Domain separation suffix appended after the program id.
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

/// Find the canonical derived address for `seeds` under `program_id`.
///
/// # Example
///
/// ```
/// use anchor_program_clients::address::find_program_address;
/// use anchor_program_clients::constants::kamino_lend_program_id;
///
/// let market = solana_sdk::pubkey::Pubkey::new_unique();
/// let pda = find_program_address(&[b"lma", market.as_ref()], &kamino_lend_program_id()).unwrap();
/// assert!(!pda.address.is_on_curve());
/// ```
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    check_seeds(seeds)?;

    for bump in (0..=u8::MAX).rev() {
        let candidate = hash_candidate(seeds, bump, program_id);
        if !candidate.is_on_curve() {
            if bump < u8::MAX {
                debug!(
                    "derived {} for program {} after {} on-curve bumps",
                    candidate,
                    program_id,
                    u8::MAX - bump
                );
            }
            return Ok(ProgramDerivedAddress::new(candidate, bump));
        }
    }

    debug!("no off-curve bump for {} seeds under {}", seeds.len(), program_id);
    Err(AddressError::NoViableBump)
}

/// Rebuild the address for an already known bump, without searching.
pub fn create_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> Result<Pubkey, AddressError> {
    check_seeds(seeds)?;
    let candidate = hash_candidate(seeds, bump, program_id);
    if candidate.is_on_curve() {
        return Err(AddressError::OnCurve { bump });
    }
    Ok(candidate)
}

/// Check that `expected` is the address `seeds` and `bump` derive under `program_id`.
pub fn verify_program_address(
    expected: &Pubkey,
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> Result<(), AddressError> {
    let derived = create_program_address(seeds, bump, program_id)?;
    if derived != *expected {
        return Err(AddressError::AddressMismatch {
            expected: *expected,
            derived,
        });
    }
    Ok(())
}

/// Associated token account for `wallet` and `mint` under the given token program.
pub fn associated_token_address(
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(
        &[wallet.as_ref(), token_program.as_ref(), mint.as_ref()],
        &associated_token_program_id(),
    )
}

fn check_seeds(seeds: &[&[u8]]) -> Result<(), AddressError> {
    if seeds.len() >= MAX_SEEDS {
        return Err(AddressError::TooManySeeds {
            count: seeds.len(),
            max: MAX_SEEDS - 1,
        });
    }
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(AddressError::MaxSeedLengthExceeded {
            index,
            len: seed.len(),
            max: MAX_SEED_LEN,
        });
    }
    Ok(())
}

fn hash_candidate(seeds: &[&[u8]], bump: u8, program_id: &Pubkey) -> Pubkey {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id.as_ref());
    hasher.update(PDA_MARKER);
    Pubkey::new_from_array(hasher.finalize().into())
}
