//! # Anchor Program Clients
//!
//! Client-side building blocks for calling Anchor programs on Solana without
//! an IDL runtime.
//!
//! ## Pieces
//!
//! 1. **Codec** - Borsh payloads that are sized, written at an offset and read
//!    back with precise bounds and malformed-input errors
//! 2. **Addresses** - program derived address search with explicit seed limits
//! 3. **Instructions** - `discriminator || params` payloads paired with an
//!    ordered, role-tagged account list
//!
//! On top of those, the `kamino`, `glam` and `flash` modules carry the PDAs,
//! instruction schemas and account layouts for those programs.
//!
//! ## Usage
//!
//! ```
//! use anchor_program_clients::{kamino::KaminoLendClient, ClientConfig};
//! use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
//!
//! let owner = Pubkey::new_unique();
//! let kamino = KaminoLendClient::new(&ClientConfig::default(), owner).unwrap();
//!
//! let ix: Instruction = kamino
//!     .init_user_metadata(None, Pubkey::default())
//!     .unwrap()
//!     .into();
//! assert_eq!(ix.data.len(), 8 + 32);
//! assert!(ix.accounts[0].is_signer);
//! ```
//!
//! ## Notes
//!
//! - Account order is never checked or rearranged; it is whatever the target
//!   program declares
//! - Discriminators in the schemas are precomputed; `Discriminator::instruction`
//!   recomputes them from the entrypoint name
//! - Logging goes through the `log` facade; install any logger to see bump
//!   search and decode diagnostics

pub mod accounts;
pub mod address;
pub mod codec;
pub mod config;
pub mod constants;
pub mod discriminator;
pub mod filters;
pub mod flash;
pub mod glam;
pub mod instruction;
pub mod kamino;
pub mod types;

// Re-export main public API
pub use accounts::{AccountRole, RoleMeta};
pub use address::{
    associated_token_address, create_program_address, find_program_address,
    verify_program_address, MAX_SEEDS, MAX_SEED_LEN,
};
pub use config::ClientConfig;
pub use discriminator::{Discriminator, DISCRIMINATOR_LEN};
pub use filters::{AccountFilter, Memcmp};
pub use instruction::{
    assemble, decode_instruction_data, encode_instruction, AccountSlot, InstructionRecord,
    InstructionSchema,
};
pub use types::{AddressError, ClientError, CodecError, ProgramDerivedAddress};
