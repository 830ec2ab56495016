//! Account roles within an instruction.

use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

/// Capability an instruction requests for one of its accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountRole {
    ReadOnly,
    Writable,
    ReadOnlySigner,
    WritableSigner,
    /// The program being called. Read only, never a signer.
    Invoked,
}

impl AccountRole {
    pub fn is_signer(self) -> bool {
        matches!(self, Self::ReadOnlySigner | Self::WritableSigner)
    }

    pub fn is_writable(self) -> bool {
        matches!(self, Self::Writable | Self::WritableSigner)
    }

    /// Attach this role to `pubkey`.
    pub fn meta(self, pubkey: Pubkey) -> RoleMeta {
        RoleMeta { pubkey, role: self }
    }
}

/// An address tagged with the role it plays in one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleMeta {
    pub pubkey: Pubkey,
    pub role: AccountRole,
}

impl RoleMeta {
    pub fn readonly(pubkey: Pubkey) -> Self {
        AccountRole::ReadOnly.meta(pubkey)
    }

    pub fn writable(pubkey: Pubkey) -> Self {
        AccountRole::Writable.meta(pubkey)
    }

    pub fn readonly_signer(pubkey: Pubkey) -> Self {
        AccountRole::ReadOnlySigner.meta(pubkey)
    }

    pub fn writable_signer(pubkey: Pubkey) -> Self {
        AccountRole::WritableSigner.meta(pubkey)
    }

    pub fn invoked(pubkey: Pubkey) -> Self {
        AccountRole::Invoked.meta(pubkey)
    }

    pub fn is_signer(&self) -> bool {
        self.role.is_signer()
    }

    pub fn is_writable(&self) -> bool {
        self.role.is_writable()
    }
}

impl From<&RoleMeta> for AccountMeta {
    fn from(meta: &RoleMeta) -> Self {
        if meta.is_writable() {
            AccountMeta::new(meta.pubkey, meta.is_signer())
        } else {
            AccountMeta::new_readonly(meta.pubkey, meta.is_signer())
        }
    }
}

impl From<RoleMeta> for AccountMeta {
    fn from(meta: RoleMeta) -> Self {
        Self::from(&meta)
    }
}
