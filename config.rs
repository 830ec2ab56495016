//! Program id configuration.
//!
//! Defaults point at mainnet. A JSON file can override any id, which is how
//! devnet and local validator deployments are targeted:
//!
//! ```json
//! {
//!   "kamino_lend_program": "KLend2g3cP87fffoy8q1mQqGKjrxjC8boSyAYavgmjD"
//! }
//! ```

use std::{fs, path::Path};

use log::debug;
use serde::{Deserialize, Deserializer};
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::{
        KAMINO_FARMS_PROGRAM_ID, KAMINO_LEND_PROGRAM_ID, KAMINO_SCOPE_PRICES,
        KAMINO_VAULTS_PROGRAM_ID,
    },
    types::ClientError,
};

/// Program ids used by the instruction builders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(deserialize_with = "base58_pubkey")]
    pub kamino_lend_program: Pubkey,
    #[serde(deserialize_with = "base58_pubkey")]
    pub kamino_scope_prices: Pubkey,
    #[serde(deserialize_with = "base58_pubkey")]
    pub kamino_farms_program: Pubkey,
    #[serde(deserialize_with = "base58_pubkey")]
    pub kamino_vaults_program: Pubkey,
    #[serde(deserialize_with = "optional_base58_pubkey")]
    pub glam_program: Option<Pubkey>,
    #[serde(deserialize_with = "optional_base58_pubkey")]
    pub flash_perpetuals_program: Option<Pubkey>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            kamino_lend_program: KAMINO_LEND_PROGRAM_ID,
            kamino_scope_prices: KAMINO_SCOPE_PRICES,
            kamino_farms_program: KAMINO_FARMS_PROGRAM_ID,
            kamino_vaults_program: KAMINO_VAULTS_PROGRAM_ID,
            glam_program: None,
            flash_perpetuals_program: None,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON document; absent fields keep their mainnet defaults.
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        serde_json::from_str(json).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Load a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        debug!("loaded program config from {}", path.display());
        Ok(config)
    }

    pub fn glam_program(&self) -> Result<Pubkey, ClientError> {
        self.glam_program
            .ok_or_else(|| ClientError::Config("glam_program is not configured".to_string()))
    }

    pub fn flash_perpetuals_program(&self) -> Result<Pubkey, ClientError> {
        self.flash_perpetuals_program.ok_or_else(|| {
            ClientError::Config("flash_perpetuals_program is not configured".to_string())
        })
    }
}

/// Decode a base58 string into a 32 byte key.
pub fn parse_pubkey(encoded: &str) -> Result<Pubkey, ClientError> {
    let bytes = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| ClientError::Config(format!("{encoded}: {e}")))?;
    let bytes: [u8; 32] = bytes.try_into().map_err(|bytes: Vec<u8>| {
        ClientError::Config(format!("{encoded}: expected 32 bytes, got {}", bytes.len()))
    })?;
    Ok(Pubkey::new_from_array(bytes))
}

fn base58_pubkey<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    parse_pubkey(&encoded).map_err(serde::de::Error::custom)
}

fn optional_base58_pubkey<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Pubkey>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|encoded| parse_pubkey(&encoded).map_err(serde::de::Error::custom))
        .transpose()
}
