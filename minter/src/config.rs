use std::path::{Path, PathBuf};
use std::str::FromStr;

use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::{read_keypair_file, Keypair};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("keypair file not found: {}", path.display())]
    MissingKeypair { path: PathBuf },

    #[error("invalid keypair data: {0}")]
    InvalidKeypair(String),

    #[error("invalid commitment level: {0}")]
    InvalidCommitment(String),
}

/// The Solana CLI default wallet, which the airdrop scripts have always
/// signed with.
pub fn default_keypair_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".config/solana/id.json")
}

pub fn load_authority(path: &Path) -> Result<Keypair, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingKeypair {
            path: path.to_path_buf(),
        });
    }
    read_keypair_file(path).map_err(|e| ConfigError::InvalidKeypair(e.to_string()))
}

pub fn parse_commitment(commitment: &str) -> Result<CommitmentConfig, ConfigError> {
    CommitmentConfig::from_str(commitment)
        .map_err(|_| ConfigError::InvalidCommitment(commitment.to_string()))
}
