//! Wire contract with the on-chain Legal DID program.
//!
//! Every value here is part of the program's external interface; none of
//! them may change independently of a program deployment.

use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;

/// Seed prefix of the singleton project account.
pub const NON_TRANSFERABLE_PROJECT_PREFIX: &[u8] = b"nt-proj-v5";

/// Seed prefix of the collection (project) mint account.
pub const NON_TRANSFERABLE_PROJECT_MINT_PREFIX: &[u8] = b"nt-project-mint-v5";

/// Seed prefix of the per-order NFT mint account. The auxiliary seed is the
/// SHA-256 digest of the order id, so arbitrarily long order ids stay within
/// the 32-byte seed limit.
pub const NON_TRANSFERABLE_NFT_MINT_PREFIX: &[u8] = b"nt-nft-mint-v5";

/// Anchor sighash of the `airdrop` instruction, `sha256("global:airdrop")[..8]`.
pub const AIRDROP_DISCRIMINATOR: [u8; 8] = [113, 173, 36, 238, 38, 152, 22, 117];

/// Compute-unit ceiling attached to every airdrop transaction. The mint path
/// initializes a Token-2022 mint with three extensions plus metadata and an
/// ATA, which does not fit in the default budget.
pub const COMPUTE_UNIT_LIMIT: u32 = 400_000;

/// Fallback attestation root used when the caller supplies none. Placeholder
/// with no documented provenance; production mints must pass an explicit root.
pub const DEFAULT_MERKLE_ROOT: &str =
    "2d852b3c21e923484a93d3a980a45b7571e89552d58875d40dd17c73216a49d7";

/// Devnet deployment of the Legal DID program.
pub const LEGALDID_PROGRAM_ID: &str = "BE6yuzEjzapwBEQ9RoAFzG72XZzb17JuWWqhecFHdEQa";

/// Program ids and limits the derivation and encoding layers work against.
///
/// Injected rather than read from globals so tests and sandbox deployments
/// can point at a different program.
#[derive(Debug, Clone)]
pub struct AirdropConfig {
    pub program_id: Pubkey,
    pub token_program_id: Pubkey,
    pub associated_token_program_id: Pubkey,
    pub airdrop_discriminator: [u8; 8],
    pub compute_unit_limit: u32,
}

impl Default for AirdropConfig {
    fn default() -> Self {
        Self::with_program_id(
            Pubkey::from_str(LEGALDID_PROGRAM_ID).expect("hardcoded program id is valid base58"),
        )
    }
}

impl AirdropConfig {
    /// Config for a non-default (e.g. sandbox) deployment of the program.
    pub fn with_program_id(program_id: Pubkey) -> Self {
        Self {
            program_id,
            token_program_id: spl_token_2022::id(),
            associated_token_program_id: spl_associated_token_account::id(),
            airdrop_discriminator: AIRDROP_DISCRIMINATOR,
            compute_unit_limit: COMPUTE_UNIT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use sha2::{Digest, Sha256};

    use super::*;

    #[test]
    fn test_default_config_program_ids() {
        let config = AirdropConfig::default();
        assert_eq!(config.program_id.to_string(), LEGALDID_PROGRAM_ID);
        assert_eq!(
            config.token_program_id.to_string(),
            "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"
        );
        assert_eq!(
            config.associated_token_program_id.to_string(),
            "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"
        );
    }

    #[test]
    fn test_airdrop_discriminator_is_anchor_sighash() {
        let digest = Sha256::digest(b"global:airdrop");
        assert_eq!(AIRDROP_DISCRIMINATOR, digest[..8]);
    }
}
