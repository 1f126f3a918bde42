//! Deterministic derivation of the program-owned addresses the airdrop
//! touches. Pure functions of (seeds, program id); no I/O.

use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;

use crate::constants::{
    AirdropConfig, NON_TRANSFERABLE_NFT_MINT_PREFIX, NON_TRANSFERABLE_PROJECT_MINT_PREFIX,
    NON_TRANSFERABLE_PROJECT_PREFIX,
};
use crate::error::DerivationError;

/// The full derived address set for one airdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirdropAddresses {
    pub project: Pubkey,
    pub collection_mint: Pubkey,
    pub nft_mint: Pubkey,
    pub recipient_token: Pubkey,
}

/// SHA-256 digest of the UTF-8 order id, used as the auxiliary seed of the
/// per-order NFT mint. Hashing bounds the seed to 32 bytes for any order-id
/// length and makes the derived address a collision-resistant idempotency
/// token.
pub fn hash_order_id(order_id: &str) -> [u8; 32] {
    Sha256::digest(order_id.as_bytes()).into()
}

/// Project account PDA: seeds = ["nt-proj-v5"]
pub fn find_project_address(config: &AirdropConfig) -> Result<(Pubkey, u8), DerivationError> {
    Pubkey::try_find_program_address(&[NON_TRANSFERABLE_PROJECT_PREFIX], &config.program_id)
        .ok_or(DerivationError::BumpNotFound("project"))
}

/// Collection mint PDA: seeds = ["nt-project-mint-v5"]
pub fn find_collection_mint_address(
    config: &AirdropConfig,
) -> Result<(Pubkey, u8), DerivationError> {
    Pubkey::try_find_program_address(&[NON_TRANSFERABLE_PROJECT_MINT_PREFIX], &config.program_id)
        .ok_or(DerivationError::BumpNotFound("collection mint"))
}

/// Per-order NFT mint PDA: seeds = ["nt-nft-mint-v5", sha256(order_id)]
pub fn find_nft_mint_address(
    config: &AirdropConfig,
    order_id: &str,
) -> Result<(Pubkey, u8), DerivationError> {
    let order_id_hash = hash_order_id(order_id);
    Pubkey::try_find_program_address(
        &[NON_TRANSFERABLE_NFT_MINT_PREFIX, &order_id_hash],
        &config.program_id,
    )
    .ok_or(DerivationError::BumpNotFound("nft mint"))
}

/// The recipient's associated token account for the per-order mint under
/// Token-2022.
pub fn find_recipient_token_address(
    config: &AirdropConfig,
    recipient: &Pubkey,
    nft_mint: &Pubkey,
) -> Pubkey {
    get_associated_token_address_with_program_id(recipient, nft_mint, &config.token_program_id)
}

/// Derive every address the airdrop instruction references.
pub fn derive_airdrop_addresses(
    config: &AirdropConfig,
    recipient: &Pubkey,
    order_id: &str,
) -> Result<AirdropAddresses, DerivationError> {
    let (project, _) = find_project_address(config)?;
    let (collection_mint, _) = find_collection_mint_address(config)?;
    let (nft_mint, _) = find_nft_mint_address(config, order_id)?;
    let recipient_token = find_recipient_token_address(config, recipient, &nft_mint);
    Ok(AirdropAddresses {
        project,
        collection_mint,
        nft_mint,
        recipient_token,
    })
}
