//! Byte-exact construction of the `airdrop` instruction.
//!
//! Data layout and account order must match the on-chain program's Anchor
//! deserializer; the program indexes accounts positionally, so a reordered
//! list still signs and submits but executes against the wrong accounts.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::{system_program, sysvar};

use crate::constants::AirdropConfig;
use crate::pda::AirdropAddresses;

/// Argument block of the `airdrop` instruction. Borsh strings are encoded as
/// a 4-byte little-endian length followed by the UTF-8 bytes.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct Airdrop {
    pub order_id: String,
    pub wallet: Pubkey,
    pub merkle_root: String,
}

impl Airdrop {
    /// Discriminator-prefixed instruction data.
    pub fn data(&self, config: &AirdropConfig) -> Vec<u8> {
        let mut data = config.airdrop_discriminator.to_vec();
        self.serialize(&mut data)
            .expect("borsh serialization into a Vec is infallible");
        data
    }
}

/// Build the airdrop instruction for a derived address set.
pub fn create_airdrop_instruction(
    config: &AirdropConfig,
    authority: &Pubkey,
    recipient: &Pubkey,
    addresses: &AirdropAddresses,
    order_id: &str,
    merkle_root: &str,
) -> Instruction {
    let args = Airdrop {
        order_id: order_id.to_string(),
        wallet: *recipient,
        merkle_root: merkle_root.to_string(),
    };

    Instruction {
        program_id: config.program_id,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(addresses.project, false),
            AccountMeta::new(addresses.nft_mint, false),
            AccountMeta::new(*recipient, false),
            AccountMeta::new(addresses.recipient_token, false),
            AccountMeta::new(addresses.collection_mint, false),
            AccountMeta::new_readonly(config.associated_token_program_id, false),
            AccountMeta::new_readonly(config.token_program_id, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: args.data(config),
    }
}

/// Compute-budget directive submitted ahead of the airdrop instruction.
pub fn create_compute_budget_instruction(config: &AirdropConfig) -> Instruction {
    ComputeBudgetInstruction::set_compute_unit_limit(config.compute_unit_limit)
}

#[cfg(test)]
mod tests {
    use crate::pda::derive_airdrop_addresses;

    use super::*;

    const ORDER_ID: &str = "d275d072-21e1-48d3-b17c-e0855712b067";
    const MERKLE_ROOT: &str = "2d852b3c21e923484a93d3a980a45b7571e89552d58875d40dd17c73216a49d7";

    fn build() -> (AirdropConfig, Pubkey, Pubkey, AirdropAddresses, Instruction) {
        let config = AirdropConfig::default();
        let authority = Pubkey::new_unique();
        let recipient: Pubkey = "7s3NWENLzKzL18yGfy4rQNYFQPNFhiHnXYSgjptEwhBg"
            .parse()
            .unwrap();
        let addresses = derive_airdrop_addresses(&config, &recipient, ORDER_ID).unwrap();
        let ix = create_airdrop_instruction(
            &config,
            &authority,
            &recipient,
            &addresses,
            ORDER_ID,
            MERKLE_ROOT,
        );
        (config, authority, recipient, addresses, ix)
    }

    #[test]
    fn test_data_starts_with_discriminator() {
        let (config, _, _, _, ix) = build();
        assert_eq!(&ix.data[..8], &config.airdrop_discriminator);
    }

    #[test]
    fn test_data_field_layout() {
        let (_, _, recipient, _, ix) = build();

        // [discriminator][u32 le len][order id][recipient][u32 le len][root]
        let mut offset = 8;
        let order_id_len =
            u32::from_le_bytes(ix.data[offset..offset + 4].try_into().unwrap()) as usize;
        offset += 4;
        assert_eq!(order_id_len, ORDER_ID.len());
        assert_eq!(&ix.data[offset..offset + order_id_len], ORDER_ID.as_bytes());
        offset += order_id_len;

        assert_eq!(&ix.data[offset..offset + 32], recipient.as_ref());
        offset += 32;

        let root_len = u32::from_le_bytes(ix.data[offset..offset + 4].try_into().unwrap()) as usize;
        offset += 4;
        assert_eq!(root_len, MERKLE_ROOT.len());
        assert_eq!(&ix.data[offset..offset + root_len], MERKLE_ROOT.as_bytes());
        assert_eq!(offset + root_len, ix.data.len());
    }

    #[test]
    fn test_args_round_trip() {
        let (_, _, recipient, _, ix) = build();
        let decoded = Airdrop::try_from_slice(&ix.data[8..]).unwrap();
        assert_eq!(decoded.order_id, ORDER_ID);
        assert_eq!(decoded.wallet, recipient);
        assert_eq!(decoded.merkle_root, MERKLE_ROOT);
    }

    #[test]
    fn test_account_order_matches_program_contract() {
        let (config, authority, recipient, addresses, ix) = build();

        let expected = [
            (authority, true, true),
            (addresses.project, false, true),
            (addresses.nft_mint, false, true),
            (recipient, false, true),
            (addresses.recipient_token, false, true),
            (addresses.collection_mint, false, true),
            (config.associated_token_program_id, false, false),
            (config.token_program_id, false, false),
            (system_program::id(), false, false),
            (sysvar::rent::id(), false, false),
        ];
        assert_eq!(ix.accounts.len(), expected.len());
        for (meta, (pubkey, is_signer, is_writable)) in ix.accounts.iter().zip(expected) {
            assert_eq!(meta.pubkey, pubkey);
            assert_eq!(meta.is_signer, is_signer);
            assert_eq!(meta.is_writable, is_writable);
        }
        assert_eq!(ix.program_id, config.program_id);
    }

    #[test]
    fn test_account_list_stable_across_calls() {
        let (_, _, _, _, first) = build();
        let (_, _, _, _, second) = build();
        // Authority differs between builds; compare everything that should
        // not depend on it.
        assert_eq!(first.accounts[1..], second.accounts[1..]);
        assert_eq!(first.data, second.data);
    }

    #[test]
    fn test_compute_budget_instruction_limit() {
        let config = AirdropConfig::default();
        let ix = create_compute_budget_instruction(&config);
        assert_eq!(ix.program_id, solana_sdk::compute_budget::id());
        // SetComputeUnitLimit is variant 2 followed by the u32 limit.
        assert_eq!(ix.data[0], 2);
        assert_eq!(
            u32::from_le_bytes(ix.data[1..5].try_into().unwrap()),
            config.compute_unit_limit
        );
    }
}
