//! The idempotent airdrop workflow: existence check → instruction build →
//! submit → confirm.
//!
//! The existence of the per-order NFT mint account IS the mint record: the
//! workflow never persists anything client-side, and re-running it for an
//! already-minted order id short-circuits before anything is built or sent.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use tracing::{debug, info, warn};

use crate::constants::{AirdropConfig, DEFAULT_MERKLE_ROOT};
use crate::error::MintError;
use crate::instruction::{create_airdrop_instruction, create_compute_budget_instruction};
use crate::pda::derive_airdrop_addresses;
use crate::rpc::rpc_connection::RpcConnection;

/// Workflow progress. `Confirmed` and `Rejected` are terminal; every network
/// failure lands in `Rejected` with the cause carried by the returned error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintState {
    Init,
    Checking,
    Building,
    Submitted,
    Confirmed,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct MintRequest {
    pub recipient: Pubkey,
    pub order_id: String,
    pub merkle_root: Option<String>,
}

impl MintRequest {
    pub fn new(recipient: Pubkey, order_id: impl Into<String>) -> Self {
        Self {
            recipient,
            order_id: order_id.into(),
            merkle_root: None,
        }
    }

    pub fn with_merkle_root(mut self, merkle_root: impl Into<String>) -> Self {
        self.merkle_root = Some(merkle_root.into());
        self
    }

    /// The attestation root to submit; falls back to the placeholder
    /// constant when the caller supplied none.
    pub fn merkle_root(&self) -> &str {
        self.merkle_root.as_deref().unwrap_or(DEFAULT_MERKLE_ROOT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintOutcome {
    /// The transaction was confirmed at the gateway's commitment level.
    Minted {
        signature: Signature,
        nft_mint: Pubkey,
    },
    /// The per-order mint account already exists; nothing was submitted.
    AlreadyMinted { nft_mint: Pubkey },
}

#[derive(Debug)]
pub struct MintWorkflow {
    config: AirdropConfig,
    authority: Keypair,
    state: MintState,
}

impl MintWorkflow {
    pub fn new(config: AirdropConfig, authority: Keypair) -> Self {
        Self {
            config,
            authority,
            state: MintState::Init,
        }
    }

    pub fn state(&self) -> MintState {
        self.state
    }

    pub fn authority_pubkey(&self) -> Pubkey {
        self.authority.pubkey()
    }

    /// Run the workflow once. No step is retried; a `Transport` failure is
    /// safe to retry from scratch because the existence check re-evaluates
    /// idempotency, while `SubmissionAmbiguous` requires re-checking before
    /// any resubmission.
    pub async fn mint<R: RpcConnection>(
        &mut self,
        rpc: &mut R,
        request: &MintRequest,
    ) -> Result<MintOutcome, MintError> {
        let result = self.run(rpc, request).await;
        if result.is_err() {
            self.state = MintState::Rejected;
        }
        result
    }

    async fn run<R: RpcConnection>(
        &mut self,
        rpc: &mut R,
        request: &MintRequest,
    ) -> Result<MintOutcome, MintError> {
        if request.order_id.is_empty() {
            return Err(MintError::InvalidInput(
                "order id must not be empty".to_string(),
            ));
        }

        let addresses =
            derive_airdrop_addresses(&self.config, &request.recipient, &request.order_id)?;
        debug!(
            order_id = %request.order_id,
            nft_mint = %addresses.nft_mint,
            recipient = %request.recipient,
            "derived airdrop addresses"
        );

        self.state = MintState::Checking;
        let existing = rpc
            .get_account(addresses.nft_mint)
            .await
            .map_err(MintError::Transport)?;
        if existing.is_some() {
            info!(
                order_id = %request.order_id,
                nft_mint = %addresses.nft_mint,
                "order id already minted, skipping submission"
            );
            self.state = MintState::Rejected;
            return Ok(MintOutcome::AlreadyMinted {
                nft_mint: addresses.nft_mint,
            });
        }

        self.state = MintState::Building;
        if request.merkle_root.is_none() {
            warn!(
                order_id = %request.order_id,
                "no attestation root supplied, submitting the placeholder root"
            );
        }
        let instructions = [
            create_compute_budget_instruction(&self.config),
            create_airdrop_instruction(
                &self.config,
                &self.authority.pubkey(),
                &request.recipient,
                &addresses,
                &request.order_id,
                request.merkle_root(),
            ),
        ];

        let blockhash = rpc
            .get_latest_blockhash()
            .await
            .map_err(MintError::Transport)?;
        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&self.authority.pubkey()),
            &[&self.authority],
            blockhash,
        );
        let signature = rpc
            .send_transaction(&transaction)
            .await
            .map_err(MintError::from_submission_failure)?;
        self.state = MintState::Submitted;
        info!(
            order_id = %request.order_id,
            %signature,
            "airdrop transaction submitted"
        );

        match rpc.confirm_transaction(&signature).await {
            Ok(true) => {
                self.state = MintState::Confirmed;
                info!(
                    order_id = %request.order_id,
                    nft_mint = %addresses.nft_mint,
                    %signature,
                    "airdrop confirmed"
                );
                Ok(MintOutcome::Minted {
                    signature,
                    nft_mint: addresses.nft_mint,
                })
            }
            Ok(false) => Err(MintError::SubmissionAmbiguous {
                signature,
                source: None,
            }),
            Err(source) => Err(MintError::SubmissionAmbiguous {
                signature,
                source: Some(source),
            }),
        }
    }
}
