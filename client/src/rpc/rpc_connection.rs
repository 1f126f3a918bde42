use std::fmt::Debug;

use async_trait::async_trait;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::rpc::errors::RpcError;

/// The ledger gateway the mint workflow runs against.
///
/// The four async methods are the workflow's only suspension points. Retry
/// and timeout policy belong to implementations, not to callers: the
/// workflow itself never retries.
#[async_trait]
pub trait RpcConnection: Send + Sync + Debug {
    fn url(&self) -> String;
    fn commitment(&self) -> CommitmentConfig;

    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError>;
    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError>;
    async fn send_transaction(&mut self, transaction: &Transaction)
        -> Result<Signature, RpcError>;

    /// Wait until the transaction reaches this connection's commitment
    /// level. `Ok(false)` means the wait ended without an observation, not
    /// that the transaction failed.
    async fn confirm_transaction(&mut self, signature: &Signature) -> Result<bool, RpcError>;
}
