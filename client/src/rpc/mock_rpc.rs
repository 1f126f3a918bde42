//! In-memory [`RpcConnection`] for exercising the mint workflow without a
//! validator. Accounts, the blockhash, and failure injection are all
//! scripted by the test; submitted transactions are recorded for
//! assertions.

use std::collections::HashMap;

use async_trait::async_trait;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::rpc::errors::RpcError;
use crate::rpc::rpc_connection::RpcConnection;

#[derive(Debug)]
pub struct MockRpcConnection {
    pub accounts: HashMap<Pubkey, Account>,
    pub blockhash: Hash,
    /// Every transaction that reached `send_transaction`.
    pub sent_transactions: Vec<Transaction>,
    /// One-shot failure injections, consumed on first use.
    pub account_failure: Option<RpcError>,
    pub blockhash_failure: Option<RpcError>,
    pub send_failure: Option<RpcError>,
    pub confirm_failure: Option<RpcError>,
    /// Result of a successful confirmation wait.
    pub confirm_response: bool,
}

impl Default for MockRpcConnection {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            blockhash: Hash::new_unique(),
            sent_transactions: Vec::new(),
            account_failure: None,
            blockhash_failure: None,
            send_failure: None,
            confirm_failure: None,
            confirm_response: true,
        }
    }
}

impl MockRpcConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a minimal account at `address`, as the existence check sees
    /// it after a confirmed mint.
    pub fn insert_account(&mut self, address: Pubkey, owner: Pubkey) {
        self.accounts.insert(
            address,
            Account {
                lamports: 1_000_000,
                data: vec![],
                owner,
                executable: false,
                rent_epoch: 0,
            },
        );
    }
}

#[async_trait]
impl RpcConnection for MockRpcConnection {
    fn url(&self) -> String {
        "mock://".to_string()
    }

    fn commitment(&self) -> CommitmentConfig {
        CommitmentConfig::confirmed()
    }

    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        if let Some(failure) = self.account_failure.take() {
            return Err(failure);
        }
        Ok(self.accounts.get(&address).cloned())
    }

    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError> {
        if let Some(failure) = self.blockhash_failure.take() {
            return Err(failure);
        }
        Ok(self.blockhash)
    }

    async fn send_transaction(
        &mut self,
        transaction: &Transaction,
    ) -> Result<Signature, RpcError> {
        if let Some(failure) = self.send_failure.take() {
            return Err(failure);
        }
        self.sent_transactions.push(transaction.clone());
        Ok(transaction
            .signatures
            .first()
            .copied()
            .unwrap_or_default())
    }

    async fn confirm_transaction(&mut self, _signature: &Signature) -> Result<bool, RpcError> {
        if let Some(failure) = self.confirm_failure.take() {
            return Err(failure);
        }
        Ok(self.confirm_response)
    }
}
