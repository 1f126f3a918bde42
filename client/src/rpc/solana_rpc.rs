use std::fmt::{Debug, Display, Formatter};
use std::time::Duration;

use async_trait::async_trait;
use solana_client::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tokio::time::{sleep, Instant};
use tracing::warn;

use crate::rpc::errors::RpcError;
use crate::rpc::rpc_connection::RpcConnection;

pub enum SolanaRpcUrl {
    Mainnet,
    Devnet,
    Localnet,
    Custom(String),
}

impl Display for SolanaRpcUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            SolanaRpcUrl::Mainnet => "https://api.mainnet-beta.solana.com".to_string(),
            SolanaRpcUrl::Devnet => "https://api.devnet.solana.com".to_string(),
            SolanaRpcUrl::Localnet => "http://localhost:8899".to_string(),
            SolanaRpcUrl::Custom(url) => url.clone(),
        };
        write!(f, "{}", str)
    }
}

#[derive(Clone, Debug, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub retry_delay: Duration,
    /// Upper bound on the confirmation wait. An expired wait surfaces as an
    /// unconfirmed submission, not as an error.
    pub timeout: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_retries: 30,
            retry_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(60),
        }
    }
}

pub struct SolanaRpcConnection {
    pub client: RpcClient,
    pub retry_config: RetryConfig,
}

impl Debug for SolanaRpcConnection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolanaRpcConnection {{ client: {:?} }}",
            self.client.url()
        )
    }
}

impl SolanaRpcConnection {
    pub fn new<U: ToString>(url: U, commitment_config: Option<CommitmentConfig>) -> Self {
        Self::new_with_retry(url, commitment_config, None)
    }

    pub fn new_with_retry<U: ToString>(
        url: U,
        commitment_config: Option<CommitmentConfig>,
        retry_config: Option<RetryConfig>,
    ) -> Self {
        let commitment_config = commitment_config.unwrap_or(CommitmentConfig::confirmed());
        let client = RpcClient::new_with_commitment(url.to_string(), commitment_config);
        Self {
            client,
            retry_config: retry_config.unwrap_or_default(),
        }
    }

    fn should_retry(&self, error: &RpcError) -> bool {
        // A TransactionError is a deterministic rejection; resending the
        // same transaction cannot succeed.
        error.transaction_error().is_none()
    }

    async fn retry<F, Fut, T>(&self, operation: F) -> Result<T, RpcError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, RpcError>>,
    {
        let mut attempts = 0;
        let start_time = Instant::now();
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if !self.should_retry(&e) {
                        return Err(e);
                    }
                    attempts += 1;
                    if attempts >= self.retry_config.max_retries
                        || start_time.elapsed() >= self.retry_config.timeout
                    {
                        return Err(e);
                    }
                    warn!(
                        "RPC operation failed, retrying in {:?} (attempt {}/{}): {:?}",
                        self.retry_config.retry_delay, attempts, self.retry_config.max_retries, e
                    );
                    sleep(self.retry_config.retry_delay).await;
                }
            }
        }
    }
}

#[async_trait]
impl RpcConnection for SolanaRpcConnection {
    fn url(&self) -> String {
        self.client.url()
    }

    fn commitment(&self) -> CommitmentConfig {
        self.client.commitment()
    }

    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        self.retry(|| async {
            self.client
                .get_account_with_commitment(&address, self.client.commitment())
                .map(|response| response.value)
                .map_err(RpcError::from)
        })
        .await
    }

    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError> {
        self.retry(|| async {
            self.client
                // Confirmed blockhashes land more reliably than finalized ones.
                .get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())
                .map(|(blockhash, _)| blockhash)
                .map_err(RpcError::from)
        })
        .await
    }

    async fn send_transaction(
        &mut self,
        transaction: &Transaction,
    ) -> Result<Signature, RpcError> {
        // No retry wrapper: resubmitting from here would race the workflow's
        // idempotency check. Preflight stays on so deterministic rejections
        // surface as TransactionErrors before the transaction lands.
        self.client
            .send_transaction(transaction)
            .map_err(RpcError::from)
    }

    async fn confirm_transaction(&mut self, signature: &Signature) -> Result<bool, RpcError> {
        let deadline = Instant::now() + self.retry_config.timeout;
        loop {
            let confirmed = self
                .client
                .confirm_transaction_with_commitment(signature, self.client.commitment())
                .map(|response| response.value)
                .map_err(RpcError::from)?;
            if confirmed {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            sleep(self.retry_config.retry_delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_url_display() {
        assert_eq!(
            SolanaRpcUrl::Devnet.to_string(),
            "https://api.devnet.solana.com"
        );
        assert_eq!(
            SolanaRpcUrl::Custom("http://127.0.0.1:8899".to_string()).to_string(),
            "http://127.0.0.1:8899"
        );
    }

    #[test]
    fn test_connection_defaults() {
        let rpc = SolanaRpcConnection::new(SolanaRpcUrl::Devnet, None);
        assert_eq!(rpc.client.commitment(), CommitmentConfig::confirmed());
        assert_eq!(rpc.retry_config.max_retries, 30);
    }
}
