use std::io;

use solana_client::client_error::ClientError;
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("TransactionError: {0}")]
    TransactionError(#[from] Box<TransactionError>),

    #[error("ClientError: {0}")]
    ClientError(#[from] Box<ClientError>),

    #[error("IoError: {0}")]
    IoError(#[from] Box<io::Error>),

    #[error("Error: `{0}`")]
    CustomError(String),
}

impl From<TransactionError> for RpcError {
    fn from(err: TransactionError) -> Self {
        RpcError::TransactionError(Box::new(err))
    }
}

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        RpcError::ClientError(Box::new(err))
    }
}

impl From<io::Error> for RpcError {
    fn from(err: io::Error) -> Self {
        RpcError::IoError(Box::new(err))
    }
}

impl RpcError {
    /// The `TransactionError` behind this failure, if the ledger runtime
    /// produced one. Present means the transaction was rejected on-chain or
    /// in preflight, absent means the failure was transport-level.
    pub fn transaction_error(&self) -> Option<TransactionError> {
        match self {
            RpcError::TransactionError(err) => Some((**err).clone()),
            RpcError::ClientError(err) => err.get_transaction_error(),
            _ => None,
        }
    }
}
