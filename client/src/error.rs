use solana_sdk::signature::Signature;
use thiserror::Error;

use crate::rpc::errors::RpcError;

/// Address derivation failed. Only possible when no bump in the legal range
/// produces an off-curve address, which indicates a misconfigured program id
/// rather than a recoverable runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerivationError {
    #[error("no valid bump seed found deriving the {0} address")]
    BumpNotFound(&'static str),
}

#[derive(Error, Debug)]
pub enum MintError {
    #[error("invalid mint request: {0}")]
    InvalidInput(String),

    #[error("signing credential unavailable: {0}")]
    CredentialUnavailable(String),

    #[error("derivation error: {0}")]
    Derivation(#[from] DerivationError),

    /// RPC failure before anything was submitted. The workflow can safely be
    /// re-run from the existence check.
    #[error("transport error: {0}")]
    Transport(#[source] RpcError),

    /// The transaction was submitted but its confirmation was never observed.
    /// The mint may or may not have landed; re-run the existence check for
    /// the same order id before any retry, never resubmit blindly.
    #[error("transaction {signature} submitted but confirmation was not observed")]
    SubmissionAmbiguous {
        signature: Signature,
        #[source]
        source: Option<RpcError>,
    },

    /// The program itself rejected the instruction (bad seeds, unauthorized
    /// signer, malformed merkle root). Fatal for this order id until the
    /// underlying cause is corrected.
    #[error("on-chain program rejected the airdrop: {source}")]
    OnChainRejection {
        #[source]
        source: RpcError,
    },
}

impl MintError {
    /// Classify an RPC failure from the submission path: errors carrying a
    /// `TransactionError` were rejected by the program (or the runtime),
    /// everything else is transport.
    pub(crate) fn from_submission_failure(error: RpcError) -> Self {
        if error.transaction_error().is_some() {
            MintError::OnChainRejection { source: error }
        } else {
            MintError::Transport(error)
        }
    }
}
