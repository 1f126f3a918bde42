//! Client library for the Legal DID airdrop program.
//!
//! Issues one non-transferable identity NFT per order id: addresses are
//! derived deterministically from the order id ([`pda`]), the airdrop
//! instruction is encoded byte-for-byte against the on-chain program
//! ([`instruction`]), and [`mint::MintWorkflow`] runs the idempotent
//! check → build → submit → confirm sequence over an [`rpc::RpcConnection`].

pub mod constants;
pub mod error;
pub mod instruction;
pub mod mint;
pub mod pda;
pub mod rpc;

pub use constants::AirdropConfig;
pub use error::{DerivationError, MintError};
pub use mint::{MintOutcome, MintRequest, MintState, MintWorkflow};
