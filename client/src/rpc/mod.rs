pub mod errors;
pub mod mock_rpc;
pub mod rpc_connection;
pub mod solana_rpc;

pub use errors::RpcError;
pub use mock_rpc::MockRpcConnection;
pub use rpc_connection::RpcConnection;
pub use solana_rpc::{RetryConfig, SolanaRpcConnection, SolanaRpcUrl};
