use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mint a Legal DID NFT to a recipient wallet for an order id.
    Mint(MintArgs),
    /// Show the derived addresses and mint status for an order id.
    Check(CheckArgs),
}

#[derive(Parser, Clone, Debug)]
pub struct MintArgs {
    /// Recipient wallet address.
    pub recipient: String,

    /// Globally unique order id; at most one NFT is ever minted per order id.
    pub order_id: String,

    /// Attestation merkle root. A placeholder root is submitted when omitted.
    pub merkle_root: Option<String>,

    #[arg(
        long,
        env = "LEGALDID_RPC_URL",
        default_value = "https://api.devnet.solana.com"
    )]
    pub rpc_url: String,

    /// Path to the mint authority keypair; defaults to the Solana CLI wallet.
    #[arg(long, env = "LEGALDID_KEYPAIR")]
    pub keypair: Option<PathBuf>,

    #[arg(long, env = "LEGALDID_COMMITMENT", default_value = "confirmed")]
    pub commitment: String,
}

#[derive(Parser, Clone, Debug)]
pub struct CheckArgs {
    /// Order id to inspect.
    pub order_id: String,

    /// Also derive the recipient's token account for this order's mint.
    #[arg(long)]
    pub recipient: Option<String>,

    #[arg(
        long,
        env = "LEGALDID_RPC_URL",
        default_value = "https://api.devnet.solana.com"
    )]
    pub rpc_url: String,

    #[arg(long, env = "LEGALDID_COMMITMENT", default_value = "confirmed")]
    pub commitment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_args_positional() {
        let cli = Cli::try_parse_from([
            "legaldid-minter",
            "mint",
            "7s3NWENLzKzL18yGfy4rQNYFQPNFhiHnXYSgjptEwhBg",
            "d275d072-21e1-48d3-b17c-e0855712b067",
        ])
        .unwrap();
        match cli.command {
            Commands::Mint(args) => {
                assert_eq!(args.order_id, "d275d072-21e1-48d3-b17c-e0855712b067");
                assert!(args.merkle_root.is_none());
                assert_eq!(args.rpc_url, "https://api.devnet.solana.com");
                assert_eq!(args.commitment, "confirmed");
            }
            _ => panic!("expected mint subcommand"),
        }
    }

    #[test]
    fn test_mint_args_with_merkle_root() {
        let cli = Cli::try_parse_from([
            "legaldid-minter",
            "mint",
            "7s3NWENLzKzL18yGfy4rQNYFQPNFhiHnXYSgjptEwhBg",
            "order-1",
            "764e6372e05f4db05595276214e74f047a6562f19bf6cc3bb35a53ac892c3ce3",
            "--rpc-url",
            "http://localhost:8899",
        ])
        .unwrap();
        match cli.command {
            Commands::Mint(args) => {
                assert!(args.merkle_root.is_some());
                assert_eq!(args.rpc_url, "http://localhost:8899");
            }
            _ => panic!("expected mint subcommand"),
        }
    }

    #[test]
    fn test_mint_requires_order_id() {
        let result = Cli::try_parse_from([
            "legaldid-minter",
            "mint",
            "7s3NWENLzKzL18yGfy4rQNYFQPNFhiHnXYSgjptEwhBg",
        ]);
        assert!(result.is_err());
    }
}
