mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use legaldid_client::constants::AirdropConfig;
use legaldid_client::mint::{MintOutcome, MintRequest, MintWorkflow};
use legaldid_client::pda;
use legaldid_client::rpc::{RpcConnection, SolanaRpcConnection};
use legaldid_client::MintError;
use solana_sdk::pubkey::Pubkey;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{CheckArgs, Cli, Commands, MintArgs};

fn setup_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true))
        .with(env_filter)
        .init();
}

fn explorer_url(rpc_url: &str, kind: &str, value: &str) -> String {
    if rpc_url.contains("devnet") {
        format!("https://explorer.solana.com/{kind}/{value}?cluster=devnet")
    } else {
        format!("https://explorer.solana.com/{kind}/{value}")
    }
}

async fn mint(args: &MintArgs) -> anyhow::Result<MintOutcome> {
    let recipient: Pubkey = args.recipient.parse().map_err(|_| {
        MintError::InvalidInput(format!("invalid recipient address: {}", args.recipient))
    })?;
    let commitment = config::parse_commitment(&args.commitment)?;
    let keypair_path = args
        .keypair
        .clone()
        .unwrap_or_else(config::default_keypair_path);
    let authority = config::load_authority(&keypair_path)
        .map_err(|e| MintError::CredentialUnavailable(e.to_string()))?;

    let mut rpc = SolanaRpcConnection::new(&args.rpc_url, Some(commitment));
    let mut workflow = MintWorkflow::new(AirdropConfig::default(), authority);
    info!(
        authority = %workflow.authority_pubkey(),
        recipient = %recipient,
        order_id = %args.order_id,
        rpc_url = %args.rpc_url,
        "starting airdrop"
    );

    let mut request = MintRequest::new(recipient, args.order_id.clone());
    if let Some(merkle_root) = &args.merkle_root {
        request = request.with_merkle_root(merkle_root.clone());
    }
    Ok(workflow.mint(&mut rpc, &request).await?)
}

async fn run_mint(args: MintArgs) -> i32 {
    match mint(&args).await {
        Ok(MintOutcome::Minted {
            signature,
            nft_mint,
        }) => {
            info!(%signature, %nft_mint, "mint confirmed");
            println!("signature: {signature}");
            println!("nft mint:  {nft_mint}");
            println!("{}", explorer_url(&args.rpc_url, "tx", &signature.to_string()));
            0
        }
        Ok(MintOutcome::AlreadyMinted { nft_mint }) => {
            error!(%nft_mint, order_id = %args.order_id, "order id already minted");
            1
        }
        Err(err) => {
            error!("mint failed: {err:#}");
            1
        }
    }
}

async fn check(args: &CheckArgs) -> anyhow::Result<()> {
    let commitment = config::parse_commitment(&args.commitment)?;
    let airdrop_config = AirdropConfig::default();

    let (project, _) = pda::find_project_address(&airdrop_config)?;
    let (collection_mint, _) = pda::find_collection_mint_address(&airdrop_config)?;
    let (nft_mint, _) = pda::find_nft_mint_address(&airdrop_config, &args.order_id)?;
    println!("project:         {project}");
    println!("collection mint: {collection_mint}");
    println!("nft mint:        {nft_mint}");
    if let Some(recipient) = &args.recipient {
        let recipient: Pubkey = recipient.parse().context("invalid recipient address")?;
        let recipient_token =
            pda::find_recipient_token_address(&airdrop_config, &recipient, &nft_mint);
        println!("recipient token: {recipient_token}");
    }

    let mut rpc = SolanaRpcConnection::new(&args.rpc_url, Some(commitment));
    let project_account = rpc.get_account(project).await?;
    let mint_account = rpc.get_account(nft_mint).await?;
    println!(
        "project initialized: {}",
        if project_account.is_some() { "yes" } else { "no" }
    );
    println!(
        "order id minted:     {}",
        if mint_account.is_some() { "yes" } else { "no" }
    );
    Ok(())
}

async fn run_check(args: CheckArgs) -> i32 {
    match check(&args).await {
        Ok(()) => 0,
        Err(err) => {
            error!("check failed: {err:#}");
            1
        }
    }
}

#[tokio::main]
async fn main() {
    setup_telemetry();
    let cli = Cli::parse();
    let exit_code = match cli.command {
        Commands::Mint(args) => run_mint(args).await,
        Commands::Check(args) => run_check(args).await,
    };
    std::process::exit(exit_code);
}
