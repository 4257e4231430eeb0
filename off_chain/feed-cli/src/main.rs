use std::num::NonZeroU64;
use std::path::PathBuf;

use anchor_client::solana_sdk::commitment_config::CommitmentConfig;
use anchor_client::Cluster;
use anyhow::{Context, Result};
use chainlink_oracle::{AccountSource, ChainlinkOracle, RoundData};
use clap::{Parser, Subcommand};
use feed_link::FeedLink;
use solana_client::nonblocking::rpc_client::RpcClient;
use tracing::info;

mod cluster_parse;
mod config;

use cluster_parse::parse;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Connect to solana validator
    #[clap(long, env, parse(try_from_str=parse), default_value = "localnet")]
    cluster: Cluster,

    /// Chainlink feed account, base58 or 0x prefixed hex
    #[clap(long, env)]
    feed_address: Option<String>,

    /// Optional JSON feed configuration file.
    /// Command line values take precedence over the file content
    #[clap(long, env, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Upper bound of a single RPC request in milliseconds
    #[clap(long, env)]
    timeout_ms: Option<NonZeroU64>,

    /// Set flag to activate json log output
    #[clap(long, env = "JSON_LOGS")]
    json: bool,

    /// Subcommand to execute
    #[clap(subcommand)]
    action: Actions,
}

#[derive(Debug, Subcommand)]
enum Actions {
    /// Display the feed summary and its latest round
    #[clap()]
    Show,

    /// Display the full decoded feed header
    #[clap()]
    Header,

    /// Print the latest round as JSON
    #[clap()]
    Latest,

    /// Print a past round as JSON.
    /// Rounds only kept in the historical ring are rounded down to the ring granularity
    #[clap(arg_required_else_help = true)]
    Round {
        /// Round to look up
        #[clap(long, env)]
        round_id: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Args = Args::parse();

    if args.json {
        tracing_subscriber::fmt().json().init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let config = config::resolve(args.config.as_deref(), args.feed_address, args.timeout_ms)?;

    let rpc = RpcClient::new_with_commitment(
        args.cluster.url().to_string(),
        CommitmentConfig::confirmed(),
    );
    let link = FeedLink::new(rpc, config.timeout());
    let oracle = ChainlinkOracle::new(&config, link)?;

    info!(cluster = %args.cluster.url(), feed = %oracle.feed_address(), "Reading feed");

    match args.action {
        Actions::Show => show(&oracle).await,
        Actions::Header => header(&oracle).await,
        Actions::Latest => {
            let round = oracle
                .latest_round_data()
                .await
                .context("Cannot read latest round")?;
            print_round(&round)
        }
        Actions::Round { round_id } => {
            let round = oracle
                .get_round_data(round_id)
                .await
                .with_context(|| format!("Cannot read round {round_id}"))?;
            print_round(&round)
        }
    }
}

async fn show<S: AccountSource>(oracle: &ChainlinkOracle<S>) -> Result<()> {
    let (header, latest) = tokio::try_join!(oracle.header(), oracle.latest_round_data())
        .context("Cannot read feed")?;
    info!(
        version = header.version,
        description = %header.description,
        decimals = header.decimals,
        round_id = latest.round_id,
        answer = %latest.answer,
        updated_at = latest.updated_at,
    );
    Ok(())
}

async fn header<S: AccountSource>(oracle: &ChainlinkOracle<S>) -> Result<()> {
    let header = oracle.header().await.context("Cannot read feed header")?;
    let rings = oracle.ring_buffers().await.context("Cannot read feed rings")?;
    info!(?header);
    info!(
        historical_length = rings.historical_length,
        oldest_live_round = rings.live_oldest_round(),
        latest_historical_round = ?rings.latest_historical_round(),
    );
    Ok(())
}

fn print_round(round: &RoundData) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(round)?);
    Ok(())
}
