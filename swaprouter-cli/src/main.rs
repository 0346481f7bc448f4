use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use cosmwasm_std::{Decimal, Uint128};
use log::info;
use serde::Serialize;
use swaprouter_chain_client_utils::{
    common::transaction::TransactionResponse,
    cosmos::{fee::TxFee, grpc_client::GrpcSigningClient},
    osmosis::{OsmosisClient, OsmosisQueryClient},
};
use swaprouter_client::{SwaprouterClient, SwaprouterQueryClient};
use swaprouter_utils::msg::{Slippage, SwapAmountInRoute};

use crate::config::{load_config, CliConfig};

mod config;
mod parse;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "swaprouter.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query the contract owner
    GetOwner,
    /// Query the pool route configured for a denom pair
    GetRoute {
        input_denom: String,
        output_denom: String,
    },
    /// Set the pool route for a denom pair. Hops are given as `<pool_id>:<token_out_denom>`
    SetRoute {
        input_denom: String,
        output_denom: String,
        #[arg(required = true, value_parser = parse::parse_hop)]
        hops: Vec<SwapAmountInRoute>,
        #[command(flatten)]
        tx: TxArgs,
    },
    /// Swap a coin such as `1000uosmo` along the configured route
    Swap {
        #[arg(value_parser = parse::parse_coin)]
        input_coin: cosmwasm_std::Coin,
        output_denom: String,
        /// Minimum amount of the output denom to receive
        #[arg(
            long,
            conflicts_with = "max_price_impact",
            required_unless_present = "max_price_impact"
        )]
        min_output: Option<Uint128>,
        /// Maximum price impact of the swap, as a decimal percentage
        #[arg(long)]
        max_price_impact: Option<Decimal>,
        #[command(flatten)]
        tx: TxArgs,
    },
}

#[derive(clap::Args, Debug)]
struct TxArgs {
    /// Multiplier for the simulated gas, instead of the chain default
    #[arg(long)]
    gas_multiplier: Option<f64>,
    /// Memo attached to the transaction
    #[arg(long)]
    memo: Option<String>,
}

impl TxArgs {
    fn fee(&self) -> TxFee {
        self.gas_multiplier
            .map(TxFee::from)
            .unwrap_or_default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let config = load_config(&args.config)?;

    info!(
        "using swaprouter {} on {}",
        config.contract.address, config.chain.chain_id
    );

    match args.command {
        Command::GetOwner => {
            let client = query_client(&config);
            print_json(&client.get_owner().await?)?;
        }
        Command::GetRoute {
            input_denom,
            output_denom,
        } => {
            let client = query_client(&config);
            print_json(&client.get_route(&input_denom, &output_denom).await?)?;
        }
        Command::SetRoute {
            input_denom,
            output_denom,
            hops,
            tx,
        } => {
            let client = signing_client(&config, "set a route")?;
            let response = client
                .set_route(
                    &input_denom,
                    &output_denom,
                    hops,
                    tx.fee(),
                    tx.memo.as_deref(),
                    vec![],
                )
                .await?;
            print_tx(&response);
        }
        Command::Swap {
            input_coin,
            output_denom,
            min_output,
            max_price_impact,
            tx,
        } => {
            let slippage = match (min_output, max_price_impact) {
                (Some(min_output), _) => Slippage::MinOutputAmount(min_output),
                (None, Some(max_price_impact)) => {
                    Slippage::MaxPriceImpactPercentage(max_price_impact)
                }
                (None, None) => {
                    return Err("one of --min-output or --max-price-impact is required".into())
                }
            };
            let funds = vec![parse::to_funds(&input_coin)?];

            let client = signing_client(&config, "swap")?;
            let response = client
                .swap(
                    input_coin,
                    &output_denom,
                    slippage,
                    tx.fee(),
                    tx.memo.as_deref(),
                    funds,
                )
                .await?;
            print_tx(&response);
        }
    }

    Ok(())
}

fn query_client(config: &CliConfig) -> SwaprouterQueryClient<OsmosisQueryClient> {
    SwaprouterQueryClient::new(
        OsmosisQueryClient::new(&config.chain.grpc),
        &config.contract.address,
    )
}

fn signing_client(
    config: &CliConfig,
    action: &str,
) -> Result<SwaprouterClient<OsmosisClient>, Box<dyn Error>> {
    let mnemonic = config.signer_mnemonic(action)?;

    let mut osmosis_client =
        OsmosisClient::new(&config.chain.grpc, mnemonic, &config.chain.chain_id);
    if let Some(gas_price) = config.chain.gas_price {
        osmosis_client = osmosis_client.with_gas_price(gas_price);
    }
    if let Some(gas_adjustment) = config.chain.gas_adjustment {
        osmosis_client = osmosis_client.with_gas_adjustment(gas_adjustment);
    }

    let sender = osmosis_client.signer_address()?.to_string();
    info!("signing as {sender}");

    Ok(SwaprouterClient::new(
        osmosis_client,
        &sender,
        &config.contract.address,
    ))
}

fn print_json(value: &impl Serialize) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_tx(response: &TransactionResponse) {
    println!(
        "tx {} included at height {} (gas used {}/{})",
        response.hash, response.block_height, response.gas_used, response.gas_wanted
    );
}
