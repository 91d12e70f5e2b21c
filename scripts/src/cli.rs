//! Definitions of CLI arguments and commands for the deploy scripts

use std::path::{Path, PathBuf};

use alloy::providers::DynProvider;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, transfer_ownership},
    config::{DeployConfig, DeployFlags},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_RPC_URL, DEPLOY_ALL_ENV_VAR,
        DEPLOY_FONKYBATS_ENV_VAR, DEPLOY_FONKYBATS_SALE_ENV_VAR, MAINNET_NETWORK,
    },
    errors::ScriptError,
};

/// Deploy the FonkyBat contracts to an EVM chain
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to the file in which deployed addresses are recorded
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy script commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy `FonkyBat` and/or `FonkyBatFactory`
    Deploy(DeployArgs),
    /// Transfer ownership of an `Ownable` contract
    TransferOwnership(TransferOwnershipArgs),
}

impl Command {
    /// Run the command against the given client
    pub async fn run(
        self,
        client: DynProvider,
        deployments_path: &Path,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, client, deployments_path).await,
            Command::TransferOwnership(args) => transfer_ownership(args, client).await,
        }
    }
}

/// Deploy the base contract and/or the factory.
///
/// The factory receives ownership of the base contract once deployed. Which
/// contracts are deployed is controlled by `DEPLOY_FONKYBATS` and
/// `DEPLOY_FONKYBATS_SALE`, each defaulting to `DEPLOY_ALL`.
#[derive(Args)]
pub struct DeployArgs {
    /// The network to deploy to, selecting the OpenSea proxy registry
    #[arg(short, long, env = "NETWORK", default_value = MAINNET_NETWORK)]
    pub network: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Address of an already deployed `FonkyBat` contract, used when only
    /// the factory is deployed. Defaults to the entry in the deployments file
    #[arg(short, long)]
    pub fonkybat: Option<String>,

    /// Deploy every contract unless overridden by a specific flag
    ///
    /// `0`, `false`, `no` and `off` (any case) disable it, unlike the Truffle
    /// migration, which treated any non-empty value as enabled
    #[arg(long, env = DEPLOY_ALL_ENV_VAR)]
    pub deploy_all: Option<String>,

    /// Deploy the `FonkyBat` contract
    ///
    /// `0`, `false`, `no` and `off` (any case) disable it, unlike the Truffle
    /// migration, which treated any non-empty value as enabled
    #[arg(long, env = DEPLOY_FONKYBATS_ENV_VAR)]
    pub deploy_fonkybats: Option<String>,

    /// Deploy the `FonkyBatFactory` contract and transfer it ownership of `FonkyBat`
    ///
    /// `0`, `false`, `no` and `off` (any case) disable it, unlike the Truffle
    /// migration, which treated any non-empty value as enabled
    #[arg(long, env = DEPLOY_FONKYBATS_SALE_ENV_VAR)]
    pub deploy_fonkybats_sale: Option<String>,
}

impl DeployArgs {
    /// Build the run configuration from the parsed arguments
    pub fn config(&self) -> DeployConfig {
        let flags = DeployFlags::from_values(
            self.deploy_all.as_deref(),
            self.deploy_fonkybats.as_deref(),
            self.deploy_fonkybats_sale.as_deref(),
        );
        DeployConfig::new(self.network.clone(), flags)
    }
}

/// Transfer ownership of a deployed contract, e.g. to finish a deployment
/// that failed after the factory was deployed
#[derive(Args)]
pub struct TransferOwnershipArgs {
    /// Address of the `Ownable` contract
    #[arg(short, long)]
    pub contract: String,

    /// Address of the new owner
    #[arg(short, long)]
    pub new_owner: String,
}
