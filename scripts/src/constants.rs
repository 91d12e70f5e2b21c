//! Constants used in the deploy scripts

use alloy_primitives::{address, Address};

/// The OpenSea proxy registry on the Rinkeby test network
pub const TEST_PROXY_REGISTRY_ADDRESS: Address = address!("f57b2c51ded3a29e6891aba85459d600256cf317");

/// The OpenSea proxy registry on mainnet, also used for any network
/// that is not a known test network
pub const MAINNET_PROXY_REGISTRY_ADDRESS: Address =
    address!("a5409ec958c83c3f309868babaca7c86dcb077c1");

/// Network names that resolve to the test proxy registry
pub const TEST_NETWORKS: [&str; 2] = ["rinkeby", "testnet"];

/// The name of the mainnet network
pub const MAINNET_NETWORK: &str = "mainnet";

/// The gas limit for the `FonkyBat` deployment transaction
pub const FONKYBAT_GAS_LIMIT: u64 = 5_000_000;

/// The gas limit for the `FonkyBatFactory` deployment transaction
pub const FONKYBAT_FACTORY_GAS_LIMIT: u64 = 7_000_000;

/// The environment variable enabling every deployment
pub const DEPLOY_ALL_ENV_VAR: &str = "DEPLOY_ALL";

/// The environment variable gating the `FonkyBat` deployment
pub const DEPLOY_FONKYBATS_ENV_VAR: &str = "DEPLOY_FONKYBATS";

/// The environment variable gating the `FonkyBatFactory` deployment
/// and the ownership transfer
pub const DEPLOY_FONKYBATS_SALE_ENV_VAR: &str = "DEPLOY_FONKYBATS_SALE";

/// Flag values that are read as false
pub const FALSY_VALUES: [&str; 4] = ["0", "false", "no", "off"];

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The `FonkyBat` contract key in the `deployments.json` file
pub const FONKYBAT_CONTRACT_KEY: &str = "FonkyBat";

/// The `FonkyBatFactory` contract key in the `deployments.json` file
pub const FONKYBAT_FACTORY_CONTRACT_KEY: &str = "FonkyBatFactory";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

/// The default RPC URL, a local devnet node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The extension of a compilation artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The bytecode key in a compilation artifact
pub const BYTECODE_KEY: &str = "bytecode";

/// The nested bytecode key used by Foundry artifacts
pub const BYTECODE_OBJECT_KEY: &str = "object";
