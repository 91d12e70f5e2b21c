//! Utilities for the deploy scripts.

use std::{
    fs::{self, File},
    io::Read,
    path::Path,
    str::FromStr,
};

use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_primitives::Address;
use json::JsonValue;
use tracing::info;

use crate::{constants::DEPLOYMENTS_KEY, errors::ScriptError};

/// Sets up the signing client with which contracts are deployed and called,
/// checking that the RPC endpoint is reachable
pub async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let deployer_address = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);
    let client = DynProvider::new(provider);

    let chain_id = client
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!("Deploying from {deployer_address:#x} on chain {chain_id}");

    Ok(client)
}

/// Parses the given address string
pub fn parse_address(address: &str) -> Result<Address, ScriptError> {
    Address::from_str(address).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Reads and parses the JSON file at `file_path`
pub fn get_json_from_file(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Reads the address of a deployed contract from the deployments file.
///
/// Returns `None` if the file does not exist or has no entry for the contract.
pub fn read_deployed_address(
    file_path: &Path,
    contract_key: &str,
) -> Result<Option<Address>, ScriptError> {
    if !file_path.exists() {
        return Ok(None);
    }
    let parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key]
        .as_str()
        .map(|addr| {
            Address::from_str(addr).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
        })
        .transpose()
}

/// Records the address of a deployed contract in the deployments file,
/// creating the file if it doesn't exist
pub fn write_deployed_address(
    file_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !file_path.exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json =
        get_json_from_file(file_path).map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn deployments_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let fonkybat = address!("00000000000000000000000000000000000000aa");
        let factory = address!("00000000000000000000000000000000000000bb");

        assert_eq!(read_deployed_address(&path, "FonkyBat").unwrap(), None);

        write_deployed_address(&path, "FonkyBat", fonkybat).unwrap();
        write_deployed_address(&path, "FonkyBatFactory", factory).unwrap();

        assert_eq!(
            read_deployed_address(&path, "FonkyBat").unwrap(),
            Some(fonkybat)
        );
        assert_eq!(
            read_deployed_address(&path, "FonkyBatFactory").unwrap(),
            Some(factory)
        );
    }

    #[test]
    fn malformed_deployments_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, r#"{"deployments": {"FonkyBat": "not an address"}}"#).unwrap();

        let err = read_deployed_address(&path, "FonkyBat").unwrap_err();
        assert!(matches!(err, ScriptError::ReadDeployments(_)));
    }

    #[test]
    fn parse_address_rejects_garbage() {
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("0xa5409ec958c83c3f309868babaca7c86dcb077c1").is_ok());
    }
}
