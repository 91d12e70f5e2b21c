//! Implementations of the deploy scripts

use std::{fmt::LowerHex, path::Path};

use alloy::providers::DynProvider;
use alloy_primitives::{Address, TxHash};
use alloy_sol_types::SolValue;
use tracing::{info, warn};

use crate::{
    chain::{send_ownership_transfer, ChainDeployer},
    cli::{DeployArgs, TransferOwnershipArgs},
    config::{DeployConfig, DeployFlags},
    constants::{FONKYBAT_FACTORY_GAS_LIMIT, FONKYBAT_GAS_LIMIT},
    deployer::{ContractKind, DeployOptions, Deployer},
    errors::ScriptError,
    network::{is_test_network, proxy_registry_address},
    solidity::IOwnable,
    utils::{parse_address, read_deployed_address},
};

/// The outcome of a deployment run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentReport {
    /// The proxy registry passed to the constructors
    pub proxy_registry: Address,
    /// The `FonkyBat` address, if it was deployed in this run
    pub fonkybat: Option<Address>,
    /// The `FonkyBatFactory` address, if it was deployed in this run
    pub factory: Option<Address>,
    /// The hash of the ownership transfer transaction, if one was sent
    pub ownership_transfer: Option<TxHash>,
}

/// Deploys the contracts selected by `config`.
///
/// 1. Resolves the proxy registry for the configured network
/// 2. Deploys `FonkyBat` if requested
/// 3. Deploys `FonkyBatFactory` if requested, then transfers ownership of
///    `FonkyBat` to it
///
/// When the factory is deployed without `FonkyBat` in the same run,
/// `existing_fonkybat` must hold the address of a prior deployment.
///
/// Errors abort the remaining steps. Transactions already confirmed are left as-is.
pub async fn deploy_contracts(
    deployer: &impl Deployer,
    config: DeployConfig,
    existing_fonkybat: Option<Address>,
) -> Result<DeploymentReport, ScriptError> {
    let proxy_registry = proxy_registry_address(&config.network);
    info!(
        "Using proxy registry {proxy_registry:#x} for network `{}`",
        config.network
    );

    let mut report = DeploymentReport {
        proxy_registry,
        ..Default::default()
    };

    if config.flags.is_empty() {
        info!("No deployments requested");
        return Ok(report);
    }

    // Resolve the base contract dependency before sending anything
    if config.flags.fonkybats_sale && !config.flags.fonkybats && existing_fonkybat.is_none() {
        return Err(ScriptError::MissingBaseContract);
    }

    let mut fonkybat = existing_fonkybat;
    if config.flags.fonkybats {
        let address = deployer
            .deploy(
                ContractKind::FonkyBat,
                (proxy_registry,).abi_encode_params().into(),
                DeployOptions::with_gas_limit(FONKYBAT_GAS_LIMIT),
            )
            .await?;
        info!("FonkyBat deployed at {address:#x}");

        report.fonkybat = Some(address);
        fonkybat = Some(address);
    }

    if config.flags.fonkybats_sale {
        let fonkybat = fonkybat.ok_or(ScriptError::MissingBaseContract)?;

        let factory = deployer
            .deploy(
                ContractKind::FonkyBatFactory,
                (proxy_registry, fonkybat).abi_encode_params().into(),
                DeployOptions::with_gas_limit(FONKYBAT_FACTORY_GAS_LIMIT),
            )
            .await?;
        info!("FonkyBatFactory deployed at {factory:#x}");
        report.factory = Some(factory);

        let tx_hash = deployer.transfer_ownership(fonkybat, factory).await?;
        info!("Transferred ownership of FonkyBat {fonkybat:#x} to {factory:#x}");
        report.ownership_transfer = Some(tx_hash);
    }

    Ok(report)
}

/// Runs the `deploy` command, recording each new address in the deployments file
/// as soon as its deployment is confirmed
pub async fn deploy(
    args: DeployArgs,
    client: DynProvider,
    deployments_path: &Path,
) -> Result<(), ScriptError> {
    let config = args.config();
    if is_test_network(&config.network) {
        warn!(
            "Deploying to test network `{}` - THIS SHOULD ONLY BE DONE FOR TESTING",
            config.network
        );
    }

    let existing_fonkybat =
        resolve_existing_fonkybat(args.fonkybat.as_deref(), config.flags, deployments_path)?;

    let deployer =
        ChainDeployer::new(client, args.artifacts_dir).with_deployments_path(deployments_path);
    let report = deploy_contracts(&deployer, config, existing_fonkybat).await?;

    info!(
        "Deployment complete: registry {:#x}, FonkyBat {}, FonkyBatFactory {}, ownership transfer {}",
        report.proxy_registry,
        display_or_none(report.fonkybat),
        display_or_none(report.factory),
        display_or_none(report.ownership_transfer),
    );

    Ok(())
}

/// Resolves the address of a `FonkyBat` deployed in an earlier run.
///
/// Only needed when the factory is deployed without `FonkyBat` in the same run;
/// in every other case this is `None` and the deployments file is not read. An
/// explicit `--fonkybat` address takes precedence over the deployments file.
pub fn resolve_existing_fonkybat(
    fonkybat_arg: Option<&str>,
    flags: DeployFlags,
    deployments_path: &Path,
) -> Result<Option<Address>, ScriptError> {
    if !flags.fonkybats_sale || flags.fonkybats {
        return Ok(None);
    }

    match fonkybat_arg {
        Some(address) => parse_address(address).map(Some),
        None => read_deployed_address(deployments_path, ContractKind::FonkyBat.deployments_key()),
    }
}

/// Formats an optional address or hash for the deployment summary
fn display_or_none<T: LowerHex>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| format!("{v:#x}"))
}

/// Runs the `transfer-ownership` command
pub async fn transfer_ownership(
    args: TransferOwnershipArgs,
    client: DynProvider,
) -> Result<(), ScriptError> {
    let contract = parse_address(&args.contract)?;
    let new_owner = parse_address(&args.new_owner)?;

    let previous_owner = IOwnable::new(contract, &client)
        .owner()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        ._0;
    info!("Current owner of {contract:#x} is {previous_owner:#x}");

    let tx_hash = send_ownership_transfer(&client, contract, new_owner).await?;
    info!("Transferred ownership of {contract:#x} to {new_owner:#x} in tx {tx_hash:#x}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alloy_primitives::address;

    use super::*;
    use crate::utils::write_deployed_address;

    /// The `FonkyBat` address recorded in the deployments file
    const RECORDED: Address = address!("00000000000000000000000000000000000000aa");

    const SALE_ONLY: DeployFlags = DeployFlags {
        fonkybats: false,
        fonkybats_sale: true,
    };

    #[test]
    fn missing_file_means_no_existing_deployment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");

        assert_eq!(resolve_existing_fonkybat(None, SALE_ONLY, &path), Ok(None));
    }

    #[test]
    fn missing_key_means_no_existing_deployment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        write_deployed_address(&path, "FonkyBatFactory", RECORDED).unwrap();

        assert_eq!(resolve_existing_fonkybat(None, SALE_ONLY, &path), Ok(None));
    }

    #[test]
    fn recorded_address_is_used_for_sale_only_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        write_deployed_address(&path, "FonkyBat", RECORDED).unwrap();

        assert_eq!(
            resolve_existing_fonkybat(None, SALE_ONLY, &path),
            Ok(Some(RECORDED))
        );
    }

    #[test]
    fn explicit_address_overrides_deployments_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        write_deployed_address(&path, "FonkyBat", RECORDED).unwrap();

        let explicit = address!("00000000000000000000000000000000000000bb");
        assert_eq!(
            resolve_existing_fonkybat(
                Some("0x00000000000000000000000000000000000000bb"),
                SALE_ONLY,
                &path
            ),
            Ok(Some(explicit))
        );
    }

    #[test]
    fn deployments_file_ignored_unless_sale_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, "not json").unwrap();

        let nothing = DeployFlags::default();
        let base_only = DeployFlags {
            fonkybats: true,
            fonkybats_sale: false,
        };
        let both = DeployFlags {
            fonkybats: true,
            fonkybats_sale: true,
        };
        for flags in [nothing, base_only, both] {
            assert_eq!(resolve_existing_fonkybat(None, flags, &path), Ok(None));
            assert_eq!(
                resolve_existing_fonkybat(Some("not an address"), flags, &path),
                Ok(None)
            );
        }

        let err = resolve_existing_fonkybat(None, SALE_ONLY, &path).unwrap_err();
        assert!(matches!(err, ScriptError::ReadDeployments(_)));
    }

    #[test]
    fn summary_formats_missing_values() {
        assert_eq!(display_or_none::<Address>(None), "none");
        assert_eq!(
            display_or_none(Some(RECORDED)),
            "0x00000000000000000000000000000000000000aa"
        );
    }
}
