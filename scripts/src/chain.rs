//! A [`Deployer`] submitting transactions through an RPC provider

use std::path::PathBuf;

use alloy::{
    network::TransactionBuilder,
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use alloy_primitives::{Address, Bytes, TxHash};
use tracing::info;

use crate::{
    artifacts::load_bytecode,
    deployer::{ContractKind, DeployOptions, Deployer},
    errors::ScriptError,
    solidity::IOwnable,
    utils::write_deployed_address,
};

/// Deploys contracts from compiled artifacts using a signing provider
pub struct ChainDeployer {
    /// The signing provider
    client: DynProvider,
    /// The directory holding the compiled contract artifacts
    artifacts_dir: PathBuf,
    /// The deployments file in which each new address is recorded
    deployments_path: Option<PathBuf>,
}

impl ChainDeployer {
    /// Create a deployer reading artifacts from `artifacts_dir`
    pub fn new(client: DynProvider, artifacts_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            artifacts_dir: artifacts_dir.into(),
            deployments_path: None,
        }
    }

    /// Record every deployed address in the given deployments file
    pub fn with_deployments_path(mut self, deployments_path: impl Into<PathBuf>) -> Self {
        self.deployments_path = Some(deployments_path.into());
        self
    }
}

impl Deployer for ChainDeployer {
    async fn deploy(
        &self,
        contract: ContractKind,
        constructor_args: Bytes,
        options: DeployOptions,
    ) -> Result<Address, ScriptError> {
        let bytecode = load_bytecode(&self.artifacts_dir, contract)?;
        let deploy_code: Bytes = [&bytecode[..], &constructor_args[..]]
            .concat()
            .into();

        let tx = TransactionRequest::default()
            .with_deploy_code(deploy_code)
            .with_gas_limit(options.gas_limit);

        let receipt = self
            .client
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(format!(
                "{contract} deployment reverted in tx {:#x}",
                receipt.transaction_hash
            )));
        }

        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(format!("no contract address in receipt for {contract}"))
        })?;
        info!(
            "{contract} deployment confirmed in tx {:#x}",
            receipt.transaction_hash
        );

        if let Some(deployments_path) = &self.deployments_path {
            write_deployed_address(deployments_path, contract.deployments_key(), address)?;
        }

        Ok(address)
    }

    async fn transfer_ownership(
        &self,
        target: Address,
        new_owner: Address,
    ) -> Result<TxHash, ScriptError> {
        send_ownership_transfer(&self.client, target, new_owner).await
    }
}

/// Calls `transferOwnership(new_owner)` on the `Ownable` contract at `target`
/// and waits for the receipt, returning the transaction hash
pub async fn send_ownership_transfer(
    client: &DynProvider,
    target: Address,
    new_owner: Address,
) -> Result<TxHash, ScriptError> {
    let ownable = IOwnable::new(target, client);

    let receipt = ownable
        .transferOwnership(new_owner)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(format!(
            "ownership transfer reverted in tx {:#x}",
            receipt.transaction_hash
        )));
    }

    Ok(receipt.transaction_hash)
}
