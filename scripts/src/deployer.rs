//! The deployer capability used by the orchestrator

use std::{
    fmt::{self, Display},
    future::Future,
};

use alloy_primitives::{Address, Bytes, TxHash};

use crate::{
    constants::{FONKYBAT_CONTRACT_KEY, FONKYBAT_FACTORY_CONTRACT_KEY},
    errors::ScriptError,
};

/// The contracts managed by the deploy scripts
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContractKind {
    /// The ownable base contract
    FonkyBat,
    /// The factory contract, minting and selling on behalf of `FonkyBat`
    FonkyBatFactory,
}

impl ContractKind {
    /// The name of the contract's compilation artifact
    pub fn artifact_name(&self) -> &'static str {
        match self {
            ContractKind::FonkyBat => "FonkyBat",
            ContractKind::FonkyBatFactory => "FonkyBatFactory",
        }
    }

    /// The key of the contract in the `deployments.json` file
    pub fn deployments_key(&self) -> &'static str {
        match self {
            ContractKind::FonkyBat => FONKYBAT_CONTRACT_KEY,
            ContractKind::FonkyBatFactory => FONKYBAT_FACTORY_CONTRACT_KEY,
        }
    }
}

impl Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.artifact_name())
    }
}

/// Transaction options for a deployment
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// The gas limit of the deployment transaction
    pub gas_limit: u64,
}

impl DeployOptions {
    /// Options with the given gas limit
    pub fn with_gas_limit(gas_limit: u64) -> Self {
        Self { gas_limit }
    }
}

/// Submits deployments and ownership transfers to a chain.
///
/// Each call resolves once the transaction is confirmed. Implementations do not
/// retry; a failed transaction is returned as an error.
pub trait Deployer {
    /// Deploy `contract` with the given ABI-encoded constructor arguments,
    /// returning the address of the new contract
    fn deploy(
        &self,
        contract: ContractKind,
        constructor_args: Bytes,
        options: DeployOptions,
    ) -> impl Future<Output = Result<Address, ScriptError>> + Send;

    /// Transfer ownership of the `Ownable` contract at `target` to `new_owner`,
    /// returning the transaction hash
    fn transfer_ownership(
        &self,
        target: Address,
        new_owner: Address,
    ) -> impl Future<Output = Result<TxHash, ScriptError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_keys_match_artifact_names() {
        for contract in [ContractKind::FonkyBat, ContractKind::FonkyBatFactory] {
            assert_eq!(contract.deployments_key(), contract.artifact_name());
            assert_eq!(contract.to_string(), contract.artifact_name());
        }
    }
}
