//! Resolution of network-dependent addresses

use alloy_primitives::Address;
use tracing::warn;

use crate::constants::{
    MAINNET_NETWORK, MAINNET_PROXY_REGISTRY_ADDRESS, TEST_NETWORKS, TEST_PROXY_REGISTRY_ADDRESS,
};

/// Whether the given network name denotes a test network
pub fn is_test_network(network: &str) -> bool {
    TEST_NETWORKS.contains(&network)
}

/// Returns the OpenSea proxy registry address for the given network.
///
/// The proxy accounts registered there are whitelisted by the contracts, so that
/// OpenSea users can trade without paying gas for an additional approval.
///
/// Any network that is not a known test network falls back to the mainnet registry.
pub fn proxy_registry_address(network: &str) -> Address {
    if is_test_network(network) {
        return TEST_PROXY_REGISTRY_ADDRESS;
    }

    if network != MAINNET_NETWORK {
        warn!("Unrecognized network `{network}`, using the mainnet proxy registry");
    }

    MAINNET_PROXY_REGISTRY_ADDRESS
}
