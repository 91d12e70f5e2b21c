//! Scripts for deploying the FonkyBat contracts and handing ownership of the
//! base contract to its sale factory.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod network;
mod solidity;
pub mod utils;
