// Path: crates/types/src/config/mod.rs

//! Chain-wide tunables consumed by the ticket manager and the executors.

use crate::ids::Address;
use serde::{Deserialize, Serialize};

/// Every tunable in the ticket lifecycle and fee rules, with
/// `serde(default = ...)` fallbacks so a partial TOML file still produces a
/// complete, valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainParams {
    /// Blocks a ticket must age before it becomes mature (`MinMatDur`).
    #[serde(default = "default_min_mature_dur")]
    pub min_mature_dur: u64,
    /// Blocks past maturity a validator ticket stays active (`MaxActiveDur`).
    #[serde(default = "default_max_active_dur")]
    pub max_active_dur: u64,
    /// Blocks a host ticket's stake thaws for after an unbond request
    /// (`HostThawPeriod`).
    #[serde(default = "default_host_thaw_period")]
    pub host_thaw_period: u64,
    /// Blocks a namespace remains owned before `expiresAt` (`NamespaceTTL`).
    #[serde(default = "default_namespace_ttl")]
    pub namespace_ttl: u64,
    /// Additional blocks after `expiresAt` before a namespace is reclaimable
    /// (`NamespaceGraceDur`).
    #[serde(default = "default_namespace_grace_dur")]
    pub namespace_grace_dur: u64,
    /// Flat fee charged on every transaction kind, as a decimal string.
    #[serde(default = "default_fee")]
    pub fee: String,
    /// The well-known treasury address credited by namespace-acquire
    /// transactions.
    #[serde(default = "default_treasury_address")]
    pub treasury_address: Address,
}

fn default_min_mature_dur() -> u64 {
    60
}
fn default_max_active_dur() -> u64 {
    40
}
fn default_host_thaw_period() -> u64 {
    200
}
fn default_namespace_ttl() -> u64 {
    31_536_000 / 5
}
fn default_namespace_grace_dur() -> u64 {
    2_592_000 / 5
}
fn default_fee() -> String {
    "1".to_string()
}
fn default_treasury_address() -> Address {
    Address::from("os1treasury00000000000000000000000000000")
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            min_mature_dur: default_min_mature_dur(),
            max_active_dur: default_max_active_dur(),
            host_thaw_period: default_host_thaw_period(),
            namespace_ttl: default_namespace_ttl(),
            namespace_grace_dur: default_namespace_grace_dur(),
            fee: default_fee(),
            treasury_address: default_treasury_address(),
        }
    }
}

impl ChainParams {
    /// Loads chain parameters from a TOML document, falling back to defaults
    /// for any field the document omits.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
