use serde::{Deserialize, Serialize};

use crate::meta::ObjectMeta;

/// Cluster node, reduced to what is needed to reach its hypervisor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: NodeStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    /// Addresses in the order reported by the node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<NodeAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAddress {
    #[serde(rename = "type")]
    pub address_type: NodeAddressType,
    pub address: String,
}

impl NodeAddress {
    #[must_use]
    pub fn new(address_type: NodeAddressType, address: impl Into<String>) -> Self {
        Self {
            address_type,
            address: address.into(),
        }
    }
}

/// Kind of a node address.
///
/// Unknown kinds deserialize to `Other` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeAddressType {
    Hostname,
    #[serde(rename = "InternalIP")]
    InternalIp,
    #[serde(rename = "ExternalIP")]
    ExternalIp,
    #[serde(rename = "InternalDNS")]
    InternalDns,
    #[serde(rename = "ExternalDNS")]
    ExternalDns,
    #[serde(other)]
    Other,
}

impl Node {
    /// Node with the given addresses and no metadata.
    #[must_use]
    pub fn with_addresses(addresses: Vec<NodeAddress>) -> Self {
        Self {
            metadata: ObjectMeta::default(),
            status: NodeStatus { addresses },
        }
    }
}
