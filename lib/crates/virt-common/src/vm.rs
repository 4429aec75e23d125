// lib/crates/virt-common/src/vm.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::meta::ObjectMeta;

/// Graphics type that gets a container port on the launcher pod.
pub const SPICE_GRAPHICS: &str = "spice";

/// Virtual machine object (`kind: VM`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualMachine {
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: VmSpec,
}

/// Spec section of a VM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmSpec {
    pub domain: DomainSpec,
    /// Node labels the launcher pod must be scheduled onto.
    #[serde(rename = "nodeSelector", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_selector: BTreeMap<String, String>,
}

/// Libvirt domain description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSpec {
    /// Libvirt domain name, as known to `virsh`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub devices: Devices,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Devices {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graphics: Vec<Graphics>,
}

/// A graphics adapter exposed by the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graphics {
    /// Adapter type as written by the user (`spice`, `vnc`, ...).
    #[serde(rename = "type")]
    pub device_type: String,
    pub port: i32,
}

impl Graphics {
    /// Whether this adapter is a SPICE display.
    ///
    /// Device types are caller-supplied and never canonicalized upstream, so
    /// `Spice` and `SPICE` count as well.
    #[must_use]
    pub fn is_spice(&self) -> bool {
        self.device_type.eq_ignore_ascii_case(SPICE_GRAPHICS)
    }
}
