use std::collections::BTreeMap;

/// Label keys other controllers use to correlate pods with their VM.
pub mod keys {
    /// Component that owns the pod.
    /// Value: "virt-launcher" for launcher pods
    pub const APP: &str = "kubevirt.io/app";

    /// Name of the VM the pod runs.
    /// Value: VM metadata.name
    pub const DOMAIN: &str = "kubevirt.io/domain";

    /// UID of the VM the pod runs.
    /// Value: VM metadata.uid
    pub const VM_UID: &str = "kubevirt.io/vmUID";
}

/// `keys::APP` value of launcher pods.
pub const VIRT_LAUNCHER_APP: &str = "virt-launcher";

/// Labels stamped on the launcher pod of the VM `domain` with uid `uid`.
#[must_use]
pub fn launcher_labels(domain: &str, uid: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (keys::APP.to_string(), VIRT_LAUNCHER_APP.to_string()),
        (keys::DOMAIN.to_string(), domain.to_string()),
        (keys::VM_UID.to_string(), uid.to_string()),
    ])
}
