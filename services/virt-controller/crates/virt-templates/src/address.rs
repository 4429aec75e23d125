//! Picks the address a node's hypervisor is reached on.
//!
//! Preference: the first `Hostname` wins outright and ends the scan; failing
//! that, the first non-empty `InternalIP`; failing that, nothing. Every other
//! address type is ignored. A selected empty address counts as unreachable,
//! so an empty `Hostname` still ends the scan and makes the node unreachable.

use virt_common::{Node, NodeAddress, NodeAddressType};

/// URI scheme of the libvirt TCP transport.
pub const QEMU_TCP_SCHEME: &str = "qemu+tcp://";

/// Scan state while walking a node's address list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution<'a> {
    #[default]
    NoneFound,
    /// An internal IP was seen; a later host name still overrides it.
    TentativeIp(&'a str),
    /// A host name was seen. Final.
    Confirmed(&'a str),
}

impl<'a> Resolution<'a> {
    /// Advances the scan by one address.
    #[must_use]
    pub fn observe(self, addr: &'a NodeAddress) -> Self {
        match (self, addr.address_type) {
            (Resolution::Confirmed(_), _) => self,
            (_, NodeAddressType::Hostname) => Resolution::Confirmed(&addr.address),
            (
                Resolution::NoneFound | Resolution::TentativeIp(""),
                NodeAddressType::InternalIp,
            ) => Resolution::TentativeIp(&addr.address),
            _ => self,
        }
    }

    #[must_use]
    pub fn is_confirmed(self) -> bool {
        matches!(self, Resolution::Confirmed(_))
    }

    /// The selected address, if any. An empty selection is no address.
    #[must_use]
    pub fn address(self) -> Option<&'a str> {
        match self {
            Resolution::NoneFound => None,
            Resolution::TentativeIp(addr) | Resolution::Confirmed(addr) => {
                Some(addr).filter(|a| !a.is_empty())
            }
        }
    }
}

/// Resolves the address `node` is reachable on, or `None` if it is unreachable.
#[must_use]
pub fn resolve_address(node: &Node) -> Option<&str> {
    let mut state = Resolution::NoneFound;
    for addr in &node.status.addresses {
        state = state.observe(addr);
        if state.is_confirmed() {
            break;
        }
    }
    state.address()
}

/// Libvirt connection URI for a resolved address.
#[must_use]
pub fn qemu_tcp_uri(address: &str) -> String {
    format!("{QEMU_TCP_SCHEME}{address}")
}
