pub mod labels;
pub mod meta;
pub mod node;
pub mod vm;
pub mod workload;

pub use labels::{VIRT_LAUNCHER_APP, keys, launcher_labels};
pub use meta::ObjectMeta;
pub use node::{Node, NodeAddress, NodeAddressType, NodeStatus};
pub use vm::{Devices, DomainSpec, Graphics, SPICE_GRAPHICS, VirtualMachine, VmSpec};
pub use workload::{
    Container, ContainerPort, Job, JobSpec, Pod, PodSpec, PodTemplateSpec, PullPolicy,
    RestartPolicy,
};
