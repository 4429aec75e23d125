use std::fmt;
use std::sync::Arc;

use virt_common::{
    Container, ContainerPort, Graphics, Job, Node, ObjectMeta, Pod, PodSpec, PullPolicy,
    RestartPolicy, VirtualMachine, launcher_labels,
};

use crate::address::{qemu_tcp_uri, resolve_address};
use crate::config::TemplateConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{NodeRole, Result, TemplateError};
use crate::precond;

// ── Launcher pod ─────────────────────────────────────────────────────────────

/// Name of the single container in a launcher pod.
pub const LAUNCHER_CONTAINER: &str = "compute";

/// Command the launcher container runs.
pub const LAUNCHER_COMMAND: [&str; 3] = ["/virt-launcher", "-qemu-timeout", "60s"];

/// Start of a launcher pod's generate-name; the VM name follows.
pub const LAUNCHER_NAME_PREFIX: &str = "virt-launcher-";

/// Appended after the VM name. Reserves room for the random suffix the
/// orchestrator adds to a generate-name; consumers rely on its length.
pub const LAUNCHER_NAME_PLACEHOLDER: &str = "-----";

// ── Migration job ────────────────────────────────────────────────────────────

/// Generate-name of migration jobs.
pub const MIGRATION_NAME: &str = "virt-migration";

/// Name of the single container in a migration job.
pub const MIGRATION_CONTAINER: &str = "virt-migration";

/// Renders the workloads the controller submits for a VM.
pub trait TemplateService: Send + Sync {
    /// Builds the virt-launcher pod running `vm`.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`](crate::ContractViolation) if the VM
    /// has no name or no uid.
    fn render_launch_manifest(&self, vm: &VirtualMachine) -> Result<Pod>;

    /// Builds the job that live-migrates `vm` from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnreachableNode`] if either node reports
    /// neither a host name nor an internal IP.
    fn render_migration_job(
        &self,
        vm: &VirtualMachine,
        source: &Node,
        target: &Node,
    ) -> Result<Job>;
}

/// [`TemplateService`] backed by an immutable [`TemplateConfig`].
#[derive(Clone)]
pub struct TemplateRenderer {
    config: TemplateConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl TemplateRenderer {
    /// Renderer using `launcher_image` and the default migration image.
    ///
    /// # Panics
    ///
    /// Panics if `launcher_image` is empty.
    #[must_use]
    pub fn new(launcher_image: impl Into<String>) -> Self {
        Self::from_config(TemplateConfig::new(launcher_image))
    }

    /// # Panics
    ///
    /// Panics if either image in `config` is empty.
    #[must_use]
    pub fn from_config(config: TemplateConfig) -> Self {
        precond::must_not_be_empty(&config.launcher_image, "launcher image");
        precond::must_not_be_empty(&config.migration_image, "migration image");
        Self {
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Sends rendering failures to `sink` instead of `tracing`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    fn resolve<'n>(&self, node: &'n Node, role: NodeRole) -> Result<&'n str> {
        resolve_address(node).ok_or_else(|| {
            let err = TemplateError::UnreachableNode { role };
            self.sink.report(&err.to_string());
            err
        })
    }
}

impl fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateService for TemplateRenderer {
    fn render_launch_manifest(&self, vm: &VirtualMachine) -> Result<Pod> {
        let domain = precond::must_be_present(vm.metadata.name.as_deref(), "metadata.name");
        let uid = precond::must_be_present(vm.metadata.uid.as_deref(), "metadata.uid");

        let container = Container {
            name: LAUNCHER_CONTAINER.to_string(),
            image: self.config.launcher_image.clone(),
            image_pull_policy: Some(PullPolicy::IfNotPresent),
            command: to_strings(&LAUNCHER_COMMAND),
            ports: spice_ports(&vm.spec.domain.devices.graphics),
        };

        let metadata = ObjectMeta {
            generate_name: Some(launcher_generate_name(domain)),
            labels: launcher_labels(domain, uid),
            ..ObjectMeta::default()
        };

        let pod = Pod::new(
            metadata,
            PodSpec {
                restart_policy: RestartPolicy::Never,
                containers: vec![container],
                node_selector: vm.spec.node_selector.clone(),
            },
        );

        tracing::debug!(
            generate_name = pod.metadata.generate_name.as_deref(),
            ports = pod.spec.containers[0].ports.len(),
            "rendered launcher pod"
        );
        Ok(pod)
    }

    fn render_migration_job(
        &self,
        vm: &VirtualMachine,
        source: &Node,
        target: &Node,
    ) -> Result<Job> {
        let src_addr = self.resolve(source, NodeRole::Source)?;
        let dst_addr = self.resolve(target, NodeRole::Target)?;

        let src_uri = qemu_tcp_uri(src_addr);
        let dst_uri = qemu_tcp_uri(dst_addr);

        let container = Container {
            name: MIGRATION_CONTAINER.to_string(),
            image: self.config.migration_image.clone(),
            image_pull_policy: None,
            command: migration_command(&vm.spec.domain.name, &dst_uri, &src_uri),
            ports: Vec::new(),
        };

        let job = Job::new(
            ObjectMeta::generated(MIGRATION_NAME),
            PodSpec {
                restart_policy: RestartPolicy::Never,
                containers: vec![container],
                ..PodSpec::default()
            },
        );

        tracing::debug!(
            domain = %vm.spec.domain.name,
            source = %src_uri,
            target = %dst_uri,
            "rendered migration job"
        );
        Ok(job)
    }
}

/// Generate-name of the launcher pod for the VM `domain`.
#[must_use]
pub fn launcher_generate_name(domain: &str) -> String {
    format!("{LAUNCHER_NAME_PREFIX}{domain}{LAUNCHER_NAME_PLACEHOLDER}")
}

/// One port per SPICE adapter, named after the adapter's position among all
/// graphics devices (not among SPICE devices only).
#[must_use]
pub fn spice_ports(graphics: &[Graphics]) -> Vec<ContainerPort> {
    graphics
        .iter()
        .enumerate()
        .filter(|(_, g)| g.is_spice())
        .map(|(i, g)| ContainerPort {
            name: format!("spice{i}"),
            container_port: g.port,
        })
        .collect()
}

/// `virsh migrate` invocation. The destination URI comes before the source.
#[must_use]
pub fn migration_command(domain: &str, dst_uri: &str, src_uri: &str) -> Vec<String> {
    to_strings(&["virsh", "migrate", domain, dst_uri, src_uri])
}

fn to_strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_string()).collect()
}
