//! Pod and job templates for the virt controller.
//!
//! Turns a [`VirtualMachine`](virt_common::VirtualMachine) into the
//! virt-launcher pod that runs it, and a VM plus two nodes into the batch job
//! that live-migrates it between them. Rendering is pure: no I/O, no shared
//! mutable state, so one [`TemplateRenderer`] can serve any number of callers.

pub mod address;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod precond;
pub mod template;

pub use address::{Resolution, qemu_tcp_uri, resolve_address};
pub use config::TemplateConfig;
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use error::{NodeRole, Result, TemplateError};
pub use precond::ContractViolation;
pub use template::{TemplateRenderer, TemplateService};
