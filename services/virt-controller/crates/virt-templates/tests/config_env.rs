//! `TemplateConfig::from_env` reads the process environment.

#![allow(clippy::unwrap_used, clippy::expect_used, unsafe_code)]

use serial_test::serial;
use virt_templates::config::DEFAULT_MIGRATION_IMAGE;
use virt_templates::{TemplateConfig, TemplateRenderer};

const LAUNCHER_VAR: &str = "VIRT_CONTROLLER_LAUNCHER_IMAGE";
const MIGRATION_VAR: &str = "VIRT_CONTROLLER_MIGRATION_IMAGE";

fn clear() {
    // SAFETY: every test touching these vars is #[serial]
    unsafe {
        std::env::remove_var(LAUNCHER_VAR);
        std::env::remove_var(MIGRATION_VAR);
    }
}

#[test]
#[serial]
fn from_env_reads_both_images() {
    clear();
    // SAFETY: #[serial]
    unsafe {
        std::env::set_var(LAUNCHER_VAR, "registry.local/virt-launcher:v0.1");
        std::env::set_var(MIGRATION_VAR, "registry.local/virt-handler:v0.1");
    }
    let result = TemplateConfig::from_env();
    clear();

    let cfg = result.expect("config should load");
    assert_eq!(cfg.launcher_image, "registry.local/virt-launcher:v0.1");
    assert_eq!(cfg.migration_image, "registry.local/virt-handler:v0.1");

    let renderer = TemplateRenderer::from_config(cfg.clone());
    assert_eq!(renderer.config(), &cfg);
}

#[test]
#[serial]
fn from_env_defaults_migration_image() {
    clear();
    // SAFETY: #[serial]
    unsafe { std::env::set_var(LAUNCHER_VAR, "registry.local/virt-launcher:v0.1") };
    let result = TemplateConfig::from_env();
    clear();

    assert_eq!(result.unwrap().migration_image, DEFAULT_MIGRATION_IMAGE);
}

#[test]
#[serial]
fn from_env_without_launcher_image_fails() {
    clear();
    let err = TemplateConfig::from_env().unwrap_err();
    assert!(err.to_string().contains(LAUNCHER_VAR), "got: {err}");
}
