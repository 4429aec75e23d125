use anyhow::{Context, Result};
use serde::Deserialize;

/// Prefix of the environment variables read by [`TemplateConfig::from_env`].
pub const ENV_PREFIX: &str = "VIRT_CONTROLLER_";

/// Image the migration job runs `virsh` from unless overridden.
pub const DEFAULT_MIGRATION_IMAGE: &str = "kubevirt/virt-handler:devel";

/// Images used by rendered workloads.
///
/// Each field maps to `VIRT_CONTROLLER_<FIELD>`:
///   - `VIRT_CONTROLLER_LAUNCHER_IMAGE`  (required)
///   - `VIRT_CONTROLLER_MIGRATION_IMAGE` (default `kubevirt/virt-handler:devel`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateConfig {
    /// Image of the `compute` container in launcher pods.
    pub launcher_image: String,

    /// Image of the `virt-migration` container in migration jobs.
    #[serde(default = "default_migration_image")]
    pub migration_image: String,
}

fn default_migration_image() -> String {
    DEFAULT_MIGRATION_IMAGE.to_string()
}

impl TemplateConfig {
    /// Config with the given launcher image and the default migration image.
    #[must_use]
    pub fn new(launcher_image: impl Into<String>) -> Self {
        Self {
            launcher_image: launcher_image.into(),
            migration_image: default_migration_image(),
        }
    }

    /// Loads the config from `VIRT_CONTROLLER_*` process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the launcher image is unset or either image is empty.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Loads the config from `(name, value)` pairs, using the same names and
    /// defaults as [`TemplateConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the launcher image is unset or either image is empty.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::prefixed(ENV_PREFIX).from_iter(vars).context(
            "failed to load template config from VIRT_CONTROLLER_* env vars \
             (VIRT_CONTROLLER_LAUNCHER_IMAGE is required)",
        )?;
        anyhow::ensure!(
            !config.launcher_image.is_empty(),
            "VIRT_CONTROLLER_LAUNCHER_IMAGE must not be empty"
        );
        anyhow::ensure!(
            !config.migration_image.is_empty(),
            "VIRT_CONTROLLER_MIGRATION_IMAGE must not be empty"
        );
        Ok(config)
    }
}
