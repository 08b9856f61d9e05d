//! Instance Registry
//!
//! This module loads and saves named instance profiles, so callers can refer to
//! an instance by name instead of repeating sid, instance number and password.
//!
//! # Configuration Locations
//! - Local: `.hanactl/config.json` (per working directory)
//! - Global: `~/.config/hanactl/instances.json` (per user)
//!
//! # Resolution Precedence
//! Local profiles override global profiles with the same name, and a local
//! `default` overrides the global one.
//!
//! # Passwords
//! A profile stores either an inline `password` or a `password_env` naming the
//! environment variable to read at resolve time.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HanaError, Result};
use crate::hana::InstanceIdentity;

/// Registry file contents
///
/// ```json
/// {
///   "instances": {
///     "prd": { "sid": "PRD", "instance": "00", "password_env": "PRD_PASSWORD" }
///   },
///   "default": "prd"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstanceRegistry {
    /// Named instance profiles
    #[serde(default)]
    pub instances: BTreeMap<String, StoredInstance>,

    /// Name of the default profile (must exist in instances map)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Stored instance profile
///
/// `sid` and `instance` are kept as raw JSON so a hand-edited profile with a
/// numeric instance (`"instance": 0`) is reported as an identity error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredInstance {
    /// System id
    pub sid: Value,

    /// Instance number
    pub instance: Value,

    /// Inline password
    /// WARNING: Sensitive data, do not log or include in error messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,

    /// Environment variable name for password (if not storing password directly)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,
}

impl StoredInstance {
    /// Create a profile that reads its password from `password_env`
    pub fn with_password_env(
        sid: impl Into<String>,
        instance: impl Into<String>,
        password_env: impl Into<String>,
    ) -> Self {
        Self {
            sid: Value::String(sid.into()),
            instance: Value::String(instance.into()),
            password: None,
            password_env: Some(password_env.into()),
        }
    }

    /// Resolve the password and build the instance identity
    pub fn resolve(&self) -> Result<InstanceIdentity> {
        let password = match (&self.password_env, &self.password) {
            (Some(env_var), _) => match std::env::var(env_var) {
                Ok(password) => Value::String(password),
                Err(_) => {
                    return Err(HanaError::config_error(format!(
                        "Environment variable {env_var} not found for password"
                    )));
                }
            },
            (None, Some(password)) => password.clone(),
            (None, None) => {
                return Err(HanaError::config_error(
                    "Instance profile has neither password nor password_env",
                ));
            }
        };

        InstanceIdentity::from_values(&self.sid, &self.instance, &password)
    }
}

/// Configuration file location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Local config: `.hanactl/config.json`
    Local,
    /// Global config: `~/.config/hanactl/instances.json`
    Global,
}

/// Get path to local config file (`.hanactl/config.json`)
pub fn local_config_path() -> Result<PathBuf> {
    let current_dir = std::env::current_dir().map_err(|e| {
        HanaError::config_error(format!("Could not determine current directory: {e}"))
    })?;

    Ok(current_dir.join(".hanactl").join("config.json"))
}

/// Get path to global config file (`~/.config/hanactl/instances.json`)
pub fn global_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| HanaError::config_error("Could not determine user config directory"))?;

    Ok(config_dir.join("hanactl").join("instances.json"))
}

/// Load instance registry from a config file
///
/// A missing file is an empty registry.
pub fn load_registry(path: &Path) -> Result<InstanceRegistry> {
    if !path.exists() {
        return Ok(InstanceRegistry::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| HanaError::config_error(format!("Could not read config file: {e}")))?;

    serde_json::from_str(&contents)
        .map_err(|e| HanaError::config_error(format!("Invalid config file format: {e}")))
}

/// Save instance registry to a config file
pub fn save_registry(path: &Path, registry: &InstanceRegistry) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            HanaError::config_error(format!("Could not create config directory: {e}"))
        })?;
    }

    let contents = serde_json::to_string_pretty(registry)
        .map_err(|e| HanaError::config_error(format!("Could not serialize config: {e}")))?;

    fs::write(path, contents)
        .map_err(|e| HanaError::config_error(format!("Could not write config file: {e}")))?;

    Ok(())
}

/// Merge `local` over `global`
#[must_use]
pub fn merge_registries(global: InstanceRegistry, local: InstanceRegistry) -> InstanceRegistry {
    let mut merged = global;
    merged.instances.extend(local.instances);
    if local.default.is_some() {
        merged.default = local.default;
    }
    merged
}

/// Load instance registry with precedence (local over global)
pub fn load_with_precedence() -> Result<InstanceRegistry> {
    let global = load_registry(&global_config_path()?)?;
    let local = load_registry(&local_config_path()?)?;
    Ok(merge_registries(global, local))
}

/// Look up a profile by name, or the default profile when `name` is None
pub fn find_instance<'a>(
    registry: &'a InstanceRegistry,
    name: Option<&str>,
) -> Result<&'a StoredInstance> {
    let available: Vec<_> = registry.instances.keys().collect();

    let name = match name {
        Some(n) => n,
        None => registry.default.as_deref().ok_or_else(|| {
            HanaError::config_error(format!(
                "No default instance set. Available instances: {available:?}. \
                 Specify one with --instance or set a default in the config."
            ))
        })?,
    };

    registry.instances.get(name).ok_or_else(|| {
        HanaError::config_error(format!(
            "Instance '{name}' not found. Available instances: {available:?}"
        ))
    })
}

/// Resolve a profile from the merged registry into an instance identity
pub fn resolve_instance(name: Option<&str>) -> Result<InstanceIdentity> {
    let registry = load_with_precedence()?;
    find_instance(&registry, name)?.resolve()
}

/// Add or replace a profile in the registry file at `path`
///
/// The first profile stored in a file becomes its default.
pub fn save_instance_to(path: &Path, name: &str, instance: StoredInstance) -> Result<()> {
    let mut registry = load_registry(path)?;

    if registry.instances.is_empty() {
        registry.default = Some(name.to_string());
    }
    registry.instances.insert(name.to_string(), instance);

    save_registry(path, &registry)
}

/// Add or replace a profile in the local or global registry
pub fn save_instance(name: &str, instance: StoredInstance, location: ConfigLocation) -> Result<()> {
    let path = match location {
        ConfigLocation::Local => local_config_path()?,
        ConfigLocation::Global => global_config_path()?,
    };
    save_instance_to(&path, name, instance)
}

/// List profile names with their sid and instance number
///
/// Profiles whose sid/instance are not text are skipped with a warning.
pub fn list_instances() -> Result<Vec<(String, String, String)>> {
    let registry = load_with_precedence()?;

    let mut instances = Vec::new();
    for (name, stored) in registry.instances {
        match (stored.sid.as_str(), stored.instance.as_str()) {
            (Some(sid), Some(inst)) => instances.push((name, sid.to_string(), inst.to_string())),
            _ => tracing::warn!(instance = %name, "Skipping instance profile with non-text fields"),
        }
    }

    Ok(instances)
}
