//! Build-variant configuration resolution
//!
//! One call per build invocation: read the optional `key.properties`
//! secrets file, decide whether release signing is enabled, and produce an
//! immutable [`BuildConfig`] for the packaging pipeline.

use crate::error::{ConfigError, Result};
use crate::properties;
use crate::signing::{self, SigningCredentials};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Project-level settings supplied by the caller
///
/// Explicit by-value input to [`resolve`]; there is no ambient project
/// state. The defaults match the Noir Journal Android app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSettings {
    /// Android application id
    pub application_id: String,
    /// Minimum supported Android API level
    pub min_sdk: u32,
    /// API level the app targets
    pub target_sdk: u32,
    /// Monotonic Play Store version code
    pub version_code: u32,
    /// Human-readable version string
    pub version_name: String,
    /// Enable code shrinking/obfuscation for release artifacts
    pub minify: bool,
    /// Enable resource shrinking for release artifacts
    pub shrink_resources: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            application_id: "com.AS.noir_journal".to_string(),
            min_sdk: 23,
            target_sdk: 35,
            version_code: 1,
            version_name: "1.0.0".to_string(),
            minify: true,
            shrink_resources: true,
        }
    }
}

/// Immutable, validated configuration for one packaging run
///
/// Constructed exactly once per build invocation by [`resolve`] and never
/// mutated afterwards. `signing` is either fully populated (keystore
/// verified to exist) or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    /// Android application id
    pub application_id: String,
    /// Minimum supported Android API level
    pub min_sdk: u32,
    /// API level the app targets
    pub target_sdk: u32,
    /// Monotonic Play Store version code
    pub version_code: u32,
    /// Human-readable version string
    pub version_name: String,
    /// Release signing credentials, absent for debug/local builds
    pub signing: Option<SigningCredentials>,
    /// Whether the packaging pipeline should invoke the code shrinker
    pub minify: bool,
    /// Whether the packaging pipeline should shrink resources
    pub shrink_resources: bool,
}

/// Resolve the build configuration for one packaging run
///
/// A missing properties file is the normal debug/local case and yields
/// `signing: None`. A present file with a non-blank `storeFile` must carry
/// all three companion credentials and point at an existing keystore —
/// anything less fails the build rather than silently packaging unsigned.
pub fn resolve(settings: &ProjectSettings, properties_path: &Path) -> Result<BuildConfig> {
    let signing = if properties_path.exists() {
        resolve_signing(properties_path)?
    } else {
        None
    };

    Ok(BuildConfig {
        application_id: settings.application_id.clone(),
        min_sdk: settings.min_sdk,
        target_sdk: settings.target_sdk,
        version_code: settings.version_code,
        version_name: settings.version_name.clone(),
        signing,
        minify: settings.minify,
        shrink_resources: settings.shrink_resources,
    })
}

/// Extract and validate signing credentials from an existing properties file
fn resolve_signing(properties_path: &Path) -> Result<Option<SigningCredentials>> {
    let props = properties::load(properties_path)?;

    // No storeFile (or a blank one) means the operator did not configure
    // signing; fall back to an unsigned debug-style build.
    let store_file = match props.get("storeFile") {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => return Ok(None),
    };

    // storeFile is set: the remaining credentials are mandatory, checked in
    // the order the properties file declares them.
    for field in ["storePassword", "keyAlias", "keyPassword"] {
        if signing::is_blank(props.get(field)) {
            return Err(ConfigError::MissingCredentialField { field });
        }
    }

    if !store_file.exists() {
        return Err(ConfigError::SigningKeystoreNotFound(store_file));
    }

    Ok(Some(SigningCredentials {
        store_file,
        store_password: props["storePassword"].trim().to_string(),
        key_alias: props["keyAlias"].trim().to_string(),
        key_password: props["keyPassword"].trim().to_string(),
    }))
}
