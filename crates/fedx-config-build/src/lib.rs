//! `fedx.toml`, the build-time configuration read by `build.rs` scripts.

use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

/// File name looked up next to the crate manifest.
pub const CONFIG_FILE_NAME: &str = "fedx.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid {file}: {0}", file = CONFIG_FILE_NAME)]
    Parse(#[from] toml::de::Error),
}

///
/// FedxConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FedxConfig {
    pub stitch: StitchConfig,
}

impl FedxConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}

///
/// StitchConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StitchConfig {
    /// Strip the `Node` model directive and the `node`/`nodes` queries.
    pub federation: bool,

    /// Register the `JSON` scalar when namespaced data is present.
    pub json_scalar: bool,

    pub external_edges: bool,
    pub relocation: Relocation,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            federation: false,
            json_scalar: false,
            external_edges: true,
            relocation: Relocation::default(),
        }
    }
}

///
/// Relocation
///
/// What happens to a root query field once it is placed under a stub.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relocation {
    /// Keep it on `Query` as well.
    #[default]
    Copy,
    Move,
}

///
/// TESTS
///
