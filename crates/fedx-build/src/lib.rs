//! Build-time federation stitching: validate the entity schema, extract its
//! metadata, and run the schema hooks over the upstream GraphQL graph.

mod error;
mod extension;
pub mod hook;
mod macros;

pub use error::StitchError;
pub use extension::{Extension, ExtensionOption, Pipeline};
pub use fedx_config_build::{CONFIG_FILE_NAME, ConfigError, FedxConfig, Relocation, StitchConfig};

use fedx_schema::{
    ErrorTree,
    extract::{ExtractError, extract},
    graph::SchemaGraph,
    node::Schema,
    validate::validate_schema,
};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// File written by `stitch!`.
pub const SCHEMA_FILE_NAME: &str = "schema.graphql";

///
/// BuildError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("environment variable {0} not set")]
    Env(&'static str),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Stitch(#[from] StitchError),

    #[error("schema validation failed:\n{0}")]
    Validation(#[from] ErrorTree),
}

/// Validate, extract and stitch. `base` is never modified.
pub fn generate(
    schema: &Schema,
    base: &SchemaGraph,
    extension: &Extension,
) -> Result<SchemaGraph, BuildError> {
    validate_schema(schema)?;
    let worklist = extract(schema)?;

    let pipeline = extension.pipeline();
    let graph = pipeline.run(base, &worklist)?;

    tracing::info!(
        hooks = ?pipeline.hook_names(),
        external_edges = worklist.external_edges.len(),
        types = graph.len(),
        "stitched schema"
    );

    Ok(graph)
}

/// `generate`, rendered as SDL.
pub fn generate_sdl(
    schema: &Schema,
    base: &SchemaGraph,
    extension: &Extension,
) -> Result<String, BuildError> {
    generate(schema, base, extension).map(|graph| graph.to_sdl())
}

/// Load the config at `config_path`, stitch, and write the SDL to `out_path`.
pub fn write_schema(
    schema: &Schema,
    base: &SchemaGraph,
    config_path: &Path,
    out_path: &Path,
) -> Result<(), BuildError> {
    let config = FedxConfig::load(config_path)?;
    let sdl = generate_sdl(schema, base, &Extension::from(&config))?;

    fs::write(out_path, sdl).map_err(|source| BuildError::Io {
        path: out_path.display().to_string(),
        source,
    })
}

/// Paths come from Cargo: `fedx.toml` beside the manifest, output in `OUT_DIR`.
pub fn stitch_to_out_dir(schema: &Schema, base: &SchemaGraph) -> Result<PathBuf, BuildError> {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").map_err(|_| BuildError::Env("CARGO_MANIFEST_DIR"))?;
    let out_dir = env::var("OUT_DIR").map_err(|_| BuildError::Env("OUT_DIR"))?;

    let config_path = PathBuf::from(manifest_dir).join(CONFIG_FILE_NAME);
    let out_path = PathBuf::from(out_dir).join(SCHEMA_FILE_NAME);
    write_schema(schema, base, &config_path, &out_path)?;

    Ok(out_path)
}
