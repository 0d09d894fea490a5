//! ## Crate layout
//! - `build`: validation, extraction and stitching entry points, `stitch!`.
//! - `config`: `fedx.toml` build configuration.
//! - `id`: prefixed identifiers, usable at request time.
//! - `schema`: entity model, mixins, annotations and the GraphQL type graph.
//! - `utils`: casing and pluralization helpers.
//!
//! `prelude` covers runtime identifier handling; `design::prelude` covers
//! schema declaration and build scripts.

pub use fedx_build as build;
pub use fedx_config_build as config;
pub use fedx_id as id;
pub use fedx_schema as schema;
pub use fedx_utils as utils;

mod error;

pub use error::{Error, ErrorKind};
pub use fedx_build::stitch;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        id::{IdError, PrefixedId},
    };
}

/// Schema/design-facing helpers.
pub mod design {
    pub mod prelude {
        pub use crate::{
            build::{Extension, ExtensionOption, Relocation, generate, generate_sdl},
            schema::prelude::*,
        };
    }
}
