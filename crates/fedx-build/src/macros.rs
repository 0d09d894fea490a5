/// Build-script helper: stitch `$schema` into `$base` using the crate's
/// `fedx.toml` and write `schema.graphql` into `OUT_DIR`.
///
/// Evaluates to `Result<PathBuf, BuildError>` with the written path.
#[macro_export]
macro_rules! stitch {
    ($schema:expr, $base:expr) => {{
        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $crate::CONFIG_FILE_NAME);

        $crate::stitch_to_out_dir(&$schema, &$base)
    }};
}
