use crate::{
    StitchError,
    hook::{ExternalEdges, JsonScalar, RemoveNodeGoModel, RemoveNodeQueries, SchemaHook},
};
use fedx_config_build::{FedxConfig, Relocation, StitchConfig};
use fedx_schema::{extract::Worklist, graph::SchemaGraph};

///
/// ExtensionOption
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum ExtensionOption {
    ExternalEdges,
    /// Drop `Node`'s model binding and the `node`/`nodes` queries.
    Federation,
    JsonScalar,
}

///
/// Extension
///
/// Which stitching hooks run. External edges are on unless turned off;
/// repeating an option has no further effect.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Extension {
    pub external_edges: bool,
    pub federation: bool,
    pub json_scalar: bool,
    pub relocation: Relocation,
}

impl Extension {
    #[must_use]
    pub fn new(options: impl IntoIterator<Item = ExtensionOption>) -> Self {
        options.into_iter().fold(Self::default(), Self::with)
    }

    #[must_use]
    pub const fn with(mut self, option: ExtensionOption) -> Self {
        match option {
            ExtensionOption::ExternalEdges => self.external_edges = true,
            ExtensionOption::Federation => self.federation = true,
            ExtensionOption::JsonScalar => self.json_scalar = true,
        }

        self
    }

    #[must_use]
    pub const fn without_external_edges(mut self) -> Self {
        self.external_edges = false;
        self
    }

    #[must_use]
    pub const fn relocation(mut self, relocation: Relocation) -> Self {
        self.relocation = relocation;
        self
    }

    /// Hooks in run order.
    #[must_use]
    pub fn pipeline(&self) -> Pipeline {
        let mut hooks: Vec<Box<dyn SchemaHook>> = Vec::new();

        if self.external_edges {
            hooks.push(Box::new(ExternalEdges::new(self.relocation)));
        }
        if self.federation {
            hooks.push(Box::new(RemoveNodeGoModel));
            hooks.push(Box::new(RemoveNodeQueries));
        }
        if self.json_scalar {
            hooks.push(Box::new(JsonScalar));
        }

        Pipeline { hooks }
    }
}

impl Default for Extension {
    fn default() -> Self {
        Self {
            external_edges: true,
            federation: false,
            json_scalar: false,
            relocation: Relocation::default(),
        }
    }
}

impl From<&StitchConfig> for Extension {
    fn from(cfg: &StitchConfig) -> Self {
        Self {
            external_edges: cfg.external_edges,
            federation: cfg.federation,
            json_scalar: cfg.json_scalar,
            relocation: cfg.relocation,
        }
    }
}

impl From<&FedxConfig> for Extension {
    fn from(cfg: &FedxConfig) -> Self {
        Self::from(&cfg.stitch)
    }
}

///
/// Pipeline
///

pub struct Pipeline {
    hooks: Vec<Box<dyn SchemaHook>>,
}

impl Pipeline {
    #[must_use]
    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Run every hook over a copy of `base`. Nothing is returned but the
    /// error when a hook fails.
    pub fn run(&self, base: &SchemaGraph, worklist: &Worklist) -> Result<SchemaGraph, StitchError> {
        self.hooks.iter().try_fold(base.clone(), |graph, hook| {
            tracing::debug!(hook = hook.name(), "running schema hook");
            hook.apply(graph, worklist)
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_edges_run_by_default() {
        assert_eq!(Extension::default().pipeline().hook_names(), ["external_edges"]);
    }

    #[test]
    fn duplicate_options_collapse() {
        let ext = Extension::new([
            ExtensionOption::JsonScalar,
            ExtensionOption::ExternalEdges,
            ExtensionOption::Federation,
            ExtensionOption::ExternalEdges,
        ]);

        assert_eq!(
            ext.pipeline().hook_names(),
            [
                "external_edges",
                "remove_node_go_model",
                "remove_node_queries",
                "json_scalar"
            ]
        );
    }

    #[test]
    fn config_drives_the_extension() {
        let cfg = FedxConfig::from_toml_str(
            "[stitch]\nexternal_edges = false\njson_scalar = true\nrelocation = \"move\"\n",
        )
        .unwrap();
        let ext = Extension::from(&cfg);

        assert_eq!(ext.relocation, Relocation::Move);
        assert_eq!(ext.pipeline().hook_names(), ["json_scalar"]);
    }

    #[test]
    fn empty_pipeline_returns_input() {
        let base = SchemaGraph::new();
        let out = Extension::default()
            .without_external_edges()
            .pipeline()
            .run(&base, &Worklist::default())
            .unwrap();

        assert_eq!(out, base);
    }
}
