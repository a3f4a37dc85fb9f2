use std::sync::Arc;

use crate::{
    animation::timeline::compile_animation,
    assets::{atlas::AtlasSet, fonts::FontLibrary, resolver::ResourceResolver},
    build::{context::BuildContext, scene::UiScene},
    document::document::Document,
    foundation::{
        diag::{DiagnosticSink, TracingSink},
        error::UiResult,
    },
    parser::{ParserRegistry, WidgetParser},
};

/// Inputs shared by every build of a loader.
#[derive(Clone)]
pub struct LoaderOpts {
    /// Atlases searched for images; empty means images load from loose files.
    pub atlases: AtlasSet,
    /// Fonts for text widgets.
    pub fonts: FontLibrary,
    /// Receiver of recoverable problems.
    pub sink: Arc<dyn DiagnosticSink>,
}

impl Default for LoaderOpts {
    fn default() -> Self {
        Self {
            atlases: AtlasSet::new(),
            fonts: FontLibrary::new(),
            sink: Arc::new(TracingSink),
        }
    }
}

impl LoaderOpts {
    /// Use these atlases.
    pub fn with_atlases(mut self, atlases: AtlasSet) -> Self {
        self.atlases = atlases;
        self
    }

    /// Use these fonts.
    pub fn with_fonts(mut self, fonts: FontLibrary) -> Self {
        self.fonts = fonts;
        self
    }

    /// Send diagnostics to `sink`.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }
}

impl std::fmt::Debug for LoaderOpts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderOpts")
            .field("atlases", &self.atlases.len())
            .field("fonts", &self.fonts)
            .finish_non_exhaustive()
    }
}

/// Builds widget scenes from documents.
#[derive(Debug)]
pub struct UiLoader {
    registry: ParserRegistry,
    opts: LoaderOpts,
}

impl Default for UiLoader {
    fn default() -> Self {
        Self::new(LoaderOpts::default())
    }
}

impl UiLoader {
    /// Loader with every built-in widget parser.
    pub fn new(opts: LoaderOpts) -> Self {
        Self::with_registry(ParserRegistry::with_builtin(), opts)
    }

    /// Loader with a caller-assembled registry.
    pub fn with_registry(registry: ParserRegistry, opts: LoaderOpts) -> Self {
        Self { registry, opts }
    }

    /// Add or replace the parser for a kind. Returns `true` when it replaced one.
    pub fn register(&mut self, parser: impl WidgetParser + 'static) -> bool {
        self.registry.register(parser)
    }

    /// Parser registry.
    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Options.
    pub fn opts(&self) -> &LoaderOpts {
        &self.opts
    }

    /// Build the widget tree and action map of `doc`.
    ///
    /// Fails when the document has no root, when the animation cannot be compiled, or on a
    /// fatal resource error. Everything else is reported to the sink and the affected subtree
    /// is left out.
    #[tracing::instrument(skip_all, fields(dir = %doc.dir().display()))]
    pub fn build(&self, doc: &Document) -> UiResult<UiScene> {
        let root_node = doc.require_root()?;
        let actions = compile_animation(doc.animation(), self.opts.sink.as_ref())?;

        let resolver = ResourceResolver::new(
            doc.dir(),
            self.opts.atlases.clone(),
            self.opts.sink.clone(),
        );
        let mut ctx = BuildContext::new(
            &self.registry,
            resolver,
            &self.opts.fonts,
            self.opts.sink.clone(),
        );
        if let Some(source) = doc.source() {
            ctx.enter_document(source);
        }

        let root = ctx.dispatch(None, root_node)?;
        let out = ctx.finish();
        tracing::debug!(
            widgets = out.tree.len(),
            nodes = doc.node_count(),
            actions = actions.len(),
            "built scene"
        );

        Ok(UiScene {
            tree: out.tree,
            root,
            names: out.names,
            action_widgets: out.action_widgets,
            actions,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/loader.rs"]
mod tests;
