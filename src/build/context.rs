use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    assets::{
        fonts::{BitmapFont, FontLibrary, LabelStyle, TtfFont},
        resolver::ResourceResolver,
        texture::Drawable,
    },
    build::scene::NameIndex,
    document::{
        document::Document,
        model::{FileData, NodeDescription},
    },
    foundation::{
        core::Rgba8,
        diag::{Diagnostic, DiagnosticSink, Severity},
        error::{UiError, UiResult},
    },
    parser::ParserRegistry,
    widget::tree::{Widget, WidgetId, WidgetTree},
};

/// Mutable state of one build: the tree under construction, the indices, and the services
/// parsers use to resolve resources.
pub struct BuildContext<'a> {
    registry: &'a ParserRegistry,
    resolver: ResourceResolver,
    fonts: &'a FontLibrary,
    sink: Arc<dyn DiagnosticSink>,
    tree: WidgetTree,
    names: NameIndex,
    action_widgets: BTreeMap<i32, WidgetId>,
    open_documents: Vec<PathBuf>,
}

pub(crate) struct BuildOutput {
    pub(crate) tree: WidgetTree,
    pub(crate) names: NameIndex,
    pub(crate) action_widgets: BTreeMap<i32, WidgetId>,
}

impl<'a> BuildContext<'a> {
    pub(crate) fn new(
        registry: &'a ParserRegistry,
        resolver: ResourceResolver,
        fonts: &'a FontLibrary,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            registry,
            resolver,
            fonts,
            sink,
            tree: WidgetTree::new(),
            names: NameIndex::default(),
            action_widgets: BTreeMap::new(),
            open_documents: Vec::new(),
        }
    }

    /// Mark `path` as being built so a project node referencing it is rejected.
    pub(crate) fn enter_document(&mut self, path: &Path) {
        self.open_documents.push(document_key(path));
    }

    pub(crate) fn finish(self) -> BuildOutput {
        BuildOutput {
            tree: self.tree,
            names: self.names,
            action_widgets: self.action_widgets,
        }
    }

    /// Resource resolver (read-only).
    pub fn resolver(&self) -> &ResourceResolver {
        &self.resolver
    }

    /// Resource resolver.
    pub fn resolver_mut(&mut self) -> &mut ResourceResolver {
        &mut self.resolver
    }

    /// Configured fonts.
    pub fn fonts(&self) -> &FontLibrary {
        self.fonts
    }

    /// Directory resources currently resolve against.
    pub fn dir(&self) -> &Path {
        self.resolver.dir()
    }

    /// Widgets built so far.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Report a problem with `node`.
    pub fn report(&self, node: &NodeDescription, severity: Severity, message: impl Into<String>) {
        self.sink
            .emit(Diagnostic::new(severity, message).for_node(&node.ctype, &node.name));
    }

    /// Drawable for an optional file reference of `node`.
    pub fn drawable(
        &mut self,
        node: &NodeDescription,
        file: Option<&FileData>,
    ) -> UiResult<Option<Drawable>> {
        self.resolver.resolve_file_drawable(node, file)
    }

    /// TrueType style of a text widget. Unknown fonts fall back to the default font.
    pub fn label_style(&self, node: &NodeDescription, color: Rgba8) -> LabelStyle {
        let source = match node.font_resource.as_ref().filter(|f| !f.path.is_empty()) {
            None => self.fonts.default_font().map(Path::to_path_buf),
            Some(f) => match self.fonts.ttf(&f.path) {
                Some(p) => Some(p.to_path_buf()),
                None => {
                    self.report(
                        node,
                        Severity::Debug,
                        format!("font '{}' is not configured, using the default font", f.path),
                    );
                    self.fonts.default_font().map(Path::to_path_buf)
                }
            },
        };
        LabelStyle {
            font: TtfFont {
                source,
                size: node.font_size,
            },
            color,
        }
    }

    /// Bitmap font of a bitmap-font label. Missing fonts fall back to the built-in font.
    pub fn bitmap_font(&self, node: &NodeDescription) -> Arc<BitmapFont> {
        let path = node
            .label_bm_font_file
            .as_ref()
            .map_or("", |f| f.path.as_str());

        let found = if path.is_empty() {
            Err("no bitmap font referenced".to_string())
        } else if self.fonts.has_preloaded_bitmap_fonts() {
            self.fonts
                .preloaded_bitmap_font(path)
                .ok_or_else(|| format!("bitmap font '{path}' is not configured"))
        } else {
            BitmapFont::load(self.resolver.resource_path(path))
                .map(Arc::new)
                .map_err(|e| e.to_string())
        };

        found.unwrap_or_else(|reason| {
            self.report(
                node,
                Severity::Debug,
                format!("{reason}, using the default bitmap font"),
            );
            Arc::new(BitmapFont::fallback())
        })
    }

    /// Build `node` and its subtree under `parent`.
    ///
    /// Unknown kinds and non-fatal construction errors are reported and yield `Ok(None)`; only
    /// fatal errors are returned.
    pub fn dispatch(
        &mut self,
        parent: Option<WidgetId>,
        node: &NodeDescription,
    ) -> UiResult<Option<WidgetId>> {
        let registry = self.registry;
        let Some(parser) = registry.get(&node.ctype) else {
            self.report(
                node,
                Severity::Debug,
                format!("unsupported widget kind '{}'", node.ctype),
            );
            return Ok(None);
        };

        let content = match parser.construct(self, node) {
            Ok(content) => content,
            Err(e) if !e.is_fatal() => {
                self.report(node, Severity::Error, format!("widget skipped: {e}"));
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let id = parser.post_process(self, node, content, parent);
        parser.attach_children(self, node, id)?;
        Ok(Some(id))
    }

    /// Store a finished widget, register its name and action tag, and attach it to `parent`.
    pub fn attach(&mut self, widget: Widget, parent: Option<WidgetId>) -> WidgetId {
        let name = widget.name.clone();
        let action_tag = widget.action_tag;
        let id = self.tree.insert(widget, parent);
        self.names.insert(name, id);
        self.action_widgets.insert(action_tag, id);
        id
    }

    /// Load the document at `path` and build its root under `parent`.
    ///
    /// Resources of the nested document resolve against its own directory. Referencing a
    /// document that is already being built is a document error.
    pub fn build_nested(&mut self, parent: WidgetId, path: &Path) -> UiResult<Option<WidgetId>> {
        let key = document_key(path);
        if self.open_documents.contains(&key) {
            return Err(UiError::document(format!(
                "project node cycle through '{}'",
                path.display()
            )));
        }

        let doc = Document::from_path(path)?;
        let root = doc.require_root()?;
        tracing::debug!(path = %path.display(), nodes = doc.node_count(), "building nested document");

        self.open_documents.push(key);
        let prev = self.resolver.replace_dir(doc.dir().to_path_buf());
        let result = self.dispatch(Some(parent), root);
        self.resolver.replace_dir(prev);
        self.open_documents.pop();
        result
    }
}

fn document_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "../../tests/unit/build/context.rs"]
mod tests;
