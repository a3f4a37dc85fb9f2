//! Per-kind widget parsers and the registry dispatch looks them up in.

pub(crate) mod common;
pub(crate) mod container;
pub(crate) mod leaf;

use indexmap::IndexMap;

use crate::{
    build::context::BuildContext,
    document::model::NodeDescription,
    foundation::error::UiResult,
    widget::{content::WidgetContent, tree::WidgetId},
};

/// Builds the widget for one node kind.
///
/// Dispatch calls [`construct`](WidgetParser::construct), then
/// [`post_process`](WidgetParser::post_process) to apply the shared attributes and attach the
/// widget, then [`attach_children`](WidgetParser::attach_children) to recurse.
pub trait WidgetParser: Send + Sync {
    /// Kind tag (`ctype`) this parser handles.
    fn kind_tag(&self) -> &str;

    /// Build the kind-specific payload. Non-fatal errors drop only this node's subtree.
    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent>;

    /// Whether the kind is a container; containers default to children-only touch handling.
    fn is_group(&self) -> bool {
        false
    }

    /// Apply name, geometry, color, visibility, and touchability; register and attach.
    fn post_process(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
        content: WidgetContent,
        parent: Option<WidgetId>,
    ) -> WidgetId {
        common::attach_common(ctx, node, content, parent, self.is_group())
    }

    /// Dispatch the authored children under `id`.
    fn attach_children(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
        id: WidgetId,
    ) -> UiResult<()> {
        common::dispatch_children(ctx, node, id)
    }
}

/// Parsers keyed by kind tag, in registration order.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: IndexMap<String, Box<dyn WidgetParser>>,
}

impl ParserRegistry {
    /// Registry with no parsers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding a parser for every built-in kind.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for parser in builtin_parsers() {
            registry.register_boxed(parser);
        }
        registry
    }

    /// Register a parser under its kind tag. Returns `true` when it replaced an earlier one.
    pub fn register(&mut self, parser: impl WidgetParser + 'static) -> bool {
        self.register_boxed(Box::new(parser))
    }

    /// Boxed form of [`ParserRegistry::register`].
    pub fn register_boxed(&mut self, parser: Box<dyn WidgetParser>) -> bool {
        let kind = parser.kind_tag().to_string();
        let replaced = self.parsers.insert(kind.clone(), parser).is_some();
        if replaced {
            tracing::debug!(kind = %kind, "replaced widget parser");
        }
        replaced
    }

    /// Parser for a kind tag.
    pub fn get(&self, kind: &str) -> Option<&dyn WidgetParser> {
        self.parsers.get(kind).map(|p| p.as_ref())
    }

    /// Whether a parser is registered for the kind.
    pub fn contains(&self, kind: &str) -> bool {
        self.parsers.contains_key(kind)
    }

    /// Registered kind tags, in registration order.
    pub fn kind_tags(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }

    /// Number of registered parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Whether no parser is registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("kinds", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn builtin_parsers() -> Vec<Box<dyn WidgetParser>> {
    vec![
        Box::new(container::NodeParser::new("SingleNodeObjectData")),
        Box::new(container::NodeParser::new("GameNodeObjectData")),
        Box::new(container::LayerParser::new("LayerObjectData")),
        Box::new(container::LayerParser::new("GameLayerObjectData")),
        Box::new(container::PanelParser),
        Box::new(container::ScrollViewParser),
        Box::new(container::ProjectNodeParser),
        Box::new(leaf::ImageViewParser),
        Box::new(leaf::SpriteParser),
        Box::new(leaf::TextParser),
        Box::new(leaf::TextBmFontParser),
        Box::new(leaf::TextAtlasParser),
        Box::new(leaf::ButtonParser),
        Box::new(leaf::CheckBoxParser),
        Box::new(leaf::TextFieldParser),
        Box::new(leaf::LoadingBarParser),
        Box::new(leaf::SliderParser),
        Box::new(leaf::ParticleParser),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/parser/registry.rs"]
mod tests;
