//! Parsers for grouping widgets.

use std::path::PathBuf;

use crate::{
    build::context::BuildContext,
    document::model::{NodeDescription, editor_color},
    foundation::{
        core::Size,
        diag::Severity,
        error::{UiError, UiResult},
    },
    parser::{WidgetParser, common},
    widget::{
        content::{Panel, ScrollDirection, ScrollView, WidgetContent},
        tree::WidgetId,
    },
};

/// Plain grouping node (`SingleNodeObjectData`, and the scene root kind).
pub struct NodeParser {
    kind: &'static str,
}

impl NodeParser {
    /// Parser registered under `kind`.
    pub const fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl WidgetParser for NodeParser {
    fn kind_tag(&self) -> &str {
        self.kind
    }

    fn construct(&self, _: &mut BuildContext<'_>, _: &NodeDescription) -> UiResult<WidgetContent> {
        Ok(WidgetContent::Node)
    }

    fn is_group(&self) -> bool {
        true
    }
}

/// Layer (`LayerObjectData`, and the layer root kind).
pub struct LayerParser {
    kind: &'static str,
}

impl LayerParser {
    /// Parser registered under `kind`.
    pub const fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl WidgetParser for LayerParser {
    fn kind_tag(&self) -> &str {
        self.kind
    }

    fn construct(&self, _: &mut BuildContext<'_>, _: &NodeDescription) -> UiResult<WidgetContent> {
        Ok(WidgetContent::Layer)
    }

    fn is_group(&self) -> bool {
        true
    }
}

fn panel_for(ctx: &mut BuildContext<'_>, node: &NodeDescription) -> UiResult<Panel> {
    // 0: no fill, 1: solid, 2: gradient (drawn with its start color).
    let background_color = (node.combo_box_index != 0).then(|| {
        editor_color(node.single_color.as_ref(), 0)
            .with_alpha(node.back_color_alpha.clamp(0, 255) as u8)
    });
    Ok(Panel {
        background_color,
        background_image: ctx.drawable(node, node.back_ground_image_data.as_ref())?,
        clip: node.clip_able,
    })
}

/// `PanelObjectData`.
pub struct PanelParser;

impl WidgetParser for PanelParser {
    fn kind_tag(&self) -> &str {
        "PanelObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        Ok(WidgetContent::Panel(panel_for(ctx, node)?))
    }

    fn is_group(&self) -> bool {
        true
    }
}

/// `ScrollViewObjectData`.
pub struct ScrollViewParser;

impl WidgetParser for ScrollViewParser {
    fn kind_tag(&self) -> &str {
        "ScrollViewObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        let inner = node.inner_node_size;
        let inner_size = if inner.width > 0.0 && inner.height > 0.0 {
            Size::new(inner.width, inner.height)
        } else {
            Size::new(node.size.x, node.size.y)
        };
        Ok(WidgetContent::ScrollView(ScrollView {
            panel: panel_for(ctx, node)?,
            inner_size,
            direction: ScrollDirection::parse(&node.scroll_direction_type),
            bounce: node.is_bounce_enabled,
        }))
    }

    fn is_group(&self) -> bool {
        true
    }
}

/// `ProjectNodeObjectData`: instance of another exported document.
///
/// The nested document's root is built as the first child, followed by any authored children.
/// Nested animations are not merged into the scene's action map.
pub struct ProjectNodeParser;

impl ProjectNodeParser {
    fn source(ctx: &BuildContext<'_>, node: &NodeDescription) -> UiResult<PathBuf> {
        match node.file_data.as_ref().filter(|f| !f.path.is_empty()) {
            Some(f) => Ok(ctx.resolver().resource_path(&f.path)),
            None => Err(UiError::validation("project node without a file reference")),
        }
    }
}

impl WidgetParser for ProjectNodeParser {
    fn kind_tag(&self) -> &str {
        "ProjectNodeObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        Ok(WidgetContent::ProjectNode {
            source: Self::source(ctx, node)?,
        })
    }

    fn is_group(&self) -> bool {
        true
    }

    fn attach_children(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
        id: WidgetId,
    ) -> UiResult<()> {
        let source = match &ctx.tree()[id].content {
            WidgetContent::ProjectNode { source } => source.clone(),
            _ => return common::dispatch_children(ctx, node, id),
        };
        match ctx.build_nested(id, &source) {
            Ok(_) => {}
            Err(e) if !e.is_fatal() => {
                ctx.report(node, Severity::Error, format!("nested document skipped: {e}"));
            }
            Err(e) => return Err(e),
        }
        common::dispatch_children(ctx, node, id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parser/container.rs"]
mod tests;
