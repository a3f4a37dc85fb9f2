//! Attributes every widget shares, applied after its kind-specific construction.

use crate::{
    build::context::BuildContext,
    document::model::NodeDescription,
    foundation::{
        core::{Point, Size, Vec2},
        error::UiResult,
    },
    widget::{
        content::WidgetContent,
        tree::{Placement, Touchable, Widget, WidgetId},
    },
};

/// Editor rotation (clockwise degrees) converted to counter-clockwise degrees.
///
/// Equal X and Y skews describe a plain rotation and take precedence over `Rotation`.
pub fn editor_rotation(node: &NodeDescription) -> f64 {
    let mut rotation = 0.0;
    if node.rotation != 0.0 {
        rotation = 360.0 - node.rotation % 360.0;
    }
    if node.rotation_skew_x != 0.0 && node.rotation_skew_x == node.rotation_skew_y {
        rotation = 360.0 - node.rotation_skew_x % 360.0;
    }
    rotation
}

/// Geometry of a node: origin at `anchor * size`, position moved so the anchor lands on the
/// authored position.
pub fn placement_for(node: &NodeDescription) -> Placement {
    let size = Size::new(node.size.x, node.size.y);
    let origin = Point::new(
        node.anchor_point.scale_x * size.width,
        node.anchor_point.scale_y * size.height,
    );
    Placement {
        position: Point::new(node.position.x - origin.x, node.position.y - origin.y),
        size,
        origin,
        scale: Vec2::new(node.scale.scale_x, node.scale.scale_y),
        rotation: editor_rotation(node),
    }
}

/// Touch participation: authored touch wins, otherwise containers pass touches to children.
pub fn touchable_for(node: &NodeDescription, is_group: bool) -> Touchable {
    if node.touch_enable {
        Touchable::Enabled
    } else if is_group {
        Touchable::ChildrenOnly
    } else {
        Touchable::Disabled
    }
}

/// Build the widget around `content`, register it in the indices, and attach it to `parent`.
pub fn attach_common(
    ctx: &mut BuildContext<'_>,
    node: &NodeDescription,
    content: WidgetContent,
    parent: Option<WidgetId>,
    is_group: bool,
) -> WidgetId {
    let mut widget = Widget::new(node.ctype.clone(), content);
    widget.name = node.name.clone();
    widget.tag = node.tag;
    widget.action_tag = node.action_tag;
    widget.placement = placement_for(node);
    widget.color = node.color();
    widget.visible = node.visible_for_frame;
    widget.touchable = touchable_for(node, is_group);
    ctx.attach(widget, parent)
}

/// Dispatch every child of `node` under `id`, in document order.
pub fn dispatch_children(
    ctx: &mut BuildContext<'_>,
    node: &NodeDescription,
    id: WidgetId,
) -> UiResult<()> {
    for child in &node.children {
        ctx.dispatch(Some(id), child)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/parser/common.rs"]
mod tests;
