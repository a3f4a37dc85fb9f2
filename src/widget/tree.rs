use crate::{
    foundation::core::{Affine, Point, Rgba8, Size, Vec2},
    widget::content::WidgetContent,
};

/// Index of a widget inside its [`WidgetTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct WidgetId(pub(crate) usize);

impl WidgetId {
    /// Position in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a widget takes part in touch handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Touchable {
    /// The widget and its children receive touches.
    Enabled,
    /// Neither the widget nor its children receive touches.
    Disabled,
    /// Only the children receive touches.
    ChildrenOnly,
}

/// Resolved geometry of a widget in its parent's space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Bottom-left corner (authored position minus origin).
    pub position: Point,
    /// Content size.
    pub size: Size,
    /// Rotation and scale pivot, relative to `position`.
    pub origin: Point,
    /// Scale factors.
    pub scale: Vec2,
    /// Counter-clockwise rotation in degrees.
    pub rotation: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            size: Size::ZERO,
            origin: Point::ZERO,
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
        }
    }
}

impl Placement {
    /// Local-to-parent transform: scale and rotate about the origin, then translate.
    pub fn local_transform(&self) -> Affine {
        let origin = self.origin.to_vec2();
        Affine::translate(self.position.to_vec2() + origin)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
            * Affine::translate(-origin)
    }
}

/// One built widget.
#[derive(Clone, Debug)]
pub struct Widget {
    /// Kind tag it was built from.
    pub kind: String,
    /// Authored name.
    pub name: String,
    /// Authored tag.
    pub tag: i32,
    /// Action tag binding it to animation timelines.
    pub action_tag: i32,
    /// Geometry.
    pub placement: Placement,
    /// Tint.
    pub color: Rgba8,
    /// Visibility.
    pub visible: bool,
    /// Touch participation.
    pub touchable: Touchable,
    /// Kind-specific payload.
    pub content: WidgetContent,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
}

impl Widget {
    /// Detached widget of the given kind with default attributes.
    pub fn new(kind: impl Into<String>, content: WidgetContent) -> Self {
        Self {
            kind: kind.into(),
            name: String::new(),
            tag: 0,
            action_tag: 0,
            placement: Placement::default(),
            color: Rgba8::WHITE,
            visible: true,
            touchable: Touchable::Enabled,
            content,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Containing widget, `None` for the root.
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Children in attachment order.
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }
}

/// Arena owning every widget of a built scene.
#[derive(Clone, Debug, Default)]
pub struct WidgetTree {
    nodes: Vec<Widget>,
}

impl WidgetTree {
    /// Empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no widgets.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Store `widget`, appending it to `parent`'s children when given.
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this tree.
    pub fn insert(&mut self, mut widget: Widget, parent: Option<WidgetId>) -> WidgetId {
        let id = WidgetId(self.nodes.len());
        widget.parent = parent;
        widget.children.clear();
        self.nodes.push(widget);
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        id
    }

    /// Widget by id.
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.nodes.get(id.0)
    }

    /// Mutable widget by id.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.nodes.get_mut(id.0)
    }

    /// Children of `id` (empty for unknown ids).
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        match self.get(id) {
            Some(w) => &w.children,
            None => &[],
        }
    }

    /// Parent of `id`.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.get(id)?.parent
    }

    /// `id` and all of its descendants, depth first, in document order.
    pub fn descendants(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if self.get(next).is_none() {
                continue;
            }
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Number of ancestors above `id`.
    pub fn depth(&self, id: WidgetId) -> usize {
        let mut depth = 0;
        let mut cur = self.parent(id);
        while let Some(p) = cur {
            depth += 1;
            cur = self.parent(p);
        }
        depth
    }

    /// Transform from `id`'s local space to the root's parent space.
    pub fn world_transform(&self, id: WidgetId) -> Affine {
        let mut t = Affine::IDENTITY;
        let mut cur = Some(id);
        while let Some(c) = cur {
            let Some(w) = self.get(c) else {
                break;
            };
            t = w.placement.local_transform() * t;
            cur = w.parent;
        }
        t
    }

    /// All widgets with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &Widget)> {
        self.nodes.iter().enumerate().map(|(i, w)| (WidgetId(i), w))
    }
}

impl std::ops::Index<WidgetId> for WidgetTree {
    type Output = Widget;

    fn index(&self, id: WidgetId) -> &Widget {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/tree.rs"]
mod tests;
