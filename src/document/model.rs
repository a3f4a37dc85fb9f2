//! Serde model of the editor's JSON export.
//!
//! Only the fields the loader consumes are modelled. Unknown fields are ignored and every field
//! has a default, so partially filled nodes still deserialize.

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Rgba8, channel_u8};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ExportDef {
    #[serde(rename = "Content", alias = "content")]
    pub(crate) content: ContentDef,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ContentDef {
    #[serde(rename = "Content", alias = "content")]
    pub(crate) content: SceneDef,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SceneDef {
    #[serde(rename = "ObjectData", alias = "objectData")]
    pub(crate) object_data: Option<NodeDescription>,
    #[serde(rename = "Animation", alias = "animation")]
    pub(crate) animation: AnimationBlock,
}

/// 2D value authored as `{"X": .., "Y": ..}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XyDef {
    /// Horizontal component.
    #[serde(rename = "X", alias = "x")]
    pub x: f64,
    /// Vertical component.
    #[serde(rename = "Y", alias = "y")]
    pub y: f64,
}

/// Scale factors authored as `{"ScaleX": .., "ScaleY": ..}`; missing components are 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleDef {
    /// Horizontal component.
    #[serde(rename = "ScaleX")]
    pub scale_x: f64,
    /// Vertical component.
    #[serde(rename = "ScaleY")]
    pub scale_y: f64,
}

impl Default for ScaleDef {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Anchor authored as `{"ScaleX": .., "ScaleY": ..}`; missing components are 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorDef {
    /// Horizontal fraction of the size.
    #[serde(rename = "ScaleX")]
    pub scale_x: f64,
    /// Vertical fraction of the size.
    #[serde(rename = "ScaleY")]
    pub scale_y: f64,
}

/// Size authored as `{"Width": .., "Height": ..}` (scroll view inner size).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidthHeightDef {
    /// Width in points.
    #[serde(rename = "Width")]
    pub width: f64,
    /// Height in points.
    #[serde(rename = "Height")]
    pub height: f64,
}

/// Color authored with 0–255 integer channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorDef {
    /// Alpha channel (rarely set; node `Alpha` is authoritative).
    #[serde(rename = "A")]
    pub a: i32,
    /// Red channel.
    #[serde(rename = "R")]
    pub r: i32,
    /// Green channel.
    #[serde(rename = "G")]
    pub g: i32,
    /// Blue channel.
    #[serde(rename = "B")]
    pub b: i32,
}

/// Reference to an external resource file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileData {
    /// Resource origin as exported (`Normal`, `Default`, `MarkedSubImage`, …).
    #[serde(rename = "Type")]
    pub kind: String,
    /// Path relative to the document directory.
    #[serde(rename = "Path")]
    pub path: String,
    /// Plist the image was packed from, when any.
    #[serde(rename = "Plist")]
    pub plist: String,
}

/// One node of the exported widget tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NodeDescription {
    /// Widget kind tag, e.g. `ImageViewObjectData`.
    #[serde(rename = "ctype", alias = "Ctype")]
    pub ctype: String,
    /// Node name; duplicates are allowed.
    pub name: String,
    /// Editor tag.
    pub tag: i32,
    /// Tag binding the node to animation timelines.
    pub action_tag: i32,

    /// Content size.
    pub size: XyDef,
    /// Position of the anchor point in parent space.
    pub position: XyDef,
    /// Anchor as a fraction of the size.
    pub anchor_point: AnchorDef,
    /// Scale factors.
    pub scale: ScaleDef,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Horizontal skew in degrees.
    pub rotation_skew_x: f64,
    /// Vertical skew in degrees.
    pub rotation_skew_y: f64,
    /// Visibility.
    pub visible_for_frame: bool,
    /// Whether the node receives touches.
    pub touch_enable: bool,
    #[serde(rename = "CColor")]
    /// Tint color.
    pub c_color: Option<ColorDef>,
    /// Opacity 0–255; zero means "not authored".
    pub alpha: i32,
    /// Mirror horizontally.
    pub flip_x: bool,
    /// Mirror vertically.
    pub flip_y: bool,

    /// Enable nine-patch scaling of the image.
    pub scale9_enable: bool,
    /// Cap-inset rectangle X.
    pub scale9_origin_x: f64,
    /// Cap-inset rectangle Y.
    pub scale9_origin_y: f64,
    /// Cap-inset rectangle width.
    pub scale9_width: f64,
    /// Cap-inset rectangle height.
    pub scale9_height: f64,

    /// Primary image (or particle / nested project file).
    pub file_data: Option<FileData>,
    /// TTF font reference.
    pub font_resource: Option<FileData>,
    #[serde(rename = "LabelBMFontFile_CNB")]
    /// Bitmap font reference.
    pub label_bm_font_file: Option<FileData>,
    /// Text content.
    pub label_text: String,
    /// Font size in points.
    pub font_size: u32,
    /// Horizontal text alignment (`HT_*`).
    pub horizontal_alignment_type: String,
    /// Vertical text alignment (`VT_*`).
    pub vertical_alignment_type: String,

    // Button
    /// Button image in the normal state.
    pub normal_file_data: Option<FileData>,
    /// Button image in the pressed state.
    pub pressed_file_data: Option<FileData>,
    /// Button image in the disabled state.
    pub disabled_file_data: Option<FileData>,
    /// Button caption.
    pub button_text: String,
    /// Caption color.
    pub text_color: Option<ColorDef>,

    // CheckBox
    /// Check box background.
    pub normal_back_file_data: Option<FileData>,
    /// Check box background while pressed.
    pub pressed_back_file_data: Option<FileData>,
    /// Check box background while disabled.
    pub disable_back_file_data: Option<FileData>,
    /// Check mark.
    pub node_normal_file_data: Option<FileData>,
    /// Check mark while disabled.
    pub node_disable_file_data: Option<FileData>,
    /// Initial checked state.
    pub checked_state: bool,

    // LoadingBar
    /// Loading bar image.
    pub image_file_data: Option<FileData>,
    /// Loading bar percent.
    pub progress_info: i32,
    /// Loading bar direction (`Left_To_Right` / `Right_To_Left`).
    pub progress_type: String,

    // Slider
    /// Slider track.
    pub back_ground_data: Option<FileData>,
    /// Slider filled part.
    pub progress_bar_data: Option<FileData>,
    /// Slider knob.
    pub ball_normal_data: Option<FileData>,
    /// Slider knob while pressed.
    pub ball_pressed_data: Option<FileData>,
    /// Slider knob while disabled.
    pub ball_disabled_data: Option<FileData>,
    /// Slider percent.
    pub percent_info: i32,

    // TextField
    /// Text field placeholder.
    pub place_holder_text: String,
    /// Whether the text field length is capped.
    pub max_length_enable: bool,
    /// Text field length cap.
    pub max_length_text: u32,
    /// Mask the text field content.
    pub password_enable: bool,
    /// Mask character.
    pub password_style_text: String,

    // TextAtlas
    #[serde(rename = "LabelAtlasFileImage_CNB")]
    /// Character map image of an atlas label.
    pub label_atlas_file_image: Option<FileData>,
    /// Atlas label glyph width.
    pub char_width: u32,
    /// Atlas label glyph height.
    pub char_height: u32,
    /// First character of the atlas label map.
    pub start_char: String,

    // Panel / ScrollView
    /// Container background image.
    pub back_ground_image_data: Option<FileData>,
    /// Container background mode (0 none, 1 solid, 2 gradient).
    pub combo_box_index: i32,
    /// Container solid background color.
    pub single_color: Option<ColorDef>,
    /// Container background opacity.
    pub back_color_alpha: i32,
    /// Clip children to the container bounds.
    pub clip_able: bool,
    /// Scroll view content size.
    pub inner_node_size: WidthHeightDef,
    /// Scroll direction (`Vertical`, `Horizontal`, `Vertical_Horizontal`).
    pub scroll_direction_type: String,
    /// Scroll view bounce.
    pub is_bounce_enabled: bool,

    /// Children in document order.
    pub children: Vec<NodeDescription>,
}

impl Default for NodeDescription {
    fn default() -> Self {
        Self {
            ctype: String::new(),
            name: String::new(),
            tag: 0,
            action_tag: 0,
            size: XyDef::default(),
            position: XyDef::default(),
            anchor_point: AnchorDef::default(),
            scale: ScaleDef::default(),
            rotation: 0.0,
            rotation_skew_x: 0.0,
            rotation_skew_y: 0.0,
            visible_for_frame: true,
            touch_enable: false,
            c_color: None,
            alpha: 0,
            flip_x: false,
            flip_y: false,
            scale9_enable: false,
            scale9_origin_x: 0.0,
            scale9_origin_y: 0.0,
            scale9_width: 0.0,
            scale9_height: 0.0,
            file_data: None,
            font_resource: None,
            label_bm_font_file: None,
            label_text: String::new(),
            font_size: 20,
            horizontal_alignment_type: String::new(),
            vertical_alignment_type: String::new(),
            normal_file_data: None,
            pressed_file_data: None,
            disabled_file_data: None,
            button_text: String::new(),
            text_color: None,
            normal_back_file_data: None,
            pressed_back_file_data: None,
            disable_back_file_data: None,
            node_normal_file_data: None,
            node_disable_file_data: None,
            checked_state: false,
            image_file_data: None,
            progress_info: 0,
            progress_type: String::new(),
            back_ground_data: None,
            progress_bar_data: None,
            ball_normal_data: None,
            ball_pressed_data: None,
            ball_disabled_data: None,
            percent_info: 0,
            place_holder_text: String::new(),
            max_length_enable: false,
            max_length_text: 10,
            password_enable: false,
            password_style_text: "*".to_string(),
            label_atlas_file_image: None,
            char_width: 0,
            char_height: 0,
            start_char: String::new(),
            back_ground_image_data: None,
            combo_box_index: 0,
            single_color: None,
            back_color_alpha: 255,
            clip_able: false,
            inner_node_size: WidthHeightDef::default(),
            scroll_direction_type: String::new(),
            is_bounce_enabled: false,
            children: Vec::new(),
        }
    }
}

impl NodeDescription {
    /// Build a bare node of the given kind; used by programmatic callers and tests.
    pub fn new(ctype: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ctype: ctype.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a child and return `self` for chaining.
    pub fn with_child(mut self, child: NodeDescription) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(NodeDescription::count_nodes)
            .sum::<usize>()
    }

    /// Tint from `CColor` combined with the node `Alpha`.
    pub fn color(&self) -> Rgba8 {
        editor_color(self.c_color.as_ref(), self.alpha)
    }
}

/// Editor color rule: an all-zero RGB means "not authored" and yields white; a non-zero alpha
/// overrides the opacity, otherwise it stays opaque.
pub fn editor_color(color: Option<&ColorDef>, alpha: i32) -> Rgba8 {
    let mut out = match color {
        Some(c) if c.r != 0 || c.g != 0 || c.b != 0 => {
            Rgba8::new(channel_u8(c.r), channel_u8(c.g), channel_u8(c.b), 255)
        }
        _ => Rgba8::WHITE,
    };
    if alpha != 0 {
        out.a = channel_u8(alpha);
    }
    out
}

/// Animation block of a document.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationBlock {
    /// Total duration in frames.
    #[serde(rename = "Duration", alias = "duration")]
    pub duration: f64,
    /// Playback speed factor.
    #[serde(rename = "Speed", alias = "speed")]
    pub speed: f64,
    /// Property timelines in document order.
    #[serde(rename = "Timelines", alias = "timelines")]
    pub timelines: Vec<TimelineDef>,
}

impl Default for AnimationBlock {
    fn default() -> Self {
        Self {
            duration: 0.0,
            speed: 1.0,
            timelines: Vec::new(),
        }
    }
}

/// One property channel bound to a node through its action tag.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineDef {
    /// Frame payload type as exported (`PointFrame`, `ScaleFrame`, …).
    #[serde(rename = "FrameType", alias = "frameType")]
    pub frame_type: String,
    /// Action tag of the animated node.
    #[serde(rename = "ActionTag", alias = "actionTag")]
    pub action_tag: i32,
    /// Animated property, e.g. `Position`.
    #[serde(rename = "Property", alias = "property")]
    pub property: String,
    /// Keyframes in document order.
    #[serde(rename = "Frames", alias = "frames")]
    pub frames: Vec<FrameDef>,
}

/// One keyframe.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameDef {
    /// Frame index on the timeline (must be non-negative).
    #[serde(rename = "FrameIndex", alias = "frameIndex")]
    pub frame_index: i64,
    /// Whether the editor tweens toward this frame.
    #[serde(rename = "Tween", alias = "tween")]
    pub tween: bool,
    /// Target X.
    #[serde(rename = "X", alias = "x")]
    pub x: f64,
    /// Target Y.
    #[serde(rename = "Y", alias = "y")]
    pub y: f64,
    /// Easing selection.
    #[serde(rename = "EasingData", alias = "easingData")]
    pub easing: EasingDef,
}

/// Easing selection of a keyframe.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EasingDef {
    /// Integer easing code (see [`crate::curve_for`]).
    #[serde(rename = "Type", alias = "type")]
    pub kind: i32,
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
