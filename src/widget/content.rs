//! Kind-specific widget payloads.

use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    assets::{
        fonts::{BitmapFont, LabelStyle},
        texture::{Drawable, TextureRegion},
    },
    foundation::core::{Rgba8, Size},
};

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum HAlign {
    /// Left edge.
    Left,
    /// Centered.
    Center,
    /// Right edge.
    Right,
}

/// Vertical text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum VAlign {
    /// Top edge.
    Top,
    /// Centered.
    Center,
    /// Bottom edge.
    Bottom,
}

/// Text alignment; an axis stays `None` when the authored value is unrecognised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TextAlign {
    /// Horizontal alignment.
    pub horizontal: Option<HAlign>,
    /// Vertical alignment.
    pub vertical: Option<VAlign>,
}

impl TextAlign {
    /// Parse editor alignment strings (`HT_Left`, `VT_Top`, ...).
    ///
    /// Vertical values are also accepted with the `HT_` prefix, which some exports use.
    pub fn parse(horizontal: &str, vertical: &str) -> Self {
        let horizontal = match horizontal {
            "HT_Left" => Some(HAlign::Left),
            "HT_Center" => Some(HAlign::Center),
            "HT_Right" => Some(HAlign::Right),
            _ => None,
        };
        let vertical = match vertical {
            "VT_Top" | "HT_Top" => Some(VAlign::Top),
            "VT_Center" | "HT_Center" => Some(VAlign::Center),
            "VT_Bottom" | "HT_Bottom" => Some(VAlign::Bottom),
            _ => None,
        };
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Text drawn with a TrueType font.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Text content.
    pub text: String,
    /// Font and color.
    pub style: LabelStyle,
    /// Alignment inside the widget bounds.
    pub align: TextAlign,
}

/// Text drawn with a bitmap font.
#[derive(Clone, Debug)]
pub struct BitmapLabel {
    /// Text content.
    pub text: String,
    /// Font glyphs.
    pub font: Arc<BitmapFont>,
}

/// Text drawn from a fixed-width character map image.
#[derive(Clone, Debug)]
pub struct AtlasLabel {
    /// Text content.
    pub text: String,
    /// Character map, `None` when it could not be resolved.
    pub charmap: Option<Arc<TextureRegion>>,
    /// Glyph cell width.
    pub char_width: u32,
    /// Glyph cell height.
    pub char_height: u32,
    /// Character of the first cell.
    pub start_char: char,
}

/// Image widget payload.
#[derive(Clone, Debug, Default)]
pub struct Image {
    /// What to draw; `None` draws nothing.
    pub drawable: Option<Drawable>,
}

/// Push button.
#[derive(Clone, Debug, Default)]
pub struct Button {
    /// Normal state.
    pub up: Option<Drawable>,
    /// Pressed state.
    pub down: Option<Drawable>,
    /// Disabled state.
    pub disabled: Option<Drawable>,
    /// Caption, when authored.
    pub caption: Option<Label>,
}

/// Two-state check box.
#[derive(Clone, Debug, Default)]
pub struct CheckBox {
    /// Background.
    pub background: Option<Drawable>,
    /// Background while pressed.
    pub background_pressed: Option<Drawable>,
    /// Background while disabled.
    pub background_disabled: Option<Drawable>,
    /// Check mark.
    pub check: Option<Drawable>,
    /// Check mark while disabled.
    pub check_disabled: Option<Drawable>,
    /// Initial state.
    pub checked: bool,
}

/// Editable single-line text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextField {
    /// Initial text.
    pub text: String,
    /// Hint shown while empty.
    pub placeholder: String,
    /// Font and color.
    pub style: LabelStyle,
    /// Maximum length when capped.
    pub max_length: Option<u32>,
    /// Mask character when the field hides its content.
    pub password_char: Option<char>,
}

/// Fill direction of a loading bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum BarDirection {
    /// Fills from the left edge.
    #[default]
    LeftToRight,
    /// Fills from the right edge.
    RightToLeft,
}

/// Progress bar.
#[derive(Clone, Debug, Default)]
pub struct LoadingBar {
    /// Bar image.
    pub image: Option<Drawable>,
    /// Progress, `0..=100`.
    pub percent: u8,
    /// Fill direction.
    pub direction: BarDirection,
}

/// Slider with a draggable knob.
#[derive(Clone, Debug, Default)]
pub struct Slider {
    /// Track.
    pub track: Option<Drawable>,
    /// Filled part of the track.
    pub progress: Option<Drawable>,
    /// Knob.
    pub knob: Option<Drawable>,
    /// Knob while pressed.
    pub knob_pressed: Option<Drawable>,
    /// Knob while disabled.
    pub knob_disabled: Option<Drawable>,
    /// Value, `0..=100`.
    pub percent: u8,
}

/// Background and clipping shared by panels and scroll views.
#[derive(Clone, Debug, Default)]
pub struct Panel {
    /// Solid background color, when the panel fills its bounds.
    pub background_color: Option<Rgba8>,
    /// Background image.
    pub background_image: Option<Drawable>,
    /// Whether children are clipped to the panel bounds.
    pub clip: bool,
}

/// Scroll axes of a scroll view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum ScrollDirection {
    /// Vertical scrolling.
    #[default]
    Vertical,
    /// Horizontal scrolling.
    Horizontal,
    /// Both axes.
    Both,
}

impl ScrollDirection {
    /// Parse the editor direction string; unknown values scroll vertically.
    pub fn parse(s: &str) -> Self {
        match s {
            "Horizontal" => Self::Horizontal,
            "Vertical_Horizontal" | "Both" => Self::Both,
            _ => Self::Vertical,
        }
    }
}

/// Scrollable container.
#[derive(Clone, Debug, Default)]
pub struct ScrollView {
    /// Background and clipping.
    pub panel: Panel,
    /// Size of the scrolled content.
    pub inner_size: Size,
    /// Scroll axes.
    pub direction: ScrollDirection,
    /// Whether scrolling bounces at the edges.
    pub bounce: bool,
}

/// Payload of a built widget, one variant per supported kind family.
#[derive(Clone, Debug)]
pub enum WidgetContent {
    /// Plain grouping node.
    Node,
    /// Full-screen layer.
    Layer,
    /// Panel container.
    Panel(Panel),
    /// Scroll container.
    ScrollView(ScrollView),
    /// Instance of another document; its root is built as the first child.
    ProjectNode {
        /// Nested document file.
        source: PathBuf,
    },
    /// Image view.
    Image(Image),
    /// Sprite.
    Sprite(Image),
    /// TrueType text.
    Label(Label),
    /// Bitmap-font text.
    BitmapLabel(BitmapLabel),
    /// Character-map text.
    AtlasLabel(AtlasLabel),
    /// Button.
    Button(Button),
    /// Check box.
    CheckBox(CheckBox),
    /// Text input.
    TextField(TextField),
    /// Loading bar.
    LoadingBar(LoadingBar),
    /// Slider.
    Slider(Slider),
    /// Particle emitter; the effect file is resolved but not loaded.
    Particle {
        /// Effect file, `None` when not authored.
        effect: Option<PathBuf>,
    },
    /// Payload produced by a caller-registered parser.
    Custom(Arc<dyn std::any::Any + Send + Sync>),
}

impl WidgetContent {
    /// Short lowercase label of the variant, used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Layer => "layer",
            Self::Panel(_) => "panel",
            Self::ScrollView(_) => "scroll_view",
            Self::ProjectNode { .. } => "project_node",
            Self::Image(_) => "image",
            Self::Sprite(_) => "sprite",
            Self::Label(_) => "label",
            Self::BitmapLabel(_) => "bitmap_label",
            Self::AtlasLabel(_) => "atlas_label",
            Self::Button(_) => "button",
            Self::CheckBox(_) => "check_box",
            Self::TextField(_) => "text_field",
            Self::LoadingBar(_) => "loading_bar",
            Self::Slider(_) => "slider",
            Self::Particle { .. } => "particle",
            Self::Custom(_) => "custom",
        }
    }

    /// Primary drawable, for kinds that have one.
    pub fn drawable(&self) -> Option<&Drawable> {
        match self {
            Self::Image(i) | Self::Sprite(i) => i.drawable.as_ref(),
            Self::Button(b) => b.up.as_ref(),
            Self::CheckBox(c) => c.background.as_ref(),
            Self::LoadingBar(l) => l.image.as_ref(),
            Self::Slider(s) => s.track.as_ref(),
            Self::Panel(p) => p.background_image.as_ref(),
            Self::ScrollView(s) => s.panel.background_image.as_ref(),
            _ => None,
        }
    }

    /// Displayed text, for text-bearing kinds.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Label(l) => Some(&l.text),
            Self::BitmapLabel(l) => Some(&l.text),
            Self::AtlasLabel(l) => Some(&l.text),
            Self::TextField(t) => Some(&t.text),
            Self::Button(b) => b.caption.as_ref().map(|c| c.text.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/content.rs"]
mod tests;
