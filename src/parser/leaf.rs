//! Parsers for widgets that draw something themselves.

use crate::{
    build::context::BuildContext,
    document::model::{NodeDescription, editor_color},
    foundation::{core::Rgba8, error::UiResult},
    parser::WidgetParser,
    widget::content::{
        AtlasLabel, BarDirection, BitmapLabel, Button, CheckBox, Image, Label, LoadingBar, Slider,
        TextAlign, TextField, WidgetContent,
    },
};

fn percent(v: i32) -> u8 {
    v.clamp(0, 100) as u8
}

/// `ImageViewObjectData`: a single drawable.
pub struct ImageViewParser;

impl WidgetParser for ImageViewParser {
    fn kind_tag(&self) -> &str {
        "ImageViewObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        let drawable = ctx.drawable(node, node.file_data.as_ref())?;
        Ok(WidgetContent::Image(Image { drawable }))
    }
}

/// `SpriteObjectData`: a single drawable, kept distinct from image views.
pub struct SpriteParser;

impl WidgetParser for SpriteParser {
    fn kind_tag(&self) -> &str {
        "SpriteObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        let drawable = ctx.drawable(node, node.file_data.as_ref())?;
        Ok(WidgetContent::Sprite(Image { drawable }))
    }
}

/// `TextObjectData`: TrueType label.
pub struct TextParser;

impl WidgetParser for TextParser {
    fn kind_tag(&self) -> &str {
        "TextObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        // The label color ignores node alpha; alpha applies to the widget tint.
        let color = editor_color(node.c_color.as_ref(), 0);
        Ok(WidgetContent::Label(Label {
            text: node.label_text.clone(),
            style: ctx.label_style(node, color),
            align: TextAlign::parse(
                &node.horizontal_alignment_type,
                &node.vertical_alignment_type,
            ),
        }))
    }
}

/// `TextBMFontObjectData`: bitmap-font label.
pub struct TextBmFontParser;

impl WidgetParser for TextBmFontParser {
    fn kind_tag(&self) -> &str {
        "TextBMFontObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        Ok(WidgetContent::BitmapLabel(BitmapLabel {
            text: node.label_text.clone(),
            font: ctx.bitmap_font(node),
        }))
    }
}

/// `TextAtlasObjectData`: fixed-width glyph cells cut from one image.
pub struct TextAtlasParser;

impl WidgetParser for TextAtlasParser {
    fn kind_tag(&self) -> &str {
        "TextAtlasObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        let charmap = ctx
            .resolver_mut()
            .resolve_file_region(node, node.label_atlas_file_image.as_ref())?;
        Ok(WidgetContent::AtlasLabel(AtlasLabel {
            text: node.label_text.clone(),
            charmap,
            char_width: node.char_width,
            char_height: node.char_height,
            start_char: node.start_char.chars().next().unwrap_or('0'),
        }))
    }
}

/// `ButtonObjectData`: three state images and an optional caption.
pub struct ButtonParser;

impl WidgetParser for ButtonParser {
    fn kind_tag(&self) -> &str {
        "ButtonObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        let up = ctx.drawable(node, node.normal_file_data.as_ref())?;
        let down = ctx.drawable(node, node.pressed_file_data.as_ref())?;
        let disabled = ctx.drawable(node, node.disabled_file_data.as_ref())?;
        let caption = if node.button_text.is_empty() {
            None
        } else {
            let color = node
                .text_color
                .as_ref()
                .map_or(Rgba8::WHITE, |c| editor_color(Some(c), 0));
            Some(Label {
                text: node.button_text.clone(),
                style: ctx.label_style(node, color),
                align: TextAlign::parse("HT_Center", "VT_Center"),
            })
        };
        Ok(WidgetContent::Button(Button {
            up,
            down,
            disabled,
            caption,
        }))
    }
}

/// `CheckBoxObjectData`.
pub struct CheckBoxParser;

impl WidgetParser for CheckBoxParser {
    fn kind_tag(&self) -> &str {
        "CheckBoxObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        Ok(WidgetContent::CheckBox(CheckBox {
            background: ctx.drawable(node, node.normal_back_file_data.as_ref())?,
            background_pressed: ctx.drawable(node, node.pressed_back_file_data.as_ref())?,
            background_disabled: ctx.drawable(node, node.disable_back_file_data.as_ref())?,
            check: ctx.drawable(node, node.node_normal_file_data.as_ref())?,
            check_disabled: ctx.drawable(node, node.node_disable_file_data.as_ref())?,
            checked: node.checked_state,
        }))
    }
}

/// `TextFieldObjectData`.
pub struct TextFieldParser;

impl WidgetParser for TextFieldParser {
    fn kind_tag(&self) -> &str {
        "TextFieldObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        let color = editor_color(node.c_color.as_ref(), 0);
        Ok(WidgetContent::TextField(TextField {
            text: node.label_text.clone(),
            placeholder: node.place_holder_text.clone(),
            style: ctx.label_style(node, color),
            max_length: node.max_length_enable.then_some(node.max_length_text),
            password_char: node
                .password_enable
                .then(|| node.password_style_text.chars().next().unwrap_or('*')),
        }))
    }
}

/// `LoadingBarObjectData`.
pub struct LoadingBarParser;

impl WidgetParser for LoadingBarParser {
    fn kind_tag(&self) -> &str {
        "LoadingBarObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        let direction = if node.progress_type == "Right_To_Left" {
            BarDirection::RightToLeft
        } else {
            BarDirection::LeftToRight
        };
        Ok(WidgetContent::LoadingBar(LoadingBar {
            image: ctx.drawable(node, node.image_file_data.as_ref())?,
            percent: percent(node.progress_info),
            direction,
        }))
    }
}

/// `SliderObjectData`.
pub struct SliderParser;

impl WidgetParser for SliderParser {
    fn kind_tag(&self) -> &str {
        "SliderObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        Ok(WidgetContent::Slider(Slider {
            track: ctx.drawable(node, node.back_ground_data.as_ref())?,
            progress: ctx.drawable(node, node.progress_bar_data.as_ref())?,
            knob: ctx.drawable(node, node.ball_normal_data.as_ref())?,
            knob_pressed: ctx.drawable(node, node.ball_pressed_data.as_ref())?,
            knob_disabled: ctx.drawable(node, node.ball_disabled_data.as_ref())?,
            percent: percent(node.percent_info),
        }))
    }
}

/// `ParticleObjectData`: records where the effect file lives.
pub struct ParticleParser;

impl WidgetParser for ParticleParser {
    fn kind_tag(&self) -> &str {
        "ParticleObjectData"
    }

    fn construct(
        &self,
        ctx: &mut BuildContext<'_>,
        node: &NodeDescription,
    ) -> UiResult<WidgetContent> {
        let effect = node
            .file_data
            .as_ref()
            .filter(|f| !f.path.is_empty())
            .map(|f| ctx.resolver().resource_path(&f.path));
        Ok(WidgetContent::Particle { effect })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parser/leaf.rs"]
mod tests;
