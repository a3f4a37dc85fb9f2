use super::*;

#[test]
fn node_defaults_match_editor_defaults() {
    let node: NodeDescription = serde_json::from_str(r#"{"ctype":"SpriteObjectData"}"#).unwrap();
    assert_eq!(node.ctype, "SpriteObjectData");
    assert!(node.visible_for_frame);
    assert_eq!(node.scale, ScaleDef::default());
    assert_eq!(node.anchor_point.scale_x, 0.0);
    assert_eq!(node.alpha, 0);
    assert!(node.c_color.is_none());
    assert!(node.children.is_empty());
}

#[test]
fn pascal_case_fields_and_unknown_keys() {
    let node: NodeDescription = serde_json::from_str(
        r#"{
            "ctype": "TextObjectData",
            "Name": "title",
            "ActionTag": 42,
            "Size": {"X": 100, "Y": 20},
            "Position": {"X": 5, "Y": 6},
            "AnchorPoint": {"ScaleX": 0.5, "ScaleY": 0.5},
            "CColor": {"R": 10, "G": 20, "B": 30},
            "Alpha": 128,
            "LabelText": "hi",
            "LabelBMFontFile_CNB": {"Type": "Normal", "Path": "fonts/a.fnt"},
            "HorizontalAlignmentType": "HT_Center",
            "SomethingTheLoaderIgnores": [1, 2, 3]
        }"#,
    )
    .unwrap();

    assert_eq!(node.name, "title");
    assert_eq!(node.action_tag, 42);
    assert_eq!(node.size, XyDef { x: 100.0, y: 20.0 });
    assert_eq!(node.anchor_point.scale_y, 0.5);
    assert_eq!(node.c_color.unwrap().g, 20);
    assert_eq!(node.label_bm_font_file.unwrap().path, "fonts/a.fnt");
    assert_eq!(node.horizontal_alignment_type, "HT_Center");
}

#[test]
fn partial_anchor_and_scale_fill_their_own_defaults() {
    let node: NodeDescription = serde_json::from_str(
        r#"{
            "ctype": "SpriteObjectData",
            "AnchorPoint": {},
            "Scale": {"ScaleY": 0.5},
            "Children": [{"ctype": "SpriteObjectData", "AnchorPoint": {"ScaleY": 0.5}}]
        }"#,
    )
    .unwrap();

    assert_eq!(node.anchor_point, AnchorDef::default());
    assert_eq!(node.anchor_point.scale_x, 0.0);
    assert_eq!(node.scale.scale_x, 1.0);
    assert_eq!(node.scale.scale_y, 0.5);

    let child = &node.children[0];
    assert_eq!((child.anchor_point.scale_x, child.anchor_point.scale_y), (0.0, 0.5));
}

#[test]
fn count_nodes_includes_descendants() {
    let root = NodeDescription::new("LayerObjectData", "root")
        .with_child(NodeDescription::new("SpriteObjectData", "a"))
        .with_child(
            NodeDescription::new("PanelObjectData", "p")
                .with_child(NodeDescription::new("TextObjectData", "t")),
        );
    assert_eq!(root.count_nodes(), 4);
}

#[test]
fn animation_block_accepts_camel_case_aliases() {
    let block: AnimationBlock = serde_json::from_str(
        r#"{
            "duration": 60,
            "speed": 0.5,
            "timelines": [
                {"property": "Position", "actionTag": 7, "frames": [
                    {"frameIndex": 30, "x": 1.5, "y": -2, "easingData": {"type": 3}}
                ]}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(block.duration, 60.0);
    assert_eq!(block.speed, 0.5);
    let tl = &block.timelines[0];
    assert_eq!(tl.action_tag, 7);
    assert_eq!(tl.frames[0].frame_index, 30);
    assert_eq!(tl.frames[0].easing.kind, 3);
}

#[test]
fn animation_speed_defaults_to_one() {
    let block: AnimationBlock = serde_json::from_str(r#"{"Duration": 10}"#).unwrap();
    assert_eq!(block.speed, 1.0);
    assert!(block.timelines.is_empty());
}

#[test]
fn editor_color_rule() {
    let black = ColorDef::default();
    assert_eq!(editor_color(Some(&black), 0), Rgba8::WHITE);
    assert_eq!(editor_color(None, 0), Rgba8::WHITE);
    assert_eq!(editor_color(None, 64), Rgba8::new(255, 255, 255, 64));

    let red = ColorDef {
        a: 0,
        r: 255,
        g: 0,
        b: 0,
    };
    assert_eq!(editor_color(Some(&red), 0), Rgba8::new(255, 0, 0, 255));
    assert_eq!(editor_color(Some(&red), 300), Rgba8::new(255, 0, 0, 255));
    assert_eq!(editor_color(Some(&red), 128).a, 128);
}
