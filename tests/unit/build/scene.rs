use super::*;
use crate::{
    animation::action::{Action, MoveTo},
    foundation::core::Point,
    widget::content::WidgetContent,
};

fn widget(name: &str) -> Widget {
    let mut w = Widget::new("SingleNodeObjectData", WidgetContent::Node);
    w.name = name.to_string();
    w
}

fn sequence(x: f64) -> ActionSequence {
    let mut seq = ActionSequence::new();
    seq.push(Action::MoveTo(MoveTo {
        target: Point::new(x, 0.0),
        duration: 1.0,
        curve: None,
    }));
    seq
}

fn scene() -> UiScene {
    let mut tree = WidgetTree::new();
    let mut names = NameIndex::default();
    let root = tree.insert(widget("root"), None);
    let a = tree.insert(widget("item"), Some(root));
    let b = tree.insert(widget("item"), Some(root));
    for (name, id) in [("root", root), ("item", a), ("item", b)] {
        names.insert(name.to_string(), id);
    }

    UiScene {
        tree,
        root: Some(root),
        names,
        action_widgets: BTreeMap::from([(1, a), (2, b)]),
        actions: BTreeMap::from([(2, sequence(5.0)), (9, sequence(7.0))]),
    }
}

#[test]
fn name_index_keeps_first_and_all() {
    let s = scene();
    let index = s.name_index();
    assert_eq!(index.len(), 2);
    assert_eq!(index.names().collect::<Vec<_>>(), ["root", "item"]);
    assert_eq!(index.first("item"), Some(WidgetId(1)));
    assert_eq!(index.all("item"), &[WidgetId(1), WidgetId(2)]);
    assert!(index.all("nope").is_empty());
    assert!(index.first("nope").is_none());
}

#[test]
fn finds_widgets_by_name() {
    let s = scene();
    assert_eq!(s.root().unwrap().name, "root");
    assert_eq!(s.root_id(), Some(WidgetId(0)));

    let first = s.find_widget("item").unwrap();
    assert_eq!(first.parent(), Some(WidgetId(0)));
    assert_eq!(s.find_widgets("item").len(), 2);
    assert!(s.find_widget("missing").is_none());
    assert_eq!(s.widget(WidgetId(2)).unwrap().name, "item");
}

#[test]
fn actions_are_looked_up_by_tag() {
    let s = scene();
    assert_eq!(s.find_action(2), Some(&sequence(5.0)));
    assert!(s.find_action(1).is_none());
    assert_eq!(s.actions().len(), 2);
    assert_eq!(s.action_widget(1), Some(WidgetId(1)));
}

#[test]
fn bound_actions_skip_tags_without_widgets() {
    let s = scene();
    let bound: Vec<_> = s.bound_actions().collect();
    assert_eq!(bound.len(), 1);
    assert_eq!(bound[0].0, WidgetId(2));
    assert_eq!(bound[0].1, &sequence(5.0));
}

#[test]
fn empty_index() {
    let index = NameIndex::default();
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
}
